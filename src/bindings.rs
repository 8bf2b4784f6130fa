//! The heterogeneous binding list.
//!
//! Position corresponds to left-to-right order of variable binders
//! encountered while expanding a pattern. Bindings only ever grow; `im::Vector`
//! gives prefix-sharing on extend for free.

use std::fmt;

use crate::value::Value;

/// An ordered, append-only, prefix-sharing sequence of bound values.
#[derive(Clone, Default, PartialEq)]
pub struct Bindings(im::Vector<Value>);

impl Bindings {
    /// The empty binding list, as seeded at the start of a match.
    pub fn empty() -> Self {
        Bindings(im::Vector::new())
    }

    /// Returns a new list with `v` appended, sharing the old list's prefix.
    pub fn append_one(&self, v: Value) -> Self {
        let mut next = self.0.clone();
        next.push_back(v);
        Bindings(next)
    }

    /// Returns a new list with every value in `vs` appended in order.
    pub fn append_many<I: IntoIterator<Item = Value>>(&self, vs: I) -> Self {
        let mut next = self.0.clone();
        for v in vs {
            next.push_back(v);
        }
        Bindings(next)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.0.iter()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
