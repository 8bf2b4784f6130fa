//! A lazy cons-stream: the concrete representation that `List`/`Multiset`/
//! `Set` targets downcast to.
//!
//! This exists so container targets can be infinite. Each cell either
//! terminates the stream or carries a thunk for the rest, so a matcher only
//! ever forces as many elements as the search actually visits.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A possibly-infinite sequence of [`Value`]s.
#[derive(Clone)]
pub enum Seq {
    Nil,
    Cons(Value, Rc<dyn Fn() -> Seq>),
}

impl Seq {
    /// Builds a finite `Seq` from a concrete, already-materialized list.
    pub fn from_vec(items: Vec<Value>) -> Seq {
        items
            .into_iter()
            .rev()
            .fold(Seq::Nil, |tail, head| Seq::cons(head, tail))
    }

    /// Prepends `head` onto an already-built `tail`, without needing a thunk.
    pub fn cons(head: Value, tail: Seq) -> Seq {
        Seq::Cons(head, Rc::new(move || tail.clone()))
    }

    /// Lazily unfolds `f` from `state`; `None` terminates, `Some((v, next))`
    /// produces one element and defers the rest.
    pub fn unfold<S, F>(state: S, f: F) -> Seq
    where
        S: Clone + 'static,
        F: Fn(S) -> Option<(Value, S)> + 'static,
    {
        let f = Rc::new(f);
        Self::unfold_rc(state, f)
    }

    fn unfold_rc<S>(state: S, f: Rc<dyn Fn(S) -> Option<(Value, S)>>) -> Seq
    where
        S: Clone + 'static,
    {
        match f(state.clone()) {
            None => Seq::Nil,
            Some((head, next)) => {
                let f2 = f.clone();
                Seq::Cons(head, Rc::new(move || Seq::unfold_rc(next.clone(), f2.clone())))
            }
        }
    }

    /// Forces one element, returning the head and the still-lazy tail.
    pub fn head_tail(&self) -> Option<(Value, Seq)> {
        match self {
            Seq::Nil => None,
            Seq::Cons(head, thunk) => Some((head.clone(), thunk())),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Seq::Nil)
    }

    /// Forces and collects the whole stream. Does not terminate on an
    /// infinite `Seq`.
    pub fn to_vec(&self) -> Vec<Value> {
        let mut out = Vec::new();
        let mut cur = self.clone();
        while let Some((h, t)) = cur.head_tail() {
            out.push(h);
            cur = t;
        }
        out
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seq::Nil => write!(f, "Seq::Nil"),
            Seq::Cons(head, _) => write!(f, "Seq::Cons({head:?}, ..)"),
        }
    }
}

// Structural equality on a possibly-infinite stream isn't computable;
// always false. Exists only so `Seq` can live inside a `Value`.
impl PartialEq for Seq {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}
