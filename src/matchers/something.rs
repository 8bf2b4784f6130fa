//! The trivial matcher: every target is opaque. `Something` never
//! decomposes anything, so a target wrapped for it can only be matched by
//! the pattern formers `state.rs` handles directly — any `User` pattern
//! against it is a static mismatch.

use std::rc::Rc;

use crate::bindings::Bindings;
use crate::matcher::{Matcher, MatcherOutcome, UserTag};
use crate::pattern::Pattern;
use crate::value::Value;

#[derive(Debug)]
struct Something;

/// The matcher to reach for when a target has no structure worth
/// decomposing — an opaque identifier, a number, anything only ever
/// compared by equality or bound to a variable.
pub fn something() -> Rc<dyn Matcher> {
    Rc::new(Something)
}

impl Matcher for Something {
    fn decompose(
        &self,
        _tag: UserTag,
        _args: &[Pattern],
        _bindings: &Bindings,
        _target: &Value,
        _self_matcher: &Rc<dyn Matcher>,
    ) -> MatcherOutcome {
        MatcherOutcome::Unsupported
    }
}
