//! The atomic equality matcher: `Eq` is for leaf types — integers,
//! identifiers, anything compared by `==` and never decomposed further.
//! `ValueEq` itself is handled generically in `state.rs`, so `Eq`'s
//! `decompose` only ever rejects `User` pattern formers.

use std::rc::Rc;

use crate::bindings::Bindings;
use crate::matcher::{Matcher, MatcherOutcome, UserTag};
use crate::pattern::Pattern;
use crate::value::Value;

#[derive(Debug)]
struct Eq;

/// The matcher for leaf/atomic targets matched only by `ValueEq`/`Lambda`
/// equality, never by `Cons`/`Join`.
pub fn eq() -> Rc<dyn Matcher> {
    Rc::new(Eq)
}

impl Matcher for Eq {
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
