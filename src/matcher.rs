//! The matcher protocol: how a target's shape gets decomposed under a
//! `User` pattern former. The engine dispatches to it only for `User`;
//! every other pattern former is handled generically by `state.rs`.

use std::fmt;
use std::rc::Rc;

use crate::bindings::Bindings;
use crate::pattern::Pattern;
use crate::value::Value;

/// Which structural pattern former a `User` pattern names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserTag {
    /// `head :: tail`-shaped decomposition.
    Cons,
    /// Split a sequence into every `(prefix, suffix)` pair.
    Join,
}

impl fmt::Display for UserTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single unresolved match obligation: a pattern, the matcher that knows
/// how to decompose its target, and the target itself.
#[derive(Clone)]
pub struct MatchingAtom {
    pub pattern: Pattern,
    pub matcher: Rc<dyn Matcher>,
    pub target: Value,
}

impl MatchingAtom {
    pub fn new(pattern: Pattern, matcher: Rc<dyn Matcher>, target: Value) -> Self {
        MatchingAtom {
            pattern,
            matcher,
            target,
        }
    }
}

impl fmt::Debug for MatchingAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchingAtom")
            .field("pattern", &self.pattern)
            .field("matcher", &self.matcher)
            .field("target", &self.target)
            .finish()
    }
}

/// What a matcher hands back when asked to decompose a `User` pattern
/// former against a target.
pub enum MatcherOutcome {
    /// A finite list of alternatives; each alternative is itself a list of
    /// new atoms whose conjunction is equivalent to the original `User`
    /// pattern matching. An empty outer list means "no alternative matches".
    Alternatives(Vec<Vec<MatchingAtom>>),
    /// This matcher does not implement `tag` at all (e.g. `Cons` against
    /// `Something`). Turned into [`crate::error::MatchError::UnsupportedPattern`]
    /// and panicked, since this is a static mismatch between a pattern and
    /// the matcher it was written against.
    Unsupported,
}

/// The extension point matcher authors implement. Implementations must be
/// total: return an empty [`MatcherOutcome::Alternatives`] rather than
/// panicking on a target that simply doesn't match.
pub trait Matcher: fmt::Debug {
    /// `self_matcher` is `self` as an `Rc`, so a container matcher can put
    /// itself back into the atoms it spawns (e.g. `List`'s tail atom is
    /// matched against `List` again).
    fn decompose(
        &self,
        tag: UserTag,
        args: &[Pattern],
        bindings: &Bindings,
        target: &Value,
        self_matcher: &Rc<dyn Matcher>,
    ) -> MatcherOutcome;
}
