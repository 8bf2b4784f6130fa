//! The pattern algebra.
//!
//! `Pattern` is a thin, cheaply-clonable handle (`Rc<PatternKind>`) over the
//! recursive tree of pattern formers. No former evaluates anything at
//! construction time — `ValueEq`/`Predicate`/`Later`/`Lambda` capture their
//! closures by reference and only call them while a state is being expanded
//! (`state.rs`).

use std::fmt;
use std::rc::Rc;

use derivative::Derivative;

use crate::bindings::Bindings;
use crate::matcher::UserTag;
use crate::value::Value;

/// A node in the pattern tree. Cloning is an `Rc` clone.
#[derive(Clone)]
pub struct Pattern(Rc<PatternKind>);

#[derive(Derivative)]
#[derivative(Debug)]
pub(crate) enum PatternKind {
    Wildcard,
    VarBind(Option<&'static str>),
    ValueEq(#[derivative(Debug = "ignore")] Rc<dyn Fn(&Bindings) -> Value>),
    Predicate(#[derivative(Debug = "ignore")] Rc<dyn Fn(&Bindings, &Value) -> bool>),
    And(Pattern, Pattern),
    Or(Pattern, Pattern),
    Not(Pattern),
    /// Returns `None` when the bindings it needs aren't bound yet.
    Later(#[derivative(Debug = "ignore")] Rc<dyn Fn(&Bindings) -> Option<Value>>),
    Lambda(#[derivative(Debug = "ignore")] Rc<dyn Fn(&Bindings) -> Value>),
    User(UserTag, Vec<Pattern>),
}

impl Pattern {
    pub(crate) fn kind(&self) -> &PatternKind {
        &self.0
    }

    fn new(kind: PatternKind) -> Self {
        Pattern(Rc::new(kind))
    }

    /// Number of values this pattern contributes to `Bindings` when it matches.
    pub fn arity(&self) -> usize {
        match &*self.0 {
            PatternKind::Wildcard => 0,
            PatternKind::VarBind(_) => 1,
            PatternKind::ValueEq(_) => 0,
            PatternKind::Predicate(_) => 0,
            PatternKind::And(p, q) => p.arity() + q.arity(),
            // checked for real in state.rs when the atom expands, not here
            PatternKind::Or(p, _q) => p.arity(),
            PatternKind::Not(_) => 0,
            PatternKind::Later(_) => 0,
            PatternKind::Lambda(_) => 0,
            PatternKind::User(_, args) => args.iter().map(Pattern::arity).sum(),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Matches anything, binds nothing.
pub fn wildcard() -> Pattern {
    Pattern::new(PatternKind::Wildcard)
}

/// Binds the whole target to the next binding slot. `name` is advisory only.
pub fn var_bind(name: &'static str) -> Pattern {
    Pattern::new(PatternKind::VarBind(Some(name)))
}

/// Like [`var_bind`] but with no advisory name.
pub fn var() -> Pattern {
    Pattern::new(PatternKind::VarBind(None))
}

/// Matches iff the target equals `expr(bindings)`.
pub fn value_eq(expr: impl Fn(&Bindings) -> Value + 'static) -> Pattern {
    Pattern::new(PatternKind::ValueEq(Rc::new(expr)))
}

/// Matches iff `pred(bindings, target)` holds. Binds nothing.
pub fn predicate(pred: impl Fn(&Bindings, &Value) -> bool + 'static) -> Pattern {
    Pattern::new(PatternKind::Predicate(Rc::new(pred)))
}

/// `p` matches, then `q` matches the same target under `p`'s bindings.
pub fn and(p: Pattern, q: Pattern) -> Pattern {
    Pattern::new(PatternKind::And(p, q))
}

/// The union of `p`'s and `q`'s alternatives. Both must have equal arity.
pub fn or(p: Pattern, q: Pattern) -> Pattern {
    Pattern::new(PatternKind::Or(p, q))
}

/// Matches iff `p` has no solution under the current bindings. `p` must
/// itself bind nothing.
pub fn not(p: Pattern) -> Pattern {
    Pattern::new(PatternKind::Not(p))
}

/// A value-equality pattern deferred until a sibling to its right has bound
/// what `expr` needs; `expr` returns `None` while not yet ready.
pub fn later(expr: impl Fn(&Bindings) -> Option<Value> + 'static) -> Pattern {
    Pattern::new(PatternKind::Later(Rc::new(expr)))
}

/// A pure value pattern, matched by equality, with no deferral semantics.
pub fn lambda(expr: impl Fn(&Bindings) -> Value + 'static) -> Pattern {
    Pattern::new(PatternKind::Lambda(Rc::new(expr)))
}

/// `head :: tail` decomposition, dispatched to whichever matcher the
/// enclosing atom carries.
pub fn cons(head: Pattern, tail: Pattern) -> Pattern {
    Pattern::new(PatternKind::User(UserTag::Cons, vec![head, tail]))
}

/// Every `(prefix, suffix)` split of the target, dispatched to whichever
/// matcher the enclosing atom carries.
pub fn join(prefix: Pattern, suffix: Pattern) -> Pattern {
    Pattern::new(PatternKind::User(UserTag::Join, vec![prefix, suffix]))
}
