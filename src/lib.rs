//! A non-linear pattern-matching engine over user-defined data structures.
//!
//! Given a target value, a [`Matcher`] that declares how to decompose
//! values of that type, and a [`Pattern`] built from the combinators in
//! [`pattern`], this crate produces the stream of variable bindings that
//! make the pattern hold against the target — Egison-style matching, where
//! a pattern against a list may match as a *list* ([`matchers::list`]), a
//! *multiset* ([`matchers::multiset`], any order), or a *set*
//! ([`matchers::set`], any subset), and later sub-patterns may refer to
//! bindings earlier ones introduced.

pub mod bindings;
pub mod config;
pub mod error;
pub mod matcher;
pub mod matchers;
pub mod pattern;
mod search;
mod state;
pub mod seq;
pub mod value;

pub use bindings::Bindings;
pub use config::SearchConfig;
pub use error::MatchError;
pub use matcher::{Matcher, MatcherOutcome, MatchingAtom, UserTag};
pub use pattern::{
    and, cons, join, lambda, later, not, or, predicate, value_eq, var, var_bind, wildcard, Pattern,
};
pub use search::{match_all, match_all_with, match_dfs, match_first, Clause};
pub use seq::Seq;
pub use value::Value;
