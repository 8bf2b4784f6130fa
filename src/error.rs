//! Error kinds for the matching engine.
//!
//! Only [`MatchError::NoMatch`] is ever returned from the public API; the
//! other variants denote malformed patterns or matcher implementations and
//! are raised at expansion time via `panic!` rather than threaded through a
//! `Result`.

use crate::matcher::UserTag;

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// No clause's pattern produced a solution against the target.
    #[error("no clause matched the target")]
    NoMatch,

    /// An `Or`'s two branches bind a different number of variables.
    #[error("`Or` branches bind different arities: {left} vs {right}")]
    ArityMismatch { left: usize, right: usize },

    /// A `User` pattern former was directed at a matcher that does not
    /// implement it, e.g. `Cons` against `Something`.
    #[error("pattern former {tag:?} is not supported by matcher `{matcher}`")]
    UnsupportedPattern { tag: UserTag, matcher: String },

    /// Every atom remaining in a state is a `Later` whose dependencies will
    /// never resolve. Not currently raised by the reference driver, which
    /// prunes such branches silently instead; kept for parity with the
    /// error taxonomy.
    #[error("deferred pattern(s) can never resolve: no sibling binding ever becomes available")]
    Deadlock,
}
