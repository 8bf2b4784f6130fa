//! The matching state / atom stack.
//!
//! A [`MatchingState`] is a snapshot of one branch of the search: the
//! bindings accumulated so far, plus a stack of still-unresolved atoms.
//! [`step`] pops the top atom, dispatches on its pattern, and returns either
//! a solution or the successor states produced by its alternatives.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::bindings::Bindings;
use crate::matcher::{MatcherOutcome, MatchingAtom};
use crate::pattern::{Pattern, PatternKind};
use crate::value::Value;

// deferrals is only used for the `tracing` event emitted when a state is
// dropped; the drop decision itself is driven by `MatchingState::no_progress`.
#[derive(Clone, Debug)]
struct AtomEntry {
    atom: MatchingAtom,
    deferrals: u32,
}

/// A branch of the search: bindings accumulated so far, and the remaining
/// obligations. The front of `atoms` is the top of the stack.
#[derive(Clone, Debug)]
pub(crate) struct MatchingState {
    pub(crate) bindings: Bindings,
    atoms: VecDeque<AtomEntry>,
    // consecutive `Later` deferrals since an atom last made progress; once
    // this reaches the atom count, every remaining atom is a stalled `Later`.
    no_progress: usize,
}

/// What popping and expanding one atom produced.
pub(crate) enum StepOutcome {
    /// The stack was already empty: `state` itself is a solution.
    Solution(Bindings),
    /// Zero or more successor states, one per alternative. An empty vec
    /// means this branch is dead (no alternative matched, or the
    /// no-progress rule pruned it).
    Branches(Vec<MatchingState>),
}

/// One alternative produced by expanding an atom: the values it binds and
/// the new atoms it pushes ahead of whatever remains on the stack.
struct Alt {
    bind: SmallVec<[Value; 2]>,
    atoms: Vec<MatchingAtom>,
}

impl Alt {
    fn leaf() -> Self {
        Alt {
            bind: SmallVec::new(),
            atoms: Vec::new(),
        }
    }

    fn binding(v: Value) -> Self {
        Alt {
            bind: SmallVec::from_iter([v]),
            atoms: Vec::new(),
        }
    }

    fn spawning(atoms: Vec<MatchingAtom>) -> Self {
        Alt {
            bind: SmallVec::new(),
            atoms,
        }
    }
}

impl MatchingState {
    /// Seeds a state with a single top-level atom and empty bindings.
    pub(crate) fn seed(atom: MatchingAtom) -> Self {
        let mut atoms = VecDeque::new();
        atoms.push_back(AtomEntry {
            atom,
            deferrals: 0,
        });
        MatchingState {
            bindings: Bindings::empty(),
            atoms,
            no_progress: 0,
        }
    }

    pub(crate) fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// Pops and expands the top atom of `state`.
pub(crate) fn step(mut state: MatchingState) -> StepOutcome {
    let Some(mut entry) = state.atoms.pop_front() else {
        return StepOutcome::Solution(state.bindings);
    };

    // `Later` is the one pattern former that doesn't immediately resolve
    // into alternatives — it may instead need to go back on the stack.
    if let PatternKind::Later(f) = entry.atom.pattern.kind() {
        match f(&state.bindings) {
            None => {
                entry.deferrals += 1;
                state.no_progress += 1;
                let dropped = state.no_progress >= state.atoms.len() + 1;
                state.atoms.push_back(entry);
                if dropped {
                    tracing::debug!(
                        deferrals = state.no_progress,
                        "dropping state: deferred pattern(s) made no progress"
                    );
                    return StepOutcome::Branches(vec![]);
                }
                return StepOutcome::Branches(vec![state]);
            }
            Some(expected) => {
                let alt = if entry.atom.target == expected {
                    vec![Alt::leaf()]
                } else {
                    vec![]
                };
                return StepOutcome::Branches(finish(state, alt));
            }
        }
    }

    tracing::trace!(pattern = ?entry.atom.pattern, remaining = state.atoms.len(), "expanding atom");
    let alts = expand(&entry.atom, &state.bindings);
    StepOutcome::Branches(finish(state, alts))
}

/// Alternatives for every pattern former except `Later` (handled in [`step`]).
fn expand(atom: &MatchingAtom, bindings: &Bindings) -> Vec<Alt> {
    let target = &atom.target;
    match atom.pattern.kind() {
        PatternKind::Wildcard => vec![Alt::leaf()],

        PatternKind::VarBind(_) => vec![Alt::binding(target.clone())],

        PatternKind::ValueEq(e) | PatternKind::Lambda(e) => {
            let expected = e(bindings);
            if *target == expected {
                vec![Alt::leaf()]
            } else {
                vec![]
            }
        }

        PatternKind::Predicate(f) => {
            if f(bindings, target) {
                vec![Alt::leaf()]
            } else {
                vec![]
            }
        }

        PatternKind::And(p, q) => {
            let p_atom = MatchingAtom::new(p.clone(), atom.matcher.clone(), target.clone());
            let q_atom = MatchingAtom::new(q.clone(), atom.matcher.clone(), target.clone());
            vec![Alt::spawning(vec![p_atom, q_atom])]
        }

        PatternKind::Or(p, q) => {
            let (pa, qa) = (p.arity(), q.arity());
            if pa != qa {
                panic!(
                    "{}",
                    crate::error::MatchError::ArityMismatch { left: pa, right: qa }
                )
            }
            let p_atom = MatchingAtom::new(p.clone(), atom.matcher.clone(), target.clone());
            let q_atom = MatchingAtom::new(q.clone(), atom.matcher.clone(), target.clone());
            vec![Alt::spawning(vec![p_atom]), Alt::spawning(vec![q_atom])]
        }

        PatternKind::Not(p) => {
            debug_assert_eq!(p.arity(), 0, "`Not`'s inner pattern must bind nothing");
            let inner_atom = MatchingAtom::new(p.clone(), atom.matcher.clone(), target.clone());
            let mut seed = MatchingState::seed(inner_atom);
            seed.bindings = bindings.clone();
            if has_any_solution(seed) {
                vec![]
            } else {
                vec![Alt::leaf()]
            }
        }

        PatternKind::Later(_) => {
            unreachable!("Later is handled directly in `step`")
        }

        PatternKind::User(tag, args) => {
            match atom
                .matcher
                .decompose(*tag, args, bindings, target, &atom.matcher)
            {
                MatcherOutcome::Alternatives(alts) => {
                    alts.into_iter().map(Alt::spawning).collect()
                }
                MatcherOutcome::Unsupported => {
                    panic!(
                        "{}",
                        crate::error::MatchError::UnsupportedPattern {
                            tag: *tag,
                            matcher: format!("{:?}", atom.matcher),
                        }
                    )
                }
            }
        }
    }
}

/// Turns alternatives into successor states: bindings extended, new atoms
/// pushed onto the front, no-progress counter reset.
fn finish(state: MatchingState, alts: Vec<Alt>) -> Vec<MatchingState> {
    alts.into_iter()
        .map(|alt| {
            let bindings = state.bindings.append_many(alt.bind);
            let mut atoms = state.atoms.clone();
            for new_atom in alt.atoms.into_iter().rev() {
                atoms.push_front(AtomEntry {
                    atom: new_atom,
                    deferrals: 0,
                });
            }
            MatchingState {
                bindings,
                atoms,
                no_progress: 0,
            }
        })
        .collect()
}

// `Not`'s one use of the search machinery; kept local rather than shared
// with search.rs so `Not` doesn't need to know about clauses or driver modes.
fn has_any_solution(seed: MatchingState) -> bool {
    let mut frontier = VecDeque::new();
    frontier.push_back(seed);
    while let Some(s) = frontier.pop_front() {
        match step(s) {
            StepOutcome::Solution(_) => return true,
            StepOutcome::Branches(next) => frontier.extend(next),
        }
    }
    false
}
