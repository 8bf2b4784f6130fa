//! The search driver: fair breadth-first and depth-first enumeration over
//! the state space seeded by a pattern/matcher/target triple, plus the
//! three top-level entry points this crate exposes (`match_first`,
//! `match_all`, `match_dfs`).

use std::collections::VecDeque;
use std::rc::Rc;

use crate::bindings::Bindings;
use crate::config::SearchConfig;
use crate::error::MatchError;
use crate::matcher::{Matcher, MatchingAtom};
use crate::pattern::Pattern;
use crate::state::{self, MatchingState, StepOutcome};
use crate::value::Value;

/// One `(pattern, body)` pair. `body` runs against a solution's bindings
/// once its pattern has matched.
pub struct Clause<T> {
    pattern: Pattern,
    body: Rc<dyn Fn(&Bindings) -> T>,
}

impl<T> Clause<T> {
    pub fn new(pattern: Pattern, body: impl Fn(&Bindings) -> T + 'static) -> Self {
        Clause {
            pattern,
            body: Rc::new(body),
        }
    }
}

impl<T> Clone for Clause<T> {
    fn clone(&self) -> Self {
        Clause {
            pattern: self.pattern.clone(),
            body: self.body.clone(),
        }
    }
}

/// Fair breadth-first enumeration: the frontier is a FIFO, so every finite
/// solution is reached even when a sibling branch is infinite.
struct FairSearch {
    frontier: VecDeque<MatchingState>,
    steps_left: Option<usize>,
}

impl Iterator for FairSearch {
    type Item = Bindings;

    fn next(&mut self) -> Option<Bindings> {
        loop {
            if self.steps_left == Some(0) {
                return None;
            }
            let state = self.frontier.pop_front()?;
            if let Some(budget) = &mut self.steps_left {
                *budget -= 1;
            }
            match state::step(state) {
                StepOutcome::Solution(b) => return Some(b),
                StepOutcome::Branches(next) => self.frontier.extend(next),
            }
        }
    }
}

/// Depth-first enumeration over the pattern's choice tree. The frontier is
/// a stack; alternatives are pushed in reverse so the first one produced is
/// the first one popped.
struct DfsSearch {
    stack: Vec<MatchingState>,
    steps_left: Option<usize>,
}

impl Iterator for DfsSearch {
    type Item = Bindings;

    fn next(&mut self) -> Option<Bindings> {
        loop {
            if self.steps_left == Some(0) {
                return None;
            }
            let state = self.stack.pop()?;
            if let Some(budget) = &mut self.steps_left {
                *budget -= 1;
            }
            match state::step(state) {
                StepOutcome::Solution(b) => return Some(b),
                StepOutcome::Branches(mut next) => {
                    next.reverse();
                    self.stack.extend(next);
                }
            }
        }
    }
}

fn seed(pattern: Pattern, matcher: Rc<dyn Matcher>, target: Value) -> MatchingState {
    MatchingState::seed(MatchingAtom::new(pattern, matcher, target))
}

fn fair_solutions(
    pattern: Pattern,
    matcher: Rc<dyn Matcher>,
    target: Value,
    step_budget: Option<usize>,
) -> FairSearch {
    let mut frontier = VecDeque::new();
    frontier.push_back(seed(pattern, matcher, target));
    FairSearch {
        frontier,
        steps_left: step_budget,
    }
}

fn dfs_solutions(
    pattern: Pattern,
    matcher: Rc<dyn Matcher>,
    target: Value,
    step_budget: Option<usize>,
) -> DfsSearch {
    DfsSearch {
        stack: vec![seed(pattern, matcher, target)],
        steps_left: step_budget,
    }
}

/// Evaluates the body of the first clause with a solution against `target`,
/// depth-first. Fails with [`MatchError::NoMatch`] if every clause's
/// solution stream is empty.
pub fn match_first<T>(
    target: Value,
    matcher: Rc<dyn Matcher>,
    clauses: &[Clause<T>],
) -> Result<T, MatchError> {
    for clause in clauses {
        let mut solutions =
            dfs_solutions(clause.pattern.clone(), matcher.clone(), target.clone(), None);
        if let Some(bindings) = solutions.next() {
            return Ok((clause.body)(&bindings));
        }
    }
    Err(MatchError::NoMatch)
}

/// Concatenates every clause's fair-BFS solution stream, projected through
/// that clause's body. Lazy.
pub fn match_all<T: 'static>(
    target: Value,
    matcher: Rc<dyn Matcher>,
    clauses: Vec<Clause<T>>,
) -> Box<dyn Iterator<Item = T>> {
    match_all_with(SearchConfig::fair(), target, matcher, clauses)
}

/// Same as [`match_all`] but each clause's solutions are enumerated
/// depth-first instead of fair-breadth-first.
pub fn match_dfs<T: 'static>(
    target: Value,
    matcher: Rc<dyn Matcher>,
    clauses: Vec<Clause<T>>,
) -> Box<dyn Iterator<Item = T>> {
    match_all_with(SearchConfig::depth_first(), target, matcher, clauses)
}

/// Like [`match_all`]/[`match_dfs`], but with fairness and step budget
/// chosen explicitly via [`SearchConfig`]. A step budget ends the stream
/// early rather than erroring.
pub fn match_all_with<T: 'static>(
    config: SearchConfig,
    target: Value,
    matcher: Rc<dyn Matcher>,
    clauses: Vec<Clause<T>>,
) -> Box<dyn Iterator<Item = T>> {
    let fair = config.is_fair();
    let step_budget = config.step_budget();
    Box::new(clauses.into_iter().flat_map(move |clause| {
        let body = clause.body.clone();
        let solutions: Box<dyn Iterator<Item = Bindings>> = if fair {
            Box::new(fair_solutions(
                clause.pattern,
                matcher.clone(),
                target.clone(),
                step_budget,
            ))
        } else {
            Box::new(dfs_solutions(
                clause.pattern,
                matcher.clone(),
                target.clone(),
                step_budget,
            ))
        };
        solutions.map(move |bindings| body(&bindings))
    }))
}
