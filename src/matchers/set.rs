//! The `Set` matcher: one alternative per *distinct* element, with the tail
//! always the entire original set — unlike `Multiset`, picking a head never
//! removes it.
//!
//! A private [`SetCursor`] threads distinctness bookkeeping between calls:
//! values already offered, the original target, and how far the scan has got.

use std::rc::Rc;

use crate::bindings::Bindings;
use crate::matcher::{Matcher, MatcherOutcome, MatchingAtom, UserTag};
use crate::matchers::support;
use crate::pattern::{self, Pattern};
use crate::seq::Seq;
use crate::value::Value;

#[derive(Debug)]
struct Set {
    inner: Rc<dyn Matcher>,
}

/// A matcher for sequences matched as a set: duplicate elements in the
/// underlying representation collapse to one alternative, and choosing a
/// head never shrinks what the tail sees.
pub fn set(inner: Rc<dyn Matcher>) -> Rc<dyn Matcher> {
    Rc::new(Set { inner })
}

#[derive(Debug, Clone)]
struct SetCursor {
    full: Seq,
    seen: Vec<Value>,
    remaining: Seq,
}

impl PartialEq for SetCursor {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Matcher for Set {
    fn decompose(
        &self,
        tag: UserTag,
        args: &[Pattern],
        _bindings: &Bindings,
        target: &Value,
        self_matcher: &Rc<dyn Matcher>,
    ) -> MatcherOutcome {
        match tag {
            UserTag::Cons => {
                let (ph, pt) = (&args[0], &args[1]);
                let cursor = match target.downcast_ref::<Seq>() {
                    Some(seq) => SetCursor {
                        full: seq.clone(),
                        seen: Vec::new(),
                        remaining: seq.clone(),
                    },
                    None => target
                        .downcast_ref::<SetCursor>()
                        .cloned()
                        .expect("Set's Cons target must be a Seq or a SetCursor"),
                };

                match cursor.remaining.head_tail() {
                    None => MatcherOutcome::Alternatives(vec![]),
                    Some((head, tail)) => {
                        let already_seen = support::contains(&cursor.seen, &head);
                        let mut next_seen = cursor.seen;
                        let mut alts = Vec::new();

                        if !already_seen {
                            alts.push(vec![
                                MatchingAtom::new(ph.clone(), self.inner.clone(), head.clone()),
                                MatchingAtom::new(
                                    pt.clone(),
                                    self_matcher.clone(),
                                    Value::new(cursor.full.clone()),
                                ),
                            ]);
                            next_seen.push(head);
                        }

                        let next = SetCursor {
                            full: cursor.full,
                            seen: next_seen,
                            remaining: tail,
                        };
                        alts.push(vec![MatchingAtom::new(
                            pattern::cons(ph.clone(), pt.clone()),
                            self_matcher.clone(),
                            Value::new(next),
                        )]);

                        MatcherOutcome::Alternatives(alts)
                    }
                }
            }

            UserTag::Join => {
                let (pa, pb) = (&args[0], &args[1]);
                let seq = match target.downcast_ref::<Seq>() {
                    Some(seq) => seq.clone(),
                    None => {
                        let cursor = target
                            .downcast_ref::<SetCursor>()
                            .expect("Set's Join target must be a Seq or a SetCursor");
                        cursor.full.clone()
                    }
                };
                let mut elems = Vec::new();
                for v in support::force_to_vec(&seq) {
                    if !support::contains(&elems, &v) {
                        elems.push(v);
                    }
                }
                MatcherOutcome::Alternatives(support::unordered_join_alts(
                    &elems,
                    pa,
                    pb,
                    self_matcher,
                ))
            }
        }
    }
}
