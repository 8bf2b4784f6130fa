//! The `Multiset` matcher: a target matched as a bag — any element may be
//! the head, with the rest (in original order) left as the tail.
//!
//! `Cons(ph, pt)` offers one alternative per element, enumerated
//! positionally: "commit to the element in hand" or "skip it, keep
//! looking," threaded via a private [`MultisetCursor`] so this stays safe
//! over an infinite target. `Join` enumerates every sub-bag, which needs the
//! whole bag in hand, so it forces the target first (`support::force_to_vec`).

use std::rc::Rc;

use crate::bindings::Bindings;
use crate::matcher::{Matcher, MatcherOutcome, MatchingAtom, UserTag};
use crate::matchers::support;
use crate::pattern::{self, Pattern};
use crate::seq::Seq;
use crate::value::Value;

#[derive(Debug)]
struct Multiset {
    inner: Rc<dyn Matcher>,
}

/// A matcher for sequences matched without regard to order.
pub fn multiset(inner: Rc<dyn Matcher>) -> Rc<dyn Matcher> {
    Rc::new(Multiset { inner })
}

/// Threaded between successive `Cons` calls: elements already passed over
/// (`skipped`, original order) and what's left to examine.
#[derive(Debug, Clone)]
struct MultisetCursor {
    skipped: Vec<Value>,
    remaining: Seq,
}

impl PartialEq for MultisetCursor {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Matcher for Multiset {
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
                    Some(seq) => MultisetCursor {
                        skipped: Vec::new(),
                        remaining: seq.clone(),
                    },
                    None => target
                        .downcast_ref::<MultisetCursor>()
                        .cloned()
                        .expect("Multiset's Cons target must be a Seq or a MultisetCursor"),
                };

                match cursor.remaining.head_tail() {
                    None => MatcherOutcome::Alternatives(vec![]),
                    Some((head, tail)) => {
                        let merged = support::prepend_all(cursor.skipped.clone(), tail.clone());
                        let mut alts = vec![vec![
                            MatchingAtom::new(ph.clone(), self.inner.clone(), head.clone()),
                            MatchingAtom::new(
                                pt.clone(),
                                self_matcher.clone(),
                                Value::new(merged),
                            ),
                        ]];

                        let mut next_skipped = cursor.skipped;
                        next_skipped.push(head);
                        let next = MultisetCursor {
                            skipped: next_skipped,
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
                            .downcast_ref::<MultisetCursor>()
                            .expect("Multiset's Join target must be a Seq or a MultisetCursor");
                        support::prepend_all(cursor.skipped.clone(), cursor.remaining.clone())
                    }
                };
                let elems = support::force_to_vec(&seq);
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
