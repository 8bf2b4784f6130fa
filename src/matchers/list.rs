//! The `List` matcher: targets are matched in their literal order.
//!
//! `Cons(ph, pt)` peels one element off the front. `Join(pa, pb)` is every
//! `(prefix, suffix)` split, shortest to longest, produced lazily as "commit
//! here" / "grow the prefix and keep looking" via a private [`JoinCursor`].

use std::rc::Rc;

use crate::bindings::Bindings;
use crate::matcher::{Matcher, MatcherOutcome, MatchingAtom, UserTag};
use crate::pattern::{self, Pattern};
use crate::seq::Seq;
use crate::value::Value;

#[derive(Debug)]
struct List {
    inner: Rc<dyn Matcher>,
}

/// A matcher for sequences matched in their given order.
pub fn list(inner: Rc<dyn Matcher>) -> Rc<dyn Matcher> {
    Rc::new(List { inner })
}

/// Threaded between successive `Join` calls: prefix already peeled off, and
/// what remains unexamined.
#[derive(Debug, Clone)]
struct JoinCursor {
    prefix: Vec<Value>,
    remaining: Seq,
}

impl PartialEq for JoinCursor {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Matcher for List {
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
                let seq = target
                    .downcast_ref::<Seq>()
                    .expect("List's target must be a Seq");
                match seq.head_tail() {
                    None => MatcherOutcome::Alternatives(vec![]),
                    Some((head, tail)) => MatcherOutcome::Alternatives(vec![vec![
                        MatchingAtom::new(ph.clone(), self.inner.clone(), head),
                        MatchingAtom::new(pt.clone(), self_matcher.clone(), Value::new(tail)),
                    ]]),
                }
            }

            UserTag::Join => {
                let (pa, pb) = (&args[0], &args[1]);
                let cursor = match target.downcast_ref::<Seq>() {
                    Some(seq) => JoinCursor {
                        prefix: Vec::new(),
                        remaining: seq.clone(),
                    },
                    None => target
                        .downcast_ref::<JoinCursor>()
                        .cloned()
                        .expect("List's Join target must be a Seq or a JoinCursor"),
                };

                let mut alts = vec![vec![
                    MatchingAtom::new(
                        pa.clone(),
                        self_matcher.clone(),
                        Value::new(Seq::from_vec(cursor.prefix.clone())),
                    ),
                    MatchingAtom::new(
                        pb.clone(),
                        self_matcher.clone(),
                        Value::new(cursor.remaining.clone()),
                    ),
                ]];

                if let Some((head, tail)) = cursor.remaining.head_tail() {
                    let mut next_prefix = cursor.prefix;
                    next_prefix.push(head);
                    let next = JoinCursor {
                        prefix: next_prefix,
                        remaining: tail,
                    };
                    alts.push(vec![MatchingAtom::new(
                        pattern::join(pa.clone(), pb.clone()),
                        self_matcher.clone(),
                        Value::new(next),
                    )]);
                }

                MatcherOutcome::Alternatives(alts)
            }
        }
    }
}
