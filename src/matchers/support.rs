//! Small helpers shared by the container matchers' "commit here, or keep
//! looking" cursors. Not part of the public API.

use std::rc::Rc;

use itertools::Itertools;

use crate::matcher::{Matcher, MatchingAtom};
use crate::pattern::Pattern;
use crate::seq::Seq;
use crate::value::Value;

/// Rebuilds `seq` with every element of `prefix` pushed back in front, in order.
pub(super) fn prepend_all(prefix: Vec<Value>, seq: Seq) -> Seq {
    prefix
        .into_iter()
        .rev()
        .fold(seq, |tail, head| Seq::cons(head, tail))
}

/// Forces a `Seq` to the end and collects it. Only safe on known-finite targets.
pub(super) fn force_to_vec(seq: &Seq) -> Vec<Value> {
    let mut out = Vec::new();
    let mut cur = seq.clone();
    while let Some((h, t)) = cur.head_tail() {
        out.push(h);
        cur = t;
    }
    out
}

pub(super) fn contains(values: &[Value], v: &Value) -> bool {
    values.iter().any(|x| x == v)
}

/// Every way to split `elems` into an (unordered) prefix bag and suffix bag
/// whose union is `elems`, as `2^n` alternatives.
pub(super) fn unordered_join_alts(
    elems: &[Value],
    prefix: &Pattern,
    suffix: &Pattern,
    matcher: &Rc<dyn Matcher>,
) -> Vec<Vec<MatchingAtom>> {
    let n = elems.len();
    debug_assert!(n < usize::BITS as usize, "bag too large to enumerate subsets of");
    let subset_count = 1usize << n;
    (0..subset_count)
        .map(|mask| {
            let (prefix_elems, suffix_elems): (Vec<_>, Vec<_>) = elems
                .iter()
                .enumerate()
                .partition_map(|(i, v)| {
                    if mask & (1 << i) != 0 {
                        itertools::Either::Left(v.clone())
                    } else {
                        itertools::Either::Right(v.clone())
                    }
                });
            vec![
                MatchingAtom::new(
                    prefix.clone(),
                    matcher.clone(),
                    Value::new(Seq::from_vec(prefix_elems)),
                ),
                MatchingAtom::new(
                    suffix.clone(),
                    matcher.clone(),
                    Value::new(Seq::from_vec(suffix_elems)),
                ),
            ]
        })
        .collect_vec()
}
