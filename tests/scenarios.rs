//! The engine's seed test suite, exercised only through the public API
//! (`nlmatch::...`) — no internal module is reached into here, the same
//! boundary a downstream crate would be limited to.

use nlmatch::{
    and, cons, join, lambda, later, not, or, predicate, value_eq, var, wildcard, Bindings, Clause,
    MatchError, Seq, Value,
};

fn int_seq(xs: &[i64]) -> Value {
    Value::new(Seq::from_vec(xs.iter().map(|&n| Value::new(n)).collect()))
}

fn ints(seq: &Seq) -> Vec<i64> {
    seq.to_vec()
        .into_iter()
        .map(|v| *v.downcast_ref::<i64>().unwrap())
        .collect()
}

fn at(b: &Bindings, i: usize) -> i64 {
    *b.get(i).unwrap().downcast_ref::<i64>().unwrap()
}

fn tail_at(b: &Bindings, i: usize) -> Vec<i64> {
    ints(b.get(i).unwrap().downcast_ref::<Seq>().unwrap())
}

// --- Universal properties ----------------------------------------------

#[test]
fn property_wildcard_matches_anything_and_returns_the_target_unchanged() {
    let target = Value::new(42i64);
    let clauses = vec![Clause::new(wildcard(), |b: &Bindings| {
        assert_eq!(b.len(), 0);
        42i64
    })];
    let results: Vec<i64> = nlmatch::match_all(target, nlmatch::matchers::eq(), clauses).collect();
    assert_eq!(results, vec![42]);
}

#[test]
fn property_or_is_left_branch_solutions_then_right_branch_solutions_in_dfs_order() {
    let target = Value::new(2i64);
    let pattern = or(value_eq(|_| Value::new(1i64)), or(
        value_eq(|_| Value::new(2i64)),
        value_eq(|_| Value::new(2i64)),
    ));
    let clauses = vec![Clause::new(pattern, |_: &Bindings| "matched")];
    let results: Vec<&str> =
        nlmatch::match_dfs(target, nlmatch::matchers::eq(), clauses).collect();
    // only the right branch's two (equal) alternatives can match a target of 2
    assert_eq!(results, vec!["matched", "matched"]);
}

#[test]
fn property_and_wildcard_is_identity_for_arity_preserving_patterns() {
    let target = int_seq(&[1, 2, 3]);
    let inner = cons(var(), var());
    let pattern = and(wildcard(), inner);
    let clauses = vec![Clause::new(pattern, |b: &Bindings| {
        (at(b, 0), tail_at(b, 1))
    })];
    let results: Vec<(i64, Vec<i64>)> =
        nlmatch::match_all(target, nlmatch::matchers::list(nlmatch::matchers::eq()), clauses)
            .collect();
    assert_eq!(results, vec![(1, vec![2, 3])]);
}

#[test]
fn property_not_not_is_identity_for_zero_arity_patterns() {
    let target = Value::new(5i64);
    let p = value_eq(|_| Value::new(5i64));
    let double_negated = not(not(p));
    let clauses = vec![Clause::new(double_negated, |_: &Bindings| "matched")];
    let results: Vec<&str> =
        nlmatch::match_all(target, nlmatch::matchers::eq(), clauses).collect();
    assert_eq!(results, vec!["matched"]);
}

#[test]
fn property_match_all_is_lazy_over_an_infinite_target() {
    let naturals = Value::new(Seq::unfold(1i64, |n| Some((Value::new(n), n + 1))));
    let clauses = vec![Clause::new(cons(var(), wildcard()), |b: &Bindings| at(b, 0))];
    let results: Vec<i64> = nlmatch::match_all(
        naturals,
        nlmatch::matchers::multiset(nlmatch::matchers::eq()),
        clauses,
    )
    .take(3)
    .collect();
    assert_eq!(results, vec![1, 2, 3]);
}

// --- Concrete scenarios --------------------------------------------------

#[test]
fn scenario_1_list_cons_splits_head_and_tail() {
    let target = int_seq(&[1, 2, 5, 9, 4]);
    let clauses = vec![Clause::new(cons(var(), var()), |b: &Bindings| {
        (at(b, 0), tail_at(b, 1))
    })];
    let mut results =
        nlmatch::match_all(target, nlmatch::matchers::list(nlmatch::matchers::eq()), clauses);
    assert_eq!(results.next(), Some((1, vec![2, 5, 9, 4])));
    assert_eq!(results.next(), None);
}

#[test]
fn scenario_2_multiset_cons_enumerates_every_element_as_head() {
    let target = int_seq(&[1, 2, 5, 9, 4]);
    let clauses = vec![Clause::new(cons(var(), var()), |b: &Bindings| {
        (at(b, 0), tail_at(b, 1))
    })];
    let results: Vec<(i64, Vec<i64>)> = nlmatch::match_all(
        target,
        nlmatch::matchers::multiset(nlmatch::matchers::eq()),
        clauses,
    )
    .collect();
    assert_eq!(
        results,
        vec![
            (1, vec![2, 5, 9, 4]),
            (2, vec![1, 5, 9, 4]),
            (5, vec![1, 2, 9, 4]),
            (9, vec![1, 2, 5, 4]),
            (4, vec![1, 2, 5, 9]),
        ]
    );
}

fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn primes() -> Seq {
    Seq::unfold(2i64, |mut candidate| {
        while !is_prime(candidate) {
            candidate += 1;
        }
        Some((Value::new(candidate), candidate + 1))
    })
}

#[test]
fn scenario_3_twin_primes_via_join_over_an_infinite_list() {
    let target = Value::new(primes());
    let pattern = join(
        wildcard(),
        cons(
            var(),
            cons(
                lambda(|b: &Bindings| Value::new(at(b, 0) + 2)),
                wildcard(),
            ),
        ),
    );
    let clauses = vec![Clause::new(pattern, |b: &Bindings| (at(b, 0), at(b, 0) + 2))];
    let results: Vec<(i64, i64)> = nlmatch::match_all(
        target,
        nlmatch::matchers::list(nlmatch::matchers::eq()),
        clauses,
    )
    .take(10)
    .collect();
    assert_eq!(
        results,
        vec![
            (3, 5),
            (5, 7),
            (11, 13),
            (17, 19),
            (29, 31),
            (41, 43),
            (59, 61),
            (71, 73),
            (101, 103),
            (107, 109),
        ]
    );
}

#[test]
fn scenario_4_and_or_not_value_combinators_over_a_multiset() {
    let target = int_seq(&[1, 2, 5, 9, 4]);
    let pattern = cons(
        and(not(value_eq(|_| Value::new(5i64))), var()),
        cons(
            and(or(value_eq(|_| Value::new(1i64)), value_eq(|_| Value::new(2i64))), var()),
            var(),
        ),
    );
    let clauses = vec![Clause::new(pattern, |b: &Bindings| {
        (at(b, 0), at(b, 1), tail_at(b, 2))
    })];
    let results: Vec<(i64, i64, Vec<i64>)> = nlmatch::match_all(
        target,
        nlmatch::matchers::multiset(nlmatch::matchers::eq()),
        clauses,
    )
    .collect();
    assert_eq!(
        results,
        vec![
            (1, 2, vec![5, 9, 4]),
            (2, 1, vec![5, 9, 4]),
            (9, 1, vec![2, 5, 4]),
            (9, 2, vec![1, 5, 4]),
            (4, 1, vec![2, 5, 9]),
            (4, 2, vec![1, 5, 9]),
        ]
    );
}

#[test]
fn scenario_5_later_references_a_sibling_bound_to_its_right() {
    let target = int_seq(&[1, 2, 3, 4, 5]);
    let pattern = cons(
        later(|b: &Bindings| b.get(0).map(|x| Value::new(*x.downcast_ref::<i64>().unwrap() - 1))),
        cons(var(), var()),
    );
    let clauses = vec![Clause::new(pattern, |b: &Bindings| {
        (at(b, 0), tail_at(b, 1))
    })];
    let result = nlmatch::match_first(
        target,
        nlmatch::matchers::list(nlmatch::matchers::eq()),
        &clauses,
    )
    .unwrap();
    assert_eq!(result, (2, vec![3, 4, 5]));
}

#[test]
fn scenario_6_fair_bfs_over_an_infinite_multiset_is_productive() {
    let naturals = Value::new(Seq::unfold(1i64, |n| Some((Value::new(n), n + 1))));
    let pattern = cons(var(), cons(var(), wildcard()));
    let clauses = vec![Clause::new(pattern, |b: &Bindings| (at(b, 0), at(b, 1)))];
    let results: Vec<(i64, i64)> = nlmatch::match_all(
        naturals,
        nlmatch::matchers::multiset(nlmatch::matchers::eq()),
        clauses,
    )
    .take(10)
    .collect();
    assert_eq!(
        results,
        vec![
            (1, 2),
            (1, 3),
            (2, 1),
            (1, 4),
            (2, 3),
            (3, 1),
            (1, 5),
            (2, 4),
            (3, 2),
            (4, 1),
        ]
    );
}

#[test]
fn scenario_7_predicate_filters_a_multiset_to_even_elements() {
    let target = int_seq(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let pattern = cons(
        and(predicate(|_, t| *t.downcast_ref::<i64>().unwrap() % 2 == 0), var()),
        wildcard(),
    );
    let clauses = vec![Clause::new(pattern, |b: &Bindings| at(b, 0))];
    let results: Vec<i64> = nlmatch::match_all(
        target,
        nlmatch::matchers::multiset(nlmatch::matchers::eq()),
        clauses,
    )
    .collect();
    // every even element of 1..=10, in the order a multiset cons offers heads.
    assert_eq!(results, vec![2, 4, 6, 8, 10]);
}

#[test]
fn match_first_fails_with_no_match_when_every_clause_is_unsatisfiable() {
    let target = Value::new(1i64);
    let clauses = vec![Clause::new(value_eq(|_| Value::new(2i64)), |_: &Bindings| ())];
    let result = nlmatch::match_first(target, nlmatch::matchers::eq(), &clauses);
    assert_matches::assert_matches!(result, Err(MatchError::NoMatch));
}

#[test]
fn step_expansion_emits_tracing_events_observable_by_a_subscriber() {
    use tracing_subscriber::fmt::TestWriter;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(TestWriter::default())
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    // A `Later` pattern that never becomes ready forces the no-progress
    // branch in state.rs to fire its `tracing::debug!`; this just checks
    // that running under a real subscriber doesn't panic or deadlock.
    let target = Value::new(1i64);
    let clauses = vec![Clause::new(later(|_| None), |_: &Bindings| ())];
    let results: Vec<()> = nlmatch::match_all(target, nlmatch::matchers::eq(), clauses).collect();
    assert!(results.is_empty());
}
