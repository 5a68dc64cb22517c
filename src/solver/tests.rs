//! End-to-end tests for the solver.

use super::*;
use crate::constraints::{Operand, Relation, UnaryPredicate};
use crate::consistency::{arc_consistency, node_consistency};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// 2024-01-01 at the given hour.
fn at(hour: u32) -> NaiveDateTime {
    jan(1).and_hms_opt(hour, 0, 0).unwrap()
}

/// Checks a full schedule against one constraint.
fn satisfies(values: &[NaiveDateTime], constraint: &Constraint) -> bool {
    let left = values[constraint.left()];
    let right = match constraint.right() {
        None => None,
        Some(Operand::Value(fixed)) => Some(fixed),
        Some(Operand::Variable(v)) => Some(values[v]),
    };
    constraint.is_satisfied_by_values(left, right)
}

/// Exhaustively enumerates every schedule over `slots` and returns the first
/// one in lexicographic order that satisfies all constraints.
fn brute_force(
    n: usize,
    slots: &[NaiveDateTime],
    constraints: &[Constraint],
) -> Option<Vec<NaiveDateTime>> {
    if slots.is_empty() {
        return (n == 0).then(Vec::new);
    }
    let mut digits = vec![0usize; n];
    loop {
        let values: Vec<_> = digits.iter().map(|&d| slots[d]).collect();
        if constraints.iter().all(|c| satisfies(&values, c)) {
            return Some(values);
        }
        // Odometer increment, last meeting fastest.
        let mut i = n;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            digits[i] += 1;
            if digits[i] < slots.len() {
                break;
            }
            digits[i] = 0;
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────

mod scenarios {
    use super::*;

    #[test]
    fn single_meeting_without_constraints_takes_midnight() {
        init_logging();
        let result = solve(1, [jan(1)], &[]).unwrap();
        assert_eq!(result, Some(vec![at(0)]));

        let domains = Solver::default().build_domains(1, [jan(1)]);
        assert_eq!(domains[0].len(), 24);
    }

    #[test]
    fn unary_and_binary_not_equal() {
        init_logging();
        let constraints = [
            Constraint::unary(0, UnaryPredicate::Not(at(9))),
            Constraint::binary(0, Relation::NotEqual, 1),
        ];
        let result = solve(2, [jan(1)], &constraints).unwrap();
        assert_eq!(result, Some(vec![at(0), at(1)]));
    }

    #[test]
    fn collapsed_domains_are_unsatisfiable() {
        init_logging();
        let constraints = [
            Constraint::unary(0, UnaryPredicate::Exactly(at(5))),
            Constraint::unary(1, UnaryPredicate::Exactly(at(5))),
            Constraint::binary(0, Relation::NotEqual, 1),
        ];
        let solution = Solver::default()
            .solve_with_stats(2, [jan(1)], &constraints)
            .unwrap();

        assert_eq!(solution.values, None);
        assert!(!solution.is_satisfiable());
        assert_eq!(solution.stats.node_pruned, 46);
        assert_eq!(solution.stats.nodes_explored, 0);
    }

    #[test]
    fn collapsed_domains_without_pruning_are_still_unsatisfiable() {
        let constraints = [
            Constraint::unary(0, UnaryPredicate::Exactly(at(5))),
            Constraint::unary(1, UnaryPredicate::Exactly(at(5))),
            Constraint::binary(0, Relation::NotEqual, 1),
        ];
        let solver = Solver::new(SolverConfig::default().without_pruning()).unwrap();
        assert_eq!(solver.solve(2, [jan(1)], &constraints).unwrap(), None);
    }

    #[test]
    fn pruning_does_not_change_the_answer() {
        let constraints = [
            Constraint::binary(0, Relation::Before, 1),
            Constraint::binary(1, Relation::Before, 2),
            Constraint::binary(0, Relation::DifferentDay, 2),
            Constraint::unary(1, UnaryPredicate::HourBetween { first: 9, last: 17 }),
        ];
        let pruned = Solver::default()
            .solve_with_stats(3, [jan(1), jan(2)], &constraints)
            .unwrap();
        let unpruned = Solver::new(SolverConfig::default().without_pruning())
            .unwrap()
            .solve_with_stats(3, [jan(1), jan(2)], &constraints)
            .unwrap();

        assert!(pruned.is_satisfiable());
        assert_eq!(pruned.values, unpruned.values);
        assert!(pruned.stats.nodes_explored <= unpruned.stats.nodes_explored);
    }
}

// ── Solver behaviour ──────────────────────────────────────────────────

mod behaviour {
    use super::*;

    #[test]
    fn results_are_indexed_by_meeting() {
        let constraints = [
            Constraint::binary(1, Relation::Before, 0),
            Constraint::binary(2, Relation::Before, 1),
        ];
        let result = solve(3, [jan(1)], &constraints).unwrap().unwrap();
        assert_eq!(result, vec![at(2), at(1), at(0)]);
    }

    #[test]
    fn meetings_spread_over_several_days() {
        let constraints = [
            Constraint::binary(0, Relation::DifferentDay, 1),
            Constraint::unary(1, UnaryPredicate::OnDate(jan(3))),
        ];
        let result = solve(2, [jan(3), jan(1)], &constraints).unwrap().unwrap();
        assert_eq!(result[0].date(), jan(1));
        assert_eq!(result[1], jan(3).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn fixed_value_constraints_are_enforced_by_search() {
        let constraints = [Constraint::against_value(0, Relation::After, at(20))];
        let solution = Solver::default()
            .solve_with_stats(1, [jan(1)], &constraints)
            .unwrap();

        assert_eq!(solution.values, Some(vec![at(21)]));
        assert_eq!(solution.stats.node_pruned, 0);
        assert_eq!(solution.stats.arc_pruned, 0);
        assert_eq!(solution.stats.nodes_explored, 22);
    }

    #[test]
    fn hour_window_restricts_slots() {
        let solver = Solver::new(SolverConfig::default().with_hours(9, 17)).unwrap();
        let constraints = [Constraint::binary(0, Relation::AtLeastHoursApart(8), 1)];

        let result = solver.solve(2, [jan(1)], &constraints).unwrap();

        assert_eq!(result, Some(vec![at(9), at(17)]));
    }

    #[test]
    fn hour_window_can_make_problems_unsatisfiable() {
        let solver = Solver::new(SolverConfig::default().with_hours(9, 17)).unwrap();
        let constraints = [Constraint::binary(0, Relation::AtLeastHoursApart(9), 1)];
        assert_eq!(solver.solve(2, [jan(1)], &constraints).unwrap(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Solver::new(SolverConfig::default().with_hours(0, 30)).unwrap_err();
        assert_eq!(err, CspError::Config(ConfigError::HourOutOfRange(30)));
    }

    #[test]
    fn no_dates_means_no_schedule() {
        let result = solve(2, std::iter::empty(), &[]).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn zero_meetings_is_an_empty_schedule() {
        assert_eq!(solve(0, [jan(1)], &[]).unwrap(), Some(vec![]));
    }

    #[test]
    fn stats_track_every_phase() {
        let constraints = [
            Constraint::unary(0, UnaryPredicate::After(at(20))),
            Constraint::binary(0, Relation::Before, 1),
        ];
        let stats = Solver::default()
            .solve_with_stats(2, [jan(1)], &constraints)
            .unwrap()
            .stats;

        assert_eq!(stats.initial_domain_size, 48);
        assert_eq!(stats.node_pruned, 21);
        // m0 loses 23:00 (no later m1); m1 loses 00:00..=21:00.
        assert_eq!(stats.arc_pruned, 23);
        assert!(stats.arc_revisions >= 2);
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.backtracks, 0);
    }

    #[test]
    #[should_panic]
    fn constraint_on_unknown_meeting_panics() {
        let constraints = [Constraint::unary(3, UnaryPredicate::Not(at(0)))];
        let _ = solve(2, [jan(1)], &constraints);
    }
}

// ── Properties ────────────────────────────────────────────────────────

/// Hours used by the property tests; small enough to brute-force.
const HOURS: u32 = 5;

fn small_solver(config: SolverConfig) -> Solver {
    Solver::new(config.with_hours(0, HOURS - 1)).unwrap()
}

fn predicate() -> impl Strategy<Value = UnaryPredicate> {
    prop_oneof![
        (0..=HOURS).prop_map(|h| UnaryPredicate::Before(at(h))),
        (0..=HOURS).prop_map(|h| UnaryPredicate::After(at(h))),
        (0..HOURS).prop_map(|h| UnaryPredicate::Not(at(h))),
        (0..HOURS).prop_map(|h| UnaryPredicate::Exactly(at(h))),
        (0..HOURS, 0..HOURS).prop_map(|(a, b)| UnaryPredicate::HourBetween {
            first: a.min(b),
            last: a.max(b),
        }),
    ]
}

fn relation() -> impl Strategy<Value = Relation> {
    prop_oneof![
        Just(Relation::Equal),
        Just(Relation::NotEqual),
        Just(Relation::Before),
        Just(Relation::After),
        Just(Relation::SameDay),
        Just(Relation::DifferentDay),
        (0u32..4).prop_map(Relation::AtLeastHoursApart),
    ]
}

fn constraint(n: usize) -> impl Strategy<Value = Constraint> {
    prop_oneof![
        1 => (0..n, predicate()).prop_map(|(v, p)| Constraint::unary(v, p)),
        3 => (0..n, relation(), 0..n).prop_map(|(l, r, h)| Constraint::binary(l, r, h)),
        1 => (0..n, relation(), 0..HOURS)
            .prop_map(|(l, r, h)| Constraint::against_value(l, r, at(h))),
    ]
}

fn problem() -> impl Strategy<Value = (usize, Vec<Constraint>)> {
    (1usize..=3).prop_flat_map(|n| (Just(n), prop::collection::vec(constraint(n), 0..7)))
}

fn slots() -> Vec<NaiveDateTime> {
    (0..HOURS).map(at).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn returned_schedules_satisfy_every_constraint((n, constraints) in problem()) {
        let result = small_solver(SolverConfig::default())
            .solve(n, [jan(1)], &constraints)
            .unwrap();
        if let Some(values) = result {
            prop_assert_eq!(values.len(), n);
            for c in &constraints {
                prop_assert!(satisfies(&values, c), "violated {}", c);
            }
        }
    }

    #[test]
    fn finds_the_first_schedule_whenever_one_exists((n, constraints) in problem()) {
        let expected = brute_force(n, &slots(), &constraints);
        let actual = small_solver(SolverConfig::default())
            .solve(n, [jan(1)], &constraints)
            .unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn pruning_changes_effort_not_outcome((n, constraints) in problem()) {
        let pruned = small_solver(SolverConfig::default())
            .solve_with_stats(n, [jan(1)], &constraints)
            .unwrap();
        let unpruned = small_solver(SolverConfig::default().without_pruning())
            .solve_with_stats(n, [jan(1)], &constraints)
            .unwrap();
        prop_assert_eq!(pruned.values, unpruned.values);
        prop_assert!(pruned.stats.nodes_explored <= unpruned.stats.nodes_explored);
    }

    #[test]
    fn filtering_only_shrinks_domains((n, constraints) in problem()) {
        let solver = small_solver(SolverConfig::default());
        let initial = solver.build_domains(n, [jan(1)]);

        let mut after_node = initial.clone();
        node_consistency(&mut after_node, &constraints);
        let mut after_arc = after_node.clone();
        arc_consistency(&mut after_arc, &constraints).unwrap();

        for v in 0..n {
            prop_assert!(after_node[v].iter().all(|t| initial[v].contains(&t)));
            prop_assert!(after_arc[v].iter().all(|t| after_node[v].contains(&t)));
        }
    }

    #[test]
    fn arc_consistency_is_idempotent((n, constraints) in problem()) {
        let mut domains = small_solver(SolverConfig::default()).build_domains(n, [jan(1)]);
        node_consistency(&mut domains, &constraints);
        arc_consistency(&mut domains, &constraints).unwrap();
        let fixpoint = domains.clone();

        let again = arc_consistency(&mut domains, &constraints).unwrap();

        prop_assert_eq!(again.removed, 0);
        prop_assert_eq!(domains, fixpoint);
    }

    #[test]
    fn filtering_never_removes_a_solution_value((n, constraints) in problem()) {
        let mut domains = small_solver(SolverConfig::default()).build_domains(n, [jan(1)]);
        node_consistency(&mut domains, &constraints);
        arc_consistency(&mut domains, &constraints).unwrap();

        if let Some(values) = brute_force(n, &slots(), &constraints) {
            for (v, value) in values.iter().enumerate() {
                prop_assert!(domains[v].contains(value));
            }
        }
    }
}
