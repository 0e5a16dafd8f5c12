//! Two-jars regime: every strategy on the 4/3 jars puzzle.
//!
//! Unit costs make breadth-first, uniform-cost and A* (null heuristic)
//! agree on the optimal length. Depth-first follows the last-pushed move
//! and finds a longer plan.

use lock_tests::search_test_helpers::init_logging;
use waypoint_harness::runner::{run, validate_plan, RunConfig};
use waypoint_harness::worlds::two_jars::{JarMove, JarsState, TwoJars};
use waypoint_search::contract::{replay, SearchProblem};
use waypoint_search::heuristic::NullHeuristic;
use waypoint_search::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
};
use waypoint_search::strategy::Strategy;

#[test]
fn bfs_finds_six_move_plan() {
    init_logging();
    let plan = breadth_first_search(&TwoJars::default()).expect("solvable");
    assert_eq!(plan.len(), 6);
    let (end, cost) = replay(&TwoJars::default(), &plan).unwrap();
    assert_eq!(end.a, 2);
    assert_eq!(cost, 6);
}

#[test]
fn dfs_plan_is_valid_and_longer() {
    init_logging();
    let jars = TwoJars::default();
    let plan = depth_first_search(&jars).expect("solvable");
    assert_eq!(plan.len(), 10);
    assert_eq!(plan.first(), Some(&JarMove::FillB));
    let (end, _) = replay(&jars, &plan).unwrap();
    assert_eq!(end.a, 2);
    validate_plan(&jars, &plan, 10).unwrap();
}

#[test]
fn ucs_and_astar_match_bfs_length() {
    init_logging();
    let jars = TwoJars::default();
    let bfs = breadth_first_search(&jars).unwrap();
    let ucs = uniform_cost_search(&jars).unwrap();
    let astar = astar_search(&jars, &NullHeuristic).unwrap();
    assert_eq!(ucs.len(), bfs.len());
    assert_eq!(jars.cost_of_action_sequence(&astar), jars.cost_of_action_sequence(&ucs));
}

#[test]
fn start_at_goal_gives_empty_plan_for_every_strategy() {
    init_logging();
    let jars = TwoJars::starting_at(JarsState::new(2, 3));
    for strategy in Strategy::ALL {
        let (result, report) = run(&jars, &NullHeuristic, &RunConfig::new(strategy)).unwrap();
        assert_eq!(result.plan, Some(Vec::new()), "{strategy}");
        assert_eq!(report.path_cost, Some(0));
        assert_eq!(report.stats.expansions, 0);
    }
}

#[test]
fn unreachable_target_exhausts_frontier() {
    init_logging();
    // Volumes stay multiples of gcd(4, 2) = 2, so 1 is unreachable.
    let jars = TwoJars {
        capacity_a: 4,
        capacity_b: 2,
        target: 1,
        ..TwoJars::default()
    };
    for strategy in Strategy::ALL {
        let (result, report) =
            run(&jars, &NullHeuristic, &RunConfig::new(strategy).verified()).unwrap();
        assert!(result.plan.is_none(), "{strategy}");
        assert!(!report.termination.is_goal_reached());
        assert!(!report.termination.is_budget_exceeded());
    }
}
