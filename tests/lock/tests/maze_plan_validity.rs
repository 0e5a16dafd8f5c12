//! Maze regime: every strategy returns a plan that replays to a goal.
//!
//! The runner replays each plan through the factored accessors and checks
//! the goal test and both cost paths, so an `Ok` run is a valid plan.

use lock_tests::search_test_helpers::{init_logging, MEDIUM_MAZE, OPEN_MAZE};
use waypoint_harness::runner::{run, RunConfig};
use waypoint_harness::worlds::grid_maze::{GridMaze, ManhattanDistance, Position};
use waypoint_search::contract::{replay, SearchProblem};
use waypoint_search::strategy::{Optimality, Strategy};

fn shortest(text: &str) -> u64 {
    match text {
        OPEN_MAZE => 11,
        MEDIUM_MAZE => 41,
        _ => unreachable!(),
    }
}

#[test]
fn every_strategy_returns_a_valid_plan() {
    init_logging();
    for text in [OPEN_MAZE, MEDIUM_MAZE] {
        let maze = GridMaze::parse(text).unwrap();
        for strategy in Strategy::ALL {
            let config = RunConfig::new(strategy).verified();
            let (result, report) = run(&maze, &ManhattanDistance, &config)
                .unwrap_or_else(|e| panic!("{strategy}: {e}"));
            let plan = result.plan.expect("maze is solvable");
            let (end, cost) = replay(&maze, &plan).unwrap();
            assert!(maze.is_goal(&end));
            assert_eq!(Some(cost), report.path_cost);
            assert!(cost >= shortest(text), "{strategy} beat the optimum");
        }
    }
}

#[test]
fn optimal_strategies_find_shortest_route() {
    init_logging();
    for text in [OPEN_MAZE, MEDIUM_MAZE] {
        let maze = GridMaze::parse(text).unwrap();
        for strategy in Strategy::ALL {
            if strategy.optimality() == Optimality::None {
                continue;
            }
            let (_, report) = run(&maze, &ManhattanDistance, &RunConfig::new(strategy)).unwrap();
            assert_eq!(report.path_cost, Some(shortest(text)), "{strategy}");
            // Unit costs: plan length equals cost.
            assert_eq!(report.plan_len.map(|n| n as u64), report.path_cost);
        }
    }
}

#[test]
fn manhattan_astar_expands_fewer_nodes_than_ucs() {
    init_logging();
    let maze = GridMaze::parse(MEDIUM_MAZE).unwrap();
    let (_, ucs) = run(&maze, &ManhattanDistance, &RunConfig::new(Strategy::UniformCost)).unwrap();
    let (_, astar) = run(&maze, &ManhattanDistance, &RunConfig::new(Strategy::AStar)).unwrap();
    assert!(astar.stats.expansions < ucs.stats.expansions);
}

#[test]
fn plan_ends_on_the_goal_cell() {
    init_logging();
    let maze = GridMaze::parse(OPEN_MAZE).unwrap();
    let (result, _) = run(&maze, &ManhattanDistance, &RunConfig::new(Strategy::AStar)).unwrap();
    let goal = result.goal.unwrap();
    assert_eq!(goal.state, Position::new(5, 8));
    assert_eq!(u64::from(goal.depth), goal.path_cost);
}
