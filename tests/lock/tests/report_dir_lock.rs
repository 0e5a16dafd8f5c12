//! Report directory lock: a written report reads back with its digest
//! verified, and tampering is detected.

use lock_tests::search_test_helpers::{init_logging, OPEN_MAZE};
use waypoint_harness::report_dir::{read_report_dir, write_report_dir, ReportReadError};
use waypoint_harness::runner::{run, RunConfig};
use waypoint_harness::worlds::grid_maze::{GridMaze, ManhattanDistance};
use waypoint_search::strategy::Strategy;

#[test]
fn written_report_reads_back() {
    init_logging();
    let maze = GridMaze::parse(OPEN_MAZE).unwrap();
    let (_, report) =
        run(&maze, &ManhattanDistance, &RunConfig::new(Strategy::AStar).traced()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let digest = write_report_dir(&report, dir.path()).unwrap();
    assert!(digest.starts_with("sha256:"));

    let loaded = read_report_dir(dir.path()).unwrap();
    assert_eq!(loaded, report.to_json_value());
    assert_eq!(loaded["path_cost"], 11);
    assert_eq!(loaded["strategy"], "astar");
    assert_eq!(loaded["trace_digest"], report.trace_digest.unwrap().as_str());
}

#[test]
fn identical_runs_write_identical_digests() {
    init_logging();
    let maze = GridMaze::parse(OPEN_MAZE).unwrap();
    let config = RunConfig::new(Strategy::BreadthFirst).traced();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let (_, first) = run(&maze, &ManhattanDistance, &config).unwrap();
    let (_, second) = run(&maze, &ManhattanDistance, &config).unwrap();
    assert_eq!(
        write_report_dir(&first, a.path()).unwrap(),
        write_report_dir(&second, b.path()).unwrap()
    );
}

#[test]
fn tampered_report_is_rejected() {
    init_logging();
    let maze = GridMaze::parse(OPEN_MAZE).unwrap();
    let (_, report) =
        run(&maze, &ManhattanDistance, &RunConfig::new(Strategy::UniformCost)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();

    let path = dir.path().join("run_report.json");
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, text.replace("\"path_cost\":11", "\"path_cost\":10")).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportReadError::DigestMismatch { .. }), "got {err:?}");
}
