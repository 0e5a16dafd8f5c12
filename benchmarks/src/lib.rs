//! Shared workloads for waypoint benchmark suites.

use waypoint_harness::runner::{run, RunConfig, RunError, RunReport};
use waypoint_harness::worlds::grid_maze::{GridMaze, ManhattanDistance, MazeParseError};
use waypoint_harness::worlds::weighted_graph::{EstimateTable, WeightedGraph};
use waypoint_search::heuristic::Heuristic;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::search;
use waypoint_search::strategy::Strategy;
use waypoint_search::trace::SearchStats;

/// A problem instance a benchmark can run every strategy on.
pub enum Workload {
    Maze(GridMaze),
    Graph(WeightedGraph),
}

impl Workload {
    /// Call `search()` directly with an unbounded, untraced policy.
    ///
    /// # Panics
    ///
    /// Panics if the search rejects the policy. Benchmark setup failures are fatal.
    #[must_use]
    pub fn search_only(&self, strategy: Strategy) -> SearchStats {
        match self {
            Self::Maze(maze) => engine_stats(maze, strategy, &ManhattanDistance),
            Self::Graph(graph) => engine_stats(graph, strategy, &EstimateTable),
        }
    }

    /// Run through the harness: verified expansion, traced, plan replayed.
    ///
    /// # Errors
    ///
    /// Returns the harness [`RunError`] if the run fails validation.
    pub fn run_validated(&self, strategy: Strategy) -> Result<RunReport, RunError> {
        let config = RunConfig::new(strategy).traced().verified();
        match self {
            Self::Maze(maze) => run(maze, &ManhattanDistance, &config).map(|(_, r)| r),
            Self::Graph(graph) => run(graph, &EstimateTable, &config).map(|(_, r)| r),
        }
    }
}

fn engine_stats<P, H>(problem: &P, strategy: Strategy, heuristic: &H) -> SearchStats
where
    P: waypoint_search::contract::SearchProblem,
    H: Heuristic<P>,
{
    search(problem, strategy, heuristic, &SearchPolicy::default())
        .expect("default policy is valid")
        .stats
}

/// A named workload.
pub struct Regime {
    pub name: &'static str,
    pub workload: Workload,
}

/// Every benchmark regime, in a fixed order.
///
/// # Panics
///
/// Panics if a generated maze fails to parse.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "maze_open_40x40",
            workload: Workload::Maze(generated_maze(40, 40, 0).expect("maze")),
        },
        Regime {
            name: "maze_dense_60x60",
            workload: Workload::Maze(generated_maze(60, 60, 3).expect("maze")),
        },
        Regime {
            name: "graph_sparse_500",
            workload: Workload::Graph(random_graph(11, 500, 2)),
        },
        Regime {
            name: "graph_dense_300",
            workload: Workload::Graph(random_graph(13, 300, 8)),
        },
    ]
}

/// Small deterministic generator (`SplitMix64`).
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// A `width` x `height` maze with start top-left and goal bottom-right.
///
/// Interior cells are walls with probability `density / 10`. A clear lane
/// along the top row and right column keeps the goal reachable.
///
/// # Errors
///
/// Returns a [`MazeParseError`] if the dimensions are too small for a start
/// and a goal.
pub fn generated_maze(
    width: usize,
    height: usize,
    density: u64,
) -> Result<GridMaze, MazeParseError> {
    let mut rng = Rng(width as u64 * 31 + height as u64 + density);
    let mut text = String::with_capacity((width + 1) * height);
    for r in 0..height {
        for c in 0..width {
            let border = r == 0 || c == 0 || r + 1 == height || c + 1 == width;
            let lane = r == 1 || c + 2 == width;
            let ch = if border {
                '%'
            } else if r == 1 && c == 1 {
                'P'
            } else if r + 2 == height && c + 2 == width {
                '.'
            } else if !lane && rng.next_u64() % 10 < density {
                '%'
            } else {
                ' '
            };
            text.push(ch);
        }
        text.push('\n');
    }
    GridMaze::parse(&text)
}

/// Random directed graph on `0..nodes`, start `0`, goal `nodes - 1`, costs
/// `1..=20`, with a cost-20 chain `i -> i + 1` so the goal is reachable.
///
/// The estimate table holds zero everywhere, keeping A* consistent.
#[must_use]
pub fn random_graph(seed: u64, nodes: u32, out_degree: u32) -> WeightedGraph {
    let mut rng = Rng(seed);
    let mut graph = WeightedGraph::new(0, [nodes - 1]);
    for from in 0..nodes {
        for _ in 0..out_degree {
            #[allow(clippy::cast_possible_truncation)]
            let to = (rng.next_u64() % u64::from(nodes)) as u32;
            graph.add_edge(from, to, 1 + rng.next_u64() % 20);
        }
        if from + 1 < nodes {
            graph.add_edge(from, from + 1, 20);
        }
    }
    graph
}
