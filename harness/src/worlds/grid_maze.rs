//! `GridMaze`: four-connected grid path-finding parsed from ASCII.
//!
//! ```text
//! %%%%%%
//! %P  .%
//! %%%%%%
//! ```
//!
//! `%` is a wall, `P` the start, `.` a goal, space an open cell. Every row
//! must have the same width. Moves cost 1.

use std::collections::BTreeSet;

use waypoint_search::contract::{
    cost_of_sequence_by_replay, expand_factored, FactoredProblem, SearchProblem, Successor,
};
use waypoint_search::heuristic::Heuristic;

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }
}

/// A compass move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// Typed failure for maze parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// The text has no rows.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A character outside `% P.`.
    UnknownCell { row: usize, col: usize, ch: char },
    /// No `P` cell.
    MissingStart,
    /// More than one `P` cell.
    MultipleStarts,
    /// No `.` cell.
    MissingGoal,
}

impl std::fmt::Display for MazeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no rows"),
            Self::RaggedRow {
                row,
                width,
                expected,
            } => write!(f, "row {row} has width {width}, expected {expected}"),
            Self::UnknownCell { row, col, ch } => {
                write!(f, "unknown cell {ch:?} at row {row}, col {col}")
            }
            Self::MissingStart => write!(f, "maze has no start cell 'P'"),
            Self::MultipleStarts => write!(f, "maze has more than one start cell 'P'"),
            Self::MissingGoal => write!(f, "maze has no goal cell '.'"),
        }
    }
}

impl std::error::Error for MazeParseError {}

/// A parsed maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    walls: Vec<Vec<bool>>,
    start: Position,
    goals: BTreeSet<Position>,
}

impl GridMaze {
    /// Parse a maze from its ASCII layout.
    ///
    /// Leading and trailing blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeParseError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, MazeParseError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(MazeParseError::Empty),
        };

        let expected = rows[0].chars().count();
        let mut walls = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goals = BTreeSet::new();

        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != expected {
                return Err(MazeParseError::RaggedRow {
                    row: r,
                    width,
                    expected,
                });
            }
            let mut row = Vec::with_capacity(width);
            for (c, ch) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Position::new(r as u32, c as u32);
                match ch {
                    '%' => row.push(true),
                    ' ' => row.push(false),
                    'P' => {
                        if start.replace(pos).is_some() {
                            return Err(MazeParseError::MultipleStarts);
                        }
                        row.push(false);
                    }
                    '.' => {
                        goals.insert(pos);
                        row.push(false);
                    }
                    _ => return Err(MazeParseError::UnknownCell { row: r, col: c, ch }),
                }
            }
            walls.push(row);
        }

        let start = start.ok_or(MazeParseError::MissingStart)?;
        if goals.is_empty() {
            return Err(MazeParseError::MissingGoal);
        }

        Ok(Self {
            walls,
            start,
            goals,
        })
    }

    /// Goal cells, in row-major order.
    #[must_use]
    pub fn goals(&self) -> &BTreeSet<Position> {
        &self.goals
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.walls.first().map_or(0, Vec::len)
    }

    /// Whether `pos` is inside the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        let (Ok(r), Ok(c)) = (usize::try_from(pos.row), usize::try_from(pos.col)) else {
            return false;
        };
        self.walls
            .get(r)
            .and_then(|row| row.get(c))
            .is_some_and(|wall| !wall)
    }

    /// The cell one step from `pos` in `dir`, if it is open.
    #[must_use]
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::North => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::South => Position::new(pos.row.checked_add(1)?, pos.col),
            Direction::East => Position::new(pos.row, pos.col.checked_add(1)?),
            Direction::West => Position::new(pos.row, pos.col.checked_sub(1)?),
        };
        self.is_open(next).then_some(next)
    }
}

impl SearchProblem for GridMaze {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        expand_factored(self, state)
    }

    fn cost_of_action_sequence(&self, actions: &[Direction]) -> Option<u64> {
        cost_of_sequence_by_replay(self, actions)
    }
}

impl FactoredProblem for GridMaze {
    fn actions(&self, state: &Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.step(*state, *dir).is_some())
            .collect()
    }

    fn next_state(&self, state: &Position, action: &Direction) -> Position {
        self.step(*state, *action).unwrap_or(*state)
    }

    fn action_cost(&self, _state: &Position, _action: &Direction, _next: &Position) -> u64 {
        1
    }
}

/// Manhattan distance to the nearest goal. Consistent on a unit-cost grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic<GridMaze> for ManhattanDistance {
    fn estimate(&self, state: &Position, problem: &GridMaze) -> u64 {
        problem
            .goals
            .iter()
            .map(|goal| state.manhattan(*goal))
            .min()
            .unwrap_or(0)
    }
}
