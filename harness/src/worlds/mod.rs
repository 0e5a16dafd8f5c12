//! Reference worlds for the search engine.

pub mod grid_maze;
pub mod two_jars;
pub mod weighted_graph;
