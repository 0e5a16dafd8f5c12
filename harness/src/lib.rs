//! Waypoint Harness: reference worlds and a validating runner for the
//! search engine.
//!
//! The harness runs a world through `waypoint_search` and checks the plan
//! it gets back (`search` → `replay` → goal and cost checks), then
//! packages the outcome as a `RunReport` that can be persisted to disk.
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only.

#![forbid(unsafe_code)]

pub mod report_dir;
pub mod runner;
pub mod worlds;
