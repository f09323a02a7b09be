// src/classify/mod.rs

//! Turning imapsync's progress output into run state.
//!
//! - [`state`] defines [`SyncState`].
//! - [`classifier`] holds the ordered marker rules and the pure
//!   [`classify`] function.
//! - [`tracker`] applies classified lines to a run's state and statistics.

pub mod classifier;
pub mod state;
pub mod tracker;

pub use classifier::{LineClass, SENTINEL, STARTED_MARKER, classify, is_marker};
pub use state::SyncState;
pub use tracker::ProgressTracker;
