//! Room and achievement progression.
//!
//! Every interaction bumps a lifetime counter, and each bump is followed by
//! one evaluation pass that unlocks any room or achievement whose threshold
//! has been reached. Unlocks never revert during a session.

pub mod data;
pub mod tracker;
pub mod types;

pub use data::{get_achievement_def, get_room_def, ALL_ACHIEVEMENTS, ALL_ROOMS};
pub use tracker::{ProgressionTracker, RecordedInteraction};
pub use types::*;
