//! The pet itself: three bounded gauges and a mood derived from them.
//!
//! `PetState` owns no clock. Decay happens only when the session runtime
//! calls [`PetState::tick`], so every rule here can be exercised directly.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
