//! My Baby - virtual-pet core library
//!
//! Gauges and mood, room and achievement unlocks, the session aggregate and
//! versioned local saves. The terminal front end lives in `main.rs`.

pub mod core;
pub mod error;
pub mod persistence;
pub mod pet;
pub mod progression;
pub mod session;

pub use crate::core::{Config, SessionRuntime};
pub use error::{ConfigError, PersistenceError, RoomSwitchError, SnapshotError};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, PersistenceGateway};
pub use pet::{Mood, PetState};
pub use progression::{AchievementId, InteractionKind, ProgressionTracker, RoomId, UnlockEvent};
pub use session::SessionStore;
