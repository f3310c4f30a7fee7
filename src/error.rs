//! Error types for the session core.

use crate::progression::RoomId;
use thiserror::Error;

/// Why a room switch was refused. Neither case changes any state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSwitchError {
    /// The target room has not been unlocked yet.
    #[error("room is locked: {}", .0.name())]
    Locked(RoomId),

    /// The pet is already in the target room.
    #[error("already in room: {}", .0.name())]
    AlreadyThere(RoomId),
}

/// A snapshot that cannot be applied to a session as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Snapshot was written by a different save format version.
    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },

    /// The stored blob is not a well-formed snapshot.
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("unknown room in snapshot: {0}")]
    UnknownRoom(String),

    #[error("unknown achievement in snapshot: {0}")]
    UnknownAchievement(String),

    #[error("unknown mood in snapshot: {0}")]
    UnknownMood(String),

    /// The snapshot would leave the pet in a room that is not unlocked.
    #[error("current room {0} is not unlocked in snapshot")]
    CurrentRoomLocked(String),
}

/// Failure talking to durable storage.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("storage I/O error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No storage location could be resolved on this platform.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Failure reading the runtime configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}
