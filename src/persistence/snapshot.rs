//! Saved-session record, exactly as it is written to storage.
//!
//! Room and achievement keys are kept as strings on the wire and resolved to
//! their enums in [`Snapshot::resolve`], so an unknown key rejects the whole
//! record instead of being silently dropped.

use crate::core::constants::SAVE_VERSION;
use crate::error::SnapshotError;
use crate::pet::{Mood, PetSnapshot};
use crate::progression::{get_room_def, AchievementId, InteractionStats, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unlock flag as stored next to each room/achievement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockFlag {
    pub unlocked: bool,
}

/// Pet gauges and mood as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyStateRecord {
    pub happiness: f64,
    pub hunger: f64,
    pub energy: f64,
    pub mood: String,
}

/// Versioned, timestamped copy of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: String,
    /// Epoch milliseconds at save time.
    pub timestamp: i64,
    pub current_room: String,
    pub rooms: Vec<(String, UnlockFlag)>,
    pub achievements: Vec<(String, UnlockFlag)>,
    pub stats: InteractionStats,
    pub baby_state: BabyStateRecord,
}

/// A snapshot whose keys all resolved. Only these are ever applied to a
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSnapshot {
    pub current_room: RoomId,
    pub rooms: Vec<(RoomId, bool)>,
    pub achievements: Vec<(AchievementId, bool)>,
    pub stats: InteractionStats,
    pub pet: PetSnapshot,
}

impl Snapshot {
    /// Parse a stored blob. Fails closed: a version other than
    /// [`SAVE_VERSION`] or any structural problem rejects the whole blob.
    pub fn from_json(json: &str) -> Result<Snapshot, SnapshotError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

        let found = value
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SnapshotError::Malformed("missing version".to_string()))?;
        if found != SAVE_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: SAVE_VERSION.to_string(),
                found: found.to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| SnapshotError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Resolve every key. A snapshot that explicitly marks its own current
    /// room as locked is rejected here; a current room the snapshot does not
    /// mention is checked against the session on import.
    pub fn resolve(&self) -> Result<ResolvedSnapshot, SnapshotError> {
        if self.version != SAVE_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: SAVE_VERSION.to_string(),
                found: self.version.clone(),
            });
        }

        let current_room = RoomId::from_key(&self.current_room)
            .ok_or_else(|| SnapshotError::UnknownRoom(self.current_room.clone()))?;

        let rooms = self
            .rooms
            .iter()
            .map(|(key, flag)| {
                RoomId::from_key(key)
                    .map(|room| (room, flag.unlocked))
                    .ok_or_else(|| SnapshotError::UnknownRoom(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let current_room_flag = rooms
            .iter()
            .rev()
            .find(|(room, _)| *room == current_room)
            .map(|(_, unlocked)| *unlocked);
        if current_room_flag == Some(false) && get_room_def(current_room).requirement.is_some() {
            return Err(SnapshotError::CurrentRoomLocked(self.current_room.clone()));
        }

        let achievements = self
            .achievements
            .iter()
            .map(|(key, flag)| {
                AchievementId::from_key(key)
                    .map(|id| (id, flag.unlocked))
                    .ok_or_else(|| SnapshotError::UnknownAchievement(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mood = Mood::from_key(&self.baby_state.mood)
            .ok_or_else(|| SnapshotError::UnknownMood(self.baby_state.mood.clone()))?;

        Ok(ResolvedSnapshot {
            current_room,
            rooms,
            achievements,
            stats: self.stats,
            pet: PetSnapshot {
                happiness: self.baby_state.happiness,
                hunger: self.baby_state.hunger,
                energy: self.baby_state.energy,
                mood,
            },
        })
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
