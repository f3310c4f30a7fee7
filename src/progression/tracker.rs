//! Interaction counters and the unlock evaluation pass.

use super::data::{get_room_def, ALL_ACHIEVEMENTS, ALL_ROOMS};
use super::types::{
    AchievementId, AchievementTrigger, InteractionKind, InteractionStats, RoomId, RoomProgress,
    UnlockEvent,
};
use std::collections::BTreeMap;
use tracing::info;

/// Result of counting one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInteraction {
    pub kind: InteractionKind,
    /// Lifetime count for `kind` after this interaction.
    pub count: u32,
    /// Rooms and achievements that unlocked because of it.
    pub unlocked: Vec<UnlockEvent>,
}

/// Lifetime interaction counts plus room and achievement unlock flags.
///
/// Counts only go up and flags only go from locked to unlocked, except when a
/// whole saved session is restored over this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionTracker {
    counts: BTreeMap<InteractionKind, u32>,
    rooms: BTreeMap<RoomId, bool>,
    achievements: BTreeMap<AchievementId, bool>,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self {
            counts: InteractionKind::ALL.into_iter().map(|k| (k, 0)).collect(),
            rooms: ALL_ROOMS
                .iter()
                .map(|def| (def.id, def.requirement.is_none()))
                .collect(),
            achievements: AchievementId::ALL.into_iter().map(|a| (a, false)).collect(),
        }
    }

    pub fn count(&self, kind: InteractionKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> InteractionStats {
        InteractionStats {
            total_feeds: self.count(InteractionKind::Feed),
            total_plays: self.count(InteractionKind::Play),
            total_sleeps: self.count(InteractionKind::Sleep),
        }
    }

    /// Count one interaction and run the unlock pass.
    pub fn record_interaction(&mut self, kind: InteractionKind) -> RecordedInteraction {
        let count = self.counts.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;
        let unlocked = self.evaluate_unlocks();
        RecordedInteraction {
            kind,
            count,
            unlocked,
        }
    }

    /// Flip every locked entry whose condition now holds.
    ///
    /// Rooms are evaluated before achievements so that room-based achievements
    /// fire in the same pass as the room itself. Returns newly unlocked
    /// entries in evaluation order.
    pub fn evaluate_unlocks(&mut self) -> Vec<UnlockEvent> {
        let mut unlocked = Vec::new();

        for def in ALL_ROOMS {
            let Some(req) = def.requirement else {
                continue;
            };
            if self.is_unlocked(def.id) || self.count(req.kind) < req.threshold {
                continue;
            }
            self.rooms.insert(def.id, true);
            info!(room = def.id.key(), "room unlocked");
            unlocked.push(UnlockEvent::Room(def.id));
        }

        for def in ALL_ACHIEVEMENTS {
            if self.is_achievement_unlocked(def.id) {
                continue;
            }
            let met = match def.trigger {
                AchievementTrigger::Count { kind, threshold } => self.count(kind) >= threshold,
                AchievementTrigger::RoomUnlocked(room) => self.is_unlocked(room),
            };
            if met {
                self.achievements.insert(def.id, true);
                info!(achievement = def.id.key(), "achievement unlocked");
                unlocked.push(UnlockEvent::Achievement(def.id));
            }
        }

        unlocked
    }

    pub fn is_unlocked(&self, room: RoomId) -> bool {
        self.rooms.get(&room).copied().unwrap_or(false)
    }

    pub fn is_achievement_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.get(&id).copied().unwrap_or(false)
    }

    /// Lookup by snapshot key. Unknown keys are simply locked.
    pub fn is_unlocked_key(&self, key: &str) -> bool {
        RoomId::from_key(key).is_some_and(|room| self.is_unlocked(room))
    }

    pub fn is_achievement_unlocked_key(&self, key: &str) -> bool {
        AchievementId::from_key(key).is_some_and(|id| self.is_achievement_unlocked(id))
    }

    pub fn unlocked_rooms(&self) -> Vec<RoomId> {
        RoomId::ALL
            .into_iter()
            .filter(|r| self.is_unlocked(*r))
            .collect()
    }

    pub fn unlocked_achievements(&self) -> Vec<AchievementId> {
        AchievementId::ALL
            .into_iter()
            .filter(|a| self.is_achievement_unlocked(*a))
            .collect()
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.achievements.values().filter(|u| **u).count()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = ALL_ACHIEVEMENTS.len();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// How far along a locked room is. `None` for rooms with no requirement.
    pub fn progress(&self, room: RoomId) -> Option<RoomProgress> {
        let req = get_room_def(room).requirement?;
        Some(RoomProgress {
            kind: req.kind,
            current: self.count(req.kind),
            target: req.threshold,
        })
    }

    /// Room flags in evaluation order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, bool)> + '_ {
        self.rooms.iter().map(|(id, unlocked)| (*id, *unlocked))
    }

    /// Achievement flags in evaluation order.
    pub fn achievements(&self) -> impl Iterator<Item = (AchievementId, bool)> + '_ {
        self.achievements.iter().map(|(id, unlocked)| (*id, *unlocked))
    }

    /// Overwrite counts and any flags present in the saved data. Flags absent
    /// from the saved data keep their current values.
    pub(crate) fn restore(
        &mut self,
        stats: InteractionStats,
        rooms: &[(RoomId, bool)],
        achievements: &[(AchievementId, bool)],
    ) {
        for kind in InteractionKind::ALL {
            self.counts.insert(kind, stats.get(kind));
        }
        for (room, unlocked) in rooms {
            // The starting room cannot be locked
            let unlocked = *unlocked || get_room_def(*room).requirement.is_none();
            self.rooms.insert(*room, unlocked);
        }
        for (id, unlocked) in achievements {
            self.achievements.insert(*id, *unlocked);
        }
    }
}
