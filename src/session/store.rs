//! The session aggregate and its single mutation surface.

use crate::core::constants::{DEFAULT_FUN, DEFAULT_NUTRITION, SAVE_VERSION};
use crate::error::{RoomSwitchError, SnapshotError};
use crate::persistence::snapshot::{BabyStateRecord, Snapshot, UnlockFlag};
use crate::pet::{Mood, PetSnapshot, PetState};
use crate::progression::{
    get_room_def, AchievementId, InteractionKind, InteractionStats, ProgressionTracker, RoomId,
    UnlockEvent,
};
use chrono::Utc;
use tracing::{debug, info};

/// An interaction with an explicit magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Feed { nutrition: f64 },
    Play { fun: f64 },
    Sleep,
}

impl Interaction {
    pub fn with_default_magnitude(kind: InteractionKind) -> Self {
        match kind {
            InteractionKind::Feed => Interaction::Feed {
                nutrition: DEFAULT_NUTRITION,
            },
            InteractionKind::Play => Interaction::Play { fun: DEFAULT_FUN },
            InteractionKind::Sleep => Interaction::Sleep,
        }
    }

    pub fn kind(&self) -> InteractionKind {
        match self {
            Interaction::Feed { .. } => InteractionKind::Feed,
            Interaction::Play { .. } => InteractionKind::Play,
            Interaction::Sleep => InteractionKind::Sleep,
        }
    }
}

/// What one interaction did, for the presentation layer to react to.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOutcome {
    pub kind: InteractionKind,
    pub mood: Mood,
    /// Lifetime count for `kind` including this interaction.
    pub count: u32,
    pub unlocked: Vec<UnlockEvent>,
}

/// One running session: the pet, its progression and the room it is in.
///
/// Every gauge change made through [`SessionStore::apply_interaction`] is
/// paired with exactly one counter increment and one unlock pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    pet: PetState,
    progression: ProgressionTracker,
    current_room: RoomId,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            pet: PetState::new(),
            progression: ProgressionTracker::new(),
            current_room: RoomId::STARTING,
        }
    }

    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    pub fn progression(&self) -> &ProgressionTracker {
        &self.progression
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn gauges(&self) -> PetSnapshot {
        self.pet.snapshot()
    }

    pub fn stats(&self) -> InteractionStats {
        self.progression.stats()
    }

    pub fn unlocked_rooms(&self) -> Vec<RoomId> {
        self.progression.unlocked_rooms()
    }

    pub fn unlocked_achievements(&self) -> Vec<AchievementId> {
        self.progression.unlocked_achievements()
    }

    /// Apply an interaction with its default magnitude.
    pub fn apply_interaction(&mut self, kind: InteractionKind) -> InteractionOutcome {
        self.apply_interaction_with(Interaction::with_default_magnitude(kind))
    }

    pub fn apply_interaction_with(&mut self, interaction: Interaction) -> InteractionOutcome {
        match interaction {
            Interaction::Feed { nutrition } => {
                self.finish_interaction(interaction.kind(), |pet| pet.feed_with(nutrition))
            }
            Interaction::Play { fun } => {
                self.finish_interaction(interaction.kind(), |pet| pet.play_with(fun))
            }
            Interaction::Sleep => self.finish_interaction(interaction.kind(), |pet| pet.sleep()),
        }
    }

    fn finish_interaction(
        &mut self,
        kind: InteractionKind,
        update_pet: impl FnOnce(&mut PetState) -> Mood,
    ) -> InteractionOutcome {
        let mood = update_pet(&mut self.pet);
        let recorded = self.progression.record_interaction(kind);
        debug!(
            kind = kind.name(),
            count = recorded.count,
            mood = mood.key(),
            "interaction applied"
        );
        InteractionOutcome {
            kind,
            mood,
            count: recorded.count,
            unlocked: recorded.unlocked,
        }
    }

    /// Move to another room. Returns the room that was left.
    pub fn request_room_switch(&mut self, target: RoomId) -> Result<RoomId, RoomSwitchError> {
        if target == self.current_room {
            return Err(RoomSwitchError::AlreadyThere(target));
        }
        if !self.progression.is_unlocked(target) {
            return Err(RoomSwitchError::Locked(target));
        }
        let previous = self.current_room;
        self.current_room = target;
        info!(from = previous.key(), to = target.key(), "room switched");
        Ok(previous)
    }

    /// One decay step, driven by the session runtime.
    pub fn tick(&mut self) -> Mood {
        self.pet.tick()
    }

    pub fn export_snapshot(&self) -> Snapshot {
        let pet = self.pet.snapshot();
        Snapshot {
            version: SAVE_VERSION.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            current_room: self.current_room.key().to_string(),
            rooms: self
                .progression
                .rooms()
                .map(|(room, unlocked)| (room.key().to_string(), UnlockFlag { unlocked }))
                .collect(),
            achievements: self
                .progression
                .achievements()
                .map(|(id, unlocked)| (id.key().to_string(), UnlockFlag { unlocked }))
                .collect(),
            stats: self.progression.stats(),
            baby_state: BabyStateRecord {
                happiness: pet.happiness,
                hunger: pet.hunger,
                energy: pet.energy,
                mood: pet.mood.key().to_string(),
            },
        }
    }

    /// Replace this session's state with a saved one, in place.
    ///
    /// Either the whole snapshot applies or nothing does. Rooms and
    /// achievements the snapshot does not mention keep their current flags.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let resolved = snapshot.resolve()?;

        let room_unlocked_after = |room: RoomId| {
            get_room_def(room).requirement.is_none()
                || resolved
                    .rooms
                    .iter()
                    .rev()
                    .find(|(r, _)| *r == room)
                    .map(|(_, unlocked)| *unlocked)
                    .unwrap_or_else(|| self.progression.is_unlocked(room))
        };
        if !room_unlocked_after(resolved.current_room) {
            return Err(SnapshotError::CurrentRoomLocked(
                resolved.current_room.key().to_string(),
            ));
        }

        self.pet.restore(&resolved.pet);
        self.progression
            .restore(resolved.stats, &resolved.rooms, &resolved.achievements);
        self.current_room = resolved.current_room;
        info!(
            room = self.current_room.key(),
            feeds = resolved.stats.total_feeds,
            plays = resolved.stats.total_plays,
            sleeps = resolved.stats.total_sleeps,
            "session restored from snapshot"
        );
        Ok(())
    }

    /// Back to a brand new session, in place.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
