//! Progression identifiers and unlock rules.

use serde::{Deserialize, Serialize};

/// One of the three things the player can do to the baby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Feed,
    Play,
    Sleep,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Feed,
        InteractionKind::Play,
        InteractionKind::Sleep,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InteractionKind::Feed => "Feed",
            InteractionKind::Play => "Play",
            InteractionKind::Sleep => "Sleep",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InteractionKind::Feed => "🍼",
            InteractionKind::Play => "🧸",
            InteractionKind::Sleep => "🛏️",
        }
    }
}

/// Rooms of the house, in unlock-evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomId {
    Bedroom,
    Kitchen,
    Playroom,
    Bathroom,
}

impl RoomId {
    pub const ALL: [RoomId; 4] = [
        RoomId::Bedroom,
        RoomId::Kitchen,
        RoomId::Playroom,
        RoomId::Bathroom,
    ];

    /// Room every new session starts in. Always unlocked.
    pub const STARTING: RoomId = RoomId::Bedroom;

    /// Stable key used in snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            RoomId::Bedroom => "bedroom",
            RoomId::Kitchen => "kitchen",
            RoomId::Playroom => "playroom",
            RoomId::Bathroom => "bathroom",
        }
    }

    pub fn from_key(key: &str) -> Option<RoomId> {
        RoomId::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoomId::Bedroom => "Bedroom",
            RoomId::Kitchen => "Kitchen",
            RoomId::Playroom => "Playroom",
            RoomId::Bathroom => "Bathroom",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RoomId::Bedroom => "🛏️",
            RoomId::Kitchen => "🍽️",
            RoomId::Playroom => "🎮",
            RoomId::Bathroom => "🛁",
        }
    }
}

/// Unique identifier for each achievement, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementId {
    FirstFeed,
    ThreeFeeds,
    FirstPlay,
    FirstSleep,
    KitchenUnlocked,
    PlayroomUnlocked,
}

impl AchievementId {
    pub const ALL: [AchievementId; 6] = [
        AchievementId::FirstFeed,
        AchievementId::ThreeFeeds,
        AchievementId::FirstPlay,
        AchievementId::FirstSleep,
        AchievementId::KitchenUnlocked,
        AchievementId::PlayroomUnlocked,
    ];

    /// Stable key used in snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstFeed => "firstFeed",
            AchievementId::ThreeFeeds => "threeFeeds",
            AchievementId::FirstPlay => "firstPlay",
            AchievementId::FirstSleep => "firstSleep",
            AchievementId::KitchenUnlocked => "kitchenUnlocked",
            AchievementId::PlayroomUnlocked => "playroomUnlocked",
        }
    }

    pub fn from_key(key: &str) -> Option<AchievementId> {
        AchievementId::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// Counter threshold that opens a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRequirement {
    pub kind: InteractionKind,
    pub threshold: u32,
}

/// What has to happen for an achievement to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementTrigger {
    /// Lifetime count of an interaction reaches the threshold.
    Count { kind: InteractionKind, threshold: u32 },
    /// A room becomes unlocked.
    RoomUnlocked(RoomId),
}

/// Static definition of a room.
#[derive(Debug, Clone)]
pub struct RoomDef {
    pub id: RoomId,
    /// `None` for rooms that start unlocked.
    pub requirement: Option<RoomRequirement>,
    pub description: &'static str,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub trigger: AchievementTrigger,
}

/// Something that flipped from locked to unlocked during an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockEvent {
    Room(RoomId),
    Achievement(AchievementId),
}

/// Lifetime interaction totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStats {
    pub total_feeds: u32,
    pub total_plays: u32,
    pub total_sleeps: u32,
}

impl InteractionStats {
    pub fn get(&self, kind: InteractionKind) -> u32 {
        match kind {
            InteractionKind::Feed => self.total_feeds,
            InteractionKind::Play => self.total_plays,
            InteractionKind::Sleep => self.total_sleeps,
        }
    }

    pub fn total(&self) -> u32 {
        self.total_feeds
            .saturating_add(self.total_plays)
            .saturating_add(self.total_sleeps)
    }
}

/// Count towards a locked room's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomProgress {
    pub kind: InteractionKind,
    pub current: u32,
    pub target: u32,
}

impl RoomProgress {
    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_keys_round_trip() {
        for room in RoomId::ALL {
            assert_eq!(RoomId::from_key(room.key()), Some(room));
        }
        assert_eq!(RoomId::from_key("attic"), None);
        assert_eq!(RoomId::from_key("KitchenScene"), None);
    }

    #[test]
    fn test_achievement_keys_round_trip() {
        for id in AchievementId::ALL {
            assert_eq!(AchievementId::from_key(id.key()), Some(id));
        }
        assert_eq!(AchievementId::from_key("tenFeeds"), None);
    }

    #[test]
    fn test_serde_names_match_keys() {
        for room in RoomId::ALL {
            let json = serde_json::to_string(&room).unwrap();
            assert_eq!(json, format!("\"{}\"", room.key()));
        }
        for id in AchievementId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_room_progress_remaining() {
        let progress = RoomProgress {
            kind: InteractionKind::Feed,
            current: 1,
            target: 3,
        };
        assert_eq!(progress.remaining(), 2);
        let done = RoomProgress { current: 5, ..progress };
        assert_eq!(done.remaining(), 0);
    }

    #[test]
    fn test_stats_total_saturates() {
        let stats = InteractionStats {
            total_feeds: u32::MAX,
            total_plays: 1,
            total_sleeps: 2,
        };
        assert_eq!(stats.total(), u32::MAX);
        assert_eq!(
            InteractionStats {
                total_feeds: 3,
                total_plays: 5,
                total_sleeps: 2
            }
            .total(),
            10
        );
    }
}
