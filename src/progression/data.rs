//! Static room and achievement definitions.

use super::types::{
    AchievementDef, AchievementId, AchievementTrigger, InteractionKind, RoomDef, RoomId,
    RoomRequirement,
};
use crate::core::constants::{
    BATHROOM_SLEEPS_REQUIRED, KITCHEN_FEEDS_REQUIRED, PLAYROOM_PLAYS_REQUIRED,
};

/// All rooms in evaluation order.
pub const ALL_ROOMS: &[RoomDef] = &[
    RoomDef {
        id: RoomId::Bedroom,
        requirement: None,
        description: "A cozy crib under a starry mobile. Every day starts here.",
    },
    RoomDef {
        id: RoomId::Kitchen,
        requirement: Some(RoomRequirement {
            kind: InteractionKind::Feed,
            threshold: KITCHEN_FEEDS_REQUIRED,
        }),
        description: "Warm bottles and a high chair with a splash-proof tray.",
    },
    RoomDef {
        id: RoomId::Playroom,
        requirement: Some(RoomRequirement {
            kind: InteractionKind::Play,
            threshold: PLAYROOM_PLAYS_REQUIRED,
        }),
        description: "Blocks, rattles and a teddy bear who has seen things.",
    },
    RoomDef {
        id: RoomId::Bathroom,
        requirement: Some(RoomRequirement {
            kind: InteractionKind::Sleep,
            threshold: BATHROOM_SLEEPS_REQUIRED,
        }),
        description: "A tiny tub, a rubber duck and plenty of bubbles.",
    },
];

/// All achievements in evaluation order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstFeed,
        name: "First Bottle",
        description: "Feed the baby for the first time",
        icon: "🍼",
        trigger: AchievementTrigger::Count {
            kind: InteractionKind::Feed,
            threshold: 1,
        },
    },
    AchievementDef {
        id: AchievementId::ThreeFeeds,
        name: "Little Gourmet",
        description: "Feed the baby three times",
        icon: "🥣",
        trigger: AchievementTrigger::Count {
            kind: InteractionKind::Feed,
            threshold: 3,
        },
    },
    AchievementDef {
        id: AchievementId::FirstPlay,
        name: "Playtime",
        description: "Play with the baby for the first time",
        icon: "🧸",
        trigger: AchievementTrigger::Count {
            kind: InteractionKind::Play,
            threshold: 1,
        },
    },
    AchievementDef {
        id: AchievementId::FirstSleep,
        name: "Sweet Dreams",
        description: "Put the baby to bed for the first time",
        icon: "🌙",
        trigger: AchievementTrigger::Count {
            kind: InteractionKind::Sleep,
            threshold: 1,
        },
    },
    AchievementDef {
        id: AchievementId::KitchenUnlocked,
        name: "Chef's Helper",
        description: "Unlock the kitchen",
        icon: "🍽️",
        trigger: AchievementTrigger::RoomUnlocked(RoomId::Kitchen),
    },
    AchievementDef {
        id: AchievementId::PlayroomUnlocked,
        name: "Toy Collector",
        description: "Unlock the playroom",
        icon: "🎮",
        trigger: AchievementTrigger::RoomUnlocked(RoomId::Playroom),
    },
];

pub fn get_room_def(id: RoomId) -> &'static RoomDef {
    // ALL_ROOMS lists every RoomId in declaration order
    &ALL_ROOMS[id as usize]
}

pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    &ALL_ACHIEVEMENTS[id as usize]
}
