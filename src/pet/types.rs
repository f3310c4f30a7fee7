//! Pet data structures.

use crate::core::constants::{JOYFUL_HAPPINESS_THRESHOLD, RESTING_ENERGY_THRESHOLD};
use serde::{Deserialize, Serialize};

/// How the baby feels right now.
///
/// `Content` belongs to the saved-state vocabulary but the gauge rule never
/// produces it; it only appears when a snapshot carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Content,
    Joyful,
    Resting,
    Distressed,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Content, Mood::Joyful, Mood::Resting, Mood::Distressed];

    /// Mood implied by the gauges alone.
    pub fn derive(happiness: f64, energy: f64) -> Mood {
        if happiness > JOYFUL_HAPPINESS_THRESHOLD {
            Mood::Joyful
        } else if energy < RESTING_ENERGY_THRESHOLD {
            Mood::Resting
        } else {
            Mood::Distressed
        }
    }

    /// Stable key used in snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Mood::Content => "content",
            Mood::Joyful => "joyful",
            Mood::Resting => "resting",
            Mood::Distressed => "distressed",
        }
    }

    pub fn from_key(key: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Display name for the status line
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Content => "Content",
            Mood::Joyful => "Joyful",
            Mood::Resting => "Resting",
            Mood::Distressed => "Distressed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Content => "🙂",
            Mood::Joyful => "😄",
            Mood::Resting => "😴",
            Mood::Distressed => "😢",
        }
    }
}

/// Read-only copy of the pet's gauges and mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub happiness: f64,
    pub hunger: f64,
    pub energy: f64,
    pub mood: Mood,
}
