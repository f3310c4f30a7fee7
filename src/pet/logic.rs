//! Gauge updates for feed/play/sleep interactions and the decay tick.

use super::types::{Mood, PetSnapshot};
use crate::core::constants::{
    DEFAULT_FUN, DEFAULT_NUTRITION, FEED_HAPPINESS_BONUS, GAUGE_MAX, GAUGE_MIN, PLAY_ENERGY_COST,
    SLEEP_ENERGY_GAIN, STARTING_ENERGY, STARTING_HAPPINESS, STARTING_HUNGER, TICK_ENERGY_DECAY,
    TICK_HUNGER_DECAY,
};

fn clamp_gauge(value: f64) -> f64 {
    if value.is_nan() {
        return GAUGE_MIN;
    }
    value.clamp(GAUGE_MIN, GAUGE_MAX)
}

/// Happiness, hunger and energy in `[0, 100]`, plus the current mood.
///
/// Higher hunger means better fed. Out-of-range inputs are clamped, never
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PetState {
    happiness: f64,
    hunger: f64,
    energy: f64,
    mood: Mood,
}

impl Default for PetState {
    fn default() -> Self {
        Self::new()
    }
}

impl PetState {
    pub fn new() -> Self {
        Self {
            happiness: STARTING_HAPPINESS,
            hunger: STARTING_HUNGER,
            energy: STARTING_ENERGY,
            mood: Mood::derive(STARTING_HAPPINESS, STARTING_ENERGY),
        }
    }

    pub fn happiness(&self) -> f64 {
        self.happiness
    }

    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Feed with the default bottle.
    pub fn feed(&mut self) -> Mood {
        self.feed_with(DEFAULT_NUTRITION)
    }

    pub fn feed_with(&mut self, nutrition: f64) -> Mood {
        self.hunger = clamp_gauge(self.hunger + nutrition);
        self.happiness = clamp_gauge(self.happiness + FEED_HAPPINESS_BONUS);
        self.update_mood()
    }

    /// Play with the default toy.
    pub fn play(&mut self) -> Mood {
        self.play_with(DEFAULT_FUN)
    }

    pub fn play_with(&mut self, fun: f64) -> Mood {
        self.happiness = clamp_gauge(self.happiness + fun);
        self.energy = clamp_gauge(self.energy - PLAY_ENERGY_COST);
        self.update_mood()
    }

    /// Put the baby to bed. Mood is `Resting` until the next mutation
    /// recomputes it from the gauges.
    pub fn sleep(&mut self) -> Mood {
        self.energy = clamp_gauge(self.energy + SLEEP_ENERGY_GAIN);
        self.mood = Mood::Resting;
        self.mood
    }

    /// One decay step. Called by the session runtime every tick interval.
    pub fn tick(&mut self) -> Mood {
        self.hunger = clamp_gauge(self.hunger - TICK_HUNGER_DECAY);
        self.energy = clamp_gauge(self.energy - TICK_ENERGY_DECAY);
        self.update_mood()
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            happiness: self.happiness,
            hunger: self.hunger,
            energy: self.energy,
            mood: self.mood,
        }
    }

    /// Overwrite every field from a saved snapshot. A stored `Resting` is
    /// kept so a post-sleep mood survives a save/load cycle; any other mood
    /// is recomputed from the clamped gauges.
    pub(crate) fn restore(&mut self, saved: &PetSnapshot) {
        self.happiness = clamp_gauge(saved.happiness);
        self.hunger = clamp_gauge(saved.hunger);
        self.energy = clamp_gauge(saved.energy);
        if saved.mood == Mood::Resting {
            self.mood = Mood::Resting;
        } else {
            self.update_mood();
        }
    }

    fn update_mood(&mut self) -> Mood {
        self.mood = Mood::derive(self.happiness, self.energy);
        self.mood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(pet: &PetState) -> bool {
        [pet.happiness(), pet.hunger(), pet.energy()]
            .iter()
            .all(|v| (GAUGE_MIN..=GAUGE_MAX).contains(v))
    }

    #[test]
    fn test_new_pet_starts_at_fifty() {
        let pet = PetState::new();
        assert_eq!(pet.happiness(), 50.0);
        assert_eq!(pet.hunger(), 50.0);
        assert_eq!(pet.energy(), 50.0);
        assert_eq!(pet.mood(), Mood::Distressed);
    }

    #[test]
    fn test_feed_raises_hunger_and_happiness() {
        let mut pet = PetState::new();
        pet.feed();
        assert_eq!(pet.hunger(), 70.0);
        assert_eq!(pet.happiness(), 60.0);
        assert_eq!(pet.mood(), Mood::Distressed);
    }

    #[test]
    fn test_feed_caps_at_hundred() {
        let mut pet = PetState::new();
        for _ in 0..10 {
            pet.feed();
        }
        assert_eq!(pet.hunger(), 100.0);
        assert_eq!(pet.happiness(), 100.0);
        assert_eq!(pet.mood(), Mood::Joyful);
    }

    #[test]
    fn test_negative_nutrition_is_clamped_not_rejected() {
        let mut pet = PetState::new();
        pet.feed_with(-500.0);
        assert_eq!(pet.hunger(), 0.0);
        assert_eq!(pet.happiness(), 60.0);
        assert!(in_range(&pet));
    }

    #[test]
    fn test_play_trades_energy_for_happiness() {
        let mut pet = PetState::new();
        let mood = pet.play();
        assert_eq!(pet.happiness(), 65.0);
        assert_eq!(pet.energy(), 40.0);
        assert_eq!(mood, Mood::Distressed);

        let mood = pet.play();
        assert_eq!(pet.happiness(), 80.0);
        assert_eq!(mood, Mood::Joyful);
    }

    #[test]
    fn test_play_energy_floors_at_zero() {
        let mut pet = PetState::new();
        for _ in 0..8 {
            pet.play();
        }
        assert_eq!(pet.energy(), 0.0);
        assert!(in_range(&pet));
    }

    #[test]
    fn test_sleep_forces_resting_even_when_happy() {
        let mut pet = PetState::new();
        pet.play_with(40.0);
        assert_eq!(pet.mood(), Mood::Joyful);

        let mood = pet.sleep();
        assert_eq!(mood, Mood::Resting);
        assert_eq!(pet.energy(), 70.0);
    }

    #[test]
    fn test_tick_after_sleep_reverts_to_derived_mood() {
        let mut pet = PetState::new();
        pet.play_with(40.0);
        pet.sleep();
        assert_eq!(pet.tick(), Mood::Joyful);
    }

    #[test]
    fn test_tick_decays_hunger_and_energy() {
        let mut pet = PetState::new();
        pet.tick();
        assert_eq!(pet.hunger(), 49.0);
        assert_eq!(pet.energy(), 49.5);
        assert_eq!(pet.happiness(), 50.0);
    }

    #[test]
    fn test_ticks_eventually_make_baby_rest() {
        let mut pet = PetState::new();
        // 50 -> below 30 after 41 ticks at 0.5 per tick
        for _ in 0..40 {
            pet.tick();
        }
        assert_eq!(pet.energy(), 30.0);
        assert_eq!(pet.mood(), Mood::Distressed);
        pet.tick();
        assert_eq!(pet.mood(), Mood::Resting);

        for _ in 0..200 {
            pet.tick();
        }
        assert_eq!(pet.hunger(), 0.0);
        assert_eq!(pet.energy(), 0.0);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut pet = PetState::new();
        let before = pet.snapshot();
        pet.feed();
        assert_eq!(before.hunger, 50.0);
        assert_eq!(pet.snapshot().hunger, 70.0);
    }

    #[test]
    fn test_restore_clamps_gauges_and_rederives_mood() {
        let mut pet = PetState::new();
        pet.restore(&PetSnapshot {
            happiness: 140.0,
            hunger: -3.0,
            energy: 20.0,
            mood: Mood::Content,
        });
        assert_eq!(pet.happiness(), 100.0);
        assert_eq!(pet.hunger(), 0.0);
        assert_eq!(pet.mood(), Mood::Joyful);
    }

    #[test]
    fn test_restore_keeps_resting_after_sleep() {
        let mut pet = PetState::new();
        pet.restore(&PetSnapshot {
            happiness: 90.0,
            hunger: 50.0,
            energy: 80.0,
            mood: Mood::Resting,
        });
        assert_eq!(pet.mood(), Mood::Resting);
    }

    #[test]
    fn test_restore_ignores_mood_that_contradicts_gauges() {
        let mut pet = PetState::new();
        pet.restore(&PetSnapshot {
            happiness: 10.0,
            hunger: 50.0,
            energy: 50.0,
            mood: Mood::Joyful,
        });
        assert_eq!(pet.mood(), Mood::derive(10.0, 50.0));
        assert_eq!(pet.mood(), Mood::Distressed);
    }
}
