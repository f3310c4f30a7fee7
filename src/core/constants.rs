// Gauges
pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;
pub const STARTING_HAPPINESS: f64 = 50.0;
pub const STARTING_HUNGER: f64 = 50.0;
pub const STARTING_ENERGY: f64 = 50.0;

// Interactions
pub const DEFAULT_NUTRITION: f64 = 20.0;
pub const FEED_HAPPINESS_BONUS: f64 = 10.0;
pub const DEFAULT_FUN: f64 = 15.0;
pub const PLAY_ENERGY_COST: f64 = 10.0;
pub const SLEEP_ENERGY_GAIN: f64 = 30.0;

// Decay per tick
pub const TICK_HUNGER_DECAY: f64 = 1.0;
pub const TICK_ENERGY_DECAY: f64 = 0.5;

// Mood thresholds
pub const JOYFUL_HAPPINESS_THRESHOLD: f64 = 70.0;
pub const RESTING_ENERGY_THRESHOLD: f64 = 30.0;

// Room unlock thresholds
pub const KITCHEN_FEEDS_REQUIRED: u32 = 3;
pub const PLAYROOM_PLAYS_REQUIRED: u32 = 5;
pub const BATHROOM_SLEEPS_REQUIRED: u32 = 2;

// Scheduling
pub const TICK_INTERVAL_SECONDS: u64 = 5;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Persistence
pub const SAVE_VERSION: &str = "0.3.0";
pub const STORAGE_KEY: &str = "babyverse_state";
