//! Session runtime: turns elapsed wall time into decay ticks and autosaves.
//!
//! Nothing in here reads a clock. The owner of the event loop measures time
//! and hands it to [`SessionRuntime::update`], so the whole cadence can be
//! driven from tests with made-up durations.

use super::config::Config;
use crate::error::PersistenceError;
use crate::persistence::{KeyValueStore, PersistenceGateway};
use crate::pet::Mood;
use crate::session::SessionStore;
use std::time::Duration;
use tracing::debug;

/// Fixed-interval accumulator for decay ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    interval: Duration,
    accumulated: Duration,
}

impl SessionClock {
    /// Zero is treated as one second.
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(interval_secs.max(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return how many whole intervals are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }
}

/// What happened during one [`SessionRuntime::update`].
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Decay ticks applied.
    pub ticks: u32,
    /// Mood after the last tick, if any ran.
    pub mood: Option<Mood>,
    /// Outcome of the autosave, if one was due.
    pub autosave: Option<Result<(), PersistenceError>>,
}

/// A session together with its persistence and cadence.
#[derive(Debug)]
pub struct SessionRuntime<S: KeyValueStore> {
    pub session: SessionStore,
    pub gateway: PersistenceGateway<S>,
    clock: SessionClock,
}

impl<S: KeyValueStore> SessionRuntime<S> {
    /// Build a runtime and restore the saved session if a usable one exists.
    pub fn start(store: S, config: &Config) -> Result<Self, PersistenceError> {
        let mut gateway = PersistenceGateway::with_key(store, config.storage_key.clone());
        let mut session = SessionStore::new();
        gateway.load_into(&mut session)?;
        if config.autosave_enabled() {
            gateway.start_autosave(config.autosave_interval_secs);
        }
        Ok(Self {
            session,
            gateway,
            clock: SessionClock::new(config.tick_interval_secs),
        })
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn update(&mut self, elapsed: Duration) -> UpdateReport {
        let ticks = self.clock.advance(elapsed);
        let mut mood = None;
        for _ in 0..ticks {
            mood = Some(self.session.tick());
        }
        if ticks > 0 {
            debug!(ticks, "decay ticks applied");
        }
        let autosave = self.gateway.poll_autosave(&self.session, elapsed);
        UpdateReport {
            ticks,
            mood,
            autosave,
        }
    }

    /// Save now, e.g. on quit.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        self.gateway.save(&self.session)
    }

    /// Forget the saved game and start over in place.
    pub fn clear_and_reset(&mut self) -> Result<(), PersistenceError> {
        self.gateway.clear()?;
        self.session.reset();
        Ok(())
    }
}
