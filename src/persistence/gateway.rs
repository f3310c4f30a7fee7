//! Save, load and autosave of a session snapshot under one storage key.

use super::snapshot::Snapshot;
use super::storage::KeyValueStore;
use crate::core::constants::STORAGE_KEY;
use crate::error::{PersistenceError, SnapshotError};
use crate::session::SessionStore;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{info, warn};

/// Result of reading the stored blob.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing has been saved yet.
    Empty,
    /// A blob exists but cannot be used (wrong version, corrupt, or refers to
    /// unknown rooms/achievements). Treat exactly like `Empty`.
    Rejected(SnapshotError),
    Loaded(Snapshot),
}

impl LoadOutcome {
    pub fn into_snapshot(self) -> Option<Snapshot> {
        match self {
            LoadOutcome::Loaded(snapshot) => Some(snapshot),
            LoadOutcome::Empty | LoadOutcome::Rejected(_) => None,
        }
    }
}

/// What is known about the stored save without applying it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveInfo {
    pub exists: bool,
    pub saved_at: Option<DateTime<Utc>>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AutosaveSchedule {
    interval: Duration,
    since_last_save: Duration,
}

/// Writes and reads [`Snapshot`]s through a [`KeyValueStore`].
///
/// The autosave schedule is only bookkeeping: the session runtime reports
/// elapsed time through [`PersistenceGateway::poll_autosave`] and the save
/// happens inside that call.
#[derive(Debug)]
pub struct PersistenceGateway<S: KeyValueStore> {
    store: S,
    key: String,
    autosave: Option<AutosaveSchedule>,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            autosave: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored snapshot with the session's current state.
    ///
    /// On failure the previously stored snapshot is left as it was.
    pub fn save(&mut self, session: &SessionStore) -> Result<(), PersistenceError> {
        let snapshot = session.export_snapshot();
        let json = snapshot.to_json()?;
        self.store.set(&self.key, &json)?;
        info!(key = %self.key, timestamp = snapshot.timestamp, "session saved");
        Ok(())
    }

    /// Read and validate the stored snapshot.
    ///
    /// Only storage I/O failures are errors; absent or unusable data are
    /// ordinary outcomes.
    pub fn load(&self) -> Result<LoadOutcome, PersistenceError> {
        let Some(json) = self.store.get(&self.key)? else {
            info!(key = %self.key, "no saved session");
            return Ok(LoadOutcome::Empty);
        };

        let snapshot = match Snapshot::from_json(&json).and_then(|s| s.resolve().map(|_| s)) {
            Ok(snapshot) => snapshot,
            Err(reason) => {
                warn!(key = %self.key, %reason, "ignoring unusable saved session");
                return Ok(LoadOutcome::Rejected(reason));
            }
        };

        info!(key = %self.key, timestamp = snapshot.timestamp, "saved session loaded");
        Ok(LoadOutcome::Loaded(snapshot))
    }

    /// Load and apply the stored snapshot. Returns `Ok(false)` when there was
    /// nothing usable to apply, leaving the session as it was.
    pub fn load_into(&self, session: &mut SessionStore) -> Result<bool, PersistenceError> {
        let Some(snapshot) = self.load()?.into_snapshot() else {
            return Ok(false);
        };
        match session.import_snapshot(&snapshot) {
            Ok(()) => Ok(true),
            Err(reason) => {
                warn!(key = %self.key, %reason, "saved session could not be applied");
                Ok(false)
            }
        }
    }

    /// Delete the stored snapshot. Safe to call when nothing is stored.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)?;
        info!(key = %self.key, "saved session cleared");
        Ok(())
    }

    pub fn has_saved_state(&self) -> bool {
        matches!(self.store.get(&self.key), Ok(Some(_)))
    }

    /// Peek at the stored blob's header fields. A blob that cannot be parsed
    /// at all reports as not existing.
    pub fn save_info(&self) -> SaveInfo {
        let Ok(Some(json)) = self.store.get(&self.key) else {
            return SaveInfo::default();
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
            return SaveInfo::default();
        };
        SaveInfo {
            exists: true,
            saved_at: value
                .get("timestamp")
                .and_then(|t| t.as_i64())
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            version: value
                .get("version")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        }
    }

    /// Start saving every `interval_secs` seconds of reported time,
    /// replacing any schedule already running. Zero is treated as one second.
    pub fn start_autosave(&mut self, interval_secs: u64) {
        let interval = Duration::from_secs(interval_secs.max(1));
        self.autosave = Some(AutosaveSchedule {
            interval,
            since_last_save: Duration::ZERO,
        });
        info!(interval_secs = interval.as_secs(), "autosave started");
    }

    pub fn stop_autosave(&mut self) {
        if self.autosave.take().is_some() {
            info!("autosave stopped");
        }
    }

    pub fn autosave_interval(&self) -> Option<Duration> {
        self.autosave.map(|schedule| schedule.interval)
    }

    /// Report elapsed time to the autosave schedule. Saves at most once per
    /// call when a full interval has passed; returns `None` when no save was
    /// due.
    pub fn poll_autosave(
        &mut self,
        session: &SessionStore,
        elapsed: Duration,
    ) -> Option<Result<(), PersistenceError>> {
        let schedule = self.autosave.as_mut()?;
        schedule.since_last_save += elapsed;
        if schedule.since_last_save < schedule.interval {
            return None;
        }
        while schedule.since_last_save >= schedule.interval {
            schedule.since_last_save -= schedule.interval;
        }

        let result = self.save(session);
        if let Err(e) = &result {
            warn!(error = %e, "autosave failed");
        }
        Some(result)
    }
}
