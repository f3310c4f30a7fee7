//! Durable storage of a session as a single versioned JSON snapshot.

pub mod gateway;
pub mod snapshot;
pub mod storage;

pub use gateway::{LoadOutcome, PersistenceGateway, SaveInfo};
pub use snapshot::{BabyStateRecord, ResolvedSnapshot, Snapshot, UnlockFlag};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
