//! Key-value persistence, a local-storage analogue.
//!
//! Each collection is serialized whole and written under a fixed key; a
//! read returns the full stored value or nothing. Writes are last-write-wins
//! per key and must not fail observably: an adapter that can fail
//! internally (disk full, permissions) logs and drops the write instead.

mod file;
mod memory;

pub use file::{FileStore, StoreError};
pub use memory::MemoryStore;

/// Storage key for the space collection (JSON array of spaces).
pub const SPACES_KEY: &str = "bestask_spaces";
/// Storage key for the task collection (JSON array of tasks).
pub const TASKS_KEY: &str = "bestask_tasks";
/// Storage key for the active space id (raw string, not JSON).
pub const ACTIVE_SPACE_KEY: &str = "bestask_active_space";
/// Storage key for the spaceId → sprint record mapping (JSON object).
pub const SPRINTS_KEY: &str = "bestask_sprints";

/// A string key-value store with whole-value reads and writes.
pub trait KvStore {
    /// The stored value for `key`, or `None` if the key was never written
    /// or its value cannot be read back.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`. Must not fail observably.
    fn set(&mut self, key: &str, value: &str);
}
