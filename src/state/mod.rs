//! The application state manager.
//!
//! [`AppState`] owns the in-memory collections (spaces, tasks, sprints by
//! space) plus the active-space pointer and the task-drawer state. Every
//! mutating operation re-serializes the whole affected collection to the
//! store before returning, so each mutation is immediately durable. All
//! access is single-threaded and synchronous; there is no interior
//! mutability and no background work.
//!
//! Operations referencing an unknown id are silent no-ops by design; the
//! views rely on the manager never failing observably.

pub mod drawer;
pub mod ids;
pub mod queries;
pub mod seed;

mod space_ops;
mod sprint_ops;
mod task_ops;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use drawer::{DraftOverrides, DrawerState, NEW_TASK};
pub use seed::SEED_SPACE_ID;

use crate::model::{Space, SprintMap, Task};
use crate::store::{ACTIVE_SPACE_KEY, KvStore, SPACES_KEY, SPRINTS_KEY, TASKS_KEY};

/// Sentinel active-space value when the last space is deleted.
pub const HOME_SPACE: &str = "home";

/// The shared application state and its persistence mirror.
pub struct AppState<S: KvStore> {
    store: S,
    spaces: Vec<Space>,
    tasks: Vec<Task>,
    sprints: SprintMap,
    active_space_id: String,
    drawer: DrawerState,
}

impl<S: KvStore> AppState<S> {
    /// Load state from the store. Each collection is read independently;
    /// an absent or unreadable value falls back to the built-in seed for
    /// that collection only.
    pub fn load(store: S) -> Self {
        let spaces = read_json(&store, SPACES_KEY).unwrap_or_else(seed::seed_spaces);
        let tasks = read_json(&store, TASKS_KEY).unwrap_or_else(seed::seed_tasks);
        let sprints = read_json(&store, SPRINTS_KEY).unwrap_or_default();
        let active_space_id = store
            .get(ACTIVE_SPACE_KEY)
            .unwrap_or_else(|| SEED_SPACE_ID.to_string());

        AppState {
            store,
            spaces,
            tasks,
            sprints,
            active_space_id,
            drawer: DrawerState::Closed,
        }
    }

    // --- accessors ---

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sprints(&self) -> &SprintMap {
        &self.sprints
    }

    pub fn active_space_id(&self) -> &str {
        &self.active_space_id
    }

    pub fn active_space(&self) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == self.active_space_id)
    }

    /// Switch the active space and persist the pointer.
    pub fn set_active_space(&mut self, space_id: &str) {
        self.active_space_id = space_id.to_string();
        self.persist_active_space();
    }

    /// Tear down, handing the adapter back to the caller.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- internal: collection access for the op modules ---

    pub(crate) fn spaces_mut(&mut self) -> &mut Vec<Space> {
        &mut self.spaces
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub(crate) fn sprints_mut(&mut self) -> &mut SprintMap {
        &mut self.sprints
    }

    pub(crate) fn set_drawer(&mut self, drawer: DrawerState) {
        self.drawer = drawer;
    }

    pub(crate) fn take_drawer(&mut self) -> DrawerState {
        std::mem::replace(&mut self.drawer, DrawerState::Closed)
    }

    pub(crate) fn drawer_mut(&mut self) -> &mut DrawerState {
        &mut self.drawer
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    pub(crate) fn reset_active_after_delete(&mut self, deleted: &str) {
        if self.active_space_id == deleted {
            self.active_space_id = self
                .spaces
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_else(|| HOME_SPACE.to_string());
            self.persist_active_space();
        }
    }

    // --- internal: persistence mirror ---

    pub(crate) fn persist_spaces(&mut self) {
        write_json(&mut self.store, SPACES_KEY, &self.spaces);
    }

    pub(crate) fn persist_tasks(&mut self) {
        write_json(&mut self.store, TASKS_KEY, &self.tasks);
    }

    pub(crate) fn persist_sprints(&mut self) {
        write_json(&mut self.store, SPRINTS_KEY, &self.sprints);
    }

    fn persist_active_space(&mut self) {
        let id = self.active_space_id.clone();
        self.store.set(ACTIVE_SPACE_KEY, &id);
    }
}

fn read_json<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "discarding unreadable saved data");
            None
        }
    }
}

fn write_json<T: Serialize>(store: &mut impl KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => {
            store.set(key, &json);
            debug!(key, bytes = json.len(), "persisted collection");
        }
        Err(err) => warn!(key, %err, "dropping unserializable collection"),
    }
}
