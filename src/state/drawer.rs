//! The task drawer's draft lifecycle.
//!
//! Closed → Viewing(existing id) when the drawer opens on a saved task, or
//! Closed → Editing(draft) when it opens on the `"new"` sentinel. The draft
//! carries a prospective next id that is NOT reserved: nothing advances the
//! counter until the draft is saved, so two consecutive opens produce the
//! same id and whoever saves first gets it.

use chrono::{DateTime, Utc};

use crate::model::{Priority, Task, TaskDraft};
use crate::store::KvStore;

use super::AppState;
use super::ids::next_task_id;

/// Sentinel id that opens the drawer in draft mode.
pub const NEW_TASK: &str = "new";

/// What the drawer is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    /// Viewing (and editing in place) an existing task by id.
    Viewing(String),
    /// Composing an unsaved draft.
    Editing(TaskDraft),
}

/// Caller-supplied field overrides for a fresh draft: the board passes its
/// column's status, the calendar a cell's due date, the timeline a parent
/// id. Unset fields keep the draft defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftOverrides {
    pub title: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub parent_id: Option<String>,
}

impl<S: KvStore> AppState<S> {
    /// Open the drawer. The `"new"` sentinel builds a draft in the active
    /// space with a prospective id and the standard defaults, overridden
    /// field-wise by `overrides`; any other id opens in viewing mode.
    pub fn open_task_drawer(&mut self, task_id: &str, overrides: DraftOverrides) {
        if task_id == NEW_TASK {
            let draft = TaskDraft {
                id: Some(next_task_id(self.tasks())),
                space_id: self.active_space_id().to_string(),
                title: overrides.title.unwrap_or_default(),
                description: String::new(),
                status: overrides.status.unwrap_or_else(|| "todo".to_string()),
                kind: overrides.kind.unwrap_or_else(|| "Task".to_string()),
                priority: overrides.priority.or(Some(Priority::Medium)),
                assignee: overrides
                    .assignee
                    .or_else(|| Some("Unassigned".to_string())),
                due_date: overrides.due_date,
                parent_id: overrides.parent_id,
                comments: Some(Vec::new()),
                created_at: None,
            };
            self.set_drawer(DrawerState::Editing(draft));
        } else {
            self.set_drawer(DrawerState::Viewing(task_id.to_string()));
        }
    }

    /// Close the drawer, discarding any unsaved draft.
    pub fn close_task_drawer(&mut self) {
        self.set_drawer(DrawerState::Closed);
    }

    /// The draft under edit, for form bindings. `None` unless composing.
    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match self.drawer_mut() {
            DrawerState::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Commit the draft through `add_task` and close the drawer. Returns
    /// the created task, or `None` when no draft was open.
    pub fn save_draft(&mut self) -> Option<Task> {
        match self.take_drawer() {
            DrawerState::Editing(draft) => Some(self.add_task(draft)),
            other => {
                self.set_drawer(other);
                None
            }
        }
    }
}
