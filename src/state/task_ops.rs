use chrono::Utc;

use crate::model::{Task, TaskDraft};
use crate::store::KvStore;

use super::AppState;
use super::ids::{next_task_id, normalize_task_id};

impl<S: KvStore> AppState<S> {
    /// Commit a task. An absent, empty, or `"new"` id gets the next global
    /// id; a lowercase `t-` prefix is normalized; anything else is stored
    /// verbatim. `createdAt` defaults to now, comments to empty. Returns
    /// the created task.
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let id = match draft.id.as_deref() {
            None | Some("") | Some("new") => next_task_id(self.tasks()),
            Some(id) => normalize_task_id(id),
        };

        let task = Task {
            id,
            space_id: draft.space_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            kind: draft.kind,
            priority: draft.priority,
            assignee: draft.assignee,
            due_date: draft.due_date,
            parent_id: draft.parent_id,
            comments: draft.comments.unwrap_or_default(),
            created_at: Some(draft.created_at.unwrap_or_else(Utc::now)),
            updated_at: None,
        };
        self.tasks_mut().push(task.clone());
        self.persist_tasks();
        task
    }

    /// Set a task's status field only. No validation against the space's
    /// template, since the board only offers legal drop targets. Unknown ids
    /// are a silent no-op.
    pub fn update_task_status(&mut self, task_id: &str, new_status: &str) {
        if let Some(task) = self.tasks_mut().iter_mut().find(|t| t.id == task_id) {
            task.status = new_status.to_string();
        }
        self.persist_tasks();
    }

    /// Replace the task with the matching id wholesale. Unknown ids are a
    /// silent no-op.
    pub fn update_task(&mut self, updated: Task) {
        if let Some(task) = self.tasks_mut().iter_mut().find(|t| t.id == updated.id) {
            *task = updated;
        }
        self.persist_tasks();
    }

    /// Remove exactly the named task. Children are not cascaded: a task
    /// whose `parentId` names the deleted id keeps that dangling reference.
    pub fn delete_task(&mut self, task_id: &str) {
        self.tasks_mut().retain(|t| t.id != task_id);
        self.persist_tasks();
    }
}
