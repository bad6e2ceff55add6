use uuid::Uuid;

use crate::model::{Sprint, SprintDraft, SprintPatch};
use crate::store::KvStore;

use super::AppState;

impl<S: KvStore> AppState<S> {
    /// Start a sprint for a space: bump the space's counter (a space with
    /// no record counts as 0), stamp the new ordinal on the sprint, and
    /// append it to the space's list.
    pub fn start_sprint(&mut self, space_id: &str, draft: SprintDraft) {
        let record = self.sprints_mut().entry(space_id.to_string()).or_default();
        record.active_sprint += 1;
        let number = record.active_sprint;
        record.sprints.push(Sprint {
            id: Uuid::new_v4().to_string(),
            number,
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            goal: draft.goal,
            task_count: draft.task_count,
        });
        self.persist_sprints();
    }

    /// Merge updates into the sprint with the matching id inside the
    /// space's list. Unknown space or sprint ids are a silent no-op.
    pub fn update_sprint(&mut self, space_id: &str, sprint_id: &str, patch: SprintPatch) {
        if let Some(record) = self.sprints_mut().get_mut(space_id)
            && let Some(sprint) = record.sprints.iter_mut().find(|s| s.id == sprint_id)
        {
            sprint.apply(patch);
        }
        self.persist_sprints();
    }

    /// Remove the sprint with the matching id from the space's list. The
    /// counter is not rewound. Unknown ids are a silent no-op.
    pub fn delete_sprint(&mut self, space_id: &str, sprint_id: &str) {
        if let Some(record) = self.sprints_mut().get_mut(space_id) {
            record.sprints.retain(|s| s.id != sprint_id);
        }
        self.persist_sprints();
    }

    /// The space's active sprint ordinal. A space with no record reads as
    /// 1, and so does a stored counter of 0 (legacy readers treated the
    /// counter as falsy, and hand-edited storage can contain a 0).
    pub fn get_active_sprint(&self, space_id: &str) -> u32 {
        self.sprints()
            .get(space_id)
            .map(|r| r.active_sprint)
            .filter(|n| *n != 0)
            .unwrap_or(1)
    }
}
