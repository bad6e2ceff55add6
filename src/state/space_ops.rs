use uuid::Uuid;

use crate::model::{DEFAULT_MEMBERS, Space, SpaceDraft, SpacePatch, default_members};
use crate::store::KvStore;

use super::AppState;

impl<S: KvStore> AppState<S> {
    /// Create a space with a fresh id. Owner defaults to the first default
    /// member, the roster to the full default list. Returns the created
    /// space so callers can navigate to it.
    pub fn add_space(&mut self, draft: SpaceDraft) -> Space {
        let space = Space {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            template_id: draft.template_id,
            members: draft.members.unwrap_or_else(default_members),
            owner: draft.owner.or_else(|| Some(DEFAULT_MEMBERS[0].to_string())),
            icon: draft.icon,
        };
        self.spaces_mut().push(space.clone());
        self.persist_spaces();
        space
    }

    /// Merge updates into the matching space. Unknown ids are a silent
    /// no-op; the collection is persisted either way.
    pub fn update_space(&mut self, space_id: &str, patch: SpacePatch) {
        if let Some(space) = self.spaces_mut().iter_mut().find(|s| s.id == space_id) {
            space.apply(patch);
        }
        self.persist_spaces();
    }

    /// Delete a space and every task that belongs to it. If the deleted
    /// space was active, the first remaining space (or the home sentinel)
    /// becomes active.
    pub fn delete_space(&mut self, space_id: &str) {
        self.spaces_mut().retain(|s| s.id != space_id);
        self.tasks_mut().retain(|t| t.space_id != space_id);
        self.reset_active_after_delete(space_id);
        self.persist_spaces();
        self.persist_tasks();
    }

    /// Union new member names into the space's roster, preserving
    /// first-seen order with existing members first.
    pub fn add_members_to_space(&mut self, space_id: &str, new_members: &[String]) {
        if let Some(space) = self.spaces_mut().iter_mut().find(|s| s.id == space_id) {
            for member in new_members {
                if !space.members.contains(member) {
                    space.members.push(member.clone());
                }
            }
        }
        self.persist_spaces();
    }
}
