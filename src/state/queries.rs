//! Read-only derived queries consumed by the view layer. None of these
//! touch the store.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::model::{Priority, Space, StatusStage, Task, template_by_id};
use crate::store::KvStore;

use super::AppState;

/// Summary-view statistics for one space, computed against a caller-supplied
/// "now" so the 7-day windows are testable.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceSummary {
    pub total: usize,
    /// Count per template status id, in template order.
    pub by_status: IndexMap<&'static str, usize>,
    /// Count per task type present in the space, in first-seen order.
    pub by_kind: IndexMap<String, usize>,
    pub by_priority: [(Priority, usize); 3],
    pub created_last_week: usize,
    pub updated_last_week: usize,
    pub completed_last_week: usize,
    /// Not done, due between now and seven days out.
    pub due_soon: usize,
    /// Ids of the five most recently created tasks, newest first.
    pub recent_activity: Vec<String>,
}

impl<S: KvStore> AppState<S> {
    /// All tasks belonging to a space, in collection (insertion) order.
    /// A lazy filter; the iterator borrows the live collection.
    pub fn space_tasks<'a>(&'a self, space_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks().iter().filter(move |t| t.space_id == space_id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks().iter().find(|t| t.id == task_id)
    }

    pub fn space(&self, space_id: &str) -> Option<&Space> {
        self.spaces().iter().find(|s| s.id == space_id)
    }

    /// The board grouping: one column per status stage of the space's
    /// template, each holding that space's tasks with the matching status
    /// in insertion order. Unknown space or template yields no columns.
    pub fn board_columns<'a>(
        &'a self,
        space_id: &'a str,
    ) -> Vec<(&'static StatusStage, Vec<&'a Task>)> {
        let Some(template) = self.space(space_id).and_then(|s| template_by_id(&s.template_id))
        else {
            return Vec::new();
        };
        template
            .statuses
            .iter()
            .map(|stage| {
                let column = self
                    .space_tasks(space_id)
                    .filter(|t| t.status == stage.id)
                    .collect();
                (stage, column)
            })
            .collect()
    }

    /// Space tasks due on a given calendar day (UTC), for the calendar
    /// view's day cells.
    pub fn tasks_due_on<'a>(&'a self, space_id: &'a str, date: NaiveDate) -> Vec<&'a Task> {
        self.space_tasks(space_id)
            .filter(|t| t.due_date.is_some_and(|d| d.date_naive() == date))
            .collect()
    }

    /// The summary view's statistics for a space.
    pub fn summary(&self, space_id: &str, now: DateTime<Utc>) -> SpaceSummary {
        let week_ago = now - Duration::days(7);
        let week_ahead = now + Duration::days(7);
        let tasks: Vec<&Task> = self.space_tasks(space_id).collect();

        let mut by_status = IndexMap::new();
        if let Some(template) = self.space(space_id).and_then(|s| template_by_id(&s.template_id)) {
            for stage in template.statuses {
                let count = tasks.iter().filter(|t| t.status == stage.id).count();
                by_status.insert(stage.id, count);
            }
        }

        let mut by_kind: IndexMap<String, usize> = IndexMap::new();
        for task in &tasks {
            *by_kind.entry(task.kind.clone()).or_default() += 1;
        }

        let count_priority = |p: Priority| tasks.iter().filter(|t| t.priority == Some(p)).count();
        let by_priority = [
            (Priority::High, count_priority(Priority::High)),
            (Priority::Medium, count_priority(Priority::Medium)),
            (Priority::Low, count_priority(Priority::Low)),
        ];

        let in_last_week =
            |stamp: Option<DateTime<Utc>>| stamp.is_some_and(|at| at >= week_ago && at <= now);

        let mut recent: Vec<&Task> = tasks
            .iter()
            .copied()
            .filter(|t| t.created_at.is_some())
            .collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent_activity = recent.iter().take(5).map(|t| t.id.clone()).collect();

        SpaceSummary {
            total: tasks.len(),
            by_status,
            by_kind,
            by_priority,
            created_last_week: tasks.iter().filter(|t| in_last_week(t.created_at)).count(),
            updated_last_week: tasks.iter().filter(|t| in_last_week(t.updated_at)).count(),
            completed_last_week: tasks
                .iter()
                .filter(|t| t.status == "done" && in_last_week(t.created_at))
                .count(),
            due_soon: tasks
                .iter()
                .filter(|t| {
                    t.status != "done"
                        && t.due_date.is_some_and(|due| due >= now && due <= week_ahead)
                })
                .count(),
            recent_activity,
        }
    }
}
