use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A sprint within one space. `number` is the per-space ordinal assigned
/// when the sprint is started; `id` identifies the sprint for edit/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub number: u32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub goal: String,
    /// Snapshot of the sprint backlog size at start time.
    #[serde(default)]
    pub task_count: usize,
}

/// Per-space sprint record: the running counter plus every sprint started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSprints {
    pub active_sprint: u32,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
}

/// spaceId → sprint record. An IndexMap so the persisted object's key order
/// survives load/save round trips.
pub type SprintMap = IndexMap<String, SpaceSprints>;

/// Input to `start_sprint`; id and number are assigned by the operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goal: String,
    pub task_count: usize,
}

/// Field-wise update for `update_sprint`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub goal: Option<String>,
}

impl Sprint {
    pub fn apply(&mut self, patch: SprintPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
    }

    /// Whether a calendar day falls inside this sprint (inclusive on both
    /// ends, whole days).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl SpaceSprints {
    /// The first sprint whose date range contains `date`, if any. Drives
    /// the calendar's sprint band.
    pub fn sprint_covering(&self, date: NaiveDate) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.covers(date))
    }
}
