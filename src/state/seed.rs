//! Built-in seed data, used whenever a collection's stored value is absent
//! or unreadable. Each collection falls back independently.

use chrono::{Duration, Utc};

use crate::model::{DEFAULT_MEMBERS, Priority, Space, Task, default_members};

/// Id of the seed space; also the initial active space.
pub const SEED_SPACE_ID: &str = "demo-space";

pub fn seed_spaces() -> Vec<Space> {
    vec![Space {
        id: SEED_SPACE_ID.into(),
        name: "IT Support".into(),
        description: "Tracking the development of this project.".into(),
        template_id: "it".into(),
        members: default_members(),
        owner: None,
        icon: Some("Code".into()),
    }]
}

pub fn seed_tasks() -> Vec<Task> {
    let now = Utc::now();
    let demo = |id: &str, title: &str, description: &str, status: &str| Task {
        id: id.into(),
        space_id: SEED_SPACE_ID.into(),
        title: title.into(),
        description: description.into(),
        status: status.into(),
        kind: "Story".into(),
        priority: None,
        assignee: None,
        due_date: Some(now),
        parent_id: None,
        comments: Vec::new(),
        created_at: None,
        updated_at: None,
    };

    let mut tasks = vec![
        demo(
            "T-1",
            "Setup Project Structure",
            "Initialize build tooling and folder structure.",
            "done",
        ),
        demo(
            "T-2",
            "Implement Sidebar",
            "Create the responsive sidebar navigation.",
            "in-progress",
        ),
        demo(
            "T-3",
            "Kanban Board Drag & Drop",
            "Integrate the board drag-and-drop flow.",
            "todo",
        ),
    ];
    tasks[0].priority = Some(Priority::High);
    tasks[0].assignee = Some(DEFAULT_MEMBERS[0].into());
    tasks[1].priority = Some(Priority::Medium);
    tasks[1].assignee = Some(DEFAULT_MEMBERS[1].into());
    tasks[2].priority = Some(Priority::High);
    tasks[2].assignee = Some(DEFAULT_MEMBERS[2].into());
    tasks[2].due_date = Some(now + Duration::days(1));
    tasks
}
