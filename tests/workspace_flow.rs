//! End-to-end flows across spaces, tasks, sprints, and the drawer,
//! exercising the manager the way the views drive it.

use bestask::model::{Priority, SpaceDraft, SprintDraft, TaskDraft};
use bestask::state::{AppState, DraftOverrides, DrawerState, NEW_TASK, SEED_SPACE_ID};
use bestask::store::MemoryStore;
use pretty_assertions::assert_eq;

fn fresh() -> AppState<MemoryStore> {
    AppState::load(MemoryStore::new())
}

#[test]
fn task_ids_stay_globally_sequential_across_spaces() {
    let mut state = fresh();
    let second = state.add_space(SpaceDraft {
        name: "Second".into(),
        template_id: "kanban-dev".into(),
        ..Default::default()
    });

    // Seed is T-1..T-3; every add advances the same counter no matter
    // which space it lands in.
    let mut ids = Vec::new();
    for i in 0..4 {
        let space_id = if i % 2 == 0 {
            SEED_SPACE_ID.to_string()
        } else {
            second.id.clone()
        };
        ids.push(
            state
                .add_task(TaskDraft {
                    space_id,
                    title: format!("task {i}"),
                    status: "todo".into(),
                    kind: "Task".into(),
                    ..Default::default()
                })
                .id,
        );
    }
    assert_eq!(ids, ["T-4", "T-5", "T-6", "T-7"]);
}

#[test]
fn board_to_drawer_to_save_flow() {
    let mut state = fresh();

    // A board column's "+" opens the drawer preloaded with its status.
    state.open_task_drawer(
        NEW_TASK,
        DraftOverrides {
            status: Some("open".into()),
            kind: Some("Incident".into()),
            priority: Some(Priority::High),
            ..Default::default()
        },
    );

    // The form fills in a title.
    state.draft_mut().unwrap().title = "Printer on fire".into();

    let task = state.save_draft().unwrap();
    assert_eq!(task.id, "T-4");
    assert_eq!(task.status, "open");
    assert_eq!(task.kind, "Incident");
    assert_eq!(state.drawer(), &DrawerState::Closed);

    // It shows up in the board's "open" column.
    let columns = state.board_columns(SEED_SPACE_ID);
    let open = columns.iter().find(|(stage, _)| stage.id == "open").unwrap();
    assert_eq!(open.1.len(), 1);
    assert_eq!(open.1[0].title, "Printer on fire");
}

#[test]
fn deleting_a_space_spares_other_spaces_tasks() {
    let mut state = fresh();
    let doomed = state.add_space(SpaceDraft {
        name: "Doomed".into(),
        template_id: "sales".into(),
        ..Default::default()
    });
    state.add_task(TaskDraft {
        space_id: doomed.id.clone(),
        title: "lead".into(),
        status: "new".into(),
        kind: "Lead".into(),
        ..Default::default()
    });

    state.delete_space(&doomed.id);

    assert_eq!(state.tasks().len(), 3);
    assert!(state.tasks().iter().all(|t| t.space_id == SEED_SPACE_ID));
    assert_eq!(state.space_tasks(&doomed.id).count(), 0);
}

#[test]
fn sprint_lifecycle_with_edits() {
    let mut state = fresh();
    let sprint_draft = |n: u32| SprintDraft {
        name: format!("ES Sprint {n}"),
        start_date: "2025-07-01".parse().unwrap(),
        end_date: "2025-07-14".parse().unwrap(),
        goal: String::new(),
        task_count: 2,
    };

    state.start_sprint(SEED_SPACE_ID, sprint_draft(1));
    state.start_sprint(SEED_SPACE_ID, sprint_draft(2));
    assert_eq!(state.get_active_sprint(SEED_SPACE_ID), 2);

    let first_id = state.sprints()[SEED_SPACE_ID].sprints[0].id.clone();
    state.delete_sprint(SEED_SPACE_ID, &first_id);

    let record = &state.sprints()[SEED_SPACE_ID];
    assert_eq!(record.sprints.len(), 1);
    assert_eq!(record.sprints[0].number, 2);
    // Deleting never rewinds the counter.
    assert_eq!(state.get_active_sprint(SEED_SPACE_ID), 2);
}

#[test]
fn orphaned_children_survive_parent_deletion() {
    let mut state = fresh();
    let child = state.add_task(TaskDraft {
        space_id: SEED_SPACE_ID.into(),
        title: "child story".into(),
        status: "todo".into(),
        kind: "Story".into(),
        parent_id: Some("T-2".into()),
        ..Default::default()
    });
    assert_eq!(child.id, "T-4");

    state.delete_task("T-2");

    let orphan = state.task("T-4").unwrap();
    assert_eq!(orphan.parent_id.as_deref(), Some("T-2"));
    assert!(state.task("T-2").is_none());
}

#[test]
fn restart_mid_flow_resumes_where_it_left_off() {
    let mut state = fresh();
    state.add_task(TaskDraft {
        space_id: SEED_SPACE_ID.into(),
        title: "before restart".into(),
        status: "todo".into(),
        kind: "Task".into(),
        ..Default::default()
    });

    // Restart. The next id must continue after the persisted tasks.
    let mut state = AppState::load(state.into_store());
    let task = state.add_task(TaskDraft {
        space_id: SEED_SPACE_ID.into(),
        title: "after restart".into(),
        status: "todo".into(),
        kind: "Task".into(),
        ..Default::default()
    });
    assert_eq!(task.id, "T-5");
}
