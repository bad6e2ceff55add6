//! Task id parsing and the global numbering rule.
//!
//! Task ids carry a `T-<digits>` marker; the scanner is case-insensitive
//! and unanchored so every id form in legacy stored data matches. The next
//! id is one past the highest number found across ALL tasks. Numbering is
//! global, not per-space: creating a task in any space advances the same
//! counter.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Task;

static TASK_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)T-(\d+)").expect("task id pattern"));

/// The numeric suffix of a task id, if the id carries a `T-<digits>` marker
/// anywhere in it. Numbers too large for u64 count as no match.
pub fn task_number(id: &str) -> Option<u64> {
    let captures = TASK_NUMBER.captures(id)?;
    captures[1].parse().ok()
}

/// The next free task number: one past the highest numbered id, where ids
/// that never match count as 0. An empty collection starts at 1.
pub fn next_task_number(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|t| task_number(&t.id).unwrap_or(0))
        .max()
        .unwrap_or(0)
        + 1
}

/// The next free task id, formatted with the canonical uppercase prefix.
pub fn next_task_id(tasks: &[Task]) -> String {
    format!("T-{}", next_task_number(tasks))
}

/// Rewrite an exact lowercase `t-` prefix to `T-`. Deliberately narrow:
/// no other form is touched, so legacy ids round-trip unchanged.
pub fn normalize_task_id(id: &str) -> String {
    match id.strip_prefix("t-") {
        Some(rest) => format!("T-{rest}"),
        None => id.to_string(),
    }
}
