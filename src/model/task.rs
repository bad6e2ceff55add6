use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, stored as the capitalized strings the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A comment on a task. The id is a millisecond timestamp, matching the
/// comment records already present in stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: impl Into<String>, at: DateTime<Utc>) -> Self {
        Comment {
            id: at.timestamp_millis(),
            text: text.into(),
            author: author.into(),
            created_at: at,
        }
    }
}

/// A work item. IDs look like `T-14` and are unique across the whole task
/// collection, not per space.
///
/// Serialized camelCase with a `type` key, compatible with stored data
/// written by the web frontend. `createdAt` is optional on the wire
/// (seed tasks lack it); `updatedAt` round-trips when present but no core
/// operation writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub space_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A partial, unsaved task: the input to `add_task` and the value held by
/// the drawer while a "new task" form is open. Promoted to a [`Task`] only
/// on save; never visible to queries before that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDraft {
    /// `None`, `""`, or the literal `"new"` means "assign the next id".
    pub id: Option<String>,
    pub space_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    #[serde(with = "flexible_date")]
    pub due_date: Option<DateTime<Utc>>,
    pub parent_id: Option<String>,
    pub comments: Option<Vec<Comment>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Due dates in stored data come in two shapes: full RFC 3339 timestamps
/// (`new Date().toISOString()`) and bare `YYYY-MM-DD` strings written by the
/// calendar's quick-add. Accept both on input, read bare dates as midnight
/// UTC, and always write RFC 3339 with millisecond precision.
mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => ser.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(de)? else {
            return Ok(None);
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Ok(Some(date.and_time(NaiveTime::MIN).and_utc()));
        }
        Err(de::Error::custom(format!("unrecognized date: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn task_serializes_with_frontend_field_names() {
        let task = Task {
            id: "T-1".into(),
            space_id: "demo-space".into(),
            title: "Setup".into(),
            description: String::new(),
            status: "done".into(),
            kind: "Story".into(),
            priority: Some(Priority::High),
            assignee: Some("Nurlan Ibrahimov".into()),
            due_date: None,
            parent_id: None,
            comments: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["spaceId"], "demo-space");
        assert_eq!(json["type"], "Story");
        assert_eq!(json["priority"], "High");
        assert!(json.get("dueDate").is_none());
        assert!(json.get("parentId").is_none());
    }

    #[test]
    fn due_date_accepts_full_timestamp_and_bare_date() {
        let full: Task = serde_json::from_str(
            r#"{"id":"T-1","spaceId":"s","title":"a","status":"todo","type":"Task",
                "dueDate":"2025-03-04T10:30:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            full.due_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 4, 10, 30, 0).unwrap())
        );

        let bare: Task = serde_json::from_str(
            r#"{"id":"T-2","spaceId":"s","title":"a","status":"todo","type":"Task",
                "dueDate":"2025-03-04"}"#,
        )
        .unwrap();
        assert_eq!(
            bare.due_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn due_date_rejects_garbage() {
        let result = serde_json::from_str::<Task>(
            r#"{"id":"T-1","spaceId":"s","title":"a","status":"todo","type":"Task",
                "dueDate":"next tuesday"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn comment_id_is_millisecond_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let comment = Comment::new("looks good", "You", at);
        assert_eq!(comment.id, at.timestamp_millis());
    }

    #[test]
    fn draft_round_trips_through_json() {
        let draft = TaskDraft {
            id: Some("T-9".into()),
            space_id: "demo-space".into(),
            title: "Draft".into(),
            status: "todo".into(),
            kind: "Task".into(),
            priority: Some(Priority::Medium),
            assignee: Some("Unassigned".into()),
            comments: Some(Vec::new()),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        let back: TaskDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
