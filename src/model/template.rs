//! The built-in template catalog: fixed workflow definitions a space picks
//! at creation time. Pure static data with lookup by id; the data layer
//! never validates task fields against it (the views only offer legal
//! choices).

/// One status column/stage of a template's workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStage {
    pub id: &'static str,
    pub name: &'static str,
    /// Opaque color tag consumed by the views.
    pub color: &'static str,
}

/// A workflow template: ordered status stages plus a task-type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Sidebar icon name; opaque to the data layer.
    pub icon: &'static str,
    pub color: &'static str,
    pub task_types: &'static [&'static str],
    pub statuses: &'static [StatusStage],
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "kanban-dev",
        name: "Kanban",
        description: "Simple, flexible workflow for continuous delivery.",
        icon: "Kanban",
        color: "bg-emerald-500",
        task_types: &["Task", "Bug", "Improvement"],
        statuses: &[
            StatusStage { id: "todo", name: "To Do", color: "bg-slate-200" },
            StatusStage { id: "in-progress", name: "In Progress", color: "bg-blue-200" },
            StatusStage { id: "done", name: "Done", color: "bg-emerald-200" },
        ],
    },
    Template {
        id: "scrum-dev",
        name: "Scrum",
        description: "Iterative delivery with Backlog, Sprints, and QA.",
        icon: "Code",
        color: "bg-blue-600",
        task_types: &["Epic", "Story", "Task", "Bug"],
        statuses: &[
            StatusStage { id: "backlog", name: "Backlog", color: "bg-slate-200" },
            StatusStage { id: "todo", name: "To Do", color: "bg-slate-300" },
            StatusStage { id: "in-progress", name: "In Progress", color: "bg-blue-200" },
            StatusStage { id: "review", name: "Code Review", color: "bg-purple-200" },
            StatusStage { id: "qa", name: "QA", color: "bg-orange-200" },
            StatusStage { id: "done", name: "Done", color: "bg-emerald-200" },
        ],
    },
    Template {
        id: "pm-dev",
        name: "Project Management",
        description: "Comprehensive project tracking for larger initiatives.",
        icon: "Target",
        color: "bg-indigo-600",
        task_types: &["Milestone", "Task", "Risk", "Deliverable"],
        statuses: &[
            StatusStage { id: "planning", name: "Planning", color: "bg-slate-300" },
            StatusStage { id: "in-progress", name: "In Progress", color: "bg-blue-200" },
            StatusStage { id: "blocked", name: "Blocked", color: "bg-red-200" },
            StatusStage { id: "review", name: "Review", color: "bg-purple-200" },
            StatusStage { id: "completed", name: "Completed", color: "bg-emerald-200" },
        ],
    },
    Template {
        id: "hr",
        name: "HR & Recruitment",
        description: "Manage recruitment, onboarding, and employee requests.",
        icon: "Users",
        color: "bg-rose-500",
        task_types: &["Recruitment", "Onboarding", "Leave Request", "Performance Review"],
        statuses: &[
            StatusStage { id: "requested", name: "Requested", color: "bg-slate-200" },
            StatusStage { id: "in-review", name: "In Review", color: "bg-blue-200" },
            StatusStage { id: "approved", name: "Approved", color: "bg-green-200" },
            StatusStage { id: "completed", name: "Completed", color: "bg-slate-800" },
        ],
    },
    Template {
        id: "sales",
        name: "Sales Pipeline",
        description: "Track leads, opportunities, and close deals.",
        icon: "Briefcase",
        color: "bg-amber-500",
        task_types: &["Lead", "Opportunity", "Deal", "Follow-up"],
        statuses: &[
            StatusStage { id: "new", name: "New Lead", color: "bg-blue-100" },
            StatusStage { id: "contacted", name: "Contacted", color: "bg-yellow-100" },
            StatusStage { id: "negotiation", name: "Negotiation", color: "bg-orange-100" },
            StatusStage { id: "won", name: "Won", color: "bg-emerald-200" },
            StatusStage { id: "lost", name: "Lost", color: "bg-red-200" },
        ],
    },
    Template {
        id: "it",
        name: "IT Support",
        description: "Handle incidents, service requests, and hardware.",
        icon: "Monitor",
        color: "bg-cyan-500",
        task_types: &["Incident", "Service Request", "Change"],
        statuses: &[
            StatusStage { id: "open", name: "Open", color: "bg-red-100" },
            StatusStage { id: "assigned", name: "Assigned", color: "bg-blue-100" },
            StatusStage { id: "in-progress", name: "In Progress", color: "bg-yellow-100" },
            StatusStage { id: "resolved", name: "Resolved", color: "bg-emerald-100" },
            StatusStage { id: "closed", name: "Closed", color: "bg-gray-200" },
        ],
    },
];

/// Look up a template by id.
pub fn template_by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_catalog_entry() {
        for template in TEMPLATES {
            assert_eq!(template_by_id(template.id), Some(template));
        }
        assert!(template_by_id("nonexistent").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_template_has_stages_and_types() {
        for template in TEMPLATES {
            assert!(!template.statuses.is_empty(), "{}", template.id);
            assert!(!template.task_types.is_empty(), "{}", template.id);
        }
    }
}
