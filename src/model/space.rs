use serde::{Deserialize, Serialize};

/// Default team roster. Every new space starts with these members, and the
/// first entry is the default owner.
pub const DEFAULT_MEMBERS: [&str; 5] = [
    "Nurlan Ibrahimov",
    "Ulviyya Mikayilova",
    "Jamal Zeynalli",
    "Gunel Akbarli",
    "Ulkar Karimova",
];

/// Copy of the default roster as owned strings.
pub fn default_members() -> Vec<String> {
    DEFAULT_MEMBERS.iter().map(|m| (*m).to_string()).collect()
}

/// A project space: a container of tasks sharing one workflow template.
///
/// Serialized camelCase to stay compatible with stored data written by the
/// web frontend. `owner` and `icon` are optional on the wire; the seed
/// space predates both fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_id: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Icon name shown in the sidebar; opaque to the data layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Input to `add_space`. The id is always generated, never supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceDraft {
    pub name: String,
    pub description: String,
    pub template_id: String,
    /// When `None`, the new space gets the full default roster.
    pub members: Option<Vec<String>>,
    /// When `None`, the first default member owns the space.
    pub owner: Option<String>,
    pub icon: Option<String>,
}

/// Field-wise update for `update_space`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub members: Option<Vec<String>>,
    pub owner: Option<String>,
    pub icon: Option<String>,
}

impl Space {
    pub fn apply(&mut self, patch: SpacePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(template_id) = patch.template_id {
            self.template_id = template_id;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
        if let Some(owner) = patch.owner {
            self.owner = Some(owner);
        }
        if let Some(icon) = patch.icon {
            self.icon = Some(icon);
        }
    }
}
