use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EntryField, EntryKind, ProfileField, Template};

/// A user interaction forwarded from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Keystroke in one of the profile inputs.
    EditProfile { field: ProfileField, value: String },
    /// Skill checkbox changed.
    ToggleSkill { tag: String, selected: bool },
    /// Remove button on a chip.
    RemoveSkill { tag: String },
    /// Keystroke in the free-text skill input (not yet committed).
    EditSkillInput { text: String },
    /// Enter pressed in the free-text skill input.
    CommitCustomSkill { text: String },
    AddEntry { kind: EntryKind },
    RemoveEntry { kind: EntryKind, row_id: Uuid },
    EditEntry {
        kind: EntryKind,
        row_id: Uuid,
        field: EntryField,
        value: String,
    },
    ClearAll,
    Print,
    SelectTemplate { template: Template },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::EditProfile { .. } => "edit_profile",
            Action::ToggleSkill { .. } => "toggle_skill",
            Action::RemoveSkill { .. } => "remove_skill",
            Action::EditSkillInput { .. } => "edit_skill_input",
            Action::CommitCustomSkill { .. } => "commit_custom_skill",
            Action::AddEntry { .. } => "add_entry",
            Action::RemoveEntry { .. } => "remove_entry",
            Action::EditEntry { .. } => "edit_entry",
            Action::ClearAll => "clear_all",
            Action::Print => "print",
            Action::SelectTemplate { .. } => "select_template",
        }
    }
}

/// Host-side command the page must carry out after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Open the browser's native print dialog.
    Print,
    /// Smooth-scroll the window back to the top.
    ScrollToTop,
    /// Replace the entry-row containers (rows were added or removed).
    ReplaceRows,
    /// Overwrite the text inputs with the view's values. Only emitted when the
    /// state changed underneath what the user typed (clear, skill commit).
    ResetInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_action() {
        let json = r#"{"type":"edit_profile","field":"name","value":"Ada"}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            Action::EditProfile {
                field: ProfileField::Name,
                value: "Ada".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_unit_action() {
        let action: Action = serde_json::from_str(r#"{"type":"clear_all"}"#).unwrap();
        assert_eq!(action, Action::ClearAll);
        assert_eq!(action.name(), "clear_all");
    }

    #[test]
    fn test_deserialize_entry_edit_with_group_field_name() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"type":"edit_entry","kind":"experience","row_id":"{id}","field":"company","value":"Acme"}}"#
        );
        let action: Action = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            action,
            Action::EditEntry {
                kind: EntryKind::Experience,
                field: EntryField::Organization,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_template_rejected() {
        let json = r#"{"type":"select_template","template":"fancy"}"#;
        assert!(serde_json::from_str::<Action>(json).is_err());
    }
}
