//! Structural contract between the synchronizer and the hosting page markup.
//!
//! The page is expected to expose a fixed set of named controls. A control that
//! is missing is not an error: actions that depend on it are skipped.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::form::Action;
use crate::models::{EntryKind, ProfileField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Name,
    Email,
    Phone,
    Summary,
    SkillCheckboxes,
    CustomSkillInput,
    SelectedSkills,
    EducationList,
    ExperienceList,
    AddEducation,
    AddExperience,
    ProgressBar,
    ProgressLabel,
    ClearButton,
    PrintButton,
    TemplateSelect,
    ResumePreview,
}

impl Control {
    pub const ALL: [Control; 17] = [
        Control::Name,
        Control::Email,
        Control::Phone,
        Control::Summary,
        Control::SkillCheckboxes,
        Control::CustomSkillInput,
        Control::SelectedSkills,
        Control::EducationList,
        Control::ExperienceList,
        Control::AddEducation,
        Control::AddExperience,
        Control::ProgressBar,
        Control::ProgressLabel,
        Control::ClearButton,
        Control::PrintButton,
        Control::TemplateSelect,
        Control::ResumePreview,
    ];

    /// The markup fragment that identifies this control.
    pub fn marker(self) -> String {
        match self {
            Control::SkillCheckboxes => "skill-checkbox".to_string(),
            other => format!("id=\"{}\"", other.dom_id()),
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Control::Name => ProfileField::Name.control_id(),
            Control::Email => ProfileField::Email.control_id(),
            Control::Phone => ProfileField::Phone.control_id(),
            Control::Summary => ProfileField::Summary.control_id(),
            Control::SkillCheckboxes => "",
            Control::CustomSkillInput => "customSkillInput",
            Control::SelectedSkills => "selectedSkills",
            Control::EducationList => EntryKind::Education.list_control_id(),
            Control::ExperienceList => EntryKind::Experience.list_control_id(),
            Control::AddEducation => EntryKind::Education.add_control_id(),
            Control::AddExperience => EntryKind::Experience.add_control_id(),
            Control::ProgressBar => "progressBar",
            Control::ProgressLabel => "progressLabel",
            Control::ClearButton => "clearBtn",
            Control::PrintButton => "printBtn",
            Control::TemplateSelect => "templateSelect",
            Control::ResumePreview => "resumePreview",
        }
    }

    fn for_profile(field: ProfileField) -> Self {
        match field {
            ProfileField::Name => Control::Name,
            ProfileField::Email => Control::Email,
            ProfileField::Phone => Control::Phone,
            ProfileField::Summary => Control::Summary,
        }
    }

    fn list_for(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Education => Control::EducationList,
            EntryKind::Experience => Control::ExperienceList,
        }
    }

    fn add_for(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Education => Control::AddEducation,
            EntryKind::Experience => Control::AddExperience,
        }
    }
}

/// Controls an action needs before it can be wired.
pub fn required_controls(action: &Action) -> Vec<Control> {
    match action {
        Action::EditProfile { field, .. } => vec![Control::for_profile(*field)],
        Action::ToggleSkill { .. } => vec![Control::SkillCheckboxes],
        Action::RemoveSkill { .. } => vec![Control::SelectedSkills],
        Action::EditSkillInput { .. } | Action::CommitCustomSkill { .. } => {
            vec![Control::CustomSkillInput]
        }
        Action::AddEntry { kind } => vec![Control::add_for(*kind), Control::list_for(*kind)],
        Action::RemoveEntry { kind, .. } | Action::EditEntry { kind, .. } => {
            vec![Control::list_for(*kind)]
        }
        Action::ClearAll => vec![Control::ClearButton],
        Action::Print => vec![Control::PrintButton],
        Action::SelectTemplate { .. } => vec![Control::TemplateSelect, Control::ResumePreview],
    }
}

/// The set of controls actually present in a page's markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContract {
    present: BTreeSet<Control>,
}

impl PageContract {
    pub fn inspect(markup: &str) -> Self {
        let present = Control::ALL
            .into_iter()
            .filter(|c| markup.contains(&c.marker()))
            .collect();
        Self { present }
    }

    pub fn has(&self, control: Control) -> bool {
        self.present.contains(&control)
    }

    pub fn missing(&self) -> Vec<Control> {
        Control::ALL
            .into_iter()
            .filter(|c| !self.present.contains(c))
            .collect()
    }

    /// True when every control `action` depends on exists in the page.
    pub fn wires(&self, action: &Action) -> bool {
        required_controls(action).iter().all(|c| self.has(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Template;

    #[test]
    fn test_inspect_finds_ids_and_checkbox_class() {
        let markup = r#"<input id="name"><input type="checkbox" class="skill-checkbox" value="Rust">
            <button id="printBtn">Print</button>"#;
        let contract = PageContract::inspect(markup);
        assert!(contract.has(Control::Name));
        assert!(contract.has(Control::SkillCheckboxes));
        assert!(contract.has(Control::PrintButton));
        assert!(!contract.has(Control::Email));
        assert_eq!(contract.missing().len(), Control::ALL.len() - 3);
    }

    #[test]
    fn test_id_match_is_exact() {
        // `id="nameplate"` must not satisfy the `name` control.
        let contract = PageContract::inspect(r#"<div id="nameplate"></div>"#);
        assert!(!contract.has(Control::Name));
    }

    #[test]
    fn test_wires_checks_every_required_control() {
        let contract = PageContract::inspect(r#"<select id="templateSelect"></select>"#);
        let action = Action::SelectTemplate {
            template: Template::Modern,
        };
        assert!(!contract.wires(&action));

        let contract = PageContract::inspect(
            r#"<select id="templateSelect"></select><article id="resumePreview"></article>"#,
        );
        assert!(contract.wires(&action));
    }

    #[test]
    fn test_add_entry_needs_button_and_list() {
        let contract = PageContract::inspect(r#"<div id="educationList"></div>"#);
        let add = Action::AddEntry {
            kind: EntryKind::Education,
        };
        assert!(!contract.wires(&add));
        let contract =
            PageContract::inspect(r#"<div id="educationList"></div><button id="addEducationBtn">"#);
        assert!(contract.wires(&add));
    }
}
