use serde::Serialize;

use crate::models::{EntryKind, EntryList, Profile, SkillSet, Template};

/// Everything the user has entered in one page session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub profile: Profile,
    pub skills: SkillSet,
    /// Current contents of the free-text skill input.
    pub skill_input: String,
    pub education: EntryList,
    pub experience: EntryList,
    pub template: Template,
}

impl FormState {
    pub fn new(template: Template) -> Self {
        Self {
            profile: Profile::default(),
            skills: SkillSet::new(),
            skill_input: String::new(),
            education: EntryList::new(EntryKind::Education),
            experience: EntryList::new(EntryKind::Experience),
            template,
        }
    }

    pub fn entries(&self, kind: EntryKind) -> &EntryList {
        match kind {
            EntryKind::Education => &self.education,
            EntryKind::Experience => &self.experience,
        }
    }

    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut EntryList {
        match kind {
            EntryKind::Education => &mut self.education,
            EntryKind::Experience => &mut self.experience,
        }
    }

    /// Resets all user data. The chosen template is a display preference and survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.template);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Template::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileField;

    #[test]
    fn test_reset_keeps_template() {
        let mut state = FormState::new(Template::Minimal);
        state.profile.set(ProfileField::Name, "Ada");
        state.skills.insert("Rust");
        state.education.add();
        state.skill_input = "Go".to_string();
        state.reset();
        assert_eq!(state, FormState::new(Template::Minimal));
    }

    #[test]
    fn test_entries_by_kind() {
        let mut state = FormState::default();
        state.entries_mut(EntryKind::Experience).add();
        assert_eq!(state.entries(EntryKind::Experience).len(), 1);
        assert!(state.entries(EntryKind::Education).is_empty());
    }
}
