//! Preview view model — a pure projection of `FormState` onto the preview pane.
//!
//! Nothing here touches markup; `render::html` turns a `Preview` into fragments.

use serde::Serialize;

use crate::form::FormState;
use crate::models::{Entry, EntryList, Profile, ProfileField, Template};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const CONTACT_PLACEHOLDER: &str = "email@example.com • (000) 000-0000";
pub const SUMMARY_PLACEHOLDER: &str = "Write a short, impactful summary that highlights your experience, strengths, and what you are looking for.";

const CONTACT_SEPARATOR: &str = " • ";
const TITLE_SEPARATOR: &str = " • ";
const DATE_SEPARATOR: &str = " – ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub contact: String,
}

/// A preview section that is hidden when its backing data is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub visible: bool,
    pub content: T,
}

impl<T> Section<T> {
    fn new(visible: bool, content: T) -> Self {
        Self { visible, content }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub title: String,
    pub meta: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub template: Template,
    pub header: Header,
    pub summary: Section<String>,
    pub skills: Section<Vec<String>>,
    pub education: Section<Vec<TimelineItem>>,
    pub experience: Section<Vec<TimelineItem>>,
}

impl Preview {
    pub fn build(state: &FormState) -> Self {
        Self {
            template: state.template,
            header: build_header(&state.profile),
            summary: build_summary(&state.profile),
            skills: {
                let items: Vec<String> = state.skills.iter().map(str::to_string).collect();
                Section::new(!items.is_empty(), items)
            },
            education: build_timeline(&state.education),
            experience: build_timeline(&state.experience),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn build_header(profile: &Profile) -> Header {
    let contact = join_non_empty(
        [
            profile.trimmed(ProfileField::Email),
            profile.trimmed(ProfileField::Phone),
        ],
        CONTACT_SEPARATOR,
    );
    Header {
        name: or_placeholder(profile.trimmed(ProfileField::Name), NAME_PLACEHOLDER),
        contact: or_placeholder(&contact, CONTACT_PLACEHOLDER),
    }
}

// The summary section stays visible and falls back to the prompt text.
fn build_summary(profile: &Profile) -> Section<String> {
    Section::new(
        true,
        or_placeholder(profile.trimmed(ProfileField::Summary), SUMMARY_PLACEHOLDER),
    )
}

fn build_timeline(list: &EntryList) -> Section<Vec<TimelineItem>> {
    let items: Vec<TimelineItem> = list.iter().map(timeline_item).collect();
    Section::new(!items.is_empty(), items)
}

/// Title reads "degree • school" / "role • company"; the separator only
/// appears when both sides are non-blank.
pub fn timeline_item(entry: &Entry) -> TimelineItem {
    let details = entry.details.trim();
    TimelineItem {
        title: join_non_empty([entry.title.trim(), entry.organization.trim()], TITLE_SEPARATOR),
        meta: join_non_empty([entry.start.trim(), entry.end.trim()], DATE_SEPARATOR),
        details: (!details.is_empty()).then(|| details.to_string()),
    }
}

fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>, sep: &str) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{update, Action};
    use crate::models::{EntryField, EntryKind};

    fn education_with(degree: &str, school: &str) -> FormState {
        let mut state = FormState::default();
        let id = state.education.add();
        state.education.edit(id, EntryField::Title, degree);
        state.education.edit(id, EntryField::Organization, school);
        state
    }

    #[test]
    fn test_initial_preview_is_all_placeholders() {
        let p = Preview::build(&FormState::default());
        assert_eq!(p.header.name, NAME_PLACEHOLDER);
        assert_eq!(p.header.contact, CONTACT_PLACEHOLDER);
        assert!(p.summary.visible);
        assert_eq!(p.summary.content, SUMMARY_PLACEHOLDER);
        assert!(!p.skills.visible);
        assert!(!p.education.visible);
        assert!(!p.experience.visible);
    }

    #[test]
    fn test_contact_joins_present_parts() {
        let mut state = FormState::default();
        state.profile.set(ProfileField::Phone, " 555-0100 ");
        assert_eq!(Preview::build(&state).header.contact, "555-0100");
        state.profile.set(ProfileField::Email, "ada@example.com");
        assert_eq!(
            Preview::build(&state).header.contact,
            "ada@example.com • 555-0100"
        );
    }

    #[test]
    fn test_education_title_with_both_parts() {
        let p = Preview::build(&education_with("BSc", "X U"));
        assert_eq!(p.education.content[0].title, "BSc • X U");
    }

    #[test]
    fn test_education_title_without_school_has_no_separator() {
        let p = Preview::build(&education_with("BSc", ""));
        assert_eq!(p.education.content[0].title, "BSc");
        let p = Preview::build(&education_with("BSc", "   "));
        assert_eq!(p.education.content[0].title, "BSc");
        let p = Preview::build(&education_with("", "X U"));
        assert_eq!(p.education.content[0].title, "X U");
    }

    #[test]
    fn test_meta_and_details() {
        let mut state = FormState::default();
        let id = state.experience.add();
        state.experience.edit(id, EntryField::Start, "2020-01");
        let item = &Preview::build(&state).experience.content[0];
        assert_eq!(item.meta, "2020-01");
        assert_eq!(item.details, None);

        state.experience.edit(id, EntryField::End, "2022-06");
        state.experience.edit(id, EntryField::Details, "  Shipped things  ");
        let item = &Preview::build(&state).experience.content[0];
        assert_eq!(item.meta, "2020-01 – 2022-06");
        assert_eq!(item.details.as_deref(), Some("Shipped things"));
    }

    #[test]
    fn test_blank_row_still_shows_section() {
        let mut state = FormState::default();
        state.experience.add();
        let p = Preview::build(&state);
        assert!(p.experience.visible);
        assert_eq!(p.experience.content[0].title, "");
    }

    #[test]
    fn test_clear_all_matches_initial_preview() {
        let mut state = FormState::default();
        let initial = Preview::build(&state);
        for action in [
            Action::EditProfile {
                field: ProfileField::Name,
                value: "Ada".to_string(),
            },
            Action::ToggleSkill {
                tag: "Rust".to_string(),
                selected: true,
            },
            Action::AddEntry {
                kind: EntryKind::Education,
            },
            Action::AddEntry {
                kind: EntryKind::Experience,
            },
            Action::ClearAll,
        ] {
            update(&mut state, action);
        }
        assert_eq!(Preview::build(&state), initial);
    }
}
