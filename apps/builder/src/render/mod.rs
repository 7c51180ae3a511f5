// Rendering: FormState -> Preview view model -> HTML fragments.
// Everything here is a pure function of state; nothing is cached between actions.

pub mod html;
pub mod preview;

use serde::Serialize;

use crate::form::{compute_progress, Effect, FormState, ProgressMetric};
use crate::models::{EntryKind, Profile, SkillCatalog};

pub use preview::Preview;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxState {
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    pub percent: u8,
    pub label: String,
    pub width: String,
}

impl From<ProgressMetric> for ProgressView {
    fn from(metric: ProgressMetric) -> Self {
        Self {
            percent: metric.percent,
            label: metric.label(),
            width: metric.bar_width(),
        }
    }
}

/// Everything the page needs to repaint after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub template_class: &'static str,
    /// Raw field values, so the inputs can be resynced after a reset.
    pub profile: Profile,
    pub preview_html: String,
    pub chips_html: String,
    pub education_rows_html: String,
    pub experience_rows_html: String,
    pub checkboxes: Vec<CheckboxState>,
    pub progress: ProgressView,
    pub skill_input: String,
    pub effects: Vec<Effect>,
}

impl View {
    pub fn build(state: &FormState, catalog: &SkillCatalog, effects: Vec<Effect>) -> Self {
        let preview = Preview::build(state);
        Self {
            template_class: state.template.css_class(),
            profile: state.profile.clone(),
            preview_html: html::render_preview(&preview),
            chips_html: html::render_chips(&state.skills),
            education_rows_html: html::render_entry_rows(state.entries(EntryKind::Education)),
            experience_rows_html: html::render_entry_rows(state.entries(EntryKind::Experience)),
            checkboxes: catalog
                .iter()
                .map(|value| CheckboxState {
                    value: value.to_string(),
                    checked: state.skills.contains(value),
                })
                .collect(),
            progress: compute_progress(state).into(),
            skill_input: state.skill_input.clone(),
            effects,
        }
    }
}
