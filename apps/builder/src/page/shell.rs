//! Page shell — the HTML document that hosts the form and preview.
//!
//! Rendered from `templates/index.html` with askama. User-derived fragments are
//! escaped by `render::html` before they reach the template and marked `safe` there.

use askama::Template;
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::form::FormState;
use crate::models::{SkillCatalog, Template as ResumeTemplate};
use crate::page::contract::PageContract;
use crate::render::{html, View};

pub struct TemplateOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The builder page for one session.
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub session_id: Uuid,
    pub year: i32,
    pub skill_checkboxes: String,
    pub template_options: Vec<TemplateOption>,
    pub template_class: &'static str,
    pub preview: String,
    pub chips: String,
    pub education_rows: String,
    pub experience_rows: String,
    pub progress_width: String,
    pub progress_label: String,
}

impl PageTemplate {
    pub fn new(session_id: Uuid, catalog: &SkillCatalog, state: &FormState) -> Self {
        let view = View::build(state, catalog, Vec::new());
        Self {
            session_id,
            year: Utc::now().year(),
            skill_checkboxes: html::render_skill_checkboxes(catalog, &state.skills),
            template_options: template_options(state.template),
            template_class: view.template_class,
            preview: view.preview_html,
            chips: view.chips_html,
            education_rows: view.education_rows_html,
            experience_rows: view.experience_rows_html,
            progress_width: view.progress.width,
            progress_label: view.progress.label,
        }
    }
}

/// Renders the page as served to a new session.
pub fn render_page(
    session_id: Uuid,
    catalog: &SkillCatalog,
    state: &FormState,
) -> askama::Result<String> {
    PageTemplate::new(session_id, catalog, state).render()
}

/// Inspects the page as it is served for a fresh session.
pub fn page_contract(catalog: &SkillCatalog) -> askama::Result<PageContract> {
    let page = render_page(Uuid::nil(), catalog, &FormState::default())?;
    Ok(PageContract::inspect(&page))
}

fn template_options(selected: ResumeTemplate) -> Vec<TemplateOption> {
    ResumeTemplate::ALL
        .into_iter()
        .map(|t| TemplateOption {
            value: t.css_class(),
            label: t.display_name(),
            selected: t == selected,
        })
        .collect()
}
