use std::fmt::Write;

use crate::models::{EntryField, EntryKind, EntryList, SkillCatalog, SkillSet};
use crate::render::preview::{Preview, Section, TimelineItem};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn hidden_attr<T>(section: &Section<T>) -> &'static str {
    if section.visible {
        ""
    } else {
        " hidden"
    }
}

/// Inner markup of `#resumePreview`.
pub fn render_preview(preview: &Preview) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r##"<header class="resume-header"><h1 id="previewName">{}</h1><p id="previewContact" class="contact">{}</p></header>"##,
        html_escape(&preview.header.name),
        html_escape(&preview.header.contact),
    );

    let _ = write!(
        html,
        r##"<section id="sectionSummary" class="resume-section"{}><h2>Summary</h2><p id="previewSummary">{}</p></section>"##,
        hidden_attr(&preview.summary),
        html_escape(&preview.summary.content),
    );

    let _ = write!(
        html,
        r##"<section id="sectionSkills" class="resume-section"{}><h2>Skills</h2><ul id="previewSkills" class="skills-list">"##,
        hidden_attr(&preview.skills),
    );
    for skill in &preview.skills.content {
        let _ = write!(html, "<li>{}</li>", html_escape(skill));
    }
    html.push_str("</ul></section>");

    render_timeline_section(
        &mut html,
        "sectionEducation",
        "previewEducation",
        "Education",
        &preview.education,
    );
    render_timeline_section(
        &mut html,
        "sectionExperience",
        "previewExperience",
        "Experience",
        &preview.experience,
    );

    html
}

fn render_timeline_section(
    html: &mut String,
    section_id: &str,
    list_id: &str,
    heading: &str,
    section: &Section<Vec<TimelineItem>>,
) {
    let _ = write!(
        html,
        r##"<section id="{section_id}" class="resume-section"{}><h2>{heading}</h2><div id="{list_id}" class="timeline">"##,
        hidden_attr(section),
    );
    for item in &section.content {
        let _ = write!(
            html,
            r##"<div class="timeline-item"><div class="title">{}</div><div class="meta">{}</div>"##,
            html_escape(&item.title),
            html_escape(&item.meta),
        );
        if let Some(details) = &item.details {
            let _ = write!(html, "<div>{}</div>", html_escape(details));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></section>");
}

/// Inner markup of `#selectedSkills`: one removable chip per skill, sorted.
pub fn render_chips(skills: &SkillSet) -> String {
    let mut html = String::new();
    for skill in skills.iter() {
        let label = html_escape(skill);
        let _ = write!(
            html,
            r##"<span class="chip">{label}<button class="remove" type="button" data-skill="{label}" aria-label="Remove {label}">✕</button></span>"##
        );
    }
    html
}

/// Checkbox group markup for the skill catalog, checked from the current set.
pub fn render_skill_checkboxes(catalog: &SkillCatalog, skills: &SkillSet) -> String {
    let mut html = String::new();
    for skill in catalog.iter() {
        let value = html_escape(skill);
        let checked = if skills.contains(skill) { " checked" } else { "" };
        let _ = write!(
            html,
            r##"<label class="checkbox"><input type="checkbox" class="skill-checkbox" value="{value}"{checked}><span>{value}</span></label>"##
        );
    }
    html
}

/// Inner markup of `#educationList` / `#experienceList`: one editable row per entry.
pub fn render_entry_rows(list: &EntryList) -> String {
    let kind = list.kind();
    let mut html = String::new();
    for entry in list.iter() {
        let _ = write!(
            html,
            r##"<div class="dynamic-item" data-kind="{}" data-row-id="{}">"##,
            kind.as_str(),
            entry.id,
        );
        html.push_str(r##"<div class="dynamic-item__row two">"##);
        input(&mut html, kind, EntryField::Organization, "text", entry.get(EntryField::Organization));
        input(&mut html, kind, EntryField::Title, "text", entry.get(EntryField::Title));
        html.push_str("</div>");
        html.push_str(r##"<div class="dynamic-item__row two">"##);
        input(&mut html, kind, EntryField::Start, "month", entry.get(EntryField::Start));
        input(&mut html, kind, EntryField::End, "month", entry.get(EntryField::End));
        html.push_str("</div>");
        let _ = write!(
            html,
            r##"<label><span>{}</span><textarea data-field="details" rows="{}">{}</textarea></label>"##,
            kind.label(EntryField::Details),
            kind.details_rows(),
            html_escape(entry.get(EntryField::Details)),
        );
        html.push_str(
            r##"<div class="dynamic-actions"><button type="button" class="button secondary" data-remove-row>Remove</button></div>"##,
        );
        html.push_str("</div>");
    }
    html
}

fn input(html: &mut String, kind: EntryKind, field: EntryField, input_type: &str, value: &str) {
    let _ = write!(
        html,
        r##"<label><span>{}</span><input type="{input_type}" data-field="{}" value="{}"></label>"##,
        kind.label(field),
        field.as_str(),
        html_escape(value),
    );
}
