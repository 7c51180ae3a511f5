use tracing::debug;

use crate::form::action::{Action, Effect};
use crate::form::state::FormState;

/// Result of applying one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// False when the action left the state untouched (re-checking a selected
    /// skill, removing an unknown row, committing blank text).
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Update {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Applies `action` to `state`. Runs to completion; the caller renders afterwards.
pub fn update(state: &mut FormState, action: Action) -> Update {
    let name = action.name();
    let result = match action {
        Action::EditProfile { field, value } => {
            let changed = state.profile.get(field) != value;
            state.profile.set(field, value);
            Update::changed(changed)
        }
        Action::ToggleSkill { tag, selected } => {
            if tag.trim().is_empty() {
                Update::default()
            } else {
                Update::changed(state.skills.toggle(&tag, selected))
            }
        }
        Action::RemoveSkill { tag } => Update::changed(state.skills.remove(&tag)),
        Action::EditSkillInput { text } => {
            let changed = state.skill_input != text;
            state.skill_input = text;
            Update::changed(changed)
        }
        Action::CommitCustomSkill { text } => commit_custom_skill(state, text),
        Action::AddEntry { kind } => {
            let list = state.entries_mut(kind);
            let id = list.add();
            debug!(kind = kind.as_str(), %id, rows = list.len(), "entry row added");
            Update::changed(true).with_effect(Effect::ReplaceRows)
        }
        Action::RemoveEntry { kind, row_id } => {
            if state.entries_mut(kind).remove(row_id) {
                Update::changed(true).with_effect(Effect::ReplaceRows)
            } else {
                debug!(kind = kind.as_str(), %row_id, "remove of unknown row ignored");
                Update::default()
            }
        }
        Action::EditEntry {
            kind,
            row_id,
            field,
            value,
        } => {
            let list = state.entries_mut(kind);
            let changed = list
                .get(row_id)
                .is_some_and(|entry| entry.get(field) != value);
            list.edit(row_id, field, value);
            Update::changed(changed)
        }
        Action::ClearAll => {
            state.reset();
            Update::changed(true)
                .with_effect(Effect::ReplaceRows)
                .with_effect(Effect::ResetInputs)
                .with_effect(Effect::ScrollToTop)
        }
        Action::Print => Update::default().with_effect(Effect::Print),
        Action::SelectTemplate { template } => {
            let changed = state.template != template;
            state.template = template;
            Update::changed(changed)
        }
    };
    debug!(
        action = name,
        changed = result.changed,
        skills = state.skills.len(),
        "action applied"
    );
    result
}

fn commit_custom_skill(state: &mut FormState, text: String) -> Update {
    let skill = text.trim();
    if skill.is_empty() {
        let changed = state.skill_input != text;
        state.skill_input = text;
        return Update::changed(changed);
    }
    let inserted = state.skills.insert(skill);
    // The input is cleared even when the skill was already selected.
    let had_input = !state.skill_input.is_empty();
    state.skill_input.clear();
    Update::changed(inserted || had_input).with_effect(Effect::ResetInputs)
}
