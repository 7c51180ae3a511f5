use serde::{Deserialize, Serialize};

use crate::form::state::FormState;
use crate::models::ProfileField;

/// Profile fields + skills + education + experience.
pub const TOTAL_CRITERIA: u8 = ProfileField::ALL.len() as u8 + 3;

/// Derived completion metric. Never stored; recomputed from state on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMetric {
    pub completed: u8,
    pub total: u8,
    pub percent: u8,
}

impl ProgressMetric {
    pub fn from_counts(completed: u8, total: u8) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (f64::from(completed) / f64::from(total) * 100.0)
                .round()
                .clamp(0.0, 100.0) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Text for `#progressLabel`.
    pub fn label(&self) -> String {
        format!("{}% complete", self.percent)
    }

    /// CSS width for `#progressBar`.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Counts satisfied criteria: each non-blank profile field, a non-empty skill
/// set, and at least one row in each entry group. Row contents are not inspected.
pub fn compute_progress(state: &FormState) -> ProgressMetric {
    let mut completed = state.profile.filled_count() as u8;
    if !state.skills.is_empty() {
        completed += 1;
    }
    if !state.education.is_empty() {
        completed += 1;
    }
    if !state.experience.is_empty() {
        completed += 1;
    }
    ProgressMetric::from_counts(completed, TOTAL_CRITERIA)
}
