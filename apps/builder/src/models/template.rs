use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cosmetic style applied to the preview container. Has no effect on content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Classic, Template::Modern, Template::Minimal];

    /// CSS class toggled on `#resumePreview`.
    pub fn css_class(self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Minimal => "minimal",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Template::Classic => "Classic",
            Template::Modern => "Modern",
            Template::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.css_class().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
