use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Checkbox skills offered when no catalog is configured.
pub const DEFAULT_CATALOG: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Rust",
    "SQL",
    "Git",
    "Docker",
    "Communication",
    "Leadership",
    "Problem Solving",
];

/// Selected skills. Backed by a `BTreeSet` so iteration is already in the
/// sorted order the chip list and preview display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the skill was already selected.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Returns false if the skill was not selected.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    /// Sets membership of `tag` to `selected`. Returns true if the set changed.
    pub fn toggle(&mut self, tag: &str, selected: bool) -> bool {
        if selected {
            self.insert(tag)
        } else {
            self.remove(tag)
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The fixed list of skills rendered as checkboxes, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCatalog(Vec<String>);

impl SkillCatalog {
    /// Builds a catalog from raw names, dropping blanks and duplicates while
    /// keeping first-seen order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let skills = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        Self(skills)
    }

    /// Parses a comma-separated list such as `"Rust, SQL, Git"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG.iter().copied())
    }
}
