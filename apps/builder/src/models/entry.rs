use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which repeatable group an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Education,
    Experience,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Education => "education",
            EntryKind::Experience => "experience",
        }
    }

    /// DOM id of the container holding this group's form rows.
    pub fn list_control_id(self) -> &'static str {
        match self {
            EntryKind::Education => "educationList",
            EntryKind::Experience => "experienceList",
        }
    }

    /// DOM id of the button that appends a row to this group.
    pub fn add_control_id(self) -> &'static str {
        match self {
            EntryKind::Education => "addEducationBtn",
            EntryKind::Experience => "addExperienceBtn",
        }
    }

    /// Form label for the given field of a row in this group.
    pub fn label(self, field: EntryField) -> &'static str {
        match (self, field) {
            (EntryKind::Education, EntryField::Organization) => "School / Institution",
            (EntryKind::Education, EntryField::Title) => "Degree / Program",
            (EntryKind::Experience, EntryField::Organization) => "Company",
            (EntryKind::Experience, EntryField::Title) => "Role / Title",
            (_, EntryField::Start) => "Start",
            (_, EntryField::End) => "End",
            (EntryKind::Education, EntryField::Details) => "Details (optional)",
            (EntryKind::Experience, EntryField::Details) => "Key achievements or responsibilities",
        }
    }

    /// Visible height of the details textarea.
    pub fn details_rows(self) -> u8 {
        match self {
            EntryKind::Education => 3,
            EntryKind::Experience => 4,
        }
    }
}

/// Editable fields of an entry row.
///
/// The two identity fields are shared between groups: `organization` is the
/// school or company, `title` is the degree or role. The group-specific names
/// are accepted on the wire as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    #[serde(alias = "school", alias = "company")]
    Organization,
    #[serde(alias = "degree", alias = "role")]
    Title,
    Start,
    End,
    Details,
}

impl EntryField {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryField::Organization => "organization",
            EntryField::Title => "title",
            EntryField::Start => "start",
            EntryField::End => "end",
            EntryField::Details => "details",
        }
    }
}

/// One education or experience row. Dates hold the raw `YYYY-MM` text of a
/// month input; nothing is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub organization: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub details: String,
}

impl Entry {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            organization: String::new(),
            title: String::new(),
            start: String::new(),
            end: String::new(),
            details: String::new(),
        }
    }

    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Organization => &self.organization,
            EntryField::Title => &self.title,
            EntryField::Start => &self.start,
            EntryField::End => &self.end,
            EntryField::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let slot = match field {
            EntryField::Organization => &mut self.organization,
            EntryField::Title => &mut self.title,
            EntryField::Start => &mut self.start,
            EntryField::End => &mut self.end,
            EntryField::Details => &mut self.details,
        };
        *slot = value.into();
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows of one group in insertion order, which is also display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryList {
    kind: EntryKind,
    rows: Vec<Entry>,
}

impl EntryList {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Appends a blank row and returns its id.
    pub fn add(&mut self) -> Uuid {
        self.push(Entry::new())
    }

    pub fn push(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        self.rows.push(entry);
        id
    }

    /// Removes the row with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|e| e.id != id);
        self.rows.len() != before
    }

    /// Writes `value` into one field of the row with `id`.
    pub fn edit(&mut self, id: Uuid, field: EntryField, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.rows.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.rows.iter()
    }
}
