use serde::{Deserialize, Serialize};

/// The four free-text fields at the top of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Summary,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Summary,
    ];

    /// DOM id of the input bound to this field.
    pub fn control_id(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Summary => "summary",
        }
    }
}

/// Raw profile text exactly as typed. Trimming happens on read, never on write,
/// so the input keeps whatever whitespace the user is in the middle of typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Summary => &self.summary,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Summary => &mut self.summary,
        };
        *slot = value.into();
    }

    pub fn trimmed(&self, field: ProfileField) -> &str {
        self.get(field).trim()
    }

    /// Number of fields holding something other than whitespace.
    pub fn filled_count(&self) -> usize {
        ProfileField::ALL
            .iter()
            .filter(|f| !self.trimmed(**f).is_empty())
            .count()
    }
}
