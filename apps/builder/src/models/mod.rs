pub mod entry;
pub mod profile;
pub mod skills;
pub mod template;

pub use entry::{Entry, EntryField, EntryKind, EntryList};
pub use profile::{Profile, ProfileField};
pub use skills::{SkillCatalog, SkillSet};
pub use template::Template;
