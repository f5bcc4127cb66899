//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod error;
pub mod identifiers;
pub mod item;
pub mod key_action;
pub mod malformed_entry;

// Re-export for convenience
pub use content::{
    BlogPost, ContentDocument, FacetCatalog, FacetGroup, Project, ProjectTag, Technology, Video,
};
pub use error::{AppError, ContentError, InputError, RecordError};
pub use identifiers::{InvalidItemId, ItemId};
pub use item::{FacetTags, Item};
pub use key_action::KeyAction;
pub use malformed_entry::{ContentSection, MalformedRecord};
