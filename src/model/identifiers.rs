//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Serialize;
use std::fmt;

/// Stable identifier for a discoverable item (the slug or URL of the content).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: rejects empty or whitespace-only identifiers.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidItemId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected item identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// The identifier was empty.
    #[error("item id cannot be empty")]
    Empty,
}
