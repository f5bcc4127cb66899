//! Search box editing (pure state transitions).
//!
//! The search box is either closed or being typed into. The text itself is
//! owned by the discovery session; the box only tracks what is being edited
//! and where the cursor sits. Cursor positions count chars, not bytes.

// ===== SearchState =====

/// Search box state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Box closed. Any committed search text stays applied.
    #[default]
    Inactive,
    /// User is typing.
    Typing {
        /// Text being edited.
        query: String,
        /// Cursor position in chars, `0..=query.chars().count()`.
        cursor: usize,
    },
}

impl SearchState {
    /// Text being edited, if the box is open.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    /// Whether the box is open.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

// ===== Transitions =====

/// Open the box, seeded with the currently applied search text.
///
/// The cursor starts at the end. No-op if already typing.
pub fn activate_search_input(state: SearchState, current: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: current.to_string(),
            cursor: current.chars().count(),
        },
        typing => typing,
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one char left, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor one char right, saturating at the end.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Close the box, keeping the typed text applied.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { .. } | SearchState::Inactive => SearchState::Inactive,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_tests.rs"]
mod tests;
