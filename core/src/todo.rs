//! The `Todo` entity and its input types.
//!
//! Ids and creation timestamps are assigned by the store, never by the
//! caller. The wire shape uses camelCase (`createdAt`) to match the
//! original JSON contract consumed by the front end.

use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier for a todo.
///
/// The volatile backend assigns small monotonically increasing counters,
/// the durable backend assigns UUIDs. Callers may only compare ids for
/// equality; no ordering or arithmetic semantics exist.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap a backend-assigned identifier.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, stable for the record's lifetime.
    pub id: TodoId,
    /// Required, never empty once persisted.
    pub title: String,
    /// Optional free text, defaults to the empty string.
    pub description: String,
    /// Completion flag, defaults to false.
    pub completed: bool,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a todo.
///
/// Construct via [`NewTodo::new`], which enforces the non-empty-title rule
/// and trims the title, so a `NewTodo` value is valid by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    description: String,
}

impl NewTodo {
    /// Build a validated creation input.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when `title` is empty after
    /// trimming. A missing description defaults to the empty string.
    pub fn new(title: &str, description: Option<&str>) -> StoreResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::validation("Title is required"));
        }
        Ok(Self {
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
        })
    }

    /// The trimmed, non-empty title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description (possibly empty).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Partial update for a todo's three mutable fields.
///
/// An omitted field means "no change"; `id` and `created_at` are frozen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TodoPatch {
    /// New title, if changing.
    pub title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New completion flag, if changing.
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Check the patch's field-level rules.
    ///
    /// A title that is provided but blank after trimming is rejected; the
    /// title is trimmed in place so stores persist the normalized form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for a provided-but-blank title.
    pub fn validated(mut self) -> StoreResult<Self> {
        if let Some(title) = self.title.take() {
            let title = title.trim();
            if title.is_empty() {
                return Err(StoreError::validation("Title is required"));
            }
            self.title = Some(title.to_string());
        }
        Ok(self)
    }

    /// True when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Apply the patch to a record, leaving omitted fields untouched.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_trims_title() {
        let input = NewTodo::new("  Buy milk  ", None).unwrap();
        assert_eq!(input.title(), "Buy milk");
        assert_eq!(input.description(), "");
    }

    #[test]
    fn new_todo_rejects_blank_title() {
        assert!(matches!(
            NewTodo::new("   ", Some("details")),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn patch_omitted_fields_leave_record_unchanged() {
        let mut todo = Todo {
            id: TodoId::from("1"),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: true,
            created_at: Utc::now(),
        };
        let before = todo.clone();

        TodoPatch::default().apply(&mut todo);
        assert_eq!(todo, before);
    }

    #[test]
    fn patch_rejects_blank_title() {
        let patch = TodoPatch {
            title: Some("   ".to_string()),
            ..TodoPatch::default()
        };
        assert!(matches!(patch.validated(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn patch_trims_provided_title() {
        let patch = TodoPatch {
            title: Some("  Walk dog ".to_string()),
            ..TodoPatch::default()
        }
        .validated()
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("Walk dog"));
    }

    #[test]
    fn todo_serializes_with_camel_case_timestamp() {
        let todo = Todo {
            id: TodoId::from("42"),
            title: "Buy milk".to_string(),
            description: String::new(),
            completed: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "42");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
