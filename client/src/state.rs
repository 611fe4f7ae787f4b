//! Client-side state store.
//!
//! Mirrors server state in a single in-memory list plus a filter mode and
//! an "editing" pointer, exactly like the original front end's component
//! state. Filtered views and counts are always derived from the list,
//! never stored redundantly.

use crate::api::{ApiError, TodoApi};
use tasklist_core::{Todo, TodoId, TodoPatch};

/// Filter mode for the derived view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every todo.
    #[default]
    All,
    /// Only todos with `completed == false`.
    Active,
    /// Only todos with `completed == true`.
    Completed,
}

/// Derived counts over the local list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counts {
    /// All todos.
    pub total: usize,
    /// Not yet completed.
    pub active: usize,
    /// Completed.
    pub completed: usize,
}

/// Local mirror of server state.
///
/// This is never the source of truth: it is fully replaced on refresh and
/// patched only from server response payloads.
#[derive(Debug, Default)]
pub struct ClientState {
    todos: Vec<Todo>,
    /// Current filter mode for [`visible`](Self::visible).
    pub filter: Filter,
    editing: Option<TodoId>,
    /// Title draft shared by the add and edit forms.
    pub draft_title: String,
    /// Description draft shared by the add and edit forms.
    pub draft_description: String,
}

impl ClientState {
    /// Empty state with the default (`All`) filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full local list, newest first.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Which todo is being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&TodoId> {
        self.editing.as_ref()
    }

    /// Replace the whole list from a server response.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Prepend a server-created record. The server assigned the id and
    /// timestamp; the client never fabricates them.
    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Replace the matching record in place by id.
    pub fn apply_updated(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    /// Remove the matching record by id.
    pub fn apply_deleted(&mut self, id: &TodoId) {
        self.todos.retain(|t| t.id != *id);
    }

    /// Pure derived view for the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| match self.filter {
                Filter::All => true,
                Filter::Active => !todo.completed,
                Filter::Completed => todo.completed,
            })
            .collect()
    }

    /// Derived counts (total/active/completed).
    #[must_use]
    pub fn counts(&self) -> Counts {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Counts {
            total: self.todos.len(),
            active: self.todos.len() - completed,
            completed,
        }
    }

    /// Enter edit mode: copy the todo's fields into the draft and remember
    /// which record is being edited.
    pub fn start_edit(&mut self, todo: &Todo) {
        self.editing = Some(todo.id.clone());
        self.draft_title = todo.title.clone();
        self.draft_description = todo.description.clone();
    }

    /// Leave edit mode and clear the draft. No network call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft_title.clear();
        self.draft_description.clear();
    }
}

/// Couples the API client with the local state store, enforcing the
/// server-confirmed sync discipline: state changes happen only after a
/// successful response, from that response's payload.
pub struct TodoClient {
    api: TodoApi,
    /// The local mirror. Public so a renderer can read views from it.
    pub state: ClientState,
}

impl TodoClient {
    /// Create a client against a server base URL.
    #[must_use]
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            state: ClientState::new(),
        }
    }

    /// Fetch the full list once and replace local state.
    ///
    /// # Errors
    ///
    /// On failure the local list is left unchanged and the error is both
    /// logged and returned.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.list().await {
            Ok(todos) => {
                self.state.replace_all(todos);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch todos");
                Err(e)
            }
        }
    }

    /// Submit the draft form: update when in edit mode, create otherwise.
    ///
    /// A blank draft title is dropped locally without a network call, as
    /// the original form did.
    ///
    /// # Errors
    ///
    /// On failure local state (including the draft) is left unchanged.
    pub async fn submit(&mut self) -> Result<(), ApiError> {
        if self.state.draft_title.trim().is_empty() {
            return Ok(());
        }
        match self.state.editing().cloned() {
            Some(id) => self.save_edit(&id).await,
            None => self.add().await,
        }
    }

    /// Toggle a todo and patch the local copy from the response.
    ///
    /// # Errors
    ///
    /// On failure the local list is left unchanged.
    pub async fn toggle(&mut self, id: &TodoId) -> Result<(), ApiError> {
        match self.api.toggle(id).await {
            Ok(todo) => {
                self.state.apply_updated(todo);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to toggle todo");
                Err(e)
            }
        }
    }

    /// Delete a todo and remove the local copy on confirmation.
    ///
    /// # Errors
    ///
    /// On failure the local list is left unchanged.
    pub async fn delete(&mut self, id: &TodoId) -> Result<(), ApiError> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.state.apply_deleted(id);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to delete todo");
                Err(e)
            }
        }
    }

    async fn add(&mut self) -> Result<(), ApiError> {
        let description = if self.state.draft_description.is_empty() {
            None
        } else {
            Some(self.state.draft_description.as_str())
        };

        match self.api.create(&self.state.draft_title, description).await {
            Ok(todo) => {
                self.state.apply_created(todo);
                self.state.cancel_edit();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add todo");
                Err(e)
            }
        }
    }

    async fn save_edit(&mut self, id: &TodoId) -> Result<(), ApiError> {
        let patch = TodoPatch {
            title: Some(self.state.draft_title.clone()),
            description: Some(self.state.draft_description.clone()),
            completed: None,
        };

        match self.api.update(id, &patch).await {
            Ok(todo) => {
                self.state.apply_updated(todo);
                self.state.cancel_edit();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to save todo");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn seeded() -> ClientState {
        let mut state = ClientState::new();
        state.replace_all(vec![
            todo("1", "done", true),
            todo("2", "open a", false),
            todo("3", "open b", false),
        ]);
        state
    }

    #[test]
    fn counts_are_derived_from_the_list() {
        let state = seeded();
        assert_eq!(
            state.counts(),
            Counts {
                total: 3,
                active: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn filters_derive_the_expected_views() {
        let mut state = seeded();

        assert_eq!(state.visible().len(), 3);

        state.filter = Filter::Active;
        assert_eq!(state.visible().len(), 2);
        assert!(state.visible().iter().all(|t| !t.completed));

        state.filter = Filter::Completed;
        assert_eq!(state.visible().len(), 1);
        assert!(state.visible()[0].completed);
    }

    #[test]
    fn created_records_are_prepended() {
        let mut state = seeded();
        state.apply_created(todo("4", "newest", false));

        assert_eq!(state.todos()[0].id, TodoId::from("4"));
        assert_eq!(state.counts().total, 4);
    }

    #[test]
    fn updates_replace_in_place_by_id() {
        let mut state = seeded();
        state.apply_updated(todo("2", "open a (edited)", true));

        assert_eq!(state.todos()[1].title, "open a (edited)");
        assert!(state.todos()[1].completed);
        assert_eq!(state.counts().total, 3);
    }

    #[test]
    fn update_for_unknown_id_changes_nothing() {
        let mut state = seeded();
        state.apply_updated(todo("999", "ghost", false));

        assert_eq!(state.counts().total, 3);
        assert!(state.todos().iter().all(|t| t.title != "ghost"));
    }

    #[test]
    fn deletes_remove_by_id() {
        let mut state = seeded();
        state.apply_deleted(&TodoId::from("1"));

        assert_eq!(state.counts().total, 2);
        assert_eq!(state.counts().completed, 0);
    }

    #[test]
    fn edit_lifecycle_copies_and_clears_the_draft() {
        let mut state = seeded();
        let target = state.todos()[0].clone();

        state.start_edit(&target);
        assert_eq!(state.editing(), Some(&target.id));
        assert_eq!(state.draft_title, target.title);

        // Cancel clears the pointer and draft without touching the list.
        state.cancel_edit();
        assert_eq!(state.editing(), None);
        assert!(state.draft_title.is_empty());
        assert!(state.draft_description.is_empty());
        assert_eq!(state.counts().total, 3);
    }
}
