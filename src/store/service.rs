use crate::io::storage::{CATEGORIES_KEY, Storage, StorageError, TODOS_KEY};
use crate::model::{CategoryFilter, StatusFilter, Todo, TodoId, category};
use crate::store::derive::{self, Stats};
use crate::store::signal::{Signal, SubId};

/// The state container: single source of truth for todos, categories, and
/// filter selections.
///
/// Owns its [`Storage`] (explicit construction, no global singleton). Every
/// mutation replaces the backing value, recomputes the derived filtered list
/// and stats, notifies subscribers synchronously, and then mirrors todos or
/// categories to storage. Domain-invalid input (blank text, duplicate or
/// protected category, unknown id) is a silent no-op; only the storage
/// mirror can fail, and the in-memory change has already applied by then.
pub struct TodoService<S: Storage> {
    storage: S,
    todos: Signal<Vec<Todo>>,
    categories: Signal<Vec<String>>,
    filter: Signal<StatusFilter>,
    selected_category: Signal<CategoryFilter>,
    filtered: Signal<Vec<Todo>>,
    stats: Signal<Stats>,
}

impl<S: Storage> TodoService<S> {
    /// Construct over `storage`, seeding todos and categories from it.
    /// Missing or unparsable data degrades to an empty list / the default
    /// categories; startup never fails on bad data.
    pub fn new(storage: S) -> TodoService<S> {
        let todos: Vec<Todo> = storage
            .read(TODOS_KEY)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        let categories: Vec<String> = storage
            .read(CATEGORIES_KEY)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_else(category::default_categories);

        let filter = StatusFilter::All;
        let selected_category = CategoryFilter::All;
        let filtered = derive::filter_todos(&todos, filter, &selected_category);
        let stats = derive::compute_stats(&filtered);

        TodoService {
            storage,
            todos: Signal::new(todos),
            categories: Signal::new(categories),
            filter: Signal::new(filter),
            selected_category: Signal::new(selected_category),
            filtered: Signal::new(filtered),
            stats: Signal::new(stats),
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn todos(&self) -> &[Todo] {
        self.todos.value()
    }

    pub fn categories(&self) -> &[String] {
        self.categories.value()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.filter.get()
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        self.selected_category.value()
    }

    /// The derived list: todos passing both current filters, in insertion order
    pub fn filtered_todos(&self) -> &[Todo] {
        self.filtered.value()
    }

    /// Stats over the currently filtered list
    pub fn stats(&self) -> Stats {
        self.stats.get()
    }

    // -----------------------------------------------------------------------
    // Subscriptions (replay-last-value, notified synchronously in order)
    // -----------------------------------------------------------------------

    pub fn subscribe_todos(&mut self, f: impl FnMut(&Vec<Todo>) + 'static) -> SubId {
        self.todos.subscribe(f)
    }

    pub fn subscribe_categories(&mut self, f: impl FnMut(&Vec<String>) + 'static) -> SubId {
        self.categories.subscribe(f)
    }

    pub fn subscribe_filtered(&mut self, f: impl FnMut(&Vec<Todo>) + 'static) -> SubId {
        self.filtered.subscribe(f)
    }

    pub fn subscribe_stats(&mut self, f: impl FnMut(&Stats) + 'static) -> SubId {
        self.stats.subscribe(f)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Append a new incomplete todo. No-op if `text` is blank.
    /// Returns the new id on success.
    pub fn add_todo(
        &mut self,
        text: &str,
        category: &str,
    ) -> Result<Option<TodoId>, StorageError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let todo = Todo::new(text.to_string(), category.to_string());
        let id = todo.id;
        let mut todos = self.todos.get();
        todos.push(todo);
        self.commit_todos(todos)?;
        Ok(Some(id))
    }

    /// Flip `completed` on the matching todo. No-op if not found.
    pub fn toggle_todo(&mut self, id: TodoId) -> Result<(), StorageError> {
        let mut todos = self.todos.get();
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        todo.completed = !todo.completed;
        self.commit_todos(todos)
    }

    /// Remove the matching todo. No-op if not found.
    pub fn delete_todo(&mut self, id: TodoId) -> Result<(), StorageError> {
        let before = self.todos.value().len();
        let todos: Vec<Todo> = self
            .todos
            .value()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        if todos.len() == before {
            return Ok(());
        }
        self.commit_todos(todos)
    }

    /// Remove all completed todos
    pub fn clear_completed(&mut self) -> Result<(), StorageError> {
        let todos: Vec<Todo> = self
            .todos
            .value()
            .iter()
            .filter(|t| !t.completed)
            .cloned()
            .collect();
        self.commit_todos(todos)
    }

    /// Replace the status filter unconditionally
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter.set(filter);
        self.recompute();
    }

    /// Replace the category filter unconditionally
    pub fn set_selected_category(&mut self, category: CategoryFilter) {
        self.selected_category.set(category);
        self.recompute();
    }

    /// Append a category. No-op if blank or already present (exact match).
    pub fn add_category(&mut self, name: &str) -> Result<(), StorageError> {
        if name.trim().is_empty() || self.categories.value().iter().any(|c| c.as_str() == name) {
            return Ok(());
        }
        let mut categories = self.categories.get();
        categories.push(name.to_string());
        self.categories.set(categories);
        self.persist_categories()
    }

    /// Remove a category. No-op for the protected defaults. If the removed
    /// name was the active category filter, the filter resets to `All`.
    pub fn delete_category(&mut self, name: &str) -> Result<(), StorageError> {
        if category::is_default(name) {
            return Ok(());
        }
        let categories: Vec<String> = self
            .categories
            .value()
            .iter()
            .filter(|c| c.as_str() != name)
            .cloned()
            .collect();
        self.categories.set(categories);
        if self.selected_category.value() == &CategoryFilter::Name(name.to_string()) {
            self.set_selected_category(CategoryFilter::All);
        }
        self.persist_categories()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Emit the new todo list, rederive, then mirror to storage.
    /// In-memory state is already updated if the mirror write fails.
    fn commit_todos(&mut self, todos: Vec<Todo>) -> Result<(), StorageError> {
        self.todos.set(todos);
        self.recompute();
        let json = to_json(TODOS_KEY, self.todos.value())?;
        self.storage.write(TODOS_KEY, &json)
    }

    fn persist_categories(&mut self) -> Result<(), StorageError> {
        let json = to_json(CATEGORIES_KEY, self.categories.value())?;
        self.storage.write(CATEGORIES_KEY, &json)
    }

    fn recompute(&mut self) {
        let filtered = derive::filter_todos(
            self.todos.value(),
            self.filter.get(),
            self.selected_category.value(),
        );
        let stats = derive::compute_stats(&filtered);
        self.filtered.set(filtered);
        self.stats.set(stats);
    }
}

fn to_json<T: serde::Serialize>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::WriteFailed {
        key: key.to_string(),
        source: e.into(),
    })
}
