use serde::Serialize;

use crate::model::{CategoryFilter, StatusFilter, Todo};

/// Aggregate counts over the currently *filtered* todo list.
///
/// `active` is "visible and incomplete", not a global count; that is the
/// original behavior and is kept deliberately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub done: usize,
    /// Rounded percentage done/total; 0 when the list is empty
    pub progress: u32,
}

/// Apply the category filter, then the status filter. Insertion order is
/// preserved.
pub fn filter_todos(
    todos: &[Todo],
    status: StatusFilter,
    category: &CategoryFilter,
) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| category.matches(&t.category))
        .filter(|t| match status {
            StatusFilter::All => true,
            StatusFilter::Active => !t.completed,
            StatusFilter::Completed => t.completed,
        })
        .cloned()
        .collect()
}

/// Compute stats over an already-filtered list
pub fn compute_stats(todos: &[Todo]) -> Stats {
    let total = todos.len();
    let done = todos.iter().filter(|t| t.completed).count();
    let progress = if total == 0 {
        0
    } else {
        (done as f64 / total as f64 * 100.0).round() as u32
    };
    Stats {
        total,
        active: total - done,
        done,
        progress,
    }
}
