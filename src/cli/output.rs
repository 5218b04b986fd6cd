use serde::Serialize;

use crate::model::Todo;
use crate::store::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub status_filter: &'a str,
    pub category_filter: &'a str,
    pub todos: &'a [Todo],
}

#[derive(Serialize)]
pub struct StatsJson<'a> {
    pub status_filter: &'a str,
    pub category_filter: &'a str,
    #[serde(flatten)]
    pub stats: Stats,
}

#[derive(Serialize)]
pub struct CategoriesJson<'a> {
    pub categories: &'a [String],
}

#[derive(Serialize)]
pub struct AddedJson<'a> {
    pub todo: &'a Todo,
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Short id shown in listings (enough of a UUID to be a usable prefix)
pub fn short_id(todo: &Todo) -> String {
    todo.id.to_string()[..8].to_string()
}

/// One listing line: `[x] 3f2a91bc  Buy milk  #Shopping`
pub fn todo_line(todo: &Todo) -> String {
    let checkbox = if todo.completed { 'x' } else { ' ' };
    format!(
        "[{}] {}  {}  #{}",
        checkbox,
        short_id(todo),
        todo.text,
        todo.category
    )
}

/// Stats summary line: `3 total, 1 active, 2 done (67%)`
pub fn stats_line(stats: &Stats) -> String {
    format!(
        "{} total, {} active, {} done ({}%)",
        stats.total, stats.active, stats.done, stats.progress
    )
}
