//! tido: a categorized todo list with a reactive state container.
//!
//! The library is the interesting part: [`store::TodoService`] holds todos,
//! categories, and filter selections, derives the filtered list and
//! completion stats on every change, and mirrors state to a key-value
//! [`io::storage::Storage`] backend. The `td` binary is a thin CLI over it.

pub mod cli;
pub mod io;
pub mod model;
pub mod store;
