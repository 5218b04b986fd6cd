pub mod derive;
pub mod service;
pub mod signal;

pub use derive::Stats;
pub use service::TodoService;
pub use signal::{Signal, SubId};
