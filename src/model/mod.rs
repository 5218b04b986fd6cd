pub mod category;
pub mod filter;
pub mod todo;

pub use filter::*;
pub use todo::*;
