pub mod error;
pub mod semantic;
pub mod ui;

pub use error::{Result, SemanticError};
pub use semantic::{compare, IncrementFlags, Semantic};
