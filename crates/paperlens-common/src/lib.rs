//! paperlens-common — Shared types, errors, and escaping used across all paperlens crates.

pub mod error;
pub mod escape;
pub mod model;

// Re-export commonly used types
pub use error::{PaperlensError, Result};
pub use model::{PaperAnalysis, PaperSummary};
