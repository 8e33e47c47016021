//! paperlens-web — axum frontdoor for the research-paper search page.
//!
//! Serves the page, owns the view-model behind shared state, and talks to
//! the search/analysis backend through paperlens-client. Browser actions
//! arrive as form posts; every handler transitions the view-model and
//! answers with the re-projected page.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
