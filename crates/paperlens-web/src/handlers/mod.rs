//! HTTP handlers for the page's routes.

pub mod abstract_toggle;
pub mod analyze;
pub mod page;
pub mod search;
