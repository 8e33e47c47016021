//! paperlens-view — Per-card view-model and its HTML projection.
//!
//! Card UI state is held as explicit tagged variants keyed by paper id,
//! never recovered from rendered markup. The renderer is a pure function
//! of that state.

pub mod render;
pub mod state;

pub use state::{AbstractView, AnalysisPanel, CardState, PageState, SearchView};
