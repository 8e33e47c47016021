//! Per-card analysis flow. State is keyed by paper id, so analyses for
//! distinct cards run as independent in-flight requests; each completion
//! writes only to its own card.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::error;

use paperlens_view::render::render_page;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub paper_id: String,
}

pub async fn analyze_submit(
    State(state): State<SharedState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let paper_id = form.paper_id;

    let generation = {
        let mut page = state.page.write().await;
        match page.begin_analysis(&paper_id) {
            Some(generation) => generation,
            // Empty or unknown id, or this card is already mid-analysis:
            // no backend call, page unchanged.
            None => return Html(render_page(&page)),
        }
    };

    let outcome = state.client.analyze(&paper_id).await;

    let mut page = state.page.write().await;
    match outcome {
        Ok(analysis) => {
            page.complete_analysis(generation, &paper_id, analysis);
        }
        Err(err) => {
            error!(%err, paper_id, "paper analysis failed");
            page.fail_analysis(generation, &paper_id);
        }
    }
    Html(render_page(&page))
}
