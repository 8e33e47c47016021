//! Abstract expand/collapse. A pure state flip: no network, idempotent
//! pairwise, a no-op for cards without a truncated abstract.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use paperlens_view::render::render_page;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub paper_id: String,
}

pub async fn toggle_submit(
    State(state): State<SharedState>,
    Form(form): Form<ToggleForm>,
) -> Html<String> {
    let mut page = state.page.write().await;
    page.toggle_abstract(&form.paper_id);
    Html(render_page(&page))
}
