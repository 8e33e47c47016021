//! Page handler — projects the current view-model.

use axum::extract::State;
use axum::response::Html;

use paperlens_view::render::render_page;

use crate::state::SharedState;

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let page = state.page.read().await;
    Html(render_page(&page))
}

pub async fn healthz() -> &'static str {
    "ok"
}
