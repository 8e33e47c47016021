//! Search submission flow: clear prior state, call the backend, commit
//! results or surface the error, always releasing the loading indicator.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::warn;

use paperlens_common::error::PaperlensError;
use paperlens_view::render::{render_page, NETWORK_ERROR_TEXT, SEARCH_FAILED_TEXT};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub query: String,
    /// Kept as text so a non-numeric value gets an inline page error
    /// instead of a framework 422 or a wasted backend call.
    pub max_results: String,
}

pub async fn search_submit(
    State(state): State<SharedState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let max_results = match form.max_results.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let mut page = state.page.write().await;
            let generation = page.begin_search();
            page.fail_search(
                generation,
                "Maximum results must be a whole number.".to_string(),
            );
            return Html(render_page(&page));
        }
    };

    // Results and error state are cleared before the backend call; the
    // generation ticket makes a superseded submission's completion a no-op.
    let generation = state.page.write().await.begin_search();

    let outcome = state.client.search(&form.query, max_results).await;

    let mut page = state.page.write().await;
    match outcome {
        Ok(papers) => {
            page.commit_results(generation, form.query, papers);
        }
        Err(err) => {
            warn!(%err, "search request failed");
            page.fail_search(generation, search_error_message(&err));
        }
    }
    Html(render_page(&page))
}

/// Map a failed search to its user-visible message: the backend's own
/// `error` text when it sent one, a generic search error for other HTTP
/// failures, and the network message for transport failures.
fn search_error_message(err: &PaperlensError) -> String {
    match err {
        PaperlensError::Backend {
            message: Some(message),
            ..
        } => message.clone(),
        PaperlensError::Backend { message: None, .. } => SEARCH_FAILED_TEXT.to_string(),
        _ => NETWORK_ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_generic() {
        let err = PaperlensError::Backend {
            status: 429,
            message: Some("Rate limited".into()),
        };
        assert_eq!(search_error_message(&err), "Rate limited");
    }

    #[test]
    fn bodyless_http_error_is_generic() {
        let err = PaperlensError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(search_error_message(&err), SEARCH_FAILED_TEXT);
    }

    #[test]
    fn config_error_maps_to_network_text() {
        // Anything that is not an HTTP status falls through to the
        // transport message, as the browser original did.
        let err = PaperlensError::Config("x".into());
        assert_eq!(search_error_message(&err), NETWORK_ERROR_TEXT);
    }
}
