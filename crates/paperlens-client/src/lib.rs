//! paperlens-client — HTTP client for the search and analysis backends.
//!
//! Endpoints consumed:
//!   search:  POST {base}/api/search   {query, max_results} -> {results: [...]}
//!   analyze: POST {base}/api/analyze  {paper_id}           -> {analysis: {...}}

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, instrument};

use paperlens_common::error::{PaperlensError, Result};
use paperlens_common::model::{
    AnalyzeRequest, AnalyzeResponse, ErrorBody, PaperAnalysis, PaperSummary, SearchRequest,
    SearchResponse,
};

/// Client for the paper search/analysis backend. Cheap to clone; holds one
/// pooled reqwest::Client capped by a request timeout so a hung backend
/// cannot pin a page flow indefinitely.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new().timeout(timeout).build()?;
        // Trailing slash would double up when joining paths.
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Search for papers. On a non-2xx response the body's `error` field,
    /// when present, is surfaced through `PaperlensError::Backend`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, max_results: i64) -> Result<Vec<PaperSummary>> {
        let body = SearchRequest {
            query: query.to_string(),
            max_results,
        };

        let resp = self
            .client
            .post(format!("{}/api/search", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error);
            return Err(PaperlensError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = resp.json().await?;
        debug!(count = parsed.results.len(), "search backend returned papers");
        Ok(parsed.results)
    }

    /// Fetch the AI analysis for one paper. The body of a non-2xx response
    /// is ignored per the endpoint contract.
    #[instrument(skip(self))]
    pub async fn analyze(&self, paper_id: &str) -> Result<PaperAnalysis> {
        let body = AnalyzeRequest {
            paper_id: paper_id.to_string(),
        };

        let resp = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PaperlensError::Backend {
                status: status.as_u16(),
                message: None,
            });
        }

        let parsed: AnalyzeResponse = resp.json().await?;
        Ok(parsed.analysis)
    }
}
