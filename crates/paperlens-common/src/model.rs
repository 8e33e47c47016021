//! Wire and data models for the search and analysis backends.

use serde::{Deserialize, Serialize};

/// Body of `POST {base}/api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: i64,
}

/// One paper as returned by the search backend. Transient: lives only for
/// the duration of the render generation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// External URL or identifier; used verbatim as the title's link target.
    pub id: String,
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub citations: Option<i64>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
}

/// 2xx body of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PaperSummary>,
}

/// Non-2xx body of the search endpoint; `error` is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST {base}/api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub paper_id: String,
}

/// 2xx body of the analyze endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: PaperAnalysis,
}

/// Per-paper analysis sections. Every field is optional on the wire; the
/// view substitutes a field-specific fallback for missing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperAnalysis {
    pub key_findings: Option<String>,
    pub methodology: Option<String>,
    pub conclusions: Option<String>,
    pub limitations: Option<String>,
    pub future_work: Option<String>,
}
