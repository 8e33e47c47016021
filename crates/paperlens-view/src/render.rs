//! Pure HTML projection of the page state.
//!
//! Every function here is a function of the view-model only. All
//! externally sourced text (titles, ids used as hrefs, authors, abstracts,
//! analysis sections, backend error messages) is escaped at the point of
//! interpolation; numeric badges are typed integers.

use paperlens_common::escape::escape_html;

use crate::state::{
    AbstractView, AnalysisPanel, CardState, PageState, SearchView, ABSTRACT_PREVIEW_CHARS,
};

pub const NO_RESULTS_TEXT: &str = "No results found.";
pub const NO_AUTHORS_TEXT: &str = "No authors available";
pub const NO_YEAR_TEXT: &str = "Not available";
pub const NO_ABSTRACT_TEXT: &str = "No abstract available";
pub const READ_MORE_LABEL: &str = "Read More";
pub const SHOW_LESS_LABEL: &str = "Show Less";
pub const SUMMARIZE_LABEL: &str = "Summarize Paper";
pub const RETRY_LABEL: &str = "Retry";
pub const ANALYZING_TEXT: &str = "Analyzing paper...";
pub const ANALYSIS_FAILED_TEXT: &str = "Failed to analyze paper. Please try again later.";
pub const SEARCH_FAILED_TEXT: &str = "An error occurred while searching";
pub const NETWORK_ERROR_TEXT: &str = "Network error occurred. Please try again.";

const NO_KEY_FINDINGS: &str = "No key findings available";
const NO_METHODOLOGY: &str = "No methodology information available";
const NO_CONCLUSIONS: &str = "No conclusions available";
const NO_LIMITATIONS: &str = "No limitations information available";
const NO_FUTURE_WORK: &str = "No future work suggestions available";

/// Prefix of `s` holding at most `n` characters, cut on a char boundary.
pub fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Full page: search form, loading indicator, results region.
pub fn render_page(state: &PageState) -> String {
    let query_value = match state.view() {
        SearchView::Loaded { query, .. } => escape_html(query),
        _ => String::new(),
    };
    let loading_display = if state.loading() { "block" } else { "none" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Paperlens — Research Paper Search</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<main class="container">
    <h1 class="page-title">Research Paper Search</h1>
    <div class="card search-card mb-3">
        <div class="card-body">
            <form method="POST" action="/search" class="search-form">
                <div class="mb-2">
                    <label class="form-label" for="query">Search Query</label>
                    <input type="text" id="query" name="query" class="form-control"
                        placeholder="e.g. quantum computing" required value="{query_value}">
                </div>
                <div class="mb-2">
                    <label class="form-label" for="max_results">Maximum Results</label>
                    <input type="number" id="max_results" name="max_results" class="form-control"
                        min="1" max="20" value="5">
                </div>
                <button type="submit" class="btn btn-primary">Search</button>
            </form>
        </div>
    </div>
    <div class="loading text-center" style="display: {loading_display};">
        <p>Searching...</p>
    </div>
    <div class="results">
{results}
    </div>
</main>
</body>
</html>"#,
        query_value = query_value,
        loading_display = loading_display,
        results = render_results(state.view()),
    )
}

/// Results region: placeholder, error alert, or the card list.
pub fn render_results(view: &SearchView) -> String {
    match view {
        SearchView::Idle => String::new(),
        SearchView::Failed { message } => format!(
            r#"<div class="alert alert-danger" role="alert">{}</div>"#,
            escape_html(message)
        ),
        SearchView::Loaded { cards, .. } if cards.is_empty() => {
            format!(r#"<div class="alert alert-info">{NO_RESULTS_TEXT}</div>"#)
        }
        SearchView::Loaded { cards, .. } => {
            cards.iter().map(render_card).collect::<Vec<_>>().join("\n")
        }
    }
}

/// One paper card: linked title, authors, badges, abstract, analysis.
pub fn render_card(card: &CardState) -> String {
    let paper = &card.paper;
    let authors = match &paper.authors {
        Some(list) if !list.is_empty() => escape_html(&list.join(", ")),
        _ => NO_AUTHORS_TEXT.to_string(),
    };
    let year = match paper.year {
        Some(y) => y.to_string(),
        None => NO_YEAR_TEXT.to_string(),
    };
    let citations = paper.citations.unwrap_or(0);

    format!(
        r#"<div class="card paper-card mb-3">
    <div class="card-body">
        <h5 class="card-title">
            <a href="{href}" class="text-decoration-none text-dark" target="_blank">{title}</a>
        </h5>
        <h6 class="card-subtitle mb-2 text-muted">Authors: {authors}</h6>
        <div class="mb-2">
            <span class="badge bg-secondary">{year}</span>
            <span class="badge bg-info">{citations} citations</span>
        </div>
        <h6 class="abstract-heading">Abstract</h6>
        <div class="abstract-container">
{abstract_html}
        </div>
        <div class="mt-3">
{summarize_html}
        </div>
{analysis_html}
    </div>
</div>"#,
        href = escape_html(&paper.id),
        title = escape_html(&paper.title),
        authors = authors,
        year = year,
        citations = citations,
        abstract_html = render_abstract(card),
        summarize_html = render_summarize_control(card),
        analysis_html = render_analysis_panel(&card.analysis),
    )
}

fn render_abstract(card: &CardState) -> String {
    let full = card.paper.abstract_text.as_deref().unwrap_or(NO_ABSTRACT_TEXT);
    if !card.abstract_truncated() {
        return format!(
            r#"            <p class="card-text abstract-short">{}</p>"#,
            escape_html(full)
        );
    }

    let (text, label) = match card.abstract_view {
        AbstractView::Collapsed => (
            format!(
                "{}...",
                escape_html(truncate_chars(full, ABSTRACT_PREVIEW_CHARS))
            ),
            READ_MORE_LABEL,
        ),
        AbstractView::Expanded => (escape_html(full), SHOW_LESS_LABEL),
    };

    format!(
        r#"            <p class="card-text abstract-text">{text}</p>
            <form method="POST" action="/papers/abstract" class="abstract-actions">
                <input type="hidden" name="paper_id" value="{paper_id}">
                <button type="submit" class="read-more-btn btn btn-link text-primary">{label}</button>
            </form>"#,
        text = text,
        paper_id = escape_html(&card.paper.id),
        label = label,
    )
}

fn render_summarize_control(card: &CardState) -> String {
    let (label, disabled) = match card.analysis {
        AnalysisPanel::Loading => (SUMMARIZE_LABEL, " disabled"),
        AnalysisPanel::Errored => (RETRY_LABEL, ""),
        AnalysisPanel::Hidden | AnalysisPanel::Shown(_) => (SUMMARIZE_LABEL, ""),
    };
    format!(
        r#"            <form method="POST" action="/papers/analyze">
                <input type="hidden" name="paper_id" value="{paper_id}">
                <button type="submit" class="btn btn-primary summarize-btn"{disabled}>{label}</button>
            </form>"#,
        paper_id = escape_html(&card.paper.id),
        disabled = disabled,
        label = label,
    )
}

fn render_analysis_panel(panel: &AnalysisPanel) -> String {
    match panel {
        AnalysisPanel::Hidden => String::new(),
        AnalysisPanel::Loading => format!(
            r#"        <div class="paper-analysis mt-3">
            <div class="analysis-loading text-center"><p>{ANALYZING_TEXT}</p></div>
        </div>"#
        ),
        AnalysisPanel::Errored => format!(
            r#"        <div class="paper-analysis mt-3">
            <div class="alert alert-danger mt-3">{ANALYSIS_FAILED_TEXT}</div>
        </div>"#
        ),
        AnalysisPanel::Shown(analysis) => {
            format!(
                r#"        <div class="paper-analysis mt-3">
            <h6 class="analysis-heading">Paper Analysis</h6>
            <div class="analysis-sections">
{}
{}
{}
{}
{}
            </div>
        </div>"#,
                analysis_section("Key Findings", "key-findings", &analysis.key_findings, NO_KEY_FINDINGS),
                analysis_section("Methodology", "methodology", &analysis.methodology, NO_METHODOLOGY),
                analysis_section("Conclusions", "conclusions", &analysis.conclusions, NO_CONCLUSIONS),
                analysis_section("Limitations", "limitations", &analysis.limitations, NO_LIMITATIONS),
                analysis_section("Future Work", "future-work", &analysis.future_work, NO_FUTURE_WORK),
            )
        }
    }
}

fn analysis_section(
    heading: &str,
    class: &str,
    value: &Option<String>,
    fallback: &str,
) -> String {
    let text = match value {
        Some(v) => escape_html(v),
        None => fallback.to_string(),
    };
    format!(
        r#"                <div class="analysis-section">
                    <h6>{heading}</h6>
                    <p class="{class}">{text}</p>
                </div>"#
    )
}
