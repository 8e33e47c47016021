//! End-to-end page flow against a recording mock backend.

use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use paperlens_web::config::Config;
use paperlens_web::router::build_router;
use paperlens_web::state::AppState;

#[derive(Clone, Default)]
struct Recorded {
    search: Arc<Mutex<Vec<Value>>>,
    analyze: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct Backend {
    rec: Recorded,
    papers: Value,
    failing: Vec<String>,
}

async fn search_handler(State(b): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    b.rec.search.lock().unwrap().push(body);
    Json(json!({ "results": b.papers }))
}

async fn analyze_handler(
    State(b): State<Backend>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    b.rec.analyze.lock().unwrap().push(body.clone());
    let id = body["paper_id"].as_str().unwrap_or_default().to_string();
    if b.failing.iter().any(|f| *f == id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({
        "analysis": {
            "key_findings": format!("{id} key findings"),
            "methodology": format!("{id} methodology"),
            "conclusions": format!("{id} conclusions"),
            "limitations": format!("{id} limitations"),
            "future_work": format!("{id} future work"),
        }
    })))
}

/// Serve any router on a random local port, return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{}", addr)
}

async fn spawn_backend(rec: Recorded, papers: Value, failing: &[&str]) -> String {
    let backend = Backend {
        rec,
        papers,
        failing: failing.iter().map(|s| s.to_string()).collect(),
    };
    let app = Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/analyze", post(analyze_handler))
        .with_state(backend);
    spawn(app).await
}

fn app(backend_base: &str) -> Router {
    let config = Config {
        backend_url: backend_base.to_string(),
        bind: "127.0.0.1:0".parse().unwrap(),
        http_timeout: Duration::from_secs(5),
    };
    build_router(AppState::new(&config).unwrap())
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn two_papers() -> Value {
    json!([
        {
            "id": "arxiv-1",
            "title": "Quantum Error Correction at Scale",
            "authors": ["Ada Lovelace", "Alan Turing"],
            "year": 2023,
            "citations": 42,
            "abstract": "A".repeat(600)
        },
        {
            "id": "arxiv-2",
            "title": "Grover Search Revisited",
            "abstract": "short overview"
        }
    ])
}

#[tokio::test]
async fn index_serves_the_search_form() {
    let base = spawn_backend(Recorded::default(), json!([]), &[]).await;
    let app = app(&base);

    let (status, html) = send(
        &app,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"name="query""#));
    assert!(html.contains(r#"name="max_results""#));
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_backend(Recorded::default(), json!([]), &[]).await;
    let app = app(&base);

    let (status, body) = send(
        &app,
        Request::builder().uri("/healthz").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn search_posts_contract_body_and_renders_one_card_per_paper() {
    let rec = Recorded::default();
    let base = spawn_backend(rec.clone(), two_papers(), &[]).await;
    let app = app(&base);

    let (status, html) = send(
        &app,
        form_post("/search", "query=quantum+computing&max_results=5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let seen = rec.search.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        json!({"query": "quantum computing", "max_results": 5})
    );

    assert_eq!(html.matches("paper-card").count(), 2);
    assert!(html.contains("Quantum Error Correction at Scale"));
    assert!(html.contains("Grover Search Revisited"));
    assert!(html.contains("Ada Lovelace, Alan Turing"));
    // Only the 600-char abstract gets a toggle.
    assert_eq!(html.matches("Read More").count(), 1);
}

#[tokio::test]
async fn empty_results_show_the_placeholder() {
    let base = spawn_backend(Recorded::default(), json!([]), &[]).await;
    let app = app(&base);

    let (_, html) = send(&app, form_post("/search", "query=nothing&max_results=5")).await;
    assert!(html.contains("No results found."));
    assert!(!html.contains("paper-card"));
}

#[tokio::test]
async fn search_backend_error_message_is_surfaced() {
    let app_router = Router::new().route(
        "/api/search",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "Index is rebuilding"})),
            )
        }),
    );
    let base = spawn(app_router).await;
    let app = app(&base);

    let (status, html) = send(&app, form_post("/search", "query=x&max_results=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Index is rebuilding"));
}

#[tokio::test]
async fn search_backend_error_without_body_is_generic() {
    let app_router = Router::new().route(
        "/api/search",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn(app_router).await;
    let app = app(&base);

    let (_, html) = send(&app, form_post("/search", "query=x&max_results=5")).await;
    assert!(html.contains("An error occurred while searching"));
}

#[tokio::test]
async fn unreachable_backend_shows_the_network_message() {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = app(&format!("http://{}", addr));

    let (_, html) = send(&app, form_post("/search", "query=x&max_results=5")).await;
    assert!(html.contains("Network error occurred. Please try again."));
}

#[tokio::test]
async fn non_numeric_max_results_never_reaches_the_backend() {
    let rec = Recorded::default();
    let base = spawn_backend(rec.clone(), two_papers(), &[]).await;
    let app = app(&base);

    let (_, html) = send(&app, form_post("/search", "query=x&max_results=five")).await;
    assert!(rec.search.lock().unwrap().is_empty());
    assert!(html.contains("Maximum results must be a whole number."));
}

#[tokio::test]
async fn analyze_posts_the_cards_paper_id_and_fills_all_sections() {
    let rec = Recorded::default();
    let base = spawn_backend(rec.clone(), two_papers(), &[]).await;
    let app = app(&base);

    send(&app, form_post("/search", "query=quantum+computing&max_results=5")).await;
    let (status, html) = send(&app, form_post("/papers/analyze", "paper_id=arxiv-1")).await;

    assert_eq!(status, StatusCode::OK);
    let seen = rec.analyze.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], json!({"paper_id": "arxiv-1"}));

    assert!(html.contains("Paper Analysis"));
    assert!(html.contains("arxiv-1 key findings"));
    assert!(html.contains("arxiv-1 methodology"));
    assert!(html.contains("arxiv-1 conclusions"));
    assert!(html.contains("arxiv-1 limitations"));
    assert!(html.contains("arxiv-1 future work"));
}

#[tokio::test]
async fn analyze_with_empty_paper_id_is_a_noop() {
    let rec = Recorded::default();
    let base = spawn_backend(rec.clone(), two_papers(), &[]).await;
    let app = app(&base);

    send(&app, form_post("/search", "query=x&max_results=5")).await;
    let (_, html) = send(&app, form_post("/papers/analyze", "paper_id=")).await;

    assert!(rec.analyze.lock().unwrap().is_empty());
    assert!(!html.contains("paper-analysis"));
    assert_eq!(html.matches("paper-card").count(), 2);
}

#[tokio::test]
async fn analysis_failure_is_card_local() {
    let rec = Recorded::default();
    let base = spawn_backend(rec.clone(), two_papers(), &["arxiv-1"]).await;
    let app = app(&base);

    send(&app, form_post("/search", "query=x&max_results=5")).await;
    send(&app, form_post("/papers/analyze", "paper_id=arxiv-2")).await;
    let (_, html) = send(&app, form_post("/papers/analyze", "paper_id=arxiv-1")).await;

    // Card B's successful analysis is untouched by card A's failure.
    assert!(html.contains("arxiv-2 key findings"));
    assert!(html.contains("Failed to analyze paper. Please try again later."));
    assert!(html.contains("Retry"));
}

#[tokio::test]
async fn abstract_toggle_round_trips() {
    let base = spawn_backend(Recorded::default(), two_papers(), &[]).await;
    let app = app(&base);

    send(&app, form_post("/search", "query=x&max_results=5")).await;

    let (_, expanded) = send(&app, form_post("/papers/abstract", "paper_id=arxiv-1")).await;
    assert!(expanded.contains("Show Less"));
    assert!(expanded.contains(&"A".repeat(600)));

    let (_, collapsed) = send(&app, form_post("/papers/abstract", "paper_id=arxiv-1")).await;
    assert!(collapsed.contains("Read More"));
    assert!(!collapsed.contains(&"A".repeat(600)));
}
