use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::core::index::DEFAULT_SUGGESTION_LIMIT;
use crate::state::persist::{DirStore, StateError};
use crate::state::session::Session;

/// Upload size cap; fusion lists are small text files.
pub const MAX_UPLOAD_SIZE: usize = 8 * 1024 * 1024; // 8MB

/// Concurrent in-flight request cap. The app is single-user; this only
/// bounds damage from a runaway client.
pub const MAX_CONCURRENT_REQUESTS: usize = 16;

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state: the one session, serialized behind a lock.
pub struct AppState {
    session: RwLock<Session<DirStore>>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

enum AppError {
    State(StateError),
    BadRequest(String),
}

impl From<StateError> for AppError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::State(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// One row of the matches table
#[derive(Serialize)]
struct RecordView {
    material1: String,
    material2: String,
    result: String,
    /// True when the result is in the ignore set
    ignored: bool,
    /// True when a field was empty after trimming (suspect source line)
    suspect: bool,
}

/// Everything the page needs to render the current state
#[derive(Serialize)]
struct StateView {
    file: Option<String>,
    record_count: usize,
    filters: Vec<String>,
    ignores: Vec<String>,
    matches: Vec<RecordView>,
    results: Vec<String>,
}

fn state_view(session: &Session<DirStore>, hide_ignored: bool) -> StateView {
    let outcome = session.outcome();
    let matches = outcome
        .records
        .iter()
        .zip(&outcome.ignored)
        .filter(|(_, &ignored)| !(hide_ignored && ignored))
        .map(|(record, &ignored)| RecordView {
            material1: record.material1.clone(),
            material2: record.material2.clone(),
            result: record.result.clone(),
            ignored,
            suspect: record.has_empty_field(),
        })
        .collect();

    StateView {
        file: session.file_name().map(str::to_string),
        record_count: session.record_count(),
        filters: session.filters().to_vec(),
        ignores: session.ignores().to_vec(),
        matches,
        results: outcome.results.clone(),
    }
}

/// Start the web server (blocking entry point called from the CLI)
///
/// # Errors
///
/// Returns an error if the state directory is unusable, the address cannot
/// be bound, or the runtime fails to start.
pub fn run(args: &ServeArgs, state_dir: std::path::PathBuf) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(args, state_dir))
}

async fn run_server(args: &ServeArgs, state_dir: std::path::PathBuf) -> anyhow::Result<()> {
    let session = Session::open(DirStore::open(state_dir)?)?;
    let state = Arc::new(AppState {
        session: RwLock::new(session),
    });

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/state", get(state_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/filters", post(add_filter_handler).delete(clear_filters_handler))
        .route("/api/filters/{term}", axum::routing::delete(remove_filter_handler))
        .route("/api/ignores", post(add_ignore_handler).delete(clear_ignores_handler))
        .route("/api/ignores/{term}", axum::routing::delete(remove_ignore_handler))
        .route("/api/suggest", get(suggest_handler))
        .layer(
            ServiceBuilder::new()
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.address, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let url = format!("http://{addr}");

    info!("listening on {url}");
    println!("fusion-solver web UI: {url}");
    println!("Press Ctrl+C to stop");

    if args.open {
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

#[derive(Deserialize)]
struct StateQuery {
    /// Hide matching rows whose result is ignored (default: show them)
    hide_ignored: Option<bool>,
}

async fn state_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StateQuery>,
) -> Json<StateView> {
    let session = state.session.read().await;
    Json(state_view(&session, query.hide_ignored.unwrap_or(false)))
}

async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<StateView>, AppError> {
    let mut uploaded: Option<(String, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let name = field.file_name().map(str::to_string);
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Could not read upload: {e}")))?;
            uploaded = Some((text, name));
            break;
        }
    }

    let mut session = state.session.write().await;
    // No file selected: a no-op, the current state comes back unchanged.
    if let Some((text, name)) = uploaded {
        session.upload_text(&text, name.as_deref());
    }
    Ok(Json(state_view(&session, false)))
}

#[derive(Deserialize)]
struct TermBody {
    term: String,
}

async fn add_filter_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TermBody>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.add_filter(&body.term)?;
    Ok(Json(state_view(&session, false)))
}

async fn remove_filter_handler(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.remove_filter(&term)?;
    Ok(Json(state_view(&session, false)))
}

async fn clear_filters_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.clear_filters()?;
    Ok(Json(state_view(&session, false)))
}

async fn add_ignore_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TermBody>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.add_ignore(&body.term)?;
    Ok(Json(state_view(&session, false)))
}

async fn remove_ignore_handler(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.remove_ignore(&term)?;
    Ok(Json(state_view(&session, false)))
}

async fn clear_ignores_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StateView>, AppError> {
    let mut session = state.session.write().await;
    session.clear_ignores()?;
    Ok(Json(state_view(&session, false)))
}

#[derive(Deserialize)]
struct SuggestQuery {
    prefix: String,
    limit: Option<usize>,
}

async fn suggest_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestQuery>,
) -> Json<Vec<String>> {
    let session = state.session.read().await;
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    Json(session.suggest_limited(&query.prefix, limit))
}
