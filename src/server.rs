//! Web server module for the item browser.
//!
//! Serves the HTMX-powered item page, the partial results endpoint it
//! swaps in, and a small JSON API over the same query evaluation.

mod views;

use std::sync::Arc;
use std::time::Duration;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::config::ServerConfig;
use crate::query::{GroupedResult, evaluate};
use crate::store::{FilterSet, ItemStore};
use crate::view_state::BrowserState;

pub use views::{
    GroupView, INDEX_PATH, ITEMS_PATH, ItemView, LinkView, ResultsView, SectionView, SidebarView,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

/// Raw query-string pairs, order preserved (`filter` may repeat).
type QueryPairs = Query<Vec<(String, String)>>;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    items: usize,
}

/// JSON body for `/api/items`.
#[derive(Serialize)]
struct ItemsResponse<'a> {
    filters: &'a FilterSet,
    total: usize,
    #[serde(flatten)]
    result: &'a GroupedResult,
}

/// Full page template.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    sidebar: SidebarView,
    results: ResultsView,
    oob: bool,
}

/// Results partial template, with an out-of-band sidebar refresh.
#[derive(Template)]
#[template(path = "partials/items.html")]
struct ItemsTemplate {
    sidebar: SidebarView,
    results: ResultsView,
    oob: bool,
}

/// Wrapper to render Askama templates as Axum responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(rendered) => Html(rendered).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let app_state = Arc::new(state);

    Router::new()
        .route(INDEX_PATH, get(index_handler))
        .route(ITEMS_PATH, get(items_handler))
        .route("/healthz", get(healthz_handler))
        .route("/api/items", get(api_items_handler))
        .route("/api/values/{key}", get(api_values_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(timeout_layer(config.request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Requests that outlive `timeout` are answered with `408 Request Timeout`.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Resolve query parameters into browser state and evaluate them.
fn run_query(store: &ItemStore, params: Vec<(String, String)>) -> (BrowserState, GroupedResult) {
    let browser = BrowserState::from_query_pairs(params);
    let result = evaluate(store, &browser.filters, browser.group_by());
    (browser, result)
}

/// Full page handler.
async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(params): QueryPairs,
) -> Response {
    let (browser, result) = run_query(&state.store, params);

    HtmlTemplate(IndexTemplate {
        sidebar: SidebarView::build(&state.store, &browser),
        results: ResultsView::build(&result),
        oob: false,
    })
    .into_response()
}

/// Items endpoint - returns HTML partial for HTMX.
async fn items_handler(
    State(state): State<Arc<AppState>>,
    Query(params): QueryPairs,
) -> Response {
    let (browser, result) = run_query(&state.store, params);

    HtmlTemplate(ItemsTemplate {
        sidebar: SidebarView::build(&state.store, &browser),
        results: ResultsView::build(&result),
        oob: true,
    })
    .into_response()
}

/// Liveness probe.
async fn healthz_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        items: state.store.len(),
    })
}

/// Items API endpoint - returns the grouped result as JSON.
async fn api_items_handler(
    State(state): State<Arc<AppState>>,
    Query(params): QueryPairs,
) -> Response {
    let (browser, result) = run_query(&state.store, params);

    Json(ItemsResponse {
        filters: &browser.filters,
        total: result.total(),
        result: &result,
    })
    .into_response()
}

/// Distinct values of one attribute. Unknown attributes yield `[]`.
async fn api_values_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Json<Vec<String>> {
    Json(state.store.distinct_values_named(&key))
}
