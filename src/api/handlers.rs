use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;

use crate::data_models::{PageMarker, ResultsResponse};
use crate::error::RoseError;
use crate::pagination;
use crate::render::{self, ResultsPageView};
use crate::result_generator;

use super::AppState;
use super::models::{SearchPageParams, SearchParams, SearchResponse};

/// A fully resolved search: page clamped, results generated, strip planned.
struct SearchOutcome {
    response: ResultsResponse,
    current_page: u64,
    total_pages: u64,
    markers: Vec<PageMarker>,
}

async fn run_search(
    state: &AppState,
    query: &str,
    raw_page: Option<&str>,
    page_size: u64,
) -> Result<SearchOutcome, RoseError> {
    // stand-in for the round trip to a real backend
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }

    let total_results = result_generator::total_results(query);
    let total_pages = pagination::total_pages(total_results, page_size);
    let current_page = pagination::clamp_page(pagination::parse_page(raw_page), total_pages);

    let response = state.generator.generate(query, current_page, page_size)?;
    let markers = if total_pages >= 1 {
        pagination::plan(current_page, total_pages)?
    } else {
        Vec::new()
    };

    Ok(SearchOutcome {
        response,
        current_page,
        total_pages,
        markers,
    })
}

pub async fn landing_handler() -> Html<String> {
    Html(render::landing_page())
}

pub async fn search_page_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchPageParams>,
) -> Result<Html<String>, RoseError> {
    let Some(query) = params.query() else {
        return Ok(Html(render::empty_query_page()));
    };

    tracing::info!(query, page = params.page.as_deref(), "search page requested");

    let outcome = run_search(&state, query, params.page.as_deref(), state.results_per_page).await?;

    let markers = (outcome.total_pages > 1).then_some(outcome.markers.as_slice());
    let view = ResultsPageView {
        query,
        response: &outcome.response,
        current_page: outcome.current_page,
        total_pages: outcome.total_pages,
        markers,
        year: chrono::Local::now().year(),
    };
    Ok(Html(render::results_page(&view)))
}

pub async fn search_api_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, Response> {
    let Some(query) = params.query() else {
        return Err((StatusCode::BAD_REQUEST, "Query cannot be empty".to_string()).into_response());
    };

    let page_size = params.page_size.unwrap_or(state.results_per_page);
    if !(1..=pagination::MAX_PAGE_SIZE).contains(&page_size) {
        return Err(RoseError::invalid_argument(format!(
            "page_size must be in [1, {}], got {page_size}",
            pagination::MAX_PAGE_SIZE
        ))
        .into_response());
    }

    let outcome = run_search(&state, query, params.page.as_deref(), page_size)
        .await
        .map_err(|e| {
            tracing::error!("search failed for {query:?}: {:#}", e);
            e.into_response()
        })?;

    Ok(Json(SearchResponse {
        query: query.to_string(),
        results: outcome.response.results,
        total_results: outcome.response.total_results,
        total_pages: outcome.total_pages,
        current_page: outcome.current_page,
        search_time: outcome.response.search_time,
        pagination: outcome.markers,
    }))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
