use serde::{Deserialize, Serialize};

use crate::data_models::{PageMarker, ResultRecord};

/// Query string of the `/search` page.
///
/// `page` is kept raw so that garbage falls back to page 1 instead of
/// rejecting the request. Unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPageParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl SearchPageParams {
    /// The query as typed, `None` when missing or blank.
    pub fn query(&self) -> Option<&str> {
        non_blank(self.q.as_deref())
    }
}

/// Query string of `/api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<u64>,
}

impl SearchParams {
    pub fn query(&self) -> Option<&str> {
        non_blank(self.q.as_deref())
    }
}

fn non_blank(q: Option<&str>) -> Option<&str> {
    q.filter(|q| !q.trim().is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ResultRecord>,
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub search_time: f64,
    pub pagination: Vec<PageMarker>,
}
