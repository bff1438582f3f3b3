use serde::{Deserialize, Serialize};

/// One fabricated search hit. Built per request and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
}

impl ResultRecord {
    /// Builds the record for zero-based result index `index`.
    pub fn new(query: &str, index: u64) -> ResultRecord {
        let ordinal = index + 1;
        ResultRecord {
            id: format!("result-{index}"),
            title: format!("{} - Result {ordinal}", capitalize(query)),
            url: format!("https://example.com/result-{ordinal}"),
            description: format!(
                "This is a sample search result for \"{query}\". It provides information about topic {ordinal} related to your search. Click to learn more about this interesting topic."
            ),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ResultsResponse {
    pub results: Vec<ResultRecord>,
    pub total_results: u64,
    /// Seconds. Synthetic, always in `[0.1, 0.4)`.
    pub search_time: f64,
}

/// One entry of a pagination strip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(u64),
    Gap,
}

impl PageMarker {
    pub fn page(&self) -> Option<u64> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Gap => None,
        }
    }
}

/// Markers in display order, left to right.
pub type PaginationPlan = Vec<PageMarker>;

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
