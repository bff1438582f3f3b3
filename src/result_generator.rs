use rand::Rng;
use std::ops::Range;
use std::sync::Arc;

use crate::data_models::{ResultRecord, ResultsResponse};
use crate::error::{Result, RoseError};

/// Bounds of the synthetic search time, in seconds.
pub const SEARCH_TIME_RANGE: Range<f64> = 0.1..0.4;

/// Source of the `search_time` value reported with every response.
pub trait SearchTimer: Send + Sync {
    fn search_time(&self) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSearchTimer;

impl SearchTimer for RandomSearchTimer {
    fn search_time(&self) -> f64 {
        rand::thread_rng().gen_range(SEARCH_TIME_RANGE)
    }
}

/// Always reports the same time. Values outside the allowed range are pulled
/// back inside it.
#[derive(Debug, Clone, Copy)]
pub struct FixedSearchTimer(pub f64);

impl SearchTimer for FixedSearchTimer {
    fn search_time(&self) -> f64 {
        if self.0.is_nan() || self.0 < SEARCH_TIME_RANGE.start {
            SEARCH_TIME_RANGE.start
        } else if self.0 >= SEARCH_TIME_RANGE.end {
            // largest f64 strictly below the end bound
            f64::from_bits(SEARCH_TIME_RANGE.end.to_bits() - 1)
        } else {
            self.0
        }
    }
}

/// Number of results reported for `query`.
///
/// `len * 70 + len * first_code_point`, where `len` counts characters.
/// An empty query has no first character and reports zero.
pub fn total_results(query: &str) -> u64 {
    let Some(first) = query.chars().next() else {
        return 0;
    };
    let len = query.chars().count() as u64;
    len.saturating_mul(70)
        .saturating_add(len.saturating_mul(first as u64))
}

/// Fabricates result pages from the query text alone.
#[derive(Clone)]
pub struct ResultGenerator {
    timer: Arc<dyn SearchTimer>,
}

impl Default for ResultGenerator {
    fn default() -> Self {
        Self::new(Arc::new(RandomSearchTimer))
    }
}

impl ResultGenerator {
    pub fn new(timer: Arc<dyn SearchTimer>) -> Self {
        Self { timer }
    }

    /// Returns the slice of results for the one-based `page`.
    ///
    /// A page past the end yields an empty slice, not an error.
    pub fn generate(&self, query: &str, page: u64, page_size: u64) -> Result<ResultsResponse> {
        if page < 1 {
            return Err(RoseError::invalid_argument(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(RoseError::invalid_argument(format!(
                "page_size must be >= 1, got {page_size}"
            )));
        }

        let total = total_results(query);
        let start = (page - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(total);

        let results = (start..end)
            .map(|i| ResultRecord::new(query, i))
            .collect::<Vec<_>>();

        tracing::debug!(
            query,
            page,
            page_size,
            total,
            returned = results.len(),
            "generated results"
        );

        Ok(ResultsResponse {
            results,
            total_results: total,
            search_time: self.timer.search_time(),
        })
    }
}

#[test]
fn test_total_results() {
    assert_eq!(total_results(""), 0);
    assert_eq!(total_results("cat"), 507);
    assert_eq!(total_results("a"), 70 + 97);
    assert_eq!(total_results("Rust"), 4 * 70 + 4 * 82);
    // counted in characters, not bytes
    assert_eq!(total_results("é"), 70 + 0xE9);
}

#[test]
fn test_fixed_timer_clamps() {
    assert_eq!(FixedSearchTimer(0.25).search_time(), 0.25);
    assert_eq!(FixedSearchTimer(0.0).search_time(), 0.1);
    assert_eq!(FixedSearchTimer(f64::NAN).search_time(), 0.1);
    let high = FixedSearchTimer(7.0).search_time();
    assert!(high < 0.4 && high > 0.39);
}
