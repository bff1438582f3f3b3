use url::form_urlencoded;

use crate::data_models::{PageMarker, PaginationPlan};
use crate::error::{Result, RoseError};

/// Strips with at most this many pages show every page.
pub const MAX_UNGAPPED_PAGES: u64 = 7;

/// Largest page size a caller may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Plans the pagination strip for `current_page` out of `total_pages`.
///
/// Up to seven pages are all listed. Beyond that the strip is always seven
/// markers wide and one of three windows is used: the first five pages when
/// `current_page < 5`, the last five when `current_page > total_pages - 4`,
/// otherwise the current page and its two neighbours. The first and last page
/// are always present.
pub fn plan(current_page: u64, total_pages: u64) -> Result<PaginationPlan> {
    if total_pages < 1 {
        return Err(RoseError::invalid_argument(format!(
            "total_pages must be >= 1, got {total_pages}"
        )));
    }
    if current_page < 1 || current_page > total_pages {
        return Err(RoseError::invalid_argument(format!(
            "current_page must be in [1, {total_pages}], got {current_page}"
        )));
    }

    use PageMarker::{Gap, Page};

    if total_pages <= MAX_UNGAPPED_PAGES {
        return Ok((1..=total_pages).map(Page).collect());
    }

    let last = total_pages;
    let markers = if current_page < 5 {
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(last)]
    } else if current_page > last - 4 {
        vec![
            Page(1),
            Gap,
            Page(last - 4),
            Page(last - 3),
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ]
    } else {
        vec![
            Page(1),
            Gap,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Gap,
            Page(last),
        ]
    };
    Ok(markers)
}

pub fn total_pages(total_results: u64, page_size: u64) -> u64 {
    total_results.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.clamp(1, total_pages.max(1))
}

/// Parses the raw `page` query parameter. Missing or garbage input means page 1.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

fn encode(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Path of results page `page` for `query`.
pub fn page_url(query: &str, page: u64) -> String {
    format!("/search?q={}&page={page}", encode(query))
}
