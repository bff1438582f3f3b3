//! Server-side HTML for the landing page, the results page and their parts.
//!
//! Every function here is pure: it takes already computed data and returns
//! markup. Text coming from the request is escaped on the way in.

use url::Url;

use crate::data_models::{PageMarker, ResultRecord, ResultsResponse};
use crate::pagination;

pub const DOCUMENT_TITLE: &str = "ROSE - Relevance Only Search Engine";
pub const DOCUMENT_DESCRIPTION: &str = "A minimalist search engine focused solely on relevance";

/// Paths longer than this may be shortened for display.
const MAX_DISPLAY_PATH: usize = 50;

/// Presentation size of the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    pub fn class(&self) -> &'static str {
        match self {
            LogoSize::Small => "logo logo-small",
            LogoSize::Medium => "logo logo-medium",
            LogoSize::Large => "logo logo-large",
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUrl {
    Parsed { domain: String, path: String },
    Raw(String),
}

/// Breadcrumb-style form of a result URL. Anything that does not parse as an
/// absolute URL is shown as given.
pub fn format_url(raw: &str) -> DisplayUrl {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => return DisplayUrl::Raw(raw.to_string()),
    };
    // mailto:, file: and friends parse fine but have no host
    let domain = parsed.host_str().unwrap_or_default();

    let mut path = parsed.path().to_string();
    if path.len() > MAX_DISPLAY_PATH {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() > 3 {
            path = format!("/{}/...", parts[..2].join("/"));
        }
    }

    DisplayUrl::Parsed {
        domain: domain.to_string(),
        path,
    }
}

pub fn logo(size: LogoSize, href: Option<&str>) -> String {
    let letters = r#"<span class="rose-500">R</span><span class="rose-400">O</span><span class="rose-300">S</span><span class="rose-200">E</span>"#;
    match href {
        Some(href) => format!(
            r#"<a href="{}" class="{}">{letters}</a>"#,
            escape(href),
            size.class()
        ),
        None => format!(r#"<div class="{}">{letters}</div>"#, size.class()),
    }
}

const SEARCH_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" /></svg>"#;

/// Search form. Submitting performs a plain GET to `/search?q=...`.
pub fn search_bar(initial_query: &str, placeholder: &str, compact: bool) -> String {
    let class = if compact { "search-bar compact" } else { "search-bar" };
    format!(
        r#"<form action="/search" method="get" class="{class}"><input type="text" name="q" value="{}" placeholder="{}" aria-label="Search query" required><button type="submit" aria-label="Search">{SEARCH_ICON}</button></form>"#,
        escape(initial_query),
        escape(placeholder),
    )
}

pub fn search_header(initial_query: &str) -> String {
    format!(
        r#"<header class="search-header">{}{}</header>"#,
        logo(LogoSize::Small, Some("/")),
        search_bar(initial_query, "Refine your search...", true)
    )
}

pub fn footer(year: i32) -> String {
    format!(
        r#"<footer class="site-footer"><div>&copy; {year} ROSE Search</div><nav><a href="/about">About ROSE</a><a href="/about">GitHub</a></nav></footer>"#
    )
}

pub fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{DOCUMENT_TITLE}</title>
<meta name="description" content="{DOCUMENT_DESCRIPTION}">
<link rel="stylesheet" href="/static/rose.css">
</head>
<body>
{body}
</body>
</html>"#
    )
}

pub fn landing_page() -> String {
    let body = format!(
        r#"<main class="landing"><div class="accent-bar"></div><div class="landing-content">{}{}<nav class="landing-links"><a href="/about">About ROSE</a><a href="/privacy">GitHub</a></nav></div></main>"#,
        logo(LogoSize::Large, None),
        search_bar("", "Search the web...", false)
    );
    layout(&body)
}

pub fn empty_query_page() -> String {
    let body = format!(
        r#"{}<div class="empty-query"><p>Please enter a search query</p></div>"#,
        search_header("")
    );
    layout(&body)
}

pub fn result_entry(record: &ResultRecord) -> String {
    let display_url = match format_url(&record.url) {
        DisplayUrl::Parsed { domain, path } => format!(
            r#"<span class="url-domain">{}</span><span class="url-path">{}</span>"#,
            escape(&domain),
            escape(&path)
        ),
        DisplayUrl::Raw(raw) => escape(&raw),
    };
    format!(
        r#"<div class="result" id="{}"><div class="result-url">{display_url}</div><h2 class="result-title"><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h2><p class="result-description">{}</p></div>"#,
        escape(&record.id),
        escape(&record.url),
        escape(&record.title),
        escape(&record.description),
    )
}

pub fn result_list(results: &[ResultRecord]) -> String {
    if results.is_empty() {
        return r#"<div class="no-results"><p>No results found. Try different keywords.</p></div>"#
            .to_string();
    }
    let mut out = String::from(r#"<div class="results">"#);
    for record in results {
        out.push_str(&result_entry(record));
    }
    out.push_str("</div>");
    out
}

const PREV_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" /></svg>"#;
const NEXT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" /></svg>"#;

/// Renders a planned strip. `markers` must come from [`pagination::plan`].
pub fn pagination_strip(
    query: &str,
    current_page: u64,
    total_pages: u64,
    markers: &[PageMarker],
) -> String {
    let mut out = String::from(r#"<nav class="pagination" aria-label="Pagination">"#);

    if current_page > 1 {
        out.push_str(&format!(
            r#"<a href="{}" class="page-prev" aria-label="Previous page">{PREV_ICON}</a>"#,
            escape(&pagination::page_url(query, current_page - 1))
        ));
    }

    for marker in markers {
        match marker {
            PageMarker::Page(n) if *n == current_page => {
                out.push_str(&format!(
                    r#"<a href="{}" class="page current" aria-current="page">{n}</a>"#,
                    escape(&pagination::page_url(query, *n))
                ));
            }
            PageMarker::Page(n) => {
                out.push_str(&format!(
                    r#"<a href="{}" class="page">{n}</a>"#,
                    escape(&pagination::page_url(query, *n))
                ));
            }
            PageMarker::Gap => out.push_str(r#"<span class="gap">&hellip;</span>"#),
        }
    }

    if current_page < total_pages {
        out.push_str(&format!(
            r#"<a href="{}" class="page-next" aria-label="Next page">{NEXT_ICON}</a>"#,
            escape(&pagination::page_url(query, current_page + 1))
        ));
    }

    out.push_str("</nav>");
    out
}

/// Everything the results page shows, already computed.
pub struct ResultsPageView<'a> {
    pub query: &'a str,
    pub response: &'a ResultsResponse,
    pub current_page: u64,
    pub total_pages: u64,
    /// Present only when there is more than one page.
    pub markers: Option<&'a [PageMarker]>,
    pub year: i32,
}

pub fn results_page(view: &ResultsPageView<'_>) -> String {
    let mut body = search_header(view.query);
    body.push_str(r#"<main class="results-main">"#);
    body.push_str(&format!(
        r#"<div class="stats">About {} results ({:.2} seconds)</div>"#,
        group_thousands(view.response.total_results),
        view.response.search_time
    ));
    body.push_str(&result_list(&view.response.results));
    if let Some(markers) = view.markers {
        body.push_str(&pagination_strip(
            view.query,
            view.current_page,
            view.total_pages,
            markers,
        ));
    }
    body.push_str("</main>");
    body.push_str(&footer(view.year));
    layout(&body)
}
