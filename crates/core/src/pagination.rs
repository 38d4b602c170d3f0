//! Page slicing for aggregated listings
//!
//! Pure functions that cut an already sorted listing into fixed-size pages.
//! Pages are 1-indexed; a page past the end is empty rather than an error.

use serde::Serialize;

use crate::error::ValidationError;

/// Items per page on paginated listings
pub const DEFAULT_LIMIT: usize = 10;

/// One page of an aggregated listing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaginatedOutput<T> {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub results: Vec<T>,
}

/// Parse the public `page` query value
///
/// Absent means the first page. Anything other than a positive decimal
/// integer is rejected.
pub fn parse_page(raw: Option<&str>) -> Result<usize, ValidationError> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPage(raw.to_string()));
    }

    match raw.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ValidationError::InvalidPage(raw.to_string())),
    }
}

/// Calculate the `[start, end)` bounds of `page`, clamped to `total_items`
pub fn page_bounds(total_items: usize, page: usize, limit: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(limit).min(total_items);
    let end = page.saturating_mul(limit).min(total_items);
    (start, end)
}

/// Total number of pages needed for `total_items`
pub fn total_pages(total_items: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Slice `items` down to `page`
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> PaginatedOutput<T> {
    let total = items.len();
    let (start, end) = page_bounds(total, page, limit);

    let results = items.into_iter().skip(start).take(end - start).collect();

    PaginatedOutput {
        page,
        limit,
        total,
        results,
    }
}
