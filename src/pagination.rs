// src/pagination.rs

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for paginated endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// 1-indexed page number. Kept as raw text so that a malformed value
    /// falls back to the first page instead of rejecting the request.
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
    }
}

/// Extracts the requested page from the query string, never rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub usize);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Page(params.page()))
    }
}

/// Returns the items at offsets `[(page-1)*10, page*10)`.
///
/// Pages outside the sequence (including page 0) are empty; callers decide
/// whether that is an error.
pub fn paginate<T>(page: usize, items: Vec<T>) -> Vec<T> {
    let Some(index) = page.checked_sub(1) else {
        return Vec::new();
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("-2")).page(), 1);
        assert_eq!(params(Some("3")).page(), 3);
        assert_eq!(params(Some("0")).page(), 0);
    }

    #[test]
    fn pages_partition_the_sequence() {
        let items: Vec<u32> = (0..23).collect();

        assert_eq!(paginate(1, items.clone()), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(2, items.clone()), (10..20).collect::<Vec<_>>());
        assert_eq!(paginate(3, items.clone()), vec![20, 21, 22]);

        let total: usize = (1..=3).map(|p| paginate(p, items.clone()).len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..5).collect();

        assert!(paginate(0, items.clone()).is_empty());
        assert!(paginate(2, items.clone()).is_empty());
        assert!(paginate(usize::MAX, items).is_empty());
        assert!(paginate::<u32>(1, Vec::new()).is_empty());
    }
}
