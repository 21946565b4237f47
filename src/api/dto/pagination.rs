//! Pagination query parameters and page metadata.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr};

/// Page number used when the query does not name one.
const DEFAULT_PAGE: i64 = 1;

/// Page size used when the query does not name one.
const DEFAULT_PER_PAGE: i64 = 5;

/// Pagination query parameters.
///
/// Parsing is deliberately forgiving: absent, zero, or unparseable values
/// all fall back to the defaults instead of failing the request.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DefaultOnError<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DefaultOnError<DisplayFromStr>>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Resolves the raw parameters to a usable `(page, per_page)` pair.
    ///
    /// Unparseable values surface from Serde as `Some(0)`, so zero is
    /// treated the same as absent.
    pub fn resolve(&self) -> (i64, i64) {
        let page = match self.page {
            Some(p) if p > 0 => i64::from(p),
            _ => DEFAULT_PAGE,
        };

        let per_page = match self.per_page {
            Some(p) if p > 0 => i64::from(p),
            _ => DEFAULT_PER_PAGE,
        };

        (page, per_page)
    }
}

/// Pagination metadata attached to list responses.
///
/// `prev_page` and `next_page` serialize as `null` when there is no such
/// page.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub pages: i64,
    pub total_count: i64,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    /// Computes metadata for a page of `total_count` items.
    ///
    /// An empty collection has zero pages; a page past the end keeps its
    /// requested number and simply has no next page.
    pub fn build(page: i64, per_page: i64, total_count: i64) -> Self {
        let pages = if total_count == 0 {
            0
        } else {
            (total_count + per_page - 1) / per_page
        };

        let has_prev = page > 1;
        let has_next = page < pages;

        Self {
            page,
            pages,
            total_count,
            prev_page: has_prev.then_some(page - 1),
            next_page: has_next.then_some(page + 1),
            has_next,
            has_prev,
        }
    }
}
