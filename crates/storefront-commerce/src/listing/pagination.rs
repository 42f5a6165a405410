//! Page-number and cursor pagination.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Products per page on the shop grid.
pub const SHOP_PAGE_SIZE: i64 = 12;

/// Pagination info for page-number listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages (at least 1).
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if total == 0 || per_page <= 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Number of items to skip in the platform query.
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0) * self.per_page
    }

    /// Error when the requested page lies past the last page.
    ///
    /// The storefront renders this as a not-found page.
    pub fn ensure_in_range(&self) -> Result<(), CommerceError> {
        if self.page < 1 || self.page > self.total_pages {
            return Err(CommerceError::PageOutOfRange {
                page: self.page,
                total_pages: self.total_pages,
            });
        }
        Ok(())
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, SHOP_PAGE_SIZE, 0)
    }
}

/// Request for one cursor page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorRequest {
    pub limit: Option<u32>,
    /// `None` for the first page.
    pub cursor: Option<String>,
}

impl CursorRequest {
    pub fn first(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
        }
    }

    /// Request for the page after `page`, or `None` at the end.
    pub fn after<T>(page: &CursorPage<T>, limit: u32) -> Option<Self> {
        page.next_cursor.clone().map(|cursor| Self {
            limit: Some(limit),
            cursor: Some(cursor),
        })
    }
}

/// One page of a cursor-paged platform query (reviews, orders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Keep only matching items; the cursor still points past the whole page.
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.items.retain(keep);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
