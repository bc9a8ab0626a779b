use serde::Serialize;

use crate::domain::types::TypeConstraintError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// One-based page plus page size, both at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    limit: usize,
}

impl PageWindow {
    pub fn new(page: usize, limit: usize) -> Result<Self, TypeConstraintError> {
        if page < 1 {
            return Err(TypeConstraintError::InvalidValue(
                "page must be at least 1".to_string(),
            ));
        }
        if limit < 1 {
            return Err(TypeConstraintError::InvalidValue(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Number of matching rows before this page.
    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Offset in the form the query builder expects.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip()).unwrap_or(i64::MAX)
    }

    pub fn take(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Pagination block of every list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    /// `ceil(total / limit)`; zero when nothing matched.
    pub total_pages: usize,
}

impl PaginationMeta {
    pub fn new(total: usize, window: PageWindow) -> Self {
        Self {
            total,
            page: window.page(),
            limit: window.limit(),
            total_pages: total.div_ceil(window.limit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_zero_page_and_limit() {
        assert!(PageWindow::new(0, 10).is_err());
        assert!(PageWindow::new(1, 0).is_err());
        assert!(PageWindow::new(1, 1).is_ok());
    }

    #[test]
    fn window_computes_skip_and_take() {
        let window = PageWindow::new(3, 10).unwrap();
        assert_eq!(window.skip(), 20);
        assert_eq!(window.offset(), 20);
        assert_eq!(window.take(), 10);

        let first = PageWindow::default();
        assert_eq!(first.skip(), 0);
        assert_eq!(first.take(), 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        let window = PageWindow::new(2, 10).unwrap();
        assert_eq!(PaginationMeta::new(15, window).total_pages, 2);
        assert_eq!(PaginationMeta::new(20, window).total_pages, 2);
        assert_eq!(PaginationMeta::new(21, window).total_pages, 3);
        assert_eq!(PaginationMeta::new(1, window).total_pages, 1);
    }

    #[test]
    fn total_pages_is_zero_when_nothing_matched() {
        let meta = PaginationMeta::new(0, PageWindow::default());
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.page, 1);
    }

    #[test]
    fn meta_serializes_in_camel_case() {
        let meta = PaginationMeta::new(15, PageWindow::new(2, 10).unwrap());
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 15, "page": 2, "limit": 10, "totalPages": 2})
        );
    }
}
