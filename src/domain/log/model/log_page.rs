use serde::{Deserialize, Serialize};

use super::log_record::LogRecord;
use super::pagination_state::PaginationState;
use crate::domain::log::service::pagination_navigator;

/// One server-paginated slice of a file, as returned by the file-read service.
///
/// `page` is one-based. `results.len()` never exceeds `page_size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawLogPage {
    pub page: i64,
    pub page_size: i64,
    pub total: u64,
    pub results: Vec<String>,
}

/// A `RawLogPage` whose lines were normalized and numbered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedPage {
    pub page: i64,
    pub page_size: i64,
    pub total: u64,
    pub results: Vec<LogRecord>,
}

impl NormalizedPage {
    /// Navigation view of the server-reported page (one-based).
    pub fn as_pagination_state(&self) -> PaginationState {
        PaginationState {
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn can_advance(&self) -> bool {
        pagination_navigator::can_advance(&self.as_pagination_state(), self.total)
    }

    pub fn can_retreat(&self) -> bool {
        pagination_navigator::can_retreat(&self.as_pagination_state())
    }

    /// Denominator of the "page X out of N" label.
    pub fn page_count(&self) -> u64 {
        pagination_navigator::total_pages(self.total, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: i64, page_size: i64, total: u64) -> NormalizedPage {
        NormalizedPage {
            page,
            page_size,
            total,
            results: Vec::new(),
        }
    }

    #[test]
    fn navigation_uses_server_page() {
        let first = page(1, 25, 60);
        assert!(first.can_advance());
        assert!(!first.can_retreat());
        assert_eq!(first.page_count(), 3);

        let last = page(3, 25, 60);
        assert!(!last.can_advance());
        assert!(last.can_retreat());
    }
}
