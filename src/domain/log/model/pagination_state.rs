use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Pagination cursor owned by the caller for the currently selected file.
///
/// `page` is zero-based; the file-read service is asked for `page + 1`.
/// The navigator never clamps, so `page` is signed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// One-based page number sent to the file-read service.
    pub fn request_page(&self) -> i64 {
        self.page + 1
    }
}
