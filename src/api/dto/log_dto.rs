//! Log API DTOs
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::log::model::{NormalizedPage, DEFAULT_PAGE_SIZE};

/// `?page=&page_size=`; `page` is one-based.
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct LogPageQuery {
    #[validate(range(min = 1))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 1000))]
    pub page_size: Option<i64>,
}

impl LogPageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Serialize, Debug)]
pub struct LogListResponse {
    pub ok: bool,
    pub timestamp: String,
    pub log_files: Vec<String>,
}

impl LogListResponse {
    pub fn new(log_files: Vec<String>) -> Self {
        Self {
            ok: true,
            timestamp: Utc::now().to_rfc3339(),
            log_files,
        }
    }
}

/// Normalized page plus the navigation affordances derived from it.
#[derive(Serialize, Debug)]
pub struct LogRecordPageResponse {
    #[serde(flatten)]
    pub page: NormalizedPage,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub page_count: u64,
}

impl From<NormalizedPage> for LogRecordPageResponse {
    fn from(page: NormalizedPage) -> Self {
        Self {
            can_advance: page.can_advance(),
            can_retreat: page.can_retreat(),
            page_count: page.page_count(),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_and_validation() {
        let q = LogPageQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);
        assert!(q.validate().is_ok());

        let q = LogPageQuery { page: Some(0), page_size: Some(10) };
        assert!(q.validate().is_err());

        let q = LogPageQuery { page: Some(2), page_size: Some(5000) };
        assert!(q.validate().is_err());
    }

    #[test]
    fn record_page_flags_follow_server_page() {
        let page = NormalizedPage { page: 3, page_size: 25, total: 100, results: vec![] };
        let resp = LogRecordPageResponse::from(page);
        assert!(resp.can_advance);
        assert!(resp.can_retreat);
        assert_eq!(resp.page_count, 4);

        let page = NormalizedPage { page: 4, page_size: 25, total: 100, results: vec![] };
        let resp = LogRecordPageResponse::from(page);
        assert!(!resp.can_advance);

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["page"], 4);
        assert_eq!(value["page_size"], 25);
        assert_eq!(value["total"], 100);
        assert!(value["results"].is_array());
    }
}
