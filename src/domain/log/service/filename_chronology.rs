use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::trace;

use crate::domain::log::model::FileEntry;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Greedy prefix so the capture is the token starting furthest right.
fn last_date_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^.*([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("date token pattern is valid")
    })
}

/// `prefix_YYYY-MM-DD.ext`
fn dated_filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^.*_[0-9]{4}-[0-9]{2}-[0-9]{2}\..+$").expect("dated filename pattern is valid")
    })
}

/// Date carried by a date-bearing filename.
///
/// The name must have the full `prefix_YYYY-MM-DD.ext` shape; the date is the
/// `YYYY-MM-DD` token starting furthest right and must be a real calendar day.
pub fn extract_date(filename: &str) -> Option<NaiveDate> {
    if !dated_filename_pattern().is_match(filename) {
        return None;
    }

    let token = last_date_token_pattern().captures(filename)?.get(1)?;
    NaiveDate::parse_from_str(token.as_str(), DATE_FORMAT).ok()
}

pub fn classify(filename: &str) -> FileEntry {
    FileEntry {
        filename: filename.to_string(),
        extracted_date: extract_date(filename),
    }
}

/// Orders log filenames for display.
///
/// When every name is date-bearing the newest date comes first (ties keep
/// their input order). Otherwise the whole list is sorted lexically ascending.
pub fn sort_filenames<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let entries: Vec<FileEntry> = names.iter().map(|n| classify(n.as_ref())).collect();

    let dated: Option<Vec<(NaiveDate, String)>> = entries
        .iter()
        .map(|e| e.extracted_date.map(|d| (d, e.filename.clone())))
        .collect();

    match dated {
        Some(mut dated) => {
            dated.sort_by(|a, b| b.0.cmp(&a.0));
            dated.into_iter().map(|(_, name)| name).collect()
        }
        None => {
            trace!(count = entries.len(), "not every filename carries a date, sorting lexically");
            let mut names: Vec<String> = entries.into_iter().map(|e| e.filename).collect();
            names.sort();
            names
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_date_first() {
        let sorted = sort_filenames(&["app_2024-01-05.log", "app_2024-03-11.log"]);
        assert_eq!(sorted, vec!["app_2024-03-11.log", "app_2024-01-05.log"]);
    }

    #[test]
    fn dates_beat_prefixes() {
        let sorted = sort_filenames(&[
            "zeta_2023-12-31.log",
            "alpha_2024-02-01.log",
            "mid_2024-01-15.txt",
        ]);
        assert_eq!(
            sorted,
            vec!["alpha_2024-02-01.log", "mid_2024-01-15.txt", "zeta_2023-12-31.log"]
        );
    }

    #[test]
    fn one_undated_name_forces_lexical_order() {
        let sorted = sort_filenames(&["readme.txt", "app_2024-01-05.log"]);
        assert_eq!(sorted, vec!["app_2024-01-05.log", "readme.txt"]);

        let sorted = sort_filenames(&["app_2024-03-11.log", "app_2024-01-05.log", "notes"]);
        assert_eq!(sorted, vec!["app_2024-01-05.log", "app_2024-03-11.log", "notes"]);
    }

    #[test]
    fn rollover_suffix_is_not_date_bearing() {
        assert_eq!(extract_date("app_2024-03-11_1.log"), None);
        let sorted = sort_filenames(&["app_2024-03-11_1.log", "app_2024-03-12.log"]);
        assert_eq!(sorted, vec!["app_2024-03-11_1.log", "app_2024-03-12.log"]);
    }

    #[test]
    fn extract_uses_last_token() {
        assert_eq!(
            extract_date("backup-2020-01-01_2024-03-11.log"),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }

    #[test]
    fn extract_prefers_rightmost_token_over_overlapping_ones() {
        assert_eq!(
            extract_date("a_2024-01-02.2024-01-2024-02-03"),
            NaiveDate::from_ymd_opt(2024, 2, 3)
        );
    }

    #[test]
    fn shape_requires_underscore_and_extension() {
        assert_eq!(extract_date("app-2024-03-11.log"), None);
        assert_eq!(extract_date("app_2024-03-11"), None);
        assert_eq!(extract_date("app_2024-03-11."), None);
        assert!(extract_date("_2024-03-11.log").is_some());
    }

    #[test]
    fn impossible_calendar_date_is_undated() {
        assert_eq!(extract_date("app_2024-13-40.log"), None);
        let entry = classify("app_2024-02-30.log");
        assert_eq!(entry.extracted_date, None);
        assert_eq!(entry.filename, "app_2024-02-30.log");
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let input = ["b_2024-01-01.log", "a_2024-01-01.log", "c_2024-01-02.log"];
        let sorted = sort_filenames(&input);
        assert_eq!(sorted, vec!["c_2024-01-02.log", "b_2024-01-01.log", "a_2024-01-01.log"]);
        assert_eq!(sort_filenames(&input), sorted);
    }

    #[test]
    fn empty_input() {
        let names: Vec<String> = Vec::new();
        assert!(sort_filenames(&names).is_empty());
    }
}
