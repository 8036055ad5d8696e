use chrono::NaiveDate;

/// A listed log filename paired with the date token found in it, if any.
///
/// Derived on every sort; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub filename: String,
    pub extracted_date: Option<NaiveDate>,
}
