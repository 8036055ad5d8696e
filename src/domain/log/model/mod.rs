pub mod file_entry;
pub mod log_page;
pub mod log_record;
pub mod pagination_state;

pub use file_entry::FileEntry;
pub use log_page::{NormalizedPage, RawLogPage};
pub use log_record::{LogLevel, LogRecord};
pub use pagination_state::{PaginationState, DEFAULT_PAGE_SIZE};
