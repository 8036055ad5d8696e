pub mod filename_chronology;
pub mod page_assembler;
pub mod pagination_navigator;
pub mod record_normalizer;

pub use filename_chronology::sort_filenames;
pub use page_assembler::assemble;
pub use record_normalizer::{normalize, normalize_value};
