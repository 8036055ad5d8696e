use crate::domain::log::model::{NormalizedPage, RawLogPage};

use super::record_normalizer::normalize;

/// Normalizes every line of `page` and numbers it by its position in the file.
///
/// Line `i` of page `p` with size `n` gets `(p - 1) * n + i + 1`. Page numbers
/// below 1 are not rejected; they just produce numbers below 1.
pub fn assemble(page: &RawLogPage) -> NormalizedPage {
    let offset = (page.page - 1).saturating_mul(page.page_size);

    let results = page
        .results
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let mut record = normalize(raw);
            record.line_number = offset + i as i64 + 1;
            record
        })
        .collect();

    NormalizedPage {
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        results,
    }
}
