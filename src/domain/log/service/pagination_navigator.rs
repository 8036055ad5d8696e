//! Forward/backward navigation over a server-paginated file.
//!
//! The state is a plain value threaded through the caller. Transitions never
//! clamp; the UI gates them with `can_advance` / `can_retreat`.

use crate::domain::log::model::{PaginationState, DEFAULT_PAGE_SIZE};

/// More lines exist beyond `state.page` pages of `state.page_size` lines.
pub fn can_advance(state: &PaginationState, total_lines: u64) -> bool {
    let consumed = state.page.saturating_mul(state.page_size);
    i128::from(total_lines) > i128::from(consumed)
}

/// Page 1 is the first page and cannot go back further.
pub fn can_retreat(state: &PaginationState) -> bool {
    state.page > 1
}

pub fn advance(state: PaginationState) -> PaginationState {
    PaginationState {
        page: state.page + 1,
        ..state
    }
}

pub fn retreat(state: PaginationState) -> PaginationState {
    PaginationState {
        page: state.page - 1,
        ..state
    }
}

/// Back to the first page with the default size whenever the selected file changes.
pub fn reset_on_file_change<T: PartialEq + ?Sized>(
    previous_file: &T,
    current_file: &T,
    state: PaginationState,
) -> PaginationState {
    if previous_file != current_file {
        PaginationState {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    } else {
        state
    }
}

/// Number of pages needed for `total_lines`, for the "page X out of N" label.
pub fn total_pages(total_lines: u64, page_size: i64) -> u64 {
    if page_size <= 0 {
        return 0;
    }
    total_lines.div_ceil(page_size as u64)
}
