//! Selection and paging helpers for the history table
//!
//! Pure functions that compute new row/page state without side effects.

/// Move selection down by one, clamped to `last_row`.
pub fn select_next(selected: usize, last_row: usize) -> usize {
    selected.saturating_add(1).min(last_row)
}

/// Move selection up by one.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Scroll offset that keeps `selected` inside a window of `visible_rows`.
///
/// A zero-height window leaves `offset` unchanged.
pub fn keep_visible(selected: usize, offset: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return offset;
    }
    if selected < offset {
        selected
    } else if selected >= offset + visible_rows {
        selected + 1 - visible_rows
    } else {
        offset
    }
}

/// Page to move to by `delta`, or None when it falls outside `1..=total_pages`.
pub fn step_page(current: u32, delta: i64, total_pages: u32) -> Option<u32> {
    let target = i64::from(current) + delta;
    if target < 1 || target > i64::from(total_pages) {
        return None;
    }
    u32::try_from(target).ok()
}
