//! Paging arithmetic for the history table

/// Default number of entries per page
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Half-open offset range `[from, to)` into an article's log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub from: u64,
    pub to: u64,
}

impl PageRange {
    /// Range covered by a 1-based page number (page 0 is treated as page 1)
    pub fn for_page(page: u32, per_page: u32) -> Self {
        let page = u64::from(page.max(1));
        let per_page = u64::from(per_page);
        Self {
            from: (page - 1) * per_page,
            to: page * per_page,
        }
    }

    /// Number of entries the range can hold
    pub fn len(&self) -> u64 {
        self.to - self.from
    }

    /// Whether the range is empty
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Number of pages needed for `total` entries (at least one)
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(per_page)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
