use std::num::NonZeroUsize;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub page_count: usize,
}

/// Slices one page out of `items`. A page past the end is empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> (&[T], PageInfo) {
    let size = page_size.get();
    let total_rows = items.len();
    let start = page.saturating_mul(size).min(total_rows);
    let end = start.saturating_add(size).min(total_rows);
    let info = PageInfo {
        page,
        page_size: size,
        total_rows,
        page_count: total_rows.div_ceil(size),
    };
    (&items[start..end], info)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/page.rs"]
mod tests;
