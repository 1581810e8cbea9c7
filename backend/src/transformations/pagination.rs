//! Page slicing for table and grid views.

use serde::{Deserialize, Serialize};

/// Rows per page in the table view.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Cards revealed per "load more" step in the grid view.
pub const DEFAULT_GRID_BATCH: usize = 24;

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served (after clamping).
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `total_items` at `per_page` rows each.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// Slice out page `page` (1-based).
///
/// Out-of-range page numbers are clamped to the first or last page, so a
/// request past the end serves the last page instead of an empty one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let items = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
