use serde::{Deserialize, Serialize};

/// Default page size used by list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Envelope returned by paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination_info: PaginationInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_first: bool,
    pub is_last: bool,
}

impl PaginationInfo {
    /// One-line position summary, e.g. "page 1 of 3 (250 items)"
    pub fn describe(&self) -> String {
        format!(
            "page {} of {} ({} items)",
            self.current_page + 1,
            self.total_pages.max(1),
            self.total_items
        )
    }
}

/// Zero-based page selection sent as `page` and `size` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<T> Page<T> {
    pub fn total_items(&self) -> u64 {
        self.pagination_info.total_items
    }

    pub fn has_next(&self) -> bool {
        self.pagination_info.has_next
    }
}
