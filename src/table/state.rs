//! Sort, filter and pagination state owned by a view.

use std::collections::BTreeMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// One `(column, direction)` entry of the sort sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self { column: column.into(), direction }
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

/// Ordered sort sequence; empty means insertion order.
pub type SortState = Vec<SortKey>;

/// Active filters keyed by column id. Only non-empty values are stored.
pub type FilterState = BTreeMap<String, String>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    pub fn new(page_size: usize) -> Self {
        Self { page_index: 0, page_size: page_size.max(1) }
    }

    /// Number of pages needed for `rows` rows (0 when there are none).
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.page_size)
    }

    /// Highest valid page index for `rows` rows.
    pub fn last_page(&self, rows: usize) -> usize {
        self.page_count(rows).saturating_sub(1)
    }

    /// `page_index` constrained to `[0, last_page]`.
    pub fn clamped_index(&self, rows: usize) -> usize {
        self.page_index.min(self.last_page(rows))
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
