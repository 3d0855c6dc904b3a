//! Sortable, filterable, paginated view over an immutable row set.
//!
//! [`TabularDataView`] owns its sort/filter/pagination state and derives the
//! visible page on every read: filter → sort → slice. Nothing is cached, so
//! any number of views can share one `Arc<[T]>` without interfering.

pub mod column;
pub mod state;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, ViewError};

pub use column::{CellValue, ColumnDef};
pub use state::{FilterState, PaginationState, SortDirection, SortKey, SortState};

/// Filter → sort → paginate view over a shared row set.
pub struct TabularDataView<T> {
    rows: Arc<[T]>,
    columns: Vec<ColumnDef<T>>,
    sorting: SortState,
    filters: FilterState,
    pagination: PaginationState,
}

impl<T> TabularDataView<T> {
    /// Build a view over `rows`. Fails only when two columns share an id.
    ///
    /// # Arguments
    /// - `rows`: the full row set; shared, never copied or mutated
    /// - `columns`: column definitions in display order
    /// - `page_size`: rows per page, raised to 1 when zero
    pub fn new(
        rows: impl Into<Arc<[T]>>,
        columns: Vec<ColumnDef<T>>,
        page_size: usize,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.id()) {
                return Err(ViewError::DuplicateColumn(col.id().to_string()));
            }
        }
        Ok(Self {
            rows: rows.into(),
            columns,
            sorting: SortState::new(),
            filters: FilterState::new(),
            pagination: PaginationState::new(page_size),
        })
    }

    /// Column definitions in display order.
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// Column with the given id, if any.
    pub fn column(&self, id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// The full, unfiltered row set.
    pub fn rows(&self) -> &Arc<[T]> {
        &self.rows
    }

    /// Replace the row set wholesale. Sort and filter state are kept; the page
    /// index is pulled back if the new set is shorter.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[T]>>) {
        self.rows = rows.into();
        let filtered = self.filtered_row_count();
        self.pagination.page_index = self.pagination.clamped_index(filtered);
    }

    /// Back to mount defaults: no sort, no filters, first page.
    pub fn reset(&mut self) {
        self.sorting.clear();
        self.filters.clear();
        self.pagination.page_index = 0;
    }

    // ---- filtering ----

    /// Active filters; columns without a filter are absent.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Filter text on `column`, if one is set.
    pub fn filter_value(&self, column: &str) -> Option<&str> {
        self.filters.get(column).map(String::as_str)
    }

    /// Set or clear (empty `value`) the filter on `column` and go back to the
    /// first page. Matching is case-sensitive substring containment.
    ///
    /// # Arguments
    /// - `column`: id of a filterable column
    /// - `value`: text to look for; empty removes the filter
    pub fn set_filter(&mut self, column: &str, value: &str) -> Result<()> {
        let col = self
            .column(column)
            .ok_or_else(|| ViewError::UnknownColumn(column.to_string()))?;
        if !col.is_filterable() {
            return Err(ViewError::NotFilterable(column.to_string()));
        }
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value.to_string());
        }
        self.pagination.page_index = 0;
        debug!(column, value, "filter updated");
        Ok(())
    }

    // ---- sorting ----

    /// Sort keys in priority order; empty means insertion order.
    pub fn sorting(&self) -> &SortState {
        &self.sorting
    }

    /// Direction `column` is currently sorted in, if it takes part in the sort.
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting.iter().find(|k| k.column == column).map(|k| k.direction)
    }

    /// Cycle `column` through unsorted → ascending → descending → unsorted.
    /// A column other than the leading one starts a fresh ascending sort.
    pub fn toggle_sort(&mut self, column: &str) -> Result<()> {
        self.check_sortable(column)?;
        let next = match self.sorting.first() {
            Some(key) if key.column == column => match key.direction {
                SortDirection::Ascending => vec![SortKey::descending(column)],
                SortDirection::Descending => Vec::new(),
            },
            _ => vec![SortKey::ascending(column)],
        };
        debug!(column, ?next, "sort toggled");
        self.sorting = next;
        self.pagination.page_index = 0;
        Ok(())
    }

    /// Replace the whole sort sequence. Every key must name a sortable column;
    /// on the first bad key nothing is changed.
    pub fn set_sorting(&mut self, keys: SortState) -> Result<()> {
        for key in &keys {
            self.check_sortable(&key.column)?;
        }
        self.sorting = keys;
        self.pagination.page_index = 0;
        Ok(())
    }

    fn check_sortable(&self, column: &str) -> Result<()> {
        match self.column(column) {
            None => Err(ViewError::UnknownColumn(column.to_string())),
            Some(c) if !c.is_sortable() => Err(ViewError::NotSortable(column.to_string())),
            Some(_) => Ok(()),
        }
    }

    // ---- pagination ----

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    /// Current page, clamped against the filtered row count.
    pub fn page_index(&self) -> usize {
        self.pagination.clamped_index(self.filtered_row_count())
    }

    /// Pages needed for the filtered rows; 0 when nothing matches.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_row_count())
    }

    /// Pagination state with the page index already clamped.
    pub fn pagination(&self) -> PaginationState {
        PaginationState { page_index: self.page_index(), ..self.pagination }
    }

    /// Jump to `index`; out-of-range requests land on the last page.
    pub fn set_page_index(&mut self, index: usize) {
        let filtered = self.filtered_row_count();
        self.pagination.page_index = index.min(self.pagination.last_page(filtered));
    }

    /// Change the page size, keeping the first row of the current page on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        let top = self.page_index() * self.pagination.page_size;
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = top / self.pagination.page_size;
    }

    /// Whether a page exists before the current one.
    pub fn can_go_previous(&self) -> bool {
        self.page_index() > 0
    }

    /// Whether a page exists after the current one.
    pub fn can_go_next(&self) -> bool {
        self.page_index() + 1 < self.page_count()
    }

    /// Advance one page; does nothing on the last page.
    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.pagination.page_index = self.page_index() + 1;
        }
    }

    /// Go back one page; does nothing on the first page.
    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.pagination.page_index = self.page_index() - 1;
        }
    }

    // ---- derived rows ----

    /// Size of the full row set, ignoring filters.
    pub fn total_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows passing every active filter.
    pub fn filtered_row_count(&self) -> usize {
        self.rows.iter().filter(|r| self.matches_filters(r)).count()
    }

    /// Rows passing every filter, in sort order.
    pub fn sorted_rows(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self.rows.iter().filter(|r| self.matches_filters(r)).collect();
        if !self.sorting.is_empty() {
            let keys: Vec<(&ColumnDef<T>, SortDirection)> = self
                .sorting
                .iter()
                .filter_map(|k| self.column(&k.column).map(|c| (c, k.direction)))
                .collect();
            // sort_by is stable: equal keys keep their filtered order
            rows.sort_by(|a, b| compare_rows(&keys, a, b));
        }
        rows
    }

    /// The current page of filtered, sorted rows.
    pub fn visible_rows(&self) -> Vec<&T> {
        let rows = self.sorted_rows();
        let page = self.pagination.clamped_index(rows.len());
        let start = page * self.pagination.page_size;
        rows.into_iter().skip(start).take(self.pagination.page_size).collect()
    }

    fn matches_filters(&self, row: &T) -> bool {
        self.filters.iter().all(|(id, needle)| {
            self.column(id)
                .is_some_and(|c| c.value(row).to_string().contains(needle.as_str()))
        })
    }
}

fn compare_rows<T>(keys: &[(&ColumnDef<T>, SortDirection)], a: &T, b: &T) -> Ordering {
    for (col, dir) in keys {
        let ord = col.value(a).cmp(&col.value(b));
        let ord = match dir {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

impl<T> Clone for TabularDataView<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            columns: self.columns.clone(),
            sorting: self.sorting.clone(),
            filters: self.filters.clone(),
            pagination: self.pagination,
        }
    }
}
