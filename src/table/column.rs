//! Column definitions and cell values.
//!
//! A [`ColumnDef`] binds a column id to an accessor (row → [`CellValue`]) and
//! an optional cell renderer. Columns without an accessor are display-only.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use chrono::NaiveDate;

/// Value extracted from a row for one column.
///
/// The display form is what filters match against; the ordering is what
/// sorting uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Int(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}

pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Describes how to extract, sort, filter and render one column.
pub struct ColumnDef<T> {
    id: String,
    header: String,
    accessor: Option<Accessor<T>>,
    cell: Option<CellRenderer<T>>,
    sortable: bool,
    filterable: bool,
}

impl<T> ColumnDef<T> {
    /// A data column backed by `accessor`. Neither sortable nor filterable
    /// until enabled with the builder methods.
    pub fn accessor<F>(id: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Some(Arc::new(accessor)),
            cell: None,
            sortable: false,
            filterable: false,
        }
    }

    /// A display-only column (row actions, decorations) with no underlying value.
    pub fn display<F>(id: impl Into<String>, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            cell: Some(Arc::new(cell)),
            sortable: false,
            filterable: false,
        }
    }

    /// Enable sorting. Ignored for display-only columns.
    pub fn sortable(mut self) -> Self {
        self.sortable = self.accessor.is_some();
        self
    }

    /// Enable substring filtering. Ignored for display-only columns.
    pub fn filterable(mut self) -> Self {
        self.filterable = self.accessor.is_some();
        self
    }

    /// Override how the cell is rendered; the accessor value still drives
    /// sorting and filtering.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Value of this column for `row`; [`CellValue::Empty`] for display columns.
    pub fn value(&self, row: &T) -> CellValue {
        self.accessor.as_ref().map_or(CellValue::Empty, |f| f(row))
    }

    /// Text shown in the cell for `row`.
    pub fn render(&self, row: &T) -> String {
        match &self.cell {
            Some(render) => render(row),
            None => self.value(row).to_string(),
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
        }
    }
}

impl<T> Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_columns_refuse_sort_and_filter_flags() {
        let col: ColumnDef<u32> = ColumnDef::display("actions", "", |_| "…".into())
            .sortable()
            .filterable();
        assert!(!col.is_sortable());
        assert!(!col.is_filterable());
        assert_eq!(col.value(&7), CellValue::Empty);
        assert_eq!(col.render(&7), "…");
    }

    #[test]
    fn render_defaults_to_value_display() {
        let col: ColumnDef<i64> = ColumnDef::accessor("n", "N", |n| CellValue::Int(*n));
        assert_eq!(col.render(&42), "42");
        let col = col.cell(|n| format!("#{n}"));
        assert_eq!(col.render(&42), "#42");
        assert_eq!(col.value(&42), CellValue::Int(42));
    }

    #[test]
    fn values_order_within_and_across_variants() {
        let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert!(CellValue::Int(2) < CellValue::Int(10));
        assert!(CellValue::from("alex") < CellValue::from("marcell"));
        assert!(CellValue::Date(d("2025-12-05")) < CellValue::Date(d("2026-01-15")));
        assert!(CellValue::Empty < CellValue::Int(i64::MIN));
        assert_eq!(CellValue::Date(d("2025-11-20")).to_string(), "2025-11-20");
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
    }
}
