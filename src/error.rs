use std::fmt::{Display, Formatter};

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Rejections produced by [`crate::table::TabularDataView`].
///
/// A rejected call never changes the view's state, so callers are free to
/// log the error and move on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// No column with this id exists in the view.
    UnknownColumn(String),
    /// The column exists but cannot be sorted.
    NotSortable(String),
    /// The column exists but cannot be filtered.
    NotFilterable(String),
    /// Two column definitions share the same id.
    DuplicateColumn(String),
}

impl ViewError {
    /// The column id the error refers to.
    pub fn column(&self) -> &str {
        match self {
            ViewError::UnknownColumn(id)
            | ViewError::NotSortable(id)
            | ViewError::NotFilterable(id)
            | ViewError::DuplicateColumn(id) => id,
        }
    }
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::UnknownColumn(id) => write!(f, "unknown column '{id}'"),
            ViewError::NotSortable(id) => write!(f, "column '{id}' is not sortable"),
            ViewError::NotFilterable(id) => write!(f, "column '{id}' is not filterable"),
            ViewError::DuplicateColumn(id) => write!(f, "duplicate column id '{id}'"),
        }
    }
}

impl std::error::Error for ViewError {}

