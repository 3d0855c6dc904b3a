//! Author records shown on the admin Authors page.
//!
//! The data set is a fixed in-memory list; there is no backing store.

use chrono::NaiveDate;

use crate::error::Result;
use crate::table::{CellValue, ColumnDef, TabularDataView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar_url: String,
    pub join_date: NaiveDate,
}

impl Author {
    /// Two-letter avatar fallback: the first two characters of the username, upper-cased.
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar_url.is_empty()
    }
}

fn author(id: &str, username: &str, email: &str, avatar_url: &str, joined: (i32, u32, u32)) -> Author {
    let (y, m, d) = joined;
    Author {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        avatar_url: avatar_url.to_string(),
        join_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

/// The four sample authors, in display order.
pub fn sample_authors() -> Vec<Author> {
    vec![
        author("1", "marcell_dev", "marcell@example.com", "https://github.com/shadcn.png", (2025, 11, 20)),
        author(
            "2",
            "alex_coder",
            "alex@example.com",
            "https://i.pravatar.cc/150?u=a042581f4e29026024d",
            (2025, 12, 5),
        ),
        author(
            "3",
            "sarah_writes",
            "sarah@example.com",
            "https://i.pravatar.cc/150?u=a04258114e29026702d",
            (2026, 1, 15),
        ),
        author("4", "johndoe", "john@example.com", "", (2026, 2, 10)),
    ]
}

/// Join dates render as day, short month, year: `20 Nov 2025`.
pub fn format_join_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Column set of the authors table. Only `username` is sortable, matching the
/// header button of the web page; `username` and `email` accept filters.
pub fn author_columns() -> Vec<ColumnDef<Author>> {
    vec![
        ColumnDef::display("profile", "Profile", |a: &Author| {
            if a.has_avatar() { format!("[{}]", a.initials()) } else { format!("({})", a.initials()) }
        }),
        ColumnDef::accessor("username", "Username", |a: &Author| a.username.as_str().into())
            .sortable()
            .filterable(),
        ColumnDef::accessor("email", "Email", |a: &Author| a.email.as_str().into()).filterable(),
        ColumnDef::accessor("join_date", "Joined", |a: &Author| CellValue::Date(a.join_date))
            .cell(|a: &Author| format_join_date(a.join_date)),
        ColumnDef::display("actions", "", |_: &Author| "…".to_string()),
    ]
}

/// A fresh view over the sample authors.
pub fn authors_view(page_size: usize) -> Result<TabularDataView<Author>> {
    TabularDataView::new(sample_authors(), author_columns(), page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_fall_back_to_username() {
        let authors = sample_authors();
        assert_eq!(authors[0].initials(), "MA");
        assert_eq!(authors[3].initials(), "JO");
        assert!(!authors[3].has_avatar());
    }

    #[test]
    fn join_dates_are_formatted_short() {
        let authors = sample_authors();
        assert_eq!(format_join_date(authors[0].join_date), "20 Nov 2025");
        assert_eq!(format_join_date(authors[1].join_date), "5 Dec 2025");
    }

    #[test]
    fn columns_render_cells() {
        let cols = author_columns();
        let authors = sample_authors();
        let johndoe = &authors[3];
        let rendered: Vec<String> = cols.iter().map(|c| c.render(johndoe)).collect();
        assert_eq!(rendered, ["(JO)", "johndoe", "john@example.com", "10 Feb 2026", "…"]);
        assert_eq!(cols[3].value(johndoe).to_string(), "2026-02-10");
    }

    #[test]
    fn authors_view_starts_unsorted_on_first_page() {
        let view = authors_view(10).unwrap();
        assert_eq!(view.total_row_count(), 4);
        assert_eq!(view.page_index(), 0);
        assert!(view.sorting().is_empty());
    }
}
