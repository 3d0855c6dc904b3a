// Unit tests for library-admin
// These tests exercise the table model and its helpers through the public API

#[cfg(test)]
mod table_tests {
    use library_admin::ViewError;
    use library_admin::catalog::{Author, authors_view};
    use library_admin::table::{ColumnDef, SortDirection, SortKey, TabularDataView};

    fn usernames(rows: &[&Author]) -> Vec<String> {
        rows.iter().map(|a| a.username.clone()).collect()
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Book {
        title: &'static str,
        year: i64,
    }

    fn books() -> Vec<Book> {
        vec![
            Book { title: "Dune", year: 1965 },
            Book { title: "Neuromancer", year: 1984 },
            Book { title: "Solaris", year: 1961 },
            Book { title: "Hyperion", year: 1989 },
            Book { title: "Foundation", year: 1951 },
            Book { title: "Ubik", year: 1969 },
            Book { title: "Contact", year: 1985 },
        ]
    }

    fn book_columns() -> Vec<ColumnDef<Book>> {
        vec![
            ColumnDef::accessor("title", "Title", |b: &Book| b.title.into())
                .sortable()
                .filterable(),
            ColumnDef::accessor("year", "Year", |b: &Book| b.year.into()).sortable(),
            ColumnDef::accessor("decade", "Decade", |b: &Book| (b.year / 10 * 10).into()).sortable(),
        ]
    }

    fn titles(view: &TabularDataView<Book>) -> Vec<&'static str> {
        view.visible_rows().iter().map(|b| b.title).collect()
    }

    #[test]
    fn test_filter_then_sort_on_sample_authors() {
        let mut view = authors_view(10).unwrap();
        view.set_filter("username", "a").unwrap();
        assert_eq!(
            usernames(&view.visible_rows()),
            ["marcell_dev", "alex_coder", "sarah_writes"]
        );

        view.toggle_sort("username").unwrap();
        assert_eq!(
            usernames(&view.visible_rows()),
            ["alex_coder", "marcell_dev", "sarah_writes"]
        );

        view.toggle_sort("username").unwrap();
        assert_eq!(
            usernames(&view.visible_rows()),
            ["sarah_writes", "marcell_dev", "alex_coder"]
        );
    }

    #[test]
    fn test_three_username_toggles_restore_sample_order() {
        let mut view = authors_view(10).unwrap();
        let original = usernames(&view.visible_rows());
        view.toggle_sort("username").unwrap();
        assert_eq!(
            usernames(&view.visible_rows()),
            ["alex_coder", "johndoe", "marcell_dev", "sarah_writes"]
        );
        view.toggle_sort("username").unwrap();
        assert_eq!(
            usernames(&view.visible_rows()),
            ["sarah_writes", "marcell_dev", "johndoe", "alex_coder"]
        );
        view.toggle_sort("username").unwrap();
        assert!(view.sorting().is_empty());
        assert_eq!(usernames(&view.visible_rows()), original);
    }

    #[test]
    fn test_filter_is_idempotent_and_relaxing_restores_rows() {
        let mut view = authors_view(10).unwrap();
        view.set_filter("username", "alex").unwrap();
        let once = usernames(&view.visible_rows());
        view.set_filter("username", "alex").unwrap();
        assert_eq!(usernames(&view.visible_rows()), once);
        assert_eq!(once, ["alex_coder"]);

        view.set_filter("username", "").unwrap();
        assert!(view.filters().is_empty());
        assert_eq!(view.filtered_row_count(), 4);
        assert_eq!(
            usernames(&view.visible_rows()),
            ["marcell_dev", "alex_coder", "sarah_writes", "johndoe"]
        );
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let mut view = authors_view(10).unwrap();
        view.set_filter("username", "ALEX").unwrap();
        assert!(view.visible_rows().is_empty());
        view.set_filter("username", "alex").unwrap();
        assert_eq!(view.visible_rows().len(), 1);
    }

    #[test]
    fn test_filters_on_two_columns_must_both_match() {
        let mut view = authors_view(10).unwrap();
        view.set_filter("username", "a").unwrap();
        view.set_filter("email", "sarah").unwrap();
        assert_eq!(usernames(&view.visible_rows()), ["sarah_writes"]);
    }

    #[test]
    fn test_three_toggles_restore_original_order() {
        let mut view = TabularDataView::new(books(), book_columns(), 10).unwrap();
        let original = titles(&view);
        view.toggle_sort("year").unwrap();
        assert_eq!(view.sort_direction("year"), Some(SortDirection::Ascending));
        view.toggle_sort("year").unwrap();
        assert_eq!(view.sort_direction("year"), Some(SortDirection::Descending));
        view.toggle_sort("year").unwrap();
        assert_eq!(view.sort_direction("year"), None);
        assert_eq!(titles(&view), original);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut view = TabularDataView::new(books(), book_columns(), 10).unwrap();
        view.toggle_sort("decade").unwrap();
        // 1960s: Dune, Solaris, Ubik keep insertion order; 1980s likewise
        assert_eq!(
            titles(&view),
            ["Foundation", "Dune", "Solaris", "Ubik", "Neuromancer", "Hyperion", "Contact"]
        );
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let mut view = TabularDataView::new(books(), book_columns(), 10).unwrap();
        view.set_sorting(vec![SortKey::descending("decade"), SortKey::ascending("title")])
            .unwrap();
        assert_eq!(
            titles(&view),
            ["Contact", "Hyperion", "Neuromancer", "Dune", "Solaris", "Ubik", "Foundation"]
        );
    }

    #[test]
    fn test_switching_sort_column_starts_ascending() {
        let mut view = TabularDataView::new(books(), book_columns(), 10).unwrap();
        view.toggle_sort("year").unwrap();
        view.toggle_sort("year").unwrap();
        view.toggle_sort("title").unwrap();
        assert_eq!(view.sorting(), &vec![SortKey::ascending("title")]);
        assert_eq!(titles(&view)[0], "Contact");
    }

    #[test]
    fn test_page_index_clamps_to_last_page() {
        let rows: Vec<Book> = books().into_iter().take(4).collect();
        let mut view = TabularDataView::new(rows, book_columns(), 2).unwrap();
        view.set_page_index(5);
        assert_eq!(view.page_index(), 1);
        assert_eq!(titles(&view), ["Solaris", "Hyperion"]);
        assert!(view.can_go_previous());
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_page_index_clamps_when_row_set_shrinks() {
        let mut view = TabularDataView::new(books(), book_columns(), 2).unwrap();
        view.set_page_index(3);
        assert_eq!(titles(&view), ["Contact"]);
        view.set_rows(books().into_iter().take(3).collect::<Vec<_>>());
        assert_eq!(view.page_index(), 1);
        assert_eq!(titles(&view), ["Solaris"]);
    }

    #[test]
    fn test_filter_and_sort_changes_reset_page() {
        let mut view = TabularDataView::new(books(), book_columns(), 2).unwrap();
        view.next_page();
        assert_eq!(view.page_index(), 1);
        view.set_filter("title", "o").unwrap();
        assert_eq!(view.page_index(), 0);

        view.next_page();
        assert_eq!(view.page_index(), 1);
        view.toggle_sort("year").unwrap();
        assert_eq!(view.page_index(), 0);
    }

    #[test]
    fn test_page_size_change_keeps_top_row_visible() {
        let mut view = TabularDataView::new(books(), book_columns(), 2).unwrap();
        view.set_page_index(2);
        assert_eq!(titles(&view)[0], "Foundation");
        view.set_page_size(3);
        assert_eq!(view.page_index(), 1);
        assert!(titles(&view).contains(&"Foundation"));
        view.set_page_size(0);
        assert_eq!(view.page_size(), 1);
    }

    #[test]
    fn test_paging_stops_at_bounds() {
        let mut view = TabularDataView::new(books(), book_columns(), 3).unwrap();
        assert_eq!(view.page_count(), 3);
        view.previous_page();
        assert_eq!(view.page_index(), 0);
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.page_index(), 2);
        assert_eq!(titles(&view), ["Contact"]);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let mut view = authors_view(2).unwrap();
        view.set_filter("username", "zzz").unwrap();
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.page_index(), 0);
        assert!(!view.can_go_previous());
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_invalid_columns_leave_state_untouched() {
        let mut view = authors_view(2).unwrap();
        view.set_filter("username", "a").unwrap();
        view.toggle_sort("username").unwrap();
        view.next_page();
        let before = (view.sorting().clone(), view.filters().clone(), view.pagination());

        assert_eq!(
            view.toggle_sort("nope"),
            Err(ViewError::UnknownColumn("nope".into()))
        );
        assert_eq!(
            view.toggle_sort("email"),
            Err(ViewError::NotSortable("email".into()))
        );
        assert_eq!(
            view.set_filter("join_date", "2025"),
            Err(ViewError::NotFilterable("join_date".into()))
        );
        let bad = vec![SortKey::ascending("username"), SortKey::ascending("profile")];
        assert!(view.set_sorting(bad).is_err());

        let after = (view.sorting().clone(), view.filters().clone(), view.pagination());
        assert_eq!(before, after);
    }

    #[test]
    fn test_duplicate_column_ids_are_rejected() {
        let mut cols = book_columns();
        cols.push(ColumnDef::accessor("year", "Again", |b: &Book| b.year.into()));
        let err = TabularDataView::new(books(), cols, 10).err();
        assert_eq!(err, Some(ViewError::DuplicateColumn("year".into())));
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let mut view = authors_view(1).unwrap();
        view.set_filter("username", "a").unwrap();
        view.toggle_sort("username").unwrap();
        view.next_page();
        view.reset();
        assert!(view.sorting().is_empty());
        assert!(view.filters().is_empty());
        assert_eq!(view.page_index(), 0);
        assert_eq!(view.page_size(), 1);
    }

    #[test]
    fn test_views_share_rows_independently() {
        let shared: std::sync::Arc<[Book]> = books().into();
        let mut a = TabularDataView::new(shared.clone(), book_columns(), 10).unwrap();
        let b = TabularDataView::new(shared, book_columns(), 10).unwrap();
        a.toggle_sort("title").unwrap();
        assert_eq!(titles(&a)[0], "Contact");
        assert_eq!(titles(&b)[0], "Dune");
    }
}

#[cfg(test)]
mod cell_tests {
    use chrono::NaiveDate;
    use library_admin::table::CellValue;

    #[test]
    fn test_cell_display_forms() {
        assert_eq!(CellValue::from(42i64).to_string(), "42");
        assert_eq!(CellValue::from("abc").to_string(), "abc");
        assert_eq!(CellValue::from(None::<i64>).to_string(), "");
        let d = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(CellValue::from(d).to_string(), "2026-02-10");
    }

    #[test]
    fn test_cell_ordering() {
        assert!(CellValue::Int(2) < CellValue::Int(10));
        assert!(CellValue::from("10") < CellValue::from("2"));
        assert!(CellValue::Empty < CellValue::Int(i64::MIN));
        let early = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let late = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert!(CellValue::Date(early) < CellValue::Date(late));
    }
}

#[cfg(test)]
mod nav_tests {
    use library_admin::nav::{Page, active_index, breadcrumbs, nav_items, page_for};

    #[test]
    fn test_every_menu_route_resolves_to_a_page() {
        for item in nav_items() {
            assert_ne!(page_for(item.href), Page::NotFound, "{}", item.href);
        }
    }

    #[test]
    fn test_active_index_points_at_authors() {
        let idx = active_index("/admin/authors").unwrap();
        assert_eq!(nav_items().nth(idx).map(|i| i.name), Some("Authors"));
        assert_eq!(active_index("/"), None);
    }

    #[test]
    fn test_breadcrumb_hrefs_accumulate() {
        let hrefs: Vec<String> = breadcrumbs("/admin/authors").into_iter().map(|c| c.href).collect();
        assert_eq!(hrefs, ["/admin", "/admin/authors"]);
    }
}

#[cfg(test)]
mod search_tests {
    use library_admin::search::SearchOverlay;

    #[test]
    fn test_overlay_messages() {
        let mut s = SearchOverlay::default();
        s.toggle();
        assert!(s.open);
        assert_eq!(s.message(), "Start typing to search...");
        for c in "dune".chars() {
            s.push(c);
        }
        assert_eq!(s.message(), "No results found for \"dune\"");
        s.close();
        assert!(!s.open);
    }
}

#[cfg(test)]
mod ui_tests {
    use library_admin::app::{AppState, InputMode, Keymap, ModalState, Settings, Theme};
    use library_admin::ui::render;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_at(route: &str) -> AppState {
        let settings = Settings { start_route: route.into(), ..Settings::default() };
        AppState::new(settings, Theme::neutral(), Keymap::default()).expect("build app")
    }

    fn screen(app: &AppState) -> String {
        let backend = TestBackend::new(110, 30);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        terminal.draw(|f| render(f, app)).expect("render frame");
        let buf = terminal.backend().buffer().clone();
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_authors_page_renders_rows_and_pager() {
        let text = screen(&app_at("/admin/authors"));
        assert!(text.contains("marcell_dev"));
        assert!(text.contains("johndoe"));
        assert!(text.contains("20 Nov 2025"));
        assert!(text.contains("4 of 4 authors"));
    }

    #[test]
    fn test_empty_filter_shows_empty_message() {
        let mut app = app_at("/admin/authors");
        app.filter_input = "zzz".into();
        app.authors.set_filter("username", "zzz").unwrap();
        let text = screen(&app);
        assert!(text.contains("No authors found."));
        assert!(!text.contains("marcell_dev"));
        // the message sits on a row of its own, not clipped to the first column
        let row = text.lines().find(|l| l.contains("No authors found.")).unwrap();
        assert!(!row.contains('…'));
        assert!(!text.contains("No autho "));
    }

    #[test]
    fn test_other_pages_and_overlays_render() {
        assert!(screen(&app_at("/")).contains("Welcome to NextLibrary"));
        assert!(screen(&app_at("/admin/books")).contains("Nothing to show here yet."));
        assert!(screen(&app_at("/nowhere")).contains("404"));

        let mut app = app_at("/admin/authors");
        app.search.open = true;
        app.input_mode = InputMode::Search;
        assert!(screen(&app).contains("Start typing to search..."));

        app.search.open = false;
        app.modal = Some(ModalState::Help { scroll: 0 });
        app.input_mode = InputMode::Modal;
        assert!(screen(&app).contains("Keybindings"));
    }

    #[test]
    fn test_long_info_message_renders() {
        let mut app = app_at("/admin/authors");
        app.open_info("é".repeat(70_000));
        assert!(screen(&app).contains("Info"));

        app.open_info("Delete sarah_writes?");
        assert!(screen(&app).contains("Delete sarah_writes?"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels() {
        let mut app = app_at("/admin/authors");
        assert!(screen(&app).contains("NextLibrary"));
        app.sidebar_collapsed = true;
        assert!(!screen(&app).contains("MANAGEMENT"));
    }
}
