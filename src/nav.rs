//! Sidebar menu, route matching and breadcrumbs.

/// One entry of the sidebar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    /// Single glyph shown when the sidebar is collapsed.
    pub icon: char,
}

#[derive(Copy, Clone, Debug)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

pub const SIDEBAR_MENU: &[NavGroup] = &[
    NavGroup {
        label: "General",
        items: &[
            NavItem { name: "Dashboard", href: "/admin/dashboard", icon: '▦' },
            NavItem { name: "Analytics", href: "/admin/analytics", icon: '◔' },
            NavItem { name: "Reports", href: "/admin/reports", icon: '≡' },
        ],
    },
    NavGroup {
        label: "Management",
        items: &[
            NavItem { name: "Books", href: "/admin/books", icon: '▤' },
            NavItem { name: "Authors", href: "/admin/authors", icon: '✎' },
            NavItem { name: "Categories", href: "/admin/categories", icon: '◇' },
            NavItem { name: "Members", href: "/admin/members", icon: '☺' },
        ],
    },
    NavGroup {
        label: "System",
        items: &[NavItem { name: "Settings", href: "/admin/settings", icon: '⚙' }],
    },
];

pub const ADMIN_ROOT: &str = "/admin";
pub const LANDING: &str = "/";

/// All sidebar items in menu order.
pub fn nav_items() -> impl Iterator<Item = &'static NavItem> {
    SIDEBAR_MENU.iter().flat_map(|g| g.items.iter())
}

/// Whether the sidebar entry `href` is highlighted for `path`.
/// The admin root only matches itself; everything else matches by prefix.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == ADMIN_ROOT {
        return path == ADMIN_ROOT;
    }
    path.starts_with(href)
}

/// Index into [`nav_items`] of the active entry, if any.
pub fn active_index(path: &str) -> Option<usize> {
    nav_items().position(|item| is_active(item.href, path))
}

/// Route of the sidebar item after the active one, wrapping around.
/// From a route outside the menu the first item is chosen.
pub fn next_route(path: &str) -> &'static str {
    let items: Vec<_> = nav_items().collect();
    let next = active_index(path).map_or(0, |i| (i + 1) % items.len());
    items[next].href
}

/// Route of the sidebar item before the active one, wrapping around.
pub fn previous_route(path: &str) -> &'static str {
    let items: Vec<_> = nav_items().collect();
    let prev = active_index(path).map_or(items.len() - 1, |i| (i + items.len() - 1) % items.len());
    items[prev].href
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrumbKind {
    /// Leading segment: plain, not navigable.
    Plain,
    Link,
    /// Last segment: the page being shown.
    Current,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    pub href: String,
    pub kind: CrumbKind,
}

/// Split `path` into breadcrumbs: `/admin/book-loans` → `Admin › Book loans`.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let kind = if i == last {
                CrumbKind::Current
            } else if i == 0 {
                CrumbKind::Plain
            } else {
                CrumbKind::Link
            };
            Crumb {
                title: crumb_title(seg),
                href: format!("/{}", segments[..=i].join("/")),
                kind,
            }
        })
        .collect()
}

fn crumb_title(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('-', " "),
        None => String::new(),
    }
}

/// What the content area shows for a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Authors,
    /// A menu page with no content yet.
    Placeholder(&'static str),
    NotFound,
}

pub fn page_for(path: &str) -> Page {
    match path {
        LANDING => Page::Landing,
        ADMIN_ROOT => Page::Placeholder("Dashboard"),
        "/admin/authors" => Page::Authors,
        _ => nav_items()
            .find(|item| is_active(item.href, path))
            .map_or(Page::NotFound, |item| Page::Placeholder(item.name)),
    }
}

/// Cards on the public landing page: (title, description).
pub const LANDING_CARDS: &[(&str, &str)] = &[
    ("Add a New Book", "Register a new book into the library catalog quickly and easily."),
    ("Search for a Book", "Find any book by title, author, genre, or ISBN in seconds."),
    ("View All Books", "Browse and explore the entire library collection at a glance."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_root_matches_exactly() {
        assert!(is_active("/admin", "/admin"));
        assert!(!is_active("/admin", "/admin/authors"));
        assert!(is_active("/admin/authors", "/admin/authors/42"));
        assert!(!is_active("/admin/books", "/admin/authors"));
    }

    #[test]
    fn breadcrumbs_split_and_title_case() {
        let crumbs = breadcrumbs("/admin/book-loans/overdue");
        let titles: Vec<&str> = crumbs.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Admin", "Book loans", "Overdue"]);
        assert_eq!(crumbs[0].kind, CrumbKind::Plain);
        assert_eq!(crumbs[1].kind, CrumbKind::Link);
        assert_eq!(crumbs[1].href, "/admin/book-loans");
        assert_eq!(crumbs[2].kind, CrumbKind::Current);
    }

    #[test]
    fn single_segment_crumb_is_current() {
        let crumbs = breadcrumbs("/admin");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].kind, CrumbKind::Current);
        assert!(breadcrumbs("/").is_empty());
    }

    #[test]
    fn sidebar_cycles_wrap() {
        assert_eq!(next_route("/admin/authors"), "/admin/categories");
        assert_eq!(next_route("/admin/settings"), "/admin/dashboard");
        assert_eq!(previous_route("/admin/dashboard"), "/admin/settings");
        assert_eq!(next_route("/"), "/admin/dashboard");
        assert_eq!(previous_route("/"), "/admin/settings");
    }

    #[test]
    fn pages_resolve_from_routes() {
        assert_eq!(page_for("/"), Page::Landing);
        assert_eq!(page_for("/admin/authors"), Page::Authors);
        assert_eq!(page_for("/admin/books"), Page::Placeholder("Books"));
        assert_eq!(page_for("/admin"), Page::Placeholder("Dashboard"));
        assert_eq!(page_for("/nowhere"), Page::NotFound);
    }
}
