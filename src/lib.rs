//! Library crate for library-admin.
//!
//! This crate exposes the building blocks of the TUI:
//! - Generic filter → sort → paginate table model (`table`)
//! - Author records and their column set (`catalog`)
//! - Sidebar menu, routes and breadcrumbs (`nav`)
//! - Global search overlay and author filter glue (`search`)
//! - Application state, config files and update loop (`app`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `library-admin` binary and by tests.
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod catalog;
pub mod error;
pub mod nav;
pub mod search;
pub mod table;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Table errors and the result alias used by table operations.
pub use error::{Result, ViewError};
