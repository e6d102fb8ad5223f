#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

//! # pathwalk-sqlite
//!
//! Exposes the [pathwalk](pathwalk) engine to SQLite through `rusqlite`:
//! one scalar function per path algorithm (`path_basename`,
//! `path_normalize`, ...) plus the `path_segments` table-valued function
//! that yields one row per segment of a path.
//!
//! The path style is fixed once at registration and shared read-only by
//! every function on the connection; [`register`] uses Unix rules, and
//! [`register_with_style`] accepts either style.
//!
//! ## Examples
//!
//! ```
//! use rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory().unwrap();
//! pathwalk_sqlite::register(&conn).unwrap();
//!
//! let base: String = conn
//!     .query_row("SELECT path_basename('/a/b/c.txt')", [], |row| row.get(0))
//!     .unwrap();
//! assert_eq!(base, "c.txt");
//! ```

use pathwalk::Style;
use rusqlite::{Connection, Result};

mod functions;
mod segments;

/// Registers all path functions and the `path_segments` table-valued
/// function on `conn`, parsing with Unix rules.
///
/// # Errors
///
/// Returns any `rusqlite` error raised while creating the functions or the
/// module.
pub fn register(conn: &Connection) -> Result<()> {
    register_with_style(conn, Style::Unix)
}

/// Registers all path functions and the `path_segments` table-valued
/// function on `conn`, parsing with the given style.
///
/// The style is captured at registration and treated as immutable for the
/// life of the connection.
///
/// # Errors
///
/// Returns any `rusqlite` error raised while creating the functions or the
/// module.
pub fn register_with_style(conn: &Connection, style: Style) -> Result<()> {
    functions::register(conn, style)?;
    segments::register(conn, style)
}
