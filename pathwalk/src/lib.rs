#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathwalk
//!
//! Pure path algebra over borrowed strings: classify, decompose, join,
//! normalize, and iterate filesystem-style paths by segment, without ever
//! touching a filesystem. There is no I/O here — no existence checks, no
//! symlink resolution — and no URL semantics; comparisons are literal.
//!
//! ## Core pieces
//!
//! - [`Style`]: the syntax rules (separators, root grammar) a path is
//!   parsed under; a plain value passed into every call
//! - [`Segment`], [`first_segment`], [`last_segment`], [`segments`]: the
//!   zero-allocation tokenizer
//! - [`basename`], [`dirname`], [`extension`], [`name`], [`root`],
//!   [`join`], [`normalize`], [`intersection`]: the path algorithms
//! - [`segment_at`]: signed positional segment lookup
//! - [`SegmentCursor`]: a forward-only row cursor for table-style consumers
//!
//! ## Examples
//!
//! ```
//! use pathwalk::{basename, normalize, segment_at, Style};
//!
//! let style = Style::Unix;
//! assert_eq!(basename("/a/b/c.txt", style), Some("c.txt"));
//! assert_eq!(normalize("/a/b/../c", style).unwrap(), "/a/c");
//! assert_eq!(segment_at("/a/b/c", -1, style).unwrap().as_str(), "c");
//! ```

pub mod cursor;
pub mod error;
pub mod locate;
pub mod logging;
pub mod ops;
pub mod segment;
pub mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types and operations at the crate root for convenience
pub use cursor::{RowCursor, SegmentCursor, SegmentRow};
pub use error::{Error, Result};
pub use locate::segment_at;
pub use logging::{init_logger, LogLevel, Logger};
pub use ops::{
    basename, dirname, extension, intersection, is_absolute, is_relative, join, name, normalize,
    root,
};
pub use segment::{first_segment, last_segment, root_len, segments, Segment, SegmentKind, Segments};
pub use style::Style;
