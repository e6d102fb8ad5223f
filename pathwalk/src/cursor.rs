//! Row-oriented segment cursor.
//!
//! [`SegmentCursor`] wraps the tokenizer in a forward-only, single-use
//! state machine suitable for table-style consumers: each position exposes
//! a row id (starting at 1), the segment's kind, and its text. External
//! row-oriented consumers (the SQL adapter, the CLI `segments` command) go
//! through this cursor rather than driving the tokenizer directly.

use crate::segment::{first_segment, Segment, SegmentKind};
use crate::style::Style;

/// One emitted row of a [`SegmentCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRow<'a> {
    /// Row identifier; 1 for the first row, incremented per advance.
    pub row_id: i64,
    /// Classification of the segment.
    pub kind: SegmentKind,
    /// The segment text.
    pub text: &'a str,
}

/// The table-cursor interface: open a path, then alternate `current` and
/// `advance` until exhausted.
///
/// There is exactly one implementation, [`SegmentCursor`]; the trait is the
/// seam row-oriented consumers program against.
pub trait RowCursor<'a>: Sized {
    /// Opens a cursor over `path`, positioned on the first segment, or
    /// already exhausted when the path has no segments.
    fn open(path: &'a str, style: Style) -> Self;

    /// Moves to the next segment, or into the exhausted state when there is
    /// none. A no-op once exhausted.
    fn advance(&mut self);

    /// Returns the current row, or `None` once exhausted.
    fn current(&self) -> Option<SegmentRow<'a>>;

    /// Returns true once the cursor has moved past the last segment.
    fn is_exhausted(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    Positioned(Segment<'a>),
    Exhausted,
}

/// A stateful, single-pass, forward cursor over a path's segments.
///
/// Forward-only and single-use: re-iterating a path means opening a fresh
/// cursor.
///
/// # Examples
///
/// ```
/// use pathwalk::{SegmentCursor, Style};
///
/// let mut cursor = SegmentCursor::open("/a/../b", Style::Unix);
/// let mut rows = Vec::new();
/// while let Some(row) = cursor.current() {
///     rows.push((row.row_id, row.kind.as_str(), row.text));
///     cursor.advance();
/// }
/// assert_eq!(rows, [(1, "normal", "a"), (2, "back", ".."), (3, "normal", "b")]);
/// assert!(cursor.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a> {
    state: State<'a>,
    row_id: i64,
}

impl<'a> SegmentCursor<'a> {
    /// Opens a cursor over `path`.
    ///
    /// If the path has no segments (empty or root-only) the cursor starts
    /// out exhausted.
    #[must_use]
    pub fn open(path: &'a str, style: Style) -> Self {
        let state = match first_segment(path, style) {
            Some(seg) => State::Positioned(seg),
            None => State::Exhausted,
        };
        Self { state, row_id: 1 }
    }

    /// Moves to the next segment, or into the exhausted state when there is
    /// none. Calling this while exhausted is a no-op.
    pub fn advance(&mut self) {
        if let State::Positioned(seg) = &mut self.state {
            if seg.next() {
                self.row_id += 1;
            } else {
                self.state = State::Exhausted;
            }
        }
    }

    /// Returns the current row, or `None` once the cursor is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<SegmentRow<'a>> {
        match &self.state {
            State::Positioned(seg) => Some(SegmentRow {
                row_id: self.row_id,
                kind: seg.kind(),
                text: seg.as_str(),
            }),
            State::Exhausted => None,
        }
    }

    /// Returns true once the cursor has moved past the last segment.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }
}

impl<'a> RowCursor<'a> for SegmentCursor<'a> {
    fn open(path: &'a str, style: Style) -> Self {
        Self::open(path, style)
    }

    fn advance(&mut self) {
        Self::advance(self);
    }

    fn current(&self) -> Option<SegmentRow<'a>> {
        Self::current(self)
    }

    fn is_exhausted(&self) -> bool {
        Self::is_exhausted(self)
    }
}
