//! Positional segment lookup.

use crate::segment::{first_segment, last_segment, Segment};
use crate::style::Style;

/// Resolves a signed index into a specific segment of `path`.
///
/// For `index >= 0`, segment 0 is the first segment and the cursor is
/// advanced forward exactly `index` times. For `index < 0`, segment -1 is
/// the last segment and the cursor is walked backward `-index - 1` times.
/// Exhausting the sequence in either direction yields `None`.
///
/// Complexity is linear in `|index|`; nothing is cached across calls.
///
/// # Examples
///
/// ```
/// use pathwalk::{segment_at, Style};
///
/// let path = "/a/b/c";
/// assert_eq!(segment_at(path, 0, Style::Unix).unwrap().as_str(), "a");
/// assert_eq!(segment_at(path, -1, Style::Unix).unwrap().as_str(), "c");
/// assert!(segment_at(path, 5, Style::Unix).is_none());
/// assert!(segment_at(path, -4, Style::Unix).is_none());
/// ```
#[must_use]
pub fn segment_at(path: &str, index: i64, style: Style) -> Option<Segment<'_>> {
    if index >= 0 {
        let mut seg = first_segment(path, style)?;
        for _ in 0..index {
            if !seg.next() {
                return None;
            }
        }
        Some(seg)
    } else {
        let mut seg = last_segment(path, style)?;
        // -1 is the last segment itself; unsigned_abs keeps i64::MIN sound.
        for _ in 0..(index.unsigned_abs() - 1) {
            if !seg.previous() {
                return None;
            }
        }
        Some(seg)
    }
}
