//! Stateless path algorithms.
//!
//! Every function here is a pure function of its inputs, built from the
//! tokenizer primitives in [`crate::segment`]. Extraction functions
//! (`basename`, `dirname`, `extension`, `name`, `root`) return borrowed
//! subslices of the input and never allocate; `join` and `normalize` build
//! owned results with fallibly reserved, growable buffers.

use crate::error::{Error, Result};
use crate::segment::{last_segment, root_len, segments, Segment, SegmentKind};
use crate::style::Style;

/// Returns true if `path` is absolute: it has a root and the root anchors
/// the path (the root ends in a separator).
///
/// An empty path is not absolute. Under Windows rules a drive-relative
/// path like `C:x` has a root but is not absolute.
///
/// # Examples
///
/// ```
/// use pathwalk::{is_absolute, Style};
///
/// assert!(is_absolute("/a", Style::Unix));
/// assert!(!is_absolute("./a", Style::Unix));
/// assert!(!is_absolute("~/a", Style::Unix));
/// assert!(is_absolute("C:\\a", Style::Windows));
/// assert!(!is_absolute("C:a", Style::Windows));
/// ```
#[must_use]
pub fn is_absolute(path: &str, style: Style) -> bool {
    let root = root_len(path, style);
    root > 0 && style.is_separator(path.as_bytes()[root - 1])
}

/// Returns true if `path` is relative: the logical complement of
/// [`is_absolute`]. An empty path is relative.
#[must_use]
pub fn is_relative(path: &str, style: Style) -> bool {
    !is_absolute(path, style)
}

/// Returns the root of `path`, or `None` if the path has none.
///
/// # Examples
///
/// ```
/// use pathwalk::{root, Style};
///
/// assert_eq!(root("/a/b", Style::Unix), Some("/"));
/// assert_eq!(root("a/b", Style::Unix), None);
/// assert_eq!(root("C:\\a", Style::Windows), Some("C:\\"));
/// ```
#[must_use]
pub fn root(path: &str, style: Style) -> Option<&str> {
    match root_len(path, style) {
        0 => None,
        n => Some(&path[..n]),
    }
}

/// Returns the last segment of `path`, or `None` if the path has no
/// segments (root-only or empty).
///
/// # Examples
///
/// ```
/// use pathwalk::{basename, Style};
///
/// assert_eq!(basename("/a/b/c.txt", Style::Unix), Some("c.txt"));
/// assert_eq!(basename("c.txt", Style::Unix), Some("c.txt"));
/// assert_eq!(basename("/", Style::Unix), None);
/// assert_eq!(basename("", Style::Unix), None);
/// ```
#[must_use]
pub fn basename(path: &str, style: Style) -> Option<&str> {
    last_segment(path, style).map(|s| s.as_str())
}

/// Returns the portion of `path` preceding its final segment, with the
/// separator(s) before that segment trimmed — but never trimmed below the
/// root. Returns `None` when nothing precedes the final segment (a bare
/// filename) or when the path has no segments at all.
///
/// # Examples
///
/// ```
/// use pathwalk::{dirname, Style};
///
/// assert_eq!(dirname("/a/b/c.txt", Style::Unix), Some("/a/b"));
/// assert_eq!(dirname("/a", Style::Unix), Some("/"));
/// assert_eq!(dirname("a/b", Style::Unix), Some("a"));
/// assert_eq!(dirname("c.txt", Style::Unix), None);
/// assert_eq!(dirname("/", Style::Unix), None);
/// ```
#[must_use]
pub fn dirname(path: &str, style: Style) -> Option<&str> {
    let seg = last_segment(path, style)?;
    let root = root_len(path, style);
    let bytes = path.as_bytes();
    let mut end = seg.begin();
    while end > root && style.is_separator(bytes[end - 1]) {
        end -= 1;
    }
    if end == 0 {
        return None;
    }
    Some(&path[..end])
}

// The extension starts at the last dot of the basename, unless that dot is
// the basename's first character (leading-dot hidden names).
fn extension_dot(base: &str) -> Option<usize> {
    let dot = base.rfind('.')?;
    (dot > 0).then_some(dot)
}

/// Returns the extension of `path`'s basename, including the leading dot,
/// or `None` if the basename has no qualifying dot.
///
/// A dot that is the first character of the basename never starts an
/// extension, so hidden files like `.bashrc` have none.
///
/// # Examples
///
/// ```
/// use pathwalk::{extension, Style};
///
/// assert_eq!(extension("/a/b.txt", Style::Unix), Some(".txt"));
/// assert_eq!(extension("b.tar.gz", Style::Unix), Some(".gz"));
/// assert_eq!(extension("/a/.hidden", Style::Unix), None);
/// assert_eq!(extension("abc", Style::Unix), None);
/// ```
#[must_use]
pub fn extension(path: &str, style: Style) -> Option<&str> {
    let base = basename(path, style)?;
    let dot = extension_dot(base)?;
    Some(&base[dot..])
}

/// Returns `path`'s basename with its extension removed, or the full
/// basename when there is no extension. `None` exactly when [`basename`]
/// is `None`.
///
/// # Examples
///
/// ```
/// use pathwalk::{name, Style};
///
/// assert_eq!(name("/a/b.txt", Style::Unix), Some("b"));
/// assert_eq!(name("d.tar.gz", Style::Unix), Some("d.tar"));
/// assert_eq!(name("/a/.hidden", Style::Unix), Some(".hidden"));
/// assert_eq!(name("/", Style::Unix), None);
/// ```
#[must_use]
pub fn name(path: &str, style: Style) -> Option<&str> {
    let base = basename(path, style)?;
    match extension_dot(base) {
        Some(dot) => Some(&base[..dot]),
        None => Some(base),
    }
}

/// Joins two or more paths with a left fold of the pairwise rule: if the
/// right operand is absolute it replaces everything accumulated so far;
/// otherwise the right operand is appended after a separator (inserted
/// only when needed).
///
/// Joining does not resolve `.` or `..` segments; callers that want that
/// apply [`normalize`] to the result.
///
/// # Errors
///
/// Returns [`Error::Argument`] if fewer than 2 paths are supplied, and
/// [`Error::OutOfMemory`] if the result buffer cannot be reserved.
///
/// # Examples
///
/// ```
/// use pathwalk::{join, Style};
///
/// assert_eq!(join(&["a", "b"], Style::Unix).unwrap(), "a/b");
/// assert_eq!(join(&["a", "/b"], Style::Unix).unwrap(), "/b");
/// assert_eq!(join(&["a/", "b", "c"], Style::Unix).unwrap(), "a/b/c");
/// assert!(join(&["a"], Style::Unix).is_err());
/// ```
pub fn join(paths: &[&str], style: Style) -> Result<String> {
    if paths.len() < 2 {
        return Err(Error::Argument {
            message: format!("join requires at least 2 paths, got {}", paths.len()),
        });
    }

    let mut out = String::new();
    out.try_reserve(paths.iter().map(|p| p.len() + 1).sum())?;
    out.push_str(paths[0]);
    for part in &paths[1..] {
        if is_absolute(part, style) {
            out.clear();
            out.push_str(part);
            continue;
        }
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() && !style.is_separator(out.as_bytes()[out.len() - 1]) {
            out.push(style.separator());
        }
        out.push_str(part);
    }
    Ok(out)
}

/// Resolves `.` and `..` segments and collapses separator runs, producing
/// a new owned path.
///
/// Walking left to right with an output stack: `.` segments are dropped;
/// `..` pops the last normal segment if one exists. When nothing can be
/// popped, a `..` on a rooted path is dropped (the result never climbs
/// above the root), while on a rootless path it is retained verbatim so a
/// relative escape is preserved. The root is kept as written; segments are
/// re-joined with the style's primary separator; an empty relative result
/// renders as `.`.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if a working buffer cannot be reserved.
///
/// # Examples
///
/// ```
/// use pathwalk::{normalize, Style};
///
/// assert_eq!(normalize("/a/b/../c", Style::Unix).unwrap(), "/a/c");
/// assert_eq!(normalize("a/../../b", Style::Unix).unwrap(), "../b");
/// assert_eq!(normalize("/../a", Style::Unix).unwrap(), "/a");
/// assert_eq!(normalize("a/..", Style::Unix).unwrap(), ".");
/// assert_eq!(normalize("//a//b/", Style::Unix).unwrap(), "/a/b");
/// ```
pub fn normalize(path: &str, style: Style) -> Result<String> {
    let root_end = root_len(path, style);

    let mut stack: Vec<Segment<'_>> = Vec::new();
    // Every segment spans at least one byte and all but the first need a
    // separator, so this bounds the segment count.
    stack.try_reserve(path.len() / 2 + 1)?;

    for seg in segments(path, style) {
        match seg.kind() {
            SegmentKind::CurrentDir => {}
            SegmentKind::ParentDir => {
                if matches!(stack.last(), Some(s) if s.kind() == SegmentKind::Normal) {
                    stack.pop();
                } else if root_end == 0 {
                    stack.push(seg);
                }
            }
            SegmentKind::Normal => stack.push(seg),
        }
    }

    let mut out = String::new();
    out.try_reserve(path.len().max(1))?;
    out.push_str(&path[..root_end]);
    for (i, seg) in stack.iter().enumerate() {
        if i > 0 {
            out.push(style.separator());
        }
        out.push_str(seg.as_str());
    }
    if out.is_empty() {
        out.push('.');
    }
    Ok(out)
}

/// Returns the length in bytes of the longest common prefix of `a` and
/// `b`, measured in whole characters from position 0.
///
/// This is a raw prefix match, not a segment-aligned comparison: the
/// returned length may end in the middle of a segment. It never splits a
/// multi-byte character. Returns 0 when the first characters already
/// diverge.
///
/// # Examples
///
/// ```
/// use pathwalk::intersection;
///
/// assert_eq!(intersection("/ab/c", "/abd/c"), 3);
/// assert_eq!(intersection("/a/b", "/a/b"), 4);
/// assert_eq!(intersection("abc", "xyz"), 0);
/// ```
#[must_use]
pub fn intersection(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/a", Style::Unix));
        assert!(is_absolute("/", Style::Unix));
        assert!(!is_absolute("a/b", Style::Unix));
        assert!(!is_absolute("./a", Style::Unix));
        assert!(!is_absolute("~/a", Style::Unix));
        assert!(!is_absolute("", Style::Unix));
    }

    #[test]
    fn test_is_absolute_windows() {
        assert!(is_absolute("C:\\a", Style::Windows));
        assert!(is_absolute("\\a", Style::Windows));
        assert!(is_absolute("\\\\host\\share", Style::Windows));
        assert!(!is_absolute("C:a", Style::Windows));
        assert!(!is_absolute("a\\b", Style::Windows));
    }

    #[test]
    fn test_is_relative_complements_is_absolute() {
        for path in ["/a", "a", "", "/", "./x", "C:x"] {
            for style in [Style::Unix, Style::Windows] {
                assert_ne!(is_absolute(path, style), is_relative(path, style));
            }
        }
        assert!(is_relative("", Style::Unix));
    }

    #[test]
    fn test_root() {
        assert_eq!(root("/a/b", Style::Unix), Some("/"));
        assert_eq!(root("a/b", Style::Unix), None);
        assert_eq!(root("", Style::Unix), None);
        assert_eq!(root("C:\\a", Style::Windows), Some("C:\\"));
        assert_eq!(root("\\\\host\\share\\x", Style::Windows), Some("\\\\host\\"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/a/b/c.txt", Style::Unix), Some("c.txt"));
        assert_eq!(basename("a/b.txt", Style::Unix), Some("b.txt"));
        assert_eq!(basename("c.txt", Style::Unix), Some("c.txt"));
        assert_eq!(basename("c", Style::Unix), Some("c"));
        assert_eq!(basename("/a/b/", Style::Unix), Some("b"));
        assert_eq!(basename("", Style::Unix), None);
        assert_eq!(basename("/", Style::Unix), None);
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b/c.txt", Style::Unix), Some("/a/b"));
        assert_eq!(dirname("a/b.txt", Style::Unix), Some("a"));
        assert_eq!(dirname("/a", Style::Unix), Some("/"));
        assert_eq!(dirname("a", Style::Unix), None);
        assert_eq!(dirname("a/", Style::Unix), None);
        assert_eq!(dirname("", Style::Unix), None);
        assert_eq!(dirname("/", Style::Unix), None);
    }

    #[test]
    fn test_dirname_collapses_separator_runs() {
        assert_eq!(dirname("/a/b//c", Style::Unix), Some("/a/b"));
        assert_eq!(dirname("//a", Style::Unix), Some("/"));
    }

    #[test]
    fn test_dirname_windows_root() {
        assert_eq!(dirname("C:\\a", Style::Windows), Some("C:\\"));
        assert_eq!(dirname("C:\\a\\b", Style::Windows), Some("C:\\a"));
        assert_eq!(dirname("C:\\", Style::Windows), None);
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("b.txt", Style::Unix), Some(".txt"));
        assert_eq!(extension("b.tar.gz", Style::Unix), Some(".gz"));
        assert_eq!(extension("/a/.hidden", Style::Unix), None);
        assert_eq!(extension("abc", Style::Unix), None);
        assert_eq!(extension("/", Style::Unix), None);
        assert_eq!(extension("a.d/b", Style::Unix), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(name("/a/b.txt", Style::Unix), Some("b"));
        assert_eq!(name("d.tar.gz", Style::Unix), Some("d.tar"));
        assert_eq!(name("/a/.hidden", Style::Unix), Some(".hidden"));
        assert_eq!(name("abc", Style::Unix), Some("abc"));
        assert_eq!(name("/", Style::Unix), None);
    }

    #[test]
    fn test_join_pairs() {
        assert_eq!(join(&["a", "b"], Style::Unix).unwrap(), "a/b");
        assert_eq!(join(&["abc", "xyz"], Style::Unix).unwrap(), "abc/xyz");
        assert_eq!(join(&["a/", "b"], Style::Unix).unwrap(), "a/b");
        assert_eq!(join(&["", "b"], Style::Unix).unwrap(), "b");
        assert_eq!(join(&["a", ""], Style::Unix).unwrap(), "a");
    }

    #[test]
    fn test_join_right_absolute_wins() {
        assert_eq!(join(&["a", "/b"], Style::Unix).unwrap(), "/b");
        assert_eq!(join(&["/x/y", "/b", "c"], Style::Unix).unwrap(), "/b/c");
        assert_eq!(join(&["a", "C:\\b"], Style::Windows).unwrap(), "C:\\b");
    }

    #[test]
    fn test_join_does_not_resolve_dots() {
        assert_eq!(join(&["a", "../b"], Style::Unix).unwrap(), "a/../b");
    }

    #[test]
    fn test_join_many() {
        assert_eq!(join(&["aa", "bbb", "cccc"], Style::Unix).unwrap(), "aa/bbb/cccc");
        assert_eq!(join(&["a", "b"], Style::Windows).unwrap(), "a\\b");
    }

    #[test]
    fn test_join_requires_two_paths() {
        assert!(join(&[], Style::Unix).unwrap_err().is_argument());
        assert!(join(&["a"], Style::Unix).unwrap_err().is_argument());
    }

    #[test]
    fn test_normalize_resolves_segments() {
        assert_eq!(normalize("/a/b/../c", Style::Unix).unwrap(), "/a/c");
        assert_eq!(normalize("/a/./b", Style::Unix).unwrap(), "/a/b");
        assert_eq!(normalize("~/../a/b/./c/../ayoo", Style::Unix).unwrap(), "a/b/ayoo");
    }

    #[test]
    fn test_normalize_preserves_relative_escape() {
        assert_eq!(normalize("a/../../b", Style::Unix).unwrap(), "../b");
        assert_eq!(normalize("../../a", Style::Unix).unwrap(), "../../a");
        assert_eq!(normalize("..", Style::Unix).unwrap(), "..");
    }

    #[test]
    fn test_normalize_never_climbs_above_root() {
        assert_eq!(normalize("/../a", Style::Unix).unwrap(), "/a");
        assert_eq!(normalize("/../../", Style::Unix).unwrap(), "/");
    }

    #[test]
    fn test_normalize_empty_result_is_current_dir() {
        assert_eq!(normalize("", Style::Unix).unwrap(), ".");
        assert_eq!(normalize(".", Style::Unix).unwrap(), ".");
        assert_eq!(normalize("a/..", Style::Unix).unwrap(), ".");
        assert_eq!(normalize("./.", Style::Unix).unwrap(), ".");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("//a//b/", Style::Unix).unwrap(), "/a/b");
        assert_eq!(normalize("/a/b/", Style::Unix).unwrap(), "/a/b");
    }

    #[test]
    fn test_normalize_windows() {
        assert_eq!(normalize("C:\\a\\..\\b", Style::Windows).unwrap(), "C:\\b");
        assert_eq!(normalize("C:/a/c/..", Style::Windows).unwrap(), "C:/a");
        assert_eq!(normalize("\\\\host\\share\\..\\x", Style::Windows).unwrap(), "\\\\host\\x");
        assert_eq!(normalize("a/b", Style::Windows).unwrap(), "a\\b");
    }

    #[test]
    fn test_normalize_idempotent_on_samples() {
        for path in ["/a/b/../c", "a/../../b", "", "/", "x//y/./z", "C:\\a\\..\\b"] {
            for style in [Style::Unix, Style::Windows] {
                let once = normalize(path, style).unwrap();
                let twice = normalize(&once, style).unwrap();
                assert_eq!(once, twice, "normalize not idempotent for {path:?}");
            }
        }
    }

    #[test]
    fn test_intersection_raw_prefix() {
        // Not segment-aligned: the match may stop mid-segment.
        assert_eq!(intersection("/ab/c", "/abd/c"), 3);
        assert_eq!(&"/ab/c"[..3], "/ab");
    }

    #[test]
    fn test_intersection_basics() {
        assert_eq!(intersection("/a/b", "/a/b"), 4);
        assert_eq!(intersection("abc", "xyz"), 0);
        assert_eq!(intersection("", "/a"), 0);
        assert_eq!(intersection("/this/is/a/test", "/this/is/a/ayoo"), 11);
    }

    #[test]
    fn test_intersection_symmetric() {
        for (a, b) in [("/ab/c", "/abd/c"), ("/x", "/y"), ("same", "same")] {
            assert_eq!(intersection(a, b), intersection(b, a));
        }
    }

    #[test]
    fn test_intersection_never_splits_characters() {
        // 'é' is two bytes; 'a' diverges from 'é' at the first byte of the
        // character, so the whole character is excluded.
        assert_eq!(intersection("/ré", "/ra"), 2);
        assert_eq!(intersection("/é1", "/é2"), 3);
    }
}
