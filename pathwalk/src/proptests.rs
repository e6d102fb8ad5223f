//! Property-based tests for the segment engine.
//!
//! The normalize unit tests pin the concrete resolution cases; this module
//! checks the laws that should hold for arbitrary generated paths.

use proptest::prelude::*;

use crate::cursor::SegmentCursor;
use crate::locate::segment_at;
use crate::ops::{basename, dirname, intersection, join, normalize};
use crate::segment::{segments, SegmentKind};
use crate::style::Style;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z0-9_.-]{1,8}".prop_map(|s| s),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(component_strategy(), 0..8)).prop_map(
        |(absolute, parts)| {
            let mut path = String::new();
            if absolute {
                path.push('/');
            }
            path.push_str(&parts.join("/"));
            path
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent(path in path_strategy()) {
        let once = normalize(&path, Style::Unix).unwrap();
        let twice = normalize(&once, Style::Unix).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Normalized paths contain no current-directory segments, and
    // parent-directory segments only as a leading run of a relative path.
    #[test]
    fn normalize_resolves_all_it_can(path in path_strategy()) {
        let normalized = normalize(&path, Style::Unix).unwrap();
        if normalized == "." {
            return Ok(());
        }
        let kinds: Vec<SegmentKind> =
            segments(&normalized, Style::Unix).map(|s| s.kind()).collect();
        let mut seen_normal = false;
        for kind in kinds {
            match kind {
                SegmentKind::Normal => seen_normal = true,
                SegmentKind::ParentDir => {
                    prop_assert!(!seen_normal, "interior '..' survived in {normalized:?}");
                    prop_assert!(!normalized.starts_with('/'),
                        "'..' survived on a rooted path {normalized:?}");
                }
                SegmentKind::CurrentDir => {
                    prop_assert!(false, "'.' survived in {normalized:?}");
                }
            }
        }
    }

    // Forward positional lookup replays exactly the cursor's row stream,
    // and -1 resolves to the cursor's last row.
    #[test]
    fn locator_matches_cursor(path in path_strategy()) {
        let mut cursor = SegmentCursor::open(&path, Style::Unix);
        let mut index = 0i64;
        let mut last_text = None;
        while let Some(row) = cursor.current() {
            let located = segment_at(&path, index, Style::Unix)
                .expect("cursor emitted a row the locator cannot reach");
            prop_assert_eq!(row.text, located.as_str());
            prop_assert_eq!(row.row_id, index + 1);
            last_text = Some(row.text.to_string());
            index += 1;
            cursor.advance();
        }
        prop_assert!(segment_at(&path, index, Style::Unix).is_none());
        let back = segment_at(&path, -1, Style::Unix).map(|s| s.as_str().to_string());
        prop_assert_eq!(back, last_text);
    }

    // Rejoining dirname and basename preserves the normalized segment
    // sequence of the input path.
    #[test]
    fn dirname_basename_rejoin(path in path_strategy()) {
        let (Some(dir), Some(base)) =
            (dirname(&path, Style::Unix), basename(&path, Style::Unix))
        else {
            return Ok(());
        };
        let rejoined = join(&[dir, base], Style::Unix).unwrap();
        prop_assert_eq!(
            normalize(&rejoined, Style::Unix).unwrap(),
            normalize(&path, Style::Unix).unwrap()
        );
    }

    // The intersection length is a shared, symmetric, bounded prefix.
    #[test]
    fn intersection_is_a_common_prefix(a in path_strategy(), b in path_strategy()) {
        let len = intersection(&a, &b);
        prop_assert!(len <= a.len() && len <= b.len());
        prop_assert_eq!(&a[..len], &b[..len]);
        prop_assert_eq!(len, intersection(&b, &a));
        prop_assert_eq!(intersection(&a, &a), a.len());
    }

    // Segments are non-empty, separator-free, ordered, and non-overlapping.
    #[test]
    fn segments_partition_the_path(path in path_strategy()) {
        let mut previous_end = 0usize;
        for seg in segments(&path, Style::Unix) {
            prop_assert!(seg.begin() < seg.end());
            prop_assert!(seg.begin() >= previous_end);
            prop_assert!(!seg.as_str().contains('/'));
            previous_end = seg.end();
        }
    }
}
