//! Path syntax styles.
//!
//! A [`Style`] fixes the syntax rules used when parsing a path: which bytes
//! separate segments and which prefixes form a root. It is a plain value —
//! there is no process-wide style state; every tokenizer and algorithm call
//! receives the style it should parse with, and consumers that want
//! configure-once semantics capture a `Style` when they are constructed.

use std::fmt;

/// Path syntax rules applied when tokenizing.
///
/// # Examples
///
/// ```
/// use pathwalk::Style;
///
/// assert_eq!(Style::default(), Style::Unix);
/// assert_eq!(Style::Unix.separator(), '/');
/// assert_eq!(Style::Windows.separator(), '\\');
/// assert!(Style::Windows.is_separator(b'/'));
/// assert!(!Style::Unix.is_separator(b'\\'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Unix rules: `/` separates segments and a leading `/` is the root.
    #[default]
    Unix,

    /// Windows rules: `\` separates segments (`/` is accepted as an
    /// alternate separator), and drive letters, UNC host prefixes, and
    /// `\\?\`/`\\.\` device prefixes form a root.
    Windows,
}

impl Style {
    /// Returns the primary separator, used when building output paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Returns true if `byte` separates segments under this style.
    ///
    /// Separators are ASCII in both styles, so classification works on raw
    /// bytes even inside multi-byte UTF-8 sequences.
    #[must_use]
    pub const fn is_separator(self, byte: u8) -> bool {
        match self {
            Self::Unix => byte == b'/',
            Self::Windows => byte == b'\\' || byte == b'/',
        }
    }

    /// Parses a style from a string.
    ///
    /// Recognizes: "unix", "windows" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Style;
    ///
    /// assert_eq!(Style::parse("unix").unwrap(), Style::Unix);
    /// assert_eq!(Style::parse("Windows").unwrap(), Style::Windows);
    /// assert!(Style::parse("vms").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
