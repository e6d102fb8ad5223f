//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including the global style and verbosity options and the subcommands.

use crate::commands::{
    AbsoluteCommand, BasenameCommand, DirnameCommand, ExtensionCommand, IntersectionCommand,
    JoinCommand, NameCommand, NormalizeCommand, RelativeCommand, RootCommand, SegmentAtCommand,
    SegmentsCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use pathwalk::Style;

/// Command-line tool for inspecting and transforming filesystem-style
/// paths without touching the filesystem.
#[derive(Parser)]
#[command(name = "pathwalk")]
#[command(version, about = "Inspect and transform filesystem-style paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path syntax rules to parse with
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = StyleArg::Unix,
        env = "PATHWALK_STYLE"
    )]
    pub style: StyleArg,

    #[command(subcommand)]
    pub command: Command,
}

/// Values accepted by the global `--style` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// `/` separates segments; a leading `/` is the root
    Unix,
    /// `\` (or `/`) separates segments; drives and UNC prefixes form roots
    Windows,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Unix => Style::Unix,
            StyleArg::Windows => Style::Windows,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the final segment of a path
    Basename(BasenameCommand),

    /// Print the portion of a path before its final segment
    Dirname(DirnameCommand),

    /// Print the extension of a path's basename, including the dot
    Extension(ExtensionCommand),

    /// Print a path's basename with its extension removed
    Name(NameCommand),

    /// Print the root of a path
    Root(RootCommand),

    /// Print 1 if a path is absolute, 0 otherwise
    Absolute(AbsoluteCommand),

    /// Print 1 if a path is relative, 0 otherwise
    Relative(RelativeCommand),

    /// Print the segment at a signed index (-1 is the last segment)
    SegmentAt(SegmentAtCommand),

    /// Join two or more paths
    Join(JoinCommand),

    /// Resolve `.` and `..` segments and collapse separators
    Normalize(NormalizeCommand),

    /// Print the common leading prefix of two paths
    Intersection(IntersectionCommand),

    /// List a path's segments as rows
    Segments(SegmentsCommand),
}
