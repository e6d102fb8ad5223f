//! Shared state for command execution.

use pathwalk::{Logger, Style};

/// Options derived from the global CLI flags, shared by every command.
pub struct GlobalOptions {
    /// Path syntax rules to parse with.
    pub style: Style,

    /// Logger configured from the verbosity flags.
    pub logger: Logger,
}
