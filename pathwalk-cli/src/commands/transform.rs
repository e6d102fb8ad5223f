//! Commands that build a new path from their inputs.

use clap::Args;

use crate::commands::emit_component;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Join two or more paths.
#[derive(Args)]
pub struct JoinCommand {
    /// Paths to join, left to right; an absolute right operand replaces
    /// everything joined so far
    #[arg(required = true, num_args = 2..)]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parts: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        let joined = pathwalk::join(&parts, global.style)?;
        global
            .logger
            .debug(&format!("joined {} paths", parts.len()));
        println!("{joined}");
        Ok(())
    }
}

/// Resolve `.` and `..` segments and collapse separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalized = pathwalk::normalize(&self.path, global.style)?;
        println!("{normalized}");
        Ok(())
    }
}

/// Print the common leading prefix of two paths.
#[derive(Args)]
pub struct IntersectionCommand {
    /// First path
    pub base: String,

    /// Second path
    pub other: String,
}

impl IntersectionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let len = pathwalk::intersection(&self.base, &self.other);
        if len == 0 {
            return Err(CliError::NoResult);
        }
        emit_component(Some(&self.base[..len]))
    }
}
