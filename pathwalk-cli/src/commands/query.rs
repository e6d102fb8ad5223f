//! Commands that extract or classify a component of a single path.

use clap::Args;

use crate::commands::emit_component;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Print the final segment of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    pub path: String,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(pathwalk::basename(&self.path, global.style))
    }
}

/// Print the portion of a path before its final segment.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(pathwalk::dirname(&self.path, global.style))
    }
}

/// Print the extension of a path's basename.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Path to inspect
    pub path: String,
}

impl ExtensionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(pathwalk::extension(&self.path, global.style))
    }
}

/// Print a path's basename with its extension removed.
#[derive(Args)]
pub struct NameCommand {
    /// Path to inspect
    pub path: String,
}

impl NameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(pathwalk::name(&self.path, global.style))
    }
}

/// Print the root of a path.
#[derive(Args)]
pub struct RootCommand {
    /// Path to inspect
    pub path: String,
}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(pathwalk::root(&self.path, global.style))
    }
}

/// Print 1 if a path is absolute, 0 otherwise.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to classify
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", u8::from(pathwalk::is_absolute(&self.path, global.style)));
        Ok(())
    }
}

/// Print 1 if a path is relative, 0 otherwise.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to classify
    pub path: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", u8::from(pathwalk::is_relative(&self.path, global.style)));
        Ok(())
    }
}

/// Print the segment at a signed index.
#[derive(Args)]
pub struct SegmentAtCommand {
    /// Path to inspect
    pub path: String,

    /// Signed segment index; 0 is the first segment, -1 the last
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

impl SegmentAtCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_component(
            pathwalk::segment_at(&self.path, self.index, global.style).map(|s| s.as_str()),
        )
    }
}
