//! Command implementations.

mod query;
mod segments;
mod transform;

pub use query::{
    AbsoluteCommand, BasenameCommand, DirnameCommand, ExtensionCommand, NameCommand,
    RelativeCommand, RootCommand, SegmentAtCommand,
};
pub use segments::SegmentsCommand;
pub use transform::{IntersectionCommand, JoinCommand, NormalizeCommand};

use crate::error::CliError;

/// Prints an extracted component, or fails with [`CliError::NoResult`]
/// when the path has no such component.
pub(crate) fn emit_component(value: Option<&str>) -> Result<(), CliError> {
    match value {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => Err(CliError::NoResult),
    }
}
