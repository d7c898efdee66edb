//! Data models for catalog service responses.
//!
//! Every record is an immutable value deserialized verbatim from the catalog
//! service. Models also serialize so they can be handed to templates or
//! printed by the CLI.

mod common;
mod finishes;
mod hardware;
mod materials;

pub use common::{ApiResponse, AppVersion};
pub use finishes::{FinishOption, Swatch};
pub use hardware::{Hardware, HardwareDescription};
pub use materials::{DatasheetEntry, DatasheetEntryType, Marketing, Material};
