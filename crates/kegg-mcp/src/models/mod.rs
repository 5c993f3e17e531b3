//! Data models for KEGG entities and tool inputs.
//!
//! Identifiers are newtypes validated at construction; records use
//! `#[serde(rename = ...)]` to keep the column names callers expect.

mod batch;
mod drug;
mod enums;
mod ids;
mod inputs;

pub use batch::{BatchOutcome, BatchRow, DrugTableRow};
pub use drug::{DrugRecord, NOT_FOUND};
pub use enums::{OutputFormat, ResponseFormat};
pub use ids::{DrugId, PathwayId};
pub use inputs::*;
