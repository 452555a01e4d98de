//! The textual bridge: command JSON (SNBT) emission and parsing (spec §4.6,
//! §4.7). Split into `emit`/`parse` the way the binary codec is split into
//! `encode`/`decode`.

mod emit;
mod parse;

pub use emit::{to_command_json, to_command_json_named, KeyOrder};
pub use parse::parse_command_json;

use crate::tag::Tag;

impl Tag {
    /// Renders this tag as command JSON with no name prefix, ordering a
    /// Compound's keys according to `order`.
    pub fn to_command_json(&self, order: KeyOrder) -> String {
        to_command_json(self, &order)
    }
}
