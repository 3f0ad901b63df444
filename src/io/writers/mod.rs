//! Writers for the annotated output table.
pub mod csv;

pub use csv::{OUTPUT_COLUMNS, write_classified_csv};
