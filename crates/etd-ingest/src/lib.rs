pub mod export;

pub use export::{EXPORT_COLUMNS, ExportReader};
