//! Export adapters.

mod table_export;

pub use table_export::TableExporter;
