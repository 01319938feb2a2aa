//! Ports - interfaces for the outside world.
//!
//! Following hexagonal architecture, ports define the contracts
//! between the decision engines and whatever presents their output.
//! Adapters implement these ports.
//!
//! - `ExportService` - Port for rendering results as structured tables

mod export_service;

pub use export_service::{ExportService, ExportTable};
