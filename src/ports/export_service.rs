//! Export Service Port - structured table rendering interface.
//!
//! The engines produce typed results; this port defines the contract
//! for turning them into row-and-column form for whatever frontend or
//! file format sits outside. Cells stay as separate strings so no
//! consumer ever has to re-split a joined line.

use serde::{Deserialize, Serialize};

use crate::domain::compatibility::CompatibilityResult;
use crate::domain::scenario::{ScenarioResult, SensitivityDelta};

/// A rendered table: one header row plus data rows, every cell its
/// own string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Port for rendering engine output as structured tables.
///
/// # Contract
///
/// Implementations must:
/// - Emit one row per result, in the order given
/// - Keep every cell a separate string (no delimiter-joined lines)
/// - Render numbers with fixed display precision
pub trait ExportService: Send + Sync {
    /// Renders ranked compatibility results.
    fn compatibility_table(&self, results: &[CompatibilityResult]) -> ExportTable;

    /// Renders evaluated scenarios.
    fn scenario_table(&self, results: &[ScenarioResult]) -> ExportTable;

    /// Renders the sensitivity deltas around a reference scenario.
    fn sensitivity_table(&self, deltas: &[SensitivityDelta]) -> ExportTable;
}
