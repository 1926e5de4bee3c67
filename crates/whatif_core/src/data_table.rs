//! Data table evaluation
//!
//! Evaluates requested outputs at every point of a scenario grid, one row
//! per point, in grid enumeration order. The caller's model is cloned
//! before any mutation and the clone is discarded afterwards, so a data
//! table call has no visible side effects.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::Model;
use crate::scenario::{ScenarioPoint, ScenarioSpec};

/// One evaluated scenario point: its assignments plus the recorded outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTableRow {
    /// The scenario point that produced this row
    pub scenario: ScenarioPoint,
    /// Requested outputs as `(name, value)` pairs, in request order
    pub outputs: Vec<(String, f64)>,
}

impl DataTableRow {
    /// Look up one recorded output by name
    #[must_use]
    pub fn output(&self, name: &str) -> Option<f64> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }
}

/// Evaluate `outputs` at every point of the scenario grid.
///
/// Any unknown parameter or output name fails the whole call; no partial
/// rows are returned. Rows come back in the grid's enumeration order
/// regardless of evaluation order.
pub fn data_table<M>(
    model: &M,
    scenarios: &ScenarioSpec,
    outputs: &[&str],
) -> Result<Vec<DataTableRow>, AnalysisError>
where
    M: Model + Sync,
{
    let points = scenarios.expand()?;

    // Scenario points are independent: each evaluation touches only its own
    // clone, and the indexed collect keeps rows in grid order.
    #[cfg(feature = "parallel")]
    let rows: Vec<Result<DataTableRow, AnalysisError>> = points
        .par_iter()
        .map(|point| {
            let mut probe = model.clone_model();
            evaluate_row(&mut probe, point, outputs)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Result<DataTableRow, AnalysisError>> = {
        let mut probe = model.clone_model();
        points
            .iter()
            .map(|point| evaluate_row(&mut probe, point, outputs))
            .collect()
    };

    rows.into_iter().collect()
}

fn evaluate_row<M: Model>(
    probe: &mut M,
    point: &ScenarioPoint,
    outputs: &[&str],
) -> Result<DataTableRow, AnalysisError> {
    for (name, value) in point.iter() {
        probe.set(name, value)?;
    }

    let mut recorded = Vec::with_capacity(outputs.len());
    for &name in outputs {
        recorded.push((name.to_string(), probe.output(name)?));
    }

    Ok(DataTableRow {
        scenario: point.clone(),
        outputs: recorded,
    })
}
