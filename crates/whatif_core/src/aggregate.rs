//! Result aggregation and summary statistics
//!
//! Flattens the simulation runner's grouped output into one tabular
//! structure, one row per (scenario, replication) pair, preserving group
//! order and replication order. Summary statistics over an output's
//! replication values support the usual mean / spread / percentile view.

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioPoint;
use crate::simulate::ScenarioGroup;

/// Percentiles reported by default: P5, P50, P95
pub const DEFAULT_PERCENTILES: [f64; 3] = [0.05, 0.50, 0.95];

/// One (scenario, replication) outcome in flattened form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    /// Index of the group this row came from
    pub scenario_index: usize,
    /// 0-based replication index within the group
    pub replication: usize,
    /// The group's scenario point, repeated across its replications
    pub scenario: ScenarioPoint,
    /// Scalar output values for this replication, in request order
    pub outputs: Vec<(String, f64)>,
}

impl SimulationRow {
    /// Look up one output value by name
    #[must_use]
    pub fn output(&self, name: &str) -> Option<f64> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }
}

/// Flatten result groups into one row per (scenario, replication) pair.
///
/// Groups appear in input order and replications within a group keep their
/// original sequence order, so row count is the sum of group replication
/// counts.
#[must_use]
pub fn flatten(groups: &[ScenarioGroup]) -> Vec<SimulationRow> {
    let total: usize = groups.iter().map(|g| g.replications).sum();
    let mut rows = Vec::with_capacity(total);

    for group in groups {
        for replication in 0..group.replications {
            let outputs = group
                .outputs
                .iter()
                .map(|(name, values)| (name.clone(), values[replication]))
                .collect();
            rows.push(SimulationRow {
                scenario_index: group.scenario_index,
                replication,
                scenario: group.scenario.clone(),
                outputs,
            });
        }
    }

    rows
}

/// Descriptive statistics over one output's replication values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of values summarized
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 for fewer than two values)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Requested percentiles as `(percentile, value)` pairs
    pub percentile_values: Vec<(f64, f64)>,
}

impl SummaryStats {
    /// Summarize a slice of values at the requested percentiles.
    ///
    /// An empty slice yields zeroed statistics with no percentile values.
    #[must_use]
    pub fn from_values(values: &[f64], percentiles: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                percentile_values: Vec::new(),
            };
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;

        let std_dev = if count > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let percentile_values = percentiles
            .iter()
            .map(|&p| (p, percentile_of_sorted(&sorted, p)))
            .collect();

        Self {
            count,
            mean,
            std_dev,
            min,
            max,
            percentile_values,
        }
    }

    /// Look up one requested percentile's value
    #[must_use]
    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.percentile_values
            .iter()
            .find(|(requested, _)| (requested - p).abs() < 1e-9)
            .map(|(_, value)| *value)
    }
}

/// Summarize one output of a result group at the requested percentiles.
#[must_use]
pub fn summarize_output(
    group: &ScenarioGroup,
    name: &str,
    percentiles: &[f64],
) -> Option<SummaryStats> {
    group
        .output(name)
        .map(|values| SummaryStats::from_values(values, percentiles))
}

/// Linear interpolation between adjacent order statistics.
fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        sorted[below] + (rank - below as f64) * (sorted[above] - sorted[below])
    }
}
