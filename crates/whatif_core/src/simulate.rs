//! Simulation runner
//!
//! Composes pre-drawn random-input sequences with an optional deterministic
//! scenario grid. Random inputs vary together across replications (zipped);
//! scenario inputs sweep combinatorially on top. The two dimensions stay
//! orthogonal: a run with n replications and k scenario points yields k
//! groups of n rows, never an n×k flat sweep.
//!
//! The runner itself never loops over replications — it loops over scenario
//! points and calls the model's batch evaluation once per requested output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{Model, ParamValue, RandomInputs};
use crate::scenario::{ScenarioPoint, ScenarioSpec};

/// One simulation run: random inputs, requested outputs, optional sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSpec {
    /// Pre-drawn random sequences, one value per replication
    pub random_inputs: RandomInputs,
    /// Outputs to evaluate per scenario point
    pub outputs: Vec<String>,
    /// Optional deterministic sweep layered on top of the random inputs
    pub scenarios: Option<ScenarioSpec>,
    /// Record drawn sequences (instead of base scalars) in the snapshot
    pub keep_random_inputs: bool,
}

impl SimulationSpec {
    /// Create an empty simulation spec
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one column of pre-drawn random values
    #[must_use]
    pub fn random_input(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.random_inputs = self.random_inputs.column(name, values);
        self
    }

    /// Request one output
    #[must_use]
    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(name.into());
        self
    }

    /// Layer a deterministic scenario sweep on top of the random inputs
    #[must_use]
    pub fn scenarios(mut self, scenarios: ScenarioSpec) -> Self {
        self.scenarios = Some(scenarios);
        self
    }

    /// Record the drawn random sequences in the provenance snapshot
    #[must_use]
    pub fn keep_random_inputs(mut self, keep: bool) -> Self {
        self.keep_random_inputs = keep;
        self
    }
}

/// One scenario point's full set of replication results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGroup {
    /// 0-based position in the scenario grid's enumeration order
    pub scenario_index: usize,
    /// The scenario point in force for this group
    pub scenario: ScenarioPoint,
    /// Parameter values in force before randomization, for provenance
    pub base_parameters: Vec<(String, ParamValue)>,
    /// Requested outputs, each holding one value per replication
    pub outputs: Vec<(String, Vec<f64>)>,
    /// Number of replications in this group
    pub replications: usize,
}

impl ScenarioGroup {
    /// Look up one output's replication values by name
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&[f64]> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Run the simulation described by `spec` against a clone of `model`.
///
/// Produces one [`ScenarioGroup`] per scenario point, in grid enumeration
/// order; with no scenario sweep there is exactly one group under the empty
/// point. Unknown names and malformed specs fail the whole call before any
/// group is produced.
pub fn simulate<M>(model: &M, spec: &SimulationSpec) -> Result<Vec<ScenarioGroup>, AnalysisError>
where
    M: Model + Sync,
{
    let replications = spec.random_inputs.validate()?;

    // Surface unknown random-input names up front, not mid-evaluation
    for name in spec.random_inputs.names() {
        model.get(name)?;
    }

    let base_parameters = provenance_snapshot(model, spec)?;

    let points = match &spec.scenarios {
        Some(scenarios) => scenarios.expand()?,
        None => vec![ScenarioPoint::empty()],
    };

    #[cfg(feature = "parallel")]
    let groups: Vec<Result<ScenarioGroup, AnalysisError>> = points
        .par_iter()
        .enumerate()
        .map(|(index, point)| {
            let mut probe = model.clone_model();
            evaluate_group(&mut probe, index, point, spec, &base_parameters, replications)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let groups: Vec<Result<ScenarioGroup, AnalysisError>> = {
        let mut probe = model.clone_model();
        points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                evaluate_group(&mut probe, index, point, spec, &base_parameters, replications)
            })
            .collect()
    };

    groups.into_iter().collect()
}

/// Snapshot of every declared parameter, shared by all result groups.
///
/// With `keep_random_inputs`, randomized parameters record their full drawn
/// sequence; otherwise every parameter records the original model's scalar.
fn provenance_snapshot<M: Model>(
    model: &M,
    spec: &SimulationSpec,
) -> Result<Vec<(String, ParamValue)>, AnalysisError> {
    let mut snapshot = Vec::with_capacity(model.parameter_names().len());
    for &name in model.parameter_names() {
        let value = match spec.random_inputs.values(name) {
            Some(series) if spec.keep_random_inputs => ParamValue::Series(series.to_vec()),
            _ => ParamValue::Scalar(model.get(name)?),
        };
        snapshot.push((name.to_string(), value));
    }
    Ok(snapshot)
}

fn evaluate_group<M: Model>(
    probe: &mut M,
    index: usize,
    point: &ScenarioPoint,
    spec: &SimulationSpec,
    base_parameters: &[(String, ParamValue)],
    replications: usize,
) -> Result<ScenarioGroup, AnalysisError> {
    for (name, value) in point.iter() {
        probe.set(name, value)?;
    }

    let mut outputs = Vec::with_capacity(spec.outputs.len());
    for name in &spec.outputs {
        let values = probe.output_batch(name, &spec.random_inputs)?;
        outputs.push((name.clone(), values));
    }

    Ok(ScenarioGroup {
        scenario_index: index,
        scenario: point.clone(),
        base_parameters: base_parameters.to_vec(),
        outputs,
        replications,
    })
}
