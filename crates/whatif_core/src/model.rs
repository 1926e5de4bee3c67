//! Model capability contract
//!
//! The analysis routines are polymorphic over any type that exposes settable
//! named parameters and zero-argument named outputs. A concrete model keeps
//! an explicit, enumerated set of names and dispatches through them; nothing
//! here inspects a model beyond this contract.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, SpecError};

/// A mutable bag of named scalar parameters plus named derived outputs.
///
/// Outputs must be pure functions of current parameter state. Every analysis
/// entry point clones the caller's model before mutating, so implementers
/// must guarantee that `clone_model` is a value-semantics deep copy:
/// mutating the clone never affects the original.
pub trait Model {
    /// Set a named parameter to a scalar value.
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError>;

    /// Read a named parameter's current value.
    fn get(&self, name: &str) -> Result<f64, ModelError>;

    /// Compute a named output from current parameter state.
    fn output(&self, name: &str) -> Result<f64, ModelError>;

    /// Names of all settable parameters, in declaration order.
    fn parameter_names(&self) -> &[&'static str];

    /// Independent deep copy of this model.
    fn clone_model(&self) -> Self
    where
        Self: Sized;

    /// Batch evaluation: one output value per replication.
    ///
    /// For replication `i`, every column in `draws` supplies its `i`-th
    /// value as the corresponding parameter; the output is evaluated under
    /// that joint assignment. Columns must already be validated to equal
    /// length (the simulation runner does this before any evaluation).
    ///
    /// The default implementation loops over replications in scalar mode.
    /// Models that can compute an output elementwise over whole sequences
    /// may override this with a vectorized computation; the simulation
    /// runner always calls this form, exactly once per requested output.
    fn output_batch(&mut self, name: &str, draws: &RandomInputs) -> Result<Vec<f64>, ModelError> {
        let replications = draws.replications();
        let mut values = Vec::with_capacity(replications);
        for rep in 0..replications {
            for (input, sequence) in draws.iter() {
                self.set(input, sequence[rep])?;
            }
            values.push(self.output(name)?);
        }
        Ok(values)
    }
}

/// Pre-drawn random-input sequences, one column per parameter.
///
/// All columns must have the same length `n`; row `i` across columns forms
/// one replication's joint input. Columns are zipped, never cross-produced
/// against each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomInputs {
    columns: Vec<(String, Vec<f64>)>,
}

impl RandomInputs {
    /// Create an empty set of random inputs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column of pre-drawn values for one parameter
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push((name.into(), values));
        self
    }

    /// Check if no columns are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of replications, taken from the first column (0 if none)
    #[must_use]
    pub fn replications(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// Iterate over `(name, values)` columns in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate over column names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Look up the values drawn for one parameter
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Validate that all columns have equal length, returning that length.
    pub fn validate(&self) -> Result<usize, SpecError> {
        let expected = self.replications();
        for (name, values) in &self.columns {
            if values.len() != expected {
                return Err(SpecError::MismatchedLengths {
                    name: name.clone(),
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(expected)
    }
}

/// A parameter value as recorded in a provenance snapshot.
///
/// Parameters hold scalars during evaluation; a snapshot taken with
/// `keep_random_inputs` substitutes the full drawn sequence for each
/// randomized parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Scalar(f64),
    Series(Vec<f64>),
}

/// Read back every declared parameter of a model as `(name, value)` pairs.
pub fn parameter_snapshot<M: Model>(model: &M) -> Result<Vec<(String, f64)>, ModelError> {
    let mut snapshot = Vec::with_capacity(model.parameter_names().len());
    for &name in model.parameter_names() {
        snapshot.push((name.to_string(), model.get(name)?));
    }
    Ok(snapshot)
}
