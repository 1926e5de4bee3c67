//! What-if analysis library
//!
//! This crate provides the three classic spreadsheet-style analysis routines
//! over an arbitrary user-supplied model:
//! - Data tables: evaluate outputs over the Cartesian product of candidate
//!   input values
//! - Goal seeking: bisect one input to drive one output to a target value
//! - Simulation: compose pre-drawn random-input sequences with an optional
//!   deterministic scenario sweep, one result group per scenario point
//!
//! A model is any type implementing the [`Model`] contract: settable named
//! parameters, zero-argument named outputs, and a value-semantics clone.
//! The analysis routines never mutate the caller's model instance and never
//! generate randomness themselves — random sequences are drawn by the
//! caller and passed in.
//!
//! # Example
//!
//! ```ignore
//! use whatif_core::{ScenarioSpec, SimulationSpec, data_table, simulate, flatten};
//!
//! let rows = data_table(
//!     &model,
//!     &ScenarioSpec::new()
//!         .values("order_quantity", vec![150.0, 200.0, 250.0])
//!         .values("selling_price", vec![9.0, 10.0]),
//!     &["profit"],
//! )?;
//!
//! let groups = simulate(
//!     &model,
//!     &SimulationSpec::new()
//!         .random_input("demand", demand_draws)
//!         .output("profit")
//!         .scenarios(ScenarioSpec::new().values("order_quantity", vec![150.0, 250.0])),
//! )?;
//! let table = flatten(&groups);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod data_table;
pub mod error;
pub mod goal_seek;
pub mod model;
pub mod scenario;
pub mod simulate;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{DEFAULT_PERCENTILES, SimulationRow, SummaryStats, flatten, summarize_output};
pub use data_table::{DataTableRow, data_table};
pub use error::{AnalysisError, ModelError, SpecError};
pub use goal_seek::{
    BisectionRecord, DEFAULT_MAX_ITERATIONS, GoalSeekResult, GoalSeekSpec, ProgressCallback,
    TerminationReason, goal_seek,
};
pub use model::{Model, ParamValue, RandomInputs, parameter_snapshot};
pub use scenario::{ScenarioPoint, ScenarioSpec};
pub use simulate::{ScenarioGroup, SimulationSpec, simulate};
