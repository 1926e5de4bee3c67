//! Goal seeking by bisection
//!
//! Drives one named model output to a target value by bisecting one named
//! model input over a caller-supplied bracket. The bracket must straddle the
//! target: if the target-shifted output has the same sign at both ends, no
//! root is guaranteed and none is searched for.
//!
//! "No root in this bracket" is an anticipatable outcome, not a fault, so
//! it is reported through [`GoalSeekResult`] rather than an error. Errors
//! are reserved for unknown parameter or output names.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::Model;

/// Default iteration cap for [`GoalSeekSpec`]
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Progress callback for goal seeking
///
/// Arguments: (iteration, midpoint, output value at the midpoint)
pub type ProgressCallback = Box<dyn Fn(usize, f64, f64) + Send + Sync>;

/// One goal-seek problem: which output to drive where, over which input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSeekSpec {
    /// Output to drive to `target`
    pub output: String,
    /// Target value for `output`
    pub target: f64,
    /// Input to search over
    pub input: String,
    /// Lower end of the search bracket
    pub lower: f64,
    /// Upper end of the search bracket
    pub upper: f64,
    /// Iteration cap; exhausting it yields the final midpoint, not an error
    pub max_iterations: usize,
}

impl GoalSeekSpec {
    /// Create a spec with the default iteration cap
    #[must_use]
    pub fn new(
        output: impl Into<String>,
        target: f64,
        input: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Self {
        Self {
            output: output.into(),
            target,
            input: input.into(),
            lower,
            upper,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the iteration cap
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Why a goal-seek run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The midpoint output hit the target exactly
    ExactHit,
    /// The iteration cap ran out; the final midpoint is the best effort
    IterationLimitReached,
    /// The bracket never straddled the target; the search was not entered
    InvalidBracket,
    /// Neither half of the interval showed a sign change mid-search
    BisectionFailed,
}

/// One recorded bisection iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionRecord {
    pub iteration: usize,
    pub lower: f64,
    pub upper: f64,
    pub midpoint: f64,
    pub width: f64,
}

/// Result of a goal-seek run.
///
/// `solution` is `Some` for the two success terminals (`ExactHit`,
/// `IterationLimitReached`) and `None` for the two not-found terminals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSeekResult {
    /// The input value found, if the search succeeded
    pub solution: Option<f64>,
    /// Why the run stopped
    pub termination: TerminationReason,
    /// Bisection iterations performed (0 when the bracket was invalid)
    pub iterations: usize,
    /// Per-iteration trace of the shrinking bracket
    pub history: Vec<BisectionRecord>,
}

impl GoalSeekResult {
    /// Check whether a solution value was produced
    #[must_use]
    pub fn found(&self) -> bool {
        self.solution.is_some()
    }

    fn not_found(termination: TerminationReason, iterations: usize, history: Vec<BisectionRecord>) -> Self {
        Self {
            solution: None,
            termination,
            iterations,
            history,
        }
    }
}

/// Bisect `spec.input` over `[spec.lower, spec.upper]` until `spec.output`
/// reaches `spec.target`.
///
/// All evaluation happens on a single retained clone of `model`; each
/// evaluation overwrites the previous input setting in place. The caller's
/// model is never mutated.
///
/// The branch order per iteration is: left-half sign change, right-half
/// sign change, exact midpoint hit, failure. The exact-equality branch is
/// deliberate — it rarely fires with continuous models, but replacing it
/// with a tolerance would change termination behavior for degenerate cases.
pub fn goal_seek<M: Model>(
    model: &M,
    spec: &GoalSeekSpec,
    progress: Option<ProgressCallback>,
) -> Result<GoalSeekResult, ModelError> {
    let mut probe = model.clone_model();

    let eval = |probe: &mut M, x: f64| -> Result<f64, ModelError> {
        probe.set(&spec.input, x)?;
        probe.output(&spec.output)
    };

    let mut lower = spec.lower;
    let mut upper = spec.upper;

    // Bracket precondition on the target-shifted endpoints
    let f_lower = eval(&mut probe, lower)? - spec.target;
    let f_upper = eval(&mut probe, upper)? - spec.target;
    if f_lower * f_upper >= 0.0 {
        return Ok(GoalSeekResult::not_found(
            TerminationReason::InvalidBracket,
            0,
            Vec::new(),
        ));
    }

    let mut history = Vec::with_capacity(spec.max_iterations);

    for iteration in 1..=spec.max_iterations {
        let midpoint = f64::midpoint(lower, upper);
        let f_a = eval(&mut probe, lower)? - spec.target;
        let f_m = eval(&mut probe, midpoint)? - spec.target;
        let f_b = eval(&mut probe, upper)? - spec.target;

        history.push(BisectionRecord {
            iteration,
            lower,
            upper,
            midpoint,
            width: upper - lower,
        });

        if let Some(ref callback) = progress {
            callback(iteration, midpoint, f_m + spec.target);
        }

        if f_a * f_m < 0.0 {
            // Sign change in [lower, midpoint]
            upper = midpoint;
        } else if f_b * f_m < 0.0 {
            // Sign change in [midpoint, upper]
            lower = midpoint;
        } else if f_m == 0.0 {
            return Ok(GoalSeekResult {
                solution: Some(midpoint),
                termination: TerminationReason::ExactHit,
                iterations: iteration,
                history,
            });
        } else {
            // No sign change in either half and no exact hit
            return Ok(GoalSeekResult::not_found(
                TerminationReason::BisectionFailed,
                iteration,
                history,
            ));
        }
    }

    Ok(GoalSeekResult {
        solution: Some(f64::midpoint(lower, upper)),
        termination: TerminationReason::IterationLimitReached,
        iterations: spec.max_iterations,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = GoalSeekSpec::new("profit", 0.0, "order_quantity", 0.0, 1000.0);
        assert_eq!(spec.max_iterations, DEFAULT_MAX_ITERATIONS);

        let spec = spec.max_iterations(12);
        assert_eq!(spec.max_iterations, 12);
    }
}
