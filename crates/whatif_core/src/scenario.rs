//! Scenario grid expansion
//!
//! A scenario specification maps parameter names to ordered candidate value
//! lists; expansion produces the full Cartesian product as concrete scenario
//! points. Expansion is unbounded by design — a specification with keys of
//! sizes n₁…nₖ produces ∏nᵢ points, so callers declaring large sweeps own
//! the blow-up.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Ordered mapping from parameter name to candidate values for a sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    entries: Vec<(String, Vec<f64>)>,
}

impl ScenarioSpec {
    /// Create an empty specification (expands to a single empty point)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare candidate values for one parameter
    #[must_use]
    pub fn values(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.entries.push((name.into(), values));
        self
    }

    /// Number of declared keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no keys are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of points the specification expands to
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, values)| values.len())
            .product()
    }

    /// Expand into the full Cartesian product of scenario points.
    ///
    /// Enumeration is deterministic nested iteration with the rightmost key
    /// varying fastest. The empty specification yields exactly one empty
    /// point (the base case, no sweep). A key with an empty value list is
    /// rejected rather than silently dropped.
    pub fn expand(&self) -> Result<Vec<ScenarioPoint>, SpecError> {
        for (name, values) in &self.entries {
            if values.is_empty() {
                return Err(SpecError::EmptyScenarioValues(name.clone()));
            }
        }

        let sizes: Vec<usize> = self.entries.iter().map(|(_, v)| v.len()).collect();
        let mut points = Vec::with_capacity(self.point_count());
        let mut indices = vec![0usize; self.entries.len()];

        loop {
            let assignments = self
                .entries
                .iter()
                .zip(indices.iter())
                .map(|((name, values), &idx)| (name.clone(), values[idx]))
                .collect();
            points.push(ScenarioPoint { assignments });

            // Odometer increment, rightmost digit first
            let mut wrapped = true;
            for dim in (0..indices.len()).rev() {
                indices[dim] += 1;
                if indices[dim] < sizes[dim] {
                    wrapped = false;
                    break;
                }
                indices[dim] = 0;
            }
            if wrapped {
                break;
            }
        }

        Ok(points)
    }
}

/// One concrete assignment of values to the specification's keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    assignments: Vec<(String, f64)>,
}

impl ScenarioPoint {
    /// The empty point — no scenario sweep in force
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if this is the empty point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of assigned keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Iterate over `(name, value)` assignments in key declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.assignments
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Look up the value assigned to one key
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_key() {
        let spec = ScenarioSpec::new().values("q", vec![1.0, 2.0, 3.0]);
        let points = spec.expand().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].get("q"), Some(1.0));
        assert_eq!(points[2].get("q"), Some(3.0));
    }

    #[test]
    fn test_expand_two_keys_rightmost_fastest() {
        let spec = ScenarioSpec::new()
            .values("a", vec![1.0, 2.0])
            .values("b", vec![10.0, 20.0]);
        let points = spec.expand().unwrap();
        assert_eq!(points.len(), 4);

        let pairs: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (p.get("a").unwrap(), p.get("b").unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![(1.0, 10.0), (1.0, 20.0), (2.0, 10.0), (2.0, 20.0)]
        );
    }

    #[test]
    fn test_expand_three_keys_count() {
        let spec = ScenarioSpec::new()
            .values("a", vec![1.0, 2.0])
            .values("b", vec![1.0, 2.0, 3.0])
            .values("c", vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(spec.point_count(), 24);

        let points = spec.expand().unwrap();
        assert_eq!(points.len(), 24);

        // Every combination is distinct
        let mut seen: Vec<Vec<(String, f64)>> = Vec::new();
        for point in &points {
            let key: Vec<(String, f64)> = point
                .iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect();
            assert!(!seen.contains(&key));
            seen.push(key);
        }
    }

    #[test]
    fn test_expand_empty_spec_yields_one_empty_point() {
        let points = ScenarioSpec::new().expand().unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].is_empty());
    }

    #[test]
    fn test_expand_rejects_empty_values() {
        let spec = ScenarioSpec::new()
            .values("a", vec![1.0])
            .values("b", vec![]);
        assert_eq!(
            spec.expand(),
            Err(SpecError::EmptyScenarioValues("b".to_string()))
        );
    }
}
