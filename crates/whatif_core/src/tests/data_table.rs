//! Tests for scenario grid evaluation
//!
//! These tests verify that:
//! - Every grid point produces exactly one row, in enumeration order
//! - Recorded scenario values match the outputs they produced
//! - Unknown names fail the whole call with no partial rows
//! - The caller's model is never mutated

use super::SumModel;
use crate::data_table::data_table;
use crate::error::{AnalysisError, ModelError, SpecError};
use crate::scenario::ScenarioSpec;

#[test]
fn test_two_by_two_grid() {
    let model = SumModel { a: 0.0, b: 0.0 };
    let spec = ScenarioSpec::new()
        .values("a", vec![1.0, 2.0])
        .values("b", vec![10.0, 20.0]);

    let rows = data_table(&model, &spec, &["sum"]).unwrap();
    assert_eq!(rows.len(), 4);

    let sums: Vec<f64> = rows.iter().map(|r| r.output("sum").unwrap()).collect();
    assert_eq!(sums, vec![11.0, 21.0, 12.0, 22.0]);

    // Each row's recorded scenario values match its sum
    for row in &rows {
        let a = row.scenario.get("a").unwrap();
        let b = row.scenario.get("b").unwrap();
        assert_eq!(row.output("sum").unwrap(), a + b);
    }
}

#[test]
fn test_outputs_in_request_order() {
    let model = SumModel { a: 0.0, b: 0.0 };
    let spec = ScenarioSpec::new().values("a", vec![3.0]).values("b", vec![4.0]);

    let rows = data_table(&model, &spec, &["product", "sum"]).unwrap();
    assert_eq!(
        rows[0].outputs,
        vec![("product".to_string(), 12.0), ("sum".to_string(), 7.0)]
    );
}

#[test]
fn test_empty_spec_evaluates_base_case() {
    let model = SumModel { a: 2.0, b: 5.0 };
    let rows = data_table(&model, &ScenarioSpec::new(), &["sum"]).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].scenario.is_empty());
    assert_eq!(rows[0].output("sum"), Some(7.0));
}

#[test]
fn test_unknown_output_fails_whole_call() {
    let model = SumModel { a: 0.0, b: 0.0 };
    let spec = ScenarioSpec::new().values("a", vec![1.0, 2.0]);

    let result = data_table(&model, &spec, &["sum", "missing"]);
    assert_eq!(
        result,
        Err(AnalysisError::Model(ModelError::UnknownOutput(
            "missing".to_string()
        )))
    );
}

#[test]
fn test_unknown_parameter_fails_whole_call() {
    let model = SumModel { a: 0.0, b: 0.0 };
    let spec = ScenarioSpec::new().values("c", vec![1.0]);

    let result = data_table(&model, &spec, &["sum"]);
    assert_eq!(
        result,
        Err(AnalysisError::Model(ModelError::UnknownParameter(
            "c".to_string()
        )))
    );
}

#[test]
fn test_empty_value_list_rejected() {
    let model = SumModel { a: 0.0, b: 0.0 };
    let spec = ScenarioSpec::new().values("a", vec![]);

    let result = data_table(&model, &spec, &["sum"]);
    assert_eq!(
        result,
        Err(AnalysisError::Spec(SpecError::EmptyScenarioValues(
            "a".to_string()
        )))
    );
}

#[test]
fn test_caller_model_not_mutated() {
    let model = SumModel { a: 1.0, b: 2.0 };
    let spec = ScenarioSpec::new()
        .values("a", vec![100.0, 200.0])
        .values("b", vec![300.0]);

    data_table(&model, &spec, &["sum"]).unwrap();
    assert_eq!(model.a, 1.0);
    assert_eq!(model.b, 2.0);
}
