//! Integration tests for the what-if analysis routines
//!
//! Tests are organized by topic:
//! - `data_table` - Scenario grid evaluation
//! - `goal_seek` - Bisection root finding
//! - `simulate` - Simulation runner and replication zipping
//! - `aggregate` - Result flattening and summary statistics

mod data_table;

use crate::error::ModelError;
use crate::model::Model;

/// Two-parameter fixture with `sum` and `product` outputs.
#[derive(Debug, Clone)]
pub struct SumModel {
    pub a: f64,
    pub b: f64,
}

impl Model for SumModel {
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match name {
            "a" => self.a = value,
            "b" => self.b = value,
            _ => return Err(ModelError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "a" => Ok(self.a),
            "b" => Ok(self.b),
            _ => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn output(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "sum" => Ok(self.a + self.b),
            "product" => Ok(self.a * self.b),
            _ => Err(ModelError::UnknownOutput(name.to_string())),
        }
    }

    fn parameter_names(&self) -> &[&'static str] {
        &["a", "b"]
    }

    fn clone_model(&self) -> Self {
        self.clone()
    }
}

/// Single-input fixture with output `y = x² − 3x − 5`.
#[derive(Debug, Clone)]
pub struct QuadraticModel {
    pub x: f64,
}

impl Model for QuadraticModel {
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match name {
            "x" => self.x = value,
            _ => return Err(ModelError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "x" => Ok(self.x),
            _ => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn output(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "y" => Ok(self.x * self.x - 3.0 * self.x - 5.0),
            _ => Err(ModelError::UnknownOutput(name.to_string())),
        }
    }

    fn parameter_names(&self) -> &[&'static str] {
        &["x"]
    }

    fn clone_model(&self) -> Self {
        self.clone()
    }
}

/// Identity fixture with output `y = x`, for exact-hit termination.
#[derive(Debug, Clone)]
pub struct LinearModel {
    pub x: f64,
}

impl Model for LinearModel {
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match name {
            "x" => self.x = value,
            _ => return Err(ModelError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "x" => Ok(self.x),
            _ => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn output(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "y" => Ok(self.x),
            _ => Err(ModelError::UnknownOutput(name.to_string())),
        }
    }

    fn parameter_names(&self) -> &[&'static str] {
        &["x"]
    }

    fn clone_model(&self) -> Self {
        self.clone()
    }
}

/// Stocking fixture: `units_sold = min(order_quantity, demand)`.
#[derive(Debug, Clone)]
pub struct OrderModel {
    pub order_quantity: f64,
    pub demand: f64,
}

impl Model for OrderModel {
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match name {
            "order_quantity" => self.order_quantity = value,
            "demand" => self.demand = value,
            _ => return Err(ModelError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "order_quantity" => Ok(self.order_quantity),
            "demand" => Ok(self.demand),
            _ => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn output(&self, name: &str) -> Result<f64, ModelError> {
        match name {
            "units_sold" => Ok(self.order_quantity.min(self.demand)),
            "lost_sales" => Ok((self.demand - self.order_quantity).max(0.0)),
            _ => Err(ModelError::UnknownOutput(name.to_string())),
        }
    }

    fn parameter_names(&self) -> &[&'static str] {
        &["order_quantity", "demand"]
    }

    fn clone_model(&self) -> Self {
        self.clone()
    }
}
