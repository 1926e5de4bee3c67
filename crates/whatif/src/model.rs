//! Bookstore stocking model
//!
//! The worked example driven by the CLI: a bookstore orders
//! `order_quantity` copies at `unit_cost`, sells up to `demand` of them at
//! `selling_price`, and returns the unsold remainder to the publisher for
//! `unit_refund` each. Parameter and output access dispatches through
//! name→accessor tables built at construction, so the analysis routines can
//! drive the model entirely by name.

use rustc_hash::FxHashMap;
use whatif_core::{Model, ModelError};

type Setter = fn(&mut BookstoreModel, f64);
type Getter = fn(&BookstoreModel) -> f64;

static PARAMETER_NAMES: [&str; 5] = [
    "unit_cost",
    "selling_price",
    "unit_refund",
    "order_quantity",
    "demand",
];

#[derive(Debug, Clone)]
pub struct BookstoreModel {
    unit_cost: f64,
    selling_price: f64,
    unit_refund: f64,
    order_quantity: f64,
    demand: f64,
    setters: FxHashMap<&'static str, Setter>,
    getters: FxHashMap<&'static str, Getter>,
    outputs: FxHashMap<&'static str, Getter>,
}

impl BookstoreModel {
    pub fn new(
        unit_cost: f64,
        selling_price: f64,
        unit_refund: f64,
        order_quantity: f64,
        demand: f64,
    ) -> Self {
        let mut setters: FxHashMap<&'static str, Setter> = FxHashMap::default();
        setters.insert("unit_cost", |m: &mut BookstoreModel, v: f64| m.unit_cost = v);
        setters.insert("selling_price", |m: &mut BookstoreModel, v: f64| {
            m.selling_price = v;
        });
        setters.insert("unit_refund", |m: &mut BookstoreModel, v: f64| {
            m.unit_refund = v;
        });
        setters.insert("order_quantity", |m: &mut BookstoreModel, v: f64| {
            m.order_quantity = v;
        });
        setters.insert("demand", |m: &mut BookstoreModel, v: f64| m.demand = v);

        let mut getters: FxHashMap<&'static str, Getter> = FxHashMap::default();
        getters.insert("unit_cost", |m: &BookstoreModel| m.unit_cost);
        getters.insert("selling_price", |m: &BookstoreModel| m.selling_price);
        getters.insert("unit_refund", |m: &BookstoreModel| m.unit_refund);
        getters.insert("order_quantity", |m: &BookstoreModel| m.order_quantity);
        getters.insert("demand", |m: &BookstoreModel| m.demand);

        let mut outputs: FxHashMap<&'static str, Getter> = FxHashMap::default();
        outputs.insert("order_cost", Self::order_cost);
        outputs.insert("sales_revenue", Self::sales_revenue);
        outputs.insert("refund_revenue", Self::refund_revenue);
        outputs.insert("total_revenue", Self::total_revenue);
        outputs.insert("profit", Self::profit);

        Self {
            unit_cost,
            selling_price,
            unit_refund,
            order_quantity,
            demand,
            setters,
            getters,
            outputs,
        }
    }

    /// Base-case parameterization used by the CLI demonstrations
    #[must_use]
    pub fn base() -> Self {
        Self::new(7.30, 10.00, 2.50, 200.0, 200.0)
    }

    fn units_sold(&self) -> f64 {
        self.order_quantity.min(self.demand)
    }

    fn units_returned(&self) -> f64 {
        (self.order_quantity - self.demand).max(0.0)
    }

    pub fn order_cost(&self) -> f64 {
        self.unit_cost * self.order_quantity
    }

    pub fn sales_revenue(&self) -> f64 {
        self.selling_price * self.units_sold()
    }

    pub fn refund_revenue(&self) -> f64 {
        self.unit_refund * self.units_returned()
    }

    pub fn total_revenue(&self) -> f64 {
        self.sales_revenue() + self.refund_revenue()
    }

    pub fn profit(&self) -> f64 {
        self.total_revenue() - self.order_cost()
    }
}

impl Model for BookstoreModel {
    fn set(&mut self, name: &str, value: f64) -> Result<(), ModelError> {
        match self.setters.get(name).copied() {
            Some(setter) => {
                setter(self, value);
                Ok(())
            }
            None => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        match self.getters.get(name) {
            Some(getter) => Ok(getter(self)),
            None => Err(ModelError::UnknownParameter(name.to_string())),
        }
    }

    fn output(&self, name: &str) -> Result<f64, ModelError> {
        match self.outputs.get(name) {
            Some(output) => Ok(output(self)),
            None => Err(ModelError::UnknownOutput(name.to_string())),
        }
    }

    fn parameter_names(&self) -> &[&'static str] {
        &PARAMETER_NAMES
    }

    fn clone_model(&self) -> Self {
        self.clone()
    }
}
