//! Per-item valuation: expense, current value and gains

use crate::config::InventoryItem;
use crate::utils::{round2, round_to};

/// Display class selected by the sign of a gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainClass {
    Gain,
    Loss,
    Unavailable,
}

impl GainClass {
    pub fn of(absolute_gain: Option<f64>) -> Self {
        match absolute_gain {
            Some(gain) if gain >= 0.0 => GainClass::Gain,
            Some(_) => GainClass::Loss,
            None => GainClass::Unavailable,
        }
    }
}

/// Derived figures for one item under one country selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub lowest_price: Option<f64>,
    pub expense: f64,
    pub current_value: Option<f64>,
    pub absolute_gain: Option<f64>,
    pub percentage_gain: Option<f64>,
}

impl Valuation {
    pub fn compute(stock: f64, cost_basis: f64, lowest_price: Option<f64>) -> Self {
        let expense = round2(stock * cost_basis);

        let Some(price) = lowest_price else {
            return Self {
                lowest_price,
                expense,
                current_value: None,
                absolute_gain: None,
                percentage_gain: None,
            };
        };

        let current_value = round2(price * stock);
        Self {
            lowest_price,
            expense,
            current_value: Some(current_value),
            absolute_gain: Some(round2(current_value - expense)),
            percentage_gain: percentage_gain(expense, current_value).map(|p| round_to(p, 0)),
        }
    }

    pub fn class(&self) -> GainClass {
        GainClass::of(self.absolute_gain)
    }
}

/// `100 * (1 - expense / value)`, unrounded; `None` when `value` is zero.
///
/// The gain is relative to the current value, not to the expense.
pub fn percentage_gain(expense: f64, value: f64) -> Option<f64> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    Some(100.0 * (1.0 - expense / value))
}

/// An inventory item together with its valuation for one country
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedItem<'a> {
    pub item: &'a InventoryItem,
    pub valuation: Valuation,
}

impl<'a> ValuedItem<'a> {
    pub fn new(item: &'a InventoryItem, lowest_price: Option<f64>) -> Self {
        Self {
            item,
            valuation: Valuation::compute(item.stock, item.cost_basis, lowest_price),
        }
    }
}
