//! Per-country totals over valued items

use crate::utils::{round2, round_to};
use crate::valuation::{percentage_gain, GainClass, ValuedItem};

/// Aggregate figures for one country report
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub stock: f64,
    pub expense: f64,
    pub value: f64,
    pub absolute_gain: f64,
    /// `None` when the total value is zero
    pub percentage_gain: Option<f64>,
    /// Items without a current value, counted into `value` at their expense
    pub priced_at_cost: usize,
}

impl Totals {
    pub fn from_items(items: &[ValuedItem<'_>]) -> Self {
        let mut stock = 0.0;
        let mut expense = 0.0;
        let mut value = 0.0;
        let mut priced_at_cost = 0;

        for valued in items {
            let v = &valued.valuation;
            stock += valued.item.stock;
            expense += v.expense;
            match v.current_value {
                Some(current) => value += current,
                None => {
                    value += v.expense;
                    priced_at_cost += 1;
                }
            }
        }

        Self {
            stock: round2(stock),
            expense: round2(expense),
            value: round2(value),
            absolute_gain: round2(value - expense),
            percentage_gain: percentage_gain(expense, value).map(|p| round_to(p, 2)),
            priced_at_cost,
        }
    }

    pub fn class(&self) -> GainClass {
        GainClass::of(Some(self.absolute_gain))
    }
}
