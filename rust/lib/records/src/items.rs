//! Line items and derived totals.
//!
//! Totals are always computed from the item list at read time — there is
//! no stored total field anywhere, so a total can never go stale.

use serde::{Deserialize, Serialize};

/// One line of an order/invoice/GRN document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(description: &str, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.to_string(),
            quantity,
            unit_price,
        }
    }

    /// Line amount: `quantity * unit_price`.
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Sum of line amounts.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::amount).sum()
}

/// How a document derives its total from subtotal, discount and tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalFormula {
    /// `subtotal - discount + tax` (sales orders).
    SubtractDiscountAddTax,
    /// `subtotal + tax`; discount is ignored (invoices, purchase documents).
    AddTax,
}

impl TotalFormula {
    pub fn total(&self, items: &[LineItem], discount: f64, tax: f64) -> f64 {
        let subtotal = subtotal(items);
        match self {
            TotalFormula::SubtractDiscountAddTax => subtotal - discount + tax,
            TotalFormula::AddTax => subtotal + tax,
        }
    }
}
