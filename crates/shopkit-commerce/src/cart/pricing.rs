//! Cart pricing and the cart report.

use std::fmt;

use crate::catalog::ProductRef;
use crate::money::Money;
use serde::Serialize;

/// One priced cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: ProductRef,
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Money,
}

/// Priced lines plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPricing {
    /// Lines in cart insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of all line totals.
    pub total: Money,
}

impl CartPricing {
    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Build the printable report.
    pub fn report(&self) -> CartReport {
        CartReport {
            lines: self
                .lines
                .iter()
                .map(|line| CartReportLine {
                    product: line.product.name().to_string(),
                    quantity: line.quantity,
                    price: line.line_total,
                })
                .collect(),
            total: self.total,
        }
    }
}

/// One line of the cart report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartReportLine {
    pub product: String,
    pub quantity: u32,
    /// Line total, not unit price.
    pub price: Money,
}

/// Printable cart listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartReport {
    pub lines: Vec<CartReportLine>,
    pub total: Money,
}

impl fmt::Display for CartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "Product: {}, Quantity: {}, Price: {}",
                line.product,
                line.quantity,
                line.price.display_plain()
            )?;
        }
        writeln!(f, "Total Price: {}", self.total.display_plain())
    }
}
