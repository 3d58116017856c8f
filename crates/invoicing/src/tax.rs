//! Tax computation contract and the default category rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecommerce_core::{DomainError, Money, ValueObject};
use ecommerce_products::ProductType;

/// Outcome of a tax computation for one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Human-readable label, e.g. `"7% (F)"`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Tax {}

/// Tax policy failure. Returned unchanged by [`crate::BookKeeper::issuance`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaxError {
    /// The policy has no rate for this product type.
    #[error("no tax rate for product type {0}")]
    UnsupportedProductType(ProductType),

    /// The policy refused to compute a tax for the given input.
    #[error("tax calculation rejected: {0}")]
    Rejected(String),

    /// Money arithmetic failed while computing the amount.
    #[error("tax arithmetic failed: {0}")]
    Arithmetic(#[from] DomainError),
}

/// Computes the tax due on a net price for a product category.
///
/// Called exactly once per invoice line, in line order. Implementations may
/// keep state; if shared across threads, synchronizing it is their job.
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, TaxError>;
}

impl<P: TaxPolicy + ?Sized> TaxPolicy for &P {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, TaxError> {
        (**self).calculate_tax(product_type, net)
    }
}

/// Rate + label applied to one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    pub ratio: Decimal,
    pub description: String,
}

impl TaxRate {
    pub fn new(ratio: Decimal, description: impl Into<String>) -> Self {
        Self {
            ratio,
            description: description.into(),
        }
    }
}

/// Category rate table: drugs 5%, food 7%, everything else 23%.
///
/// Tax = net × ratio, exact (no rounding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTaxPolicy {
    rates: HashMap<ProductType, TaxRate>,
}

impl DefaultTaxPolicy {
    pub fn new() -> Self {
        Self::empty()
            .with_rate(ProductType::Drug, TaxRate::new(Decimal::new(5, 2), "5% (D)"))
            .with_rate(ProductType::Food, TaxRate::new(Decimal::new(7, 2), "7% (F)"))
            .with_rate(ProductType::Standard, TaxRate::new(Decimal::new(23, 2), "23%"))
    }

    /// A table with no rates; every lookup fails until rates are added.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    pub fn with_rate(mut self, product_type: ProductType, rate: TaxRate) -> Self {
        self.rates.insert(product_type, rate);
        self
    }

    pub fn rate(&self, product_type: ProductType) -> Option<&TaxRate> {
        self.rates.get(&product_type)
    }
}

impl Default for DefaultTaxPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxPolicy for DefaultTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, TaxError> {
        let rate = self
            .rate(product_type)
            .ok_or(TaxError::UnsupportedProductType(product_type))?;
        if net.is_negative() {
            return Err(TaxError::Rejected(format!(
                "net price cannot be negative (got {net})"
            )));
        }
        let amount = net.multiply_by(rate.ratio)?;
        Ok(Tax::new(amount, rate.description.clone()))
    }
}
