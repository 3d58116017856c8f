//! Money with exact decimal arithmetic.
//!
//! Backed by `rust_decimal`, so adding and scaling amounts never goes through
//! floating point. The sales domain works in a single implicit currency.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A monetary amount.
///
/// Equality is numeric: `Money::from_units(10) == Money::new(dec!(10.00))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    pub const ZERO: Money = Money {
        amount: Decimal::ZERO,
    };

    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Whole currency units (e.g. `10` means 10.00).
    pub fn from_units(units: i64) -> Self {
        Self::new(Decimal::from(units))
    }

    /// Minor currency units with two decimal places (e.g. `1050` means 10.50).
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Addition that reports overflow instead of panicking.
    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        self.amount
            .checked_add(other.amount)
            .map(Money::new)
            .ok_or_else(|| DomainError::invariant("money addition overflow"))
    }

    /// Scale by a factor (e.g. a tax rate). The result keeps full precision.
    pub fn multiply_by(&self, factor: Decimal) -> DomainResult<Money> {
        self.amount
            .checked_mul(factor)
            .map(Money::new)
            .ok_or_else(|| DomainError::invariant("money multiplication overflow"))
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(&self, quantity: u32) -> DomainResult<Money> {
        self.multiply_by(Decimal::from(quantity))
    }

    /// Sum a sequence of amounts, failing on overflow.
    pub fn try_sum(amounts: impl IntoIterator<Item = Money>) -> DomainResult<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(&m))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

/// Panics on overflow, like integer addition in debug builds. Use
/// [`Money::checked_add`] where totals come from untrusted input.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.amount + rhs.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.amount.round_dp(2))
    }
}

impl ValueObject for Money {}
