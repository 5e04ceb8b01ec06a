//! Billing strategies
//!
//! A strategy is a named pure transform from a base cost to a final cost.
//! The set is closed: adding a pricing scheme means adding a variant and
//! extending the rate table, not registering a plugin. Strategies are
//! selected per billing operation and never stored on the patient.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, Rate};

/// The fixed set of pricing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingStrategy {
    /// Full base cost
    Standard,
    /// Insurance-covered admission, 70% of base
    Insurance,
    /// Senior-citizen concession, 80% of base
    Senior,
}

impl BillingStrategy {
    /// Returns the multiplicative rate for this strategy
    pub fn rate(&self) -> Rate {
        match self {
            BillingStrategy::Standard => Rate::new(dec!(1.0)),
            BillingStrategy::Insurance => Rate::new(dec!(0.7)),
            BillingStrategy::Senior => Rate::new(dec!(0.8)),
        }
    }

    /// Applies this strategy to a base cost
    ///
    /// Pure and total over non-negative amounts; a non-negative input always
    /// yields a non-negative result in the same currency.
    pub fn apply(&self, base: Money) -> Money {
        self.rate().apply(&base)
    }

    /// Returns the human-readable strategy name
    pub fn name(&self) -> &'static str {
        match self {
            BillingStrategy::Standard => "Standard",
            BillingStrategy::Insurance => "Insurance",
            BillingStrategy::Senior => "Senior",
        }
    }
}

impl fmt::Display for BillingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    #[test]
    fn test_standard_is_identity() {
        let base = Money::new(dec!(1000), Currency::USD);
        assert_eq!(BillingStrategy::Standard.apply(base), base);
    }

    #[test]
    fn test_insurance_rate() {
        let base = Money::new(dec!(1000), Currency::USD);
        assert_eq!(
            BillingStrategy::Insurance.apply(base).amount(),
            dec!(700.00)
        );
    }

    #[test]
    fn test_senior_rate() {
        let base = Money::new(dec!(30000), Currency::USD);
        assert_eq!(BillingStrategy::Senior.apply(base).amount(), dec!(24000.00));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(BillingStrategy::Standard.to_string(), "Standard");
        assert_eq!(BillingStrategy::Insurance.to_string(), "Insurance");
        assert_eq!(BillingStrategy::Senior.to_string(), "Senior");
    }
}
