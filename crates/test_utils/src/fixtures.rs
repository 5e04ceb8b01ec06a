//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the billing
//! system. These fixtures are designed to be consistent and predictable for
//! unit tests; the named patients match the worked billing scenarios used
//! throughout the test suite.

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, PatientId};
use domain_patient::{Patient, PatientVariant};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The general-ward flat base cost
    pub fn usd_general_base() -> Money {
        Money::new(dec!(1000.00), Currency::USD)
    }

    /// The emergency flat base cost
    pub fn usd_emergency_base() -> Money {
        Money::new(dec!(5000.00), Currency::USD)
    }

    /// One day of ICU care
    pub fn usd_icu_daily() -> Money {
        Money::new(dec!(10000.00), Currency::USD)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for Patient test data
pub struct PatientFixtures;

impl PatientFixtures {
    /// General-ward patient "Lee" (base cost 1000)
    pub fn general_lee() -> Patient {
        Patient::new(PatientId::new(), "Lee", PatientVariant::General, Currency::USD)
    }

    /// Emergency patient "Okafor" (base cost 5000)
    pub fn emergency_okafor() -> Patient {
        Patient::new(
            PatientId::new(),
            "Okafor",
            PatientVariant::Emergency,
            Currency::USD,
        )
    }

    /// ICU patient "Rao" with a three-day stay (base cost 30000)
    pub fn icu_rao() -> Patient {
        Patient::new(
            PatientId::new(),
            "Rao",
            PatientVariant::Icu { days: 3 },
            Currency::USD,
        )
    }
}
