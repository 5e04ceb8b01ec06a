//! Property-based Test Data Generators
//!
//! Proptest strategies and fake-data helpers for generating domain values
//! in property tests.

use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_billing::BillingStrategy;
use domain_patient::PatientVariant;

/// Generates a plausible patient name
pub fn random_patient_name() -> String {
    Name().fake()
}

/// Strategy producing any admission variant
pub fn arb_patient_variant() -> impl Strategy<Value = PatientVariant> {
    prop_oneof![
        Just(PatientVariant::General),
        Just(PatientVariant::Emergency),
        (1u32..365u32).prop_map(|days| PatientVariant::Icu { days }),
    ]
}

/// Strategy producing any billing strategy
pub fn arb_billing_strategy() -> impl Strategy<Value = BillingStrategy> {
    prop_oneof![
        Just(BillingStrategy::Standard),
        Just(BillingStrategy::Insurance),
        Just(BillingStrategy::Senior),
    ]
}

/// Strategy producing non-negative USD amounts
pub fn arb_usd_amount() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}
