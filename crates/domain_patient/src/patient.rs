//! Patient entity and admission variants
//!
//! This module defines the Patient record and the closed set of admission
//! variants. A patient's base cost is a pure function of its variant and the
//! immutable fields captured at admission; the variant never changes after
//! creation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{CostBearer, Currency, Money, PatientId};

/// Daily and flat base rates per admission variant
const GENERAL_BASE: Decimal = dec!(1000);
const EMERGENCY_BASE: Decimal = dec!(5000);
const ICU_DAILY_RATE: Decimal = dec!(10000);

/// The admission category of a patient, determining its cost rule.
///
/// This is a closed set: pricing a new kind of stay means adding a variant
/// here and extending the match in [`PatientVariant::base_rate`], not
/// subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientVariant {
    /// General ward admission with a flat base cost
    General,
    /// Emergency admission with a flat base cost
    Emergency,
    /// Intensive care admission billed per day
    ///
    /// `days` is captured at admission and not validated to be positive;
    /// a zero-day stay prices to zero.
    Icu { days: u32 },
}

impl PatientVariant {
    /// Returns the base rate for this variant as a plain decimal
    ///
    /// For ICU admissions this is the daily rate multiplied by the day count.
    pub fn base_rate(&self) -> Decimal {
        match self {
            PatientVariant::General => GENERAL_BASE,
            PatientVariant::Emergency => EMERGENCY_BASE,
            PatientVariant::Icu { days } => ICU_DAILY_RATE * Decimal::from(*days),
        }
    }

    /// Returns the human-readable variant label
    pub fn label(&self) -> &'static str {
        match self {
            PatientVariant::General => "General",
            PatientVariant::Emergency => "Emergency",
            PatientVariant::Icu { .. } => "ICU",
        }
    }
}

/// An admitted patient
///
/// Patients are created by [`AdmissionRegistry::admit`] and live for the
/// session. All fields are fixed at admission; there is no discharge or
/// variant change. Name non-emptiness is the caller's responsibility.
///
/// [`AdmissionRegistry::admit`]: crate::registry::AdmissionRegistry::admit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier, assigned at admission
    pub id: PatientId,
    /// Patient name
    pub name: String,
    /// Admission variant
    pub variant: PatientVariant,
    /// Billing currency, inherited from the registry
    pub currency: Currency,
    /// Admission timestamp
    pub admitted_at: DateTime<Utc>,
}

impl Patient {
    /// Creates a patient record
    ///
    /// Normally called through [`AdmissionRegistry::admit`], which assigns
    /// the identifier; exposed for test builders.
    ///
    /// [`AdmissionRegistry::admit`]: crate::registry::AdmissionRegistry::admit
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        variant: PatientVariant,
        currency: Currency,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            variant,
            currency,
            admitted_at: Utc::now(),
        }
    }

    /// Returns the deterministic base cost for this admission
    ///
    /// Derived solely from the variant and immutable fields; repeated calls
    /// always return the same amount.
    pub fn base_cost(&self) -> Money {
        Money::new(self.variant.base_rate(), self.currency)
    }
}

impl CostBearer for Patient {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn base_cost(&self) -> Money {
        Patient::base_cost(self)
    }
}
