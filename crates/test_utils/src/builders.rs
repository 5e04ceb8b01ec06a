//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use core_kernel::{Currency, PatientId};
use domain_patient::{Patient, PatientVariant};

/// Builder for constructing test patients
pub struct TestPatientBuilder {
    id: PatientId,
    name: String,
    variant: PatientVariant,
    currency: Currency,
}

impl Default for TestPatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPatientBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: PatientId::new(),
            name: "Test Patient".to_string(),
            variant: PatientVariant::General,
            currency: Currency::USD,
        }
    }

    /// Sets the patient ID
    pub fn with_id(mut self, id: PatientId) -> Self {
        self.id = id;
        self
    }

    /// Sets the patient name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the admission variant
    pub fn with_variant(mut self, variant: PatientVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets an ICU stay of the given length
    pub fn with_icu_days(mut self, days: u32) -> Self {
        self.variant = PatientVariant::Icu { days };
        self
    }

    /// Sets the billing currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the patient
    pub fn build(self) -> Patient {
        Patient::new(self.id, self.name, self.variant, self.currency)
    }
}
