//! Admission registry
//!
//! The registry is the ordered, session-scoped collection of admitted
//! patients. It owns the identifier-generation service, preserves admission
//! order, and offers positional access for display and selection. There is
//! no removal operation; records live until the registry is dropped.
//!
//! The registry is mutated only between driver prompts on a single thread.
//! A concurrent implementation would need a mutual-exclusion boundary
//! around the patient sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, IdGenerator, PatientId};

use crate::error::PatientError;
use crate::patient::{Patient, PatientVariant};

/// A display row for patient selection
///
/// `position` is the 1-based index shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub position: usize,
    pub name: String,
    pub id: PatientId,
}

/// The ordered collection of admitted patients for a session
#[derive(Debug)]
pub struct AdmissionRegistry {
    currency: Currency,
    ids: IdGenerator,
    patients: Vec<Patient>,
}

impl AdmissionRegistry {
    /// Creates an empty registry billing in the given currency
    pub fn new(currency: Currency) -> Self {
        Self::with_id_generator(currency, IdGenerator::random())
    }

    /// Creates a registry with an explicit identifier source
    ///
    /// Used by tests that need deterministic identifiers.
    pub fn with_id_generator(currency: Currency, ids: IdGenerator) -> Self {
        Self {
            currency,
            ids,
            patients: Vec::new(),
        }
    }

    /// Admits a patient and returns the assigned identifier
    ///
    /// Appends to the end of the roster; admission order is preserved for
    /// the life of the registry. The caller supplies a non-empty name.
    pub fn admit(&mut self, name: impl Into<String>, variant: PatientVariant) -> PatientId {
        let id = self.ids.next_patient_id();
        let patient = Patient::new(id, name, variant, self.currency);

        debug!(patient = %patient.name, %id, variant = patient.variant.label(), "patient admitted");
        self.patients.push(patient);
        id
    }

    /// Returns all admitted patients in admission order
    pub fn list(&self) -> &[Patient] {
        &self.patients
    }

    /// Returns display rows for patient selection, in admission order
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.patients
            .iter()
            .enumerate()
            .map(|(i, p)| RosterEntry {
                position: i + 1,
                name: p.name.clone(),
                id: p.id,
            })
            .collect()
    }

    /// Returns the patient at a 0-based position
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::OutOfRange`] when `index` is outside
    /// `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&Patient, PatientError> {
        self.patients.get(index).ok_or(PatientError::OutOfRange {
            index,
            len: self.patients.len(),
        })
    }

    /// Returns the number of admitted patients
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns true if no patients have been admitted
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Returns the registry's billing currency
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_preserves_order() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::Emergency);
        registry.admit("P3", PatientVariant::Icu { days: 2 });

        let names: Vec<_> = registry.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_identifiers_are_stable() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        let id = registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::General);

        assert_eq!(registry.get(0).unwrap().id, id);
        assert_eq!(registry.roster()[0].id, id);
    }

    #[test]
    fn test_roster_positions_are_one_based() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::General);

        let roster = registry.roster();
        assert_eq!(roster[0].position, 1);
        assert_eq!(roster[1].position, 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::General);

        assert_eq!(
            registry.get(5),
            Err(PatientError::OutOfRange { index: 5, len: 2 })
        );
        assert!(registry.get(1).is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = AdmissionRegistry::new(Currency::USD);
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(
            registry.get(0),
            Err(PatientError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_deterministic_ids_with_sequential_generator() {
        let mut a = AdmissionRegistry::with_id_generator(Currency::USD, IdGenerator::sequential());
        let mut b = AdmissionRegistry::with_id_generator(Currency::USD, IdGenerator::sequential());

        assert_eq!(
            a.admit("P1", PatientVariant::General),
            b.admit("P1", PatientVariant::General)
        );
    }
}
