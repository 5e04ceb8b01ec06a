//! Comprehensive tests for domain_patient

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, IdGenerator, PatientId};
use domain_patient::{AdmissionRegistry, Patient, PatientError, PatientVariant};

// ============================================================================
// Cost Table Tests
// ============================================================================

mod cost_tests {
    use super::*;

    #[test]
    fn test_fixed_rate_table() {
        assert_eq!(PatientVariant::General.base_rate(), dec!(1000));
        assert_eq!(PatientVariant::Emergency.base_rate(), dec!(5000));
        assert_eq!(PatientVariant::Icu { days: 4 }.base_rate(), dec!(40000));
    }

    #[test]
    fn test_base_cost_carries_registry_currency() {
        let mut registry = AdmissionRegistry::new(Currency::INR);
        registry.admit("Rao", PatientVariant::Emergency);

        let cost = registry.get(0).unwrap().base_cost();
        assert_eq!(cost.currency(), Currency::INR);
        assert_eq!(cost.amount(), dec!(5000));
    }

    #[test]
    fn test_variant_is_immutable_after_admission() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("Rao", PatientVariant::Icu { days: 3 });

        let first = registry.get(0).unwrap().base_cost();
        let second = registry.get(0).unwrap().base_cost();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Registry Tests
// ============================================================================

mod registry_tests {
    use super::*;

    #[test]
    fn test_admission_order_with_stable_identifiers() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        let ids: Vec<PatientId> = vec![
            registry.admit("P1", PatientVariant::General),
            registry.admit("P2", PatientVariant::Emergency),
            registry.admit("P3", PatientVariant::Icu { days: 1 }),
        ];

        let listed: Vec<PatientId> = registry.list().iter().map(|p| p.id).collect();
        assert_eq!(listed, ids);

        let roster = registry.roster();
        assert_eq!(roster.len(), 3);
        for (i, entry) in roster.iter().enumerate() {
            assert_eq!(entry.position, i + 1);
            assert_eq!(entry.id, ids[i]);
        }
    }

    #[test]
    fn test_get_succeeds_within_bounds() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::General);

        for index in 0..registry.len() {
            assert!(registry.get(index).is_ok());
        }
    }

    #[test]
    fn test_get_fails_out_of_range() {
        let mut registry = AdmissionRegistry::new(Currency::USD);
        registry.admit("P1", PatientVariant::General);
        registry.admit("P2", PatientVariant::General);

        assert_eq!(
            registry.get(5),
            Err(PatientError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_out_of_range_error_message() {
        let err = PatientError::OutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Patient index 5 out of range for registry of 2"
        );
    }

    #[test]
    fn test_sequential_generator_gives_reproducible_sessions() {
        let admit_all = || {
            let mut registry =
                AdmissionRegistry::with_id_generator(Currency::USD, IdGenerator::sequential());
            registry.admit("P1", PatientVariant::General);
            registry.admit("P2", PatientVariant::Emergency);
            registry.roster()
        };

        assert_eq!(admit_all(), admit_all());
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_patient_round_trip() {
        let patient = Patient::new(
            PatientId::new(),
            "Rao",
            PatientVariant::Icu { days: 3 },
            Currency::USD,
        );

        let json = serde_json::to_string(&patient).unwrap();
        let back: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(patient, back);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn icu_rate_is_linear_in_days(days in 0u32..10_000u32) {
            let rate = PatientVariant::Icu { days }.base_rate();
            prop_assert_eq!(rate, dec!(10000) * Decimal::from(days));
        }

        #[test]
        fn get_is_total_over_valid_indices(count in 1usize..50usize) {
            let mut registry = AdmissionRegistry::new(Currency::USD);
            for i in 0..count {
                registry.admit(format!("P{i}"), PatientVariant::General);
            }

            for index in 0..count {
                prop_assert!(registry.get(index).is_ok());
            }
            prop_assert!(registry.get(count).is_err());
        }
    }
}
