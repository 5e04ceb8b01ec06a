//! Integration tests for identifiers and the generation service

use core_kernel::{IdGenerator, PatientId};

#[test]
fn test_patient_id_serde_is_transparent() {
    let id = PatientId::new();
    let json = serde_json::to_string(&id).unwrap();

    // Serializes as the bare UUID, not a wrapper object
    assert!(json.starts_with('"'));
    let back: PatientId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, back);
}

#[test]
fn test_parse_accepts_prefixed_and_bare_forms() {
    let id = PatientId::new();
    let prefixed: PatientId = id.to_string().parse().unwrap();
    let bare: PatientId = id.as_uuid().to_string().parse().unwrap();

    assert_eq!(id, prefixed);
    assert_eq!(id, bare);
}

#[test]
fn test_sequential_generator_never_repeats() {
    let mut ids = IdGenerator::sequential();
    let mut seen = std::collections::HashSet::new();

    for _ in 0..100 {
        assert!(seen.insert(ids.next_patient_id()));
    }
}
