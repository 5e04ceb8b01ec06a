//! Patient Domain - Admissions and Patient Records
//!
//! This crate models the admitted-patient side of the hospital billing core:
//!
//! - [`Patient`] is an immutable admission record whose base cost is derived
//!   entirely from its admission variant
//! - [`PatientVariant`] is the closed set of admission categories (general
//!   ward, emergency, ICU) with a fixed rate table
//! - [`AdmissionRegistry`] is the ordered, session-scoped collection of
//!   admitted patients
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Currency;
//! use domain_patient::{AdmissionRegistry, PatientVariant};
//!
//! let mut registry = AdmissionRegistry::new(Currency::USD);
//! let id = registry.admit("Rao", PatientVariant::Icu { days: 3 });
//!
//! let patient = registry.get(0).unwrap();
//! assert_eq!(patient.id, id);
//! assert_eq!(patient.base_cost().amount().to_string(), "30000");
//! ```

pub mod patient;
pub mod registry;
pub mod error;

pub use patient::{Patient, PatientVariant};
pub use registry::{AdmissionRegistry, RosterEntry};
pub use error::PatientError;
