//! Core Kernel - Foundational types and utilities for the hospital billing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers and the identifier-generation service
//! - Port traits shared between the patient and billing domains

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{PatientId, IdGenerator};
pub use ports::CostBearer;
