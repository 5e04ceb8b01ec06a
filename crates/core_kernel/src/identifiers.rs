//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types. Identifier generation
//! goes through [`IdGenerator`], a service owned by whichever component
//! creates entities, rather than scattered calls to a global source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Patient domain identifiers
define_id!(PatientId, "PAT");

/// Identifier-generation service
///
/// Owned by the admission registry so that identifier assignment is an
/// explicit dependency instead of a hidden global. The random source gives
/// negligible collision probability over a session's patient count; the
/// sequential source gives deterministic identifiers for tests.
#[derive(Debug, Clone)]
pub enum IdGenerator {
    /// Time-ordered random identifiers (UUID v7)
    Random,
    /// Deterministic counter-based identifiers
    Sequential(u64),
}

impl IdGenerator {
    /// Creates the default random generator
    pub fn random() -> Self {
        IdGenerator::Random
    }

    /// Creates a deterministic generator starting at 1
    pub fn sequential() -> Self {
        IdGenerator::Sequential(1)
    }

    /// Produces the next patient identifier
    pub fn next_patient_id(&mut self) -> PatientId {
        match self {
            IdGenerator::Random => PatientId::new_v7(),
            IdGenerator::Sequential(counter) => {
                let id = PatientId::from_uuid(Uuid::from_u128(*counter as u128));
                *counter += 1;
                id
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::Random
    }
}
