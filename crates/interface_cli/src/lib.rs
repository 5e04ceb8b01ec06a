//! Console Interface - Session Driver
//!
//! This crate is the thin interactive driver over the billing core: a
//! textual menu loop (1.Admit 2.View 3.Bill 4.Exit) that orchestrates
//! admissions, roster display, bill calculation, and payment recording.
//! All domain behavior lives in `domain_patient` and `domain_billing`;
//! the driver only parses input and formats output.
//!
//! The session runs over generic `BufRead`/`Write` handles so the whole
//! loop can be exercised in tests with in-memory buffers.

pub mod config;
pub mod error;
pub mod session;

pub use config::CliConfig;
pub use error::CliError;
pub use session::Session;
