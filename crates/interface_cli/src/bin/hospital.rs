//! Hospital Billing - Console Session Binary
//!
//! Starts an interactive billing session over stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin hospital
//!
//! # Run with environment variables
//! HOSPITAL_CURRENCY=INR HOSPITAL_LOG_LEVEL=debug cargo run --bin hospital
//! ```
//!
//! # Environment Variables
//!
//! * `HOSPITAL_CURRENCY` - ISO 4217 billing currency (default: USD)
//! * `HOSPITAL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_billing::{BillingEngine, NotificationService};
use domain_patient::AdmissionRegistry;
use interface_cli::{CliConfig, Session};

/// Main entry point for the console session.
///
/// Initializes logging, loads configuration, wires the departmental
/// notification subscribers, and runs the menu loop until the operator
/// exits.
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = CliConfig::from_env().unwrap_or_default();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(currency = %config.currency, "Starting hospital billing session");

    let registry = AdmissionRegistry::new(config.currency);
    let mut engine = BillingEngine::new();
    NotificationService::attach(&mut engine);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(registry, engine, stdin.lock(), stdout.lock());
    session.run()?;

    tracing::info!("Session complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Log lines go to stderr so they never interleave with menu prompts on
/// stdout.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
