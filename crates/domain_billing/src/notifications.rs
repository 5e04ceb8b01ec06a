//! Departmental notification wiring
//!
//! At system initialization a fixed set of subscribers is attached to the
//! billing engine: accounting and pharmacy react to generated bills, finance
//! reacts to received payments. The wiring is static for the process
//! lifetime; departments are never added or removed afterwards.

use tracing::info;

use crate::engine::BillingEngine;
use crate::events::EventKind;

/// Attaches the standard departmental reactions to a billing engine
#[derive(Debug)]
pub struct NotificationService;

impl NotificationService {
    /// Wires accounting, pharmacy, and finance reactions, in that order
    ///
    /// Called once at startup. Accounting and pharmacy subscribe to
    /// `BillGenerated`; finance subscribes to `PaymentReceived`.
    pub fn attach(engine: &mut BillingEngine) {
        engine.subscribe(EventKind::BillGenerated, |event| {
            info!(
                target: "hospital::accounting",
                patient = event.patient_name(),
                amount = %event.amount(),
                "Bill generated"
            );
        });

        engine.subscribe(EventKind::BillGenerated, |event| {
            info!(
                target: "hospital::pharmacy",
                patient = event.patient_name(),
                "Prepare medication"
            );
        });

        engine.subscribe(EventKind::PaymentReceived, |event| {
            info!(
                target: "hospital::finance",
                patient = event.patient_name(),
                amount = %event.amount(),
                "Payment received"
            );
        });
    }
}
