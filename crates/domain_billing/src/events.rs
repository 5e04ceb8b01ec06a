//! Billing domain events
//!
//! Events are ephemeral records produced by the billing engine and consumed
//! immediately by the notification dispatcher; they are not persisted.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// The kinds of event a subscriber can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A bill was generated for a patient
    BillGenerated,
    /// A payment was recorded for a patient
    PaymentReceived,
}

/// Events emitted by the billing engine
///
/// Each event carries the patient's name and the final amount: for
/// `BillGenerated` the amount after the strategy was applied, for
/// `PaymentReceived` the amount tendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BillingEvent {
    /// A bill has been generated
    BillGenerated { patient_name: String, amount: Money },

    /// A payment has been received
    PaymentReceived { patient_name: String, amount: Money },
}

impl BillingEvent {
    /// Creates a bill-generated event
    pub fn bill_generated(patient_name: impl Into<String>, amount: Money) -> Self {
        BillingEvent::BillGenerated {
            patient_name: patient_name.into(),
            amount,
        }
    }

    /// Creates a payment-received event
    pub fn payment_received(patient_name: impl Into<String>, amount: Money) -> Self {
        BillingEvent::PaymentReceived {
            patient_name: patient_name.into(),
            amount,
        }
    }

    /// Returns the kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            BillingEvent::BillGenerated { .. } => EventKind::BillGenerated,
            BillingEvent::PaymentReceived { .. } => EventKind::PaymentReceived,
        }
    }

    /// Returns the patient name associated with this event
    pub fn patient_name(&self) -> &str {
        match self {
            BillingEvent::BillGenerated { patient_name, .. } => patient_name,
            BillingEvent::PaymentReceived { patient_name, .. } => patient_name,
        }
    }

    /// Returns the amount carried by this event
    pub fn amount(&self) -> Money {
        match self {
            BillingEvent::BillGenerated { amount, .. } => *amount,
            BillingEvent::PaymentReceived { amount, .. } => *amount,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            BillingEvent::BillGenerated { .. } => "BillGenerated",
            BillingEvent::PaymentReceived { .. } => "PaymentReceived",
        }
    }
}
