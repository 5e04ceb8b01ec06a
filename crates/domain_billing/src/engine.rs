//! Billing engine
//!
//! The engine computes bills and records payments. It holds no mutable
//! billing state of its own; both operations are observable only through
//! the events they publish on the owned dispatcher.

use tracing::debug;

use core_kernel::{CostBearer, Money};

use crate::dispatcher::NotificationDispatcher;
use crate::events::{BillingEvent, EventKind};
use crate::strategy::BillingStrategy;

/// Computes bills and records payments for cost-bearing entities
#[derive(Debug, Default)]
pub struct BillingEngine {
    dispatcher: NotificationDispatcher,
}

impl BillingEngine {
    /// Creates an engine with an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for an event kind
    ///
    /// See [`NotificationDispatcher::subscribe`] for ordering and delivery
    /// guarantees.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F)
    where
        F: Fn(&BillingEvent) + 'static,
    {
        self.dispatcher.subscribe(kind, subscriber);
    }

    /// Returns the engine's dispatcher
    pub fn dispatcher(&self) -> &NotificationDispatcher {
        &self.dispatcher
    }

    /// Computes the final bill for a patient under the chosen strategy
    ///
    /// Applies the strategy to the patient's base cost, rounds to the
    /// currency's decimal places, then synchronously publishes exactly one
    /// `BillGenerated` event carrying the final amount before returning it.
    /// Subscribers always observe the post-strategy amount, never the base
    /// cost.
    pub fn calculate_bill(&self, patient: &impl CostBearer, strategy: BillingStrategy) -> Money {
        let amount = strategy.apply(patient.base_cost()).round_to_currency();

        debug!(
            patient = patient.display_name(),
            %strategy,
            amount = %amount,
            "bill calculated"
        );
        self.dispatcher
            .publish(&BillingEvent::bill_generated(patient.display_name(), amount));

        amount
    }

    /// Records a payment for a patient
    ///
    /// Publishes exactly one `PaymentReceived` event with the given amount.
    /// The engine keeps no running balance and does not reconcile the amount
    /// against any previously computed bill; this is a pure notification
    /// trigger.
    pub fn process_payment(&self, patient: &impl CostBearer, amount: Money) {
        debug!(
            patient = patient.display_name(),
            amount = %amount,
            "payment recorded"
        );
        self.dispatcher.publish(&BillingEvent::payment_received(
            patient.display_name(),
            amount,
        ));
    }
}
