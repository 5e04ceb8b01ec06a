//! Notification dispatcher
//!
//! A multi-subscriber event bus keyed by [`EventKind`]. Subscribers are
//! plain callbacks held in registration order; publication walks the list
//! for the event's kind synchronously on the calling thread.
//!
//! # Invariants
//!
//! - Subscription is additive only; there is no unsubscribe
//! - All subscribers for a kind fire on every publish, in registration order
//! - Delivery is synchronous; `publish` returns only after every subscriber ran
//!
//! A panicking subscriber is not isolated: the panic propagates to the
//! publisher and any later subscribers do not run. Callers that need
//! containment must wrap their own subscribers.
//!
//! The dispatcher is single-threaded. Introducing concurrent publication
//! would require a mutual-exclusion boundary around the subscriber lists so
//! that iteration never observes a subscription mid-dispatch.

use std::fmt;

use crate::events::{BillingEvent, EventKind};

/// A registered reaction to billing events
pub type Subscriber = Box<dyn Fn(&BillingEvent)>;

/// Synchronous fan-out bus for billing and payment events
#[derive(Default)]
pub struct NotificationDispatcher {
    bill_generated: Vec<Subscriber>,
    payment_received: Vec<Subscriber>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for an event kind
    ///
    /// Subscribers fire in the order they were registered. Registration is
    /// permanent for the dispatcher's lifetime.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F)
    where
        F: Fn(&BillingEvent) + 'static,
    {
        self.subscribers_mut(kind).push(Box::new(subscriber));
    }

    /// Publishes an event to every subscriber of its kind
    ///
    /// Fan-out is a direct, in-order call on the current thread; there is no
    /// queueing or deferral.
    pub fn publish(&self, event: &BillingEvent) {
        for subscriber in self.subscribers(event.kind()) {
            subscriber(event);
        }
    }

    /// Returns the number of subscribers registered for a kind
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers(kind).len()
    }

    fn subscribers(&self, kind: EventKind) -> &[Subscriber] {
        match kind {
            EventKind::BillGenerated => &self.bill_generated,
            EventKind::PaymentReceived => &self.payment_received,
        }
    }

    fn subscribers_mut(&mut self, kind: EventKind) -> &mut Vec<Subscriber> {
        match kind {
            EventKind::BillGenerated => &mut self.bill_generated,
            EventKind::PaymentReceived => &mut self.payment_received,
        }
    }
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("bill_generated", &self.bill_generated.len())
            .field("payment_received", &self.payment_received.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bill_event(name: &str) -> BillingEvent {
        BillingEvent::bill_generated(name, Money::new(dec!(1000), Currency::USD))
    }

    #[test]
    fn test_subscribers_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = NotificationDispatcher::new();

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            dispatcher.subscribe(EventKind::BillGenerated, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        dispatcher.publish(&bill_event("Rao"));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_publish_routes_by_kind() {
        let bills = Rc::new(RefCell::new(0u32));
        let payments = Rc::new(RefCell::new(0u32));
        let mut dispatcher = NotificationDispatcher::new();

        {
            let bills = Rc::clone(&bills);
            dispatcher.subscribe(EventKind::BillGenerated, move |_| {
                *bills.borrow_mut() += 1;
            });
        }
        {
            let payments = Rc::clone(&payments);
            dispatcher.subscribe(EventKind::PaymentReceived, move |_| {
                *payments.borrow_mut() += 1;
            });
        }

        dispatcher.publish(&bill_event("Rao"));
        assert_eq!(*bills.borrow(), 1);
        assert_eq!(*payments.borrow(), 0);
    }

    #[test]
    fn test_publish_with_no_subscribers_is_a_no_op() {
        let dispatcher = NotificationDispatcher::new();
        dispatcher.publish(&bill_event("Rao"));
    }

    #[test]
    fn test_subscriber_count() {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.subscribe(EventKind::BillGenerated, |_| {});
        dispatcher.subscribe(EventKind::BillGenerated, |_| {});
        dispatcher.subscribe(EventKind::PaymentReceived, |_| {});

        assert_eq!(dispatcher.subscriber_count(EventKind::BillGenerated), 2);
        assert_eq!(dispatcher.subscriber_count(EventKind::PaymentReceived), 1);
    }

    #[test]
    fn test_subscriber_panic_propagates_to_publisher() {
        let reached_second = Rc::new(RefCell::new(false));
        let mut dispatcher = NotificationDispatcher::new();

        dispatcher.subscribe(EventKind::BillGenerated, |_| {
            panic!("subscriber failure");
        });
        {
            let reached_second = Rc::clone(&reached_second);
            dispatcher.subscribe(EventKind::BillGenerated, move |_| {
                *reached_second.borrow_mut() = true;
            });
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            dispatcher.publish(&bill_event("Rao"));
        }));

        assert!(result.is_err());
        assert!(!*reached_second.borrow());
    }
}
