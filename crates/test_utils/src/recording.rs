//! Event-capturing subscriber
//!
//! [`EventRecorder`] registers as an ordinary dispatcher subscriber and
//! captures every published event, letting tests assert on delivery counts,
//! ordering, and payloads. The recorder shares its buffer across clones, so
//! the handle kept by a test keeps observing after the engine moves into the
//! code under test.

use std::cell::RefCell;
use std::rc::Rc;

use domain_billing::{BillingEngine, BillingEvent, EventKind};

/// Records billing events published to an engine
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<BillingEvent>>>,
}

impl EventRecorder {
    /// Creates a recorder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes the recorder to one event kind
    pub fn attach(&self, engine: &mut BillingEngine, kind: EventKind) {
        let events = Rc::clone(&self.events);
        engine.subscribe(kind, move |event| events.borrow_mut().push(event.clone()));
    }

    /// Subscribes the recorder to both event kinds
    pub fn attach_all(&self, engine: &mut BillingEngine) {
        self.attach(engine, EventKind::BillGenerated);
        self.attach(engine, EventKind::PaymentReceived);
    }

    /// Returns a snapshot of the captured events in publication order
    pub fn events(&self) -> Vec<BillingEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of captured events
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns the number of captured events of one kind
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    /// Returns the most recently captured event
    pub fn last(&self) -> Option<BillingEvent> {
        self.events.borrow().last().cloned()
    }
}
