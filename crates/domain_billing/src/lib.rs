//! Billing Domain - Pricing and Event Notification
//!
//! This crate implements bill calculation for the hospital billing core:
//! a closed set of pure pricing strategies, a stateless billing engine, and
//! a synchronous notification dispatcher that fans billing and payment
//! events out to departmental subscribers.
//!
//! # Event Delivery
//!
//! Publication is a direct, in-order fan-out on the calling thread. There is
//! no queueing, batching, or asynchronous delivery, and subscription is
//! additive only. A subscriber that panics is not isolated; the panic
//! propagates to the publisher. This is a documented limitation of the
//! notification mechanism, not an accident.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_billing::{BillingEngine, BillingStrategy, NotificationService};
//! use rust_decimal_macros::dec;
//!
//! # struct Stay;
//! # impl core_kernel::CostBearer for Stay {
//! #     fn display_name(&self) -> &str { "Rao" }
//! #     fn base_cost(&self) -> Money { Money::new(dec!(30000), Currency::USD) }
//! # }
//! let mut engine = BillingEngine::new();
//! NotificationService::attach(&mut engine);
//!
//! let bill = engine.calculate_bill(&Stay, BillingStrategy::Senior);
//! assert_eq!(bill.amount(), dec!(24000.00));
//! ```

pub mod strategy;
pub mod events;
pub mod dispatcher;
pub mod engine;
pub mod notifications;

pub use strategy::BillingStrategy;
pub use events::{BillingEvent, EventKind};
pub use dispatcher::{NotificationDispatcher, Subscriber};
pub use engine::BillingEngine;
pub use notifications::NotificationService;
