//! Event system for decoupled inter-module communication.
//!
//! Producers never touch the overlay directly. They publish an
//! [`AppEvent`] on the [`EventBus`]; the poll tick drains the bus and hands
//! each event to the [`Subscriptions`] registry, which runs the handlers
//! subscribed to it.
//!
//! ```text
//! ┌─────────────┐  ┌──────────────┐  ┌──────────────┐
//! │ Status menu │  │  Observers   │  │ Reassert     │
//! │             │  │ (NSNotif.)   │  │ timers       │
//! └──────┬──────┘  └──────┬───────┘  └──────┬───────┘
//!        │ publish()      │ publish()       │ publish()
//!        ▼                ▼                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │                    EventBus                     │
//! └───────────────────────┬─────────────────────────┘
//!                         │ drain() every poll tick
//!                         ▼
//! ┌─────────────────────────────────────────────────┐
//! │          Subscriptions (kind → handlers)        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`registry`]: `Subscriptions` and `Flow`

pub mod bus;
pub mod registry;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use registry::{Flow, Subscriptions};
pub use types::AppEvent;
