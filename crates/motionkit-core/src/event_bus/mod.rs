//! # Event Bus Module
//!
//! Publish/subscribe channel for surface and animation loop events, so hosts
//! can react to shape creation, selection or loop state without polling.
//!
//! ```rust,ignore
//! use motionkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = Arc::new(EventBus::new());
//! bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Animation]),
//!     |event| tracing::info!("{}", event.description()),
//! );
//! surface.attach_event_bus(bus.clone());
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
