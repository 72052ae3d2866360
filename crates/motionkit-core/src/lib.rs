//! # MotionKit Core
//!
//! Core types and utilities for MotionKit.
//! Provides the geometry primitives, colors, error types, shared-state
//! aliases and the event bus used by the motion and animation crates.

pub mod color;
pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod types;

pub use color::{Color, ColorParseError};

pub use error::{Error, RenderError, Result};

pub use geometry::{Insets, Point, Rect, Size, Vector};

// Re-export event bus for convenience
pub use event_bus::{AnimationEvent, AppEvent, EventBus, EventCategory, EventFilter, SurfaceEvent};

// Re-export type aliases for convenience
pub use types::{thread_safe, SharedCallback, ThreadSafe, ThreadSafeRw};
