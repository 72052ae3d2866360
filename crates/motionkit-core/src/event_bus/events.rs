//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Shape collection and template changes
    Surface(SurfaceEvent),
    /// Animation loop lifecycle
    Animation(AnimationEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Surface(_) => EventCategory::Surface,
            AppEvent::Animation(_) => EventCategory::Animation,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Surface(e) => e.description(),
            AppEvent::Animation(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Surface events.
    Surface,
    /// Animation loop events.
    Animation,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Surface => write!(f, "Surface"),
            EventCategory::Animation => write!(f, "Animation"),
        }
    }
}

/// Shape collection and template events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// A shape was created by a pointer event.
    ShapeCreated {
        /// Index of the new shape in draw order.
        index: usize,
        /// Top-left corner the shape was placed at.
        position: Point,
    },
    /// Shapes under the pointer flipped their selection flag.
    SelectionToggled {
        /// Number of shapes that toggled.
        toggled: usize,
        /// Number of shapes selected afterwards.
        selected: usize,
    },
    /// A template property changed.
    TemplateChanged {
        /// Name of the property.
        property: String,
        /// Number of selected shapes the value was applied to.
        applied_to: usize,
    },
    /// All shapes were removed.
    Cleared {
        /// Number of shapes removed.
        removed: usize,
    },
    /// The drawable interior changed and was pushed to every shape.
    MarginReset {
        /// New interior size.
        interior: Size,
    },
}

impl SurfaceEvent {
    fn description(&self) -> String {
        match self {
            SurfaceEvent::ShapeCreated { index, position } => {
                format!("Shape {} created at ({:.1}, {:.1})", index, position.x, position.y)
            }
            SurfaceEvent::SelectionToggled { toggled, selected } => {
                format!("Toggled {} shape(s), {} selected", toggled, selected)
            }
            SurfaceEvent::TemplateChanged {
                property,
                applied_to,
            } => format!("Template {} changed, applied to {}", property, applied_to),
            SurfaceEvent::Cleared { removed } => format!("Cleared {} shape(s)", removed),
            SurfaceEvent::MarginReset { interior } => {
                format!("Interior {:.0}x{:.0}", interior.width, interior.height)
            }
        }
    }
}

/// Animation loop lifecycle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationEvent {
    /// Loop started ticking.
    Started {
        /// Tick period in milliseconds.
        period_ms: u64,
    },
    /// Loop stopped; no further ticks will run.
    Stopped,
    /// Loop restarted with a new period.
    SpeedAdjusted {
        /// Previous tick period in milliseconds.
        old_period_ms: u64,
        /// New tick period in milliseconds.
        new_period_ms: u64,
    },
}

impl AnimationEvent {
    fn description(&self) -> String {
        match self {
            AnimationEvent::Started { period_ms } => format!("Animation started ({} ms)", period_ms),
            AnimationEvent::Stopped => "Animation stopped".to_string(),
            AnimationEvent::SpeedAdjusted {
                old_period_ms,
                new_period_ms,
            } => format!("Animation period {} ms -> {} ms", old_period_ms, new_period_ms),
        }
    }
}
