//! # MotionKit Motion
//!
//! Shapes that move on their own across a drawing surface.
//!
//! ## Architecture
//!
//! ```text
//! Surface (owns shapes, template, interior size)
//!   ├── MovingShape (geometry, style, selection, phase)
//!   │     └── PathKind (Bounce, Wrap, Boundary, Falling)
//!   └── RenderTarget (PixmapTarget, RecordingTarget)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use motionkit_motion::{PointerEvent, RecordingTarget, Surface};
//!
//! let mut surface = Surface::default();
//! surface.pointer_pressed(PointerEvent::primary(20.0, 20.0));
//!
//! let mut target = RecordingTarget::new();
//! surface.tick(&mut target);
//! ```

pub mod path;
pub mod renderer;
pub mod shape;
pub mod surface;
pub mod template;

pub use path::{
    clamp_to_bounds, BoundaryPath, BouncePath, FallingPath, MotionPath, PathKind, PhaseState,
    UnknownPathKind, WrapPath, DEFAULT_SPEED,
};
pub use renderer::{DrawCall, PixmapTarget, RecordingTarget, RenderTarget};
pub use shape::{MovingShape, ShapeKind, MIN_EXTENT};
pub use surface::{PointerEvent, PointerOutcome, Surface, SurfaceOptions};
pub use template::ShapeTemplate;
