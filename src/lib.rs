//! # MotionKit
//!
//! Shapes that animate along configurable motion paths inside a bounded
//! drawing surface.
//!
//! ## Architecture
//!
//! MotionKit is organized as a workspace with multiple crates:
//!
//! 1. **motionkit-core** - Geometry, colors, errors, shared-state aliases, events
//! 2. **motionkit-motion** - Motion paths, moving shapes, surface, render targets
//! 3. **motionkit-animation** - Cancellable repeating tick scheduler
//! 4. **motionkit-settings** - Configuration files and validation
//! 5. **motionkit** - This facade plus the headless demo binary

pub mod demo;

pub use motionkit_core::{
    thread_safe, AnimationEvent, AppEvent, Color, Error, EventBus, EventCategory, EventFilter,
    Insets, Point, Rect, RenderError, Result, SharedCallback, Size, SurfaceEvent,
    ThreadSafe, Vector,
};

pub use motionkit_motion::{
    MotionPath, MovingShape, PathKind, PhaseState, PixmapTarget, PointerEvent, PointerOutcome,
    RecordingTarget, RenderTarget, ShapeKind, ShapeTemplate, Surface, SurfaceOptions,
};

pub use motionkit_animation::{AnimationLoop, LoopState, DEFAULT_PERIOD, MIN_PERIOD};

pub use motionkit_settings::{Config, SettingsError, SettingsResult};

pub use demo::{run_demo, DemoReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Filter used when `RUST_LOG` is unset or empty
pub const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(rust_log: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, [`DEFAULT_LOG_FILTER`] otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
