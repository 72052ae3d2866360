//! # MotionKit Animation
//!
//! Drives a tick callback at a fixed period on a tokio runtime.
//!
//! ```rust,ignore
//! use motionkit_animation::AnimationLoop;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let surface = motionkit_core::thread_safe(surface);
//! let target = motionkit_core::thread_safe(RecordingTarget::new());
//! let tick_surface = surface.clone();
//! let animation = AnimationLoop::new(
//!     tokio::runtime::Handle::current(),
//!     Arc::new(move || {
//!         tick_surface.lock().tick(&mut *target.lock());
//!     }),
//! );
//! animation.start();
//! animation.adjust_speed(Duration::from_millis(10));
//! animation.stop();
//! ```

pub mod animation_loop;

pub use animation_loop::{AnimationLoop, LoopState, DEFAULT_PERIOD, MIN_PERIOD};
