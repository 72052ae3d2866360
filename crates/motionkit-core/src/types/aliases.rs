//! Type aliases for the shared-state shapes used across crates.
//!
//! The surface is touched from the foreground (pointer events, property
//! controls) and from the animation task, so it lives behind a
//! [`ThreadSafe`] handle.
//!
//! ```rust,ignore
//! use motionkit_core::types::*;
//!
//! let surface: ThreadSafe<Surface> = thread_safe(Surface::new(options));
//! surface.lock().clear_all_shapes();
//! ```

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe reader-writer lock wrapper for read-heavy workloads.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// A callback that can be handed to more than one owner, e.g. a tick
/// function reused each time a loop restarts.
pub type SharedCallback = Arc<dyn Fn() + Send + Sync>;

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
