//! MotionKit Settings Crate
//!
//! Loads, saves and validates the configuration that seeds a surface, its
//! shape template and its animation loop.

pub mod config;
pub mod error;

pub use config::{AnimationSettings, Config, DemoSettings, SurfaceSettings, TemplateSettings};
pub use error::{SettingsError, SettingsResult};
