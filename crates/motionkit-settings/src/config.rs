//! Configuration for MotionKit
//!
//! Configuration is organized into sections:
//! - Surface (host area and insets)
//! - Template (style and motion of new shapes)
//! - Animation (tick period, speed, RNG seed)
//! - Demo (scripted headless run)
//!
//! Files are JSON or TOML, picked by extension.

use motionkit_core::{Color, Insets, Point, Size};
use motionkit_motion::{PathKind, ShapeKind, ShapeTemplate, SurfaceOptions, DEFAULT_SPEED};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "motionkit";
const CONFIG_FILE: &str = "config.toml";

/// Host area settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub width: f64,
    pub height: f64,
    /// Space taken by host chrome on each side
    pub insets: Insets,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 400.0,
            insets: Insets::default(),
        }
    }
}

/// New-shape template settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub shape_kind: ShapeKind,
    pub path_kind: PathKind,
    pub width: f64,
    pub height: f64,
    /// `#rrggbb` or `#rrggbbaa`
    pub fill_color: Color,
    pub border_color: Color,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        let template = ShapeTemplate::default();
        Self {
            shape_kind: template.shape_kind,
            path_kind: template.path,
            width: template.width,
            height: template.height,
            fill_color: template.fill,
            border_color: template.border,
        }
    }
}

/// Animation loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Tick period in milliseconds
    pub period_ms: u64,
    /// Pixels travelled per tick
    pub speed: f64,
    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            period_ms: 30,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

/// Scripted headless run used by the `motionkit` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// How long to let the animation run
    pub duration_ms: u64,
    /// Primary clicks applied before the loop starts
    pub clicks: Vec<Point>,
    /// Period to switch to halfway through the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_period_ms: Option<u64>,
    /// Where to write a PNG of the last frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            clicks: vec![
                Point::new(40.0, 40.0),
                Point::new(200.0, 120.0),
                Point::new(320.0, 260.0),
            ],
            adjusted_period_ms: Some(15),
            snapshot_path: None,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub surface: SurfaceSettings,
    #[serde(default)]
    pub template: TemplateSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be >= 0, got {}", value)))
    }
}

impl Config {
    /// `<config dir>/motionkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        positive("surface.width", self.surface.width)?;
        positive("surface.height", self.surface.height)?;
        let insets = &self.surface.insets;
        non_negative("surface.insets.top", insets.top)?;
        non_negative("surface.insets.left", insets.left)?;
        non_negative("surface.insets.bottom", insets.bottom)?;
        non_negative("surface.insets.right", insets.right)?;

        positive("template.width", self.template.width)?;
        positive("template.height", self.template.height)?;

        if self.animation.period_ms == 0 {
            return Err(SettingsError::invalid("animation.period_ms", "must be > 0"));
        }
        non_negative("animation.speed", self.animation.speed)?;

        if self.demo.adjusted_period_ms == Some(0) {
            return Err(SettingsError::invalid("demo.adjusted_period_ms", "must be > 0"));
        }

        Ok(())
    }

    /// Template for new shapes.
    pub fn template(&self) -> ShapeTemplate {
        ShapeTemplate {
            shape_kind: self.template.shape_kind,
            path: self.template.path_kind,
            width: self.template.width,
            height: self.template.height,
            fill: self.template.fill_color,
            border: self.template.border_color,
            speed: self.animation.speed,
        }
    }

    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            size: Size::new(self.surface.width, self.surface.height),
            insets: self.surface.insets,
            template: self.template(),
            seed: self.animation.seed,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.animation.period_ms)
    }

    pub fn adjusted_period(&self) -> Option<Duration> {
        self.demo.adjusted_period_ms.map(Duration::from_millis)
    }
}
