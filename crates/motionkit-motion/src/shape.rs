//! Moving shapes
//!
//! A [`MovingShape`] couples rectangle geometry and style with the motion
//! state of one path. The rectangle returned by [`MovingShape::rect`] is the
//! single source for drawing, hit-testing and boundary clamping.

use motionkit_core::{Color, Point, Rect, Size};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::path::{clamp_to_bounds, MotionPath, PathKind, PhaseState};
use crate::renderer::RenderTarget;
use crate::template::ShapeTemplate;

/// Smallest width or height a shape can take.
pub const MIN_EXTENT: f64 = 1.0;

/// Geometry family of a shape. Fixed for the lifetime of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// Finite extent of at least [`MIN_EXTENT`].
pub(crate) fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_EXTENT)
    } else {
        MIN_EXTENT
    }
}

#[derive(Debug, Clone)]
pub struct MovingShape {
    kind: ShapeKind,
    position: Point,
    size: Size,
    bounds: Size,
    path: PathKind,
    phase: PhaseState,
    speed: f64,
    fill: Color,
    border: Color,
    selected: bool,
    rng: StdRng,
}

impl MovingShape {
    /// Create a shape whose top-left corner is at `position`, moving inside
    /// `bounds`. The position is clamped into range immediately.
    pub fn new(template: &ShapeTemplate, position: Point, bounds: Size, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = Size::new(
            sanitize_extent(template.width),
            sanitize_extent(template.height),
        );
        let phase = template.path.initial_phase(template.speed, &mut rng);
        Self {
            kind: template.shape_kind,
            position: clamp_to_bounds(position, size, bounds),
            size,
            bounds,
            path: template.path,
            phase,
            speed: template.speed,
            fill: template.fill,
            border: template.border,
            selected: false,
            rng,
        }
    }

    /// Advance one tick along the configured path.
    pub fn move_step(&mut self) {
        let (position, phase) = self
            .path
            .step(self.position, self.size, self.phase, self.bounds);
        self.position = position;
        self.phase = phase;
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        match self.kind {
            ShapeKind::Rectangle => target.fill_rect_with_border(self.rect(), self.fill, self.border),
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.rect().contains(point)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Switch path; the phase restarts from the new path's initial state.
    pub fn set_path(&mut self, path: PathKind) {
        self.path = path;
        self.phase = path.initial_phase(self.speed, &mut self.rng);
    }

    pub fn set_width(&mut self, width: f64) {
        self.size.width = sanitize_extent(width);
        self.reclamp();
    }

    pub fn set_height(&mut self, height: f64) {
        self.size.height = sanitize_extent(height);
        self.reclamp();
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border = color;
    }

    /// Replace the region the shape moves in and pull the shape back inside
    /// it right away.
    pub fn set_margin_size(&mut self, width: f64, height: f64) {
        self.bounds = Size::new(width.max(0.0), height.max(0.0));
        self.reclamp();
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn path(&self) -> PathKind {
        self.path
    }

    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn border(&self) -> Color {
        self.border
    }

    fn reclamp(&mut self) {
        let clamped = clamp_to_bounds(self.position, self.size, self.bounds);
        if clamped != self.position {
            tracing::trace!(
                "Shape re-clamped from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                self.position.x,
                self.position.y,
                clamped.x,
                clamped.y
            );
        }
        if !self.bounds.contains_size(&self.size) {
            tracing::warn!(
                "Bounds {:.0}x{:.0} smaller than shape {:.0}x{:.0}",
                self.bounds.width,
                self.bounds.height,
                self.size.width,
                self.size.height
            );
        }
        self.position = clamped;
    }
}
