//! Template record that seeds new shapes.

use motionkit_core::Color;
use serde::{Deserialize, Serialize};

use crate::path::{PathKind, DEFAULT_SPEED};
use crate::shape::ShapeKind;

/// Current "new shape" settings of a surface.
///
/// The record is `Copy` and the surface swaps in a whole new value on every
/// setter, so a reader never sees a half-applied change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    pub shape_kind: ShapeKind,
    pub path: PathKind,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub border: Color,
    /// Pixels travelled per tick by newly created shapes.
    pub speed: f64,
}

impl Default for ShapeTemplate {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Rectangle,
            path: PathKind::Bounce,
            width: 50.0,
            height: 20.0,
            fill: Color::BLUE,
            border: Color::BLACK,
            speed: DEFAULT_SPEED,
        }
    }
}
