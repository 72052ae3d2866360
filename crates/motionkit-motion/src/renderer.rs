//! Render targets for surface ticks
//!
//! The surface never owns a drawing context; it paints onto whatever
//! [`RenderTarget`] the host passes to [`crate::Surface::tick`].
//!
//! Two targets ship with the crate:
//! - [`PixmapTarget`]: anti-alias free raster rendering with tiny-skia,
//!   used for snapshots and headless runs
//! - [`RecordingTarget`]: keeps the draw calls of the last frame, used by
//!   tests and diagnostics

use motionkit_core::{Color, Rect, RenderError};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

const BORDER_WIDTH: f32 = 1.0;

/// Drawing primitives a shape needs from its host.
pub trait RenderTarget {
    /// Called once at the start of every tick, before any shape is drawn.
    fn begin_frame(&mut self) {}

    /// Fill `rect` with `fill` and outline it with `border`.
    fn fill_rect_with_border(&mut self, rect: Rect, fill: Color, border: Color);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect { rect: Rect, fill: Color, border: Color },
}

/// Records draw calls instead of painting them.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    calls: Vec<DrawCall>,
    frames: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued since the last `begin_frame`.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of frames started so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderTarget for RecordingTarget {
    fn begin_frame(&mut self) {
        self.calls.clear();
        self.frames += 1;
    }

    fn fill_rect_with_border(&mut self, rect: Rect, fill: Color, border: Color) {
        self.calls.push(DrawCall::Rect { rect, fill, border });
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = false;
    paint
}

/// Raster target backed by a tiny-skia pixmap.
pub struct PixmapTarget {
    pixmap: Pixmap,
    background: Color,
}

impl PixmapTarget {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSurfaceSize { width, height })?;
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Un-premultiplied color of one pixel, `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Encode the current frame as PNG.
    pub fn save_png(&self, path: &Path) -> motionkit_core::Result<()> {
        self.pixmap.save_png(path).map_err(|e| RenderError::Encode {
            reason: e.to_string(),
        })?;
        tracing::info!("Saved frame to {}", path.display());
        Ok(())
    }
}

impl std::fmt::Debug for PixmapTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapTarget")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("background", &self.background)
            .finish()
    }
}

impl RenderTarget for PixmapTarget {
    fn begin_frame(&mut self) {
        self.pixmap.fill(skia_color(self.background));
    }

    fn fill_rect_with_border(&mut self, rect: Rect, fill: Color, border: Color) {
        let Some(area) = tiny_skia::Rect::from_xywh(
            rect.left() as f32,
            rect.top() as f32,
            rect.size.width as f32,
            rect.size.height as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(area);
        self.pixmap.fill_path(
            &path,
            &solid_paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        // Keep the outline inside the filled area so hit bounds and pixels agree.
        let half = BORDER_WIDTH / 2.0;
        let Some(outline) = tiny_skia::Rect::from_xywh(
            area.x() + half,
            area.y() + half,
            area.width() - BORDER_WIDTH,
            area.height() - BORDER_WIDTH,
        ) else {
            return;
        };
        let stroke = Stroke {
            width: BORDER_WIDTH,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &PathBuilder::from_rect(outline),
            &solid_paint(border),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
