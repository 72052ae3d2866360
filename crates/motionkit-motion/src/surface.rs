//! Drawing surface
//!
//! The surface owns the shapes in draw order (later shapes paint on top),
//! the template for new shapes, and the size of the drawable area.
//!
//! # Pointer model
//!
//! - A secondary trigger never mutates anything; the host opens its context
//!   menu instead.
//! - A primary trigger toggles the selection of **every** shape under the
//!   pointer. When no shape is hit, a new shape is created there from the
//!   template.
//!
//! # Sharing
//!
//! `Surface` is a plain single-owner type. Hosts that drive it from an
//! animation task and from input handlers at the same time wrap it in
//! [`motionkit_core::ThreadSafe`] so each tick and each input event runs under
//! one lock.

use motionkit_core::{AppEvent, Color, EventBus, Insets, Point, Size, SurfaceEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::path::PathKind;
use crate::renderer::RenderTarget;
use crate::shape::{sanitize_extent, MovingShape, ShapeKind};
use crate::template::ShapeTemplate;

/// Host-supplied pointer trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    /// Context-menu trigger (e.g. right click).
    pub secondary: bool,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            secondary: false,
        }
    }

    pub fn secondary(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            secondary: true,
        }
    }
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The host should show its context menu.
    ContextMenu,
    /// This many shapes flipped their selection flag.
    Toggled(usize),
    /// A new shape was appended at this index.
    Created(usize),
}

/// Construction parameters for a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    pub size: Size,
    pub insets: Insets,
    pub template: ShapeTemplate,
    /// Seed for per-shape randomness; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            size: Size::new(500.0, 400.0),
            insets: Insets::default(),
            template: ShapeTemplate::default(),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct Surface {
    shapes: Vec<MovingShape>,
    template: ShapeTemplate,
    size: Size,
    insets: Insets,
    rng: StdRng,
    events: Option<Arc<EventBus>>,
}

impl Surface {
    pub fn new(options: SurfaceOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            shapes: Vec::new(),
            template: options.template,
            size: options.size,
            insets: options.insets,
            rng,
            events: None,
        }
    }

    /// Publish surface events to `bus` from now on.
    pub fn attach_event_bus(&mut self, bus: Arc<EventBus>) {
        self.events = Some(bus);
    }

    pub fn pointer_pressed(&mut self, event: PointerEvent) -> PointerOutcome {
        if event.secondary {
            return PointerOutcome::ContextMenu;
        }

        let mut toggled = 0;
        for shape in self.shapes.iter_mut() {
            if shape.contains(&event.position) {
                shape.set_selected(!shape.is_selected());
                toggled += 1;
            }
        }

        if toggled > 0 {
            let selected = self.selected_count();
            tracing::debug!("Toggled {} shape(s), {} selected", toggled, selected);
            self.publish(SurfaceEvent::SelectionToggled { toggled, selected });
            return PointerOutcome::Toggled(toggled);
        }

        PointerOutcome::Created(self.create_shape(event.position))
    }

    /// Append a new shape at `position` using the current template.
    pub fn create_shape(&mut self, position: Point) -> usize {
        let shape = MovingShape::new(
            &self.template,
            position,
            self.interior_size(),
            self.rng.gen(),
        );
        let index = self.shapes.len();
        let placed = shape.position();
        self.shapes.push(shape);
        tracing::debug!(
            "Created {} #{} at ({:.1}, {:.1}) on {} path",
            self.template.shape_kind,
            index,
            placed.x,
            placed.y,
            self.template.path
        );
        self.publish(SurfaceEvent::ShapeCreated {
            index,
            position: placed,
        });
        index
    }

    /// Affects future shapes only; existing shapes keep their kind.
    pub fn set_current_shape_type(&mut self, kind: ShapeKind) {
        self.template = ShapeTemplate {
            shape_kind: kind,
            ..self.template
        };
    }

    pub fn set_current_path_type(&mut self, path: PathKind) {
        self.template = ShapeTemplate {
            path,
            ..self.template
        };
        let applied = self.apply_to_selected(|shape| shape.set_path(path));
        self.template_changed("path", applied);
    }

    pub fn set_current_width(&mut self, width: f64) {
        let width = sanitize_extent(width);
        self.template = ShapeTemplate {
            width,
            ..self.template
        };
        let applied = self.apply_to_selected(|shape| shape.set_width(width));
        self.template_changed("width", applied);
    }

    pub fn set_current_height(&mut self, height: f64) {
        let height = sanitize_extent(height);
        self.template = ShapeTemplate {
            height,
            ..self.template
        };
        let applied = self.apply_to_selected(|shape| shape.set_height(height));
        self.template_changed("height", applied);
    }

    pub fn set_current_fill_color(&mut self, color: Color) {
        self.template = ShapeTemplate {
            fill: color,
            ..self.template
        };
        let applied = self.apply_to_selected(|shape| shape.set_fill_color(color));
        self.template_changed("fill_color", applied);
    }

    pub fn set_current_border_color(&mut self, color: Color) {
        self.template = ShapeTemplate {
            border: color,
            ..self.template
        };
        let applied = self.apply_to_selected(|shape| shape.set_border_color(color));
        self.template_changed("border_color", applied);
    }

    pub fn template(&self) -> ShapeTemplate {
        self.template
    }

    pub fn current_shape_type(&self) -> ShapeKind {
        self.template.shape_kind
    }

    pub fn current_path_type(&self) -> PathKind {
        self.template.path
    }

    pub fn current_width(&self) -> f64 {
        self.template.width
    }

    pub fn current_height(&self) -> f64 {
        self.template.height
    }

    pub fn current_fill_color(&self) -> Color {
        self.template.fill
    }

    pub fn current_border_color(&self) -> Color {
        self.template.border
    }

    /// Move then draw every shape in collection order.
    ///
    /// Returns the number of shapes ticked.
    pub fn tick(&mut self, target: &mut dyn RenderTarget) -> usize {
        target.begin_frame();
        for shape in self.shapes.iter_mut() {
            shape.move_step();
            shape.draw(target);
        }
        tracing::trace!("Ticked {} shape(s)", self.shapes.len());
        self.shapes.len()
    }

    /// Push the current interior size to every shape.
    pub fn reset_margin_size(&mut self) {
        let interior = self.interior_size();
        for shape in self.shapes.iter_mut() {
            shape.set_margin_size(interior.width, interior.height);
        }
        tracing::debug!(
            "Margin reset to {:.0}x{:.0} for {} shape(s)",
            interior.width,
            interior.height,
            self.shapes.len()
        );
        self.publish(SurfaceEvent::MarginReset { interior });
    }

    /// The host area changed size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width.max(0.0), height.max(0.0));
        self.reset_margin_size();
    }

    /// The host chrome changed.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.reset_margin_size();
    }

    /// Remove every shape. The template is kept.
    pub fn clear_all_shapes(&mut self) -> usize {
        let removed = self.shapes.len();
        self.shapes.clear();
        tracing::debug!("Cleared {} shape(s)", removed);
        self.publish(SurfaceEvent::Cleared { removed });
        removed
    }

    /// Drawable area: host size minus insets.
    pub fn interior_size(&self) -> Size {
        self.size.inset_by(&self.insets)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn shapes(&self) -> &[MovingShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_selected()).count()
    }

    fn apply_to_selected(&mut self, mut apply: impl FnMut(&mut MovingShape)) -> usize {
        let mut applied = 0;
        for shape in self.shapes.iter_mut().filter(|s| s.is_selected()) {
            apply(shape);
            applied += 1;
        }
        applied
    }

    fn template_changed(&self, property: &str, applied_to: usize) {
        tracing::debug!(
            "Template {} changed, applied to {} selected shape(s)",
            property,
            applied_to
        );
        self.publish(SurfaceEvent::TemplateChanged {
            property: property.to_string(),
            applied_to,
        });
    }

    fn publish(&self, event: SurfaceEvent) {
        if let Some(bus) = &self.events {
            // Nobody listening is fine.
            bus.publish(AppEvent::Surface(event));
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(SurfaceOptions::default())
    }
}
