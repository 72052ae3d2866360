//! Motion paths
//!
//! A motion path decides where a shape goes next. Every variant is a pure
//! function of `(position, size, phase, bounds)`: the same inputs always give
//! the same `(position, phase)` back, and no state is shared between shapes.
//!
//! All variants keep the shape's top-left corner inside
//! `[0, bounds.width - size.width] x [0, bounds.height - size.height]`.
//! When the bounds are smaller than the shape on some axis that range is
//! empty; the position on that axis becomes 0 and the velocity component
//! along it is zeroed. The heading keeps the component, so motion on that
//! axis resumes once the bounds grow back.
//!
//! | Kind       | Boundary policy                                   |
//! |------------|---------------------------------------------------|
//! | `Bounce`   | reflect: clamp and invert the velocity component  |
//! | `Wrap`     | wrap: re-enter from the opposite edge             |
//! | `Boundary` | clamp and turn clockwise along the perimeter      |
//! | `Falling`  | clamp sideways sway, wrap from bottom to top      |

use motionkit_core::{Point, Size, Vector};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default distance travelled per tick, in pixels.
pub const DEFAULT_SPEED: f64 = 5.0;

/// Angular frequency of the falling sway, in radians per tick.
const SWAY_FREQUENCY: f64 = 0.15;

/// Launch angles for straight-line paths stay this far away from the axes so
/// a new shape never travels perfectly horizontally or vertically.
const MIN_LAUNCH_ANGLE: f64 = PI / 12.0;

/// Per-shape motion state.
///
/// `heading` is the direction and speed the path wants to travel.
/// `velocity` is the displacement actually applied on the last tick: the
/// heading with every blocked axis zeroed. `ticks` counts steps taken since
/// the phase was created and drives time-based paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseState {
    pub velocity: Vector,
    pub heading: Vector,
    pub ticks: u64,
}

impl PhaseState {
    pub fn new(heading: Vector) -> Self {
        Self {
            velocity: heading,
            heading,
            ticks: 0,
        }
    }

    fn advanced(self, velocity: Vector, heading: Vector) -> Self {
        Self {
            velocity,
            heading,
            ticks: self.ticks.wrapping_add(1),
        }
    }
}

/// The motion policy capability shared by every path kind.
pub trait MotionPath {
    /// Starting phase for a shape that just switched to this path.
    fn initial_phase(&self, speed: f64, rng: &mut dyn RngCore) -> PhaseState;

    /// Advance one tick.
    fn step(&self, position: Point, size: Size, phase: PhaseState, bounds: Size)
        -> (Point, PhaseState);
}

/// Largest allowed top-left coordinate on one axis, or `None` when the shape
/// does not fit.
fn axis_limit(bound: f64, extent: f64) -> Option<f64> {
    (bound >= extent).then(|| bound - extent)
}

/// Clamp a top-left position into the range allowed by `bounds`.
///
/// Axes where the shape does not fit collapse to 0.
pub fn clamp_to_bounds(position: Point, size: Size, bounds: Size) -> Point {
    let clamp = |value: f64, bound: f64, extent: f64| match axis_limit(bound, extent) {
        Some(max) => value.clamp(0.0, max),
        None => 0.0,
    };
    Point::new(
        clamp(position.x, bounds.width, size.width),
        clamp(position.y, bounds.height, size.height),
    )
}

/// A velocity of length `speed` in a random diagonal-ish direction.
fn launch_velocity(speed: f64, rng: &mut dyn RngCore) -> Vector {
    let angle = rng.gen_range(MIN_LAUNCH_ANGLE..FRAC_PI_2 - MIN_LAUNCH_ANGLE);
    let v = Vector::from_angle(angle, speed);
    let sx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    Vector::new(v.dx * sx, v.dy * sy)
}

/// Result of stepping one axis: position, applied velocity, heading.
type AxisStep = (f64, f64, f64);

/// Straight-line motion with elastic reflection at the edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct BouncePath;

impl BouncePath {
    fn reflect_axis(position: f64, heading: f64, extent: f64, bound: f64) -> AxisStep {
        let Some(max) = axis_limit(bound, extent) else {
            return (0.0, 0.0, heading);
        };
        let next = position + heading;
        if next < 0.0 {
            (0.0, heading.abs(), heading.abs())
        } else if next > max {
            (max, -heading.abs(), -heading.abs())
        } else {
            (next, heading, heading)
        }
    }
}

impl MotionPath for BouncePath {
    fn initial_phase(&self, speed: f64, rng: &mut dyn RngCore) -> PhaseState {
        PhaseState::new(launch_velocity(speed, rng))
    }

    fn step(
        &self,
        position: Point,
        size: Size,
        phase: PhaseState,
        bounds: Size,
    ) -> (Point, PhaseState) {
        let h = phase.heading;
        let (x, vx, hx) = Self::reflect_axis(position.x, h.dx, size.width, bounds.width);
        let (y, vy, hy) = Self::reflect_axis(position.y, h.dy, size.height, bounds.height);
        (
            Point::new(x, y),
            phase.advanced(Vector::new(vx, vy), Vector::new(hx, hy)),
        )
    }
}

/// Straight-line motion that leaves one edge and re-enters at the opposite
/// one.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrapPath;

impl WrapPath {
    fn wrap_axis(position: f64, heading: f64, extent: f64, bound: f64) -> AxisStep {
        match axis_limit(bound, extent) {
            None => (0.0, 0.0, heading),
            Some(max) if max <= 0.0 => (0.0, heading, heading),
            Some(max) => ((position + heading).rem_euclid(max), heading, heading),
        }
    }
}

impl MotionPath for WrapPath {
    fn initial_phase(&self, speed: f64, rng: &mut dyn RngCore) -> PhaseState {
        PhaseState::new(launch_velocity(speed, rng))
    }

    fn step(
        &self,
        position: Point,
        size: Size,
        phase: PhaseState,
        bounds: Size,
    ) -> (Point, PhaseState) {
        let h = phase.heading;
        let (x, vx, hx) = Self::wrap_axis(position.x, h.dx, size.width, bounds.width);
        let (y, vy, hy) = Self::wrap_axis(position.y, h.dy, size.height, bounds.height);
        (
            Point::new(x, y),
            phase.advanced(Vector::new(vx, vy), Vector::new(hx, hy)),
        )
    }
}

/// Heads right until it meets an edge, then crawls the perimeter clockwise.
///
/// A heading along an axis the shape does not fit on is turned clockwise
/// until it points along an open axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryPath;

impl BoundaryPath {
    /// Next heading clockwise in screen coordinates: right, down, left, up.
    fn turn(heading: Vector, speed: f64) -> Vector {
        if heading.dx > 0.0 {
            Vector::new(0.0, speed)
        } else if heading.dy > 0.0 {
            Vector::new(-speed, 0.0)
        } else if heading.dx < 0.0 {
            Vector::new(0.0, -speed)
        } else {
            Vector::new(speed, 0.0)
        }
    }
}

impl MotionPath for BoundaryPath {
    fn initial_phase(&self, speed: f64, _rng: &mut dyn RngCore) -> PhaseState {
        PhaseState::new(Vector::new(speed, 0.0))
    }

    fn step(
        &self,
        position: Point,
        size: Size,
        phase: PhaseState,
        bounds: Size,
    ) -> (Point, PhaseState) {
        let max_x = axis_limit(bounds.width, size.width);
        let max_y = axis_limit(bounds.height, size.height);
        let speed = phase.heading.magnitude();
        let open = |h: Vector| {
            (h.dx != 0.0 && max_x.is_some()) || (h.dy != 0.0 && max_y.is_some())
        };

        let mut heading = phase.heading;
        for _ in 0..4 {
            if open(heading) {
                break;
            }
            heading = Self::turn(heading, speed);
        }
        if !open(heading) {
            // Neither axis fits.
            return (
                clamp_to_bounds(position, size, bounds),
                phase.advanced(Vector::default(), phase.heading),
            );
        }

        let velocity = heading;
        let next = clamp_to_bounds(position + heading, size, bounds);

        let at_edge = (heading.dx > 0.0 && max_x.is_some_and(|m| next.x >= m))
            || (heading.dy > 0.0 && max_y.is_some_and(|m| next.y >= m))
            || (heading.dx < 0.0 && next.x <= 0.0)
            || (heading.dy < 0.0 && next.y <= 0.0);
        if at_edge {
            heading = Self::turn(heading, speed);
        }

        (next, phase.advanced(velocity, heading))
    }
}

/// Falls at a constant speed while swaying sideways; re-enters at the top
/// after passing the bottom edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallingPath;

impl MotionPath for FallingPath {
    fn initial_phase(&self, speed: f64, _rng: &mut dyn RngCore) -> PhaseState {
        PhaseState::new(Vector::new(0.0, speed))
    }

    fn step(
        &self,
        position: Point,
        size: Size,
        phase: PhaseState,
        bounds: Size,
    ) -> (Point, PhaseState) {
        let fall = phase.heading.dy;
        let sway = fall * (phase.ticks as f64 * SWAY_FREQUENCY).sin();

        let x = match axis_limit(bounds.width, size.width) {
            Some(max) => (position.x + sway).clamp(0.0, max),
            None => 0.0,
        };
        let (y, dy) = match axis_limit(bounds.height, size.height) {
            Some(max) => {
                let next = position.y + fall;
                if next > max {
                    (0.0, fall)
                } else {
                    (next.max(0.0), fall)
                }
            }
            None => (0.0, 0.0),
        };

        (
            Point::new(x, y),
            phase.advanced(Vector::new(0.0, dy), phase.heading),
        )
    }
}

/// Selects the motion path a shape follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    #[default]
    Bounce,
    Wrap,
    Boundary,
    Falling,
}

impl PathKind {
    pub const ALL: [PathKind; 4] = [
        PathKind::Bounce,
        PathKind::Wrap,
        PathKind::Boundary,
        PathKind::Falling,
    ];

    fn path(&self) -> &'static dyn MotionPath {
        match self {
            PathKind::Bounce => &BouncePath,
            PathKind::Wrap => &WrapPath,
            PathKind::Boundary => &BoundaryPath,
            PathKind::Falling => &FallingPath,
        }
    }
}

impl MotionPath for PathKind {
    fn initial_phase(&self, speed: f64, rng: &mut dyn RngCore) -> PhaseState {
        self.path().initial_phase(speed, rng)
    }

    fn step(
        &self,
        position: Point,
        size: Size,
        phase: PhaseState,
        bounds: Size,
    ) -> (Point, PhaseState) {
        self.path().step(position, size, phase, bounds)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Bounce => write!(f, "bounce"),
            PathKind::Wrap => write!(f, "wrap"),
            PathKind::Boundary => write!(f, "boundary"),
            PathKind::Falling => write!(f, "falling"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown path kind '{0}'")]
pub struct UnknownPathKind(pub String);

impl FromStr for PathKind {
    type Err = UnknownPathKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPathKind(s.to_string()))
    }
}
