use motionkit_core::{Point, Size};
use motionkit_motion::{clamp_to_bounds, MotionPath, PathKind};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn path_kind() -> impl Strategy<Value = PathKind> {
    prop::sample::select(PathKind::ALL.to_vec())
}

fn in_range(p: Point, size: Size, bounds: Size) -> bool {
    let max_x = (bounds.width - size.width).max(0.0);
    let max_y = (bounds.height - size.height).max(0.0);
    (0.0..=max_x).contains(&p.x) && (0.0..=max_y).contains(&p.y)
}

proptest! {
    #[test]
    fn position_stays_inside_bounds(
        kind in path_kind(),
        seed in any::<u64>(),
        speed in 0.5f64..40.0,
        w in 1.0f64..80.0,
        h in 1.0f64..80.0,
        bw in 0.0f64..400.0,
        bh in 0.0f64..400.0,
        x in -100.0f64..500.0,
        y in -100.0f64..500.0,
    ) {
        let size = Size::new(w, h);
        let bounds = Size::new(bw, bh);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut phase = kind.initial_phase(speed, &mut rng);
        let mut position = clamp_to_bounds(Point::new(x, y), size, bounds);

        for _ in 0..200 {
            (position, phase) = kind.step(position, size, phase, bounds);
            prop_assert!(in_range(position, size, bounds), "{kind} left bounds at {position:?}");
        }
        prop_assert_eq!(phase.ticks, 200);
    }

    #[test]
    fn step_is_deterministic(
        kind in path_kind(),
        seed in any::<u64>(),
        x in 0.0f64..100.0,
        y in 0.0f64..100.0,
    ) {
        let size = Size::new(20.0, 10.0);
        let bounds = Size::new(200.0, 150.0);
        let phase = kind.initial_phase(5.0, &mut StdRng::seed_from_u64(seed));
        let position = Point::new(x, y);

        prop_assert_eq!(
            kind.step(position, size, phase, bounds),
            kind.step(position, size, phase, bounds)
        );
    }

    #[test]
    fn shape_larger_than_bounds_pins_to_origin(
        kind in path_kind(),
        seed in any::<u64>(),
    ) {
        let size = Size::new(50.0, 50.0);
        let bounds = Size::new(30.0, 20.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut phase = kind.initial_phase(5.0, &mut rng);
        let mut position = Point::new(0.0, 0.0);
        for _ in 0..10 {
            (position, phase) = kind.step(position, size, phase, bounds);
        }
        prop_assert_eq!(position, Point::new(0.0, 0.0));
    }
}

#[test]
fn test_bounce_keeps_speed_across_reflections() {
    let size = Size::new(10.0, 10.0);
    let bounds = Size::new(60.0, 40.0);
    let mut rng = StdRng::seed_from_u64(3);
    let mut phase = PathKind::Bounce.initial_phase(6.0, &mut rng);
    let mut position = Point::new(5.0, 5.0);
    for _ in 0..100 {
        (position, phase) = PathKind::Bounce.step(position, size, phase, bounds);
        assert!((phase.velocity.magnitude() - 6.0).abs() < 1e-9);
    }
}

#[test]
fn test_boundary_circles_the_perimeter() {
    let size = Size::new(10.0, 10.0);
    let bounds = Size::new(50.0, 30.0);
    let mut rng = StdRng::seed_from_u64(0);
    let mut phase = PathKind::Boundary.initial_phase(10.0, &mut rng);
    let mut position = Point::new(0.0, 0.0);
    let mut corners = Vec::new();

    for _ in 0..12 {
        (position, phase) = PathKind::Boundary.step(position, size, phase, bounds);
        if corners.last() != Some(&position)
            && [Point::new(40.0, 0.0), Point::new(40.0, 20.0), Point::new(0.0, 20.0), Point::new(0.0, 0.0)]
                .contains(&position)
        {
            corners.push(position);
        }
    }

    assert_eq!(
        corners,
        vec![
            Point::new(40.0, 0.0),
            Point::new(40.0, 20.0),
            Point::new(0.0, 20.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn test_falling_sways_but_keeps_falling() {
    let size = Size::new(10.0, 10.0);
    let bounds = Size::new(200.0, 400.0);
    let mut rng = StdRng::seed_from_u64(0);
    let mut phase = PathKind::Falling.initial_phase(4.0, &mut rng);
    let mut position = Point::new(100.0, 0.0);
    let mut xs = Vec::new();
    for _ in 0..30 {
        let before = position.y;
        (position, phase) = PathKind::Falling.step(position, size, phase, bounds);
        assert_eq!(position.y, before + 4.0);
        xs.push(position.x);
    }
    assert!(xs.iter().any(|&x| x != 100.0));
}
