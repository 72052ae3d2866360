use motionkit_core::{Color, Insets, Point, Size};
use motionkit_motion::{
    PathKind, PointerEvent, PointerOutcome, RecordingTarget, ShapeKind, Surface, SurfaceOptions,
};

fn surface() -> Surface {
    Surface::new(SurfaceOptions {
        size: Size::new(500.0, 400.0),
        seed: Some(99),
        ..SurfaceOptions::default()
    })
}

#[test]
fn test_overlapping_shapes_toggle_together() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(100.0, 100.0));
    s.pointer_pressed(PointerEvent::primary(90.0, 95.0));
    assert_eq!(s.len(), 2);

    // Point covered by both rectangles.
    assert_eq!(
        s.pointer_pressed(PointerEvent::primary(110.0, 105.0)),
        PointerOutcome::Toggled(2)
    );
    assert_eq!(s.selected_count(), 2);
    assert_eq!(s.len(), 2);
}

#[test]
fn test_template_changes_reach_selected_shapes_only() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(10.0, 10.0));
    s.pointer_pressed(PointerEvent::primary(300.0, 300.0));
    s.pointer_pressed(PointerEvent::primary(15.0, 15.0));

    s.set_current_fill_color(Color::RED);
    s.set_current_border_color(Color::GREEN);
    s.set_current_width(80.0);
    s.set_current_height(30.0);
    s.set_current_path_type(PathKind::Wrap);

    let selected = &s.shapes()[0];
    assert_eq!(selected.fill(), Color::RED);
    assert_eq!(selected.border(), Color::GREEN);
    assert_eq!(selected.size(), Size::new(80.0, 30.0));
    assert_eq!(selected.path(), PathKind::Wrap);

    let other = &s.shapes()[1];
    assert_eq!(other.fill(), Color::BLUE);
    assert_eq!(other.border(), Color::BLACK);
    assert_eq!(other.size(), Size::new(50.0, 20.0));
    assert_eq!(other.path(), PathKind::Bounce);

    // New shapes pick up the whole template.
    let PointerOutcome::Created(index) = s.pointer_pressed(PointerEvent::primary(200.0, 10.0))
    else {
        panic!("expected a new shape");
    };
    let created = &s.shapes()[index];
    assert_eq!(created.fill(), Color::RED);
    assert_eq!(created.size(), Size::new(80.0, 30.0));
    assert_eq!(created.path(), PathKind::Wrap);
    assert_eq!(created.kind(), ShapeKind::Rectangle);
}

#[test]
fn test_template_change_without_selection_touches_nothing() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(10.0, 10.0));
    s.set_current_fill_color(Color::GREEN);
    assert_eq!(s.shapes()[0].fill(), Color::BLUE);
    assert_eq!(s.current_fill_color(), Color::GREEN);
}

#[test]
fn test_clear_keeps_template() {
    let mut s = surface();
    s.set_current_path_type(PathKind::Falling);
    s.pointer_pressed(PointerEvent::primary(10.0, 10.0));
    s.pointer_pressed(PointerEvent::primary(200.0, 10.0));

    assert_eq!(s.clear_all_shapes(), 2);
    assert!(s.is_empty());
    assert_eq!(s.current_path_type(), PathKind::Falling);

    let mut target = RecordingTarget::new();
    assert_eq!(s.tick(&mut target), 0);
    assert_eq!(target.frames(), 1);
    assert!(target.calls().is_empty());
}

#[test]
fn test_shrinking_insets_pull_shapes_inside() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(440.0, 370.0));
    assert_eq!(s.shapes()[0].position(), Point::new(440.0, 370.0));

    s.set_insets(Insets::new(30.0, 0.0, 20.0, 40.0));
    assert_eq!(s.interior_size(), Size::new(460.0, 350.0));
    assert_eq!(s.shapes()[0].position(), Point::new(410.0, 330.0));
}

#[test]
fn test_collapsed_surface_pins_shapes_to_origin() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(100.0, 100.0));
    s.resize(0.0, 0.0);

    let mut target = RecordingTarget::new();
    for _ in 0..5 {
        s.tick(&mut target);
    }
    assert_eq!(s.shapes()[0].position(), Point::new(0.0, 0.0));
}

#[test]
fn test_ticks_keep_every_shape_inside() {
    let mut s = surface();
    for (i, path) in PathKind::ALL.into_iter().enumerate() {
        s.set_current_path_type(path);
        s.pointer_pressed(PointerEvent::primary(60.0 * i as f64 + 5.0, 300.0));
    }

    let mut target = RecordingTarget::new();
    for _ in 0..500 {
        s.tick(&mut target);
        for shape in s.shapes() {
            let p = shape.position();
            assert!(p.x >= 0.0 && p.x + shape.size().width <= 500.0);
            assert!(p.y >= 0.0 && p.y + shape.size().height <= 400.0);
        }
    }
}

#[test]
fn test_motion_recovers_after_temporary_shrink() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(100.0, 100.0));
    let mut target = RecordingTarget::new();

    s.resize(30.0, 400.0);
    s.tick(&mut target);
    assert_eq!(s.shapes()[0].phase().velocity.dx, 0.0);

    s.resize(500.0, 400.0);
    s.tick(&mut target);
    let velocity = s.shapes()[0].phase().velocity;
    assert!(velocity.dx != 0.0);
    assert!((velocity.magnitude() - 5.0).abs() < 1e-9);
}

#[test]
fn test_boundary_shape_keeps_moving_on_narrow_surface() {
    let mut s = surface();
    s.set_current_path_type(PathKind::Boundary);
    s.pointer_pressed(PointerEvent::primary(0.0, 0.0));
    s.resize(30.0, 400.0);

    let mut target = RecordingTarget::new();
    for _ in 0..5 {
        s.tick(&mut target);
    }
    assert_eq!(s.shapes()[0].position(), Point::new(0.0, 25.0));
}
