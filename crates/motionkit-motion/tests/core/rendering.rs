use motionkit_core::{Color, Size};
use motionkit_motion::{PixmapTarget, PointerEvent, ShapeTemplate, Surface, SurfaceOptions};

fn surface() -> Surface {
    Surface::new(SurfaceOptions {
        size: Size::new(120.0, 80.0),
        template: ShapeTemplate {
            speed: 0.0,
            ..ShapeTemplate::default()
        },
        seed: Some(11),
        ..SurfaceOptions::default()
    })
}

#[test]
fn test_later_shapes_paint_on_top() {
    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(10.0, 10.0));
    s.set_current_fill_color(Color::RED);
    s.pointer_pressed(PointerEvent::primary(5.0, 5.0));
    assert_eq!(s.len(), 2);

    let mut target = PixmapTarget::new(120, 80, Color::WHITE).unwrap();
    s.tick(&mut target);

    assert_eq!(target.pixel(30, 15), Some(Color::RED));
    assert_eq!(target.pixel(57, 27), Some(Color::BLUE));
    assert_eq!(target.pixel(110, 70), Some(Color::WHITE));
}

#[test]
fn test_frame_snapshot_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    let mut s = surface();
    s.pointer_pressed(PointerEvent::primary(30.0, 30.0));
    let mut target = PixmapTarget::new(120, 80, Color::WHITE).unwrap();
    s.tick(&mut target);
    target.save_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 8);
    assert_eq!(&bytes[1..4], b"PNG");
}
