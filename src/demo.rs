//! Headless demo run
//!
//! Builds a surface from a [`Config`], applies the scripted clicks, animates
//! it into a raster target for the configured duration and optionally writes
//! the last frame to a PNG.

use motionkit_animation::AnimationLoop;
use motionkit_core::{thread_safe, Color, EventBus, EventFilter, SharedCallback};
use motionkit_motion::{PixmapTarget, PointerEvent, Surface};
use motionkit_settings::Config;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Summary of a finished demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    /// Ticks executed by the animation loop
    pub ticks: usize,
    /// Shapes on the surface at the end
    pub shapes: usize,
    /// Events seen on the bus
    pub events: usize,
}

/// Run the scripted demo on the current tokio runtime.
pub async fn run_demo(config: &Config) -> anyhow::Result<DemoReport> {
    config.validate()?;

    let bus = Arc::new(EventBus::new());
    let events = Arc::new(AtomicUsize::new(0));
    {
        let events = Arc::clone(&events);
        bus.subscribe(EventFilter::All, move |event| {
            events.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("{}", event.description());
        });
    }

    let mut surface = Surface::new(config.surface_options());
    surface.attach_event_bus(Arc::clone(&bus));
    for click in &config.demo.clicks {
        surface.pointer_pressed(PointerEvent::primary(click.x, click.y));
    }
    let surface = thread_safe(surface);

    let width = config.surface.width.round() as u32;
    let height = config.surface.height.round() as u32;
    let target = thread_safe(PixmapTarget::new(width, height, Color::WHITE)?);

    let ticks = Arc::new(AtomicUsize::new(0));
    let tick: SharedCallback = {
        let surface = Arc::clone(&surface);
        let target = Arc::clone(&target);
        let ticks = Arc::clone(&ticks);
        Arc::new(move || {
            surface.lock().tick(&mut *target.lock());
            ticks.fetch_add(1, Ordering::Relaxed);
        })
    };

    let mut animation = AnimationLoop::with_period(Handle::current(), config.period(), tick);
    animation.attach_event_bus(Arc::clone(&bus));

    let duration = Duration::from_millis(config.demo.duration_ms);
    animation.start();
    match config.adjusted_period() {
        Some(period) => {
            tokio::time::sleep(duration / 2).await;
            animation.adjust_speed(period);
            tokio::time::sleep(duration - duration / 2).await;
        }
        None => tokio::time::sleep(duration).await,
    }
    animation.stop();

    if let Some(path) = &config.demo.snapshot_path {
        target.lock().save_png(path)?;
    }

    let report = DemoReport {
        ticks: ticks.load(Ordering::Relaxed),
        shapes: surface.lock().len(),
        events: events.load(Ordering::Relaxed),
    };
    Ok(report)
}
