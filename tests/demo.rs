use motionkit::{run_demo, Config, Point};
use tempfile::tempdir;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_demo_runs_and_writes_snapshot() {
    let dir = tempdir().unwrap();
    let snapshot = dir.path().join("last.png");

    let mut config = Config::default();
    config.animation.seed = Some(42);
    config.animation.period_ms = 5;
    config.demo.duration_ms = 100;
    config.demo.adjusted_period_ms = Some(2);
    config.demo.snapshot_path = Some(snapshot.clone());

    let report = run_demo(&config).await.unwrap();
    assert_eq!(report.shapes, config.demo.clicks.len());
    assert!(report.ticks >= 2);
    // Creations plus start, speed change and stop.
    assert!(report.events >= config.demo.clicks.len() + 3);
    assert!(snapshot.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_overlapping_clicks_toggle_instead_of_create() {
    let mut config = Config::default();
    config.demo.duration_ms = 10;
    config.demo.adjusted_period_ms = None;
    config.demo.clicks = vec![Point::new(10.0, 10.0), Point::new(20.0, 15.0)];

    let report = run_demo(&config).await.unwrap();
    assert_eq!(report.shapes, 1);
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let mut config = Config::default();
    config.animation.period_ms = 0;
    assert!(run_demo(&config).await.is_err());
}
