use motionkit::{init_logging, run_demo, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("MotionKit {} (built {})", VERSION, BUILD_DATE);

    // Optional config path; otherwise the per-user default.
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&path)?;

    let report = run_demo(&config).await?;
    tracing::info!(
        "Ran {} tick(s) over {} shape(s), {} event(s)",
        report.ticks,
        report.shapes,
        report.events
    );

    Ok(())
}
