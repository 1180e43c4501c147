use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use tzscrape::{config::Config, pipeline};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    // ─── 2) options ──────────────────────────────────────────────────
    let config = Config::parse();
    info!(
        url = %config.url,
        csv = %config.csv.display(),
        txt = %config.txt.display(),
        filter = %config.filter,
        "startup"
    );

    // ─── 3) run; download/extract/write failures end the process ─────
    pipeline::run(&config)?;

    info!("all done");
    Ok(())
}
