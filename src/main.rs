use anyhow::Result;
use ridership::pipeline;
use std::{env, path::Path};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(filter).init();

    // ─── 2) parse the day selector ───────────────────────────────────
    let args: Vec<String> = env::args().collect();
    info!(?args, "arguments");
    let day = pipeline::parse_day(&args)?;

    // ─── 3) run the pipeline against the working directory ───────────
    pipeline::run(day, Path::new("."))?;

    Ok(())
}
