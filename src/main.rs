use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gameoflife::driver::Driver;
use gameoflife::driver::Mode;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the grids on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let mode = Mode::from_args(std::env::args().skip(1));

    let stdin = io::stdin();
    let mut driver = Driver::new(stdin.lock(), io::stdout());

    driver
        .run(mode)
        .with_context(|| format!("Failed to run the game in {mode:?} mode"))?;

    Ok(())
}
