//! CLI entry point for building and editing tiled photomosaic collages

use artcollage::io::cli::{Cli, CollageRunner};
use clap::Parser;

fn main() -> artcollage::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let runner = CollageRunner::new(cli);
    runner.run()?;
    Ok(())
}
