//! nbgen CLI entry point.

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nbgen::cli::Cli;
use nbgen::services::Pipeline;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(cli.quiet);
    pipeline.run(&cli.vars, &cli.template, &cli.output)?;
    Ok(())
}
