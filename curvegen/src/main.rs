//! Generate the Montgomery-form parameter tables of the built-in curves.

use anyhow::{Context, Result};
use clap::Parser;
use curvegen::{CURVES, DEFAULT_OUT_DIR, Emitter, EmitterConfig};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// directory the generated files are written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    outdir: PathBuf,

    /// formatter run as `<formatter> <file>` on every generated file, defaults to
    /// $RUSTFMT or `rustfmt --edition 2021`
    #[arg(long, conflicts_with = "no_format")]
    rustfmt: Option<PathBuf>,

    /// leave the generated files unformatted
    #[arg(long, default_value_t = false)]
    no_format: bool,

    /// increase logging verbosity, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut config = EmitterConfig::new(&args.outdir);
    if args.no_format {
        config = config.with_formatter(None);
    } else if let Some(rustfmt) = args.rustfmt {
        config = config.with_formatter(Some(rustfmt));
    }

    let paths = curvegen::generate(&CURVES, &Emitter::new(config))
        .with_context(|| format!("generating curves into {}", args.outdir.display()))?;

    for path in &paths {
        info!(path = %path.display(), "done");
    }

    Ok(())
}
