use anyhow::{Context, Result};
use clap::Parser;
use restyle::RunConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "restyle")]
#[command(version, about = "Rewrite a site stylesheet into its dark-first variant")]
#[command(long_about = "Rewrite a site stylesheet into its dark-first variant\n\n\
    The stylesheet is rewritten in place unless an output path is given:\n  \
    restyle style.css [-o style.dark.css] [--report [--compact]] [-v]\n\n\
    Log filtering can be overridden with RUST_LOG.")]
struct Cli {
    /// Stylesheet to transform
    input: PathBuf,

    /// Output stylesheet path (default: overwrite the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON run report instead of the completion message
    #[arg(long)]
    report: bool,

    /// Compact JSON report (default is pretty-printed with indentation)
    #[arg(long, requires = "report")]
    compact: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.output {
        Some(output) => RunConfig::new(cli.input, output),
        None => RunConfig::in_place(cli.input),
    };

    let report = restyle::transform_file(&config).context("Stylesheet transformation failed")?;

    if cli.report {
        println!("{}", report.to_json(!cli.compact)?);
    } else {
        println!(
            "Stylesheet transformation completed: {}",
            report.output.display()
        );
    }

    Ok(())
}

/// Log to stderr so stdout only carries the report
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "restyle=debug" } else { "restyle=info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
