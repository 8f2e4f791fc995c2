//! compare2d configuration front end.
//!
//! Resolves the plot configuration the way the comparison plotter does:
//! built-in defaults, or a complete alternate file given with `-c`.
//!
//! ```text
//! compare2d                          # defaults
//! compare2d -c my_config.toml        # alternate source
//! compare2d --print toml > my.toml   # start a new config from the defaults
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::Level;

use compare2d::config::load_config;
use compare2d::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "compare2d")]
#[command(about = "Resolve plot settings for the benchmark comparison scatterplot", long_about = None)]
struct Cli {
    /// Alternate configuration file (TOML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved configuration to stdout
    #[arg(long, value_enum)]
    print: Option<PrintFormat>,

    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintFormat {
    Toml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.print {
        Some(PrintFormat::Toml) => print!("{}", config.to_toml()?),
        Some(PrintFormat::Json) => println!("{}", config.to_json()?),
        None => {}
    }

    Ok(())
}
