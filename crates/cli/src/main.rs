//! Cache-trace generator CLI.
//!
//! This binary provides one entry point per generator. It performs:
//! 1. **Simple run:** Write `N` wrap-around sequential addresses (default 10000 to `test/simple_trace.txt`).
//! 2. **Composite run:** Write the five-phase mixed trace (default 10000 to `test/large_trace.txt`).
//! 3. **Configuration:** Optionally load a JSON config; command-line flags override it.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tracegen_core::config::{CompositeConfig, Config, SimpleConfig};
use tracegen_core::{CompositeGenerator, Result, SimpleGenerator, TraceSummary};

#[derive(Parser, Debug)]
#[command(
    name = "tracegen",
    author,
    version,
    about = "Synthetic memory-address trace generator for cache simulators",
    long_about = "Write synthetic address traces (one 3-digit hex address per line) for a cache simulator.\n\nExamples:\n  tracegen simple\n  tracegen simple -n 4096 -o test/simple_trace.txt\n  tracegen composite --seed 42\n  tracegen composite --config trace.json --phases"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
struct RunArgs {
    /// JSON configuration file; explicit flags take precedence over its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the run summary as JSON instead of a sentence.
    #[arg(long)]
    json: bool,

    /// Print per-phase line counts after the summary.
    #[arg(long, conflicts_with = "json")]
    phases: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write N wrap-around sequential addresses (line i holds i mod 2048).
    Simple {
        /// Number of addresses; non-positive counts write an empty file [default: 10000].
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_addresses: Option<i64>,

        /// Output file, created or truncated [default: test/simple_trace.txt].
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Write the mixed trace: sequential, localized-random, strided, looping, and conflict phases.
    Composite {
        /// Base address count split across the phases; non-positive counts write an empty file [default: 10000].
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_addresses: Option<i64>,

        /// Output file, created or truncated [default: test/large_trace.txt].
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for a reproducible trace; omitted means OS entropy.
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        run: RunArgs,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let (result, run) = match cli.command {
        Commands::Simple {
            num_addresses,
            output,
            run,
        } => (run_simple(num_addresses, output, &run), run),
        Commands::Composite {
            num_addresses,
            output,
            seed,
            run,
        } => (run_composite(num_addresses, output, seed, &run), run),
    };

    match result {
        Ok(summary) => print_summary(&summary, &run),
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the JSON config at `path`, or the built-in defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(|| Ok(Config::default()), |p| Config::from_file(p))
}

/// Maps a command-line count onto the generator's count; negative values mean zero.
fn address_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Applies command-line overrides to the simple generator's settings.
fn simple_config(
    mut config: SimpleConfig,
    num_addresses: Option<i64>,
    output: Option<PathBuf>,
) -> SimpleConfig {
    if let Some(n) = num_addresses {
        config.num_addresses = address_count(n);
    }
    if let Some(path) = output {
        config.output_file = path;
    }
    config
}

/// Applies command-line overrides to the composite generator's settings.
fn composite_config(
    mut config: CompositeConfig,
    num_addresses: Option<i64>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> CompositeConfig {
    if let Some(n) = num_addresses {
        config.num_addresses = address_count(n);
    }
    if let Some(path) = output {
        config.output_file = path;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config
}

fn run_simple(
    num_addresses: Option<i64>,
    output: Option<PathBuf>,
    run: &RunArgs,
) -> Result<TraceSummary> {
    let config = load_config(run.config.as_deref())?;
    let config = simple_config(config.simple, num_addresses, output);
    debug!(?config, "simple generator configured");
    SimpleGenerator::new(config).run()
}

fn run_composite(
    num_addresses: Option<i64>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    run: &RunArgs,
) -> Result<TraceSummary> {
    let config = load_config(run.config.as_deref())?;
    let config = composite_config(config.composite, num_addresses, output, seed);
    debug!(?config, "composite generator configured");
    CompositeGenerator::new(config)?.run()
}

fn print_summary(summary: &TraceSummary, run: &RunArgs) {
    if run.json {
        match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("[!] FATAL: could not encode summary: {e}");
                process::exit(1);
            }
        }
    } else if run.phases {
        println!("{summary:#}");
    } else {
        println!("{summary}");
    }
}
