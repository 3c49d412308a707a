//! # Stego Binary Entry Point
//!
//! Thin wrapper around the `lsb_stego` library.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin stego -- hide --input cover.png --output secret \
//!   --message "meet at noon" --delimiter "#!"
//! cargo run --bin stego -- reveal --input secret.png --delimiter "#!"
//! cargo run --bin stego -- capacity --input cover.png --delimiter "#!" --json
//! cargo run --bin stego -- --config config/stego.toml interactive
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

use lsb_stego::common::config::StegoConfig;
use lsb_stego::imaging;
use lsb_stego::interactive;
use lsb_stego::processing::planner::capacity_report;
use lsb_stego::processing::random::RandomSource;
use lsb_stego::{hide, reveal};

/// Command-line arguments for the stego binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    ///
    /// Example: config/stego.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Hide {
        #[arg(short, long)]
        input: PathBuf,
        /// Destination; the configured lossless extension is applied
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long)]
        message: String,
        #[arg(short, long)]
        delimiter: String,
        /// Seed for a reproducible start column
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recover a hidden message
    Reveal {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        delimiter: String,
    },
    /// Show how much text an image can carry
    Capacity {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        delimiter: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for every value on stdin
    Interactive,
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(verbose: bool) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();
}

fn make_rng(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => StegoConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StegoConfig::default(),
    };

    match args.command {
        Command::Hide {
            input,
            output,
            message,
            delimiter,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let written = hide(&message, &delimiter, &input, &output, &config, rng.as_mut())?;
            println!("{}", written.display());
        }
        Command::Reveal { input, delimiter } => {
            let message = reveal(&input, &delimiter, &config)?;
            println!("{message}");
        }
        Command::Capacity {
            input,
            delimiter,
            json,
        } => {
            let grid = imaging::load_grid(&input, config.layout.channels_per_pixel)?;
            let report = capacity_report(
                grid.width(),
                grid.height(),
                delimiter.chars().count(),
                &config.layout,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}x{} image, {} channel bits, up to {} characters with delimiter {:?}",
                    report.width,
                    report.height,
                    report.total_bits,
                    report.max_message_chars,
                    delimiter
                );
            }
        }
        Command::Interactive => {
            info!("Starting interactive session");
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let mut rng = rand::thread_rng();
            interactive::run_session(&mut input, &mut output, &config, &mut rng)?;
        }
    }

    Ok(())
}
