//! docshape CLI - segment styled documents into structured JSON

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use docshape::{parse_json_str, to_json, JsonFormat};

#[derive(Parser)]
#[command(name = "docshape")]
#[command(version)]
#[command(about = "Segment a styled document into structured JSON using a parse schema", long_about = None)]
struct Cli {
    /// Input file: a JSON array of raw blocks ({"text", "style"})
    #[arg(value_name = "BLOCKS")]
    input: PathBuf,

    /// Parse schema file (JSON array of section schemas)
    #[arg(short, long, value_name = "FILE", env = "DOCSHAPE_SCHEMA")]
    schema: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> docshape::Result<()> {
    let blocks_json = fs::read_to_string(&cli.input)?;
    let schema_json = fs::read_to_string(&cli.schema)?;

    let document = parse_json_str(&blocks_json, &schema_json)?;
    log::debug!("parsed {} section(s)", document.len());

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let rendered = to_json(&document, format)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
