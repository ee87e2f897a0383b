//! gridchart CLI - CSV to chart series conversion tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridchart::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridchart")]
#[command(
    author,
    version,
    about = "Detect the dataset in a CSV table and emit chart series"
)]
struct Cli {
    /// Log detection steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV table to series/ticks JSON
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show where the dataset sits and which way its series run
    Detect {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        read: ReadArgs,
    },
}

#[derive(clap::Args)]
struct ReadArgs {
    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Spread measure for orientation detection (mav, mad, stddev)
    #[arg(long, default_value = "mav")]
    dispersion: DispersionMeasure,
}

impl ReadArgs {
    fn csv_options(&self) -> Result<CsvReadOptions> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Delimiter '{}' is not a single ASCII byte", self.delimiter))?;
        Ok(CsvReadOptions {
            delimiter,
            ..CsvReadOptions::default()
        })
    }

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::default().with_dispersion(self.dispersion)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            read,
            pretty,
        } => convert_file(&input, output.as_deref(), &read, pretty),
        Commands::Detect { input, read } => detect_file(&input, &read),
    }
}

fn read_grid(input: &Path, read: &ReadArgs) -> Result<Grid> {
    let grid = CsvReader::read_file(input, &read.csv_options()?)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    if grid.is_empty() {
        log::warn!("'{}' contains no cells", input.display());
    }
    Ok(grid)
}

fn convert_file(input: &Path, output: Option<&Path>, read: &ReadArgs, pretty: bool) -> Result<()> {
    let grid = read_grid(input, read)?;
    let result = convert_with_options(&grid, &read.convert_options());
    let json = to_json(&result, pretty)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} series to '{}'",
            result.data.len(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn detect_file(input: &Path, read: &ReadArgs) -> Result<()> {
    let grid = read_grid(input, read)?;
    let detection = detect(&grid, &read.convert_options());
    println!("{}", to_json(&detection, true)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}
