use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use genomedraw_core::palette::{self, DEFAULT_PALETTE_SIZE, DEFAULT_PALETTE_START};
use genomedraw_core::{ColorMap, LayoutOptions};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Genome(#[from] genomedraw_core::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Tikz,
    Json,
}

/// Draw genomes of signed gene markers as TikZ chromosome diagrams
#[derive(Parser)]
#[command(name = "genomedraw", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a genome file.
    ///
    /// Lines starting with '>' name a genome; every other line is a chromosome of
    /// whitespace-separated markers ending in ')' (circular) or '|' (linear), e.g.
    ///
    ///   >ancestor
    ///   1 -2 3)
    ///   4 5|
    Render {
        /// Genome file in UniMoG format
        infile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Tikz)]
        format: Format,

        /// Drawn length of one marker
        #[arg(long, default_value_t = 2.0)]
        marker_len: f64,

        /// Horizontal padding around each chromosome
        #[arg(long, default_value_t = 1.0)]
        x_pad: f64,

        /// Vertical padding around each chromosome
        #[arg(long, default_value_t = 1.0)]
        y_pad: f64,

        /// Value assigned to \genescale in each picture
        #[arg(long, default_value_t = 0.8)]
        gene_scale: f64,

        /// First gene identifier with a palette color
        #[arg(long, default_value_t = palette::DEFAULT_FIRST_COLOR)]
        color_start: usize,

        /// Number of consecutive gene identifiers with a palette color
        #[arg(long, default_value_t = palette::DEFAULT_COLOR_COUNT)]
        color_count: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print random \definecolor declarations for gene colors.
    Palette {
        /// Index of the first color
        #[arg(long, default_value_t = DEFAULT_PALETTE_START)]
        start: usize,

        /// Number of colors
        #[arg(long, default_value_t = DEFAULT_PALETTE_SIZE)]
        count: usize,

        /// Seed for reproducible colors
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render {
            infile,
            format,
            marker_len,
            x_pad,
            y_pad,
            gene_scale,
            color_start,
            color_count,
            output,
        } => {
            let input = std::fs::read_to_string(&infile).map_err(|source| CliError::Read {
                path: infile.clone(),
                source,
            })?;
            info!("read {} bytes from {}", input.len(), infile.display());
            let rendered = match format {
                Format::Json => genomedraw_core::draw_genomes(&input)?,
                Format::Tikz => {
                    let opts = LayoutOptions {
                        marker_len,
                        x_pad,
                        y_pad,
                        gene_scale,
                    };
                    let colors = ColorMap::numbered(color_start, color_count);
                    if colors.is_empty() {
                        warn!("color range is empty, every gene will fail to resolve");
                    } else {
                        info!("{} gene colors from gene{}", colors.len(), color_start);
                    }
                    genomedraw_core::draw_tikz(&input, &opts, &colors)?
                }
            };
            emit(&rendered, output)
        }
        Commands::Palette {
            start,
            count,
            seed,
            output,
        } => {
            let entries = match seed {
                Some(seed) => {
                    palette::generate_palette(&mut StdRng::seed_from_u64(seed), start, count)
                }
                None => palette::generate_palette(&mut rand::rng(), start, count),
            };
            let mut text = String::with_capacity(entries.len() * 48);
            for entry in &entries {
                text.push_str(&entry.to_string());
                text.push('\n');
            }
            emit(&text, output)
        }
    }
}

fn emit(text: &str, output: Option<PathBuf>) -> Result<(), CliError> {
    if let Some(path) = output {
        std::fs::write(&path, text)?;
        info!("wrote {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
    }
    Ok(())
}
