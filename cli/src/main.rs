//! pptdeck CLI - PowerPoint slide-deck extraction tool
//!
//! Converts .pptx files into deck snapshots and pulls out their media.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pptdeck::snapshot::JsonFormat;
use pptdeck::{DeckParser, ImageAsset, ObjectKind, ParseOptions};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;

/// PowerPoint slide-deck extraction
#[derive(Parser)]
#[command(
    name = "pptdeck",
    author = "iyulab",
    version,
    about = "Turn PowerPoint presentations into editable slide decks",
    long_about = "pptdeck - Extract slides from .pptx files.\n\n\
                  Each slide becomes a background, text blocks and pictures, \
                  written out as a JSON deck snapshot."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a presentation to a JSON deck snapshot
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        /// Slide width in pixels
        #[arg(long, default_value_t = pptdeck::options::DEFAULT_SLIDE_WIDTH)]
        width: u32,

        /// Slide height in pixels
        #[arg(long, default_value_t = pptdeck::options::DEFAULT_SLIDE_HEIGHT)]
        height: u32,

        /// Extract slides one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show slide and object counts
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Write every image in the presentation to a directory
    Extract {
        /// Input file path
        input: PathBuf,

        /// Output directory for images
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Json {
            input,
            output,
            compact,
            width,
            height,
            sequential,
        } => {
            let pb = create_spinner("Parsing presentation...");

            let options = ParseOptions::new()
                .with_slide_size(width, height)
                .with_parallel(!sequential);
            let deck = DeckParser::open(&input)?.with_options(options).parse()?;
            pb.set_message("Writing snapshot...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = pptdeck::snapshot::to_json(&deck, format)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Wrote {} slides to {}",
                    "✓".green().bold(),
                    deck.len(),
                    path.display()
                );
            }
        }

        Commands::Info { input } => {
            let pb = create_spinner("Analyzing presentation...");

            let parser = DeckParser::open(&input)?;
            let deck = parser.parse()?;

            pb.finish_and_clear();

            println!("{}", "Presentation Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Parts".bold(), parser.package().len());
            println!("{}: {}", "Slides".bold(), deck.len());
            println!("{}: {}", "Objects".bold(), deck.object_count());
            println!("{}: {}", "Images".bold(), deck.images().count());

            println!("\n{}", "Slides".cyan().bold());
            println!("{}", "─".repeat(40));
            for slide in &deck.slides {
                let count = |kind| slide.objects_of(kind).count();
                println!(
                    "{:>4}  {} background, {} text, {} pictures",
                    slide.index,
                    count(ObjectKind::Background),
                    count(ObjectKind::Text),
                    count(ObjectKind::Picture),
                );
            }
        }

        Commands::Extract { input, output } => {
            let deck = DeckParser::open(&input)?.parse()?;
            let images: Vec<_> = deck.images().collect();

            fs::create_dir_all(&output)?;

            let files = image_files(&images);
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:30.blue} {pos}/{len} {msg}")?,
            );

            for (filename, image) in &files {
                pb.set_message(filename.clone());
                fs::write(output.join(filename), &image.data)?;
                pb.inc(1);
            }

            pb.finish_and_clear();

            if files.is_empty() {
                println!("{} No images found in presentation", "!".yellow().bold());
            } else {
                println!(
                    "{} Extracted {} images to {}",
                    "✓".green().bold(),
                    files.len(),
                    output.display()
                );
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Output file name for each distinct image.
///
/// An image part shared by several objects is written once. Distinct
/// images whose file names collide are prefixed with their object id.
fn image_files<'a>(images: &[(&'a str, &'a ImageAsset)]) -> Vec<(String, &'a ImageAsset)> {
    let mut parts = HashSet::new();
    let mut taken = HashSet::new();
    let mut files = Vec::new();

    for &(id, image) in images {
        if let Some(name) = &image.name {
            if !parts.insert(name.as_str()) {
                continue;
            }
        }
        let mut filename = image.suggested_filename(id);
        if taken.contains(&filename) {
            filename = format!("{}-{}", id, filename);
        }
        taken.insert(filename.clone());
        files.push((filename, image));
    }
    files
}

fn print_version() {
    println!("{} {}", "pptdeck".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("PowerPoint slide-deck extraction");
    println!();
    println!("Supported formats: PPTX");
    println!("Repository: https://github.com/iyulab/pptdeck");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
