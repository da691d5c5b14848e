//! pdfsnap CLI - PDF page-to-image export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsnap::{DocumentBackend, Exporter, HayroBackend, ImageFormat};

#[derive(Parser)]
#[command(name = "pdfsnap")]
#[command(version)]
#[command(about = "Export PDF pages as PNG/JPEG images", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page range (e.g., "1-10", "1,3,5"); all pages if not specified
    #[arg(long)]
    pages: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export pages as images (single file or zip bundle)
    Convert {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5"); all pages if not specified
        #[arg(long)]
        pages: Option<String>,

        /// Output image format
        #[arg(long, value_enum, default_value = "png")]
        format: OutputImage,

        /// JPEG quality, a fraction in (0, 1]
        #[arg(long, default_value = "0.92")]
        quality: f32,

        /// Scale multiplier over the 96 DPI baseline
        #[arg(long, default_value = "1.0")]
        scale: f32,

        /// Print a JSON job summary to stdout
        #[arg(long)]
        json: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputImage {
    /// Lossless PNG
    Png,
    /// Lossy JPEG
    Jpeg,
}

impl From<OutputImage> for ImageFormat {
    fn from(format: OutputImage) -> Self {
        match format {
            OutputImage::Png => ImageFormat::Png,
            OutputImage::Jpeg => ImageFormat::Jpeg,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            pages,
            format,
            quality,
            scale,
            json,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            pages.as_deref(),
            format,
            quality,
            scale,
            json,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    None,
                    cli.pages.as_deref(),
                    OutputImage::Png,
                    0.92,
                    1.0,
                    false,
                )
            } else {
                println!("{}", "Usage: pdfsnap <FILE> [--pages RANGE]".yellow());
                println!("       pdfsnap --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    format: OutputImage,
    quality: f32,
    scale: f32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = HayroBackend::load_file(input)?;
    let page_count = backend.page_count();

    // No explicit selection means every page
    let expression = pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| format!("1-{}", page_count));

    let base_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let selected = pdfsnap::parse_range(&expression, page_count);
    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Rendering pages...");

    let exporter = Exporter::new()
        .with_pages(&expression)
        .with_format(format.into())
        .with_quality(quality)
        .with_scale(scale);

    let result = exporter.export_with_backend(&backend, &base_name, |progress| {
        pb.set_position(progress.current as u64);
    })?;

    pb.finish_with_message("Done!");

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;
    let path = result.bundle.write_to_dir(&output_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        println!(
            "\n{} {} ({} of {} pages, {} bytes)",
            "Saved".green().bold(),
            path.display(),
            result.summary.rendered_count,
            result.summary.requested_pages.len(),
            result.summary.output_bytes,
        );
        if !result.summary.skipped_pages.is_empty() {
            println!(
                "{} pages skipped due to render failures: {:?}",
                "Warning:".yellow().bold(),
                result.summary.skipped_pages
            );
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let backend = HayroBackend::load_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), backend.page_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfsnap".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF page-to-image export tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/pdfsnap/pdfsnap".dimmed()
    );
    println!("License: MIT");
}
