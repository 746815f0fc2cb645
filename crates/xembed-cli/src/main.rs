use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_IMAGE: &str = "scenery.png";
const DEFAULT_XML: &str = "image.xml";
const DEFAULT_OUTPUT_DIR: &str = "extracted_images";

#[derive(Debug, Parser)]
#[command(
    name = "xembed",
    version,
    about = "Embed images in XML documents and extract them back"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode an image and write the XML document that embeds it
    Embed {
        /// Source image path
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: PathBuf,
        /// Destination XML path
        #[arg(long, default_value = DEFAULT_XML)]
        output: PathBuf,
    },
    /// Parse an XML document and store every embedded image payload
    Extract {
        /// Source XML path
        #[arg(long, default_value = DEFAULT_XML)]
        input: PathBuf,
        /// Directory for extracted images
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
    /// Full embed-then-extract sequence; stage failures are reported, not fatal
    Run {
        /// Source image path
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: PathBuf,
        /// Intermediate XML path
        #[arg(long, default_value = DEFAULT_XML)]
        output: PathBuf,
        /// Directory for extracted images
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Run {
            image: PathBuf::from(DEFAULT_IMAGE),
            output: PathBuf::from(DEFAULT_XML),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    match Args::parse().command.unwrap_or_default() {
        Command::Embed { image, output } => embed(&image, &output),
        Command::Extract { input, output_dir } => extract(&input, &output_dir).map(|_| ()),
        Command::Run {
            image,
            output,
            output_dir,
        } => {
            run(&image, &output, &output_dir);
            Ok(())
        }
    }
}

fn embed(image: &Path, output: &Path) -> Result<()> {
    let doc = xembed::embed::document_for_image(image);
    xembed::write_file(&doc, output)?;
    info!("created XML file: {}", output.display());
    Ok(())
}

fn extract(input: &Path, output_dir: &Path) -> Result<usize> {
    let payloads = xembed::extract::extract_file(input)?;

    let mut saved = 0usize;
    for payload in &payloads {
        let filename = format!("extracted_image{}.jpg", payload.index);
        match xembed::extract::store_payload(&payload.bytes, &filename, output_dir) {
            Ok(path) => {
                info!("saved image to: {}", path.display());
                saved += 1;
            }
            Err(err) => error!("failed to save {filename}: {err}"),
        }
    }

    if saved == 0 {
        info!("no images extracted from {}", input.display());
    }
    Ok(saved)
}

/// The original fixed sequence: every stage failure is a logged diagnostic
/// and the next stage still runs.
fn run(image: &Path, output: &Path, output_dir: &Path) {
    let doc = xembed::embed::document_for_image(image);
    match xembed::write_file(&doc, output) {
        Ok(()) => info!("created XML file: {}", output.display()),
        Err(err) => error!("failed to create XML file: {err}"),
    }

    match extract(output, output_dir) {
        Ok(count) => info!("extraction finished with {count} image(s)"),
        Err(err) => error!("extraction failed: {err}"),
    }
}
