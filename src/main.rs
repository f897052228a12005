use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "img2header")]
#[command(about = "Convert a bitmap image into a 1-bit packed PROGMEM array header")]
struct Cli {
    /// Path to the source image (any format the image crate can decode)
    input: PathBuf,

    /// Image width in pixels
    width: u32,

    /// Image height in pixels (rows)
    height: u32,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the generated header.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "img2header=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let header = img2header::pack(&cli.input, cli.width, cli.height)?;
    println!("{header}");

    Ok(())
}
