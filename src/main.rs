//! asciiart - CLI entry point

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asciiart::banner::DEFAULT_BANNER_DIR;
use asciiart::cli::Cli;
use asciiart::{Banner, BannerError, ColorError, Config, RenderError, Rgb};

// Exit codes for different error scenarios. Usage errors exit with clap's
// conventional 2.
const EXIT_BANNER_ERROR: i32 = 3;
const EXIT_RENDER_ERROR: i32 = 4;
const EXIT_COLOR_ERROR: i32 = 5;
const EXIT_CONFIG_ERROR: i32 = 2;

/// Application-level error, tagging each failure with its error family so
/// main can map it to a distinct exit code.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("{0:#}")]
    Config(#[from] anyhow::Error),

    #[error("{0}")]
    Banner(#[from] BannerError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Color(#[from] ColorError),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => EXIT_CONFIG_ERROR,
            AppError::Banner(_) => EXIT_BANNER_ERROR,
            AppError::Render(_) => EXIT_RENDER_ERROR,
            AppError::Color(_) => EXIT_COLOR_ERROR,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::load()?;

    let style = cli.style.unwrap_or(config.banner.default_style);
    let dir = cli
        .banner_dir
        .clone()
        .or_else(|| config.banner.dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BANNER_DIR));
    let banner = Banner::load(&dir.join(style.filename()))?;

    // Literal \n sequences in the argument are line breaks.
    let text = cli.text.replace("\\n", "\n");

    let art = match &cli.color {
        Some(spec) => {
            let rgb = Rgb::parse(spec)?;
            // No --highlight means the whole text: an empty pattern marks
            // every position.
            let pattern = cli.highlight.as_deref().unwrap_or("");
            asciiart::render_highlighted(&text, &banner, pattern, &rgb.ansi_prefix())?
        }
        None => asciiart::render(&text, &banner)?,
    };

    if !art.is_empty() {
        println!("{}", art);
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("asciiart={}", level)),
        ))
        .init();
}
