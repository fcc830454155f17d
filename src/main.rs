use std::path::PathBuf;

use clap::Parser;

use glyphfetch::banner;
use glyphfetch::canvas::halfblock;
use glyphfetch::hostinfo::HostInfo;
use glyphfetch::{layout, logo};

/// Terminal system banner: host facts beside a half-block logo
#[derive(Parser, Debug)]
#[command(name = "glyphfetch", version, about)]
struct Cli {
    /// Image to render as the logo column
    #[arg(long)]
    image: Option<PathBuf>,

    /// Logo column width in terminal cells
    #[arg(long, default_value_t = 36)]
    width: u32,

    /// Banner words used when no image is available; each word becomes its
    /// own block of big text
    #[arg(long, default_value = "glyphfetch")]
    text: String,

    /// Point size for the bitmap banner fallback
    #[arg(long, default_value_t = 80.0)]
    font_size: f32,

    /// Enable info-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr without ANSI so they cannot interleave with the
    // escape-heavy banner on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("glyphfetch {}", env!("CARGO_PKG_VERSION"));

    for row in render(&cli) {
        println!("{row}");
    }
    Ok(())
}

/// Build the full banner: logo column on the left, info column on the right.
fn render(cli: &Cli) -> Vec<String> {
    let info = HostInfo::collect();
    let logo_lines = logo_lines(cli);
    layout::compose(&logo_lines, &info.info_lines())
}

/// The left-hand column: half-block image when one decodes, big text
/// otherwise. Image failure is "no image available", never fatal.
fn logo_lines(cli: &Cli) -> Vec<String> {
    if let Some(path) = &cli.image {
        match logo::prepare(path, Some(cli.width)) {
            Ok(grid) => return halfblock::render(&grid),
            Err(e) => tracing::debug!("image logo unavailable: {e}"),
        }
    }

    let mut lines = Vec::new();
    for (index, word) in cli.text.split_whitespace().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(banner::render_big_text(word, cli.font_size));
    }
    if lines.is_empty() {
        lines.extend(banner::render_big_text(&cli.text, cli.font_size));
    }
    lines
}
