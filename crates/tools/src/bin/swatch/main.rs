use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use luma::{Color, TextColor};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Serialize, Serializer};
use tracing_subscriber::EnvFilter;

mod palette;
mod render;

/// Prints the luminance and readable text color of colors, one JSON object per line.
#[derive(Parser, Debug)]
struct Args {
    /// Render the swatches into a PNG as well
    #[arg(long, global = true)]
    png: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate colors given as #rrggbb or #rrggbbaa
    Check {
        #[arg(required = true)]
        colors: Vec<Color>,
    },
    /// Evaluate randomly generated opaque colors
    Random {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        /// Seed for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Evaluate a YAML palette, or the built-in one
    Palette {
        file: Option<PathBuf>,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Swatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(serialize_with = "serialize_hex")]
    color: Color,
    luminance: f64,
    text: TextColor,
}

impl Swatch {
    fn new(name: Option<String>, color: Color) -> Self {
        let luminance = luma::relative_luminance(color);
        Self {
            name,
            color,
            luminance,
            text: luma::text_color_for_luminance(luminance),
        }
    }
}

fn serialize_hex<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(color)
}

fn random_colors(count: usize, seed: Option<u64>) -> Vec<Color> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            tracing::debug!("using seeded generator ({seed})");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    (0..count).map(|_| luma::random_color(&mut *rng)).collect()
}

fn evaluate(command: Command) -> anyhow::Result<Vec<Swatch>> {
    let swatches = match command {
        Command::Check { colors } => colors
            .into_iter()
            .map(|color| Swatch::new(None, color))
            .collect(),
        Command::Random { count, seed } => random_colors(count, seed)
            .into_iter()
            .map(|color| Swatch::new(None, color))
            .collect(),
        Command::Palette { file } => {
            let palette = match file {
                Some(path) => palette::load(path)?,
                None => palette::builtin(),
            };
            palette
                .into_iter()
                .map(|(name, color)| Swatch::new(Some(name), color))
                .collect()
        }
    };

    Ok(swatches)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let directive = if args.verbose { "swatch=DEBUG" } else { "swatch=INFO" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_str(directive)?)
        .with_writer(std::io::stderr)
        .init();

    let swatches = evaluate(args.command)?;
    tracing::info!("evaluated {} colors", swatches.len());

    let mut stdout = std::io::stdout().lock();
    for swatch in &swatches {
        tracing::debug!("{} -> {:.6} ({})", swatch.color, swatch.luminance, swatch.text);
        let line = serde_json::to_string(swatch).context("serializing swatch")?;
        writeln!(stdout, "{line}").context("writing to stdout")?;
    }

    if let Some(path) = args.png {
        render::write_png(&swatches, path)?;
    }

    Ok(())
}
