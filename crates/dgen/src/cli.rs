//! Command-line arguments and one-shot generation

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dgen_core::dungeon::stats;
use dgen_core::{Dungeon, DungeonRng, GenerationParams, RawParams, generate_with};
use dgen_render::{RenderOptions, json, png, text};
use tracing::info;

/// Room-and-maze dungeon generator
#[derive(Parser, Debug, Clone)]
#[command(name = "dgen")]
#[command(author, version, about = "Generate a dungeon of rooms and mazes", long_about = None)]
pub struct Args {
    /// Grid width in tiles (20-1000)
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in tiles (20-1000)
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of room placement trials (1-100000)
    #[arg(long)]
    pub room_attempts: Option<usize>,

    /// Smallest room side
    #[arg(long)]
    pub min_room_size: Option<usize>,

    /// Room sides stay below this
    #[arg(long)]
    pub max_room_size: Option<usize>,

    /// Tile size in pixels for PNG output (1-20)
    #[arg(long)]
    pub pixel_size: Option<u32>,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Serve dungeons over HTTP instead of generating one
    #[arg(long)]
    pub server: bool,

    /// Address to listen on in server mode
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on in server mode
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Png,
}

impl Args {
    /// Flags as raw values, so they get the same range policy as HTTP queries
    pub fn raw_params(&self) -> RawParams {
        let raw = |v: Option<usize>| v.map(|v| v.to_string());
        RawParams {
            width: raw(self.width),
            height: raw(self.height),
            room_attempts: raw(self.room_attempts),
            min_room_size: raw(self.min_room_size),
            max_room_size: raw(self.max_room_size),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_raw(self.pixel_size.map(|v| v.to_string()).as_deref())
    }

    pub fn rng(&self) -> DungeonRng {
        match self.seed {
            Some(seed) => DungeonRng::new(seed),
            None => DungeonRng::from_entropy(),
        }
    }
}

/// Generate one dungeon and return it in the requested format
pub fn render(args: &Args) -> anyhow::Result<(Dungeon, Vec<u8>)> {
    let params = GenerationParams::from_raw(&args.raw_params());
    let mut rng = args.rng();
    info!(seed = rng.seed(), ?params, "generating dungeon");

    let dungeon = generate_with(&params, &mut rng)?;
    let bytes = match args.format {
        OutputFormat::Text => text::render(&dungeon).into_bytes(),
        OutputFormat::Json => json::to_json(&dungeon)?.into_bytes(),
        OutputFormat::Png => png::encode(&dungeon, &args.render_options())?,
    };

    Ok((dungeon, bytes))
}

/// Generate and write to the output file or stdout
pub fn run(args: &Args) -> anyhow::Result<()> {
    let (dungeon, bytes) = render(args)?;
    let summary = stats(&dungeon);
    info!(
        rooms = summary.rooms,
        regions = summary.regions,
        doors = summary.doors,
        components = summary.components,
        "dungeon generated"
    );

    match &args.output {
        Some(path) => fs::write(path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
