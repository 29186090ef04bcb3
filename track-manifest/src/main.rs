//! track-manifest - writes src/data/tracks.json from static/assets/audio
//!
//! Runs with no arguments from the project root; every path can be
//! overridden for builds that lay the project out differently.
//!
//! An unreadable audio directory is logged and the process still exits 0;
//! a failed manifest write exits non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use motif_common::config::{ProjectRootResolver, TomlConfig};
use motif_common::ProjectLayout;
use track_manifest::{run, ManifestGenerator, RunOutcome, DEFAULT_EXTENSION};
use tracing::{info, warn};

/// Command-line arguments for track-manifest
#[derive(Parser, Debug)]
#[command(name = "track-manifest")]
#[command(about = "Generate the audio track manifest for the web front end")]
#[command(version)]
struct Args {
    /// Web application project root
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Config file (defaults to the per-user motif-tools/config.toml)
    #[arg(short, long, env = "MOTIF_CONFIG")]
    config: Option<PathBuf>,

    /// Directory to scan instead of <root>/static/assets/audio
    #[arg(long)]
    audio_dir: Option<PathBuf>,

    /// Manifest to write instead of <root>/src/data/tracks.json
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Audio file extension to include
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// URL prefix for each track's file path
    #[arg(long, default_value = motif_common::paths::AUDIO_ASSET_PREFIX)]
    asset_prefix: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = TomlConfig::load(args.config.as_deref()).context("Failed to load config")?;
    motif_common::logging::init_tracing(&config.logging.level);

    let root = ProjectRootResolver::new("track-manifest")
        .with_cli_arg(args.root)
        .with_config(&config)
        .resolve();
    let layout = ProjectLayout::new(root);

    let generator = ManifestGenerator::new(
        args.audio_dir.unwrap_or_else(|| layout.audio_dir()),
        args.output.unwrap_or_else(|| layout.tracks_path()),
    )
    .with_extension(&args.extension)
    .with_asset_prefix(&args.asset_prefix);

    info!("Scanning {}", generator.audio_dir().display());

    match run(&generator)? {
        RunOutcome::Written(tracks) => {
            for track in &tracks {
                info!("  {} -> {}", track.name, track.file);
            }
            info!(
                "✓ Track names written to {}",
                generator.output_path().display()
            );
        }
        RunOutcome::DirectoryUnreadable => {
            warn!(
                "Manifest not written; {} left unchanged",
                generator.output_path().display()
            );
        }
    }

    Ok(())
}
