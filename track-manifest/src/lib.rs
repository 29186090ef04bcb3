//! Track manifest generator
//!
//! Lists the audio asset directory once, keeps files with the audio
//! extension and writes a `[{name, file}]` manifest for the front end.
//!
//! The directory is read completely before the output file is opened, so a
//! failed scan leaves any previous manifest untouched.

use motif_common::paths::AUDIO_ASSET_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Default audio file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "mp3";

/// Manifest generator errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Audio directory could not be listed
    #[error("Error reading audio directory {0}: {1}")]
    ReadDir(PathBuf, std::io::Error),

    /// Manifest could not be rendered or written
    #[error("Error writing manifest {0}: {1}")]
    Write(PathBuf, motif_common::Error),
}

/// One audio asset as consumed by the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// File name without the audio extension
    pub name: String,
    /// Asset URL path, e.g. `/assets/audio/intro.mp3`
    pub file: String,
}

/// Scans an audio directory and writes the track manifest
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    audio_dir: PathBuf,
    output_path: PathBuf,
    extension: String,
    asset_prefix: String,
}

impl ManifestGenerator {
    pub fn new(audio_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            output_path: output_path.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            asset_prefix: AUDIO_ASSET_PREFIX.to_string(),
        }
    }

    /// Audio extension to match, with or without the leading dot
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// URL prefix joined to each file name
    pub fn with_asset_prefix(mut self, prefix: &str) -> Self {
        self.asset_prefix = prefix.to_string();
        self
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// List the audio directory and build track records
    ///
    /// Records are sorted by file name. Directories and non-UTF-8 names are
    /// skipped even if they carry the extension.
    pub fn scan(&self) -> Result<Vec<TrackRecord>, ManifestError> {
        let read_err = |e: std::io::Error| ManifestError::ReadDir(self.audio_dir.clone(), e);
        let suffix = format!(".{}", self.extension);

        let mut file_names = Vec::new();
        for entry in std::fs::read_dir(&self.audio_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;

            let file_name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping non-UTF-8 file name {:?}", raw);
                    continue;
                }
            };
            if !file_name.ends_with(&suffix) {
                continue;
            }
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                debug!("Skipping directory {}", file_name);
                continue;
            }

            file_names.push(file_name);
        }
        file_names.sort();

        let tracks: Vec<TrackRecord> = file_names
            .into_iter()
            .map(|file_name| self.track_for(file_name, &suffix))
            .collect();

        for track in &tracks {
            debug!("Found track {:?} -> {}", track.name, track.file);
        }

        Ok(tracks)
    }

    fn track_for(&self, file_name: String, suffix: &str) -> TrackRecord {
        // A bare ".mp3" has no stem left to keep, so it keeps its full name
        let name = match file_name.strip_suffix(suffix) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => file_name.clone(),
        };
        TrackRecord {
            name,
            file: format!("{}{}", self.asset_prefix, file_name),
        }
    }

    /// Scan, then overwrite the manifest file
    pub fn generate(&self) -> Result<Vec<TrackRecord>, ManifestError> {
        let tracks = self.scan()?;

        motif_common::json_file::write_pretty_json(&self.output_path, &tracks)
            .map_err(|e| ManifestError::Write(self.output_path.clone(), e))?;

        info!(
            "Wrote {} track(s) to {}",
            tracks.len(),
            self.output_path.display()
        );
        Ok(tracks)
    }
}

/// How a [`run`] ended when it did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Manifest written with these tracks
    Written(Vec<TrackRecord>),
    /// Audio directory could not be listed; error logged, nothing written
    DirectoryUnreadable,
}

/// Generate the manifest the way the build task does
///
/// An unreadable audio directory is logged and reported as
/// [`RunOutcome::DirectoryUnreadable`] so the build step still succeeds
/// with the previous manifest in place. Write failures stay errors.
pub fn run(generator: &ManifestGenerator) -> Result<RunOutcome, ManifestError> {
    match generator.generate() {
        Ok(tracks) => Ok(RunOutcome::Written(tracks)),
        Err(e @ ManifestError::ReadDir(..)) => {
            error!("{}", e);
            Ok(RunOutcome::DirectoryUnreadable)
        }
        Err(e) => Err(e),
    }
}

/// Render tracks exactly as [`ManifestGenerator::generate`] writes them
pub fn render(tracks: &[TrackRecord]) -> motif_common::Result<String> {
    motif_common::json_file::to_pretty_json(tracks)
}
