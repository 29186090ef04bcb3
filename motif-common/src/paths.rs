//! Fixed file locations relative to the web application project root

use std::path::{Path, PathBuf};

/// URL prefix under which the front end serves audio assets
pub const AUDIO_ASSET_PREFIX: &str = "/assets/audio/";

/// Layout of the web application project the tools operate on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `static/data/motifs.json`, overwritten by the save endpoint
    pub fn motifs_path(&self) -> PathBuf {
        self.root.join("static").join("data").join("motifs.json")
    }

    /// `static/assets/audio`, scanned by the manifest generator
    pub fn audio_dir(&self) -> PathBuf {
        self.root.join("static").join("assets").join("audio")
    }

    /// `src/data/tracks.json`, written by the manifest generator
    pub fn tracks_path(&self) -> PathBuf {
        self.root.join("src").join("data").join("tracks.json")
    }
}
