//! Video catalog loading
//!
//! The catalog is a read-only set of videos fixed for the session. It is
//! loaded from a text file with one `title | id | tags` entry per line,
//! or from the catalog bundled with the crate.

mod parser;

pub use parser::parse_catalog_str;

use crate::model::Video;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Catalog bundled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

/// Read-only collection of videos indexed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of videos; later duplicates replace earlier ones
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self::new();
        for video in videos {
            catalog.add_video(video);
        }
        catalog
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Self {
        parse_catalog_str(BUILTIN_CATALOG)
    }

    /// Add a video. Returns the video it replaced, if any.
    pub fn add_video(&mut self, video: Video) -> Option<Video> {
        self.videos.insert(video.id.clone(), video)
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Get all videos, in no particular order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// All videos sorted by title, then id
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        sort_by_title(&mut videos);
        videos
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Sort videos by title, using the id to break ties
pub(crate) fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}

/// Load a catalog file from disk
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video catalog from {:?}", path);

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;
    let catalog = parse_catalog_str(&contents);

    log::info!("Loaded catalog: {} videos", catalog.video_count());
    Ok(catalog)
}
