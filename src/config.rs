//! Player configuration

use crate::catalog::{parse_catalog, Catalog};
use crate::player::RandomPicker;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for a player session
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Catalog file to load (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Seed for random playback (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a configuration using the bundled catalog and an OS-seeded RNG
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a file
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random playback reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => parse_catalog(path),
            None => {
                log::info!("Using bundled video catalog");
                Ok(Catalog::builtin())
            }
        }
    }

    /// Random picker for this session
    pub fn picker(&self) -> RandomPicker {
        match self.seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::new(),
        }
    }
}
