//! Video Player - in-memory video catalog and playback simulator
//!
//! A fixed catalog of videos, one "currently playing" slot with pause
//! support, user playlists, and a flag mechanism that hides videos from
//! playback and search.

pub mod catalog;
pub mod config;
pub mod model;
pub mod player;
pub mod shell;

pub use catalog::Catalog;
pub use config::PlayerConfig;
pub use player::{PlayerError, VideoPlayer};
pub use shell::Shell;
