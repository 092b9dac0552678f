//! Core data model for the video catalog
//!
//! These types are plain data: the catalog owns videos, the player
//! owns playlists. Neither knows how it is loaded or displayed.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
