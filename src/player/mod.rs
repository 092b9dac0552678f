//! Playback, playlist and flag management
//!
//! `VideoPlayer` owns every piece of mutable session state and borrows the
//! catalog read-only. Each operation either succeeds with the status lines
//! to show the user, or fails with a single `PlayerError` and leaves the
//! state untouched.

mod error;
mod flags;
mod picker;
mod playback;
mod playlists;
mod search;

pub use error::{Messages, PlayerError, PlayerResult};
pub use flags::FlagTable;
pub use picker::{RandomPicker, VideoPicker};
pub use playback::PlaybackState;
pub use playlists::PlaylistStore;
pub use search::SearchResults;

use crate::catalog::Catalog;
use error::flag_reason;

/// Session state for one user of the catalog
pub struct VideoPlayer<'a, P: VideoPicker = RandomPicker> {
    catalog: &'a Catalog,
    picker: P,
    playback: PlaybackState,
    playlists: PlaylistStore,
    flags: FlagTable,
}

impl<'a, P: VideoPicker> VideoPlayer<'a, P> {
    /// Create a player over `catalog`, nothing playing, no playlists or flags
    pub fn new(catalog: &'a Catalog, picker: P) -> Self {
        Self {
            catalog,
            picker,
            playback: PlaybackState::Stopped,
            playlists: PlaylistStore::new(),
            flags: FlagTable::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    /// Report how many videos the catalog holds
    pub fn number_of_videos(&self) -> Messages {
        vec![format!("{} videos in the library", self.catalog.video_count())]
    }

    /// List the whole catalog by title, flagged videos included and annotated
    pub fn show_all_videos(&self) -> Messages {
        let mut messages = vec!["Here's a list of all available videos:".to_string()];
        messages.extend(
            self.catalog
                .sorted_by_title()
                .into_iter()
                .map(|video| self.describe(&video.id)),
        );
        messages
    }

    /// `title (id) [tags]`, with a flag annotation when flagged
    fn describe(&self, video_id: &str) -> String {
        let mut line = match self.catalog.get_video(video_id) {
            Some(video) => video.to_string(),
            None => video_id.to_string(),
        };
        if let Some(reason) = self.flags.reason(video_id) {
            line.push_str(&format!(" - FLAGGED (reason: {})", flag_reason(reason)));
        }
        line
    }

    fn title_of(&self, video_id: &str) -> String {
        self.catalog
            .get_video(video_id)
            .map(|video| video.title.clone())
            .unwrap_or_else(|| video_id.to_string())
    }
}
