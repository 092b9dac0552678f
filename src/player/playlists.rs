//! Playlist management
//!
//! Playlists are looked up by their lowercased name but keep the name they
//! were created with for display.

use super::error::{cannot, flag_reason, Messages, PlayerError, PlayerResult};
use super::{VideoPicker, VideoPlayer};
use crate::model::Playlist;
use std::collections::HashMap;

/// All playlists of a session
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    /// Playlists indexed by normalized name
    playlists: HashMap<String, Playlist>,

    /// Normalized names in creation order
    order: Vec<String>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a playlist by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key(name))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&Playlist::key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&Playlist::key(name))
    }

    /// Create an empty playlist. Returns false if the name is taken.
    pub fn insert(&mut self, name: &str) -> bool {
        let key = Playlist::key(name);
        if self.playlists.contains_key(&key) {
            return false;
        }
        self.playlists
            .insert(key.clone(), Playlist::new(name.to_string()));
        self.order.push(key);
        true
    }

    /// Remove a playlist by name, ignoring case
    pub fn remove(&mut self, name: &str) -> Option<Playlist> {
        let key = Playlist::key(name);
        let playlist = self.playlists.remove(&key)?;
        self.order.retain(|k| *k != key);
        Some(playlist)
    }

    /// Playlists in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.order.iter().filter_map(move |key| self.playlists.get(key))
    }

    /// Display names sorted ascending
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

impl<'a, P: VideoPicker> VideoPlayer<'a, P> {
    /// Create a new, empty playlist
    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<Messages> {
        if !self.playlists.insert(name) {
            return Err(PlayerError::Conflict(cannot(
                "create playlist",
                "A playlist with the same name already exists",
            )));
        }

        log::debug!("Created playlist {:?}", name);
        Ok(vec![format!("Successfully created new playlist: {}", name)])
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<Messages> {
        let action = format!("add video to {}", name);

        let Some(playlist) = self.playlists.get(name) else {
            return Err(PlayerError::NotFound(cannot(&action, "Playlist does not exist")));
        };
        let catalog = self.catalog;
        let Some(video) = catalog.get_video(video_id) else {
            return Err(PlayerError::NotFound(cannot(&action, "Video does not exist")));
        };
        if playlist.contains(video_id) {
            return Err(PlayerError::Conflict(cannot(&action, "Video already added")));
        }
        if let Some(reason) = self.flags.reason(video_id) {
            return Err(PlayerError::NotFound(cannot(
                &action,
                format!("Video is currently flagged (reason: {})", flag_reason(reason)),
            )));
        }

        if let Some(playlist) = self.playlists.get_mut(name) {
            playlist.add_video(video.id.clone());
        }
        Ok(vec![format!("Added video to {}: {}", name, video.title)])
    }

    /// List playlist names in ascending order
    pub fn show_all_playlists(&self) -> Messages {
        if self.playlists.is_empty() {
            return vec!["No playlists exist yet".to_string()];
        }

        let mut messages = vec!["Showing all playlists:".to_string()];
        messages.extend(self.playlists.sorted_names().into_iter().map(str::to_string));
        messages
    }

    /// List the videos of a playlist in insertion order
    pub fn show_playlist(&self, name: &str) -> PlayerResult<Messages> {
        let playlist = self.playlists.get(name).ok_or_else(|| {
            PlayerError::NotFound(cannot(
                format!("show playlist {}", name),
                "Playlist does not exist",
            ))
        })?;

        let mut messages = vec![format!("Showing playlist: {}", name)];
        if playlist.is_empty() {
            messages.push("No videos here yet".to_string());
        } else {
            messages.extend(playlist.videos.iter().map(|id| self.describe(id)));
        }
        Ok(messages)
    }

    /// Remove one video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<Messages> {
        let action = format!("remove video from {}", name);

        if !self.playlists.contains(name) {
            return Err(PlayerError::NotFound(cannot(&action, "Playlist does not exist")));
        }
        let catalog = self.catalog;
        let Some(video) = catalog.get_video(video_id) else {
            return Err(PlayerError::NotFound(cannot(&action, "Video does not exist")));
        };

        let removed = self
            .playlists
            .get_mut(name)
            .is_some_and(|playlist| playlist.remove_video(video_id));
        if !removed {
            return Err(PlayerError::NotFound(cannot(&action, "Video is not in playlist")));
        }

        Ok(vec![format!("Removed video from {}: {}", name, video.title)])
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> PlayerResult<Messages> {
        let playlist = self.playlists.get_mut(name).ok_or_else(|| {
            PlayerError::NotFound(cannot(
                format!("clear playlist {}", name),
                "Playlist does not exist",
            ))
        })?;

        playlist.clear();
        Ok(vec![format!("Successfully removed all videos from {}", name)])
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, name: &str) -> PlayerResult<Messages> {
        if self.playlists.remove(name).is_none() {
            return Err(PlayerError::NotFound(cannot(
                format!("delete playlist {}", name),
                "Playlist does not exist",
            )));
        }

        log::debug!("Deleted playlist {:?}", name);
        Ok(vec![format!("Deleted playlist: {}", name)])
    }
}
