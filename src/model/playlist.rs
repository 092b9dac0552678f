use serde::{Deserialize, Serialize};

/// A named, ordered, duplicate-free list of video ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, as supplied when the playlist was created
    pub name: String,

    /// Video ids in insertion order
    pub videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: Vec::new(),
        }
    }

    /// Normalized form of a playlist name, used for identity and lookup
    pub fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check if a video is in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Append a video. Returns false if it was already a member.
    pub fn add_video(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.videos.push(video_id);
        true
    }

    /// Remove a video, keeping the order of the rest. Returns false if absent.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every video
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
