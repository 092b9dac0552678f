//! Video flagging
//!
//! A flagged video cannot be played, added to playlists or found by
//! search, but still shows up (annotated) in catalog and playlist listings.

use super::error::{cannot, flag_reason, Messages, PlayerError, PlayerResult};
use super::{VideoPicker, VideoPlayer};
use std::collections::HashMap;

/// Flagged video ids and their reasons; an empty reason means none was given
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    flags: HashMap<String, String>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.flags.contains_key(video_id)
    }

    /// Raw flag reason, `Some("")` when flagged without one
    pub fn reason(&self, video_id: &str) -> Option<&str> {
        self.flags.get(video_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<'a, P: VideoPicker> VideoPlayer<'a, P> {
    /// Flag a video, stopping it first if it is the active one
    pub fn flag(&mut self, video_id: &str, reason: &str) -> PlayerResult<Messages> {
        let catalog = self.catalog;
        let Some(video) = catalog.get_video(video_id) else {
            return Err(PlayerError::NotFound(cannot("flag video", "Video does not exist")));
        };
        if self.flags.is_flagged(video_id) {
            return Err(PlayerError::Conflict(cannot(
                "flag video",
                "Video is already flagged",
            )));
        }

        let mut messages = Messages::new();
        if self.playback.current() == Some(video_id) {
            messages.extend(self.stop()?);
        }

        log::debug!("Flagging {} (reason: {:?})", video_id, reason);
        self.flags.flags.insert(video.id.clone(), reason.to_string());
        messages.push(format!(
            "Successfully flagged video: {} (reason: {})",
            video.title,
            flag_reason(reason)
        ));
        Ok(messages)
    }

    /// Lift the flag from a video
    pub fn unflag(&mut self, video_id: &str) -> PlayerResult<Messages> {
        let catalog = self.catalog;
        let Some(video) = catalog.get_video(video_id) else {
            return Err(PlayerError::NotFound(cannot(
                "remove flag from video",
                "Video does not exist",
            )));
        };
        if self.flags.flags.remove(video_id).is_none() {
            return Err(PlayerError::Conflict(cannot(
                "remove flag from video",
                "Video is not flagged",
            )));
        }

        log::debug!("Unflagged {}", video_id);
        Ok(vec![format!("Successfully removed flag from video: {}", video.title)])
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{sample_catalog, FixedPicker};
    use super::super::PlaybackState;
    use super::*;

    #[test]
    fn test_flag_without_reason() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));

        assert_eq!(
            player.flag("v2", "").unwrap(),
            vec!["Successfully flagged video: Another Video (reason: Not supplied)"]
        );
        assert_eq!(player.flags().reason("v2"), Some(""));
        assert_eq!(
            player.play("v2").unwrap_err(),
            PlayerError::NotFound(
                "Cannot play video: Video is currently flagged (reason: Not supplied)".into()
            )
        );
    }

    #[test]
    fn test_flag_failures() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));

        assert_eq!(
            player.flag("nope", "x").unwrap_err().to_string(),
            "Cannot flag video: Video does not exist"
        );

        player.flag("v1", "first").unwrap();
        let err = player.flag("v1", "second").unwrap_err();
        assert!(matches!(err, PlayerError::Conflict(_)));
        assert_eq!(err.to_string(), "Cannot flag video: Video is already flagged");
        assert_eq!(player.flags().reason("v1"), Some("first"));
    }

    #[test]
    fn test_flag_stops_paused_video() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));
        player.play("v1").unwrap();
        player.pause().unwrap();

        assert_eq!(
            player.flag("v1", "copyright").unwrap(),
            vec![
                "Stopping video: Amazing Cat Video",
                "Successfully flagged video: Amazing Cat Video (reason: copyright)",
            ]
        );
        assert_eq!(player.playback(), &PlaybackState::Stopped);
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));
        player.play("v1").unwrap();

        assert_eq!(player.flag("v2", "").unwrap().len(), 1);
        assert_eq!(player.playback().current(), Some("v1"));
    }

    #[test]
    fn test_unflag() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));

        assert_eq!(
            player.unflag("nope").unwrap_err().to_string(),
            "Cannot remove flag from video: Video does not exist"
        );
        assert_eq!(
            player.unflag("v1").unwrap_err(),
            PlayerError::Conflict("Cannot remove flag from video: Video is not flagged".into())
        );

        player.flag("v1", "").unwrap();
        assert_eq!(
            player.unflag("v1").unwrap(),
            vec!["Successfully removed flag from video: Amazing Cat Video"]
        );
        assert!(player.flags().is_empty());
        assert!(player.play("v1").is_ok());
    }
}
