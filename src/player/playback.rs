//! Playback state machine

use super::error::{cannot, flag_reason, Messages, PlayerError, PlayerResult};
use super::{VideoPicker, VideoPlayer};

/// The single "currently playing" slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing is playing
    #[default]
    Stopped,
    /// Video id playing
    Playing(String),
    /// Video id paused; only reachable from `Playing`
    Paused(String),
}

impl PlaybackState {
    /// Id of the active video, playing or paused
    pub fn current(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

impl<'a, P: VideoPicker> VideoPlayer<'a, P> {
    /// Play a video, stopping whatever is active first
    pub fn play(&mut self, video_id: &str) -> PlayerResult<Messages> {
        if let Some(reason) = self.flags.reason(video_id) {
            return Err(PlayerError::NotFound(cannot(
                "play video",
                format!("Video is currently flagged (reason: {})", flag_reason(reason)),
            )));
        }

        let catalog = self.catalog;
        let video = catalog
            .get_video(video_id)
            .ok_or_else(|| PlayerError::NotFound(cannot("play video", "Video does not exist")))?;

        let mut messages = Messages::new();
        if self.playback.current().is_some() {
            messages.extend(self.stop()?);
        }

        log::debug!("Playback: {:?} -> Playing({})", self.playback, video.id);
        self.playback = PlaybackState::Playing(video.id.clone());
        messages.push(format!("Playing video: {}", video.title));
        Ok(messages)
    }

    /// Stop the active video
    pub fn stop(&mut self) -> PlayerResult<Messages> {
        let Some(video_id) = self.playback.current() else {
            return Err(PlayerError::InvalidState(cannot(
                "stop video",
                "No video is currently playing",
            )));
        };

        let title = self.title_of(video_id);
        log::debug!("Playback: {:?} -> Stopped", self.playback);
        self.playback = PlaybackState::Stopped;
        Ok(vec![format!("Stopping video: {}", title)])
    }

    /// Pause the playing video
    pub fn pause(&mut self) -> PlayerResult<Messages> {
        match self.playback.clone() {
            PlaybackState::Paused(video_id) => Err(PlayerError::Conflict(format!(
                "Video already paused: {}",
                self.title_of(&video_id)
            ))),
            PlaybackState::Playing(video_id) => {
                let title = self.title_of(&video_id);
                log::debug!("Playback: Playing({}) -> Paused", video_id);
                self.playback = PlaybackState::Paused(video_id);
                Ok(vec![format!("Pausing video: {}", title)])
            }
            PlaybackState::Stopped => Err(PlayerError::InvalidState(cannot(
                "pause video",
                "No video is currently playing",
            ))),
        }
    }

    /// Continue the paused video
    pub fn resume(&mut self) -> PlayerResult<Messages> {
        match self.playback.clone() {
            PlaybackState::Paused(video_id) => {
                let title = self.title_of(&video_id);
                log::debug!("Playback: Paused({}) -> Playing", video_id);
                self.playback = PlaybackState::Playing(video_id);
                Ok(vec![format!("Continuing video: {}", title)])
            }
            PlaybackState::Playing(_) => Err(PlayerError::Conflict(cannot(
                "continue video",
                "Video is not paused",
            ))),
            PlaybackState::Stopped => Err(PlayerError::InvalidState(cannot(
                "continue video",
                "No video is currently playing",
            ))),
        }
    }

    /// Play a uniformly chosen video that is not flagged
    pub fn play_random(&mut self) -> PlayerResult<Messages> {
        let catalog = self.catalog;
        let mut candidates: Vec<&str> = catalog
            .videos()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .map(|video| video.id.as_str())
            .collect();

        if candidates.is_empty() {
            return Err(PlayerError::InvalidState("No videos available".to_string()));
        }

        // HashMap order is arbitrary; sort so a seeded picker is reproducible
        candidates.sort_unstable();
        let index = self.picker.pick(candidates.len()).min(candidates.len() - 1);
        log::debug!("Random pick {} of {} candidates", index, candidates.len());

        self.play(candidates[index])
    }

    /// Describe the active video, if any
    pub fn show_playing(&self) -> Messages {
        match &self.playback {
            PlaybackState::Stopped => vec!["No video is currently playing".to_string()],
            PlaybackState::Playing(video_id) => {
                vec![format!("Currently playing: {}", self.describe(video_id))]
            }
            PlaybackState::Paused(video_id) => {
                vec![format!("Currently playing: {} - PAUSED", self.describe(video_id))]
            }
        }
    }
}
