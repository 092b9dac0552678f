//! Catalog search with an optional follow-up selection

use super::{Messages, PlayerResult, VideoPicker, VideoPlayer};
use crate::catalog::sort_by_title;
use crate::model::Video;

/// Matches of one search, sorted by title
#[derive(Debug, Clone)]
pub struct SearchResults {
    term: String,
    videos: Vec<Video>,
}

impl SearchResults {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Numbered listing followed by the selection prompt
    pub fn lines(&self) -> Messages {
        if self.videos.is_empty() {
            return vec![format!("No search results for {}", self.term)];
        }

        let mut lines = vec![format!("Here are the results for {}:", self.term)];
        lines.extend(
            self.videos
                .iter()
                .enumerate()
                .map(|(i, video)| format!("{}) {}", i + 1, video)),
        );
        lines.push(
            "Would you like to play any of the above? If yes, specify the number of the video."
                .to_string(),
        );
        lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
        lines
    }

    /// Video id for a 1-based answer; anything else declines
    pub fn resolve(&self, answer: &str) -> Option<&str> {
        let number: usize = answer.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        self.videos.get(index).map(|video| video.id.as_str())
    }
}

impl<'a, P: VideoPicker> VideoPlayer<'a, P> {
    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_by_title(&self, term: &str) -> SearchResults {
        let needle = term.to_lowercase();
        self.search(term, |video| video.title.to_lowercase().contains(&needle))
    }

    /// Unflagged videos carrying exactly `tag`
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        self.search(tag, |video| video.has_tag(tag))
    }

    /// Play the video picked from `results`; a declined answer does nothing
    pub fn play_search_result(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> PlayerResult<Messages> {
        match results.resolve(answer) {
            Some(video_id) => self.play(video_id),
            None => {
                log::debug!("Search selection declined: {:?}", answer);
                Ok(Messages::new())
            }
        }
    }

    fn search(&self, term: &str, predicate: impl Fn(&Video) -> bool) -> SearchResults {
        let mut found: Vec<&Video> = self
            .catalog
            .videos()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .filter(|video| predicate(*video))
            .collect();
        sort_by_title(&mut found);

        log::debug!("Search {:?} matched {} videos", term, found.len());
        SearchResults {
            term: term.to_string(),
            videos: found.into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{sample_catalog, FixedPicker};
    use super::*;

    #[test]
    fn test_title_search_ignores_case_and_sorts() {
        let catalog = sample_catalog();
        let player = VideoPlayer::new(&catalog, FixedPicker(0));

        let results = player.search_by_title("VIDEO");
        let ids: Vec<&str> = results.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
    }

    #[test]
    fn test_search_lines() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));
        player.flag("v2", "").unwrap();

        assert_eq!(
            player.search_by_title("video").lines(),
            vec![
                "Here are the results for video:",
                "1) Amazing Cat Video (v1) [cat, animal]",
                "Would you like to play any of the above? If yes, specify the number of the video.",
                "If your answer is not a valid number, we will assume it's a no.",
            ]
        );
    }

    #[test]
    fn test_no_results() {
        let catalog = sample_catalog();
        let player = VideoPlayer::new(&catalog, FixedPicker(0));

        let results = player.search_by_title("blockchain");
        assert!(results.is_empty());
        assert_eq!(results.lines(), vec!["No search results for blockchain"]);
    }

    #[test]
    fn test_tag_search_is_exact() {
        let catalog = sample_catalog();
        let player = VideoPlayer::new(&catalog, FixedPicker(0));

        let titles: Vec<String> = player
            .search_by_tag("animal")
            .videos()
            .iter()
            .map(|v| v.title.clone())
            .collect();
        assert_eq!(titles, vec!["Amazing Cat Video", "Funny Dogs"]);
        assert!(player.search_by_tag("anim").is_empty());
        assert!(player.search_by_tag("ANIMAL").is_empty());
    }

    #[test]
    fn test_resolve_answers() {
        let catalog = sample_catalog();
        let player = VideoPlayer::new(&catalog, FixedPicker(0));
        let results = player.search_by_tag("animal");

        assert_eq!(results.resolve("1"), Some("v1"));
        assert_eq!(results.resolve(" 2 "), Some("v3"));
        assert_eq!(results.resolve("0"), None);
        assert_eq!(results.resolve("3"), None);
        assert_eq!(results.resolve("-1"), None);
        assert_eq!(results.resolve("no"), None);
        assert_eq!(results.resolve(""), None);
    }

    #[test]
    fn test_play_search_result() {
        let catalog = sample_catalog();
        let mut player = VideoPlayer::new(&catalog, FixedPicker(0));
        let results = player.search_by_tag("animal");

        assert!(player.play_search_result(&results, "nah").unwrap().is_empty());
        assert_eq!(player.playback().current(), None);

        assert_eq!(
            player.play_search_result(&results, "2").unwrap(),
            vec!["Playing video: Funny Dogs"]
        );
    }
}
