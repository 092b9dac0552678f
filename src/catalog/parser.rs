//! Catalog text format parser
//!
//! One video per line: `title | id | tag1, tag2`. The tag column may be
//! empty or omitted. Blank lines and `#!` comment lines are ignored.

use super::Catalog;
use crate::model::Video;

/// Parse catalog text, skipping lines that do not describe a video
pub fn parse_catalog_str(contents: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with("#!") {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", line_number, line);
            continue;
        };

        if let Some(previous) = catalog.add_video(video) {
            log::warn!(
                "Duplicate video id {:?} on line {}, replacing {:?}",
                previous.id,
                line_number,
                previous.title
            );
        }
    }

    log::debug!("Parsed {} videos from catalog text", catalog.video_count());
    catalog
}

fn parse_line(line: &str) -> Option<Video> {
    let mut columns = line.splitn(3, '|').map(str::trim);

    let title = columns.next().filter(|s| !s.is_empty())?;
    let id = columns.next().filter(|s| !s.is_empty())?;
    let tags = columns
        .next()
        .map(|column| {
            column
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let video = parse_line("Amazing Cats | amazing_cats_video_id | #cat , #animal").unwrap();
        assert_eq!(video.id, "amazing_cats_video_id");
        assert_eq!(video.title, "Amazing Cats");
        assert_eq!(video.tags, vec!["#cat", "#animal"]);
    }

    #[test]
    fn test_parse_missing_tag_column() {
        let video = parse_line("Video about nothing | nothing_video_id").unwrap();
        assert!(video.tags.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "\
#! title | id | tags
Good | good_id | #ok

just a title
 | no_title |
No id |  | #tag
";
        let catalog = parse_catalog_str(text);
        assert_eq!(catalog.video_count(), 1);
        assert!(catalog.get_video("good_id").is_some());
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let catalog = parse_catalog_str("First | same |\nSecond | same |\n");
        assert_eq!(catalog.video_count(), 1);
        assert_eq!(catalog.get_video("same").unwrap().title, "Second");
    }
}
