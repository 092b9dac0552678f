use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalog order
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Check whether the video carries exactly this tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Renders as `title (id) [tag1, tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(", "))
    }
}
