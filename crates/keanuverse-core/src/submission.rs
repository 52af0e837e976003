//! Fan submission types for the gallery

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a fan submission
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Ulid);

impl SubmissionId {
    /// Create a new SubmissionId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}

/// Kind of fan submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Art,
    Photo,
    Video,
    Other,
}

impl SubmissionType {
    /// All kinds, in gallery filter-bar order
    pub const ALL: [SubmissionType; 4] = [
        SubmissionType::Art,
        SubmissionType::Photo,
        SubmissionType::Video,
        SubmissionType::Other,
    ];

    /// Display label for filter buttons and badges
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionType::Art => "Artwork",
            SubmissionType::Photo => "Photo",
            SubmissionType::Video => "Video",
            SubmissionType::Other => "Other",
        }
    }

    /// Lowercase form used in form <select> values
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Art => "art",
            SubmissionType::Photo => "photo",
            SubmissionType::Video => "video",
            SubmissionType::Other => "other",
        }
    }

    /// Parse a form value; empty or unknown strings are `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "art" => Some(SubmissionType::Art),
            "photo" => Some(SubmissionType::Photo),
            "video" => Some(SubmissionType::Video),
            "other" => Some(SubmissionType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who created a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Creator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            country: None,
        }
    }

    /// First letter of the name, used as the avatar placeholder
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

/// A fan-contributed gallery entry
///
/// Seed data is immutable for the session; `likes` is only ever mutated in
/// component-local state and resets when the detail view reopens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanSubmission {
    pub id: SubmissionId,
    pub title: String,
    pub kind: SubmissionType,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub creator: Creator,
    pub description: String,
    /// Unix timestamp of submission, sort key for "Newest"
    pub submitted_at: i64,
    pub likes: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FanSubmission {
    /// Thumbnail if present, otherwise the full image
    pub fn display_image(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }

    /// Human-readable submission date, e.g. "March 4, 2024"
    pub fn submitted_on(&self) -> String {
        chrono::DateTime::from_timestamp(self.submitted_at, 0)
            .map(|dt| dt.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_id_unique() {
        let a = SubmissionId::new();
        let b = SubmissionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_submission_id_display() {
        let id = SubmissionId::new();
        assert!(id.to_string().starts_with("sub_"));
    }

    #[test]
    fn test_type_parse_round_trip() {
        for kind in SubmissionType::ALL {
            assert_eq!(SubmissionType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SubmissionType::parse(""), None);
        assert_eq!(SubmissionType::parse("painting"), None);
    }

    #[test]
    fn test_display_image_prefers_thumbnail() {
        let mut sub = FanSubmission {
            id: SubmissionId::new(),
            title: "Neo".into(),
            kind: SubmissionType::Art,
            image_url: "/full.jpg".into(),
            thumbnail_url: Some("/thumb.jpg".into()),
            video_url: None,
            creator: Creator::new("Trinity"),
            description: String::new(),
            submitted_at: 0,
            likes: 0,
            featured: false,
            tags: vec![],
        };
        assert_eq!(sub.display_image(), "/thumb.jpg");
        sub.thumbnail_url = None;
        assert_eq!(sub.display_image(), "/full.jpg");
    }

    #[test]
    fn test_creator_initial() {
        assert_eq!(Creator::new("Sofia M.").initial(), "S");
        assert_eq!(Creator::new("").initial(), "");
    }
}
