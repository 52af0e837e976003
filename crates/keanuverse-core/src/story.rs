//! Personal stories timeline
//!
//! Long-form fan stories shown on the journal page, plus the two-step
//! story-submission draft. Story bodies are markdown, rendered by the UI.

use serde::{Deserialize, Serialize};

use crate::validate::{validate_email, FieldErrors};

/// Story author byline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One story on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStory {
    pub id: String,
    pub title: String,
    /// Unix timestamp, timeline is rendered oldest to newest
    pub shared_at: i64,
    pub summary: String,
    /// Markdown body
    pub content: String,
    pub author: StoryAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TimelineStory {
    /// Human-readable share date, e.g. "January 15, 2023"
    pub fn shared_on(&self) -> String {
        chrono::DateTime::from_timestamp(self.shared_at, 0)
            .map(|dt| dt.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// Summary length cap on the story form
pub const SUMMARY_MAX_CHARS: usize = 150;

/// Minimum story body length
pub const STORY_MIN_CHARS: usize = 100;

/// Draft behind the "Share Your Story" form (two steps)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryDraft {
    pub name: String,
    pub email: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub consent: bool,
}

impl StoryDraft {
    /// Step-1 guard: byline fields plus title and capped summary
    pub fn validate_details(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.set("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.set("email", "Email is required");
        } else if !validate_email(&self.email) {
            errors.set("email", "Please enter a valid email address");
        }
        if self.title.trim().is_empty() {
            errors.set("title", "Title is required");
        }
        if self.summary.trim().is_empty() {
            errors.set("summary", "Summary is required");
        } else if self.summary.chars().count() > SUMMARY_MAX_CHARS {
            errors.set("summary", "Summary should be 150 characters or less");
        }
        errors
    }

    /// Step-2 guard: the story itself and consent
    pub fn validate_story(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.content.trim().is_empty() {
            errors.set("content", "Story content is required");
        } else if self.content.chars().count() < STORY_MIN_CHARS {
            errors.set(
                "content",
                "Please share a bit more about your experience (minimum 100 characters)",
            );
        }
        if !self.consent {
            errors.set("consent", "Please confirm your consent to share your story");
        }
        errors
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_required_fields() {
        let errors = StoryDraft::default().validate_details();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("summary"), Some("Summary is required"));
    }

    #[test]
    fn test_summary_cap() {
        let draft = StoryDraft {
            name: "Jamie".into(),
            email: "jamie@example.com".into(),
            title: "Finding Courage".into(),
            summary: "x".repeat(SUMMARY_MAX_CHARS + 1),
            ..Default::default()
        };
        assert_eq!(
            draft.validate_details().get("summary"),
            Some("Summary should be 150 characters or less")
        );
    }

    #[test]
    fn test_story_minimum_and_consent() {
        let mut draft = StoryDraft {
            content: "Too short".into(),
            consent: false,
            ..Default::default()
        };
        let errors = draft.validate_story();
        assert!(errors.get("content").unwrap().contains("minimum 100 characters"));
        assert!(errors.get("consent").is_some());

        draft.content = "c".repeat(STORY_MIN_CHARS);
        draft.consent = true;
        assert!(draft.validate_story().is_empty());
    }
}
