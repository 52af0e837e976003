//! Form validation
//!
//! Field-level validation shared by the submission form modal, the story
//! form, and the GVIPC application. Errors are keyed by field name,
//! surfaced inline, and cleared as soon as the field is edited.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PortalError;
use crate::submission::SubmissionType;
use crate::upload::ArtUpload;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// True if `email` looks like an address (local@domain.tld, no whitespace)
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field-keyed validation errors
///
/// Keys match the input `name`s on the form so each message renders under
/// its own field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clear a single field's error (called when the field is edited)
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the first error into a [`PortalError`], if any
    pub fn into_error(mut self) -> Option<PortalError> {
        self.0
            .pop_first()
            .map(|(field, message)| PortalError::Validation { field, message })
    }
}

/// Which step of the two-step submission form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFormStep {
    /// Title, type, file, description
    Details,
    /// Name, email, country
    CreatorInfo,
    /// Terminal thank-you state
    Submitted,
}

/// Draft state behind the gallery's "Submit Your Fan Art" modal
///
/// Holds everything the two steps collect. `validate_details` guards the
/// Details -> CreatorInfo transition; `validate_creator` guards the final
/// submit. Closing after a completed submission calls `reset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub title: String,
    pub kind: Option<SubmissionType>,
    pub file: Option<ArtUpload>,
    pub description: String,
    pub name: String,
    pub email: String,
    pub country: String,
    pub tags: String,
}

impl SubmissionDraft {
    /// Step-1 guard: title, type, file, and description are all required
    pub fn validate_details(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.set("title", "Title is required");
        }
        if self.kind.is_none() {
            errors.set("type", "Please select a submission type");
        }
        if self.file.is_none() {
            errors.set("file", "Please upload a file");
        }
        if self.description.trim().is_empty() {
            errors.set("description", "Description is required");
        }
        errors
    }

    /// Step-2 guard: name and a well-formed email are required
    pub fn validate_creator(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.set("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.set("email", "Email is required");
        } else if !validate_email(&self.email) {
            errors.set("email", "Please enter a valid email address");
        }
        errors
    }

    /// Comma-separated tags field parsed into trimmed, non-empty entries
    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    /// Back to pristine: fields, file, and implicitly step and errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!validate_email("user@"));
        assert!(!validate_email("userexample.com"));
        assert!(!validate_email(""));
        assert!(!validate_email("us er@example.com"));
    }

    #[test]
    fn test_details_requires_every_field() {
        let draft = SubmissionDraft::default();
        let errors = draft.validate_details();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("type"), Some("Please select a submission type"));
        assert_eq!(errors.get("file"), Some("Please upload a file"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_details_passes_when_complete() {
        let draft = SubmissionDraft {
            title: "Neo sketch".into(),
            kind: Some(SubmissionType::Art),
            file: Some(ArtUpload::accepted_for_test("neo.png", 1024)),
            description: "Pencil on paper".into(),
            ..Default::default()
        };
        assert!(draft.validate_details().is_empty());
    }

    #[test]
    fn test_creator_email_messages() {
        let mut draft = SubmissionDraft {
            name: "Sofia".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate_creator().get("email"),
            Some("Email is required")
        );
        draft.email = "sofia@".into();
        assert_eq!(
            draft.validate_creator().get("email"),
            Some("Please enter a valid email address")
        );
        draft.email = "sofia@example.com".into();
        assert!(draft.validate_creator().is_empty());
    }

    #[test]
    fn test_errors_clear_on_edit() {
        let mut errors = FieldErrors::new();
        errors.set("title", "Title is required");
        errors.set("file", "Please upload a file");
        errors.clear("title");
        assert_eq!(errors.get("title"), None);
        assert_eq!(errors.get("file"), Some("Please upload a file"));
    }

    #[test]
    fn test_parsed_tags() {
        let draft = SubmissionDraft {
            tags: "matrix, neo , ,john-wick".into(),
            ..Default::default()
        };
        assert_eq!(draft.parsed_tags(), vec!["matrix", "neo", "john-wick"]);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut draft = SubmissionDraft {
            title: "x".into(),
            email: "a@b.c".into(),
            ..Default::default()
        };
        draft.reset();
        assert_eq!(draft, SubmissionDraft::default());
    }
}
