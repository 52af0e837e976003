//! GVIPC membership wizard
//!
//! Apply -> challenge -> card. The three pages share one
//! [`MembershipSession`] provided as app context, so what the applicant
//! types on the first page reaches the card on the last one. The original
//! site kept each page's state separate and the card always read
//! "John Doe"; that name survives here only as the fallback for a deep
//! link straight to the card page.

use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::validate::{validate_email, FieldErrors};

/// Reason field cap on the application form
pub const REASON_MAX_CHARS: usize = 250;

/// Card name used when no application exists in the session
pub const FALLBACK_MEMBER_NAME: &str = "John Doe";

/// The fixed favorite-movie choices on the application form
pub const FAVORITE_MOVIES: [&str; 11] = [
    "The Matrix",
    "John Wick",
    "Speed",
    "Point Break",
    "Bill & Ted's Excellent Adventure",
    "Constantine",
    "The Devil's Advocate",
    "47 Ronin",
    "A Scanner Darkly",
    "The Lake House",
    "Other",
];

/// Which challenge variant the member picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Quiz,
    Art,
    Video,
}

impl ChallengeKind {
    pub const ALL: [ChallengeKind; 3] = [ChallengeKind::Quiz, ChallengeKind::Art, ChallengeKind::Video];

    pub fn title(&self) -> &'static str {
        match self {
            ChallengeKind::Quiz => "Keanu Trivia Quiz",
            ChallengeKind::Art => "Fan Art Submission",
            ChallengeKind::Video => "Mini Video Tribute",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            ChallengeKind::Quiz => {
                "Test your knowledge of Keanu Reeves with a short quiz. Score at least 2/3 to pass."
            }
            ChallengeKind::Art => {
                "Upload your Keanu-inspired fan art. Show your creativity and appreciation."
            }
            ChallengeKind::Video => {
                "Record a short video (10-15 seconds) sharing why you're a Keanu fan."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeKind::Quiz => "quiz",
            ChallengeKind::Art => "art",
            ChallengeKind::Video => "video",
        }
    }
}

/// GVIPC application form data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipApplication {
    pub full_name: String,
    pub email: String,
    pub favorite_movie: String,
    pub reason: String,
}

impl MembershipApplication {
    /// Validate every field; errors are keyed by input name
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.full_name.trim().is_empty() {
            errors.set("fullName", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.set("email", "Email is required");
        } else if !validate_email(&self.email) {
            errors.set("email", "Please enter a valid email address");
        }
        if self.favorite_movie.is_empty() {
            errors.set("favoriteMovie", "Please select your favorite Keanu movie");
        }
        if self.reason.trim().is_empty() {
            errors.set("whyFan", "Please tell us why you're a fan");
        } else if self.reason.chars().count() > REASON_MAX_CHARS {
            errors.set(
                "whyFan",
                "Please keep your response to 250 characters or less",
            );
        }
        errors
    }

    /// Live character counter under the reason textarea
    pub fn reason_chars(&self) -> usize {
        self.reason.chars().count()
    }
}

/// Member id printed on the card: `KR-` plus six digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberId(String);

impl MemberId {
    /// Generate a fresh id in the 100000..=999999 range
    pub fn generate() -> Self {
        let number: u32 = rand::rng().random_range(100_000..=999_999);
        Self(format!("KR-{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The issued membership card
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    pub member_id: MemberId,
    pub member_name: String,
    pub member_since: i32,
    pub status: &'static str,
}

impl MemberCard {
    fn issue(member_name: String) -> Self {
        Self {
            member_id: MemberId::generate(),
            member_name,
            member_since: chrono::Utc::now().year(),
            status: "PREMIUM",
        }
    }

    /// Text copied to the clipboard by the card's share action
    pub fn share_line(&self) -> String {
        format!(
            "{} just joined the Global VIP Partnership Club - member {} since {}.",
            self.member_name, self.member_id, self.member_since
        )
    }
}

/// Session-scoped wizard state threaded through apply -> challenge -> card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipSession {
    application: Option<MembershipApplication>,
    completed_challenge: Option<ChallengeKind>,
    card: Option<MemberCard>,
}

impl MembershipSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn application(&self) -> Option<&MembershipApplication> {
        self.application.as_ref()
    }

    pub fn completed_challenge(&self) -> Option<ChallengeKind> {
        self.completed_challenge
    }

    pub fn card(&self) -> Option<&MemberCard> {
        self.card.as_ref()
    }

    /// Store the accepted application (after validation and intake)
    pub fn accept_application(&mut self, application: MembershipApplication) {
        self.application = Some(application);
    }

    /// Record which challenge unlocked the card
    pub fn complete_challenge(&mut self, kind: ChallengeKind) {
        self.completed_challenge = Some(kind);
    }

    /// Issue the card once; revisiting the card page keeps the same id.
    ///
    /// The member name comes from the session's application, falling back
    /// to the original's placeholder when none exists.
    pub fn issue_card(&mut self) -> &MemberCard {
        let name = self
            .application
            .as_ref()
            .map(|a| a.full_name.clone())
            .unwrap_or_else(|| FALLBACK_MEMBER_NAME.to_string());
        self.card.get_or_insert_with(|| MemberCard::issue(name))
    }

    /// Discard everything (fresh wizard run)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_application() -> MembershipApplication {
        MembershipApplication {
            full_name: "Trinity Moss".into(),
            email: "trinity@example.com".into(),
            favorite_movie: "The Matrix".into(),
            reason: "Because he is breathtaking.".into(),
        }
    }

    #[test]
    fn test_valid_application_passes() {
        assert!(valid_application().validate().is_empty());
    }

    #[test]
    fn test_application_field_messages() {
        let errors = MembershipApplication::default().validate();
        assert_eq!(errors.get("fullName"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(
            errors.get("favoriteMovie"),
            Some("Please select your favorite Keanu movie")
        );
        assert_eq!(errors.get("whyFan"), Some("Please tell us why you're a fan"));
    }

    #[test]
    fn test_reason_cap() {
        let app = MembershipApplication {
            reason: "k".repeat(REASON_MAX_CHARS + 1),
            ..valid_application()
        };
        assert_eq!(
            app.validate().get("whyFan"),
            Some("Please keep your response to 250 characters or less")
        );
    }

    #[test]
    fn test_member_id_shape() {
        let id = MemberId::generate();
        let digits = id.as_str().strip_prefix("KR-").expect("KR- prefix");
        assert_eq!(digits.len(), 6);
        let n: u32 = digits.parse().expect("numeric");
        assert!((100_000..=999_999).contains(&n));
    }

    #[test]
    fn test_card_carries_applicant_name() {
        let mut session = MembershipSession::new();
        session.accept_application(valid_application());
        session.complete_challenge(ChallengeKind::Quiz);
        let card = session.issue_card().clone();
        assert_eq!(card.member_name, "Trinity Moss");
        assert_eq!(card.status, "PREMIUM");
    }

    #[test]
    fn test_card_falls_back_without_application() {
        let mut session = MembershipSession::new();
        assert_eq!(session.issue_card().member_name, FALLBACK_MEMBER_NAME);
    }

    #[test]
    fn test_card_issue_is_idempotent() {
        let mut session = MembershipSession::new();
        session.accept_application(valid_application());
        let first = session.issue_card().member_id.clone();
        let second = session.issue_card().member_id.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_the_session() {
        let mut session = MembershipSession::new();
        session.accept_application(valid_application());
        session.issue_card();
        session.reset();
        assert!(session.application().is_none());
        assert!(session.card().is_none());
    }
}
