//! Gallery filter/search engine
//!
//! One pure function over the in-memory submission list. The original
//! surface recomputes on every keystroke, so `apply` is synchronous and
//! allocation-light; every presentation layer (grid, featured strip)
//! shares it instead of carrying its own copy of the predicate logic.

use serde::{Deserialize, Serialize};

use crate::submission::{FanSubmission, SubmissionType};

/// Type facet of the gallery filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    /// "All Submissions"
    All,
    /// A single submission kind
    Only(SubmissionType),
}

impl TypeFilter {
    fn matches(&self, submission: &FanSubmission) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => submission.kind == *kind,
        }
    }
}

/// Sort order for the gallery view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Descending submission timestamp
    Newest,
    /// Descending like count
    Popular,
}

/// Composed filter state for the gallery view
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFilter {
    pub kind: TypeFilter,
    pub query: String,
    pub sort: SortBy,
}

impl Default for GalleryFilter {
    fn default() -> Self {
        Self {
            kind: TypeFilter::All,
            query: String::new(),
            sort: SortBy::Newest,
        }
    }
}

impl GalleryFilter {
    /// Filter and sort a submission list into a fresh view.
    ///
    /// Text search is a case-insensitive substring match against title,
    /// description, creator name, and tags (OR across fields). An empty
    /// query passes everything. Sorting is stable, so equal keys keep
    /// their seed order.
    pub fn apply(&self, submissions: &[FanSubmission]) -> Vec<FanSubmission> {
        let mut view: Vec<FanSubmission> = submissions
            .iter()
            .filter(|s| self.kind.matches(s) && matches_query(s, &self.query))
            .cloned()
            .collect();

        match self.sort {
            SortBy::Newest => view.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at)),
            SortBy::Popular => view.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }

        view
    }
}

/// Case-insensitive free-text predicate over a submission's text fields
pub fn matches_query(submission: &FanSubmission, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    submission.title.to_lowercase().contains(&needle)
        || submission.description.to_lowercase().contains(&needle)
        || submission.creator.name.to_lowercase().contains(&needle)
        || submission
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{Creator, SubmissionId};
    use proptest::prelude::*;

    fn sub(
        title: &str,
        kind: SubmissionType,
        creator: &str,
        description: &str,
        tags: &[&str],
        submitted_at: i64,
        likes: u32,
    ) -> FanSubmission {
        FanSubmission {
            id: SubmissionId::new(),
            title: title.into(),
            kind,
            image_url: "/art.jpg".into(),
            thumbnail_url: None,
            video_url: None,
            creator: Creator::new(creator),
            description: description.into(),
            submitted_at,
            likes,
            featured: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn fixture() -> Vec<FanSubmission> {
        vec![
            sub(
                "Neo in the Rain",
                SubmissionType::Art,
                "Sofia M.",
                "Digital painting of the rooftop scene",
                &["matrix", "neo"],
                1_700_000_000,
                120,
            ),
            sub(
                "Premiere Night",
                SubmissionType::Photo,
                "Dev P.",
                "Met him at the John Wick 4 premiere",
                &["john-wick", "premiere"],
                1_710_000_000,
                340,
            ),
            sub(
                "Bass Cover",
                SubmissionType::Video,
                "Marta K.",
                "Playing a Dogstar song on bass",
                &["dogstar", "music"],
                1_690_000_000,
                55,
            ),
        ]
    }

    #[test]
    fn test_empty_query_returns_full_set() {
        let subs = fixture();
        let view = GalleryFilter::default().apply(&subs);
        assert_eq!(view.len(), subs.len());
    }

    #[test]
    fn test_query_matches_across_fields() {
        let subs = fixture();
        // title
        assert!(matches_query(&subs[0], "rain"));
        // description
        assert!(matches_query(&subs[1], "premiere"));
        // creator name
        assert!(matches_query(&subs[2], "marta"));
        // tag
        assert!(matches_query(&subs[0], "MATRIX"));
        // no field
        assert!(!matches_query(&subs[2], "constantine"));
    }

    #[test]
    fn test_type_filter_narrows() {
        let subs = fixture();
        let filter = GalleryFilter {
            kind: TypeFilter::Only(SubmissionType::Video),
            ..Default::default()
        };
        let view = filter.apply(&subs);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Bass Cover");
    }

    #[test]
    fn test_sort_popular_descending_likes() {
        let subs = fixture();
        let filter = GalleryFilter {
            sort: SortBy::Popular,
            ..Default::default()
        };
        let likes: Vec<u32> = filter.apply(&subs).iter().map(|s| s.likes).collect();
        assert_eq!(likes, vec![340, 120, 55]);
    }

    #[test]
    fn test_sort_newest_descending_timestamp() {
        let subs = fixture();
        let view = GalleryFilter::default().apply(&subs);
        assert_eq!(view[0].title, "Premiere Night");
        assert_eq!(view[2].title, "Bass Cover");
    }

    #[test]
    fn test_filters_compose() {
        let subs = fixture();
        let filter = GalleryFilter {
            kind: TypeFilter::Only(SubmissionType::Art),
            query: "premiere".into(),
            sort: SortBy::Newest,
        };
        // "premiere" only matches a Photo, so the composition is empty
        assert!(filter.apply(&subs).is_empty());
    }

    proptest! {
        #[test]
        fn prop_query_results_all_match(query in "[a-z]{0,6}") {
            let subs = fixture();
            let filter = GalleryFilter {
                query: query.clone(),
                ..Default::default()
            };
            for entry in filter.apply(&subs) {
                prop_assert!(matches_query(&entry, &query));
            }
        }

        #[test]
        fn prop_popular_nonincreasing(likes in proptest::collection::vec(0u32..1000, 1..20)) {
            let subs: Vec<FanSubmission> = likes
                .iter()
                .enumerate()
                .map(|(i, &l)| sub(&format!("s{i}"), SubmissionType::Art, "a", "d", &[], i as i64, l))
                .collect();
            let filter = GalleryFilter { sort: SortBy::Popular, ..Default::default() };
            let view = filter.apply(&subs);
            for pair in view.windows(2) {
                prop_assert!(pair[0].likes >= pair[1].likes);
            }
        }

        #[test]
        fn prop_newest_nonincreasing(stamps in proptest::collection::vec(0i64..10_000, 1..20)) {
            let subs: Vec<FanSubmission> = stamps
                .iter()
                .enumerate()
                .map(|(i, &ts)| sub(&format!("s{i}"), SubmissionType::Photo, "a", "d", &[], ts, 0))
                .collect();
            let view = GalleryFilter::default().apply(&subs);
            for pair in view.windows(2) {
                prop_assert!(pair[0].submitted_at >= pair[1].submitted_at);
            }
        }
    }
}
