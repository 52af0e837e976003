//! Journal content types and filtering
//!
//! The wellness journal grid: posts tagged with a category and a mood,
//! filtered by either facet plus debounced free text, rendered six to a
//! page.

use serde::{Deserialize, Serialize};

/// Journal category facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Mindfulness,
    SelfCare,
    Meditation,
    Healing,
    Community,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mindfulness,
        Category::SelfCare,
        Category::Meditation,
        Category::Healing,
        Category::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mindfulness => "Mindfulness",
            Category::SelfCare => "Self-Care",
            Category::Meditation => "Meditation",
            Category::Healing => "Healing",
            Category::Community => "Community",
        }
    }
}

/// Reader mood facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Uplifting",
            Mood::Neutral => "Reflective",
            Mood::Sad => "Comforting",
        }
    }
}

/// Card height hint for the masonry layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardHeight {
    Small,
    Medium,
    Large,
}

/// One journal post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub read_time_min: u32,
    /// Unix timestamp, newest first in the grid
    pub published_at: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub height: Option<CardHeight>,
}

/// Composed journal filter: facets AND debounced text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFilter {
    pub category: Option<Category>,
    pub mood: Option<Mood>,
    pub query: String,
}

impl BlogFilter {
    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(category) = self.category {
            if post.category != category {
                return false;
            }
        }
        if let Some(mood) = self.mood {
            if post.mood != mood {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle)
    }

    /// Filter, newest first
    pub fn apply(&self, posts: &[BlogPost]) -> Vec<BlogPost> {
        let mut view: Vec<BlogPost> = posts.iter().filter(|p| self.matches(p)).cloned().collect();
        view.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, category: Category, mood: Mood, published_at: i64) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: title.into(),
            excerpt: format!("{title} excerpt"),
            category,
            mood,
            image: None,
            read_time_min: 4,
            published_at,
            featured: false,
            height: None,
        }
    }

    fn fixture() -> Vec<BlogPost> {
        vec![
            post("p1", "Morning Stillness", Category::Meditation, Mood::Neutral, 100),
            post("p2", "Small Acts of Care", Category::SelfCare, Mood::Happy, 300),
            post("p3", "Sitting With Grief", Category::Healing, Mood::Sad, 200),
        ]
    }

    #[test]
    fn test_default_filter_passes_all_newest_first() {
        let view = BlogFilter::default().apply(&fixture());
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p1"]);
    }

    #[test]
    fn test_category_and_mood_compose() {
        let filter = BlogFilter {
            category: Some(Category::Healing),
            mood: Some(Mood::Sad),
            query: String::new(),
        };
        let view = filter.apply(&fixture());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "p3");

        let mismatched = BlogFilter {
            category: Some(Category::Healing),
            mood: Some(Mood::Happy),
            query: String::new(),
        };
        assert!(mismatched.apply(&fixture()).is_empty());
    }

    #[test]
    fn test_query_checks_title_and_excerpt() {
        let filter = BlogFilter {
            query: "STILLNESS".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&fixture()).len(), 1);

        let excerpt_hit = BlogFilter {
            query: "grief excerpt".into(),
            ..Default::default()
        };
        assert_eq!(excerpt_hit.apply(&fixture())[0].id, "p3");
    }
}
