//! Journal grid seed posts.

use keanuverse_core::{BlogPost, CardHeight, Category, Mood};

fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    category: Category,
    mood: Mood,
    read_time_min: u32,
    published_at: i64,
    featured: bool,
    height: CardHeight,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category,
        mood,
        image: None,
        read_time_min,
        published_at,
        featured,
        height: Some(height),
    }
}

pub fn journal_posts() -> Vec<BlogPost> {
    vec![
        post(
            "post1",
            "Sitting Quietly in Loud Years",
            "What a famously private person can teach about keeping an inner room nobody else decorates.",
            Category::Mindfulness,
            Mood::Neutral,
            6,
            1_726_185_600,
            true,
            CardHeight::Large,
        ),
        post(
            "post2",
            "The Sandwich on the Bench",
            "Permission to have a visibly ordinary bad day, and why that is not the same as giving up.",
            Category::Healing,
            Mood::Sad,
            4,
            1_723_593_600,
            false,
            CardHeight::Medium,
        ),
        post(
            "post3",
            "Small Kindnesses, Repeated",
            "Crew gifts and subway seats: building a practice out of gestures too small to post about.",
            Category::Community,
            Mood::Happy,
            5,
            1_721_001_600,
            true,
            CardHeight::Medium,
        ),
        post(
            "post4",
            "Breathing Before the Stunt",
            "A stunt team's warm-up breathing routine, adapted for people whose stunts are meetings.",
            Category::Meditation,
            Mood::Neutral,
            7,
            1_718_409_600,
            false,
            CardHeight::Small,
        ),
        post(
            "post5",
            "Rest Is Training",
            "Recovery days are not missed days. What long franchises teach about pacing a life.",
            Category::SelfCare,
            Mood::Happy,
            5,
            1_715_817_600,
            false,
            CardHeight::Medium,
        ),
        post(
            "post6",
            "Grieving in Public, Healing in Private",
            "On carrying loss for decades without letting it harden into a persona.",
            Category::Healing,
            Mood::Sad,
            8,
            1_713_225_600,
            false,
            CardHeight::Large,
        ),
        post(
            "post7",
            "The Dojo Mindset",
            "Beginner's mind at sixty: learning judo, bass lines, and humility on repeat.",
            Category::Mindfulness,
            Mood::Happy,
            6,
            1_710_633_600,
            false,
            CardHeight::Small,
        ),
        post(
            "post8",
            "Checking On Your People",
            "A text that says 'no need to reply' is still a door. Community maintenance for introverts.",
            Category::Community,
            Mood::Neutral,
            4,
            1_708_041_600,
            false,
            CardHeight::Medium,
        ),
        post(
            "post9",
            "Ten Quiet Minutes",
            "A meditation you can do in a trailer, a green room, or a parked car.",
            Category::Meditation,
            Mood::Neutral,
            3,
            1_705_449_600,
            false,
            CardHeight::Small,
        ),
        post(
            "post10",
            "Care Without an Audience",
            "Self-care that is not a product category: sleep, water, and saying no.",
            Category::SelfCare,
            Mood::Neutral,
            5,
            1_702_857_600,
            false,
            CardHeight::Medium,
        ),
        post(
            "post11",
            "After the Credits",
            "What to do with the feeling when the thing you loved ends.",
            Category::Healing,
            Mood::Sad,
            6,
            1_700_265_600,
            false,
            CardHeight::Medium,
        ),
        post(
            "post12",
            "Excellent to Each Other",
            "The Bill & Ted ethic as a community standard, thirty-five years on.",
            Category::Community,
            Mood::Happy,
            4,
            1_697_673_600,
            false,
            CardHeight::Small,
        ),
        post(
            "post13",
            "The Long Walk Home",
            "Walking as meditation, with a playlist of exactly zero podcasts.",
            Category::Mindfulness,
            Mood::Neutral,
            5,
            1_695_081_600,
            false,
            CardHeight::Medium,
        ),
    ]
}
