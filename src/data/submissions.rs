//! Gallery seed submissions.

use keanuverse_core::{Creator, FanSubmission, SubmissionId, SubmissionType};

fn entry(
    title: &str,
    kind: SubmissionType,
    image_url: &str,
    creator: Creator,
    description: &str,
    submitted_at: i64,
    likes: u32,
    featured: bool,
    tags: &[&str],
) -> FanSubmission {
    FanSubmission {
        id: SubmissionId::new(),
        title: title.to_string(),
        kind,
        image_url: image_url.to_string(),
        thumbnail_url: None,
        video_url: None,
        creator,
        description: description.to_string(),
        submitted_at,
        likes,
        featured,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn creator(name: &str, country: &str) -> Creator {
    Creator {
        name: name.to_string(),
        avatar: None,
        country: Some(country.to_string()),
    }
}

/// The fan gallery seed set.
pub fn fan_submissions() -> Vec<FanSubmission> {
    vec![
        entry(
            "Neo in the Rain",
            SubmissionType::Art,
            "/gallery/neo-rain.jpg",
            creator("Sofia Martinez", "Spain"),
            "Digital painting of the final rooftop scene. I spent three weeks on the rain alone.",
            1_718_841_600, // 2024-06-20
            342,
            true,
            &["matrix", "neo", "digital-art"],
        ),
        entry(
            "Premiere Night in Berlin",
            SubmissionType::Photo,
            "/gallery/premiere-berlin.jpg",
            creator("Lukas Weber", "Germany"),
            "Waited six hours at the John Wick: Chapter 4 premiere and he stopped for everyone.",
            1_721_260_800, // 2024-07-18
            518,
            true,
            &["john-wick", "premiere", "berlin"],
        ),
        entry(
            "Dogstar Bass Cover",
            SubmissionType::Video,
            "/gallery/bass-cover.jpg",
            creator("Marta Kowalska", "Poland"),
            "My bass cover of a Dogstar track, recorded in one take. Mistakes included.",
            1_713_916_800, // 2024-04-24
            127,
            false,
            &["dogstar", "music", "bass"],
        ),
        entry(
            "Constantine Ink Study",
            SubmissionType::Art,
            "/gallery/constantine-ink.jpg",
            creator("Yuki Tanaka", "Japan"),
            "Ink and wash study of John Constantine. The coat took most of the ink.",
            1_709_251_200, // 2024-03-01
            203,
            false,
            &["constantine", "ink", "traditional"],
        ),
        entry(
            "Sad Keanu Bench Diorama",
            SubmissionType::Other,
            "/gallery/bench-diorama.jpg",
            creator("Ben Okafor", "Nigeria"),
            "A 1:18 scale diorama of the famous bench photo, sandwich and all.",
            1_706_745_600, // 2024-02-01
            451,
            true,
            &["meme", "diorama", "sad-keanu"],
        ),
        entry(
            "Speed Bus 2525",
            SubmissionType::Art,
            "/gallery/speed-bus.jpg",
            creator("Claire Dubois", "France"),
            "Retro travel-poster treatment of the bus that could not slow down.",
            1_716_163_200, // 2024-05-20
            88,
            false,
            &["speed", "poster", "retro"],
        ),
        entry(
            "Wick Dog Walk",
            SubmissionType::Photo,
            "/gallery/wick-dog.jpg",
            creator("Anna Silva", "Brazil"),
            "My beagle dressed as the most patient assassin in cinema history.",
            1_723_680_000, // 2024-08-15
            264,
            false,
            &["john-wick", "dog", "cosplay"],
        ),
        entry(
            "Bill & Ted Air Guitar Loop",
            SubmissionType::Video,
            "/gallery/air-guitar.jpg",
            creator("Tom Reilly", "Ireland"),
            "A most excellent thirty-second animation loop. Party on, dudes.",
            1_704_067_200, // 2024-01-01
            96,
            false,
            &["bill-and-ted", "animation"],
        ),
        entry(
            "The One - Charcoal Portrait",
            SubmissionType::Art,
            "/gallery/charcoal-portrait.jpg",
            creator("Priya Nair", "India"),
            "Charcoal portrait from the Matrix Resurrections press tour.",
            1_726_444_800, // 2024-09-16
            175,
            false,
            &["portrait", "charcoal", "matrix"],
        ),
    ]
}
