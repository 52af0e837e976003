//! Personal-stories timeline seed.

use keanuverse_core::{StoryAuthor, TimelineStory};

fn story(
    id: &str,
    title: &str,
    shared_at: i64,
    summary: &str,
    content: &str,
    author: &str,
    audio_url: Option<&str>,
    tags: &[&str],
) -> TimelineStory {
    TimelineStory {
        id: id.to_string(),
        title: title.to_string(),
        shared_at,
        summary: summary.to_string(),
        content: content.to_string(),
        author: StoryAuthor {
            name: author.to_string(),
            avatar: None,
        },
        audio_url: audio_url.map(String::from),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn timeline_stories() -> Vec<TimelineStory> {
    vec![
        story(
            "story1",
            "The Bench Photo Got Me Through",
            1_673_740_800, // 2023-01-15
            "A meme about sadness turned out to be about company.",
            "When my father died I could not explain to anyone what the days felt like. \
Someone sent me the bench photo as a joke and I ended up keeping it on my desk.\n\n\
It helped to see someone allowed to just sit with it. No performance, no fixing, \
a sandwich and a bad day. I started letting myself have bad days the same way, \
and they started to pass the way his apparently did.\n\n\
I am sharing this because grief advice is everywhere and company is rare. Be the bench.",
            "Jamie L.",
            Some("/audio/story1.mp3"),
            &["grief", "memes", "company"],
        ),
        story(
            "story2",
            "Motorcycles and My Brother",
            1_679_443_200, // 2023-03-22
            "A shared obsession rebuilt a conversation twenty years quiet.",
            "My brother and I had not really talked since the nineties. Then he sent me a \
video about a custom motorcycle company and wrote one line: 'this is the guy from Speed.'\n\n\
We have now watched every interview about those bikes, argued about frame geometry, and \
taken one extremely slow road trip together. The bikes were never the point. Having a \
subject neither of us owned made it safe to talk again.\n\n\
Find the neutral subject. Let it carry the weight until you can.",
            "Michael T.",
            None,
            &["family", "motorcycles", "reconnection"],
        ),
        story(
            "story3",
            "Drawing Neo Every Day for a Year",
            1_683_676_800, // 2023-05-10
            "When words failed, a daily sketch habit helped me say what I couldn't.",
            "Depression drained the color out of everything. A therapist suggested a daily \
practice - anything small and repeatable. I picked drawing the same still from The Matrix \
every day, badly.\n\n\
Day 1 was a scribble. Day 90 had shading. Day 200 I caught myself experimenting with the \
pose, which is when I realized experimenting had come back to other parts of my life too.\n\n\
The practice did not cure anything. It was a handrail, and handrails matter on stairs.",
            "Sophia R.",
            Some("/audio/story3.mp3"),
            &["depression", "art", "habits"],
        ),
        story(
            "story4",
            "Saying No Like John Wick Says Yes",
            1_689_638_400, // 2023-07-18
            "Setting boundaries transformed my relationships and self-worth.",
            "I used to agree to everything and resent everyone. What finally landed for me \
was a silly reframe from these movies: commitment is only impressive because of everything \
it declines.\n\n\
I started declining. Politely, completely, without a second paragraph of apology. The \
first few times felt like jumping off a roof. Then people simply... adjusted, and the \
ones who did not adjust told me what I needed to know about them.\n\n\
A focused yes needs a thousand quiet nos. That is the whole trick.",
            "Dana W.",
            None,
            &["boundaries", "self-worth"],
        ),
    ]
}
