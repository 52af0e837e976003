//! Biography page content.

/// Which thread of the life story an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Personal,
    Career,
    Achievement,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Personal => "Personal",
            EventCategory::Career => "Career",
            EventCategory::Achievement => "Achievement",
        }
    }
}

/// One dated event inside a biography section
#[derive(Debug, Clone, PartialEq)]
pub struct BiographyEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
}

/// A period of the biography with markdown body text
#[derive(Debug, Clone, PartialEq)]
pub struct BiographySection {
    pub id: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub content: &'static str,
    pub events: &'static [BiographyEvent],
}

pub fn biography_sections() -> &'static [BiographySection] {
    &[
        BiographySection {
            id: "early-life",
            title: "Early Life",
            period: "1964-1983",
            content: "Keanu Charles Reeves was born on September 2, 1964, in Beirut, Lebanon. \
His mother, Patricia Taylor, was a costume designer and performer from Essex, England, and his \
father, Samuel Nowlin Reeves Jr., was a geologist of Chinese-Hawaiian heritage. His first name \
means *cool breeze over the mountains* in Hawaiian.\n\n\
After his parents divorced, he moved with his mother through Sydney and New York before \
settling in Toronto, where he spent most of his childhood. He attended several high schools, \
including the Etobicoke School of the Arts, and excelled as an ice hockey goalkeeper - earning \
the nickname **The Wall**.",
            events: &[
                BiographyEvent {
                    year: "1964",
                    title: "Birth in Beirut",
                    description: "Born September 2 in Beirut, Lebanon to Patricia Taylor and Samuel Nowlin Reeves Jr.",
                    category: EventCategory::Personal,
                },
                BiographyEvent {
                    year: "1970s",
                    title: "Moves to Toronto",
                    description: "After Australia and New York, the family settles in Toronto, Canada.",
                    category: EventCategory::Personal,
                },
                BiographyEvent {
                    year: "Early 1980s",
                    title: "Hockey Goalkeeper",
                    description: "Earns the nickname 'The Wall' in goal and dreams of the Olympic team.",
                    category: EventCategory::Personal,
                },
                BiographyEvent {
                    year: "1983",
                    title: "First Stage Roles",
                    description: "Leaves school to pursue acting through Toronto theatre and local television.",
                    category: EventCategory::Career,
                },
            ],
        },
        BiographySection {
            id: "breakthrough",
            title: "Breakthrough Years",
            period: "1984-1998",
            content: "A string of teen roles led to *Bill & Ted's Excellent Adventure* in 1989, \
the comedy that made him a household name. Through the nineties he refused to be typecast: \
point-break surf noir, period drama, and the action turn in *Speed* that proved a gentle \
person can carry a very fast bus.",
            events: &[
                BiographyEvent {
                    year: "1989",
                    title: "Bill & Ted's Excellent Adventure",
                    description: "Ted 'Theodore' Logan becomes a generational catchphrase machine.",
                    category: EventCategory::Career,
                },
                BiographyEvent {
                    year: "1994",
                    title: "Speed",
                    description: "Jack Traven and a bus that cannot drop below fifty.",
                    category: EventCategory::Career,
                },
            ],
        },
        BiographySection {
            id: "the-one",
            title: "Becoming The One",
            period: "1999-2013",
            content: "*The Matrix* changed everything - for him and for action cinema. He famously \
shared his profit participation with the crew, a gesture that became part of how the public \
understands him: quietly generous, allergic to spectacle about it.",
            events: &[
                BiographyEvent {
                    year: "1999",
                    title: "The Matrix",
                    description: "Neo. Bullet time. Cinema spends a decade catching up.",
                    category: EventCategory::Career,
                },
                BiographyEvent {
                    year: "2005",
                    title: "Hollywood Walk of Fame",
                    description: "Receives his star on the Walk of Fame.",
                    category: EventCategory::Achievement,
                },
            ],
        },
        BiographySection {
            id: "renaissance",
            title: "The Reevesaissance",
            period: "2014-present",
            content: "*John Wick* launched a late-career renaissance nobody saw coming, and the \
internet adopted him as its patron saint of being decent. Between franchises he tours with \
Dogstar, runs a motorcycle company, and publishes the BRZRKR comics.",
            events: &[
                BiographyEvent {
                    year: "2014",
                    title: "John Wick",
                    description: "A retired assassin, a stolen car, and a dog. A franchise is born.",
                    category: EventCategory::Career,
                },
                BiographyEvent {
                    year: "2019",
                    title: "Internet's Boyfriend",
                    description: "Cyberpunk 2077 reveal: 'You're breathtaking!' becomes canon.",
                    category: EventCategory::Achievement,
                },
            ],
        },
    ]
}
