//! Career timeline content.

/// One milestone on the career page
#[derive(Debug, Clone, PartialEq)]
pub struct CareerMilestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn career_milestones() -> &'static [CareerMilestone] {
    &[
        CareerMilestone {
            year: "1989",
            title: "Bill & Ted's Excellent Adventure",
            description: "The time-travelling slacker comedy that made him a star and gave history class a soundtrack.",
        },
        CareerMilestone {
            year: "1991",
            title: "Point Break",
            description: "Johnny Utah goes undercover with a crew of surfing bank robbers. Pure kinetic cinema.",
        },
        CareerMilestone {
            year: "1994",
            title: "Speed",
            description: "A bomb, a bus, and a fifty-mile-per-hour floor. The role that proved his action credentials.",
        },
        CareerMilestone {
            year: "1999",
            title: "The Matrix",
            description: "Neo wakes up. The Wachowskis' cyberpunk landmark redefines the blockbuster.",
        },
        CareerMilestone {
            year: "2005",
            title: "Hollywood Walk of Fame",
            description: "A star on Hollywood Boulevard for two decades of work.",
        },
        CareerMilestone {
            year: "2014",
            title: "John Wick",
            description: "A quiet man, a stolen Mustang, and the most consequential puppy in film history.",
        },
        CareerMilestone {
            year: "2019",
            title: "Toy Story 4",
            description: "Duke Caboom, Canada's greatest stuntman. Yes, really.",
        },
        CareerMilestone {
            year: "2021",
            title: "The Matrix Resurrections",
            description: "Neo returns, older and stranger, in a sequel about sequels.",
        },
        CareerMilestone {
            year: "2023",
            title: "John Wick: Chapter 4",
            description: "The Baba Yaga's longest night, staircase and all.",
        },
    ]
}
