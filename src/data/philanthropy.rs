//! Philanthropy page content.

/// A funded cause
#[derive(Debug, Clone, PartialEq)]
pub struct Initiative {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// A headline number for the impact section
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn initiatives() -> &'static [Initiative] {
    &[
        Initiative {
            title: "Cancer Research",
            icon: "🎗",
            description: "Long-running private support for cancer research, begun after his sister's leukemia diagnosis and sustained for decades without publicity.",
        },
        Initiative {
            title: "Children's Hospitals",
            icon: "🏥",
            description: "Funding for children's hospital wards and equipment, alongside unannounced visits that only surface years later in nurses' stories.",
        },
        Initiative {
            title: "Environmental Conservation",
            icon: "🌲",
            description: "Grants to habitat preservation and conservation groups protecting wild places from development.",
        },
        Initiative {
            title: "Arts & Education",
            icon: "🎭",
            description: "Scholarships and program support for young performers and film-craft apprenticeships.",
        },
    ]
}

pub fn impact_stats() -> &'static [ImpactStat] {
    &[
        ImpactStat { value: "25+", label: "Years of quiet giving" },
        ImpactStat { value: "$30M+", label: "Estimated donations" },
        ImpactStat { value: "4", label: "Core initiative areas" },
        ImpactStat { value: "100%", label: "Of public donations passed through" },
    ]
}

pub fn partners() -> &'static [&'static str] {
    &[
        "SickKids Foundation",
        "Stand Up To Cancer",
        "Conservation International",
        "PETA",
        "Children's Hospital Los Angeles",
        "World Wildlife Fund",
    ]
}
