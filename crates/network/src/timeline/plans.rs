//! The two bundled plans.

use super::{ElementStatus, Phase, Plan, PlanType};
use crate::data::LineKey::{Gondola, MetroA, MetroB, MetroC, Premetro};

pub static REALISTIC: Plan = Plan {
    plan_type: PlanType::Realistic,
    name: "Realistic",
    description: "Phased build-out funded within the city's current budget outlook.",
    cost: "Estimated cost: €4.2 billion",
    phases: &[
        Phase {
            year: 2030,
            label: "Premetro",
            description: "Western half of the premetro tunnel opens under the Lower Town.",
            segments: &[(Premetro, &["p-west"])],
            development: ElementStatus::None,
        },
        Phase {
            year: 2035,
            label: "Metro A core",
            description: "Premetro completed; Metro A core between Kvaternikov trg and Savski most.",
            segments: &[(Premetro, &["p-west", "p-east"]), (MetroA, &["a-center"])],
            development: ElementStatus::Partial,
        },
        Phase {
            year: 2040,
            label: "Skyway",
            description: "Sava Skyway gondola opens; Metro A reaches the airport.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (MetroA, &["a-center", "a-south"]),
                (Gondola, &["g-west", "g-east"]),
            ],
            development: ElementStatus::Partial,
        },
        Phase {
            year: 2045,
            label: "Metro B east",
            description: "Metro A complete to Sesvete; Metro B eastern branch.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (MetroA, &["a-east", "a-center", "a-south"]),
                (MetroB, &["b-east"]),
                (Gondola, &["g-west", "g-east"]),
            ],
            development: ElementStatus::Full,
        },
        Phase {
            year: 2050,
            label: "Network",
            description: "Metro B completed west to Podsused; Metro C river corridor opens.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (MetroA, &["a-east", "a-center", "a-south"]),
                (MetroB, &["b-east", "b-west"]),
                (MetroC, &["c-east", "c-west"]),
                (Gondola, &["g-west", "g-east"]),
            ],
            development: ElementStatus::Full,
        },
    ],
};

pub static AMBITIOUS: Plan = Plan {
    plan_type: PlanType::Ambitious,
    name: "Ambitious",
    description: "Parallel construction with EU co-financing; full network by 2040.",
    cost: "Estimated cost: €6.8 billion",
    phases: &[
        Phase {
            year: 2028,
            label: "Groundbreaking",
            description: "Full premetro tunnel and the Sava Skyway open together.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (Gondola, &["g-west", "g-east"]),
            ],
            development: ElementStatus::Partial,
        },
        Phase {
            year: 2032,
            label: "Metro A + B",
            description: "Metro A core and south, Metro B east.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (Gondola, &["g-west", "g-east"]),
                (MetroA, &["a-center", "a-south"]),
                (MetroB, &["b-east"]),
            ],
            development: ElementStatus::Partial,
        },
        Phase {
            year: 2036,
            label: "Metro C",
            description: "Metro A and B complete; Metro C eastern half.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (Gondola, &["g-west", "g-east"]),
                (MetroA, &["a-east", "a-center", "a-south"]),
                (MetroB, &["b-east", "b-west"]),
                (MetroC, &["c-east"]),
            ],
            development: ElementStatus::Full,
        },
        Phase {
            year: 2040,
            label: "Complete",
            description: "Every line in service.",
            segments: &[
                (Premetro, &["p-west", "p-east"]),
                (Gondola, &["g-west", "g-east"]),
                (MetroA, &["a-east", "a-center", "a-south"]),
                (MetroB, &["b-east", "b-west"]),
                (MetroC, &["c-east", "c-west"]),
            ],
            development: ElementStatus::Full,
        },
    ],
};
