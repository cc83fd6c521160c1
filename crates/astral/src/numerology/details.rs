//! Static interpretation table keyed by canonical numerology number.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePathDetails {
    pub number: u64,
    pub title: &'static str,
    #[serde(rename = "powerWord")]
    pub power_word: &'static str,
    pub essence: &'static str,
    pub quote: &'static str,
}

pub const LIFE_PATH_DETAILS: &[LifePathDetails] = &[
    LifePathDetails {
        number: 1,
        title: "The Pioneer",
        power_word: "Initiate",
        essence: "Independent, driven and original. Ones open new roads and learn to lead without going it alone.",
        quote: "The first step is the one that counts.",
    },
    LifePathDetails {
        number: 2,
        title: "The Diplomat",
        power_word: "Harmonize",
        essence: "Sensitive, cooperative and perceptive. Twos build bridges and find strength in partnership.",
        quote: "Two hands lift what one cannot.",
    },
    LifePathDetails {
        number: 3,
        title: "The Communicator",
        power_word: "Express",
        essence: "Expressive, social and imaginative. Threes turn feeling into words, color and play.",
        quote: "Say it, sing it, make it.",
    },
    LifePathDetails {
        number: 4,
        title: "The Builder",
        power_word: "Establish",
        essence: "Practical, loyal and methodical. Fours lay foundations that outlast the people who poured them.",
        quote: "Brick by brick, the house stands.",
    },
    LifePathDetails {
        number: 5,
        title: "The Adventurer",
        power_word: "Explore",
        essence: "Curious, restless and adaptable. Fives learn through experience and thrive on change.",
        quote: "Freedom is a verb.",
    },
    LifePathDetails {
        number: 6,
        title: "The Nurturer",
        power_word: "Care",
        essence: "Responsible, warm and protective. Sixes hold families and communities together.",
        quote: "Home is what we make for each other.",
    },
    LifePathDetails {
        number: 7,
        title: "The Seeker",
        power_word: "Understand",
        essence: "Analytical, introspective and spiritual. Sevens look beneath the surface for what is true.",
        quote: "Still water sees the sky.",
    },
    LifePathDetails {
        number: 8,
        title: "The Powerhouse",
        power_word: "Achieve",
        essence: "Ambitious, capable and authoritative. Eights master the material world and learn its limits.",
        quote: "Power is measured by what it builds.",
    },
    LifePathDetails {
        number: 9,
        title: "The Humanitarian",
        power_word: "Serve",
        essence: "Compassionate, generous and idealistic. Nines complete cycles and give back what they gathered.",
        quote: "Every ending makes room.",
    },
    LifePathDetails {
        number: 11,
        title: "The Illuminator",
        power_word: "Inspire",
        essence: "Intuitive, visionary and highly sensitive. Elevens channel insight that lights the way for others.",
        quote: "A lamp does not argue with the dark.",
    },
    LifePathDetails {
        number: 22,
        title: "The Master Builder",
        power_word: "Manifest",
        essence: "Visionary and disciplined at once. Twenty-twos turn large dreams into lasting structures.",
        quote: "Dream in blueprints.",
    },
    LifePathDetails {
        number: 33,
        title: "The Master Teacher",
        power_word: "Uplift",
        essence: "Devoted, selfless and healing. Thirty-threes teach by the example of their compassion.",
        quote: "Love is the lesson and the teacher.",
    },
];

/// Details for a canonical number, `None` for the 0 sentinel or anything else.
pub fn life_path_details(number: u64) -> Option<&'static LifePathDetails> {
    LIFE_PATH_DETAILS.iter().find(|d| d.number == number)
}
