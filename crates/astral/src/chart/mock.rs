//! Deterministic stand-in chart for when no provider feed is available.
//!
//! The Sun and Ascendant follow the birth date and hour; the other bodies sit
//! at fixed offsets from the Sun. Output depends on nothing but the input.

use crate::aspects::AspectSettings;
use crate::birth::BirthDetails;
use crate::chart::assembler::finish_chart;
use crate::chart::types::{equal_house_of, PlanetPosition, WesternChartData, ASCENDANT, SUN};
use crate::western::rulers::sign_ruler;
use crate::western::zodiac::{self, normalize_degrees, Sign};

/// Degree within its sign where the synthetic Sun is placed
const SUN_DEGREE_IN_SIGN: f64 = 15.0;

// (name, offset from the Sun in degrees, speed in degrees/day)
const CANNED_BODIES: [(&str, f64, f64); 9] = [
    ("Moon", 123.4, 13.18),
    ("Mercury", 12.5, 1.21),
    ("Venus", -24.8, 1.05),
    ("Mars", 67.3, 0.62),
    ("Jupiter", 143.0, 0.08),
    ("Saturn", 201.7, -0.03),
    ("Uranus", 250.2, 0.04),
    ("Neptune", 281.9, -0.01),
    ("Pluto", 312.6, 0.02),
];

/// Signs between the Sun and the Ascendant for a birth hour.
pub fn ascendant_offset(hours: u32) -> usize {
    (((hours % 24 + 18) % 24) / 2) as usize
}

#[derive(Debug, Clone, Default)]
pub struct MockChartGenerator {
    settings: AspectSettings,
}

impl MockChartGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn generate(&self, birth: &BirthDetails) -> WesternChartData {
        let sun_sign = zodiac::resolve(birth.date, birth.month);
        let asc_sign = Sign::from_index((sun_sign.index() + ascendant_offset(birth.hours)) as i64);

        let sun_degree = sun_sign.index() as f64 * 30.0 + SUN_DEGREE_IN_SIGN;
        let asc_degree = asc_sign.index() as f64 * 30.0 + birth.minutes.min(59) as f64 / 2.0;

        let mut planets = Vec::with_capacity(CANNED_BODIES.len() + 2);
        planets.push(mock_planet(SUN, sun_degree, 0.9856, asc_degree));
        for (name, offset, speed) in CANNED_BODIES {
            planets.push(mock_planet(name, sun_degree + offset, speed, asc_degree));
        }
        planets.push(mock_planet(ASCENDANT, asc_degree, 0.0, asc_degree));

        finish_chart(planets, Some(asc_degree), &self.settings)
    }
}

fn mock_planet(name: &str, longitude: f64, speed: f64, asc_degree: f64) -> PlanetPosition {
    let full_degree = normalize_degrees(longitude);
    let sign = Sign::from_longitude(full_degree);
    PlanetPosition {
        name: name.to_string(),
        full_degree,
        norm_degree: full_degree % 30.0,
        speed,
        is_retro: speed < 0.0,
        sign,
        sign_lord: sign_ruler(sign, false).to_string(),
        house: equal_house_of(full_degree, asc_degree),
    }
}
