//! Chart snapshot types shared by the assembler, the mock generator and
//! read-only consumers.

use serde::{Deserialize, Serialize};

use crate::aspects::{Aspect, EclipticBody};
use crate::western::zodiac::{normalize_degrees, Sign};

pub const SUN: &str = "Sun";
pub const ASCENDANT: &str = "Ascendant";

pub fn is_sun(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(SUN)
}

pub fn is_ascendant(name: &str) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case(ASCENDANT) || name.eq_ignore_ascii_case("asc")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: String,
    /// Longitude in degrees (0-360)
    pub full_degree: f64,
    /// Degree within the sign (0-30)
    pub norm_degree: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    pub is_retro: bool,
    pub sign: Sign,
    pub sign_lord: String,
    /// House number (1-12)
    pub house: u8,
}

impl EclipticBody for PlanetPosition {
    fn body_name(&self) -> &str {
        &self.name
    }

    fn full_degree(&self) -> f64 {
        self.full_degree
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8,
    #[serde(rename = "fullDegree")]
    pub full_degree: f64,
    #[serde(rename = "normDegree")]
    pub norm_degree: f64,
    pub sign: Sign,
}

/// A computed natal chart. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WesternChartData {
    pub planets: Vec<PlanetPosition>,
    /// Empty when the Ascendant was unavailable
    pub houses: Vec<HouseCusp>,
    pub aspects: Vec<Aspect>,
}

impl WesternChartData {
    pub fn planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn sun(&self) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| is_sun(&p.name))
    }

    pub fn ascendant(&self) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| is_ascendant(&p.name))
    }

    pub fn has_houses(&self) -> bool {
        !self.houses.is_empty()
    }
}

/// Equal House cusps starting at the Ascendant degree.
pub fn equal_houses(asc_degree: f64) -> Vec<HouseCusp> {
    (0..12u8)
        .map(|index| {
            let full_degree = normalize_degrees(asc_degree + 30.0 * index as f64);
            HouseCusp {
                house: index + 1,
                full_degree,
                norm_degree: full_degree % 30.0,
                sign: Sign::from_longitude(full_degree),
            }
        })
        .collect()
}

/// Equal House placement (1-12) of a longitude relative to the Ascendant.
pub fn equal_house_of(longitude: f64, asc_degree: f64) -> u8 {
    let offset = normalize_degrees(longitude - asc_degree);
    ((offset / 30.0).floor() as u8).min(11) + 1
}
