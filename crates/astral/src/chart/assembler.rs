use crate::aspects::{AspectDetector, AspectSettings};
use crate::birth::BirthDetails;
use crate::chart::feed::{FeedBody, ProviderFeed};
use crate::chart::types::{
    equal_house_of, equal_houses, is_ascendant, is_sun, PlanetPosition, WesternChartData,
};
use crate::western::rulers::sign_ruler;
use crate::western::zodiac::{self, Sign};

/// Builds a corrected Equal House chart from an already-fetched provider feed.
#[derive(Debug, Clone, Default)]
pub struct ChartAssembler {
    settings: AspectSettings,
}

impl ChartAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn assemble(&self, feed: &ProviderFeed, birth: &BirthDetails) -> WesternChartData {
        let asc_degree = feed
            .bodies()
            .iter()
            .find(|b| is_ascendant(&b.name))
            .map(|b| b.full_degree);

        let mut planets: Vec<PlanetPosition> = feed
            .bodies()
            .iter()
            .map(|body| build_planet(body, asc_degree))
            .collect();

        // The provider is unreliable for the Sun near sign boundaries; the
        // calendar date is authoritative. Other bodies keep the provider sign.
        let sun_sign = zodiac::resolve(birth.date, birth.month);
        for planet in planets.iter_mut().filter(|p| is_sun(&p.name)) {
            if planet.sign != sun_sign {
                log::debug!(
                    "Chart: overriding provider Sun sign {} with {} for {:02}-{:02}",
                    planet.sign,
                    sun_sign,
                    birth.month,
                    birth.date
                );
                planet.sign_lord = sign_ruler(sun_sign, false).to_string();
            }
            planet.sign = sun_sign;
        }

        finish_chart(planets, asc_degree, &self.settings)
    }
}

/// Houses and aspects for a finished planet list. Shared with the mock
/// generator so live and synthetic charts follow one path.
pub(crate) fn finish_chart(
    planets: Vec<PlanetPosition>,
    asc_degree: Option<f64>,
    settings: &AspectSettings,
) -> WesternChartData {
    let houses = asc_degree.map(equal_houses).unwrap_or_default();

    let detector = AspectDetector::with_settings(settings);
    let aspects = if settings.include_ascendant {
        detector.detect(&planets)
    } else {
        let bodies: Vec<PlanetPosition> = planets
            .iter()
            .filter(|p| !is_ascendant(&p.name))
            .cloned()
            .collect();
        detector.detect(&bodies)
    };

    WesternChartData {
        planets,
        houses,
        aspects,
    }
}

/// Provider sign index when it is in range, otherwise the longitude's sign.
pub fn resolve_feed_sign(body: &FeedBody) -> Sign {
    match body.current_sign {
        Some(idx) if (0..12).contains(&idx) => Sign::from_index(idx),
        Some(idx) => {
            log::debug!(
                "Chart: provider sign index {} for {} out of range, deriving from {:.2}",
                idx,
                body.name,
                body.full_degree
            );
            Sign::from_longitude(body.full_degree)
        }
        None => Sign::from_longitude(body.full_degree),
    }
}

fn build_planet(body: &FeedBody, asc_degree: Option<f64>) -> PlanetPosition {
    let sign = resolve_feed_sign(body);
    let house = if (1..=12).contains(&body.house_number) {
        body.house_number
    } else {
        match asc_degree {
            Some(asc) => equal_house_of(body.full_degree, asc),
            None => sign.index() as u8 + 1,
        }
    };

    PlanetPosition {
        name: body.name.clone(),
        full_degree: body.full_degree,
        norm_degree: body.full_degree % 30.0,
        speed: body.speed,
        is_retro: body.is_retro,
        sign,
        sign_lord: body
            .sign_lord
            .clone()
            .unwrap_or_else(|| sign_ruler(sign, false).to_string()),
        house,
    }
}
