//! Compact text rendering of a chart for prompt building.
//!
//! Format (one line per section):
//! `PLANETS: Sun Leo 15.20 H5 | Moon Aries 3.00 H1 R`
//! `HOUSES: 1 Aries 10.00 | 2 Taurus 10.00 | ...`
//! `ASPECTS: Sun Square Moon 0.50 | ...`

use crate::chart::types::WesternChartData;

pub fn summarize(chart: &WesternChartData) -> String {
    let planets = if chart.planets.is_empty() {
        "n/a".to_string()
    } else {
        chart
            .planets
            .iter()
            .map(|p| {
                let retro = if p.is_retro { " R" } else { "" };
                format!("{} {} {:.2} H{}{}", p.name, p.sign, p.norm_degree, p.house, retro)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let houses = if chart.houses.is_empty() {
        "n/a".to_string()
    } else {
        chart
            .houses
            .iter()
            .map(|h| format!("{} {} {:.2}", h.house, h.sign, h.norm_degree))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let aspects = if chart.aspects.is_empty() {
        "none".to_string()
    } else {
        chart
            .aspects
            .iter()
            .map(|a| format!("{} {} {} {:.2}", a.planet1, a.kind, a.planet2, a.orb))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    format!("PLANETS: {}\nHOUSES: {}\nASPECTS: {}", planets, houses, aspects)
}
