//! Tropical zodiac signs and calendar-date sign resolution.
//!
//! Signs are indexed 0..11 starting at Aries. The date resolver uses a fixed
//! table of per-month boundary days rather than the Sun's longitude.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign for an index, wrapping modulo 12.
    pub fn from_index(index: i64) -> Sign {
        SIGN_ORDER[index.rem_euclid(12) as usize]
    }

    /// Sign containing an ecliptic longitude (`floor(deg / 30) mod 12`).
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = normalize_degrees(longitude);
        Sign::from_index((lon / 30.0).floor() as i64)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-14 % 360 + 360 rounds back up to 360.0
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

// (sign in force at the start of the month, last day of that sign in the month).
// The thirteenth row is the January sign again, reached after the December boundary.
const MONTH_BOUNDARIES: [(Sign, u32); 13] = [
    (Sign::Capricorn, 19),
    (Sign::Aquarius, 18),
    (Sign::Pisces, 20),
    (Sign::Aries, 19),
    (Sign::Taurus, 20),
    (Sign::Gemini, 20),
    (Sign::Cancer, 22),
    (Sign::Leo, 22),
    (Sign::Virgo, 22),
    (Sign::Libra, 22),
    (Sign::Scorpio, 21),
    (Sign::Sagittarius, 21),
    (Sign::Capricorn, 31),
];

/// Resolve the tropical Sun sign for a calendar day and month (1-based).
///
/// The day is not validated against the month length. Months outside 1..=12
/// are clamped into range.
pub fn resolve(day: u32, month: u32) -> Sign {
    let month_idx = (month.clamp(1, 12) - 1) as usize;
    let (sign, last_day) = MONTH_BOUNDARIES[month_idx];
    if day <= last_day {
        sign
    } else {
        MONTH_BOUNDARIES[month_idx + 1].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_boundary() {
        let expected = [
            (1, Sign::Capricorn, Sign::Aquarius),
            (2, Sign::Aquarius, Sign::Pisces),
            (3, Sign::Pisces, Sign::Aries),
            (4, Sign::Aries, Sign::Taurus),
            (5, Sign::Taurus, Sign::Gemini),
            (6, Sign::Gemini, Sign::Cancer),
            (7, Sign::Cancer, Sign::Leo),
            (8, Sign::Leo, Sign::Virgo),
            (9, Sign::Virgo, Sign::Libra),
            (10, Sign::Libra, Sign::Scorpio),
            (11, Sign::Scorpio, Sign::Sagittarius),
            (12, Sign::Sagittarius, Sign::Capricorn),
        ];
        for (month, before, after) in expected {
            let last = MONTH_BOUNDARIES[month as usize - 1].1;
            assert_eq!(resolve(last, month), before, "month {month} day {last}");
            assert_eq!(resolve(last + 1, month), after, "month {month} day {}", last + 1);
        }
    }

    #[test]
    fn test_from_longitude_wraps() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(359.99), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(-15.0), Sign::Pisces);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Sign::from_index(12), Sign::Aries);
        assert_eq!(Sign::from_index(-1), Sign::Pisces);
        assert_eq!(Sign::from_index(25), Sign::Taurus);
    }

    #[test]
    fn test_month_clamped() {
        assert_eq!(resolve(5, 0), Sign::Capricorn);
        assert_eq!(resolve(30, 13), Sign::Capricorn);
    }
}
