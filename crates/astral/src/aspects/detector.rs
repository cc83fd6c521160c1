use crate::aspects::types::{Aspect, AspectKind, AspectSettings, OrbSettings, ASPECT_KINDS};
use std::collections::HashSet;

/// Anything with a name and an ecliptic longitude.
pub trait EclipticBody {
    fn body_name(&self) -> &str;
    fn full_degree(&self) -> f64;
}

impl EclipticBody for (&str, f64) {
    fn body_name(&self) -> &str {
        self.0
    }

    fn full_degree(&self) -> f64 {
        self.1
    }
}

impl EclipticBody for (String, f64) {
    fn body_name(&self) -> &str {
        &self.0
    }

    fn full_degree(&self) -> f64 {
        self.1
    }
}

/// Aspect detector
///
/// Every matching aspect type is reported for a pair; there is no
/// closest-match selection. With the default orbs the aspect angles are far
/// enough apart that at most one type can match.
#[derive(Debug, Clone, Default)]
pub struct AspectDetector {
    orbs: OrbSettings,
}

impl AspectDetector {
    /// Create a detector with the fixed orb table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &AspectSettings) -> Self {
        Self {
            orbs: settings.orbs,
        }
    }

    /// Compute aspects for every unordered pair of bodies, in input order.
    pub fn detect<B: EclipticBody>(&self, bodies: &[B]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        let mut seen: HashSet<(String, String, AspectKind)> = HashSet::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let a = &bodies[i];
                let b = &bodies[j];
                let separation = angular_separation(a.full_degree(), b.full_degree());

                for kind in self.matching_kinds(separation) {
                    let key = pair_key(a.body_name(), b.body_name(), kind);
                    if !seen.insert(key) {
                        continue;
                    }
                    aspects.push(Aspect {
                        planet1: a.body_name().to_string(),
                        planet2: b.body_name().to_string(),
                        kind,
                        orb: round2((separation - kind.angle()).abs()),
                        angle: round2(separation),
                    });
                }
            }
        }

        aspects
    }

    /// Aspect types whose orb contains the separation
    pub fn matching_kinds(&self, separation: f64) -> Vec<AspectKind> {
        ASPECT_KINDS
            .iter()
            .copied()
            .filter(|kind| (separation - kind.angle()).abs() <= self.orbs.orb(*kind))
            .collect()
    }
}

/// Shortest-arc distance between two longitudes, in [0, 180]
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pair_key(a: &str, b: &str, kind: AspectKind) -> (String, String, AspectKind) {
    if a <= b {
        (a.to_string(), b.to_string(), kind)
    } else {
        (b.to_string(), a.to_string(), kind)
    }
}
