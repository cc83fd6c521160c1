//! Deterministic astrology and numerology core.
//!
//! Everything here is a pure function of its inputs: sign resolution, Equal
//! House chart assembly from a provider feed, aspect detection, a mock chart
//! for when no feed exists, and Pythagorean numerology. Fetching feeds is left
//! to implementations of [`chart::ChartFeedProvider`].

pub mod aspects;
pub mod birth;
pub mod chart;
pub mod numerology;
pub mod settings;
pub mod western;

pub use aspects::{Aspect, AspectDetector, AspectKind, AspectSettings};
pub use birth::{BirthDetails, BirthDetailsError};
pub use chart::{
    ChartAssembler, ChartFeedProvider, ChartOrigin, ChartResult, ChartSource, FeedError,
    HouseCusp, MockChartGenerator, PlanetPosition, ProviderFeed, WesternChartData,
};
pub use numerology::{LifePathDetails, NumerologyProfile};
pub use settings::{load_settings, Settings};
pub use western::{resolve, Sign};
