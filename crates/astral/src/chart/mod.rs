pub mod assembler;
pub mod feed;
pub mod mock;
pub mod source;
pub mod summary;
pub mod types;

pub use assembler::{resolve_feed_sign, ChartAssembler};
pub use feed::{FeedBody, FeedError, ProviderFeed, MAX_BODY_INDEX};
pub use mock::{ascendant_offset, MockChartGenerator};
pub use source::{ChartFeedProvider, ChartOrigin, ChartResult, ChartSource};
pub use summary::summarize;
pub use types::{
    equal_house_of, equal_houses, is_ascendant, is_sun, HouseCusp, PlanetPosition,
    WesternChartData, ASCENDANT, SUN,
};
