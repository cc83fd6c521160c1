use serde::Serialize;

use crate::birth::BirthDetails;
use crate::chart::assembler::ChartAssembler;
use crate::chart::feed::{FeedError, ProviderFeed};
use crate::chart::mock::MockChartGenerator;
use crate::chart::types::WesternChartData;
use crate::settings::Settings;

/// External collaborator that fetches raw planetary feeds.
///
/// Transport, caching and retries live in implementations of this trait;
/// the chart core only consumes the result.
pub trait ChartFeedProvider {
    fn fetch(&self, birth: &BirthDetails) -> Result<ProviderFeed, FeedError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartOrigin {
    Live,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub origin: ChartOrigin,
    pub chart: WesternChartData,
}

/// Routes a chart request to the live feed or the deterministic mock.
pub struct ChartSource<'a> {
    provider: Option<&'a dyn ChartFeedProvider>,
    assembler: ChartAssembler,
    mock: MockChartGenerator,
    fallback_to_mock: bool,
}

impl<'a> ChartSource<'a> {
    /// Fails if `settings` names an unsupported house system or a bad orb.
    pub fn new(
        provider: Option<&'a dyn ChartFeedProvider>,
        settings: &Settings,
    ) -> anyhow::Result<Self> {
        settings.validate()?;
        Ok(Self {
            provider,
            assembler: ChartAssembler::with_settings(settings.aspects),
            mock: MockChartGenerator::with_settings(settings.aspects),
            fallback_to_mock: settings.chart.fallback_to_mock,
        })
    }

    /// Chart without a provider; always the mock.
    pub fn offline(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(None, settings)
    }

    pub fn natal_chart(&self, birth: &BirthDetails) -> Result<ChartResult, FeedError> {
        let Some(provider) = self.provider else {
            return Ok(self.mock_chart(birth));
        };

        match provider.fetch(birth) {
            Ok(feed) => Ok(ChartResult {
                origin: ChartOrigin::Live,
                chart: self.assembler.assemble(&feed, birth),
            }),
            Err(e) if self.fallback_to_mock => {
                log::warn!("Chart feed failed, using mock chart: {}", e);
                Ok(self.mock_chart(birth))
            }
            Err(e) => Err(e),
        }
    }

    fn mock_chart(&self, birth: &BirthDetails) -> ChartResult {
        ChartResult {
            origin: ChartOrigin::Mock,
            chart: self.mock.generate(birth),
        }
    }
}
