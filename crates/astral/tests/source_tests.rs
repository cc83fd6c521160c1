use astral::birth::BirthDetails;
use astral::chart::{
    summarize, ChartFeedProvider, ChartOrigin, ChartSource, FeedBody, FeedError,
    MockChartGenerator, ProviderFeed,
};
use astral::settings::{ChartSettings, Settings};
use astral::western::Sign;

struct FixedFeed(ProviderFeed);

impl ChartFeedProvider for FixedFeed {
    fn fetch(&self, _birth: &BirthDetails) -> Result<ProviderFeed, FeedError> {
        Ok(self.0.clone())
    }
}

struct BrokenFeed;

impl ChartFeedProvider for BrokenFeed {
    fn fetch(&self, _birth: &BirthDetails) -> Result<ProviderFeed, FeedError> {
        Err(FeedError::Unavailable("provider timed out".to_string()))
    }
}

fn birth() -> BirthDetails {
    BirthDetails::new(2001, 8, 23, 10, 15, 0, 48.85, 2.35, 2.0)
}

#[test]
fn test_live_feed_is_assembled() {
    let feed = ProviderFeed::new(vec![
        FeedBody::new(0, "Sun", 149.9),
        FeedBody::new(12, "Ascendant", 200.0),
    ]);
    let provider = FixedFeed(feed);
    let source = ChartSource::new(Some(&provider), &Settings::default()).unwrap();

    let result = source.natal_chart(&birth()).unwrap();
    assert_eq!(result.origin, ChartOrigin::Live);
    assert_eq!(result.chart.planets.len(), 2);
    // 23 Aug resolves to Virgo even though 149.9 degrees is Leo
    assert_eq!(result.chart.sun().unwrap().sign, Sign::Virgo);
}

#[test]
fn test_no_provider_uses_mock() {
    let source = ChartSource::offline(&Settings::default()).unwrap();
    let result = source.natal_chart(&birth()).unwrap();

    assert_eq!(result.origin, ChartOrigin::Mock);
    assert_eq!(result.chart, MockChartGenerator::new().generate(&birth()));
}

#[test]
fn test_provider_failure_falls_back_to_mock() {
    let provider = BrokenFeed;
    let source = ChartSource::new(Some(&provider), &Settings::default()).unwrap();

    let result = source.natal_chart(&birth()).unwrap();
    assert_eq!(result.origin, ChartOrigin::Mock);
}

#[test]
fn test_provider_failure_without_fallback_is_error() {
    let settings = Settings::from_toml_str("[chart]\nfallback_to_mock = false\n").unwrap();
    let provider = BrokenFeed;
    let source = ChartSource::new(Some(&provider), &settings).unwrap();

    let err = source.natal_chart(&birth()).unwrap_err();
    assert_eq!(err, FeedError::Unavailable("provider timed out".to_string()));
}

#[test]
fn test_summary_of_mock_chart() {
    let source = ChartSource::offline(&Settings::default()).unwrap();
    let result = source.natal_chart(&birth()).unwrap();
    let text = summarize(&result.chart);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("PLANETS: Sun Virgo 15.00 H"));
    assert!(lines[1].starts_with("HOUSES: 1 "));
    assert!(lines[2].starts_with("ASPECTS: "));
    assert!(lines[0].contains("Saturn"));
    assert!(lines[0].contains(" R"));
}

#[test]
fn test_hand_built_settings_are_validated() {
    let settings = Settings {
        chart: ChartSettings {
            house_system: "placidus".to_string(),
            ..ChartSettings::default()
        },
        ..Settings::default()
    };
    let err = ChartSource::offline(&settings).err().unwrap();
    assert!(err.to_string().contains("placidus"));

    let provider = BrokenFeed;
    assert!(ChartSource::new(Some(&provider), &settings).is_err());
}
