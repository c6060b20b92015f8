//! Totals and breakdowns for the analytics and performance pages.

use serde::{Deserialize, Serialize};

use crate::{
    models::{ratio, Campaign},
    platform::Platform,
};

/// Sums over a set of campaigns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    /// Money spent.
    pub total_spend: f64,
    /// Impressions.
    pub total_impressions: u64,
    /// Clicks.
    pub total_clicks: u64,
    /// Conversions.
    pub total_conversions: u64,
    /// Estimated reach.
    pub total_reach: u64,
}

impl AggregateMetrics {
    /// Clicks per impression, in percent.
    pub fn ctr(&self) -> Option<f64> {
        ratio(self.total_clicks as f64, self.total_impressions as f64).map(|r| r * 100.0)
    }

    /// Conversions per click, in percent.
    pub fn conversion_rate(&self) -> Option<f64> {
        ratio(self.total_conversions as f64, self.total_clicks as f64).map(|r| r * 100.0)
    }

    /// Spend per click.
    pub fn cpc(&self) -> Option<f64> {
        ratio(self.total_spend, self.total_clicks as f64)
    }
}

/// Totals for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPerformance {
    /// Platform.
    pub platform: Platform,
    /// Money spent.
    pub spend: f64,
    /// Impressions.
    pub impressions: u64,
    /// Clicks.
    pub clicks: u64,
    /// Conversions.
    pub conversions: u64,
}

impl PlatformPerformance {
    /// A row with every counter at zero.
    pub fn empty(platform: Platform) -> Self {
        Self {
            platform,
            spend: 0.0,
            impressions: 0,
            clicks: 0,
            conversions: 0,
        }
    }
}

/// One slice of the platform distribution donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformShare {
    /// Platform.
    pub platform: Platform,
    /// Percentage of the whole, `0..=100`.
    pub value: f64,
}

/// Monthly reach per social platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPoint {
    /// Month label, e.g. `Jan`.
    pub name: String,
    /// Facebook reach.
    pub facebook: u64,
    /// Instagram reach.
    pub instagram: u64,
    /// YouTube reach.
    pub youtube: u64,
}

impl SocialPoint {
    /// Reach across the three platforms.
    pub fn total(&self) -> u64 {
        self.facebook + self.instagram + self.youtube
    }

    /// Reach on `platform`; zero for channels the series does not track.
    pub fn value(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::YouTube => self.youtube,
            _ => 0,
        }
    }
}

/// Sums the metrics of `campaigns`.
pub fn aggregate<'a>(campaigns: impl IntoIterator<Item = &'a Campaign>) -> AggregateMetrics {
    campaigns.into_iter().fold(AggregateMetrics::default(), |mut acc, campaign| {
        acc.total_spend += campaign.metrics.spend;
        acc.total_impressions += campaign.metrics.impressions;
        acc.total_clicks += campaign.metrics.clicks;
        acc.total_conversions += campaign.metrics.conversions;
        acc.total_reach += campaign.reach;
        acc
    })
}

/// Per-platform totals, in the order each platform first appears.
pub fn performance_by_platform<'a>(
    campaigns: impl IntoIterator<Item = &'a Campaign>,
) -> Vec<PlatformPerformance> {
    let mut rows: Vec<PlatformPerformance> = Vec::new();
    for campaign in campaigns {
        let index = match rows.iter().position(|row| row.platform == campaign.platform) {
            Some(index) => index,
            None => {
                rows.push(PlatformPerformance::empty(campaign.platform));
                rows.len() - 1
            },
        };
        let row = &mut rows[index];
        row.spend += campaign.metrics.spend;
        row.impressions += campaign.metrics.impressions;
        row.clicks += campaign.metrics.clicks;
        row.conversions += campaign.metrics.conversions;
    }
    tracing::debug!(platforms = rows.len(), "aggregated platform performance");
    rows
}

/// Each platform's share of total spend. Empty when nothing was spent.
pub fn platform_share(rows: &[PlatformPerformance]) -> Vec<PlatformShare> {
    let total: f64 = rows.iter().map(|row| row.spend).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    rows.iter()
        .filter(|row| row.spend > 0.0)
        .map(|row| PlatformShare {
            platform: row.platform,
            value: row.spend / total * 100.0,
        })
        .collect()
}

/// Percent change of total reach between the last two points.
pub fn month_over_month(series: &[SocialPoint]) -> Option<f64> {
    let [.., previous, current] = series else {
        return None;
    };
    let previous = previous.total() as f64;
    ratio(current.total() as f64 - previous, previous).map(|r| r * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::CampaignMetrics, sample};

    #[test]
    fn aggregate_sums_every_counter() {
        let campaigns = sample::campaigns();
        let totals = aggregate(&campaigns);
        let expected_clicks: u64 = campaigns.iter().map(|c| c.metrics.clicks).sum();
        let expected_spend: f64 = campaigns.iter().map(|c| c.metrics.spend).sum();
        assert_eq!(totals.total_clicks, expected_clicks);
        assert!((totals.total_spend - expected_spend).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, AggregateMetrics::default());
        assert_eq!(totals.ctr(), None);
    }

    #[test]
    fn platforms_keep_first_seen_order() {
        let campaigns = sample::campaigns();
        let rows = performance_by_platform(&campaigns);
        let order: Vec<_> = rows.iter().map(|row| row.platform).collect();
        assert_eq!(
            order,
            vec![
                Platform::Facebook,
                Platform::YouTube,
                Platform::Instagram,
                Platform::GoogleAds,
                Platform::Email,
                Platform::Sms,
            ]
        );
    }

    #[test]
    fn repeated_platform_is_merged() {
        let mut campaigns = sample::campaigns();
        campaigns.retain(|c| c.platform == Platform::YouTube);
        assert!(campaigns.len() > 1);
        let rows = performance_by_platform(&campaigns);
        assert_eq!(rows.len(), 1);
        let impressions: u64 = campaigns.iter().map(|c| c.metrics.impressions).sum();
        assert_eq!(rows[0].impressions, impressions);
    }

    #[test]
    fn share_sums_to_hundred_and_skips_idle_platforms() {
        let campaigns = sample::campaigns();
        let shares = platform_share(&performance_by_platform(&campaigns));
        let total: f64 = shares.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(shares.iter().all(|s| s.platform != Platform::Sms));
    }

    #[test]
    fn share_is_empty_without_spend() {
        let mut campaign = sample::campaigns().remove(0);
        campaign.metrics = CampaignMetrics::default();
        assert!(platform_share(&performance_by_platform([&campaign])).is_empty());
    }

    #[test]
    fn month_over_month_uses_last_two_points() {
        let series = sample::social_media_series();
        let change = month_over_month(&series).expect("two points");
        // May 8871 -> Jun 8690
        assert!((change - (8690.0 - 8871.0) / 8871.0 * 100.0).abs() < 1e-9);
        assert_eq!(month_over_month(&series[..1]), None);
    }
}
