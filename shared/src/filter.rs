//! Campaign list filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Campaign, CampaignStatus, ClientId},
    platform::Platform,
};

/// Inclusive bounds on a campaign's start date. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest start date kept.
    pub from: Option<NaiveDate>,
    /// Latest start date kept.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// No bounds at all.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `date` lies within the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Selections of the filter bar above the campaign grid. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFilter {
    /// Only this client's campaigns.
    pub client_id: Option<ClientId>,
    /// Only this platform.
    pub platform: Option<Platform>,
    /// Only this status.
    pub status: Option<CampaignStatus>,
    /// Only campaigns starting in this range.
    #[serde(default)]
    pub date_range: DateRange,
}

impl CampaignFilter {
    /// Filter scoped to one client, everything else open.
    pub fn for_client(client_id: Option<ClientId>) -> Self {
        Self {
            client_id,
            ..Self::default()
        }
    }

    /// Whether any criterion is set.
    pub fn is_active(&self) -> bool {
        self.client_id.is_some()
            || self.platform.is_some()
            || self.status.is_some()
            || !self.date_range.is_unbounded()
    }

    /// Resets platform, status and dates. The client scope comes from the
    /// route, so it is left to the caller.
    pub fn clear(&mut self) {
        self.platform = None;
        self.status = None;
        self.date_range = DateRange::default();
    }

    /// Whether `campaign` passes every criterion.
    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.client_id.map_or(true, |id| campaign.client_id == id)
            && self.platform.map_or(true, |platform| campaign.platform == platform)
            && self.status.map_or(true, |status| campaign.status == status)
            && self.date_range.contains(campaign.start_date)
    }

    /// The matching campaigns, in input order.
    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        campaigns.iter().filter(|campaign| self.matches(campaign)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn ids(campaigns: &[&Campaign]) -> Vec<u32> {
        campaigns.iter().map(|c| c.id).collect()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let campaigns = sample::campaigns();
        let filter = CampaignFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&campaigns).len(), campaigns.len());
    }

    #[test]
    fn client_scope_and_platform_combine() {
        let campaigns = sample::campaigns();
        let mut filter = CampaignFilter::for_client(Some(1));
        assert_eq!(ids(&filter.apply(&campaigns)), vec![1, 2, 4]);
        filter.platform = Some(Platform::YouTube);
        assert_eq!(ids(&filter.apply(&campaigns)), vec![2]);
    }

    #[test]
    fn status_filter() {
        let campaigns = sample::campaigns();
        let filter = CampaignFilter {
            status: Some(CampaignStatus::Planned),
            ..Default::default()
        };
        assert!(filter.apply(&campaigns).iter().all(|c| c.status == CampaignStatus::Planned));
        assert!(!filter.apply(&campaigns).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange {
            from: Some(date(2024, 6, 1)),
            to: Some(date(2024, 6, 30)),
        };
        assert!(range.contains(date(2024, 6, 1)));
        assert!(range.contains(date(2024, 6, 30)));
        assert!(!range.contains(date(2024, 7, 1)));
        assert!(DateRange::default().contains(date(1999, 1, 1)));
    }

    #[test]
    fn clear_keeps_client_scope() {
        let mut filter = CampaignFilter {
            client_id: Some(2),
            platform: Some(Platform::Instagram),
            status: Some(CampaignStatus::Active),
            date_range: DateRange {
                from: Some(date(2024, 1, 1)),
                to: None,
            },
        };
        filter.clear();
        assert_eq!(filter, CampaignFilter::for_client(Some(2)));
    }

    #[test]
    fn unmatched_filters_yield_empty_list() {
        let campaigns = sample::campaigns();
        let filter = CampaignFilter {
            client_id: Some(2),
            platform: Some(Platform::YouTube),
            ..Default::default()
        };
        assert!(filter.apply(&campaigns).is_empty());
    }
}
