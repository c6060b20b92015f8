use serde::{Deserialize, Serialize};

use super::require_any;
use crate::error::ValidationError;

wire_enum! {
    /// Google Ads campaign type.
    pub enum GoogleAdsCampaignType {
        /// Text ads on search results.
        Search => "search",
        /// Banners on the display network.
        Display => "display",
        /// Product listings.
        Shopping => "shopping",
        /// Automated across all inventory.
        PerformanceMax => "performance-max",
    }
}

impl GoogleAdsCampaignType {
    /// Only search campaigns are keyword driven.
    pub fn uses_keywords(self) -> bool {
        self == GoogleAdsCampaignType::Search
    }
}

wire_enum! {
    /// Device class.
    pub enum TargetDevice {
        /// Phones.
        Mobile => "mobile",
        /// Desktop computers.
        Desktop => "desktop",
        /// Tablets.
        Tablet => "tablet",
    }
}

wire_enum! {
    /// Google Ads bidding.
    pub enum GoogleAdsBidStrategy {
        /// Manual CPC.
        Manual => "manual",
        /// Automated bidding.
        Automated => "automated",
        /// Maximise conversions.
        MaximizeConversions => "maximize-conversions",
        /// Target return on ad spend.
        TargetRoas => "target-roas",
    }
}

/// Geo, language and device targeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleAdsTargeting {
    /// Countries or cities.
    pub locations: Vec<String>,
    /// Languages.
    pub languages: Vec<String>,
    /// Devices.
    pub devices: Vec<TargetDevice>,
}

/// Everything the Google Ads setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAdsCampaign {
    /// Campaign type.
    pub campaign_type: GoogleAdsCampaignType,
    /// Search keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Keywords that must not trigger the ad.
    #[serde(default)]
    pub negative_keywords: Vec<String>,
    /// Targeting.
    pub targeting: GoogleAdsTargeting,
    /// Bidding.
    pub bid_strategy: GoogleAdsBidStrategy,
}

impl Default for GoogleAdsCampaign {
    fn default() -> Self {
        Self {
            campaign_type: GoogleAdsCampaignType::Search,
            keywords: Vec::new(),
            negative_keywords: Vec::new(),
            targeting: GoogleAdsTargeting::default(),
            bid_strategy: GoogleAdsBidStrategy::Automated,
        }
    }
}

impl GoogleAdsCampaign {
    /// A location and a device are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_any("location", &self.targeting.locations)?;
        require_any("device", &self.targeting.devices)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_optional() {
        let mut campaign = GoogleAdsCampaign::default();
        campaign.targeting.locations.push("United States".to_string());
        campaign.targeting.devices.push(TargetDevice::Mobile);
        assert!(campaign.keywords.is_empty());
        assert_eq!(campaign.validate(), Ok(()));
    }

    #[test]
    fn device_is_required() {
        let mut campaign = GoogleAdsCampaign::default();
        campaign.targeting.locations.push("Canada".to_string());
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "device"
            })
        );
    }

    #[test]
    fn only_search_uses_keywords() {
        let keyword_types: Vec<_> =
            GoogleAdsCampaignType::ALL.iter().filter(|t| t.uses_keywords()).collect();
        assert_eq!(keyword_types, vec![&GoogleAdsCampaignType::Search]);
    }
}
