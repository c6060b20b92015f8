use serde::{Deserialize, Serialize};

use super::require_any;
use crate::error::ValidationError;

wire_enum! {
    /// Video ad format.
    pub enum YouTubeAdFormat {
        /// In-stream, skippable after a few seconds.
        Skippable => "skippable",
        /// In-stream, up to 15 seconds.
        NonSkippable => "non-skippable",
        /// Thumbnail in search and related videos.
        Discovery => "discovery",
        /// Six-second non-skippable.
        Bumper => "bumper",
    }
}

wire_enum! {
    /// Where the video ad runs.
    pub enum YouTubePlacement {
        /// Before, during or after other videos.
        InStream => "in-stream",
        /// Search results and watch next.
        Discovery => "discovery",
        /// Home and subscription feeds.
        InFeed => "in-feed",
    }
}

/// Age buckets offered by the demographic picker.
pub const AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
/// Genders offered by the demographic picker.
pub const GENDERS: &[&str] = &["male", "female", "unknown"];

/// Demographic targeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeDemographics {
    /// Buckets from [`AGE_GROUPS`].
    pub age: Vec<String>,
    /// Values from [`GENDERS`].
    pub gender: Vec<String>,
    /// Parent / not a parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parental_status: Option<String>,
}

/// Audience definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YouTubeTargeting {
    /// Demographics.
    pub demographics: YouTubeDemographics,
    /// Affinity interests.
    pub interests: Vec<String>,
    /// Content topics.
    pub topics: Vec<String>,
    /// Contextual keywords.
    pub keywords: Vec<String>,
}

/// Length of the creative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    /// Seconds.
    pub duration: u32,
    /// Seconds before the skip button appears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_time: Option<u32>,
}

/// Everything the YouTube setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeCampaign {
    /// Ad format.
    pub ad_format: YouTubeAdFormat,
    /// Audience.
    pub targeting: YouTubeTargeting,
    /// Enabled placements.
    pub placement: Vec<YouTubePlacement>,
    /// Creative length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_details: Option<VideoDetails>,
}

impl Default for YouTubeCampaign {
    fn default() -> Self {
        Self {
            ad_format: YouTubeAdFormat::Skippable,
            targeting: YouTubeTargeting::default(),
            placement: Vec::new(),
            video_details: Some(VideoDetails {
                duration: 30,
                skip_time: Some(5),
            }),
        }
    }
}

impl YouTubeCampaign {
    /// An age group, a keyword and a placement are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_any("age group", &self.targeting.demographics.age)?;
        require_any("keyword", &self.targeting.keywords)?;
        require_any("placement", &self.placement)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_thirty_second_skippable_video() {
        let campaign = YouTubeCampaign::default();
        assert_eq!(campaign.ad_format, YouTubeAdFormat::Skippable);
        assert_eq!(
            campaign.video_details,
            Some(VideoDetails {
                duration: 30,
                skip_time: Some(5)
            })
        );
    }

    #[test]
    fn needs_age_keyword_and_placement() {
        let mut campaign = YouTubeCampaign::default();
        campaign.targeting.demographics.age.push(AGE_GROUPS[1].to_string());
        campaign.targeting.keywords.push("running shoes".to_string());
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "placement"
            })
        );
        campaign.placement.push(YouTubePlacement::InStream);
        assert!(campaign.validate().is_ok());
    }

    #[test]
    fn kebab_case_wire_values() {
        assert_eq!(YouTubeAdFormat::NonSkippable.as_str(), "non-skippable");
        let json = serde_json::to_string(&YouTubePlacement::InFeed).expect("serialize");
        assert_eq!(json, "\"in-feed\"");
    }
}
