use serde::{Deserialize, Serialize};

use super::{require_any, AgeRange};
use crate::error::ValidationError;

wire_enum! {
    /// Instagram campaign objective.
    pub enum InstagramObjective {
        /// Reach new people.
        Awareness => "AWARENESS",
        /// Likes, comments, shares.
        Engagement => "ENGAGEMENT",
        /// Profile or link visits.
        Traffic => "TRAFFIC",
    }
}

wire_enum! {
    /// Content format.
    pub enum InstagramFormat {
        /// Feed post.
        Post => "post",
        /// Story.
        Story => "story",
        /// Reel.
        Reel => "reel",
        /// Long-form video.
        Igtv => "igtv",
    }
}

/// Audience definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstagramTargeting {
    /// Age bounds.
    pub age_range: AgeRange,
    /// Cities or regions.
    pub locations: Vec<String>,
    /// Interests.
    pub interests: Vec<String>,
    /// Hashtags, stored without the leading `#`.
    pub hashtags: Vec<String>,
}

/// Everything the Instagram setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramCampaign {
    /// Objective.
    pub objective: InstagramObjective,
    /// Content format.
    pub format: InstagramFormat,
    /// Audience.
    pub targeting: InstagramTargeting,
    /// Whether influencers co-author the content.
    #[serde(default)]
    pub influencer_collaboration: bool,
}

impl Default for InstagramCampaign {
    fn default() -> Self {
        Self {
            objective: InstagramObjective::Engagement,
            format: InstagramFormat::Post,
            targeting: InstagramTargeting::default(),
            influencer_collaboration: false,
        }
    }
}

impl InstagramCampaign {
    /// A location and a hashtag are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_any("location", &self.targeting.locations)?;
        require_any("hashtag", &self.targeting.hashtags)?;
        self.targeting.age_range.validate("ageRange")
    }
}

/// Strips leading `#` characters so `#summer` and `summer` are the same tag.
pub fn normalize_hashtag(raw: &str) -> &str {
    raw.trim().trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_location_then_hashtag() {
        let mut campaign = InstagramCampaign::default();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "location"
            })
        );
        campaign.targeting.locations.push("Miami".to_string());
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "hashtag"
            })
        );
        campaign.targeting.hashtags.push("summer".to_string());
        assert_eq!(campaign.validate(), Ok(()));
    }

    #[test]
    fn hashtags_lose_their_prefix() {
        assert_eq!(normalize_hashtag("  ##sale "), "sale");
        assert_eq!(normalize_hashtag("sale"), "sale");
    }
}
