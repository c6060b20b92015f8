use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_any, AgeRange};
use crate::{error::ValidationError, models::require};

wire_enum! {
    /// Campaign objective, grouped the way Ads Manager groups them.
    pub enum FacebookObjective {
        /// Brand awareness, reach, traffic.
        Awareness => "AWARENESS",
        /// Engagement, installs, video views, leads, messages.
        Consideration => "CONSIDERATION",
        /// Conversions, catalog sales, store traffic.
        Conversion => "CONVERSION",
    }
}

impl FacebookObjective {
    /// Ads Manager goals that fall under this objective.
    pub fn goals(self) -> &'static [&'static str] {
        match self {
            FacebookObjective::Awareness => &["Brand Awareness", "Reach", "Traffic"],
            FacebookObjective::Consideration => {
                &["Engagement", "App Installs", "Video Views", "Lead Generation", "Messages"]
            },
            FacebookObjective::Conversion => &["Conversions", "Catalog Sales", "Store Traffic"],
        }
    }
}

wire_enum! {
    /// Creative format.
    pub enum AdFormat {
        /// Single image.
        Image => "image",
        /// Single video.
        Video => "video",
        /// Swipeable cards.
        Carousel => "carousel",
        /// Cover plus product grid.
        Collection => "collection",
    }
}

wire_enum! {
    /// Where the ad is shown.
    pub enum FacebookPlacement {
        /// News feed.
        Feed => "feed",
        /// Stories.
        Stories => "stories",
        /// Reels.
        Reels => "reels",
        /// Marketplace.
        Marketplace => "marketplace",
    }
}

wire_enum! {
    /// Regulated ad categories.
    pub enum SpecialAdCategory {
        /// Not regulated.
        None => "NONE",
        /// Housing.
        Housing => "HOUSING",
        /// Employment.
        Employment => "EMPLOYMENT",
        /// Credit.
        Credit => "CREDIT",
        /// Social issues, elections or politics.
        SocialIssues => "SOCIAL_ISSUES",
    }
}

wire_enum! {
    /// How the budget amount is spent.
    pub enum BudgetType {
        /// Amount per day.
        Daily => "daily",
        /// Amount over the whole schedule.
        Lifetime => "lifetime",
    }
}

wire_enum! {
    /// Bidding mode.
    pub enum BidStrategy {
        /// Spend the budget at the lowest cost per result.
        LowestCost => "lowest_cost",
        /// Keep the average cost near a target.
        TargetCost => "target_cost",
        /// Manual bid cap.
        Manual => "manual",
    }
}

wire_enum! {
    /// What delivery is optimised for.
    pub enum OptimizationGoal {
        /// Unique people reached.
        Reach => "REACH",
        /// Impressions.
        Impressions => "IMPRESSIONS",
        /// Link clicks.
        Clicks => "CLICKS",
        /// Conversion events.
        Conversions => "CONVERSIONS",
    }
}

/// Demographic targeting options.
pub const DEMOGRAPHIC_OPTIONS: &[&str] = &[
    "Age",
    "Gender",
    "Education",
    "Job Title",
    "Income",
    "Relationship Status",
    "Life Events",
    "Parents",
    "Politics",
    "Industries",
];

/// Interest targeting options.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Entertainment",
    "Shopping",
    "Sports",
    "Technology",
    "Travel",
    "Fashion",
    "Food and Drink",
    "Hobbies",
    "Business",
    "Fitness",
];

/// Audience definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacebookTargeting {
    /// Age bounds.
    pub age_range: AgeRange,
    /// Cities or regions.
    pub locations: Vec<String>,
    /// Interests from [`INTEREST_OPTIONS`].
    pub interests: Vec<String>,
    /// Demographics from [`DEMOGRAPHIC_OPTIONS`].
    #[serde(default)]
    pub demographics: Vec<String>,
}

/// Amount and spending mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdBudget {
    /// Daily or lifetime.
    #[serde(rename = "type")]
    pub kind: BudgetType,
    /// Amount in the account currency.
    pub amount: f64,
}

/// Delivery window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSchedule {
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, open ended when absent.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Time zone the dates refer to.
    pub time_zone: String,
}

/// Bidding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    /// Bidding mode.
    pub bid_strategy: BidStrategy,
    /// Optimisation event.
    pub optimization_goal: OptimizationGoal,
}

/// Ad set: budget, schedule and bidding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSetDetails {
    /// Budget.
    pub budget: AdBudget,
    /// Delivery window.
    pub schedule: AdSchedule,
    /// Bidding.
    pub optimization: Optimization,
}

/// Ad copy and media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeDetails {
    /// Creative format.
    pub format: AdFormat,
    /// Body text above the media.
    pub primary_text: String,
    /// Bold line below the media.
    pub headline: String,
    /// Secondary line below the headline.
    pub description: String,
    /// Button label.
    pub call_to_action: String,
    /// Uploaded or linked media.
    pub media_urls: Vec<String>,
}

/// Everything the Facebook setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookCampaign {
    /// Campaign name in Ads Manager.
    pub name: String,
    /// Objective.
    pub objective: FacebookObjective,
    /// Estimated audience size returned by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<u64>,
    /// Audience.
    pub targeting: FacebookTargeting,
    /// Enabled creative formats.
    pub ad_formats: Vec<AdFormat>,
    /// Enabled placements.
    pub placement: Vec<FacebookPlacement>,
    /// Regulated category.
    pub special_ad_category: SpecialAdCategory,
    /// Budget, schedule, bidding.
    pub ad_set_details: AdSetDetails,
    /// Copy and media.
    pub creative_details: CreativeDetails,
}

impl FacebookCampaign {
    /// The form's initial state, starting `today`.
    pub fn draft(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            objective: FacebookObjective::Awareness,
            audience_size: None,
            targeting: FacebookTargeting::default(),
            ad_formats: Vec::new(),
            placement: Vec::new(),
            special_ad_category: SpecialAdCategory::None,
            ad_set_details: AdSetDetails {
                budget: AdBudget {
                    kind: BudgetType::Daily,
                    amount: 0.0,
                },
                schedule: AdSchedule {
                    start_date: today,
                    end_date: None,
                    time_zone: "UTC".to_string(),
                },
                optimization: Optimization {
                    bid_strategy: BidStrategy::LowestCost,
                    optimization_goal: OptimizationGoal::Reach,
                },
            },
            creative_details: CreativeDetails {
                format: AdFormat::Image,
                primary_text: String::new(),
                headline: String::new(),
                description: String::new(),
                call_to_action: "Learn More".to_string(),
                media_urls: Vec::new(),
            },
        }
    }

    /// Name, a location, an ad format and a positive budget are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_any("location", &self.targeting.locations)?;
        require_any("ad format", &self.ad_formats)?;
        let amount = self.ad_set_details.budget.amount;
        if amount.is_nan() || amount <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "budget",
            });
        }
        self.targeting.age_range.validate("ageRange")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FacebookCampaign {
        let mut campaign =
            FacebookCampaign::draft(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"));
        campaign.name = "Summer Sale".to_string();
        campaign.targeting.locations.push("Chicago".to_string());
        campaign.ad_formats.push(AdFormat::Carousel);
        campaign.ad_set_details.budget.amount = 250.0;
        campaign
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let mut campaign = filled();
        campaign.ad_set_details.budget.amount = 0.0;
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::NotPositive {
                field: "budget"
            })
        );
    }

    #[test]
    fn nan_budget_is_rejected() {
        let mut campaign = filled();
        campaign.ad_set_details.budget.amount = f64::NAN;
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::NotPositive {
                field: "budget"
            })
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut campaign = filled();
        campaign.name = "  ".to_string();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Required {
                field: "name"
            })
        );
    }

    #[test]
    fn missing_location_is_rejected() {
        let mut campaign = filled();
        campaign.targeting.locations.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "location"
            })
        );
    }

    #[test]
    fn missing_ad_format_is_rejected() {
        let mut campaign = filled();
        campaign.ad_formats.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "ad format"
            })
        );
    }

    #[test]
    fn targeting_keeps_snake_case_age_range_on_the_wire() {
        let value = serde_json::to_value(filled()).expect("serialize");
        assert_eq!(value["targeting"]["age_range"]["min"], 18);
        assert_eq!(value["adSetDetails"]["budget"]["type"], "daily");
        assert_eq!(value["adSetDetails"]["optimization"]["bidStrategy"], "lowest_cost");
        assert_eq!(value["specialAdCategory"], "NONE");
    }

    #[test]
    fn every_objective_has_goals() {
        for objective in FacebookObjective::ALL {
            assert!(!objective.goals().is_empty());
        }
    }
}
