//! Platform-specific campaign settings.
//!
//! Each submodule holds the payload one platform's setup form produces and
//! the rule that decides whether the form may be submitted.

mod email;
mod facebook;
mod google_ads;
mod instagram;
mod sms;
mod youtube;

use chrono::NaiveDate;
pub use email::{
    EmailAudience, EmailCampaign, EmailContent, EmailSender, EmailTracking, EMAIL_TEMPLATES,
};
pub use facebook::{
    AdBudget, AdFormat, AdSchedule, AdSetDetails, BidStrategy, BudgetType, CreativeDetails,
    FacebookCampaign, FacebookObjective, FacebookPlacement, FacebookTargeting, Optimization,
    OptimizationGoal, SpecialAdCategory, DEMOGRAPHIC_OPTIONS, INTEREST_OPTIONS,
};
pub use google_ads::{
    GoogleAdsBidStrategy, GoogleAdsCampaign, GoogleAdsCampaignType, GoogleAdsTargeting,
    TargetDevice,
};
pub use instagram::{
    normalize_hashtag, InstagramCampaign, InstagramFormat, InstagramObjective, InstagramTargeting,
};
use serde::{Deserialize, Serialize};
pub use sms::{
    MessageType, PhoneNumberType, SmsAudience, SmsCampaign, SmsCompliance, SmsTracking,
    SMS_MAX_LENGTH,
};
pub use youtube::{
    VideoDetails, YouTubeAdFormat, YouTubeCampaign, YouTubeDemographics, YouTubePlacement,
    YouTubeTargeting, AGE_GROUPS, GENDERS,
};

use crate::{error::ValidationError, platform::Platform};

/// Time zones offered by the email and SMS schedulers.
pub const TIMEZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Asia/Tokyo",
];

/// Inclusive audience age bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Youngest age targeted.
    pub min: u32,
    /// Oldest age targeted.
    pub max: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: 18,
            max: 65,
        }
    }
}

impl AgeRange {
    pub(crate) fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.min > self.max {
            return Err(ValidationError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// When a message-based campaign is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheduling {
    /// Local send time as entered in a `datetime-local` input.
    pub send_time: String,
    /// IANA time zone the send time is interpreted in.
    pub timezone: String,
}

impl Scheduling {
    /// Schedule at `send_time` in the first offered time zone.
    pub fn at(send_time: impl Into<String>) -> Self {
        Self {
            send_time: send_time.into(),
            timezone: TIMEZONES[0].to_string(),
        }
    }
}

/// Settings of a campaign, tagged with the platform they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "data")]
pub enum PlatformPayload {
    /// Facebook ad set and creative.
    #[serde(rename = "Facebook")]
    Facebook(FacebookCampaign),
    /// Instagram content settings.
    #[serde(rename = "Instagram")]
    Instagram(InstagramCampaign),
    /// YouTube video ad settings.
    #[serde(rename = "YouTube")]
    YouTube(YouTubeCampaign),
    /// Google Ads campaign settings.
    #[serde(rename = "Google Ads")]
    GoogleAds(GoogleAdsCampaign),
    /// Email content, audience and sender.
    #[serde(rename = "Email")]
    Email(EmailCampaign),
    /// SMS message, audience and compliance flags.
    #[serde(rename = "SMS")]
    Sms(SmsCampaign),
}

impl PlatformPayload {
    /// An empty form for `platform`, as shown when the setup step opens.
    ///
    /// `today` seeds date fields and `now` (a `datetime-local` string)
    /// seeds send times.
    pub fn draft(platform: Platform, today: NaiveDate, now: &str) -> Self {
        match platform {
            Platform::Facebook => PlatformPayload::Facebook(FacebookCampaign::draft(today)),
            Platform::Instagram => PlatformPayload::Instagram(InstagramCampaign::default()),
            Platform::YouTube => PlatformPayload::YouTube(YouTubeCampaign::default()),
            Platform::GoogleAds => PlatformPayload::GoogleAds(GoogleAdsCampaign::default()),
            Platform::Email => PlatformPayload::Email(EmailCampaign::draft(now)),
            Platform::Sms => PlatformPayload::Sms(SmsCampaign::draft(now)),
        }
    }

    /// Platform this payload belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformPayload::Facebook(_) => Platform::Facebook,
            PlatformPayload::Instagram(_) => Platform::Instagram,
            PlatformPayload::YouTube(_) => Platform::YouTube,
            PlatformPayload::GoogleAds(_) => Platform::GoogleAds,
            PlatformPayload::Email(_) => Platform::Email,
            PlatformPayload::Sms(_) => Platform::Sms,
        }
    }

    /// Checks the fields the platform's form requires before submit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let result = match self {
            PlatformPayload::Facebook(payload) => payload.validate(),
            PlatformPayload::Instagram(payload) => payload.validate(),
            PlatformPayload::YouTube(payload) => payload.validate(),
            PlatformPayload::GoogleAds(payload) => payload.validate(),
            PlatformPayload::Email(payload) => payload.validate(),
            PlatformPayload::Sms(payload) => payload.validate(),
        };
        if let Err(err) = &result {
            tracing::debug!(platform = %self.platform(), %err, "campaign payload rejected");
        }
        result
    }

    /// Shorthand for `validate().is_ok()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Budget entered in the form, when the platform asks for one.
    pub fn budget(&self) -> Option<f64> {
        match self {
            PlatformPayload::Facebook(payload) => Some(payload.ad_set_details.budget.amount),
            _ => None,
        }
    }

    /// First delivery day entered in the form.
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self {
            PlatformPayload::Facebook(payload) => Some(payload.ad_set_details.schedule.start_date),
            _ => None,
        }
    }

    /// Last delivery day entered in the form.
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            PlatformPayload::Facebook(payload) => payload.ad_set_details.schedule.end_date,
            _ => None,
        }
    }

    /// Creative media attached to the campaign.
    pub fn media_urls(&self) -> &[String] {
        match self {
            PlatformPayload::Facebook(payload) => &payload.creative_details.media_urls,
            _ => &[],
        }
    }

    /// Whether the payload stores uploaded creative media.
    pub fn has_media_list(&self) -> bool {
        matches!(self, PlatformPayload::Facebook(_))
    }

    /// Mutable access to the creative media list, for platforms that have one.
    pub fn media_urls_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            PlatformPayload::Facebook(payload) => Some(&mut payload.creative_details.media_urls),
            _ => None,
        }
    }
}

pub(crate) fn require_any<T>(field: &'static str, items: &[T]) -> Result<(), ValidationError> {
    if items.is_empty() {
        Err(ValidationError::Empty {
            field,
        })
    } else {
        Ok(())
    }
}

/// Toggles `value` in a multi-select list, keeping insertion order.
pub fn toggle<T: PartialEq>(items: &mut Vec<T>, value: T) {
    if let Some(pos) = items.iter().position(|item| *item == value) {
        items.remove(pos);
    } else {
        items.push(value);
    }
}

/// Appends a free-text entry unless it is blank or already present
/// (case-insensitive). Returns whether the list changed.
pub fn push_unique(items: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || items.iter().any(|item| item.eq_ignore_ascii_case(value)) {
        return false;
    }
    items.push(value.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[test]
    fn empty_drafts_are_never_submittable() {
        for platform in Platform::ALL {
            let draft = PlatformPayload::draft(*platform, today(), "2024-06-01T09:00");
            assert_eq!(draft.platform(), *platform);
            assert!(!draft.is_valid(), "{platform} draft should need input");
        }
    }

    #[test]
    fn payload_is_tagged_with_platform_name() {
        let payload = PlatformPayload::draft(Platform::GoogleAds, today(), "");
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["platform"], "Google Ads");
        assert_eq!(value["data"]["campaignType"], "search");
        let back: PlatformPayload = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, payload);
    }

    #[test]
    fn only_facebook_carries_budget_and_schedule() {
        let facebook = PlatformPayload::draft(Platform::Facebook, today(), "");
        assert_eq!(facebook.budget(), Some(0.0));
        assert_eq!(facebook.start_date(), Some(today()));
        let sms = PlatformPayload::draft(Platform::Sms, today(), "");
        assert_eq!(sms.budget(), None);
        assert_eq!(sms.start_date(), None);
        assert!(sms.media_urls().is_empty());
    }

    #[test]
    fn media_list_matches_mutable_access() {
        for platform in Platform::ALL {
            let mut draft = PlatformPayload::draft(*platform, today(), "");
            assert_eq!(draft.has_media_list(), draft.media_urls_mut().is_some(), "{platform}");
        }
        assert!(PlatformPayload::draft(Platform::Facebook, today(), "").has_media_list());
        assert!(!PlatformPayload::draft(Platform::Instagram, today(), "").has_media_list());
        assert!(!PlatformPayload::draft(Platform::YouTube, today(), "").has_media_list());
        assert!(!PlatformPayload::draft(Platform::GoogleAds, today(), "").has_media_list());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut formats = vec![AdFormat::Image];
        toggle(&mut formats, AdFormat::Video);
        assert_eq!(formats, vec![AdFormat::Image, AdFormat::Video]);
        toggle(&mut formats, AdFormat::Image);
        assert_eq!(formats, vec![AdFormat::Video]);
    }

    #[test]
    fn push_unique_skips_blank_and_duplicates() {
        let mut tags = vec!["Summer".to_string()];
        assert!(!push_unique(&mut tags, "  "));
        assert!(!push_unique(&mut tags, "summer"));
        assert!(push_unique(&mut tags, " sale "));
        assert_eq!(tags, vec!["Summer".to_string(), "sale".to_string()]);
    }

    #[test]
    fn age_range_rejects_inverted_bounds() {
        let range = AgeRange {
            min: 40,
            max: 21,
        };
        assert_eq!(
            range.validate("ageRange"),
            Err(ValidationError::InvalidRange {
                field: "ageRange",
                min: 40,
                max: 21
            })
        );
        assert!(AgeRange::default().validate("ageRange").is_ok());
    }
}
