use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{require_any, Scheduling};
use crate::{error::ValidationError, models::require};

/// Message body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    /// HTML part, required.
    pub html: String,
    /// Plain-text fallback.
    pub plain_text: String,
}

/// Recipients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAudience {
    /// Mailing-list segments to include.
    pub segments: Vec<String>,
    /// Segments to exclude.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_segments: Vec<String>,
    /// Extra attribute filters passed through to the mailer.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_filters: BTreeMap<String, serde_json::Value>,
}

/// Engagement tracking switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTracking {
    /// Tracking pixel for opens.
    pub open_tracking: bool,
    /// Rewritten links for clicks.
    pub click_tracking: bool,
    /// Unsubscribe link attribution.
    pub unsubscribe_tracking: bool,
}

impl Default for EmailTracking {
    fn default() -> Self {
        Self {
            open_tracking: true,
            click_tracking: true,
            unsubscribe_tracking: true,
        }
    }
}

/// From and reply-to identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSender {
    /// Display name.
    pub name: String,
    /// From address, required.
    pub email: String,
    /// Reply-to address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Everything the email setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCampaign {
    /// Subject line.
    pub subject: String,
    /// Mailer template name.
    pub template: String,
    /// Body.
    pub content: EmailContent,
    /// Send time.
    pub scheduling: Scheduling,
    /// Recipients.
    pub audience: EmailAudience,
    /// Tracking switches.
    pub tracking: EmailTracking,
    /// From identity.
    pub sender: EmailSender,
}

/// Templates offered by the template picker.
pub const EMAIL_TEMPLATES: &[&str] = &["default", "newsletter", "promotion", "announcement"];

impl EmailCampaign {
    /// The form's initial state, scheduled at `now`.
    pub fn draft(now: &str) -> Self {
        Self {
            subject: String::new(),
            template: EMAIL_TEMPLATES[0].to_string(),
            content: EmailContent::default(),
            scheduling: Scheduling::at(now),
            audience: EmailAudience::default(),
            tracking: EmailTracking::default(),
            sender: EmailSender::default(),
        }
    }

    /// Subject, HTML body, sender address and a segment are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("subject", &self.subject)?;
        require("content.html", &self.content.html)?;
        require("sender.email", &self.sender.email)?;
        require_any("segment", &self.audience.segments)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmailCampaign {
        let mut campaign = EmailCampaign::draft("2024-06-01T09:00");
        campaign.subject = "Summer collection".to_string();
        campaign.content.html = "<h1>New in</h1>".to_string();
        campaign.sender.email = "news@fashionforward.com".to_string();
        campaign.audience.segments.push("subscribers".to_string());
        campaign
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn whitespace_subject_is_missing() {
        let mut campaign = filled();
        campaign.subject = "   ".to_string();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Required {
                field: "subject"
            })
        );
    }

    #[test]
    fn blank_html_body_is_rejected() {
        let mut campaign = filled();
        campaign.content.html.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Required {
                field: "content.html"
            })
        );
    }

    #[test]
    fn blank_sender_email_is_rejected() {
        let mut campaign = filled();
        campaign.sender.email = " ".to_string();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Required {
                field: "sender.email"
            })
        );
    }

    #[test]
    fn missing_segment_is_rejected() {
        let mut campaign = filled();
        campaign.audience.segments.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "segment"
            })
        );
    }

    #[test]
    fn tracking_defaults_on_and_schedule_uses_first_timezone() {
        let campaign = EmailCampaign::draft("2024-06-01T09:00");
        assert!(campaign.tracking.open_tracking);
        assert!(campaign.tracking.unsubscribe_tracking);
        assert_eq!(campaign.scheduling.timezone, "America/New_York");
        assert_eq!(campaign.template, "default");
    }

    #[test]
    fn empty_optional_audience_fields_are_omitted() {
        let value = serde_json::to_value(filled()).expect("serialize");
        let audience = value["audience"].as_object().expect("object");
        assert!(audience.contains_key("segments"));
        assert!(!audience.contains_key("excludedSegments"));
        assert!(!audience.contains_key("customFilters"));
    }
}
