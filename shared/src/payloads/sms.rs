use serde::{Deserialize, Serialize};

use super::{require_any, Scheduling};
use crate::{error::ValidationError, models::require};

/// Characters in a single SMS segment.
pub const SMS_MAX_LENGTH: usize = 160;

wire_enum! {
    /// Which numbers in a segment receive the message.
    pub enum PhoneNumberType {
        /// Mobile numbers only.
        Mobile => "mobile",
        /// Landlines (text-to-speech).
        Landline => "landline",
        /// Every number.
        All => "all",
    }
}

wire_enum! {
    /// Regulatory message class.
    pub enum MessageType {
        /// Marketing; requires opt-in.
        Promotional => "promotional",
        /// Order updates, reminders.
        Transactional => "transactional",
    }
}

/// Recipients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsAudience {
    /// Contact segments to include.
    pub segments: Vec<String>,
    /// Segments to exclude.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_segments: Vec<String>,
    /// Number class.
    pub phone_number_type: PhoneNumberType,
}

/// Consent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsCompliance {
    /// Only send to opted-in contacts.
    pub opt_in: bool,
    /// Append "Reply STOP to opt out".
    pub opt_out_message: bool,
    /// Message class.
    pub message_type: MessageType,
}

/// Delivery tracking switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsTracking {
    /// Shortened, tracked links.
    pub click_tracking: bool,
    /// Carrier delivery receipts.
    pub delivery_tracking: bool,
}

/// Everything the SMS setup form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsCampaign {
    /// Message text.
    pub message: String,
    /// Sender id or short code.
    pub sender: String,
    /// Send time.
    pub scheduling: Scheduling,
    /// Recipients.
    pub audience: SmsAudience,
    /// Consent handling.
    pub compliance: SmsCompliance,
    /// Tracking switches.
    pub tracking: SmsTracking,
}

impl SmsCampaign {
    /// The form's initial state, scheduled at `now`.
    pub fn draft(now: &str) -> Self {
        Self {
            message: String::new(),
            sender: String::new(),
            scheduling: Scheduling::at(now),
            audience: SmsAudience {
                segments: Vec::new(),
                excluded_segments: Vec::new(),
                phone_number_type: PhoneNumberType::Mobile,
            },
            compliance: SmsCompliance {
                opt_in: true,
                opt_out_message: true,
                message_type: MessageType::Promotional,
            },
            tracking: SmsTracking {
                click_tracking: true,
                delivery_tracking: true,
            },
        }
    }

    /// Message length in characters, as the counter under the input shows it.
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    /// Message and sender are required, the message must fit one segment and
    /// a recipient segment must be chosen.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("message", &self.message)?;
        require("sender", &self.sender)?;
        let len = self.message_len();
        if len > SMS_MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: "message",
                len,
                max: SMS_MAX_LENGTH,
            });
        }
        require_any("segment", &self.audience.segments)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(message: &str) -> SmsCampaign {
        let mut campaign = SmsCampaign::draft("2024-06-01T09:00");
        campaign.message = message.to_string();
        campaign.sender = "ACME".to_string();
        campaign.audience.segments.push("vip".to_string());
        campaign
    }

    #[test]
    fn exactly_one_segment_is_allowed() {
        let campaign = filled(&"x".repeat(SMS_MAX_LENGTH));
        assert_eq!(campaign.validate(), Ok(()));
    }

    #[test]
    fn over_limit_is_rejected() {
        let campaign = filled(&"x".repeat(SMS_MAX_LENGTH + 1));
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::TooLong {
                field: "message",
                len: 161,
                max: 160
            })
        );
    }

    #[test]
    fn blank_sender_is_rejected() {
        let mut campaign = filled("Flash sale today");
        campaign.sender.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Required {
                field: "sender"
            })
        );
    }

    #[test]
    fn missing_segment_is_rejected() {
        let mut campaign = filled("Flash sale today");
        campaign.audience.segments.clear();
        assert_eq!(
            campaign.validate(),
            Err(ValidationError::Empty {
                field: "segment"
            })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let campaign = filled("¡Hola! 🎉");
        assert_eq!(campaign.message_len(), 8);
    }

    #[test]
    fn compliance_defaults_to_opted_in_promotional() {
        let campaign = SmsCampaign::draft("");
        assert!(campaign.compliance.opt_in);
        assert_eq!(campaign.compliance.message_type, MessageType::Promotional);
        assert_eq!(campaign.audience.phone_number_type, PhoneNumberType::Mobile);
    }
}
