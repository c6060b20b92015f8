//! Users, clients and campaigns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DomainError, ValidationError},
    payloads::PlatformPayload,
    platform::Platform,
};

/// Client identifier.
pub type ClientId = u32;
/// Campaign identifier.
pub type CampaignId = u32;

wire_enum! {
    /// What a signed-in user may see.
    pub enum Role {
        /// Agency staff: every client, plus client management.
        Admin => "admin",
        /// A client's own login: only that client's campaigns.
        Client => "client",
    }
}

/// A signed-in dashboard user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider subject.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Access level. Identity providers do not send one, so it defaults to admin.
    #[serde(default = "default_role")]
    pub role: Role,
    /// Set for [`Role::Client`] users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

fn default_role() -> Role {
    Role::Admin
}

impl User {
    /// First letter of the name, for avatars.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?').to_ascii_uppercase()
    }

    /// Whether the user may open campaigns of `client_id`.
    pub fn can_access_client(&self, client_id: ClientId) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Client => self.client_id == Some(client_id),
        }
    }
}

/// Body returned by the auth endpoints: the session user and a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed-in user.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

wire_enum! {
    /// Whether the agency currently works for a client.
    pub enum ClientStatus {
        /// Ongoing engagement.
        Active => "active",
        /// Archived client.
        Inactive => "inactive",
    }
}

/// A business the agency runs campaigns for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Identifier.
    pub id: ClientId,
    /// Company name.
    pub name: String,
    /// Industry label, may be empty.
    pub industry: String,
    /// Contact email.
    pub email: String,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Website, may be empty.
    pub website: String,
    /// Engagement status.
    pub status: ClientStatus,
    /// Onboarding date.
    pub created_at: NaiveDate,
}

/// Input of the "Add New Client" dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// Company name, required.
    pub name: String,
    /// Industry.
    pub industry: String,
    /// Contact email, required.
    pub email: String,
    /// Website.
    pub website: String,
}

impl NewClient {
    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        Ok(())
    }

    /// Turns the draft into an active client with the next free id.
    pub fn into_client(
        self,
        existing: &[Client],
        today: NaiveDate,
    ) -> Result<Client, ValidationError> {
        self.validate()?;
        let id = existing.iter().map(|client| client.id).max().unwrap_or(0) + 1;
        Ok(Client {
            id,
            name: self.name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            email: self.email.trim().to_string(),
            logo: None,
            website: self.website.trim().to_string(),
            status: ClientStatus::Active,
            created_at: today,
        })
    }
}

wire_enum! {
    /// Lifecycle of a campaign.
    pub enum CampaignStatus {
        /// Running.
        Active => "active",
        /// Temporarily stopped.
        Paused => "paused",
        /// Finished.
        Completed => "completed",
        /// Created but not published.
        Planned => "planned",
    }
}

impl CampaignStatus {
    /// Capitalised label for selects and chips.
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Planned => "Planned",
        }
    }
}

/// Delivery counters reported by a platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetrics {
    /// Times an ad was shown.
    pub impressions: u64,
    /// Clicks on the ad.
    pub clicks: u64,
    /// Attributed conversions.
    pub conversions: u64,
    /// Money spent so far.
    pub spend: f64,
}

impl CampaignMetrics {
    /// Click-through rate in percent.
    pub fn ctr(&self) -> Option<f64> {
        ratio(self.clicks as f64, self.impressions as f64).map(|r| r * 100.0)
    }

    /// Cost per click.
    pub fn cpc(&self) -> Option<f64> {
        ratio(self.spend, self.clicks as f64)
    }

    /// Conversions per click in percent.
    pub fn conversion_rate(&self) -> Option<f64> {
        ratio(self.conversions as f64, self.clicks as f64).map(|r| r * 100.0)
    }
}

pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

/// Contacts (emails or phone numbers) a campaign explicitly targets or skips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceLists {
    /// Always reached.
    pub include_list: Vec<String>,
    /// Never reached, even when matched by targeting.
    pub exclude_list: Vec<String>,
}

impl AudienceLists {
    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.include_list.is_empty() && self.exclude_list.is_empty()
    }
}

/// A campaign on one platform for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Identifier.
    pub id: CampaignId,
    /// Owning client.
    pub client_id: ClientId,
    /// Display name.
    pub name: String,
    /// Channel.
    pub platform: Platform,
    /// Lifecycle state.
    pub status: CampaignStatus,
    /// Planned budget.
    pub budget: f64,
    /// Estimated unique reach.
    pub reach: u64,
    /// First day of delivery.
    pub start_date: NaiveDate,
    /// Last day of delivery, open ended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Delivery counters.
    pub metrics: CampaignMetrics,
    /// Platform-specific settings entered through the setup wizard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PlatformPayload>,
    /// Explicit include and exclude lists.
    #[serde(default, skip_serializing_if = "AudienceLists::is_empty")]
    pub audience: AudienceLists,
}

impl Campaign {
    /// Share of the budget already spent, clamped to `0..=100`.
    pub fn budget_progress(&self) -> f64 {
        ratio(self.metrics.spend, self.budget)
            .map(|r| (r * 100.0).clamp(0.0, 100.0))
            .unwrap_or(0.0)
    }

    /// Only campaigns that are not live yet can be published.
    pub fn can_publish(&self) -> bool {
        self.status != CampaignStatus::Active
    }
}

/// Input of the "Create New Campaign" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCampaign {
    /// Selected client.
    pub client_id: Option<ClientId>,
    /// Campaign name, required.
    pub name: String,
    /// Selected platform.
    pub platform: Option<Platform>,
}

impl NewCampaign {
    /// Whether the platform wizard can be shown: it needs both selections.
    pub fn ready_for_setup(&self) -> bool {
        self.client_id.is_some() && self.platform.is_some()
    }

    /// Builds a planned campaign from the draft and the wizard output.
    ///
    /// Budget and start date come from the payload when it carries them.
    pub fn into_campaign(
        self,
        id: CampaignId,
        payload: Option<PlatformPayload>,
        today: NaiveDate,
    ) -> Result<Campaign, DomainError> {
        let client_id = self.client_id.ok_or(DomainError::MissingClient)?;
        let platform = self.platform.ok_or(DomainError::MissingPlatform)?;
        require("name", &self.name)?;

        let budget = payload.as_ref().and_then(PlatformPayload::budget).unwrap_or(0.0);
        let start_date = payload.as_ref().and_then(PlatformPayload::start_date).unwrap_or(today);
        let end_date = payload.as_ref().and_then(PlatformPayload::end_date);

        Ok(Campaign {
            id,
            client_id,
            name: self.name.trim().to_string(),
            platform,
            status: CampaignStatus::Planned,
            budget,
            reach: 0,
            start_date,
            end_date,
            metrics: CampaignMetrics::default(),
            details: payload,
            audience: AudienceLists::default(),
        })
    }
}

/// Next free campaign id.
pub fn next_campaign_id(existing: &[Campaign]) -> CampaignId {
    existing.iter().map(|campaign| campaign.id).max().unwrap_or(0) + 1
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required {
            field,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn new_client_requires_name_and_email() {
        let draft = NewClient {
            name: "  ".to_string(),
            email: "hello@acme.io".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required {
                field: "name"
            })
        );

        let draft = NewClient {
            name: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required {
                field: "email"
            })
        );
    }

    #[test]
    fn new_client_gets_next_id_and_active_status() {
        let existing = sample::clients();
        let draft = NewClient {
            name: " Acme ".to_string(),
            industry: "Manufacturing".to_string(),
            email: "hello@acme.io".to_string(),
            website: String::new(),
        };
        let client = draft.into_client(&existing, date(2024, 8, 1)).expect("valid draft");
        let max_id = existing.iter().map(|c| c.id).max().expect("sample clients");
        assert_eq!(client.id, max_id + 1);
        assert_eq!(client.name, "Acme");
        assert_eq!(client.status, ClientStatus::Active);
        assert_eq!(client.created_at, date(2024, 8, 1));
    }

    #[test]
    fn new_campaign_defaults_without_payload() {
        let draft = NewCampaign {
            client_id: Some(2),
            name: "Back to School".to_string(),
            platform: Some(Platform::Email),
        };
        let campaign = draft.into_campaign(9, None, date(2024, 8, 15)).expect("valid draft");
        assert_eq!(campaign.status, CampaignStatus::Planned);
        assert_eq!(campaign.budget, 0.0);
        assert_eq!(campaign.reach, 0);
        assert_eq!(campaign.start_date, date(2024, 8, 15));
        assert_eq!(campaign.metrics, CampaignMetrics::default());
    }

    #[test]
    fn new_campaign_takes_budget_and_schedule_from_payload() {
        let payload = sample::summer_sale_details();
        let draft = NewCampaign {
            client_id: Some(1),
            name: "Summer Sale Campaign".to_string(),
            platform: Some(Platform::Facebook),
        };
        let campaign =
            draft.into_campaign(4, Some(payload), date(2024, 1, 1)).expect("valid draft");
        assert_eq!(campaign.budget, 500.0);
        assert_eq!(campaign.start_date, date(2024, 3, 15));
        assert_eq!(campaign.end_date, Some(date(2024, 4, 15)));
    }

    #[test]
    fn new_campaign_requires_client() {
        let draft = NewCampaign {
            client_id: None,
            name: "Orphan".to_string(),
            platform: Some(Platform::Sms),
        };
        assert!(!draft.ready_for_setup());
        assert_eq!(
            draft.into_campaign(1, None, date(2024, 1, 1)),
            Err(DomainError::MissingClient)
        );
    }

    #[test]
    fn metrics_rates_guard_zero_denominators() {
        let zero = CampaignMetrics::default();
        assert_eq!(zero.ctr(), None);
        assert_eq!(zero.cpc(), None);
        assert_eq!(zero.conversion_rate(), None);

        let metrics = CampaignMetrics {
            impressions: 150_000,
            clicks: 7_500,
            conversions: 450,
            spend: 2_500.0,
        };
        assert_eq!(metrics.ctr(), Some(5.0));
        assert_eq!(metrics.conversion_rate(), Some(6.0));
        let cpc = metrics.cpc().expect("clicks > 0");
        assert!((cpc - 0.333).abs() < 0.001);
    }

    #[test]
    fn client_users_only_reach_their_own_client() {
        let users = sample::users();
        let client_user = users.iter().find(|u| u.role == Role::Client).expect("client user");
        let own = client_user.client_id.expect("client id");
        assert!(client_user.can_access_client(own));
        assert!(!client_user.can_access_client(own + 1));
    }

    #[test]
    fn user_without_role_deserializes_as_admin() {
        let user: User = serde_json::from_str(
            r#"{"id":"123","email":"demo@example.com","name":"Demo User"}"#,
        )
        .expect("deserialize");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.initial(), 'D');
    }

    #[test]
    fn campaign_wire_shape_is_camel_case() {
        let campaign = sample::campaigns().remove(0);
        let value = serde_json::to_value(&campaign).expect("serialize");
        assert_eq!(value["clientId"], 1);
        assert_eq!(value["startDate"], "2024-06-01");
        assert_eq!(value["platform"], "Facebook");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn empty_audience_lists_are_omitted_on_the_wire() {
        let mut campaign = sample::campaigns().remove(1);
        let value = serde_json::to_value(&campaign).expect("serialize");
        assert!(value.get("audience").is_none());

        campaign.audience.exclude_list.push("optout@example.com".to_string());
        let value = serde_json::to_value(&campaign).expect("serialize");
        assert_eq!(value["audience"]["excludeList"][0], "optout@example.com");
        assert_eq!(value["audience"]["includeList"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn budget_progress_is_clamped() {
        let mut campaign = sample::campaigns().remove(0);
        campaign.metrics.spend = campaign.budget * 2.0;
        assert_eq!(campaign.budget_progress(), 100.0);
        campaign.budget = 0.0;
        assert_eq!(campaign.budget_progress(), 0.0);
    }
}
