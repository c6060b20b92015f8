//! Campaign API services.
//!
//! With the `mock` feature every call resolves against an in-memory copy of
//! the sample data, so the dashboard works without a backend.

use dcampaigner_shared::{
    AuthResponse, Campaign, CampaignId, Client, ClientId, NewClient, Platform,
    PlatformPerformance,
};
#[cfg(not(feature = "mock"))]
use serde::Deserialize;

#[cfg(feature = "mock")]
use crate::config::MOCK_PUBLISH_DELAY_MS;
#[cfg(not(feature = "mock"))]
use crate::http::HTTP;
use crate::{auth, config::endpoints, logger};

#[cfg(feature = "mock")]
mod mock {
    use std::cell::RefCell;

    use dcampaigner_shared::{sample, Campaign, Client};

    pub(super) struct MockDb {
        pub clients: Vec<Client>,
        pub campaigns: Vec<Campaign>,
    }

    thread_local! {
        pub(super) static DB: RefCell<MockDb> = RefCell::new(MockDb {
            clients: sample::clients(),
            campaigns: sample::campaigns(),
        });
    }

    pub(super) fn trace(method: &str, path: &str) {
        crate::logger::debug(&format!("[mock] {method} {path}"));
    }
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

fn campaign_path(id: CampaignId) -> String {
    format!("{}/{}", endpoints::CAMPAIGNS, id)
}

fn campaigns_query(client_id: Option<ClientId>) -> String {
    match client_id {
        Some(id) => format!("{}?clientId={}", endpoints::CAMPAIGNS, id),
        None => endpoints::CAMPAIGNS.to_string(),
    }
}

fn platform_segment(platform: Platform) -> String {
    urlencoding::encode(platform.as_str()).into_owned()
}

/// Campaigns, optionally restricted to one client.
pub async fn fetch_campaigns(client_id: Option<ClientId>) -> Result<Vec<Campaign>, String> {
    let path = campaigns_query(client_id);

    #[cfg(feature = "mock")]
    {
        mock::trace("GET", &path);
        return Ok(mock::DB.with(|db| {
            db.borrow()
                .campaigns
                .iter()
                .filter(|c| client_id.map_or(true, |id| c.client_id == id))
                .cloned()
                .collect()
        }));
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.get(&path).await
    }
}

/// One campaign, `None` when it does not exist.
pub async fn fetch_campaign(id: CampaignId) -> Result<Option<Campaign>, String> {
    #[cfg(feature = "mock")]
    {
        mock::trace("GET", &campaign_path(id));
        return Ok(mock::DB.with(|db| db.borrow().campaigns.iter().find(|c| c.id == id).cloned()));
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.get(&campaign_path(id)).await.map(Some)
    }
}

/// Submits a new campaign. Failures are logged and reported as `false`.
pub async fn create_campaign(campaign: &Campaign) -> bool {
    #[cfg(feature = "mock")]
    {
        mock::trace("POST", endpoints::CAMPAIGNS);
        return mock::DB.with(|db| {
            let mut db = db.borrow_mut();
            if db.campaigns.iter().any(|c| c.id == campaign.id) {
                logger::error(&format!("Failed to create campaign: id {} is taken", campaign.id));
                return false;
            }
            db.campaigns.push(campaign.clone());
            true
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        match HTTP.post::<_, serde_json::Value>(endpoints::CAMPAIGNS, campaign).await {
            Ok(_) => true,
            Err(e) => {
                logger::error(&format!("Failed to create campaign: {e}"));
                false
            },
        }
    }
}

/// Saves edits made on the campaign details page.
pub async fn update_campaign(campaign: &Campaign) -> Result<Campaign, String> {
    #[cfg(feature = "mock")]
    {
        mock::trace("PUT", &campaign_path(campaign.id));
        return mock::DB.with(|db| {
            let mut db = db.borrow_mut();
            let slot = db
                .campaigns
                .iter_mut()
                .find(|c| c.id == campaign.id)
                .ok_or_else(|| format!("Campaign {} not found", campaign.id))?;
            *slot = campaign.clone();
            Ok(campaign.clone())
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.put(&campaign_path(campaign.id), campaign).await
    }
}

/// Makes a campaign live and returns it with its new status.
pub async fn publish_campaign(id: CampaignId) -> Result<Campaign, String> {
    let path = format!("{}/publish", campaign_path(id));

    #[cfg(feature = "mock")]
    {
        mock::trace("POST", &path);
        gloo_timers::future::TimeoutFuture::new(MOCK_PUBLISH_DELAY_MS).await;
        return mock::DB.with(|db| {
            let mut db = db.borrow_mut();
            let campaign = db
                .campaigns
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| format!("Campaign {id} not found"))?;
            campaign.status = dcampaigner_shared::CampaignStatus::Active;
            Ok(campaign.clone())
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.post(&path, &serde_json::json!({})).await
    }
}

pub async fn delete_campaign(id: CampaignId) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        mock::trace("DELETE", &campaign_path(id));
        mock::DB.with(|db| db.borrow_mut().campaigns.retain(|c| c.id != id));
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.delete(&campaign_path(id)).await
    }
}

/// Delivery totals of one platform.
pub async fn fetch_platform_metrics(platform: Platform) -> Result<PlatformPerformance, String> {
    let path = format!("{}/{}", endpoints::ANALYTICS, platform_segment(platform));

    #[cfg(feature = "mock")]
    {
        mock::trace("GET", &path);
        return Ok(mock::DB.with(|db| {
            let db = db.borrow();
            dcampaigner_shared::analytics::performance_by_platform(&db.campaigns)
                .into_iter()
                .find(|row| row.platform == platform)
                .unwrap_or_else(|| PlatformPerformance::empty(platform))
        }));
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.get(&path).await.map_err(|e| {
            logger::error(&format!("Failed to fetch platform metrics: {e}"));
            e
        })
    }
}

/// Connects an ad account. On success the returned token replaces the stored
/// one.
pub async fn authenticate_platform(platform: Platform) -> bool {
    let path = format!("{}/platform/{}", endpoints::AUTH, platform_segment(platform));

    #[cfg(feature = "mock")]
    {
        mock::trace("POST", &path);
        logger::info(&format!("{platform} account connected"));
        return auth::is_authenticated();
    }

    #[cfg(not(feature = "mock"))]
    {
        match HTTP.post::<_, TokenResponse>(&path, &serde_json::json!({})).await {
            Ok(response) => {
                auth::set_auth_token(&response.token);
                true
            },
            Err(e) => {
                logger::error(&format!("Platform authentication failed: {e}"));
                false
            },
        }
    }
}

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    #[cfg(feature = "mock")]
    {
        mock::trace("GET", endpoints::CLIENTS);
        return Ok(mock::DB.with(|db| db.borrow().clients.clone()));
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.get(endpoints::CLIENTS).await
    }
}

/// Registers a client from the "Add New Client" dialog.
pub async fn create_client(draft: NewClient) -> Result<Client, String> {
    draft.validate().map_err(|e| e.to_string())?;

    #[cfg(feature = "mock")]
    {
        mock::trace("POST", endpoints::CLIENTS);
        let today = crate::utils::today();
        return mock::DB.with(|db| {
            let mut db = db.borrow_mut();
            let client = draft.into_client(&db.clients, today).map_err(|e| e.to_string())?;
            db.clients.push(client.clone());
            Ok(client)
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        HTTP.post(endpoints::CLIENTS, &draft).await
    }
}

/// Session returned by the development sign-in.
pub async fn login_with_google(credential: AuthResponse) -> Result<AuthResponse, String> {
    if credential.token.trim().is_empty() {
        return Err("Google credential carried no token".to_string());
    }
    logger::debug(&format!("{} login for {}", endpoints::AUTH, credential.user.email));
    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaigns_query_adds_client_filter() {
        assert_eq!(campaigns_query(None), "/api/campaigns");
        assert_eq!(campaigns_query(Some(3)), "/api/campaigns?clientId=3");
    }

    #[test]
    fn platform_segment_is_percent_encoded() {
        assert_eq!(platform_segment(Platform::GoogleAds), "Google%20Ads");
        assert_eq!(platform_segment(Platform::Sms), "SMS");
    }

    #[test]
    fn campaign_path_appends_id() {
        assert_eq!(campaign_path(7), "/api/campaigns/7");
    }
}
