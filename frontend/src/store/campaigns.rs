use std::rc::Rc;

use dcampaigner_shared::{
    models::next_campaign_id, Campaign, CampaignId, ClientId, NewCampaign, PlatformPayload,
};
use yew::prelude::*;

use crate::{api, config::error_messages, logger, utils};

const FETCH_FAILED: &str = "Failed to fetch campaigns";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CampaignsState {
    pub fn find(&self, id: CampaignId) -> Option<&Campaign> {
        self.items.iter().find(|campaign| campaign.id == id)
    }
}

pub enum CampaignsAction {
    FetchPending,
    FetchFulfilled(Vec<Campaign>),
    FetchRejected(Option<String>),
    Created(Campaign),
    /// Replaces the campaign with the same id; unknown ids are ignored.
    Updated(Campaign),
    Removed(CampaignId),
}

impl Reducible for CampaignsState {
    type Action = CampaignsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CampaignsAction::FetchPending => {
                next.loading = true;
                next.error = None;
            },
            CampaignsAction::FetchFulfilled(items) => {
                next.loading = false;
                next.items = items;
            },
            CampaignsAction::FetchRejected(message) => {
                next.loading = false;
                next.error = Some(message.unwrap_or_else(|| FETCH_FAILED.to_string()));
            },
            CampaignsAction::Created(campaign) => {
                next.items.push(campaign);
            },
            CampaignsAction::Updated(campaign) => {
                if let Some(slot) = next.items.iter_mut().find(|c| c.id == campaign.id) {
                    *slot = campaign;
                }
            },
            CampaignsAction::Removed(id) => {
                next.items.retain(|c| c.id != id);
            },
        }
        Rc::new(next)
    }
}

pub type CampaignsContext = UseReducerHandle<CampaignsState>;

pub async fn fetch_campaigns(campaigns: CampaignsContext, client_id: Option<ClientId>) {
    campaigns.dispatch(CampaignsAction::FetchPending);
    match api::fetch_campaigns(client_id).await {
        Ok(items) => campaigns.dispatch(CampaignsAction::FetchFulfilled(items)),
        Err(e) => {
            logger::error(&format!("{FETCH_FAILED}: {e}"));
            campaigns.dispatch(CampaignsAction::FetchRejected(Some(e)));
        },
    }
}

/// Builds a planned campaign from the dialog draft and the wizard payload,
/// submits it, and appends it to the list on success.
pub async fn create_campaign(
    campaigns: CampaignsContext,
    draft: NewCampaign,
    payload: Option<PlatformPayload>,
) -> Result<Campaign, String> {
    let id = next_campaign_id(&campaigns.items);
    let campaign = draft.into_campaign(id, payload, utils::today()).map_err(|e| {
        logger::warn(&format!("Campaign draft rejected: {e}"));
        e.to_string()
    })?;

    if !api::create_campaign(&campaign).await {
        return Err(error_messages::CAMPAIGN_CREATE_FAILED.to_string());
    }
    logger::info(&format!("Created campaign {} ({})", campaign.name, campaign.platform));
    campaigns.dispatch(CampaignsAction::Created(campaign.clone()));
    Ok(campaign)
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::{sample, CampaignStatus};

    use super::*;

    fn reduce(state: CampaignsState, action: CampaignsAction) -> CampaignsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn loaded() -> CampaignsState {
        reduce(CampaignsState::default(), CampaignsAction::FetchFulfilled(sample::campaigns()))
    }

    #[test]
    fn fetch_lifecycle() {
        let state = reduce(CampaignsState::default(), CampaignsAction::FetchPending);
        assert!(state.loading);
        let state = reduce(state, CampaignsAction::FetchFulfilled(sample::campaigns()));
        assert!(!state.loading);
        assert_eq!(state.items.len(), sample::campaigns().len());
    }

    #[test]
    fn rejected_keeps_items_and_defaults_message() {
        let state = reduce(loaded(), CampaignsAction::FetchPending);
        let state = reduce(state, CampaignsAction::FetchRejected(None));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch campaigns"));
        assert_eq!(state.items.len(), sample::campaigns().len());
    }

    #[test]
    fn created_appends() {
        let mut extra = sample::campaigns().remove(1);
        extra.id = 99;
        let state = reduce(loaded(), CampaignsAction::Created(extra));
        assert_eq!(state.items.last().map(|c| c.id), Some(99));
    }

    #[test]
    fn updated_replaces_in_place() {
        let state = loaded();
        let mut changed = state.items[1].clone();
        changed.status = CampaignStatus::Active;
        let state = reduce(state, CampaignsAction::Updated(changed));
        assert_eq!(state.items[1].status, CampaignStatus::Active);
        assert_eq!(state.items.len(), sample::campaigns().len());
    }

    #[test]
    fn updated_ignores_unknown_id() {
        let mut ghost = sample::campaigns().remove(0);
        ghost.id = 500;
        let state = reduce(loaded(), CampaignsAction::Updated(ghost));
        assert!(state.find(500).is_none());
    }

    #[test]
    fn removed_drops_by_id() {
        let state = reduce(loaded(), CampaignsAction::Removed(1));
        assert!(state.find(1).is_none());
        assert_eq!(state.items.len(), sample::campaigns().len() - 1);
    }
}
