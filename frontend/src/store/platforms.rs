use std::{collections::HashMap, rc::Rc};

use dcampaigner_shared::Platform;
use yew::prelude::*;

use crate::{api, config::error_messages::AUTH_FAILED, logger};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformsState {
    pub authenticated: HashMap<Platform, bool>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PlatformsState {
    pub fn is_authenticated(&self, platform: Platform) -> bool {
        self.authenticated.get(&platform).copied().unwrap_or(false)
    }
}

pub enum PlatformsAction {
    AuthPending,
    AuthFulfilled(Platform),
    AuthRejected(Option<String>),
}

impl Reducible for PlatformsState {
    type Action = PlatformsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PlatformsAction::AuthPending => {
                next.loading = true;
                next.error = None;
            },
            PlatformsAction::AuthFulfilled(platform) => {
                next.loading = false;
                next.authenticated.insert(platform, true);
            },
            PlatformsAction::AuthRejected(message) => {
                next.loading = false;
                next.error = Some(message.unwrap_or_else(|| AUTH_FAILED.to_string()));
            },
        }
        Rc::new(next)
    }
}

pub type PlatformsContext = UseReducerHandle<PlatformsState>;

/// Connects the ad account for `platform`. Returns whether it succeeded.
pub async fn authenticate_platform(platforms: PlatformsContext, platform: Platform) -> bool {
    platforms.dispatch(PlatformsAction::AuthPending);
    if api::authenticate_platform(platform).await {
        platforms.dispatch(PlatformsAction::AuthFulfilled(platform));
        true
    } else {
        logger::error(&format!("{AUTH_FAILED} for {platform}"));
        platforms.dispatch(PlatformsAction::AuthRejected(None));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: PlatformsState, action: PlatformsAction) -> PlatformsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn fulfilled_marks_only_that_platform() {
        let state = reduce(PlatformsState::default(), PlatformsAction::AuthPending);
        assert!(state.loading);
        let state = reduce(state, PlatformsAction::AuthFulfilled(Platform::YouTube));
        assert!(!state.loading);
        assert!(state.is_authenticated(Platform::YouTube));
        assert!(!state.is_authenticated(Platform::Facebook));
    }

    #[test]
    fn rejected_defaults_message_and_keeps_earlier_connections() {
        let state = reduce(PlatformsState::default(), PlatformsAction::AuthFulfilled(Platform::Sms));
        let state = reduce(state, PlatformsAction::AuthPending);
        let state = reduce(state, PlatformsAction::AuthRejected(None));
        assert_eq!(state.error.as_deref(), Some(AUTH_FAILED));
        assert!(state.is_authenticated(Platform::Sms));
    }
}
