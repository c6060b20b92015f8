use std::rc::Rc;

use dcampaigner_shared::{AuthResponse, ClientId, Role, User};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::{api, logger, router::Route};

const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Picks up a token left in local storage by an earlier session.
    pub fn from_storage() -> Self {
        Self {
            token: crate::auth::get_auth_token(),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The client a client-role user is confined to. Admins and sessions
    /// without a loaded user see every client.
    pub fn client_scope(&self) -> Option<ClientId> {
        self.user.as_ref().filter(|user| user.role == Role::Client).and_then(|user| user.client_id)
    }

    /// Client filter for a page whose route names `route_scope`. Client users
    /// without a route client are held to their own.
    pub fn scope_for(&self, route_scope: Option<ClientId>) -> Option<ClientId> {
        route_scope.or_else(|| self.client_scope())
    }

    /// Whether a page scoped to `client_id` may be shown to this user.
    pub fn may_open(&self, client_id: Option<ClientId>) -> bool {
        match (client_id, self.user.as_ref()) {
            (Some(id), Some(user)) => user.can_access_client(id),
            _ => true,
        }
    }
}

pub enum AuthAction {
    LoginPending,
    LoginFulfilled(AuthResponse),
    /// `None` falls back to a generic message.
    LoginRejected(Option<String>),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::LoginPending => {
                next.loading = true;
                next.error = None;
            },
            AuthAction::LoginFulfilled(AuthResponse {
                user,
                token,
            }) => {
                next.loading = false;
                next.user = Some(user);
                next.token = Some(token);
            },
            AuthAction::LoginRejected(message) => {
                next.loading = false;
                next.error = Some(message.unwrap_or_else(|| LOGIN_FAILED.to_string()));
            },
            AuthAction::Logout => {
                next.user = None;
                next.token = None;
            },
        }
        Rc::new(next)
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

/// Exchanges a Google credential for a session and persists the token.
/// Returns whether the user is now signed in.
pub async fn login_with_google(auth: AuthContext, credential: AuthResponse) -> bool {
    auth.dispatch(AuthAction::LoginPending);
    match api::login_with_google(credential).await {
        Ok(session) => {
            crate::auth::set_auth_token(&session.token);
            logger::info(&format!("Signed in as {}", session.user.email));
            auth.dispatch(AuthAction::LoginFulfilled(session));
            true
        },
        Err(e) => {
            logger::error(&format!("Login failed: {e}"));
            auth.dispatch(AuthAction::LoginRejected(Some(e)));
            false
        },
    }
}

/// Drops the session and returns to the landing page.
pub fn logout(auth: &AuthContext, navigator: Option<&Navigator>) {
    crate::auth::clear_auth_token();
    auth.dispatch(AuthAction::Logout);
    if let Some(navigator) = navigator {
        navigator.push(&Route::Landing);
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    fn reduce(state: AuthState, action: AuthAction) -> AuthState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn pending_clears_previous_error() {
        let state = AuthState {
            error: Some("Login failed".to_string()),
            ..AuthState::default()
        };
        let state = reduce(state, AuthAction::LoginPending);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fulfilled_stores_user_and_token() {
        let state = reduce(AuthState::default(), AuthAction::LoginPending);
        let state = reduce(state, AuthAction::LoginFulfilled(sample::mock_google_login()));
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some(sample::MOCK_TOKEN));
        assert_eq!(state.user.map(|u| u.email), Some("demo@example.com".to_string()));
    }

    #[test]
    fn rejected_without_message_uses_default() {
        let state = reduce(AuthState::default(), AuthAction::LoginRejected(None));
        assert_eq!(state.error.as_deref(), Some("Login failed"));

        let state = reduce(state, AuthAction::LoginRejected(Some("popup closed".to_string())));
        assert_eq!(state.error.as_deref(), Some("popup closed"));
    }

    #[test]
    fn client_users_stay_within_their_client() {
        let client_user = AuthState {
            user: sample::users().into_iter().nth(1),
            token: Some(sample::MOCK_TOKEN.to_string()),
            ..AuthState::default()
        };
        assert_eq!(client_user.client_scope(), Some(1));
        assert!(client_user.may_open(Some(1)));
        assert!(!client_user.may_open(Some(2)));
        assert!(client_user.may_open(None));

        let admin = AuthState {
            user: sample::users().into_iter().next(),
            ..client_user
        };
        assert!(admin.may_open(Some(2)));
        assert_eq!(admin.scope_for(None), None);
    }

    #[test]
    fn unscoped_routes_fall_back_to_the_session_client() {
        let client_user = AuthState {
            user: sample::users().into_iter().nth(1),
            ..AuthState::default()
        };
        assert_eq!(client_user.scope_for(None), Some(1));
        assert_eq!(client_user.scope_for(Some(1)), Some(1));
        assert!(!client_user.may_open(Some(2)));
        assert_eq!(AuthState::default().scope_for(Some(3)), Some(3));
    }

    #[test]
    fn logout_clears_session() {
        let state = reduce(AuthState::default(), AuthAction::LoginFulfilled(sample::mock_google_login()));
        let state = reduce(state, AuthAction::Logout);
        assert_eq!(state.user, None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn only_client_users_are_scoped() {
        let admin = AuthState {
            user: Some(sample::users().remove(0)),
            ..AuthState::default()
        };
        assert_eq!(admin.client_scope(), None);

        let client = AuthState {
            user: Some(sample::users().remove(1)),
            ..AuthState::default()
        };
        assert_eq!(client.client_scope(), Some(1));
        assert_eq!(AuthState::default().client_scope(), None);
    }
}
