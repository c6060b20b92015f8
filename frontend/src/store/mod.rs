//! Global application state.
//!
//! Four independently reduced slices, each provided through its own Yew
//! context by [`StoreProvider`]. Reducers are pure; storage writes,
//! requests and navigation live in the async thunks next to each slice.

pub mod auth;
pub mod campaigns;
pub mod platforms;
pub mod ui;

use yew::prelude::*;

pub use self::{
    auth::{AuthAction, AuthContext, AuthState},
    campaigns::{CampaignsAction, CampaignsContext, CampaignsState},
    platforms::{PlatformsAction, PlatformsContext, PlatformsState},
    ui::{UiAction, UiContext, UiState},
};

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Html,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let auth = use_reducer(AuthState::from_storage);
    let campaigns = use_reducer(CampaignsState::default);
    let platforms = use_reducer(PlatformsState::default);
    let ui = use_reducer(UiState::default);

    html! {
        <ContextProvider<AuthContext> context={auth}>
            <ContextProvider<CampaignsContext> context={campaigns}>
                <ContextProvider<PlatformsContext> context={platforms}>
                    <ContextProvider<UiContext> context={ui}>
                        {props.children.clone()}
                    </ContextProvider<UiContext>>
                </ContextProvider<PlatformsContext>>
            </ContextProvider<CampaignsContext>>
        </ContextProvider<AuthContext>>
    }
}
