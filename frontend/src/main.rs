//! DCampaigner: a single-page dashboard for planning, launching and
//! measuring marketing campaigns across social, search, email and SMS
//! channels on behalf of agency clients.

mod api;
mod auth;
mod components;
mod config;
mod hooks;
#[cfg(not(feature = "mock"))]
mod http;
mod i18n;
mod logger;
mod pages;
mod router;
mod store;
mod utils;

use yew::prelude::*;

use crate::store::StoreProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <StoreProvider>
            <router::AppRouter />
        </StoreProvider>
    }
}

fn main() {
    logger::info(&format!("Starting DCampaigner ({})", config::ENVIRONMENT));
    yew::Renderer::<App>::new().render();
}
