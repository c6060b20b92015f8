use dcampaigner_shared::{CampaignId, ClientId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{layout::Layout, theme_toggle::use_theme_attribute},
    pages,
    store::AuthContext,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/demo")]
    Demo,
    #[at("/dashboard")]
    Dashboard,
    #[at("/clients")]
    Clients,
    #[at("/campaigns")]
    Campaigns,
    #[at("/campaigns/:client_id")]
    ClientCampaigns { client_id: ClientId },
    #[at("/campaign/:campaign_id")]
    CampaignDetails { campaign_id: CampaignId },
    #[at("/analytics")]
    Analytics,
    #[at("/analytics/:client_id")]
    ClientAnalytics { client_id: ClientId },
    #[at("/performance")]
    Performance,
    #[at("/performance/:client_id")]
    ClientPerformance { client_id: ClientId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Reachable without a session token.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Landing | Route::Demo | Route::NotFound)
    }

    /// Client the page is scoped to, taken from the path.
    pub fn client_scope(&self) -> Option<ClientId> {
        match self {
            Route::ClientCampaigns {
                client_id,
            }
            | Route::ClientAnalytics {
                client_id,
            }
            | Route::ClientPerformance {
                client_id,
            } => Some(*client_id),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
struct RequireAuthProps {
    client_id: Option<ClientId>,
    children: Children,
}

/// Renders its children only with a session token, otherwise sends the
/// visitor back to the landing page. Client users asking for another
/// client's pages land on their dashboard.
#[function_component(RequireAuth)]
fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = match use_context::<AuthContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };

    if !auth.is_authenticated() {
        html! { <Redirect<Route> to={Route::Landing} /> }
    } else if !auth.may_open(props.client_id) {
        html! { <Redirect<Route> to={Route::Dashboard} /> }
    } else {
        html! { <>{ for props.children.iter() }</> }
    }
}

fn switch(route: Route) -> Html {
    let client_id = route.client_scope();
    let public = route.is_public();
    let page = match route {
        Route::Landing => html! { <pages::landing::LandingPage /> },
        Route::Demo => html! { <pages::demo::DemoPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::Clients => html! { <pages::clients::ClientsPage /> },
        Route::Campaigns | Route::ClientCampaigns {
            ..
        } => {
            html! { <pages::campaigns::CampaignsPage client_id={client_id} /> }
        },
        Route::CampaignDetails {
            campaign_id,
        } => {
            html! { <pages::campaign_details::CampaignDetailsPage campaign_id={campaign_id} /> }
        },
        Route::Analytics | Route::ClientAnalytics {
            ..
        } => {
            html! { <pages::analytics::AnalyticsPage client_id={client_id} /> }
        },
        Route::Performance | Route::ClientPerformance {
            ..
        } => {
            html! { <pages::performance::PerformancePage client_id={client_id} /> }
        },
    };
    if public {
        return page;
    }

    html! {
        <RequireAuth {client_id}>
            <Layout>{ page }</Layout>
        </RequireAuth>
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    use_theme_attribute();

    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-[var(--bg)] text-[var(--text)]">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_scoped_paths() {
        assert_eq!(
            Route::ClientCampaigns {
                client_id: 2
            }
            .to_path(),
            "/campaigns/2"
        );
        assert_eq!(
            Route::CampaignDetails {
                campaign_id: 7
            }
            .to_path(),
            "/campaign/7"
        );
        assert_eq!(
            Route::ClientPerformance {
                client_id: 1
            }
            .client_scope(),
            Some(1)
        );
        assert_eq!(Route::Performance.client_scope(), None);
    }

    #[test]
    fn recognizes_optional_client_segment() {
        assert_eq!(Route::recognize("/analytics"), Some(Route::Analytics));
        assert_eq!(
            Route::recognize("/analytics/3"),
            Some(Route::ClientAnalytics {
                client_id: 3
            })
        );
    }

    #[test]
    fn only_landing_and_demo_are_public() {
        assert!(Route::Landing.is_public());
        assert!(Route::Demo.is_public());
        assert!(!Route::Dashboard.is_public());
        assert!(!Route::Clients.is_public());
    }
}
