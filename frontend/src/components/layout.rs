use dcampaigner_shared::{Role, User};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        theme_toggle::ThemeToggle,
    },
    hooks::use_scroll_to_top,
    i18n::current::layout as t,
    router::Route,
    store::{self, AuthContext, UiAction, UiContext},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

impl MenuItem {
    fn new(label: &'static str, icon: &'static str, route: Route) -> Self {
        Self {
            label,
            icon,
            route,
        }
    }
}

/// Sidebar entries for `user`. Admins also manage clients; client users see
/// their own campaigns only. Without a loaded profile the base menu is used.
pub fn menu_items(user: Option<&User>) -> Vec<MenuItem> {
    let campaigns = match user {
        Some(User {
            role: Role::Client,
            client_id: Some(client_id),
            ..
        }) => Route::ClientCampaigns {
            client_id: *client_id,
        },
        _ => Route::Campaigns,
    };

    let mut items = vec![
        MenuItem::new(t::NAV_DASHBOARD, "fa-gauge-high", Route::Dashboard),
        MenuItem::new(t::NAV_CAMPAIGNS, "fa-bullhorn", campaigns),
        MenuItem::new(t::NAV_ANALYTICS, "fa-chart-line", Route::Analytics),
        MenuItem::new(t::NAV_PERFORMANCE, "fa-gauge", Route::Performance),
    ];
    if user.is_some_and(|u| u.role == Role::Admin) {
        items.insert(1, MenuItem::new(t::NAV_CLIENTS, "fa-building", Route::Clients));
    }
    items
}

/// Sidebar heading.
pub fn portal_title(user: Option<&User>) -> &'static str {
    match user.map(|u| u.role) {
        Some(Role::Client) => t::CLIENT_PORTAL,
        _ => t::MARKETING_HUB,
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    use_scroll_to_top();
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let (auth, ui) = match (use_context::<AuthContext>(), use_context::<UiContext>()) {
        (Some(auth), Some(ui)) => (auth, ui),
        _ => return html! {},
    };

    let user = auth.user.as_ref();
    let expanded = ui.sidebar_open;

    let toggle_sidebar = {
        let ui = ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::ToggleSidebar))
    };
    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| store::auth::logout(&auth, navigator.as_ref()))
    };
    let clear_error = {
        let ui = ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::SetError(None)))
    };

    let sidebar_width = if expanded { "w-60" } else { "w-16" };
    let content_offset = if expanded { "md:ml-60" } else { "md:ml-16" };

    html! {
        <div class="flex min-h-screen">
            <nav
                class={classes!(
                    "fixed",
                    "inset-y-0",
                    "left-0",
                    "z-30",
                    "flex",
                    "flex-col",
                    sidebar_width,
                    "border-r",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "transition-all",
                    "duration-200"
                )}
                aria-label={t::NAV_ARIA}
            >
                <div class="flex h-16 items-center justify-between px-4">
                    if expanded {
                        <span class="text-lg font-semibold truncate">{ portal_title(user) }</span>
                    }
                    <button
                        type="button"
                        class="h-8 w-8 rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                        aria-label={t::TOGGLE_SIDEBAR_ARIA}
                        onclick={toggle_sidebar}
                    >
                        <i class={classes!("fas", if expanded { "fa-chevron-left" } else { "fa-chevron-right" })}></i>
                    </button>
                </div>
                <ul class="flex-1 space-y-1 px-2">
                    { for menu_items(user).into_iter().map(|item| {
                        let active = current.as_ref() == Some(&item.route);
                        let item_class = classes!(
                            "flex",
                            "items-center",
                            "gap-3",
                            "rounded-lg",
                            "px-3",
                            "py-2.5",
                            "text-sm",
                            "font-medium",
                            "transition-colors",
                            if expanded { "justify-start" } else { "justify-center" },
                            if active {
                                "bg-[var(--primary)]/10 text-[var(--primary)]"
                            } else {
                                "text-[var(--text)] hover:bg-[var(--surface-alt)]"
                            }
                        );
                        html! {
                            <li key={item.label}>
                                <Link<Route> to={item.route.clone()} classes={item_class}>
                                    <i class={classes!("fas", item.icon, "w-5", "text-center")} aria-hidden="true"></i>
                                    if expanded { <span>{ item.label }</span> }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
                <div class="flex items-center justify-between gap-2 border-t border-[var(--border)] p-3">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-lg px-3 py-2 text-sm hover:bg-[var(--surface-alt)]"
                        title={t::LOGOUT}
                        onclick={on_logout}
                    >
                        <i class="fas fa-right-from-bracket"></i>
                        if expanded { <span>{ t::LOGOUT }</span> }
                    </button>
                </div>
            </nav>

            <div class={classes!("flex-1", "ml-16", content_offset, "transition-all", "duration-200")}>
                <header class="sticky top-0 z-20 flex h-16 items-center justify-between border-b border-[var(--border)] bg-[var(--surface)] px-6 shadow-sm">
                    <h1 class="text-lg font-semibold text-[var(--primary)]">{ t::APP_TITLE }</h1>
                    if let Some(user) = user {
                        <div class="flex items-center gap-3">
                            <span class="hidden sm:inline text-sm text-[var(--muted)]">{ user.name.clone() }</span>
                            <span class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-[var(--primary)] text-white font-semibold">
                                { user.initial() }
                            </span>
                        </div>
                    }
                </header>
                if let Some(message) = ui.error.clone() {
                    <div class="flex justify-center px-6 pt-4">
                        <ErrorBanner message={message} on_close={clear_error} />
                    </div>
                }
                <main class="p-6">
                    { for props.children.iter() }
                </main>
            </div>

            if ui.loading {
                <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    fn labels(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.label).collect()
    }

    #[test]
    fn admins_get_clients_after_dashboard() {
        let admin = sample::users().remove(0);
        let items = menu_items(Some(&admin));
        assert_eq!(
            labels(&items),
            vec!["Dashboard", "Clients", "Campaigns", "Analytics", "Performance"]
        );
        assert_eq!(items[2].route, Route::Campaigns);
        assert_eq!(portal_title(Some(&admin)), "Marketing Hub");
    }

    #[test]
    fn client_users_see_their_own_campaigns() {
        let client = sample::users().remove(1);
        let items = menu_items(Some(&client));
        assert_eq!(labels(&items), vec!["Dashboard", "Campaigns", "Analytics", "Performance"]);
        assert_eq!(
            items[1].route,
            Route::ClientCampaigns {
                client_id: 1
            }
        );
        assert_eq!(portal_title(Some(&client)), "Client Portal");
    }

    #[test]
    fn unknown_user_gets_base_menu() {
        let items = menu_items(None);
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].route, Route::Campaigns);
        assert_eq!(portal_title(None), "Marketing Hub");
    }
}
