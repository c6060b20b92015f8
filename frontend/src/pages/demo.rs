use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{dashboard_preview::DashboardPreview, theme_toggle::ThemeToggle, BUTTON_SECONDARY},
    i18n::current::demo as t,
    router::Route,
};

/// Read-only tour of the dashboard for visitors who have not signed in.
#[function_component(DemoPage)]
pub fn demo_page() -> Html {
    html! {
        <div class="min-h-screen bg-[var(--bg)] px-4 py-10 text-[var(--text)]">
            <div class="mx-auto max-w-5xl space-y-6">
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold">{ t::TITLE }</h1>
                        <p class="text-[var(--muted)]">{ t::SUBTITLE }</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <ThemeToggle />
                        <Link<Route> to={Route::Landing} classes={classes!(BUTTON_SECONDARY)}>
                            <i class="fas fa-arrow-left"></i>
                            { t::BACK }
                        </Link<Route>>
                    </div>
                </div>
                <DashboardPreview />
            </div>
        </div>
    }
}
