use dcampaigner_shared::{analytics, Campaign, CampaignStatus};
use yew::prelude::*;
use yew_router::prelude::Link;

use super::{page_header, progress_bar, status_badge};
use crate::{
    components::{
        image_with_fallback::ImageWithFallback,
        loading_spinner::LoadingSpinner,
        metric_card::MetricCard,
        BUTTON_SECONDARY, CARD,
    },
    hooks::use_campaigns,
    i18n::current::dashboard as t,
    router::Route,
    store::AuthContext,
    utils::{format_compact, format_currency, format_date, format_percent},
};

const RECENT_LIMIT: usize = 5;

/// Latest campaigns first, by start date then id.
fn recent(items: &[Campaign]) -> Vec<&Campaign> {
    let mut sorted: Vec<&Campaign> = items.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
    sorted.truncate(RECENT_LIMIT);
    sorted
}

fn active_count(items: &[Campaign]) -> usize {
    items.iter().filter(|c| c.status == CampaignStatus::Active).count()
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = match use_context::<AuthContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let scope = auth.client_scope();
    let campaigns = match use_campaigns(scope) {
        Some(ctx) => ctx,
        None => return html! {},
    };

    let campaigns_route = match scope {
        Some(client_id) => Route::ClientCampaigns {
            client_id,
        },
        None => Route::Campaigns,
    };
    let analytics_route = match scope {
        Some(client_id) => Route::ClientAnalytics {
            client_id,
        },
        None => Route::Analytics,
    };

    let totals = analytics::aggregate(&campaigns.items);
    let greeting = auth.user.as_ref().map(|user| user.name.clone()).unwrap_or_default();

    html! {
        <div class="space-y-6">
            { page_header(t::TITLE, html! {
                <Link<Route> to={analytics_route} classes={classes!(BUTTON_SECONDARY)}>
                    <i class="fas fa-chart-line"></i>
                    { t::VIEW_ANALYTICS }
                </Link<Route>>
            }) }
            if !greeting.is_empty() {
                <p class="-mt-4 text-[var(--muted)]">{ format!("{} {greeting}", t::WELCOME) }</p>
            }

            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <MetricCard
                    title={t::ACTIVE_CAMPAIGNS}
                    value={active_count(&campaigns.items).to_string()}
                    icon="fa-bullhorn"
                    route={Some(campaigns_route.clone())}
                />
                <MetricCard title={t::TOTAL_SPEND} value={format_currency(totals.total_spend)} icon="fa-dollar-sign" />
                <MetricCard title={t::TOTAL_REACH} value={format_compact(totals.total_reach as f64)} icon="fa-users" />
                <MetricCard title={t::AVERAGE_CTR} value={format_percent(totals.ctr())} icon="fa-mouse-pointer" />
            </div>

            <section class={CARD}>
                <div class="mb-4 flex items-center justify-between">
                    <h3 class="text-lg font-semibold">{ t::RECENT_CAMPAIGNS }</h3>
                    <Link<Route> to={campaigns_route} classes={classes!("text-sm", "font-medium", "text-[var(--primary)]")}>
                        { t::VIEW_ALL }
                    </Link<Route>>
                </div>
                if campaigns.loading && campaigns.items.is_empty() {
                    <LoadingSpinner />
                } else if campaigns.items.is_empty() {
                    <p class="py-8 text-center text-[var(--muted)]">{ t::EMPTY }</p>
                } else {
                    <ul class="divide-y divide-[var(--border)]">
                        { for recent(&campaigns.items).into_iter().map(|campaign| html! {
                            <li key={campaign.id} class="py-3">
                                <Link<Route>
                                    to={Route::CampaignDetails { campaign_id: campaign.id }}
                                    classes={classes!("flex", "items-center", "gap-4", "rounded-lg", "p-2", "hover:bg-[var(--surface-alt)]")}
                                >
                                    <ImageWithFallback
                                        src={campaign.platform.icon_url()}
                                        alt={campaign.platform.to_string()}
                                        class={classes!("h-10", "w-10", "rounded-full")}
                                    />
                                    <div class="min-w-0 flex-1 space-y-1">
                                        <div class="flex items-center justify-between gap-2">
                                            <span class="truncate font-medium">{ campaign.name.clone() }</span>
                                            { status_badge(campaign.status) }
                                        </div>
                                        <div class="flex justify-between text-xs text-[var(--muted)]">
                                            <span>{ format_date(campaign.start_date) }</span>
                                            <span>
                                                { format!(
                                                    "{} / {}",
                                                    format_currency(campaign.metrics.spend),
                                                    format_currency(campaign.budget)
                                                ) }
                                            </span>
                                        </div>
                                        { progress_bar(campaign.budget_progress()) }
                                    </div>
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    #[test]
    fn recent_is_newest_first_and_capped() {
        let items = sample::campaigns();
        let recent = recent(&items);
        assert!(recent.len() <= RECENT_LIMIT);
        assert!(recent.windows(2).all(|pair| pair[0].start_date >= pair[1].start_date));
    }

    #[test]
    fn counts_only_running_campaigns() {
        let mut items = sample::campaigns();
        for campaign in &mut items {
            campaign.status = CampaignStatus::Paused;
        }
        assert_eq!(active_count(&items), 0);
        items[0].status = CampaignStatus::Active;
        assert_eq!(active_count(&items), 1);
    }
}
