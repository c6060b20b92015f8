use dcampaigner_shared::{
    analytics::{self, month_over_month, performance_by_platform, platform_share},
    sample, ClientId, Platform, PlatformPerformance, PlatformShare, SocialPoint,
};
use yew::{platform::spawn_local, prelude::*};

use super::page_header;
use crate::{
    api,
    components::{
        charts::{platform_color, ChartSeries, DonutChart, DonutSlice, LineChart, ValueFormat},
        loading_spinner::LoadingSpinner,
        metric_card::MetricCard,
        CARD,
    },
    hooks::{use_campaigns, use_page_scope},
    i18n::{current::analytics as t, fill_one},
    logger,
    utils::{format_compact, format_currency, format_number, format_percent},
};

const SOCIAL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::YouTube];

fn social_series(points: &[SocialPoint]) -> (Vec<String>, Vec<ChartSeries>) {
    let labels = points.iter().map(|point| point.name.clone()).collect();
    let series = SOCIAL
        .iter()
        .map(|&platform| {
            ChartSeries::new(
                platform.as_str(),
                platform_color(platform),
                points.iter().map(|point| point.value(platform) as f64).collect(),
            )
        })
        .collect();
    (labels, series)
}

/// Spend share of the campaigns, or the sample audience split when nothing
/// has been spent yet.
fn distribution(rows: &[PlatformPerformance]) -> Vec<DonutSlice> {
    let mut shares = platform_share(rows);
    if shares.is_empty() {
        shares = sample::social_platform_share();
    }
    shares
        .into_iter()
        .map(|PlatformShare { platform, value }| DonutSlice {
            label: platform.to_string(),
            color: platform_color(platform),
            value,
        })
        .collect()
}

fn trend_caption(change: Option<f64>) -> Option<AttrValue> {
    change.map(|change| AttrValue::from(fill_one(t::VS_LAST_MONTH, format!("{change:+.1}%"))))
}

fn platform_table(rows: &[PlatformPerformance]) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead class="text-[var(--muted)]">
                    <tr>
                        <th class="py-2 pr-4">{ t::COL_PLATFORM }</th>
                        <th class="py-2 pr-4 text-right">{ t::COL_SPEND }</th>
                        <th class="py-2 pr-4 text-right">{ t::COL_IMPRESSIONS }</th>
                        <th class="py-2 pr-4 text-right">{ t::COL_CLICKS }</th>
                        <th class="py-2 pr-4 text-right">{ t::COL_CONVERSIONS }</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-[var(--border)]">
                    { for rows.iter().map(|row| html! {
                        <tr key={row.platform.as_str()}>
                            <td class="py-2 pr-4 font-medium">
                                <span
                                    class="mr-2 inline-block h-2.5 w-2.5 rounded-full"
                                    style={format!("background:{}", platform_color(row.platform))}
                                />
                                { row.platform.to_string() }
                            </td>
                            <td class="py-2 pr-4 text-right">{ format_currency(row.spend) }</td>
                            <td class="py-2 pr-4 text-right">{ format_number(row.impressions) }</td>
                            <td class="py-2 pr-4 text-right">{ format_number(row.clicks) }</td>
                            <td class="py-2 pr-4 text-right">{ format_number(row.conversions) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsPageProps {
    pub client_id: Option<ClientId>,
}

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let scope = use_page_scope(props.client_id);
    let campaigns = use_campaigns(scope);
    // Agency-wide rows from the analytics endpoint; client views use their
    // own campaigns instead.
    let reported = use_state(Vec::<PlatformPerformance>::new);

    {
        let reported = reported.clone();
        use_effect_with(scope, move |client_id| {
            if client_id.is_none() {
                spawn_local(async move {
                    let mut rows = Vec::new();
                    for &platform in Platform::ALL {
                        match api::fetch_platform_metrics(platform).await {
                            Ok(row) if row.impressions > 0 => rows.push(row),
                            Ok(_) => {},
                            Err(e) => logger::warn(&format!("No metrics for {platform}: {e}")),
                        }
                    }
                    reported.set(rows);
                });
            } else {
                reported.set(Vec::new());
            }
            || ()
        });
    }

    let campaigns = match campaigns {
        Some(ctx) => ctx,
        None => return html! {},
    };
    if campaigns.loading && campaigns.items.is_empty() {
        return html! { <LoadingSpinner /> };
    }

    let totals = analytics::aggregate(&campaigns.items);
    let by_platform = if scope.is_none() && !reported.is_empty() {
        (*reported).clone()
    } else {
        performance_by_platform(&campaigns.items)
    };
    let social = sample::social_media_series();
    let (labels, series) = social_series(&social);

    let subtitle = scope.map(|id| fill_one(t::CLIENT_SCOPE, id));

    html! {
        <div class="space-y-6">
            { page_header(t::TITLE, html! {}) }
            if let Some(subtitle) = subtitle {
                <p class="-mt-4 text-[var(--muted)]">{ subtitle }</p>
            }

            <div class="grid gap-4 md:grid-cols-3">
                <MetricCard
                    title={t::TOTAL_REACH}
                    value={format_compact(totals.total_reach as f64)}
                    icon="fa-users"
                    trend={month_over_month(&social)}
                    caption={trend_caption(month_over_month(&social))}
                />
                <MetricCard title={t::ENGAGEMENT_RATE} value={format_percent(totals.ctr())} icon="fa-heart" />
                <MetricCard title={t::CONVERSION_RATE} value={format_percent(totals.conversion_rate())} icon="fa-bullseye" />
            </div>

            <div class="grid gap-6 lg:grid-cols-3">
                <LineChart
                    class={classes!("lg:col-span-2")}
                    title={t::SOCIAL_PERFORMANCE}
                    {labels}
                    {series}
                    format={ValueFormat::Compact}
                />
                <DonutChart title={t::DISTRIBUTION} slices={distribution(&by_platform)} />
            </div>

            <section class={CARD}>
                <h3 class="mb-4 text-lg font-semibold">{ t::BREAKDOWN }</h3>
                if by_platform.is_empty() {
                    <p class="text-[var(--muted)]">{ t::NO_ACTIVITY }</p>
                } else {
                    { platform_table(&by_platform) }
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_social_platform() {
        let points = sample::social_media_series();
        let (labels, series) = social_series(&points);
        assert_eq!(labels.len(), points.len());
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|line| line.values.len() == points.len()));
        assert_eq!(series[0].values[0], 4000.0);
    }

    #[test]
    fn distribution_falls_back_to_sample_split() {
        let slices = distribution(&[]);
        let labels: Vec<_> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Facebook", "Instagram", "YouTube"]);
    }

    #[test]
    fn trend_caption_is_signed() {
        assert_eq!(trend_caption(Some(2.5)).as_deref(), Some("+2.5% from last month"));
        assert_eq!(trend_caption(None), None);
    }
}
