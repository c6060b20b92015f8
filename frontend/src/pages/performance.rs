use dcampaigner_shared::{
    analytics::{aggregate, performance_by_platform},
    ClientId, PlatformPerformance,
};
use yew::prelude::*;

use super::page_header;
use crate::{
    components::{
        charts::{BarChart, ChartSeries, LineChart, ValueFormat},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        metric_card::MetricCard,
    },
    hooks::{use_campaigns, use_page_scope},
    i18n::{current::performance as t, fill_one},
    utils::{format_currency, format_number},
};

const CLICKS_COLOR: &str = "#2D88FF";
const CONVERSIONS_COLOR: &str = "#9B59B6";

fn platform_labels(rows: &[PlatformPerformance]) -> Vec<String> {
    rows.iter().map(|row| row.platform.to_string()).collect()
}

fn engagement_series(rows: &[PlatformPerformance]) -> Vec<ChartSeries> {
    vec![
        ChartSeries::new(
            t::CLICKS,
            CLICKS_COLOR,
            rows.iter().map(|row| row.clicks as f64).collect(),
        ),
        ChartSeries::new(
            t::CONVERSIONS,
            CONVERSIONS_COLOR,
            rows.iter().map(|row| row.conversions as f64).collect(),
        ),
    ]
}

fn spend_series(rows: &[PlatformPerformance]) -> Vec<ChartSeries> {
    vec![ChartSeries::new(
        t::SPEND_SERIES,
        CLICKS_COLOR,
        rows.iter().map(|row| row.spend).collect(),
    )]
}

#[derive(Properties, PartialEq)]
pub struct PerformancePageProps {
    pub client_id: Option<ClientId>,
}

#[function_component(PerformancePage)]
pub fn performance_page(props: &PerformancePageProps) -> Html {
    let scope = use_page_scope(props.client_id);
    let campaigns = match use_campaigns(scope) {
        Some(ctx) => ctx,
        None => return html! {},
    };

    if campaigns.loading {
        return html! {
            <div class="flex min-h-[400px] items-center justify-center">
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        };
    }

    let totals = aggregate(&campaigns.items);
    let rows = performance_by_platform(&campaigns.items);
    let labels = platform_labels(&rows);

    html! {
        <div class="space-y-6">
            { page_header(t::TITLE, html! {}) }
            if let Some(client_id) = scope {
                <p class="-mt-4 text-[var(--muted)]">{ fill_one(t::CLIENT_ID, client_id) }</p>
            }

            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <MetricCard title={t::TOTAL_SPEND} value={format_currency(totals.total_spend)} icon="fa-dollar-sign" />
                <MetricCard title={t::TOTAL_IMPRESSIONS} value={format_number(totals.total_impressions)} icon="fa-eye" />
                <MetricCard title={t::TOTAL_CLICKS} value={format_number(totals.total_clicks)} icon="fa-mouse-pointer" />
                <MetricCard title={t::TOTAL_CONVERSIONS} value={format_number(totals.total_conversions)} icon="fa-check-circle" />
            </div>

            <div class="grid gap-6 lg:grid-cols-2">
                <BarChart
                    title={t::PLATFORM_PERFORMANCE}
                    labels={labels.clone()}
                    series={engagement_series(&rows)}
                    format={ValueFormat::Compact}
                />
                <LineChart
                    title={t::SPEND_BY_PLATFORM}
                    {labels}
                    series={spend_series(&rows)}
                    format={ValueFormat::Currency}
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    #[test]
    fn series_line_up_with_platform_labels() {
        let rows = performance_by_platform(&sample::campaigns());
        let labels = platform_labels(&rows);
        for series in engagement_series(&rows).iter().chain(spend_series(&rows).iter()) {
            assert_eq!(series.values.len(), labels.len());
        }
    }

    #[test]
    fn no_campaigns_means_no_bars() {
        assert!(platform_labels(&[]).is_empty());
        assert!(engagement_series(&[]).iter().all(|series| series.values.is_empty()));
    }
}
