use dcampaigner_shared::Platform;
use yew::prelude::*;

use crate::{components::image_with_fallback::ImageWithFallback, i18n::current::preview as t};

struct PreviewStat {
    title: &'static str,
    value: &'static str,
    trend: &'static str,
}

struct PreviewCampaign {
    name: &'static str,
    platform: Platform,
    progress: u32,
    reach: &'static str,
    engagement: &'static str,
}

const STATS: &[PreviewStat] = &[
    PreviewStat {
        title: "Active Campaigns",
        value: "12",
        trend: "+3",
    },
    PreviewStat {
        title: "Total Reach",
        value: "4.8M",
        trend: "+12%",
    },
    PreviewStat {
        title: "Engagement",
        value: "4.2%",
        trend: "+0.8%",
    },
    PreviewStat {
        title: "ROI",
        value: "287%",
        trend: "+23%",
    },
];

const CAMPAIGNS: &[PreviewCampaign] = &[
    PreviewCampaign {
        name: "Summer Sale 2024",
        platform: Platform::Facebook,
        progress: 78,
        reach: "2.3M",
        engagement: "4.2%",
    },
    PreviewCampaign {
        name: "Product Launch",
        platform: Platform::Instagram,
        progress: 45,
        reach: "1.8M",
        engagement: "5.7%",
    },
    PreviewCampaign {
        name: "Brand Awareness",
        platform: Platform::YouTube,
        progress: 92,
        reach: "850K",
        engagement: "3.9%",
    },
];

/// Static mock-up of the dashboard shown on the landing and demo pages.
#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    html! {
        <div class="w-full overflow-hidden rounded-2xl border border-[var(--border)] bg-[var(--surface)] shadow-xl">
            <div class="flex items-center justify-between border-b border-[var(--border)] bg-[var(--bg)] px-6 py-4">
                <h3 class="text-xl font-bold text-[var(--primary)]">{ t::TITLE }</h3>
                <div class="flex gap-2">
                    { for Platform::ALL.iter().take(4).map(|platform| html! {
                        <ImageWithFallback
                            src={platform.icon_url()}
                            alt={platform.to_string()}
                            class={classes!("h-8", "w-8", "rounded-full", "hover:scale-110", "transition-transform")}
                        />
                    }) }
                </div>
            </div>

            <div class="p-6">
                <div class="mb-8 grid grid-cols-2 gap-4 md:grid-cols-4">
                    { for STATS.iter().map(|stat| html! {
                        <div class="rounded-xl bg-gradient-to-br from-[var(--primary)] to-indigo-700 p-4 text-white shadow">
                            <p class="text-sm opacity-80">{ stat.title }</p>
                            <div class="flex items-baseline gap-2">
                                <span class="text-2xl font-bold">{ stat.value }</span>
                                <span class="text-xs font-bold text-green-300">{ stat.trend }</span>
                            </div>
                        </div>
                    }) }
                </div>

                <h4 class="mb-3 text-lg font-semibold">{ t::ACTIVE_CAMPAIGNS }</h4>
                <div class="flex flex-col gap-3">
                    { for CAMPAIGNS.iter().map(|campaign| html! {
                        <div class="flex items-center gap-4 rounded-xl border border-[var(--border)] p-4 hover:bg-[var(--bg)]">
                            <ImageWithFallback
                                src={campaign.platform.icon_url()}
                                alt={campaign.platform.to_string()}
                                class={classes!("h-10", "w-10", "rounded-full")}
                            />
                            <div class="flex-1">
                                <p class="font-semibold">{ campaign.name }</p>
                                <div class="mt-2 h-1.5 w-full rounded-full bg-[var(--surface-alt)]">
                                    <div
                                        class="h-1.5 rounded-full bg-gradient-to-r from-[var(--primary)] to-sky-400"
                                        style={format!("width:{}%;", campaign.progress)}
                                    />
                                </div>
                            </div>
                            <div class="text-right text-sm text-[var(--muted)]">
                                <p>{ format!("{}: {}", t::REACH, campaign.reach) }</p>
                                <p>{ format!("{}: {}", t::ENGAGEMENT, campaign.engagement) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
