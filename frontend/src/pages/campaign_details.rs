use dcampaigner_shared::{
    payloads::FacebookCampaign, Campaign, CampaignId, CampaignStatus, PlatformPayload,
};
use web_sys::HtmlInputElement;
use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::{Link, Redirect};

use super::{progress_bar, status_badge};
use crate::{
    api,
    components::{
        dialog::{Dialog, DialogSize},
        form_fields::{NumberField, SelectField, SelectOption, TextArea, TextField},
        image_with_fallback::ImageWithFallback,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        metric_card::MetricCard,
        platforms::{date_value, parse_date, remove_at, section, PlatformForm},
        tabs::Tabs,
        BUTTON_PRIMARY, BUTTON_SECONDARY, CARD,
    },
    hooks::use_object_urls,
    i18n::{current::campaign_details as t, fill_one},
    logger,
    router::Route,
    store::{AuthContext, AuthState, CampaignsAction, CampaignsContext, UiAction, UiContext},
    utils::{format_currency, format_number, format_percent, humanize, parse_lines},
};

const TABS: [&str; 6] = [
    t::TAB_OVERVIEW,
    t::TAB_TARGETING,
    t::TAB_CREATIVE,
    t::TAB_BUDGET,
    t::TAB_SETTINGS,
    t::TAB_AUDIENCE,
];

/// The headline goal of the platform settings, when the platform has one.
fn objective(payload: Option<&PlatformPayload>) -> Option<String> {
    let raw = match payload? {
        PlatformPayload::Facebook(p) => p.objective.to_string(),
        PlatformPayload::Instagram(p) => p.objective.to_string(),
        PlatformPayload::YouTube(p) => p.ad_format.to_string(),
        PlatformPayload::GoogleAds(p) => p.campaign_type.to_string(),
        PlatformPayload::Email(_) | PlatformPayload::Sms(_) => return None,
    };
    Some(humanize(&raw))
}

/// Copies the audience textareas into the draft.
fn apply_audience(draft: &mut Campaign, include: &str, exclude: &str) {
    draft.audience.include_list = parse_lines(include);
    draft.audience.exclude_list = parse_lines(exclude);
}

/// Client users only see their own client's campaigns.
fn visible_to(auth: &AuthState, campaign: &Campaign) -> bool {
    auth.may_open(Some(campaign.client_id))
}

fn status_options() -> Vec<SelectOption> {
    CampaignStatus::ALL
        .iter()
        .map(|status| SelectOption::new(status.as_str(), status.label()))
        .collect()
}

fn setting_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="flex justify-between gap-4 px-4 py-3 text-sm">
            <dt class="text-[var(--muted)]">{ label }</dt>
            <dd class="font-medium">{ value }</dd>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CampaignDetailsPageProps {
    pub campaign_id: CampaignId,
}

#[function_component(CampaignDetailsPage)]
pub fn campaign_details_page(props: &CampaignDetailsPageProps) -> Html {
    let (auth, campaigns, ui) = match (
        use_context::<AuthContext>(),
        use_context::<CampaignsContext>(),
        use_context::<UiContext>(),
    ) {
        (Some(auth), Some(campaigns), Some(ui)) => (auth, campaigns, ui),
        _ => return html! {},
    };
    let campaign_id = props.campaign_id;

    let campaign = use_state(|| None::<Campaign>);
    let loading = use_state(|| true);
    // Some while editing; the view reads the draft instead of the saved copy.
    let editing = use_state(|| None::<Campaign>);
    let include_text = use_state(String::new);
    let exclude_text = use_state(String::new);
    let tab = use_state(|| 0usize);
    let publish_open = use_state(|| false);
    let publishing = use_state(|| false);
    let media = use_object_urls();

    {
        let campaign = campaign.clone();
        let loading = loading.clone();
        let editing = editing.clone();
        let ui = ui.clone();
        let cached = campaigns.find(campaign_id).cloned();
        use_effect_with(campaign_id, move |&id| {
            editing.set(None);
            match cached {
                Some(found) => {
                    campaign.set(Some(found));
                    loading.set(false);
                },
                None => {
                    loading.set(true);
                    spawn_local(async move {
                        match api::fetch_campaign(id).await {
                            Ok(found) => campaign.set(found),
                            Err(e) => {
                                logger::error(&format!("Failed to load campaign {id}: {e}"));
                                ui.dispatch(UiAction::SetError(Some(e)));
                            },
                        }
                        loading.set(false);
                    });
                },
            }
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner caption={Some(AttrValue::Static(t::LOADING))} /> };
    }
    let Some(saved) = (*campaign).clone() else {
        return html! {
            <div class={classes!(CARD, "py-10", "text-center", "space-y-4")}>
                <p class="text-lg text-[var(--muted)]">{ t::NOT_FOUND }</p>
                <Link<Route> to={Route::Campaigns} classes={classes!(BUTTON_SECONDARY)}>
                    { t::BACK }
                </Link<Route>>
            </div>
        };
    };
    if !visible_to(&auth, &saved) {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }
    let is_editing = editing.is_some();
    let view = (*editing).clone().unwrap_or_else(|| saved.clone());

    let edit = |apply: fn(&mut Campaign, String)| {
        let editing = editing.clone();
        Callback::from(move |text: String| {
            if let Some(mut draft) = (*editing).clone() {
                apply(&mut draft, text);
                editing.set(Some(draft));
            }
        })
    };
    let on_budget = {
        let editing = editing.clone();
        Callback::from(move |amount: f64| {
            if let Some(mut draft) = (*editing).clone() {
                draft.budget = amount;
                editing.set(Some(draft));
            }
        })
    };
    let on_payload = {
        let editing = editing.clone();
        Callback::from(move |payload: PlatformPayload| {
            if let Some(mut draft) = (*editing).clone() {
                draft.details = Some(payload);
                editing.set(Some(draft));
            }
        })
    };
    let on_text = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |text: String| state.set(text))
    };

    let on_start_edit = {
        let editing = editing.clone();
        let include_text = include_text.clone();
        let exclude_text = exclude_text.clone();
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            include_text.set(saved.audience.include_list.join("\n"));
            exclude_text.set(saved.audience.exclude_list.join("\n"));
            editing.set(Some(saved.clone()));
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };
    let on_save = {
        let campaigns = campaigns.clone();
        let campaign = campaign.clone();
        let editing = editing.clone();
        let include_text = include_text.clone();
        let exclude_text = exclude_text.clone();
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut draft) = (*editing).clone() else {
                return;
            };
            apply_audience(&mut draft, &include_text, &exclude_text);
            let campaigns = campaigns.clone();
            let campaign = campaign.clone();
            let editing = editing.clone();
            let ui = ui.clone();
            spawn_local(async move {
                match api::update_campaign(&draft).await {
                    Ok(stored) => {
                        logger::info(&format!("Saved campaign {}", stored.id));
                        campaigns.dispatch(CampaignsAction::Updated(stored.clone()));
                        campaign.set(Some(stored));
                        editing.set(None);
                    },
                    Err(e) => {
                        logger::error(&format!("Save of campaign {} failed: {e}", draft.id));
                        ui.dispatch(UiAction::SetError(Some(e)));
                    },
                }
            });
        })
    };

    let on_publish_open = {
        let publish_open = publish_open.clone();
        Callback::from(move |_: MouseEvent| publish_open.set(true))
    };
    let on_publish_close = {
        let publish_open = publish_open.clone();
        let publishing = publishing.clone();
        Callback::from(move |_: ()| {
            if !*publishing {
                publish_open.set(false);
            }
        })
    };
    let on_publish = {
        let campaigns = campaigns.clone();
        let campaign = campaign.clone();
        let publish_open = publish_open.clone();
        let publishing = publishing.clone();
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            let campaigns = campaigns.clone();
            let campaign = campaign.clone();
            let publish_open = publish_open.clone();
            let publishing = publishing.clone();
            let ui = ui.clone();
            publishing.set(true);
            spawn_local(async move {
                match api::publish_campaign(campaign_id).await {
                    Ok(live) => {
                        logger::info(&format!("Published campaign {campaign_id}"));
                        campaigns.dispatch(CampaignsAction::Updated(live.clone()));
                        campaign.set(Some(live));
                        publish_open.set(false);
                    },
                    Err(e) => {
                        logger::error(&format!("Publish of campaign {campaign_id} failed: {e}"));
                        ui.dispatch(UiAction::SetError(Some(e)));
                    },
                }
                publishing.set(false);
            });
        })
    };

    let on_files = {
        let editing = editing.clone();
        let media = media.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let (Some(files), Some(mut draft)) = (input.files(), (*editing).clone()) {
                if let Some(urls) = draft.details.as_mut().and_then(PlatformPayload::media_urls_mut) {
                    urls.extend(media.add_files(&files));
                    editing.set(Some(draft));
                }
            }
            input.set_value("");
        })
    };
    let on_remove_media = {
        let editing = editing.clone();
        let media = media.clone();
        move |index: usize| {
            let editing = editing.clone();
            let media = media.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(mut draft) = (*editing).clone() else {
                    return;
                };
                let Some(urls) = draft.details.as_mut().and_then(PlatformPayload::media_urls_mut)
                else {
                    return;
                };
                if let Some(url) = urls.get(index) {
                    if let Some(local) = media.urls().iter().position(|u| u == url) {
                        media.remove(local);
                    }
                }
                remove_at(urls, index);
                editing.set(Some(draft));
            })
        }
    };

    let metrics = &view.metrics;
    let overview = html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <div class="space-y-4">
                <TextField
                    label={t::NAME}
                    value={view.name.clone()}
                    disabled={!is_editing}
                    on_input={edit(|c, text| c.name = text)}
                />
                <SelectField
                    label={t::STATUS}
                    value={view.status.as_str()}
                    options={status_options()}
                    disabled={!is_editing}
                    on_change={edit(|c, raw| {
                        if let Ok(status) = raw.parse() {
                            c.status = status;
                        }
                    })}
                />
                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span class="text-[var(--muted)]">{ t::BUDGET_USED }</span>
                        <span>{ format!("{} / {}", format_currency(metrics.spend), format_currency(view.budget)) }</span>
                    </div>
                    { progress_bar(view.budget_progress()) }
                </div>
            </div>
            <div>
                <h4 class="mb-3 text-base font-semibold">{ t::PERFORMANCE }</h4>
                <div class="grid gap-3 sm:grid-cols-2">
                    <MetricCard title={t::IMPRESSIONS} value={format_number(metrics.impressions)} icon="fa-eye" />
                    <MetricCard title={t::CLICKS} value={format_number(metrics.clicks)} icon="fa-mouse-pointer" />
                    <MetricCard title={t::CTR} value={format_percent(metrics.ctr())} icon="fa-percent" />
                    <MetricCard title={t::CONVERSIONS} value={format_number(metrics.conversions)} icon="fa-check-circle" />
                    <MetricCard title={t::SPEND} value={format_currency(metrics.spend)} icon="fa-dollar-sign" />
                    <MetricCard
                        title={t::CPC}
                        value={metrics.cpc().map(format_currency).unwrap_or_else(|| t::NOT_SET.to_string())}
                        icon="fa-coins"
                    />
                    <MetricCard title={t::CONVERSION_RATE} value={format_percent(metrics.conversion_rate())} icon="fa-chart-line" />
                </div>
            </div>
        </div>
    };

    let targeting = match view.details.clone() {
        Some(payload) => html! {
            <PlatformForm value={payload} on_change={on_payload} disabled={!is_editing} />
        },
        None => html! { <p class="text-[var(--muted)]">{ t::NO_DETAILS }</p> },
    };

    let creative_copy = match &view.details {
        Some(PlatformPayload::Facebook(fb)) => html! {
            <div class="space-y-4">
                <TextArea
                    label={t::PRIMARY_TEXT}
                    value={fb.creative_details.primary_text.clone()}
                    rows={3}
                    disabled={!is_editing}
                    on_input={on_payload_text(&editing, |fb, text| fb.creative_details.primary_text = text)}
                />
                <div class="grid gap-4 md:grid-cols-2">
                    <TextField
                        label={t::HEADLINE}
                        value={fb.creative_details.headline.clone()}
                        disabled={!is_editing}
                        on_input={on_payload_text(&editing, |fb, text| fb.creative_details.headline = text)}
                    />
                    <TextField
                        label={t::CALL_TO_ACTION}
                        value={fb.creative_details.call_to_action.clone()}
                        disabled={!is_editing}
                        on_input={on_payload_text(&editing, |fb, text| fb.creative_details.call_to_action = text)}
                    />
                </div>
            </div>
        },
        _ => html! {},
    };
    let media_urls: Vec<String> =
        view.details.as_ref().map(|d| d.media_urls().to_vec()).unwrap_or_default();
    let has_media_list = view.details.as_ref().is_some_and(PlatformPayload::has_media_list);
    let creative = html! {
        <div class="space-y-6">
            { creative_copy }
            if has_media_list {
                { section(t::MEDIA, html! {
                    <div class="flex flex-wrap gap-4">
                        if media_urls.is_empty() {
                            <p class="text-sm text-[var(--muted)]">{ t::NO_MEDIA }</p>
                        }
                        { for media_urls.iter().enumerate().map(|(index, url)| html! {
                            <div key={url.clone()} class="relative h-48 w-48 overflow-hidden rounded-lg border border-[var(--border)]">
                                <ImageWithFallback
                                    src={url.clone()}
                                    alt={fill_one(t::MEDIA_ALT, index + 1)}
                                    class={classes!("h-full", "w-full", "object-cover")}
                                />
                                if is_editing {
                                    <button
                                        type="button"
                                        class="absolute right-2 top-2 h-7 w-7 rounded-full bg-black/50 text-white hover:bg-black/70"
                                        aria-label={t::REMOVE_MEDIA_ARIA}
                                        onclick={on_remove_media(index)}
                                    >
                                        <i class="fas fa-trash-alt text-xs"></i>
                                    </button>
                                }
                            </div>
                        }) }
                        if is_editing {
                            <label class={classes!(BUTTON_SECONDARY, "h-48", "w-48", "cursor-pointer", "border-dashed")}>
                                <i class="fas fa-plus"></i>
                                { t::ADD_MEDIA }
                                <input type="file" accept="image/*" multiple=true class="hidden" onchange={on_files} />
                            </label>
                        }
                    </div>
                }) }
            }
        </div>
    };

    let budget = html! {
        <div class="grid gap-4 md:grid-cols-3">
            <NumberField
                label={t::BUDGET}
                value={view.budget}
                step="0.01"
                prefix={Some(AttrValue::Static("$"))}
                disabled={!is_editing}
                on_change={on_budget}
            />
            <TextField
                label={t::START_DATE}
                input_type="date"
                value={date_value(Some(view.start_date))}
                disabled={!is_editing}
                on_input={edit(|c, raw| {
                    if let Some(date) = parse_date(&raw) {
                        c.start_date = date;
                    }
                })}
            />
            <TextField
                label={t::END_DATE}
                input_type="date"
                value={date_value(view.end_date)}
                disabled={!is_editing}
                on_input={edit(|c, raw| c.end_date = parse_date(&raw))}
            />
        </div>
    };

    let settings = html! {
        <dl class="divide-y divide-[var(--border)] rounded-xl border border-[var(--border)]">
            { setting_row(t::CAMPAIGN_ID, view.id.to_string()) }
            { setting_row(t::PLATFORM, view.platform.to_string()) }
            { setting_row(t::OBJECTIVE, objective(view.details.as_ref()).unwrap_or_else(|| t::NOT_SET.to_string())) }
            { setting_row(t::STATUS, view.status.label().to_string()) }
        </dl>
    };

    let audience_value = |state: &UseStateHandle<String>, saved: &[String]| -> String {
        if is_editing {
            (**state).clone()
        } else {
            saved.join("\n")
        }
    };
    let audience = html! {
        <div class="grid gap-6 md:grid-cols-2">
            <TextArea
                label={t::INCLUDE_LIST}
                value={audience_value(&include_text, &view.audience.include_list)}
                placeholder={t::AUDIENCE_PLACEHOLDER}
                rows={6}
                disabled={!is_editing}
                on_input={on_text(&include_text)}
            />
            <TextArea
                label={t::EXCLUDE_LIST}
                value={audience_value(&exclude_text, &view.audience.exclude_list)}
                placeholder={t::AUDIENCE_PLACEHOLDER}
                rows={6}
                disabled={!is_editing}
                on_input={on_text(&exclude_text)}
            />
        </div>
    };

    let (heading, body) = match *tab {
        0 => (t::TAB_OVERVIEW, overview),
        1 => (t::TARGETING_TITLE, targeting),
        2 => (t::CREATIVE_TITLE, creative),
        3 => (t::TAB_BUDGET, budget),
        4 => (t::SETTINGS_TITLE, settings),
        _ => (t::AUDIENCE_TITLE, audience),
    };

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };

    let publish_actions = html! {
        <>
            <button
                type="button"
                class={BUTTON_SECONDARY}
                disabled={*publishing}
                onclick={on_publish_close.reform(|_: MouseEvent| ())}
            >
                { t::CANCEL }
            </button>
            <button type="button" class={BUTTON_PRIMARY} disabled={*publishing} onclick={on_publish}>
                if *publishing {
                    <LoadingSpinner size={SpinnerSize::Small} />
                    { t::PUBLISHING }
                } else {
                    { t::PUBLISH_ACTION }
                }
            </button>
        </>
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="space-y-1">
                    <h2 class="text-2xl font-bold">{ t::TITLE }</h2>
                    <div class="flex items-center gap-3 text-[var(--muted)]">
                        <span>{ saved.name.clone() }</span>
                        { status_badge(saved.status) }
                    </div>
                </div>
                <div class="flex flex-wrap gap-3">
                    if is_editing {
                        <button type="button" class={BUTTON_SECONDARY} onclick={on_cancel}>
                            { t::CANCEL }
                        </button>
                        <button type="button" class={BUTTON_PRIMARY} onclick={on_save}>
                            <i class="fas fa-save"></i>
                            { t::SAVE }
                        </button>
                    } else {
                        <button type="button" class={BUTTON_PRIMARY} onclick={on_start_edit}>
                            <i class="fas fa-pen"></i>
                            { t::EDIT }
                        </button>
                        if saved.can_publish() {
                            <button type="button" class={BUTTON_SECONDARY} onclick={on_publish_open}>
                                <i class="fas fa-rocket"></i>
                                { t::PUBLISH }
                            </button>
                        }
                    }
                </div>
            </div>

            <div class={CARD}>
                <Tabs labels={TABS.to_vec()} active={*tab} on_select={on_tab} />
                <div class="pt-6">
                    <h3 class="mb-4 text-lg font-semibold">{ heading }</h3>
                    { body }
                </div>
            </div>

            <Dialog
                open={*publish_open}
                title={t::PUBLISH}
                size={DialogSize::Small}
                on_close={on_publish_close}
                actions={Some(publish_actions)}
            >
                <p>{ t::PUBLISH_CONFIRM }</p>
            </Dialog>
        </div>
    }
}

/// Edits a Facebook text field of the draft's platform settings.
fn on_payload_text(
    editing: &UseStateHandle<Option<Campaign>>,
    apply: fn(&mut FacebookCampaign, String),
) -> Callback<String> {
    let editing = editing.clone();
    Callback::from(move |text: String| {
        let Some(mut draft) = (*editing).clone() else {
            return;
        };
        if let Some(PlatformPayload::Facebook(fb)) = draft.details.as_mut() {
            apply(fb, text);
            editing.set(Some(draft));
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dcampaigner_shared::{sample, Platform};

    use super::*;

    #[test]
    fn objective_is_humanized() {
        let details = sample::summer_sale_details();
        assert!(objective(Some(&details)).is_some());
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let sms = PlatformPayload::draft(Platform::Sms, today, "2024-06-01T09:00");
        assert_eq!(objective(Some(&sms)), None);
        assert_eq!(objective(None), None);
    }

    #[test]
    fn audience_lists_come_from_lines() {
        let mut campaign = sample::campaigns().remove(0);
        apply_audience(&mut campaign, "a@x.io\n\n b@x.io ", "+15550100");
        assert_eq!(campaign.audience.include_list, vec!["a@x.io", "b@x.io"]);
        assert_eq!(campaign.audience.exclude_list, vec!["+15550100"]);
    }

    #[test]
    fn client_users_cannot_open_other_clients_campaigns() {
        let campaigns = sample::campaigns();
        let own = campaigns.iter().find(|c| c.client_id == 1).expect("client 1 campaign");
        let other = campaigns.iter().find(|c| c.client_id != 1).expect("other client campaign");
        let client_user = AuthState {
            user: sample::users().into_iter().nth(1),
            ..AuthState::default()
        };
        assert!(visible_to(&client_user, own));
        assert!(!visible_to(&client_user, other));

        let admin = AuthState {
            user: sample::users().into_iter().next(),
            ..AuthState::default()
        };
        assert!(visible_to(&admin, other));
    }

    #[test]
    fn every_status_is_selectable() {
        assert_eq!(status_options().len(), CampaignStatus::ALL.len());
    }
}
