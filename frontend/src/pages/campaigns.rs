use dcampaigner_shared::{
    Campaign, CampaignFilter, CampaignStatus, Client, ClientId, NewCampaign, Platform,
    PlatformPayload,
};
use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::{use_navigator, Link};

use super::{client_name, page_header, status_badge};
use crate::{
    api,
    components::{
        dialog::{Dialog, DialogSize},
        form_fields::{SelectField, SelectOption, TextField},
        loading_spinner::LoadingSpinner,
        platforms::{date_value, integration::PlatformIntegration, parse_date},
        BUTTON_DANGER, BUTTON_PRIMARY, BUTTON_SECONDARY, CARD,
    },
    hooks::{use_campaigns, use_clients, use_page_scope},
    i18n::current::campaigns as t,
    logger,
    router::Route,
    store::{
        campaigns::create_campaign, CampaignsAction, CampaignsContext, UiAction, UiContext,
    },
    utils::{format_currency, format_date, format_number},
};

fn client_options(clients: &[Client]) -> Vec<SelectOption> {
    clients.iter().map(|client| SelectOption::new(client.id.to_string(), &client.name)).collect()
}

fn platform_options(picker: bool) -> Vec<SelectOption> {
    Platform::ALL
        .iter()
        .map(|platform| {
            let label = if picker { platform.picker_label() } else { platform.as_str() };
            SelectOption::new(platform.as_str(), label)
        })
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    CampaignStatus::ALL
        .iter()
        .map(|status| SelectOption::new(status.as_str(), status.label()))
        .collect()
}

/// The bar selections with the client taken from the route.
fn scoped(filter: CampaignFilter, client_id: Option<ClientId>) -> CampaignFilter {
    CampaignFilter {
        client_id,
        ..filter
    }
}

#[derive(Properties, PartialEq)]
struct CampaignCardProps {
    campaign: Campaign,
    client: String,
}

#[function_component(CampaignCard)]
fn campaign_card(props: &CampaignCardProps) -> Html {
    let (campaigns, ui) = match (use_context::<CampaignsContext>(), use_context::<UiContext>()) {
        (Some(campaigns), Some(ui)) => (campaigns, ui),
        _ => return html! {},
    };
    let campaign = &props.campaign;
    let details = Route::CampaignDetails {
        campaign_id: campaign.id,
    };

    let on_delete = {
        let id = campaign.id;
        Callback::from(move |_: MouseEvent| {
            let campaigns = campaigns.clone();
            let ui = ui.clone();
            spawn_local(async move {
                ui.dispatch(UiAction::SetLoading(true));
                match api::delete_campaign(id).await {
                    Ok(()) => {
                        logger::info(&format!("Deleted campaign {id}"));
                        campaigns.dispatch(CampaignsAction::Removed(id));
                    },
                    Err(e) => {
                        logger::error(&format!("Delete of campaign {id} failed: {e}"));
                        ui.dispatch(UiAction::SetError(Some(e)));
                    },
                }
                ui.dispatch(UiAction::SetLoading(false));
            });
        })
    };

    html! {
        <article class={classes!(CARD, "flex", "flex-col", "gap-3", "transition", "hover:-translate-y-0.5", "hover:shadow-lg")}>
            <div class="flex items-start justify-between gap-2">
                <Link<Route> to={details.clone()} classes={classes!("text-lg", "font-semibold", "hover:text-[var(--primary)]")}>
                    { campaign.name.clone() }
                </Link<Route>>
                { status_badge(campaign.status) }
            </div>
            <p class="text-sm text-[var(--muted)]">{ props.client.clone() }</p>
            <dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm">
                <dt class="text-[var(--muted)]">{ t::PLATFORM_LABEL }</dt>
                <dd>{ campaign.platform.to_string() }</dd>
                <dt class="text-[var(--muted)]">{ t::BUDGET_LABEL }</dt>
                <dd>{ format_currency(campaign.budget) }</dd>
                <dt class="text-[var(--muted)]">{ t::REACH_LABEL }</dt>
                <dd>{ format_number(campaign.reach) }</dd>
                <dt class="text-[var(--muted)]">{ t::START_LABEL }</dt>
                <dd>{ format_date(campaign.start_date) }</dd>
            </dl>
            <div class="mt-auto flex gap-2 pt-2">
                <Link<Route> to={details} classes={classes!(BUTTON_SECONDARY)}>
                    <i class="fas fa-pen"></i>
                    { t::EDIT }
                </Link<Route>>
                <button type="button" class={BUTTON_DANGER} onclick={on_delete}>
                    <i class="fas fa-trash-alt"></i>
                    { t::DELETE }
                </button>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct CampaignsPageProps {
    pub client_id: Option<ClientId>,
}

#[function_component(CampaignsPage)]
pub fn campaigns_page(props: &CampaignsPageProps) -> Html {
    // The full list backs id allocation; the route scope is applied as a filter.
    let campaigns = use_campaigns(None);
    let clients = use_clients();
    let client_id = use_page_scope(props.client_id);
    let navigator = use_navigator();
    let filter = use_state(CampaignFilter::default);
    let open = use_state(|| false);
    let draft = use_state(NewCampaign::default);
    let error = use_state(|| None::<String>);

    let campaigns = match campaigns {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let active_filter = scoped(*filter, client_id);

    let on_client_filter = {
        let navigator = navigator.clone();
        Callback::from(move |raw: String| {
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            match raw.parse::<ClientId>() {
                Ok(client_id) => navigator.push(&Route::ClientCampaigns {
                    client_id,
                }),
                Err(_) => navigator.push(&Route::Campaigns),
            }
        })
    };
    let on_platform_filter = {
        let filter = filter.clone();
        Callback::from(move |raw: String| {
            filter.set(CampaignFilter {
                platform: raw.parse().ok(),
                ..*filter
            });
        })
    };
    let on_status_filter = {
        let filter = filter.clone();
        Callback::from(move |raw: String| {
            filter.set(CampaignFilter {
                status: raw.parse().ok(),
                ..*filter
            });
        })
    };
    let on_from = {
        let filter = filter.clone();
        Callback::from(move |raw: String| {
            let mut next = *filter;
            next.date_range.from = parse_date(&raw);
            filter.set(next);
        })
    };
    let on_to = {
        let filter = filter.clone();
        Callback::from(move |raw: String| {
            let mut next = *filter;
            next.date_range.to = parse_date(&raw);
            filter.set(next);
        })
    };
    let on_clear = {
        let filter = filter.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *filter;
            next.clear();
            filter.set(next);
            if client_id.is_some() {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Campaigns);
                }
            }
        })
    };

    let on_open = {
        let open = open.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(NewCampaign {
                client_id,
                ..NewCampaign::default()
            });
            open.set(true);
        })
    };
    let on_close = {
        let open = open.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            error.set(None);
        })
    };
    let on_draft_client = {
        let draft = draft.clone();
        Callback::from(move |raw: String| {
            draft.set(NewCampaign {
                client_id: raw.parse().ok(),
                ..(*draft).clone()
            });
        })
    };
    let on_draft_name = {
        let draft = draft.clone();
        Callback::from(move |name: String| {
            draft.set(NewCampaign {
                name,
                ..(*draft).clone()
            });
        })
    };
    let on_draft_platform = {
        let draft = draft.clone();
        Callback::from(move |raw: String| {
            draft.set(NewCampaign {
                platform: raw.parse().ok(),
                ..(*draft).clone()
            });
        })
    };
    let on_complete = {
        let campaigns = campaigns.clone();
        let draft = draft.clone();
        let error = error.clone();
        let on_close = on_close.clone();
        Callback::from(move |payload: PlatformPayload| {
            let campaigns = campaigns.clone();
            let draft = (*draft).clone();
            let error = error.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match create_campaign(campaigns, draft, Some(payload)).await {
                    Ok(_) => on_close.emit(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let visible = active_filter.apply(&campaigns.items);

    let filters = html! {
        <div class="mb-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-6 lg:items-end">
            <SelectField
                label={t::CLIENT}
                value={client_id.map(|id| id.to_string()).unwrap_or_default()}
                options={client_options(&clients)}
                placeholder={Some(AttrValue::Static(t::ALL_CLIENTS))}
                on_change={on_client_filter}
            />
            <SelectField
                label={t::PLATFORM}
                value={filter.platform.map(|p| p.as_str()).unwrap_or_default()}
                options={platform_options(false)}
                placeholder={Some(AttrValue::Static(t::ALL_PLATFORMS))}
                on_change={on_platform_filter}
            />
            <SelectField
                label={t::STATUS}
                value={filter.status.map(|s| s.as_str()).unwrap_or_default()}
                options={status_options()}
                placeholder={Some(AttrValue::Static(t::ALL_STATUSES))}
                on_change={on_status_filter}
            />
            <TextField
                label={t::STARTS_AFTER}
                input_type="date"
                value={date_value(filter.date_range.from)}
                on_input={on_from}
            />
            <TextField
                label={t::STARTS_BEFORE}
                input_type="date"
                value={date_value(filter.date_range.to)}
                on_input={on_to}
            />
            <button type="button" class={BUTTON_SECONDARY} onclick={on_clear.clone()}>
                { t::CLEAR_FILTERS }
            </button>
        </div>
    };

    let grid = if campaigns.loading && campaigns.items.is_empty() {
        html! { <LoadingSpinner caption={Some(AttrValue::Static(t::LOADING))} /> }
    } else if visible.is_empty() {
        html! {
            <div class={classes!(CARD, "py-10", "text-center")}>
                <p class="text-lg text-[var(--muted)]">{ t::EMPTY }</p>
                <button type="button" class={classes!(BUTTON_SECONDARY, "mt-4")} onclick={on_clear}>
                    { t::CLEAR_FILTERS }
                </button>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for visible.into_iter().map(|campaign| html! {
                    <CampaignCard
                        key={campaign.id}
                        campaign={campaign.clone()}
                        client={client_name(&clients, campaign.client_id)}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div>
            { page_header(t::TITLE, html! {
                <button type="button" class={BUTTON_PRIMARY} onclick={on_open}>
                    <i class="fas fa-plus"></i>
                    { t::NEW_CAMPAIGN }
                </button>
            }) }
            { filters }
            { grid }

            <Dialog open={*open} title={t::DIALOG_TITLE} size={DialogSize::Large} on_close={on_close}>
                <div class="space-y-4">
                    if client_id.is_none() {
                        <SelectField
                            label={t::CLIENT}
                            value={draft.client_id.map(|id| id.to_string()).unwrap_or_default()}
                            options={client_options(&clients)}
                            placeholder={Some(AttrValue::Static(t::SELECT_CLIENT))}
                            required=true
                            on_change={on_draft_client}
                        />
                    }
                    <TextField
                        label={t::NAME}
                        value={draft.name.clone()}
                        required=true
                        on_input={on_draft_name}
                    />
                    <SelectField
                        label={t::PLATFORM}
                        value={draft.platform.map(|p| p.as_str()).unwrap_or_default()}
                        options={platform_options(true)}
                        placeholder={Some(AttrValue::Static(t::SELECT_PLATFORM))}
                        required=true
                        on_change={on_draft_platform}
                    />
                    if let Some(message) = (*error).clone() {
                        <p class="text-sm text-red-600" role="alert">{ message }</p>
                    }
                    if let (true, Some(platform)) = (draft.ready_for_setup(), draft.platform) {
                        <div class="border-t border-[var(--border)] pt-6">
                            <PlatformIntegration
                                key={platform.as_str()}
                                {platform}
                                {on_complete}
                            />
                        </div>
                    }
                </div>
            </Dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    #[test]
    fn picker_uses_campaign_labels_for_messaging() {
        let labels: Vec<_> = platform_options(true).into_iter().map(|o| o.label).collect();
        assert!(labels.contains(&"Email Campaign".to_string()));
        assert!(labels.contains(&"SMS Campaign".to_string()));
        let values: Vec<_> = platform_options(false).into_iter().map(|o| o.value).collect();
        assert!(values.contains(&"Google Ads".to_string()));
    }

    #[test]
    fn status_values_parse_back() {
        for option in status_options() {
            assert!(option.value.parse::<CampaignStatus>().is_ok());
        }
    }

    #[test]
    fn route_scope_overrides_the_bar() {
        let campaigns = sample::campaigns();
        let bar = CampaignFilter {
            platform: Some(Platform::Facebook),
            ..CampaignFilter::default()
        };
        let all = scoped(bar, None).apply(&campaigns).len();
        let narrowed = scoped(bar, Some(1)).apply(&campaigns);
        assert!(narrowed.len() <= all);
        assert!(narrowed.iter().all(|c| c.client_id == 1 && c.platform == Platform::Facebook));
    }
}
