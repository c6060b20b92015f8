use dcampaigner_shared::{Client, ClientStatus, NewClient};
use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::Link;

use super::page_header;
use crate::{
    api,
    components::{
        dialog::{Dialog, DialogSize},
        form_fields::TextField,
        BUTTON_PRIMARY, BUTTON_SECONDARY, CARD,
    },
    hooks::use_clients,
    i18n::current::clients as t,
    logger,
    router::Route,
    store::{UiAction, UiContext},
    utils::format_date,
};

fn status_class(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Active => "bg-green-100 text-green-700",
        ClientStatus::Inactive => "bg-slate-200 text-slate-700",
    }
}

fn initial(client: &Client) -> char {
    client.name.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')
}

fn client_card(client: &Client) -> Html {
    html! {
        <article key={client.id} class={classes!(CARD, "flex", "flex-col", "gap-4")}>
            <div class="flex items-center gap-3">
                if let Some(logo) = client.logo.clone() {
                    <img src={logo} alt={client.name.clone()} class="h-12 w-12 rounded-full object-cover" />
                } else {
                    <span class="inline-flex h-12 w-12 items-center justify-center rounded-full bg-[var(--primary)] text-lg font-semibold text-white">
                        { initial(client) }
                    </span>
                }
                <div class="min-w-0">
                    <h3 class="truncate text-lg font-semibold">{ client.name.clone() }</h3>
                    <p class="text-sm text-[var(--muted)]">{ client.industry.clone() }</p>
                </div>
            </div>
            <span class={classes!(
                "w-fit", "rounded-full", "px-2.5", "py-0.5", "text-xs", "font-semibold",
                status_class(client.status)
            )}>
                { client.status.to_string() }
            </span>
            <dl class="space-y-1 text-sm">
                <div class="flex gap-2">
                    <dt class="text-[var(--muted)]">{ t::EMAIL_LABEL }</dt>
                    <dd class="truncate">{ client.email.clone() }</dd>
                </div>
                <div class="flex gap-2">
                    <dt class="text-[var(--muted)]">{ t::WEBSITE_LABEL }</dt>
                    <dd class="truncate">{ client.website.clone() }</dd>
                </div>
                <div class="flex gap-2">
                    <dt class="text-[var(--muted)]">{ t::CLIENT_SINCE }</dt>
                    <dd>{ format_date(client.created_at) }</dd>
                </div>
            </dl>
            <div class="mt-auto flex flex-wrap gap-2">
                <Link<Route>
                    to={Route::ClientCampaigns { client_id: client.id }}
                    classes={classes!(BUTTON_SECONDARY)}
                >
                    <i class="fas fa-bullhorn"></i>
                    { t::VIEW_CAMPAIGNS }
                </Link<Route>>
                <Link<Route>
                    to={Route::ClientAnalytics { client_id: client.id }}
                    classes={classes!(BUTTON_SECONDARY)}
                >
                    <i class="fas fa-chart-pie"></i>
                    { t::VIEW_ANALYTICS }
                </Link<Route>>
            </div>
        </article>
    }
}

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let ui = match use_context::<UiContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let clients = use_clients();
    let open = use_state(|| false);
    let draft = use_state(NewClient::default);
    let error = use_state(|| None::<String>);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            draft.set(NewClient::default());
            error.set(None);
        })
    };

    let field = |apply: fn(&mut NewClient, String)| {
        let draft = draft.clone();
        Callback::from(move |text: String| {
            let mut next = (*draft).clone();
            apply(&mut next, text);
            draft.set(next);
        })
    };

    let on_save = {
        let clients = clients.clone();
        let draft = draft.clone();
        let error = error.clone();
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let clients = clients.clone();
            let draft = draft.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            let ui = ui.clone();
            spawn_local(async move {
                ui.dispatch(UiAction::SetLoading(true));
                match api::create_client((*draft).clone()).await {
                    Ok(client) => {
                        logger::info(&format!("Added client {}", client.name));
                        let mut next = (*clients).clone();
                        next.push(client);
                        clients.set(next);
                        on_close.emit(());
                    },
                    Err(e) => {
                        logger::warn(&format!("Client not added: {e}"));
                        error.set(Some(e));
                    },
                }
                ui.dispatch(UiAction::SetLoading(false));
            });
        })
    };

    let actions = html! {
        <>
            <button type="button" class={BUTTON_SECONDARY} onclick={on_close.reform(|_: MouseEvent| ())}>
                { t::CANCEL }
            </button>
            <button
                type="button"
                class={BUTTON_PRIMARY}
                disabled={draft.validate().is_err()}
                onclick={on_save}
            >
                { t::ADD_CLIENT }
            </button>
        </>
    };

    html! {
        <div>
            { page_header(t::TITLE, html! {
                <button type="button" class={BUTTON_PRIMARY} onclick={on_open}>
                    <i class="fas fa-plus"></i>
                    { t::NEW_CLIENT }
                </button>
            }) }

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                { for clients.iter().map(client_card) }
            </div>

            <Dialog
                open={*open}
                title={t::DIALOG_TITLE}
                size={DialogSize::Small}
                on_close={on_close}
                actions={Some(actions)}
            >
                <div class="space-y-4">
                    <TextField
                        label={t::NAME}
                        value={draft.name.clone()}
                        required=true
                        on_input={field(|c, text| c.name = text)}
                    />
                    <TextField
                        label={t::INDUSTRY}
                        value={draft.industry.clone()}
                        on_input={field(|c, text| c.industry = text)}
                    />
                    <TextField
                        label={t::EMAIL}
                        input_type="email"
                        value={draft.email.clone()}
                        required=true
                        on_input={field(|c, text| c.email = text)}
                    />
                    <TextField
                        label={t::WEBSITE}
                        value={draft.website.clone()}
                        on_input={field(|c, text| c.website = text)}
                    />
                    if let Some(message) = (*error).clone() {
                        <p class="text-sm text-red-600" role="alert">{ message }</p>
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
    fn avatar_initial_is_uppercase() {
        let mut client = sample::clients().remove(0);
        client.name = "acme".to_string();
        assert_eq!(initial(&client), 'A');
        client.name.clear();
        assert_eq!(initial(&client), '?');
    }
}
