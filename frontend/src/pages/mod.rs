pub mod analytics;
pub mod campaign_details;
pub mod campaigns;
pub mod clients;
pub mod dashboard;
pub mod demo;
pub mod landing;
pub mod performance;

use dcampaigner_shared::{CampaignStatus, Client, ClientId};
use yew::prelude::*;

use crate::i18n::{current::common, fill_one};

fn status_colors(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "bg-green-100 text-green-700",
        CampaignStatus::Paused => "bg-amber-100 text-amber-700",
        CampaignStatus::Completed => "bg-slate-200 text-slate-700",
        CampaignStatus::Planned => "bg-blue-100 text-blue-700",
    }
}

/// Rounded chip with the status label.
pub(crate) fn status_badge(status: CampaignStatus) -> Html {
    html! {
        <span class={classes!(
            "inline-flex", "items-center", "rounded-full", "px-2.5", "py-0.5",
            "text-xs", "font-semibold", status_colors(status)
        )}>
            { status.label() }
        </span>
    }
}

/// Display name of a client, or a numbered placeholder while the list loads.
pub(crate) fn client_name(clients: &[Client], id: ClientId) -> String {
    clients
        .iter()
        .find(|client| client.id == id)
        .map(|client| client.name.clone())
        .unwrap_or_else(|| fill_one(common::UNKNOWN_CLIENT, id))
}

/// Title row of a page with optional actions on the right.
pub(crate) fn page_header(title: &'static str, actions: Html) -> Html {
    html! {
        <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
            <h2 class="text-2xl font-bold">{ title }</h2>
            <div class="flex flex-wrap items-center gap-3">{ actions }</div>
        </div>
    }
}

/// Thin progress bar, `percent` in `0..=100`.
pub(crate) fn progress_bar(percent: f64) -> Html {
    html! {
        <div class="h-2 w-full overflow-hidden rounded-full bg-[var(--surface-alt)]">
            <div
                class="h-full rounded-full bg-[var(--primary)]"
                style={format!("width: {:.0}%", percent.clamp(0.0, 100.0))}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::sample;

    use super::*;

    #[test]
    fn unknown_clients_get_a_numbered_name() {
        let clients = sample::clients();
        assert_eq!(client_name(&clients, 1), clients[0].name);
        assert_eq!(client_name(&clients, 99), "Client #99");
    }
}
