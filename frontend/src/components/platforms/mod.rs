//! Per-platform campaign setup forms and the wizard that hosts them.
//!
//! Forms are controlled: they render the payload they are given and emit an
//! edited copy on every change. Validation and submit live in the wizard.

pub mod email;
pub mod facebook;
pub mod google_ads;
pub mod instagram;
pub mod integration;
pub mod sms;
pub mod youtube;

use chrono::NaiveDate;
use dcampaigner_shared::PlatformPayload;
use yew::prelude::*;

pub use self::integration::PlatformIntegration;

/// Callback that applies `apply` to a copy of `value` and emits the copy.
pub(crate) fn edit<T, V>(
    value: &T,
    on_change: &Callback<T>,
    apply: impl Fn(&mut T, V) + 'static,
) -> Callback<V>
where
    T: Clone + 'static,
    V: 'static,
{
    let value = value.clone();
    let on_change = on_change.clone();
    Callback::from(move |input: V| {
        let mut next = value.clone();
        apply(&mut next, input);
        on_change.emit(next);
    })
}

/// Parses a `date` input value.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Wire strings of the selected enum values, for checkbox groups.
pub(crate) fn wire_values<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Removes the entry a tag chip's close button points at.
pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

pub(crate) fn section(title: &'static str, body: Html) -> Html {
    html! {
        <section class="space-y-4 rounded-xl border border-[var(--border)] p-4">
            <h4 class="text-base font-semibold">{ title }</h4>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlatformFormProps {
    pub value: PlatformPayload,
    pub on_change: Callback<PlatformPayload>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Renders the setup form matching the payload's platform.
#[function_component(PlatformForm)]
pub fn platform_form(props: &PlatformFormProps) -> Html {
    let on_change = &props.on_change;
    let disabled = props.disabled;
    match &props.value {
        PlatformPayload::Facebook(value) => html! {
            <facebook::FacebookForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::Facebook)}
                {disabled}
            />
        },
        PlatformPayload::Instagram(value) => html! {
            <instagram::InstagramForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::Instagram)}
                {disabled}
            />
        },
        PlatformPayload::YouTube(value) => html! {
            <youtube::YouTubeForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::YouTube)}
                {disabled}
            />
        },
        PlatformPayload::GoogleAds(value) => html! {
            <google_ads::GoogleAdsForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::GoogleAds)}
                {disabled}
            />
        },
        PlatformPayload::Email(value) => html! {
            <email::EmailForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::Email)}
                {disabled}
            />
        },
        PlatformPayload::Sms(value) => html! {
            <sms::SmsForm
                value={value.clone()}
                on_change={on_change.reform(PlatformPayload::Sms)}
                {disabled}
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_round_trip() {
        let date = parse_date("2024-06-01");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(date_value(date), "2024-06-01");
        assert_eq!(parse_date(""), None);
        assert_eq!(date_value(None), "");
    }

    #[test]
    fn removing_out_of_range_is_ignored() {
        let mut items = vec!["Miami".to_string()];
        remove_at(&mut items, 3);
        assert_eq!(items.len(), 1);
        remove_at(&mut items, 0);
        assert!(items.is_empty());
    }

    #[test]
    fn wire_values_use_display() {
        use dcampaigner_shared::payloads::AdFormat;
        assert_eq!(wire_values(&[AdFormat::Image, AdFormat::Carousel]), vec!["image", "carousel"]);
    }
}
