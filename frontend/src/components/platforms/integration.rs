use dcampaigner_shared::{Platform, PlatformPayload};
use web_sys::HtmlInputElement;
use yew::{platform::spawn_local, prelude::*};

use super::PlatformForm;
use crate::{
    components::{
        image_with_fallback::ImageWithFallback,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        BUTTON_PRIMARY, BUTTON_SECONDARY,
    },
    hooks::use_object_urls,
    i18n::{current::integration as t, fill_one},
    store::{platforms::authenticate_platform, PlatformsContext},
    utils::{format_currency, format_date, now_local_datetime, today},
};

const STEPS: [&str; 3] = [t::STEP_AUTH, t::STEP_SETUP, t::STEP_REVIEW];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Authenticate,
    Setup,
    Review,
}

impl Step {
    fn index(self) -> usize {
        match self {
            Step::Authenticate => 0,
            Step::Setup => 1,
            Step::Review => 2,
        }
    }

    fn back(self) -> Self {
        match self {
            Step::Review => Step::Setup,
            Step::Setup | Step::Authenticate => Step::Authenticate,
        }
    }
}

/// Label and value pairs of the review step.
fn review_rows(payload: &PlatformPayload, image_count: usize) -> Vec<(&'static str, String)> {
    let mut rows = vec![(t::REVIEW_PLATFORM, payload.platform().to_string())];
    if let Some(budget) = payload.budget() {
        rows.push((t::REVIEW_BUDGET, format_currency(budget)));
    }
    if let Some(start) = payload.start_date() {
        rows.push((t::REVIEW_START, format_date(start)));
    }
    if let Some(end) = payload.end_date() {
        rows.push((t::REVIEW_END, format_date(end)));
    }
    if payload.platform().is_ad_network() {
        rows.push((t::REVIEW_IMAGES, image_count.to_string()));
    }
    rows
}

#[derive(Properties, PartialEq)]
pub struct PlatformIntegrationProps {
    pub platform: Platform,
    /// Receives the validated settings when the user launches the campaign.
    pub on_complete: Callback<PlatformPayload>,
}

/// Three-step wizard: connect the ad account, fill in the platform form,
/// review and launch.
#[function_component(PlatformIntegration)]
pub fn platform_integration(props: &PlatformIntegrationProps) -> Html {
    let platforms = match use_context::<PlatformsContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let platform = props.platform;
    let step = use_state(|| Step::Authenticate);
    let payload =
        use_state(move || PlatformPayload::draft(platform, today(), &now_local_datetime()));
    let media = use_object_urls();

    let validation = payload.validate();

    let on_connect = {
        let platforms = platforms.clone();
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            let platforms = platforms.clone();
            let step = step.clone();
            spawn_local(async move {
                if authenticate_platform(platforms, platform).await {
                    step.set(Step::Setup);
                }
            });
        })
    };

    let on_payload = {
        let payload = payload.clone();
        Callback::from(move |next: PlatformPayload| payload.set(next))
    };

    let on_submit = {
        let step = step.clone();
        let valid = validation.is_ok();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if valid {
                step.set(Step::Review);
            }
        })
    };

    let on_back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(step.back()))
    };

    let on_launch = {
        let payload = payload.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| on_complete.emit((*payload).clone()))
    };

    let on_files = {
        let media = media.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                if let Some(files) = input.files() {
                    media.add_files(&files);
                }
                input.set_value("");
            }
        })
    };

    let stepper = html! {
        <ol class="mb-8 flex items-center gap-2">
            { for STEPS.iter().enumerate().map(|(index, label)| {
                let done = index < step.index();
                let current = index == step.index();
                html! {
                    <li class="flex flex-1 items-center gap-2">
                        <span class={classes!(
                            "flex", "h-8", "w-8", "shrink-0", "items-center", "justify-center",
                            "rounded-full", "text-sm", "font-semibold",
                            if done || current {
                                "bg-[var(--primary)] text-white"
                            } else {
                                "bg-[var(--surface-alt)] text-[var(--muted)]"
                            }
                        )}>
                            if done {
                                <i class="fas fa-check"></i>
                            } else {
                                { index + 1 }
                            }
                        </span>
                        <span class={classes!(
                            "hidden", "text-sm", "sm:inline",
                            if current { "font-semibold" } else { "text-[var(--muted)]" }
                        )}>
                            { *label }
                        </span>
                        if index + 1 < STEPS.len() {
                            <span class="h-px flex-1 bg-[var(--border)]" />
                        }
                    </li>
                }
            }) }
        </ol>
    };

    let body = match *step {
        Step::Authenticate => html! {
            <div class="flex flex-col items-center gap-4 text-center">
                <ImageWithFallback
                    src={platform.banner_url()}
                    alt={format!("{platform} platform")}
                    class={classes!("h-24", "w-24", "rounded-xl", "object-contain")}
                />
                <p class="text-[var(--muted)]">{ fill_one(t::AUTH_DESCRIPTION, platform) }</p>
                if let Some(error) = platforms.error.clone() {
                    <p class="text-sm text-red-600" role="alert">{ error }</p>
                }
                <button
                    type="button"
                    class={BUTTON_PRIMARY}
                    disabled={platforms.loading}
                    onclick={on_connect}
                >
                    if platforms.loading {
                        <LoadingSpinner size={SpinnerSize::Small} />
                    } else {
                        { fill_one(t::CONNECT, platform) }
                    }
                </button>
            </div>
        },
        Step::Setup => html! {
            <form class="space-y-6" onsubmit={on_submit} novalidate=true>
                <PlatformForm value={(*payload).clone()} on_change={on_payload} />

                if platform.is_ad_network() {
                    <section class="space-y-3 rounded-xl border border-[var(--border)] p-4">
                        <h4 class="text-base font-semibold">{ t::CREATIVE_MEDIA }</h4>
                        <label class={classes!(BUTTON_SECONDARY, "w-full", "cursor-pointer")}>
                            <i class="fas fa-image"></i>
                            { t::ADD_IMAGES }
                            <input
                                type="file"
                                accept="image/*"
                                multiple=true
                                class="hidden"
                                onchange={on_files}
                            />
                        </label>
                        if media.urls().is_empty() {
                            <div class="flex h-40 items-center justify-center rounded-lg border-2 border-dashed border-[var(--border)] bg-[var(--surface-alt)] text-sm text-[var(--muted)]">
                                { t::NO_IMAGES }
                            </div>
                        } else {
                            <div class="grid grid-cols-3 gap-3">
                                { for media.urls().iter().enumerate().map(|(index, url)| {
                                    let on_remove = {
                                        let media = media.clone();
                                        Callback::from(move |_: MouseEvent| media.remove(index))
                                    };
                                    html! {
                                        <div key={url.clone()} class="relative">
                                            <img
                                                src={url.clone()}
                                                alt={fill_one(t::CREATIVE_ALT, index + 1)}
                                                class="h-32 w-full rounded object-cover"
                                            />
                                            <button
                                                type="button"
                                                class="absolute right-2 top-2 h-7 w-7 rounded-full bg-black/50 text-white hover:bg-black/70"
                                                aria-label={t::REMOVE_IMAGE_ARIA}
                                                onclick={on_remove}
                                            >
                                                <i class="fas fa-trash-alt text-xs"></i>
                                            </button>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    </section>
                }

                if let Err(error) = &validation {
                    <p class="text-sm text-red-600" role="alert">{ error.to_string() }</p>
                }

                <div class="flex justify-between gap-3">
                    <button type="button" class={BUTTON_SECONDARY} onclick={on_back.clone()}>
                        { t::BACK }
                    </button>
                    <button type="submit" class={BUTTON_PRIMARY} disabled={validation.is_err()}>
                        { fill_one(t::CREATE, platform) }
                    </button>
                </div>
            </form>
        },
        Step::Review => html! {
            <div class="space-y-4">
                <h4 class="text-lg font-semibold">{ t::REVIEW_TITLE }</h4>
                <dl class="divide-y divide-[var(--border)] rounded-xl border border-[var(--border)]">
                    { for review_rows(&payload, media.urls().len()).into_iter().map(|(label, value)| html! {
                        <div class="flex justify-between px-4 py-3 text-sm">
                            <dt class="text-[var(--muted)]">{ label }</dt>
                            <dd class="font-medium">{ value }</dd>
                        </div>
                    }) }
                </dl>
                <div class="flex justify-between gap-3">
                    <button type="button" class={BUTTON_SECONDARY} onclick={on_back}>
                        { t::BACK }
                    </button>
                    <button type="button" class={BUTTON_PRIMARY} onclick={on_launch}>
                        <i class="fas fa-rocket"></i>
                        { t::LAUNCH }
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div class="w-full">
            { stepper }
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[test]
    fn back_never_goes_past_the_first_step() {
        assert_eq!(Step::Review.back(), Step::Setup);
        assert_eq!(Step::Setup.back(), Step::Authenticate);
        assert_eq!(Step::Authenticate.back(), Step::Authenticate);
    }

    #[test]
    fn facebook_review_lists_budget_schedule_and_images() {
        let payload = PlatformPayload::draft(Platform::Facebook, today(), "2024-06-01T09:00");
        let labels: Vec<_> = review_rows(&payload, 2).into_iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec![t::REVIEW_PLATFORM, t::REVIEW_BUDGET, t::REVIEW_START, t::REVIEW_IMAGES]
        );
    }

    #[test]
    fn sms_review_has_no_media() {
        let payload = PlatformPayload::draft(Platform::Sms, today(), "2024-06-01T09:00");
        let rows = review_rows(&payload, 3);
        assert_eq!(rows, vec![(t::REVIEW_PLATFORM, "SMS".to_string())]);
    }
}
