use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Heading above the message; a generic one when unset.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Alert strip for slice errors. A new message re-opens it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "flex",
                "items-start",
                "gap-3",
                "w-full",
                "max-w-2xl",
                "rounded-xl",
                "border",
                "border-red-300",
                "bg-red-50",
                "dark:bg-red-950/60",
                "dark:border-red-800",
                "px-4",
                "py-3",
                "text-sm",
                "text-red-800",
                "dark:text-red-200",
                "shadow-lg"
            )}
            role="alert"
            aria-live="assertive"
        >
            <i class="fas fa-circle-exclamation mt-0.5 text-lg" aria-hidden="true"></i>
            <div class="flex-1 space-y-0.5">
                <p class="font-semibold">
                    { props.title.clone().unwrap_or(AttrValue::Static(t::TITLE)) }
                </p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="h-7 w-7 rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
