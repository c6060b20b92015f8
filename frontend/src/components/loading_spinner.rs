use yew::prelude::*;

use crate::i18n::current::common;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Covers the viewport and blocks input while a global request runs.
    #[prop_or(false)]
    pub fullscreen: bool,
    /// Visible caption under the spinner.
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            if let Some(caption) = props.caption.clone() {
                <p class="text-sm text-[var(--muted)]">{ caption }</p>
            } else {
                <span class="sr-only">{ common::LOADING }</span>
            }
        </div>
    };

    if props.fullscreen {
        html! {
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/30 dark:bg-black/60">
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
