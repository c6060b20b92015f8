use yew::prelude::*;

use crate::i18n::current::image as t;

#[derive(Clone, Copy, PartialEq)]
enum ImageState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithFallbackProps {
    pub src: String,
    pub alt: String,
    /// Sizing and shape, applied to the image, the skeleton and the fallback.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Image with a pulsing skeleton while loading and a placeholder box when
/// the source cannot be fetched.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let state = use_state(|| ImageState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.src.clone(), move |_| {
            state.set(ImageState::Loading);
        });
    }

    let on_load = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(ImageState::Loaded))
    };
    let on_error = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(ImageState::Failed))
    };

    if *state == ImageState::Failed {
        return html! {
            <div
                class={classes!(
                    props.class.clone(),
                    "flex",
                    "items-center",
                    "justify-center",
                    "bg-[var(--surface-alt)]",
                    "text-xs",
                    "text-[var(--muted)]"
                )}
                role="img"
                aria-label={props.alt.clone()}
                onclick={props.onclick.clone()}
            >
                { t::NOT_FOUND }
            </div>
        };
    }

    let loading = *state == ImageState::Loading;

    html! {
        <div class="relative" onclick={props.onclick.clone()}>
            if loading {
                <div class={classes!(
                    props.class.clone(),
                    "absolute",
                    "inset-0",
                    "bg-gradient-to-br",
                    "from-[var(--surface-alt)]",
                    "to-[var(--surface)]",
                    "animate-pulse",
                    "pointer-events-none"
                )} />
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={classes!(
                    props.class.clone(),
                    "block",
                    "transition-opacity",
                    "duration-300",
                    if loading { "opacity-0" } else { "opacity-100" }
                )}
                loading="lazy"
                onload={on_load}
                onerror={on_error}
            />
        </div>
    }
}
