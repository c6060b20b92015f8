use yew::prelude::*;

use crate::{
    i18n::current::theme_toggle as t,
    store::{UiAction, UiContext},
};

fn theme_name(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        "light"
    }
}

/// Mirrors the ui slice's dark-mode flag onto `<html data-theme>`, which the
/// stylesheet keys its colour variables on.
#[hook]
pub fn use_theme_attribute() {
    let dark_mode = use_context::<UiContext>().map(|ui| ui.dark_mode).unwrap_or(false);

    use_effect_with(dark_mode, move |dark_mode| {
        let root = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", theme_name(*dark_mode)) {
                crate::logger::warn(&format!("Could not apply theme: {e:?}"));
            }
        }
        || ()
    });
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ui = match use_context::<UiContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };

    let onclick = {
        let ui = ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::ToggleDarkMode))
    };

    let label = if ui.dark_mode { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon_class = if ui.dark_mode { "fa-sun" } else { "fa-moon" };

    html! {
        <button
            type="button"
            class={classes!(
                "group",
                "inline-flex",
                "h-9",
                "w-9",
                "items-center",
                "justify-center",
                "rounded-full",
                "border",
                "border-[var(--border)]",
                "bg-transparent",
                "hover:bg-[var(--surface-alt)]",
                "transition-all",
                "duration-100",
                props.class.clone()
            )}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={ui.dark_mode.to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names() {
        assert_eq!(theme_name(true), "dark");
        assert_eq!(theme_name(false), "light");
    }
}
