use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::current::tag_input as t;

#[derive(Properties, PartialEq)]
pub struct TagInputProps {
    pub label: AttrValue,
    pub values: Vec<String>,
    /// Raw text of a new entry; the parent decides whether to keep it.
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Prepended to each chip, e.g. `#` for hashtags.
    #[prop_or_default]
    pub chip_prefix: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Free-text list input. Enter or comma commits the typed text as a chip.
#[function_component(TagInput)]
pub fn tag_input(props: &TagInputProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(target.value());
            }
        })
    };

    let onkeydown = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" && event.key() != "," {
                return;
            }
            event.prevent_default();
            let text = draft.trim().to_string();
            if !text.is_empty() {
                on_add.emit(text);
            }
            draft.set(String::new());
        })
    };

    html! {
        <div class="block">
            <span class="block text-sm font-medium text-[var(--text)] mb-1">
                { props.label.clone() }
            </span>
            <div class={classes!(
                "flex",
                "flex-wrap",
                "items-center",
                "gap-2",
                "rounded-lg",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "px-2",
                "py-1.5"
            )}>
                { for props.values.iter().enumerate().map(|(index, value)| {
                    let on_remove = props.on_remove.clone();
                    let remove = Callback::from(move |_: MouseEvent| on_remove.emit(index));
                    html! {
                        <span
                            key={format!("{index}-{value}")}
                            class={classes!(
                                "inline-flex",
                                "items-center",
                                "gap-1",
                                "rounded-full",
                                "bg-[var(--primary)]/10",
                                "text-[var(--primary)]",
                                "px-2.5",
                                "py-0.5",
                                "text-xs",
                                "font-medium"
                            )}
                        >
                            { format!("{}{}", props.chip_prefix, value) }
                            if !props.disabled {
                                <button
                                    type="button"
                                    class="hover:text-red-500"
                                    aria-label={t::REMOVE_ARIA}
                                    onclick={remove}
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            }
                        </span>
                    }
                }) }
                <input
                    type="text"
                    class="flex-1 min-w-[8rem] bg-transparent text-sm py-1 focus:outline-none"
                    value={(*draft).clone()}
                    placeholder={props.placeholder.clone()}
                    disabled={props.disabled}
                    {oninput}
                    {onkeydown}
                />
            </div>
            <p class="mt-1 text-xs text-[var(--muted)]">{ t::HINT }</p>
        </div>
    }
}
