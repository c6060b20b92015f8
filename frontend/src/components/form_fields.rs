//! Controlled inputs shared by the dialogs and the platform setup forms.
//!
//! Each field owns no state: it renders `value` and reports edits through
//! its callback, leaving the draft in the parent.

use std::fmt::Display;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::humanize;

const LABEL_CLASS: &str = "block text-sm font-medium text-[var(--text)] mb-1";
const INPUT_CLASS: &str = "w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] \
                           px-3 py-2 text-sm text-[var(--text)] focus:outline-none \
                           focus:border-[var(--primary)] disabled:opacity-60";
const HELPER_CLASS: &str = "mt-1 text-xs text-[var(--muted)]";

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options for a wire enum, labelled from its wire value.
pub fn enum_options<T: Copy + Display>(values: &[T]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| {
            let wire = value.to_string();
            SelectOption::new(wire.clone(), humanize(&wire))
        })
        .collect()
}

/// Options whose value and label are the same string.
pub fn plain_options(values: &[&str]) -> Vec<SelectOption> {
    values.iter().map(|value| SelectOption::new(*value, *value)).collect()
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(target.value());
            }
        })
    };

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>
                { props.label.clone() }
                if props.required { <span class="text-red-500">{ " *" }</span> }
            </span>
            <input
                type={props.input_type.clone()}
                class={INPUT_CLASS}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(helper) = props.helper.clone() {
                <p class={HELPER_CLASS}>{ helper }</p>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: bool,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                on_input.emit(target.value());
            }
        })
    };

    let helper_class = if props.error {
        classes!(HELPER_CLASS, "text-red-500")
    } else {
        classes!(HELPER_CLASS)
    };

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>
                { props.label.clone() }
                if props.required { <span class="text-red-500">{ " *" }</span> }
            </span>
            <textarea
                class={INPUT_CLASS}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(helper) = props.helper.clone() {
                <p class={helper_class}>{ helper }</p>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub label: AttrValue,
    pub value: f64,
    pub on_change: Callback<f64>,
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(AttrValue::Static("1"))]
    pub step: AttrValue,
    #[prop_or_default]
    pub prefix: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Numeric input. Cleared input reports `0`; unparsable text is ignored.
#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let min = props.min;
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let raw = target.value();
                if raw.trim().is_empty() {
                    on_change.emit(min.max(0.0));
                } else if let Ok(value) = raw.parse::<f64>() {
                    on_change.emit(value.max(min));
                }
            }
        })
    };

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>{ props.label.clone() }</span>
            <div class="flex items-center gap-2">
                if let Some(prefix) = props.prefix.clone() {
                    <span class="text-sm text-[var(--muted)]">{ prefix }</span>
                }
                <input
                    type="number"
                    class={INPUT_CLASS}
                    min={props.min.to_string()}
                    step={props.step.clone()}
                    value={props.value.to_string()}
                    disabled={props.disabled}
                    {oninput}
                />
            </div>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
    /// Label of an extra empty-valued first option, e.g. "All Platforms".
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(target.value());
            }
        })
    };

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>
                { props.label.clone() }
                if props.required { <span class="text-red-500">{ " *" }</span> }
            </span>
            <select class={INPUT_CLASS} disabled={props.disabled} {onchange}>
                if let Some(placeholder) = props.placeholder.clone() {
                    <option value="" selected={props.value.is_empty()}>{ placeholder }</option>
                }
                { for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={option.value == props.value.as_str()}
                    >
                        { option.label.clone() }
                    </option>
                }) }
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxGroupProps {
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Multi-select rendered as a wrap of checkboxes.
#[function_component(CheckboxGroup)]
pub fn checkbox_group(props: &CheckboxGroupProps) -> Html {
    html! {
        <fieldset class="block">
            <legend class={LABEL_CLASS}>{ props.label.clone() }</legend>
            <div class="flex flex-wrap gap-3">
                { for props.options.iter().map(|option| {
                    let checked = props.selected.iter().any(|s| *s == option.value);
                    let onchange = {
                        let on_toggle = props.on_toggle.clone();
                        let value = option.value.clone();
                        Callback::from(move |_: Event| on_toggle.emit(value.clone()))
                    };
                    html! {
                        <label key={option.value.clone()} class="inline-flex items-center gap-2 text-sm">
                            <input
                                type="checkbox"
                                class="accent-[var(--primary)]"
                                {checked}
                                disabled={props.disabled}
                                {onchange}
                            />
                            { option.label.clone() }
                        </label>
                    }
                }) }
            </div>
        </fieldset>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(target.checked());
            }
        })
    };

    html! {
        <label class="inline-flex items-center gap-2 text-sm cursor-pointer">
            <input
                type="checkbox"
                role="switch"
                class="accent-[var(--primary)] h-4 w-4"
                checked={props.checked}
                disabled={props.disabled}
                {onchange}
            />
            { props.label.clone() }
        </label>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::payloads::BidStrategy;

    use super::*;

    #[test]
    fn enum_options_keep_wire_values() {
        let options = enum_options(BidStrategy::ALL);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "lowest_cost");
        assert_eq!(options[0].label, "Lowest Cost");
    }

    #[test]
    fn plain_options_mirror_values() {
        let options = plain_options(&["UTC", "Asia/Tokyo"]);
        assert_eq!(options[1].value, "Asia/Tokyo");
        assert_eq!(options[1].label, "Asia/Tokyo");
    }
}
