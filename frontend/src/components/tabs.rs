use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub labels: Vec<&'static str>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="flex gap-1 overflow-x-auto border-b border-[var(--border)]" role="tablist">
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let selected = index == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                };
                html! {
                    <button
                        key={*label}
                        type="button"
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={classes!(
                            "whitespace-nowrap",
                            "px-4",
                            "py-2.5",
                            "text-sm",
                            "font-medium",
                            "border-b-2",
                            "-mb-px",
                            "transition-colors",
                            if selected {
                                "border-[var(--primary)] text-[var(--primary)]"
                            } else {
                                "border-transparent text-[var(--muted)] hover:text-[var(--text)]"
                            }
                        )}
                        {onclick}
                    >
                        { *label }
                    </button>
                }
            }) }
        </div>
    }
}
