use yew::prelude::*;

use crate::i18n::current::dialog as t;

#[derive(Clone, Copy, PartialEq)]
pub enum DialogSize {
    Small,
    Medium,
    Large,
}

impl DialogSize {
    fn max_width(self) -> &'static str {
        match self {
            DialogSize::Small => "max-w-md",
            DialogSize::Medium => "max-w-2xl",
            DialogSize::Large => "max-w-5xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or(DialogSize::Medium)]
    pub size: DialogSize,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal overlay. Clicking the backdrop or the close button emits `on_close`.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-50",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/40",
                "dark:bg-black/60",
                "p-4"
            )}
            onclick={close.clone()}
        >
            <div
                class={classes!(
                    "w-full",
                    props.size.max_width(),
                    "max-h-[90vh]",
                    "flex",
                    "flex-col",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "text-[var(--text)]",
                    "shadow-2xl",
                    "border",
                    "border-[var(--border)]"
                )}
                role="dialog"
                aria-modal="true"
                onclick={stop}
            >
                <header class="flex items-center justify-between px-6 py-4 border-b border-[var(--border)]">
                    <h2 class="text-lg font-semibold">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="h-8 w-8 rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                        aria-label={t::CLOSE_ARIA}
                        onclick={close}
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </header>
                <div class="flex-1 overflow-y-auto px-6 py-4">
                    { for props.children.iter() }
                </div>
                if let Some(actions) = props.actions.clone() {
                    <footer class="flex justify-end gap-3 px-6 py-4 border-t border-[var(--border)]">
                        { actions }
                    </footer>
                }
            </div>
        </div>
    }
}
