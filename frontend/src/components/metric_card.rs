use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct MetricCardProps {
    pub title: AttrValue,
    pub value: String,
    /// Font Awesome icon name, e.g. `fa-dollar-sign`.
    pub icon: &'static str,
    /// Signed percent change shown under the value.
    #[prop_or_default]
    pub trend: Option<f64>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Makes the whole card a link.
    #[prop_or_default]
    pub route: Option<Route>,
}

fn trend_label(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.1}%")
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let content = html! {
        <>
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-[var(--muted)]">{ props.title.clone() }</span>
                <span class="inline-flex h-9 w-9 items-center justify-center rounded-lg bg-[var(--primary)]/10 text-[var(--primary)]">
                    <i class={classes!("fas", props.icon)} aria-hidden="true"></i>
                </span>
            </div>
            <strong class="mt-3 block text-2xl font-bold">{ props.value.clone() }</strong>
            if let Some(change) = props.trend {
                <span class={classes!(
                    "mt-1",
                    "inline-flex",
                    "items-center",
                    "gap-1",
                    "text-xs",
                    "font-semibold",
                    if change >= 0.0 { "text-green-600" } else { "text-red-500" }
                )}>
                    <i class={classes!("fas", if change >= 0.0 { "fa-arrow-up" } else { "fa-arrow-down" })}></i>
                    { trend_label(change) }
                </span>
            }
            if let Some(caption) = props.caption.clone() {
                <p class="mt-1 text-xs text-[var(--muted)]">{ caption }</p>
            }
        </>
    };

    let card_class = classes!(
        "block",
        "rounded-xl",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-5",
        "shadow-sm"
    );

    if let Some(route) = &props.route {
        html! {
            <Link<Route> to={route.clone()} classes={classes!(card_class, "hover:shadow-md", "transition-shadow")}>
                { content }
            </Link<Route>>
        }
    } else {
        html! {
            <div class={card_class} role="status">
                { content }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_is_signed() {
        assert_eq!(trend_label(12.34), "+12.3%");
        assert_eq!(trend_label(-4.0), "-4.0%");
        assert_eq!(trend_label(0.0), "+0.0%");
    }
}
