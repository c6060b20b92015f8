use yew::prelude::*;

use super::{axis_max, chart_card, empty_state, legend, ChartSeries, Frame, ValueFormat};

#[derive(Properties, Clone, PartialEq)]
pub struct BarChartProps {
    #[prop_or_default]
    pub title: AttrValue,
    /// Category labels along the x axis.
    pub labels: Vec<String>,
    /// Each series contributes one bar per category.
    pub series: Vec<ChartSeries>,
    #[prop_or(ValueFormat::Compact)]
    pub format: ValueFormat,
    #[prop_or_default]
    pub empty_text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Share of a category band filled by its bars.
const GROUP_FILL: f64 = 0.7;

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    if props.labels.is_empty() || props.series.is_empty() {
        return chart_card(&props.title, props.class.clone(), empty_state(&props.empty_text));
    }

    let frame = Frame::default();
    let count = props.labels.len();
    let max_value = axis_max(props.series.iter().flat_map(|series| series.values.iter()));
    let per_group = props.series.len() as f64;

    let body = html! {
        <div class="overflow-x-auto">
            <svg
                viewBox={format!("0 0 {} {}", frame.width, frame.height)}
                class="w-full min-w-[520px]"
                role="img"
                aria-label={props.title.clone()}
            >
                { frame.grid(max_value, 4, props.format) }

                { for props.labels.iter().enumerate().map(|(index, label)| {
                    let (band_x, band_width) = frame.band(index, count);
                    let bar_width = band_width * GROUP_FILL / per_group;
                    let group_x = band_x + band_width * (1.0 - GROUP_FILL) / 2.0;
                    html! {
                        <g>
                            { for props.series.iter().enumerate().map(|(slot, series)| {
                                let value = series.values.get(index).copied().unwrap_or(0.0);
                                let y = frame.y_for(value, max_value);
                                html! {
                                    <rect
                                        x={format!("{:.2}", group_x + slot as f64 * bar_width)}
                                        y={format!("{y:.2}")}
                                        width={format!("{:.2}", (bar_width - 2.0).max(1.0))}
                                        height={format!("{:.2}", frame.baseline() - y)}
                                        rx="3"
                                        fill={series.color.clone()}
                                    >
                                        <title>{ format!("{} / {}: {}", label, series.name, props.format.apply(value)) }</title>
                                    </rect>
                                }
                            }) }
                            <text
                                x={format!("{:.2}", band_x + band_width / 2.0)}
                                y={(frame.height - 10.0).to_string()}
                                text-anchor="middle"
                                fill="var(--muted)"
                                style="font-size: 11px;"
                            >
                                { label.clone() }
                            </text>
                        </g>
                    }
                }) }
            </svg>
            { legend(props.series.iter().map(|series| (series.name.as_str(), series.color.as_str()))) }
        </div>
    };

    chart_card(&props.title, props.class.clone(), body)
}
