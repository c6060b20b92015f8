use yew::prelude::*;

use super::{axis_max, chart_card, empty_state, legend, ChartSeries, Frame, ValueFormat};

#[derive(Properties, Clone, PartialEq)]
pub struct LineChartProps {
    #[prop_or_default]
    pub title: AttrValue,
    /// One label per x position.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    #[prop_or(ValueFormat::Compact)]
    pub format: ValueFormat,
    #[prop_or_default]
    pub empty_text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Multi-series line chart with a hover guide listing every series' value.
#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let hovered_index = use_state(|| None::<usize>);

    if props.labels.is_empty() || props.series.is_empty() {
        return chart_card(&props.title, props.class.clone(), empty_state(&props.empty_text));
    }

    let frame = Frame::default();
    let count = props.labels.len();
    let max_value = axis_max(props.series.iter().flat_map(|series| series.values.iter()));

    let polyline = |series: &ChartSeries| -> String {
        series
            .values
            .iter()
            .take(count)
            .enumerate()
            .map(|(index, value)| {
                format!(
                    "{:.2},{:.2}",
                    frame.x_for_point(index, count),
                    frame.y_for(*value, max_value)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let tooltip = (*hovered_index).filter(|index| *index < count).map(|index| {
        let x = frame.x_for_point(index, count);
        let tooltip_width = 150.0_f64;
        let tooltip_height = 24.0 + 18.0 * props.series.len() as f64;
        let mut tooltip_x = x + 12.0;
        if tooltip_x + tooltip_width > frame.width - 4.0 {
            tooltip_x = x - tooltip_width - 12.0;
        }
        let tooltip_y = frame.top + 4.0;

        html! {
            <>
                <line
                    x1={format!("{x:.2}")}
                    y1={frame.top.to_string()}
                    x2={format!("{x:.2}")}
                    y2={frame.baseline().to_string()}
                    stroke="var(--muted)"
                    stroke-dasharray="4 4"
                    stroke-width="1.2"
                    opacity="0.6"
                />
                <g style="pointer-events:none;">
                    <rect
                        x={format!("{tooltip_x:.2}")}
                        y={format!("{tooltip_y:.2}")}
                        width={tooltip_width.to_string()}
                        height={tooltip_height.to_string()}
                        rx="8"
                        fill="var(--surface)"
                        stroke="var(--border)"
                        stroke-width="1"
                        style="filter: drop-shadow(0 6px 20px rgba(0,0,0,0.18));"
                    />
                    <text
                        x={format!("{:.2}", tooltip_x + 10.0)}
                        y={format!("{:.2}", tooltip_y + 18.0)}
                        fill="var(--text)"
                        style="font-size: 11.5px; font-weight: 600;"
                    >
                        { props.labels[index].clone() }
                    </text>
                    { for props.series.iter().enumerate().map(|(row, series)| {
                        let value = series.values.get(index).copied().unwrap_or(0.0);
                        html! {
                            <text
                                x={format!("{:.2}", tooltip_x + 10.0)}
                                y={format!("{:.2}", tooltip_y + 36.0 + 18.0 * row as f64)}
                                fill={series.color.clone()}
                                style="font-size: 11px;"
                            >
                                { format!("{}: {}", series.name, props.format.apply(value)) }
                            </text>
                        }
                    }) }
                </g>
            </>
        }
    });

    let on_leave = {
        let hovered_index = hovered_index.clone();
        Callback::from(move |_: MouseEvent| hovered_index.set(None))
    };

    let body = html! {
        <div class="overflow-x-auto">
            <svg
                viewBox={format!("0 0 {} {}", frame.width, frame.height)}
                class="w-full min-w-[520px]"
                role="img"
                aria-label={props.title.clone()}
                onmouseleave={on_leave}
            >
                { frame.grid(max_value, 4, props.format) }

                { for props.series.iter().map(|series| html! {
                    <polyline
                        fill="none"
                        stroke={series.color.clone()}
                        stroke-width="2.5"
                        stroke-linejoin="round"
                        points={polyline(series)}
                    />
                }) }

                { for props.series.iter().map(|series| html! {
                    <g>
                        { for series.values.iter().take(count).enumerate().map(|(index, value)| html! {
                            <circle
                                cx={format!("{:.2}", frame.x_for_point(index, count))}
                                cy={format!("{:.2}", frame.y_for(*value, max_value))}
                                r={if *hovered_index == Some(index) { "5" } else { "3" }}
                                fill={series.color.clone()}
                            />
                        }) }
                    </g>
                }) }

                { tooltip.unwrap_or_default() }

                { for props.labels.iter().enumerate().map(|(index, label)| {
                    let (band_x, band_width) = {
                        let x = frame.x_for_point(index, count);
                        let half = frame.plot_width() / (2.0 * count.max(2) as f64 - 2.0).max(2.0);
                        (x - half, half * 2.0)
                    };
                    let hovered_index = hovered_index.clone();
                    let on_enter = Callback::from(move |_: MouseEvent| hovered_index.set(Some(index)));
                    html! {
                        <g>
                            <rect
                                x={format!("{band_x:.2}")}
                                y={frame.top.to_string()}
                                width={format!("{band_width:.2}")}
                                height={frame.plot_height().to_string()}
                                fill="transparent"
                                onmouseenter={on_enter}
                            />
                            <text
                                x={format!("{:.2}", frame.x_for_point(index, count))}
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
