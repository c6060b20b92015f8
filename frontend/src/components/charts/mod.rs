//! Hand-drawn SVG charts for the analytics and performance pages.
//!
//! All three charts share the plot frame and axis scaling below, and the
//! same surface card, legend and empty state.

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;

use dcampaigner_shared::Platform;
use yew::prelude::*;

pub use self::{
    bar_chart::BarChart,
    donut_chart::{DonutChart, DonutSlice},
    line_chart::LineChart,
};
use crate::{
    i18n::current::charts as t,
    utils::{format_compact, format_currency},
};

/// How axis labels and tooltips print values.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ValueFormat {
    /// `2.4K`
    Compact,
    /// `$2,400`
    Currency,
    /// `40%`
    Percent,
}

impl ValueFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            ValueFormat::Compact => format_compact(value),
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Percent => format!("{value:.0}%"),
        }
    }
}

/// Brand colour of a platform as a CSS hex value.
pub fn platform_color(platform: Platform) -> String {
    format!("#{}", platform.brand_color())
}

/// One named line or bar group.
#[derive(Clone, PartialEq, Debug)]
pub struct ChartSeries {
    pub name: String,
    /// CSS colour.
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// Drawing area inside the SVG viewBox.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 280.0,
            left: 52.0,
            right: 16.0,
            top: 16.0,
            bottom: 36.0,
        }
    }
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// Vertical position of `value` on an axis running from 0 to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        self.top + (1.0 - ratio) * self.plot_height()
    }

    /// Horizontal position of point `index` of `count`, spread edge to edge.
    pub fn x_for_point(&self, index: usize, count: usize) -> f64 {
        if count > 1 {
            self.left + index as f64 * self.plot_width() / (count - 1) as f64
        } else {
            self.left + self.plot_width() / 2.0
        }
    }

    /// Left edge and width of category band `index` of `count`.
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.plot_width() / count.max(1) as f64;
        (self.left + index as f64 * width, width)
    }

    /// Horizontal grid lines with their axis labels, `ticks + 1` of them.
    pub fn grid(&self, max: f64, ticks: usize, format: ValueFormat) -> Html {
        html! {
            <g>
            { for (0..=ticks).map(|tick| {
                let value = max * tick as f64 / ticks.max(1) as f64;
                let y = self.y_for(value, max);
                html! {
                    <g>
                        <line
                            x1={self.left.to_string()}
                            y1={format!("{y:.2}")}
                            x2={(self.left + self.plot_width()).to_string()}
                            y2={format!("{y:.2}")}
                            stroke="rgba(128,128,128,0.18)"
                            stroke-width="1"
                        />
                        <text
                            x={(self.left - 8.0).to_string()}
                            y={format!("{:.2}", y + 4.0)}
                            text-anchor="end"
                            fill="var(--muted)"
                            style="font-size: 11px;"
                        >
                            { format.apply(value) }
                        </text>
                    </g>
                }
            }) }
            </g>
        }
    }
}

/// Top of the value axis: the largest value rounded up to 1, 2, 2.5 or 5
/// times a power of ten. Never below 1.
pub(crate) fn axis_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values.into_iter().copied().fold(0.0_f64, f64::max);
    if max <= 1.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

pub(crate) fn chart_card(title: &str, class: Classes, body: Html) -> Html {
    html! {
        <section class={classes!(
            "rounded-xl",
            "border",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "p-5",
            "shadow-sm",
            class
        )}>
            if !title.is_empty() {
                <h3 class="mb-4 text-base font-semibold">{ title.to_string() }</h3>
            }
            { body }
        </section>
    }
}

pub(crate) fn legend<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Html {
    html! {
        <ul class="mt-3 flex flex-wrap justify-center gap-4 text-xs text-[var(--muted)]">
            { for entries.into_iter().map(|(name, color)| html! {
                <li class="inline-flex items-center gap-1.5">
                    <span class="inline-block h-2.5 w-2.5 rounded-sm" style={format!("background:{color};")}></span>
                    { name.to_string() }
                </li>
            }) }
        </ul>
    }
}

pub(crate) fn empty_state(text: &str) -> Html {
    let text = if text.is_empty() { t::NO_DATA } else { text };
    html! {
        <div class="px-4 py-10 text-center text-sm text-[var(--muted)]">{ text.to_string() }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_colors_are_css_hex() {
        assert_eq!(platform_color(Platform::Instagram), "#E4405F");
    }

    #[test]
    fn value_formats() {
        assert_eq!(ValueFormat::Compact.apply(2_400.0), "2.4K");
        assert_eq!(ValueFormat::Currency.apply(2_400.0), "$2,400");
        assert_eq!(ValueFormat::Percent.apply(35.4), "35%");
    }

    #[test]
    fn axis_max_rounds_up_to_nice_steps() {
        assert_eq!(axis_max(&[0.0]), 1.0);
        assert_eq!(axis_max(&[4_800.0, 1_200.0]), 5_000.0);
        assert_eq!(axis_max(&[9_800.0]), 10_000.0);
        assert_eq!(axis_max(&[2_100.0]), 2_500.0);
        assert_eq!(axis_max(&[3.0]), 5.0);
    }

    #[test]
    fn y_axis_is_inverted_and_clamped() {
        let frame = Frame::default();
        assert_eq!(frame.y_for(0.0, 100.0), frame.baseline());
        assert_eq!(frame.y_for(100.0, 100.0), frame.top);
        assert_eq!(frame.y_for(250.0, 100.0), frame.top);
        assert_eq!(frame.y_for(5.0, 0.0), frame.baseline());
    }

    #[test]
    fn points_span_the_plot_and_single_points_center() {
        let frame = Frame::default();
        assert_eq!(frame.x_for_point(0, 6), frame.left);
        assert_eq!(frame.x_for_point(5, 6), frame.left + frame.plot_width());
        assert_eq!(frame.x_for_point(0, 1), frame.left + frame.plot_width() / 2.0);
    }

    #[test]
    fn bands_divide_the_width() {
        let frame = Frame::default();
        let (x, width) = frame.band(1, 4);
        assert_eq!(width, frame.plot_width() / 4.0);
        assert_eq!(x, frame.left + width);
    }
}
