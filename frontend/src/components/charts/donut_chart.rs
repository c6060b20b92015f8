use std::f64::consts::TAU;

use yew::prelude::*;

use super::{chart_card, empty_state, legend};

/// One slice of the donut.
#[derive(Clone, PartialEq, Debug)]
pub struct DonutSlice {
    pub label: String,
    pub color: String,
    pub value: f64,
}

#[derive(Properties, Clone, PartialEq)]
pub struct DonutChartProps {
    #[prop_or_default]
    pub title: AttrValue,
    pub slices: Vec<DonutSlice>,
    #[prop_or_default]
    pub empty_text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

const SIZE: f64 = 220.0;
const OUTER: f64 = 100.0;
const INNER: f64 = 62.0;
/// A full circle cannot be drawn as a single arc.
const MAX_SWEEP: f64 = TAU * 0.9999;

fn point(radius: f64, angle: f64) -> (f64, f64) {
    let center = SIZE / 2.0;
    // Angles start at twelve o'clock and run clockwise.
    (center + radius * angle.sin(), center - radius * angle.cos())
}

/// SVG path of a ring segment from `start` to `end` radians.
pub(crate) fn ring_segment(start: f64, end: f64) -> String {
    let end = start + (end - start).min(MAX_SWEEP);
    let large_arc = if end - start > TAU / 2.0 { 1 } else { 0 };
    let (ox0, oy0) = point(OUTER, start);
    let (ox1, oy1) = point(OUTER, end);
    let (ix1, iy1) = point(INNER, end);
    let (ix0, iy0) = point(INNER, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {OUTER} {OUTER} 0 {large_arc} 1 {ox1:.2} {oy1:.2} L {ix1:.2} \
         {iy1:.2} A {INNER} {INNER} 0 {large_arc} 0 {ix0:.2} {iy0:.2} Z"
    )
}

/// Start and end angle of each slice, proportional to its value.
pub(crate) fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * TAU;
            let angles = (start, start + sweep);
            start += sweep;
            angles
        })
        .collect()
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let values: Vec<f64> = props.slices.iter().map(|slice| slice.value).collect();
    let angles = slice_angles(&values);
    if angles.is_empty() {
        return chart_card(&props.title, props.class.clone(), empty_state(&props.empty_text));
    }
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

    let body = html! {
        <div class="flex flex-col items-center">
            <svg
                viewBox={format!("0 0 {SIZE} {SIZE}")}
                class="w-56 h-56"
                role="img"
                aria-label={props.title.clone()}
            >
                { for props.slices.iter().zip(angles.iter()).filter(|(slice, _)| slice.value > 0.0).map(|(slice, (start, end))| html! {
                    <path d={ring_segment(*start, *end)} fill={slice.color.clone()} stroke="var(--surface)" stroke-width="2">
                        <title>{ format!("{}: {:.0}%", slice.label, slice.value / total * 100.0) }</title>
                    </path>
                }) }
            </svg>
            { legend(props.slices.iter().map(|slice| (slice.label.as_str(), slice.color.as_str()))) }
        </div>
    };

    chart_card(&props.title, props.class.clone(), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_are_proportional_and_contiguous() {
        let angles = slice_angles(&[35.0, 40.0, 25.0]);
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[0].1 - TAU * 0.35).abs() < 1e-9);
        assert_eq!(angles[1].0, angles[0].1);
        assert!((angles[2].1 - TAU).abs() < 1e-9);
    }

    #[test]
    fn nothing_to_draw_without_positive_values() {
        assert!(slice_angles(&[]).is_empty());
        assert!(slice_angles(&[0.0, -3.0]).is_empty());
    }

    #[test]
    fn full_ring_stays_drawable() {
        let path = ring_segment(0.0, TAU);
        assert!(path.starts_with("M 110.00 10.00 A 100 100 0 1 1"));
        assert!(path.ends_with('Z'));
    }
}
