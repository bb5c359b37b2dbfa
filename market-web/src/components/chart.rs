//! Inline SVG line chart for price history.
//!
//! Hand-drawn rather than pulled from a charting crate: the views only need a
//! handful of polylines over a shared scale.

use leptos::prelude::*;

use shared::format_amount;

/// Stroke colors assigned to series in order.
pub const SERIES_COLORS: &[&str] = &["#22c55e", "#3b82f6", "#eab308"];

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

/// One named series of y-values, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Map a series into SVG polyline coordinates: x in equal steps across
/// `width`, y scaled into `min..max` with the origin at the bottom.
pub fn polyline_points(values: &[f64], min: f64, max: f64, width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = height - (value - min) / span * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_bounds(series: &[Series]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in series.iter().flat_map(|s| &s.values) {
        min = min.min(*value);
        max = max.max(*value);
    }
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}

#[component]
pub fn LineChart(series: Vec<Series>, labels: Vec<String>) -> impl IntoView {
    let (min, max) = value_bounds(&series);
    let total_width = MARGIN_LEFT + CHART_WIDTH + 16.0;
    let total_height = MARGIN_TOP + CHART_HEIGHT + MARGIN_BOTTOM;

    let lines = series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let points = polyline_points(&s.values, min, max, CHART_WIDTH, CHART_HEIGHT);
            view! {
                <polyline
                    points=points
                    fill="none"
                    stroke=color
                    stroke-width="2"
                    transform=format!("translate({MARGIN_LEFT},{MARGIN_TOP})")
                />
            }
        })
        .collect::<Vec<_>>();

    let label_count = labels.len();
    let axis_labels = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let step = if label_count > 1 {
                CHART_WIDTH / (label_count - 1) as f64
            } else {
                0.0
            };
            let x = MARGIN_LEFT + step * index as f64;
            let y = MARGIN_TOP + CHART_HEIGHT + 20.0;
            view! {
                <text x=format!("{x:.1}") y=format!("{y:.1}") class="chart-axis-label" text-anchor="middle">
                    {label}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend = series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let label = s.label.clone();
            view! {
                <span class="chart-legend-entry">
                    <span class="chart-legend-swatch" style=format!("background: {color};")></span>
                    {label}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart">
            <div class="chart-legend">{legend}</div>
            <svg width=format!("{total_width}") height=format!("{total_height}") role="img">
                <text x="4" y=format!("{:.1}", MARGIN_TOP + 8.0) class="chart-axis-label">
                    {format!("Rs. {}", format_amount(max, 0))}
                </text>
                <text x="4" y=format!("{:.1}", MARGIN_TOP + CHART_HEIGHT) class="chart-axis-label">
                    {format!("Rs. {}", format_amount(min, 0))}
                </text>
                {lines}
                {axis_labels}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_the_width() {
        let points = polyline_points(&[10.0, 20.0, 30.0], 10.0, 30.0, 100.0, 50.0);
        assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let points = polyline_points(&[5.0, 5.0], 5.0, 5.0, 100.0, 50.0);
        assert_eq!(points, "0.0,50.0 100.0,50.0");
    }

    #[test]
    fn empty_series_maps_to_empty_string() {
        assert_eq!(polyline_points(&[], 0.0, 1.0, 100.0, 50.0), "");
    }

    #[test]
    fn bounds_cover_all_series() {
        let series = vec![
            Series { label: "a".into(), values: vec![10.0, 40.0] },
            Series { label: "b".into(), values: vec![5.0, 20.0] },
        ];
        assert_eq!(value_bounds(&series), (5.0, 40.0));
    }

    #[test]
    fn bounds_default_when_empty() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
    }
}
