use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::chart::smoothing::smooth_polyline;
use crate::config::PLOT_CONFIG;
use crate::domain::TimeSeriesPoint;
use crate::utils::format_utils::usd_locale;
use crate::utils::maths_utils;
use crate::utils::time_utils::month_day_label;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Text shown while the pointer is over the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    /// X label of the hovered index ("Jan 5")
    pub title: String,
    /// Currency-formatted price ("$50,000.012")
    pub body: String,
    /// Data-space position of the hovered point
    pub point: [f64; 2],
}

/// Everything needed to draw one price chart, independent of egui.
///
/// X positions are category indices `0..n`, one per series point, matching
/// how each point gets its own date label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub dataset_label: String,
    /// `[index, price]` per series point
    pub points: Vec<[f64; 2]>,
    /// Date label per series point
    pub labels: Vec<String>,
    /// Indices whose label is shown on the x axis
    pub x_ticks: Vec<usize>,
    /// Sampled spline through `points`
    pub smoothed: Vec<[f64; 2]>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

/// Builds the chart for `name` with date labels in the local time zone.
pub fn render(name: &str, series: &[TimeSeriesPoint]) -> ChartView {
    render_in(name, series, &Local)
}

/// Builds the chart for `name` with date labels in `tz`.
pub fn render_in<Tz>(name: &str, series: &[TimeSeriesPoint], tz: &Tz) -> ChartView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let points: Vec<[f64; 2]> = series
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.price])
        .collect();
    let labels: Vec<String> = series
        .iter()
        .map(|p| month_day_label(p.timestamp_ms, tz))
        .collect();
    let x_ticks = thin_ticks(series.len(), PLOT_CONFIG.max_x_ticks);
    let smoothed = smooth_polyline(
        &points,
        PLOT_CONFIG.line_tension,
        PLOT_CONFIG.samples_per_segment,
    );

    let x_bounds = match points.len() {
        0 => (0.0, 1.0),
        1 => (-0.5, 0.5),
        n => (0.0, (n - 1) as f64),
    };
    // Bounds follow the drawn curve so spline overshoot stays inside the plot
    let y_values: Vec<f64> = smoothed.iter().map(|p| p[1]).collect();
    let y_bounds = maths_utils::min_max(&y_values)
        .map(|(lo, hi)| maths_utils::padded_range(lo, hi, PLOT_CONFIG.y_padding))
        .unwrap_or((0.0, 1.0));

    let view = ChartView {
        title: format!("{} Price Chart", name),
        dataset_label: format!("{} Price (USD)", name),
        points,
        labels,
        x_ticks,
        smoothed,
        x_bounds,
        y_bounds,
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_chart_build {
        log::info!(
            "Built chart '{}': {} points, {} x ticks, {} samples",
            view.title,
            view.points.len(),
            view.x_ticks.len(),
            view.smoothed.len()
        );
    }

    view
}

/// Indices of the visible x-axis labels: every `ceil(len / max_ticks)`th index from 0.
pub fn thin_ticks(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(max_ticks);
    (0..len).step_by(step).collect()
}

impl ChartView {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_tick_labels(&self) -> Vec<&str> {
        self.x_ticks
            .iter()
            .filter_map(|&i| self.labels.get(i).map(String::as_str))
            .collect()
    }

    /// Label for an x-axis grid mark; empty unless `x` lands on a visible tick.
    pub fn x_axis_label(&self, x: f64) -> String {
        let index = x.round();
        if (x - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        let index = index as usize;
        if self.x_ticks.binary_search(&index).is_err() {
            return String::new();
        }
        self.labels.get(index).cloned().unwrap_or_default()
    }

    pub fn y_axis_label(value: f64) -> String {
        usd_locale(value)
    }

    /// Spacing between price grid marks, rounded to a 1/2/5 multiple.
    pub fn y_tick_step(&self) -> f64 {
        let (lo, hi) = self.y_bounds;
        let divisions = PLOT_CONFIG.y_axis_divisions.max(1);
        maths_utils::nice_step((hi - lo) / divisions as f64)
    }

    /// Price grid marks: every multiple of the tick step inside the y bounds.
    pub fn y_ticks(&self) -> Vec<f64> {
        if self.is_empty() {
            return Vec::new();
        }
        let (lo, hi) = self.y_bounds;
        let step = self.y_tick_step();
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    /// Index nearest to a pointer x position (shared-index hover, no intersection needed).
    pub fn nearest_index(&self, pointer_x: f64) -> Option<usize> {
        if self.is_empty() || !pointer_x.is_finite() {
            return None;
        }
        let last = self.len() - 1;
        let clamped = pointer_x.round().clamp(0.0, last as f64);
        Some(clamped as usize)
    }

    pub fn hover(&self, pointer_x: f64) -> Option<Tooltip> {
        let index = self.nearest_index(pointer_x)?;
        let point = self.points[index];
        Some(Tooltip {
            index,
            title: self.labels.get(index).cloned().unwrap_or_default(),
            body: usd_locale(point[1]),
            point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use itertools::Itertools;
    use proptest::prelude::*;

    // 2024-01-05T00:00:00Z
    const JAN_5: i64 = 1_704_412_800_000;
    const HOUR: i64 = 3_600_000;

    fn hourly(len: usize, price: f64) -> Vec<TimeSeriesPoint> {
        (0..len)
            .map(|i| TimeSeriesPoint::new(JAN_5 + i as i64 * HOUR, price + i as f64))
            .collect()
    }

    #[test]
    fn empty_series_renders_flat_chart() {
        let view = render_in("Bitcoin", &[], &Utc);
        assert!(view.is_empty());
        assert!(view.smoothed.is_empty());
        assert!(view.x_ticks.is_empty());
        assert!(view.y_ticks().is_empty());
        assert_eq!(view.x_bounds, (0.0, 1.0));
        assert_eq!(view.y_bounds, (0.0, 1.0));
        assert_eq!(view.hover(3.0), None);
        assert_eq!(view.title, "Bitcoin Price Chart");
    }

    #[test]
    fn twenty_four_points_show_eight_ticks() {
        let view = render_in("Bitcoin", &hourly(24, 50_000.0), &Utc);
        assert_eq!(view.x_ticks, vec![0, 3, 6, 9, 12, 15, 18, 21]);
        assert_eq!(view.labels[0], "Jan 5");
        assert_eq!(view.dataset_label, "Bitcoin Price (USD)");
        assert_eq!(view.x_axis_label(3.0), "Jan 5");
        assert_eq!(view.x_axis_label(4.0), "");
        assert_eq!(view.x_axis_label(2.5), "");
    }

    #[test]
    fn labels_follow_dates_across_days() {
        let series = vec![
            TimeSeriesPoint::new(JAN_5, 1.0),
            TimeSeriesPoint::new(JAN_5 + 24 * HOUR, 2.0),
        ];
        let view = render_in("Ether", &series, &Utc);
        assert_eq!(view.x_tick_labels(), vec!["Jan 5", "Jan 6"]);
    }

    #[test]
    fn hover_snaps_to_nearest_index() {
        let view = render_in("Bitcoin", &hourly(5, 100.0), &Utc);
        let tooltip = view.hover(1.4).unwrap();
        assert_eq!(tooltip.index, 1);
        assert_eq!(tooltip.body, "$101");
        assert_eq!(tooltip.title, "Jan 5");
        assert_eq!(view.hover(-7.0).unwrap().index, 0);
        assert_eq!(view.hover(99.0).unwrap().index, 4);
        assert_eq!(view.hover(f64::NAN), None);
    }

    #[test]
    fn y_ticks_land_on_round_prices() {
        let view = render_in("Bitcoin", &hourly(10, 1_000.0), &Utc);
        assert!(view.y_bounds.0 < 1_000.0 && view.y_bounds.1 > 1_009.0);
        assert_eq!(view.y_tick_step(), 2.0);

        let ticks = view.y_ticks();
        assert_eq!(ticks.first(), Some(&1_000.0));
        assert_eq!(ticks.last(), Some(&1_008.0));
        assert!(ticks.iter().all(|&t| t >= view.y_bounds.0 && t <= view.y_bounds.1));
        for (a, b) in ticks.iter().tuple_windows() {
            assert!((b - a - 2.0).abs() < 1e-9);
        }
        assert_eq!(ChartView::y_axis_label(1_234.5), "$1,234.5");
    }

    #[test]
    fn single_point_is_plottable() {
        let view = render_in("Solana", &hourly(1, 150.0), &Utc);
        assert_eq!(view.smoothed, vec![[0.0, 150.0]]);
        assert_eq!(view.x_bounds, (-0.5, 0.5));
        assert!(view.y_bounds.0 < 150.0 && view.y_bounds.1 > 150.0);
        assert!(!view.y_ticks().is_empty());
    }

    proptest! {
        #[test]
        fn never_more_than_ten_x_ticks(len in 0usize..2_000) {
            let ticks = thin_ticks(len, PLOT_CONFIG.max_x_ticks);
            prop_assert!(ticks.len() <= PLOT_CONFIG.max_x_ticks);
            prop_assert_eq!(ticks.is_empty(), len == 0);
            prop_assert!(ticks.iter().all(|&i| i < len));
        }

        #[test]
        fn one_label_per_point(len in 0usize..200) {
            let view = render_in("X", &hourly(len, 10.0), &Utc);
            prop_assert_eq!(view.labels.len(), len);
            prop_assert_eq!(view.points.len(), len);
            prop_assert!(view.x_ticks.len() <= PLOT_CONFIG.max_x_ticks);
        }
    }
}
