//! Spline smoothing for the price line.
//!
//! Each data point gets a pair of Bezier control points whose distance from the
//! point scales with `tension` and with the relative length of the neighbouring
//! segments. The control points are computed in a normalized unit square so that
//! the wildly different x (index) and y (price) scales don't skew the curve.

use itertools::Itertools;

#[derive(Clone, Copy, Debug)]
struct ControlPoints {
    point: [f64; 2],
    previous: [f64; 2],
    next: [f64; 2],
}

/// Samples a smoothed polyline through `points`.
///
/// The output passes through every input point: point `i` sits at index
/// `i * samples_per_segment`. Fewer than three points, or a non-positive
/// tension, return the input unchanged.
pub fn smooth_polyline(
    points: &[[f64; 2]],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<[f64; 2]> {
    if points.len() < 3 || tension <= 0.0 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let scale = Scale::fit(points);
    let normalized: Vec<[f64; 2]> = points.iter().map(|p| scale.to_unit(*p)).collect();
    let controls = control_points(&normalized, tension);

    let mut out = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    for (from, to) in controls.iter().tuple_windows() {
        for step in 0..samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            let p = cubic_bezier(from.point, from.next, to.previous, to.point, t);
            out.push(scale.from_unit(p));
        }
    }
    // Exact last point, not a round trip through the unit square
    out.push(points[points.len() - 1]);

    // Same for every sampled knot
    for (i, p) in points.iter().enumerate().take(points.len() - 1) {
        out[i * samples_per_segment] = *p;
    }
    out
}

fn control_points(points: &[[f64; 2]], tension: f64) -> Vec<ControlPoints> {
    let last = points.len() - 1;
    (0..points.len())
        .map(|i| {
            let previous = points[i.saturating_sub(1)];
            let current = points[i];
            let next = points[(i + 1).min(last)];

            let d01 = distance(previous, current);
            let d12 = distance(current, next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 {
                (d01 / total, d12 / total)
            } else {
                (0.0, 0.0)
            };
            let fa = tension * s01;
            let fb = tension * s12;

            let dx = next[0] - previous[0];
            let dy = next[1] - previous[1];
            ControlPoints {
                point: current,
                previous: [current[0] - fa * dx, current[1] - fa * dy],
                next: [current[0] + fb * dx, current[1] + fb * dy],
            }
        })
        .collect()
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt()
}

fn cubic_bezier(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    [
        a * p0[0] + b * p1[0] + c * p2[0] + d * p3[0],
        a * p0[1] + b * p1[1] + c * p2[1] + d * p3[1],
    ]
}

struct Scale {
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Scale {
    fn fit(points: &[[f64; 2]]) -> Self {
        let (x_min, x_max) = points
            .iter()
            .map(|p| p[0])
            .minmax()
            .into_option()
            .unwrap_or((0.0, 1.0));
        let (y_min, y_max) = points
            .iter()
            .map(|p| p[1])
            .minmax()
            .into_option()
            .unwrap_or((0.0, 1.0));
        Self {
            x_min,
            x_span: span(x_min, x_max),
            y_min,
            y_span: span(y_min, y_max),
        }
    }

    fn to_unit(&self, p: [f64; 2]) -> [f64; 2] {
        [(p[0] - self.x_min) / self.x_span, (p[1] - self.y_min) / self.y_span]
    }

    fn from_unit(&self, p: [f64; 2]) -> [f64; 2] {
        [p[0] * self.x_span + self.x_min, p[1] * self.y_span + self.y_min]
    }
}

fn span(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() && span > 0.0 { span } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<[f64; 2]> {
        vec![[0.0, 100.0], [1.0, 104.0], [2.0, 99.0], [3.0, 101.0], [4.0, 101.0]]
    }

    #[test]
    fn short_or_straight_input_is_unchanged() {
        let two = vec![[0.0, 1.0], [1.0, 2.0]];
        assert_eq!(smooth_polyline(&two, 0.3, 8), two);
        assert_eq!(smooth_polyline(&zigzag(), 0.0, 8), zigzag());
        assert!(smooth_polyline(&[], 0.3, 8).is_empty());
    }

    #[test]
    fn curve_passes_through_every_point() {
        let points = zigzag();
        let smoothed = smooth_polyline(&points, 0.3, 8);
        assert_eq!(smoothed.len(), (points.len() - 1) * 8 + 1);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(smoothed[i * 8], *p);
        }
    }

    #[test]
    fn samples_advance_along_x() {
        let smoothed = smooth_polyline(&zigzag(), 0.3, 8);
        assert!(smoothed.windows(2).all(|w| w[1][0] > w[0][0]));
    }

    #[test]
    fn flat_series_stays_flat() {
        let flat: Vec<[f64; 2]> = (0..5).map(|i| [i as f64, 42.0]).collect();
        let smoothed = smooth_polyline(&flat, 0.3, 4);
        assert!(smoothed.iter().all(|p| (p[1] - 42.0).abs() < 1e-9));
    }
}
