use itertools::Itertools;

/// Round half away from zero to `decimals` places, like `toFixed` followed by a parse.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Smallest and largest finite value. `None` when there are none.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax()
        .into_option()
}

/// Widens `[min, max]` by `fraction` of its span on each side.
///
/// A flat range is widened by `fraction` of its value instead (±1 around zero).
pub fn padded_range(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span.abs() > f64::EPSILON {
        span * fraction
    } else if min.abs() > f64::EPSILON {
        min.abs() * fraction
    } else {
        1.0
    };
    (min - pad, max + pad)
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_places() {
        assert_eq!(round_to_decimals(50000.04449, 3), 50000.044);
        assert_eq!(round_to_decimals(1.23456, 3), 1.235);
        assert_eq!(round_to_decimals(-0.0004, 3), -0.0);
    }

    #[test]
    fn min_max_skips_non_finite() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[f64::NAN]), None);
        assert_eq!(min_max(&[3.0, f64::NAN, -1.0, f64::INFINITY, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(min_max(&[7.0]), Some((7.0, 7.0)));
    }

    #[test]
    fn every_range_is_padded() {
        let (lo, hi) = padded_range(100.0, 200.0, 0.05);
        assert!((lo - 95.0).abs() < 1e-9 && (hi - 205.0).abs() < 1e-9);

        let (lo, hi) = padded_range(100.0, 100.0, 0.05);
        assert!((lo - 95.0).abs() < 1e-9 && (hi - 105.0).abs() < 1e-9);

        assert_eq!(padded_range(0.0, 0.0, 0.05), (-1.0, 1.0));
    }

    #[test]
    fn steps_snap_to_one_two_five() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(3.2), 5.0);
        assert_eq!(nice_step(7.5), 10.0);
        assert_eq!(nice_step(1_838.0), 2_000.0);
        assert!((nice_step(0.0183) - 0.02).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }
}
