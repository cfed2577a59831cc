//! Tick auto-scaling and histogram binning helpers.
//!
//! Both are pure functions over their inputs: tick generation returns
//! new positions for the caller to apply before compilation, and
//! histogram binning returns `(centers, relative frequencies)` pairs
//! consumed as ordinary bar plot data.

/// Compute a "nice" number close to `range`, rounding if asked.
fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions covering `[min, max]`.
///
/// Reversed bounds are accepted and produce the same positions as the
/// forward range. Positions outside the range are not returned.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if num_ticks < 2 || min == max {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / spacing).floor() * spacing;
    let nice_max = (max / spacing).ceil() * spacing;

    let mut ticks = Vec::new();
    let mut tick = nice_min;
    while tick <= nice_max + spacing * 0.5 {
        if tick >= min - spacing * 0.001 && tick <= max + spacing * 0.001 {
            ticks.push(tick);
        }
        tick += spacing;
    }
    ticks
}

/// Bin values into `bins` equal-width buckets over the data range.
///
/// Returns bin centers and relative frequencies (each count divided by
/// the total). Empty input yields empty vectors; a zero-width data
/// range is padded by half a unit on each side so every value lands in
/// a real bucket.
pub fn histogram(values: &[f64], bins: usize) -> (Vec<f64>, Vec<f64>) {
    if values.is_empty() || bins == 0 {
        return (Vec::new(), Vec::new());
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let index = (((v - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let total = values.len() as f64;
    let centers = (0..bins)
        .map(|i| lo + (i as f64 + 0.5) * width)
        .collect();
    let frequencies = counts.iter().map(|&c| c as f64 / total).collect();
    (centers, frequencies)
}

/// Bin width used by [`histogram`] for the given values.
pub fn bin_width(values: &[f64], bins: usize) -> f64 {
    if values.is_empty() || bins == 0 {
        return 1.0;
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    (hi - lo) / bins as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_cover_simple_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert!(!ticks.is_empty());
        assert!((ticks[0] - 0.0).abs() < 1e-9);
        assert!((ticks[ticks.len() - 1] - 10.0).abs() < 1e-9);
        // Monotone and evenly spaced.
        for pair in ticks.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_nice_ticks_stay_in_range() {
        for tick in nice_ticks(0.3, 9.7, 6) {
            assert!(tick >= 0.3 - 1e-6 && tick <= 9.7 + 1e-6);
        }
    }

    #[test]
    fn test_nice_ticks_reversed_range() {
        assert_eq!(nice_ticks(10.0, 0.0, 5), nice_ticks(0.0, 10.0, 5));
    }

    #[test]
    fn test_histogram_relative_frequencies_sum_to_one() {
        let values = [1.0, 2.0, 2.5, 3.0, 8.0, 9.0];
        let (centers, freqs) = histogram(&values, 4);
        assert_eq!(centers.len(), 4);
        assert_eq!(freqs.len(), 4);
        let total: f64 = freqs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_counts_land_in_buckets() {
        let values = [0.0, 0.1, 0.9, 1.0];
        let (centers, freqs) = histogram(&values, 2);
        assert!((centers[0] - 0.25).abs() < 1e-9);
        assert!((centers[1] - 0.75).abs() < 1e-9);
        // Max value lands in the last bucket, not past it.
        assert!((freqs[0] - 0.5).abs() < 1e-9);
        assert!((freqs[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_empty_input() {
        let (centers, freqs) = histogram(&[], 5);
        assert!(centers.is_empty());
        assert!(freqs.is_empty());
    }

    #[test]
    fn test_histogram_constant_values() {
        let (centers, freqs) = histogram(&[3.0, 3.0, 3.0], 3);
        assert_eq!(centers.len(), 3);
        let total: f64 = freqs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
