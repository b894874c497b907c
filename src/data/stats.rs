/// Minimum and maximum of the finite values, like d3's `extent`
///
/// Returns `None` when no finite value is present.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Largest finite value, like d3's `max`
pub fn max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_skips_missing_values() {
        let values = [f64::NAN, 3.0, -1.5, f64::INFINITY, 8.25];
        assert_eq!(extent(values), Some((-1.5, 8.25)));
    }

    #[test]
    fn test_extent_of_nothing() {
        assert_eq!(extent(Vec::new()), None);
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(max([2.0, 7.0, 4.0]), Some(7.0));
    }
}
