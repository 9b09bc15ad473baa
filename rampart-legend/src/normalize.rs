use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use rampart_field::field::ScalarField;

/// Boundary values that must receive their own tick and label, sorted
/// ascending with duplicates removed.
///
/// In log mode the display-range boundaries pass through `abs` while the
/// saturation-range boundaries (stored log10-transformed upstream) map back
/// through `exp(v * ln 10)`.
pub fn key_values(field: &ScalarField) -> Vec<f32> {
    let mut keys: BTreeSet<OrderedFloat<f32>> = BTreeSet::new();

    let display = &field.display;
    let saturation = &field.saturation;
    if !field.log_scale {
        for v in [display.min, display.start, display.stop, display.max] {
            keys.insert(OrderedFloat(v));
        }
        for v in [
            saturation.min,
            saturation.start,
            saturation.stop,
            saturation.max,
        ] {
            keys.insert(OrderedFloat(v));
        }
    } else {
        for v in [display.min, display.start, display.stop, display.max] {
            keys.insert(OrderedFloat(v.abs()));
        }
        for v in [
            saturation.min,
            saturation.start,
            saturation.stop,
            saturation.max,
        ] {
            keys.insert(OrderedFloat((v * std::f32::consts::LN_10).exp()));
        }
    }

    if field.always_show_zero {
        keys.insert(OrderedFloat(0.0));
    }

    if !field.nan_in_grey {
        // remove hidden values
        keys.retain(|v| field.display.contains(v.0));
    }

    keys.into_iter().map(|v| v.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rampart_field::range::ScalarRange;

    fn field(display: ScalarRange, saturation: ScalarRange) -> ScalarField {
        ScalarField {
            display,
            saturation,
            ..Default::default()
        }
    }

    #[test]
    fn test_ascending_and_distinct() {
        let field = field(
            ScalarRange::new(0.0, 2.0, 8.0, 10.0).unwrap(),
            ScalarRange::new(0.0, 3.0, 7.0, 10.0).unwrap(),
        );
        let keys = key_values(&field);
        assert_eq!(keys, vec![0.0, 2.0, 3.0, 7.0, 8.0, 10.0]);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_pinned_when_requested() {
        let mut field = field(
            ScalarRange::tight(-5.0, 5.0).unwrap(),
            ScalarRange::tight(-5.0, 5.0).unwrap(),
        );
        field.always_show_zero = true;
        assert!(key_values(&field).contains(&0.0));
    }

    #[test]
    fn test_out_of_range_values_dropped_unless_grey() {
        let mut field = field(
            ScalarRange::new(0.0, 0.0, 10.0, 10.0).unwrap(),
            ScalarRange::tight(-3.0, 12.0).unwrap(),
        );
        let keys = key_values(&field);
        assert_eq!(keys, vec![0.0, 10.0]);

        field.nan_in_grey = true;
        let keys = key_values(&field);
        assert_eq!(keys, vec![-3.0, 0.0, 10.0, 12.0]);
    }

    #[test]
    fn test_log_scale_transforms() {
        // saturation stored in the log10 domain: [1, 2] maps back to [10, 100]
        let mut field = field(
            ScalarRange::tight(1.0, 1000.0).unwrap(),
            ScalarRange::tight(1.0, 2.0).unwrap(),
        );
        field.log_scale = true;
        let keys = key_values(&field);
        assert_eq!(keys.len(), 4);
        assert_approx_eq!(f32, keys[0], 1.0);
        assert_approx_eq!(f32, keys[1], 10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, keys[2], 100.0, epsilon = 1e-3);
        assert_approx_eq!(f32, keys[3], 1000.0);
    }

    #[test]
    fn test_single_survivor_for_flat_field() {
        let field = field(
            ScalarRange::tight(5.0, 5.0).unwrap(),
            ScalarRange::tight(5.0, 5.0).unwrap(),
        );
        assert_eq!(key_values(&field), vec![5.0]);
    }
}
