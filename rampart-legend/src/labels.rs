//! Collision-avoiding placement of value labels along the ramp.
//!
//! Rows are measured upward from the bottom of the ramp, `0..=ramp_height`.
//! The list of placed labels is always kept sorted by center row.

/// A label pinned to a ramp row with its reserved vertical footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLabel {
    pub value: f32,
    /// Center row.
    pub row: f32,
    /// Footprint lower bound, `row_min <= row`.
    pub row_min: f32,
    /// Footprint upper bound, `row_max >= row`.
    pub row_max: f32,
}

impl PlacedLabel {
    fn centered(value: f32, row: f32, text_height: f32) -> Self {
        Self {
            value,
            row,
            row_min: row - text_height / 2.0,
            row_max: row + text_height / 2.0,
        }
    }
}

/// Indices of the labels just below and just above `row`.
///
/// A label sitting exactly at `row` counts as the upper neighbor, so the
/// topmost label always wins ties.
fn neighbors_around(labels: &[PlacedLabel], row: f32) -> (Option<usize>, Option<usize>) {
    if labels.is_empty() {
        return (None, None);
    }
    if row < labels[0].row {
        return (None, Some(0));
    }
    let above = 1 + labels[1..].partition_point(|label| label.row < row);
    if above < labels.len() {
        (Some(above - 1), Some(above))
    } else {
        (Some(labels.len() - 1), None)
    }
}

/// Places labels for the sorted key values over a ramp of `ramp_height`
/// pixel rows.
///
/// The endpoints are always labeled, anchored inward so their text stays
/// inside the strip. Intermediate key values are then labeled greedily where
/// at least `text_height` pixels separate them from both neighbors'
/// footprints, and finally midpoint labels fill any gap still wide enough,
/// repeating until no gap qualifies.
///
/// Fewer than two key values, or a zero value span, places nothing; the
/// single-value square is labeled by the renderer directly.
pub fn place(key_values: &[f32], ramp_height: f32, text_height: f32) -> Vec<PlacedLabel> {
    if key_values.len() < 2 {
        return Vec::new();
    }
    let first = key_values[0];
    let last = key_values[key_values.len() - 1];
    let span = last - first;
    if span <= 0.0 {
        log::debug!("label placement skipped: zero key value span");
        return Vec::new();
    }

    let mut labels = vec![
        PlacedLabel {
            value: first,
            row: 0.0,
            row_min: 0.0,
            row_max: text_height,
        },
        PlacedLabel {
            value: last,
            row: ramp_height,
            row_min: ramp_height - text_height,
            row_max: ramp_height,
        },
    ];

    let min_gap = text_height;
    for &value in &key_values[1..key_values.len() - 1] {
        let row = ((value - first) * ramp_height / span).floor();
        let (below, above) = neighbors_around(&labels, row);
        let clear_below = below.map_or(true, |i| labels[i].row_max <= row - min_gap);
        let clear_above = above.map_or(true, |i| labels[i].row_min >= row + min_gap);
        if clear_below && clear_above {
            let at = above.unwrap_or(labels.len());
            labels.insert(at, PlacedLabel::centered(value, row, text_height));
        }
    }

    while fill_gaps(&mut labels, first, span, ramp_height, text_height) > 0 {}

    labels
}

/// One pass of midpoint insertion over every adjacent pair, returning the
/// number of labels added. A pair qualifies when its footprints leave more
/// than four text heights of clearance; the new label never narrows the gap
/// enough to collide.
fn fill_gaps(
    labels: &mut Vec<PlacedLabel>,
    first: f32,
    span: f32,
    ramp_height: f32,
    text_height: f32,
) -> usize {
    let min_gap = 2.0 * text_height;
    let mut insertions = Vec::new();
    for i in 0..labels.len() - 1 {
        if labels[i].row_max + 2.0 * min_gap < labels[i + 1].row_min {
            let value = (labels[i].value + labels[i + 1].value) / 2.0;
            let row = ((value - first) * ramp_height / span).floor();
            insertions.push((i + 1, PlacedLabel::centered(value, row, text_height)));
        }
    }
    let inserted = insertions.len();
    for (shift, (at, label)) in insertions.into_iter().enumerate() {
        labels.insert(at + shift, label);
    }
    inserted
}

/// Renders a value the way the legend prints it: scientific notation for
/// log-scale fields, fixed point otherwise.
pub fn format_value(value: f32, log_scale: bool, precision: usize) -> String {
    if log_scale {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn assert_well_spaced(labels: &[PlacedLabel], text_height: f32) {
        for pair in labels.windows(2) {
            assert!(pair[0].row < pair[1].row, "labels out of order: {pair:?}");
            assert!(
                pair[1].row - pair[0].row >= text_height,
                "centers too close: {pair:?}"
            );
            assert!(
                pair[0].row_max <= pair[1].row_min,
                "footprints overlap: {pair:?}"
            );
        }
    }

    #[test]
    fn test_endpoints_plus_single_midpoint() {
        let labels = place(&[0.0, 10.0], 100.0, 10.0);
        assert_eq!(labels.len(), 3);
        assert_approx_eq!(f32, labels[0].value, 0.0);
        assert_approx_eq!(f32, labels[0].row, 0.0);
        assert_approx_eq!(f32, labels[1].value, 5.0);
        assert_approx_eq!(f32, labels[1].row, 50.0);
        assert_approx_eq!(f32, labels[2].value, 10.0);
        assert_approx_eq!(f32, labels[2].row, 100.0);
        assert_well_spaced(&labels, 10.0);
    }

    #[test]
    fn test_cramped_ramp_keeps_only_endpoints() {
        // 2x text height is the layout floor: no room for anything else
        let labels = place(&[0.0, 3.0, 7.0, 10.0], 20.0, 10.0);
        assert_eq!(labels.len(), 2);
        assert_approx_eq!(f32, labels[0].value, 0.0);
        assert_approx_eq!(f32, labels[1].value, 10.0);
    }

    #[test]
    fn test_key_values_preferred_over_midpoints() {
        let labels = place(&[0.0, 2.0, 8.0, 10.0], 400.0, 10.0);
        for value in [0.0, 2.0, 8.0, 10.0] {
            assert!(
                labels.iter().any(|label| label.value == value),
                "missing key value {value}"
            );
        }
        assert_well_spaced(&labels, 10.0);
    }

    #[test]
    fn test_colliding_key_value_rejected() {
        // 5.004 lands on the same row as 5.0 and must be dropped
        let labels = place(&[0.0, 5.0, 5.004, 10.0], 100.0, 10.0);
        assert!(labels.iter().any(|label| label.value == 5.0));
        assert!(!labels.iter().any(|label| label.value == 5.004));
        assert_well_spaced(&labels, 10.0);
    }

    #[test]
    fn test_spacing_holds_for_generated_sequences() {
        // cheap LCG so the sequences are reproducible
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as f32 / (1u64 << 31) as f32
        };
        for len in [2usize, 3, 5, 8, 13] {
            let mut keys: Vec<f32> = (0..len).map(|_| next() * 100.0).collect();
            keys.sort_by(|a, b| a.partial_cmp(b).unwrap());
            keys.dedup();
            if keys.len() < 2 {
                continue;
            }
            let labels = place(&keys, 300.0, 12.0);
            assert_well_spaced(&labels, 12.0);
            assert_approx_eq!(f32, labels[0].value, keys[0]);
            assert_approx_eq!(f32, labels[labels.len() - 1].value, *keys.last().unwrap());
        }
    }

    #[test]
    fn test_degenerate_key_spans_place_nothing() {
        assert!(place(&[5.0], 100.0, 10.0).is_empty());
        assert!(place(&[5.0, 5.0], 100.0, 10.0).is_empty());
        assert!(place(&[7.0, 5.0], 100.0, 10.0).is_empty());
    }

    #[test]
    fn test_gap_fill_reaches_fixed_point() {
        let mut labels = place(&[0.0, 10.0], 1000.0, 10.0);
        assert!(labels.len() > 3);
        assert_eq!(fill_gaps(&mut labels, 0.0, 10.0, 1000.0, 10.0), 0);
    }

    #[test]
    fn test_tie_goes_to_upper_neighbor() {
        let labels = vec![
            PlacedLabel::centered(0.0, 0.0, 4.0),
            PlacedLabel::centered(5.0, 50.0, 4.0),
            PlacedLabel::centered(10.0, 100.0, 4.0),
        ];
        assert_eq!(neighbors_around(&labels, 50.0), (Some(0), Some(1)));
        assert_eq!(neighbors_around(&labels, 100.0), (Some(1), Some(2)));
        assert_eq!(neighbors_around(&labels, 101.0), (Some(2), None));
        assert_eq!(neighbors_around(&labels, -1.0), (None, Some(0)));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0, false, 4), "5.0000");
        assert_eq!(format_value(-0.125, false, 2), "-0.12");
        assert_eq!(format_value(1500.0, true, 2), "1.50e3");
    }
}
