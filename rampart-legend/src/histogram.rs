use rampart_field::histogram::Histogram;
use rampart_field::range::ScalarRange;

use crate::geometry::LegendGeometry;

/// Projects bucket counts onto a vertical polyline alongside the ramp.
///
/// Returns absolute pixel coordinates, ordered bottom to top. The buckets
/// holding the smallest and largest key values always contribute a point so
/// the curve spans the whole ramp; every other bucket only contributes when
/// it lands strictly inside the strip.
pub fn project(
    histogram: &Histogram,
    display: &ScalarRange,
    key_values: &[f32],
    geometry: &LegendGeometry,
) -> Vec<[f32; 2]> {
    if histogram.len() < 2 || histogram.max_count == 0 || key_values.len() < 2 {
        return Vec::new();
    }
    let first = key_values[0];
    let last = key_values[key_values.len() - 1];
    let span = last - first;
    if span <= 0.0 {
        log::debug!("histogram overlay skipped: zero visible span");
        return Vec::new();
    }
    let bin_span = display.span();
    if bin_span <= 0.0 {
        log::debug!("histogram overlay skipped: zero display span");
        return Vec::new();
    }

    let height = geometry.ramp_height;
    let max_count = histogram.max_count as f32;
    let x_at = |count: u32| {
        geometry.ramp_left
            + geometry.ramp_width / 8.0
            + count as f32 / max_count * 0.75 * geometry.ramp_width
    };
    let bin_at = |value: f32| {
        let mut bin = ((value - display.min) / bin_span * histogram.len() as f32).floor() as usize;
        if bin >= histogram.len() {
            bin = histogram.len() - 1;
        }
        bin
    };

    let mut points = Vec::with_capacity(histogram.len() + 2);
    points.push([
        x_at(histogram.counts[bin_at(first)]),
        geometry.ramp_bottom(),
    ]);
    for (i, &count) in histogram.counts.iter().enumerate() {
        let value = display.min + i as f32 * bin_span / (histogram.len() - 1) as f32;
        let row = ((value - first) / span * (height - 1.0)).floor();
        if row > 0.0 && row + 1.0 < height {
            points.push([x_at(count), geometry.ramp_bottom() - row]);
        }
    }
    points.push([
        x_at(histogram.counts[bin_at(last)]),
        geometry.ramp_bottom() - (height - 1.0),
    ]);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegendConfig;
    use crate::geometry::Viewport;
    use float_cmp::assert_approx_eq;

    fn geometry() -> LegendGeometry {
        LegendGeometry::compute(
            &Viewport::new(800.0, 600.0),
            &LegendConfig::default(),
            10.0,
            4,
        )
    }

    #[test]
    fn test_forced_endpoints_always_present() {
        let geometry = geometry();
        let histogram = Histogram::from_counts(vec![1, 4]);
        let display = ScalarRange::tight(0.0, 10.0).unwrap();
        let points = project(&histogram, &display, &[0.0, 10.0], &geometry);
        assert_eq!(points.len(), 2);
        assert_approx_eq!(f32, points[0][1], geometry.ramp_bottom());
        assert_approx_eq!(
            f32,
            points[1][1],
            geometry.ramp_bottom() - (geometry.ramp_height - 1.0)
        );
        // bottom point reads the first bucket, top point the last
        assert!(points[1][0] > points[0][0]);
    }

    #[test]
    fn test_interior_buckets_exclude_edge_rows() {
        let geometry = geometry();
        let histogram = Histogram::from_counts(vec![3, 3, 3, 3]);
        let display = ScalarRange::tight(0.0, 10.0).unwrap();
        let points = project(&histogram, &display, &[0.0, 10.0], &geometry);
        // buckets 0 and 3 project onto the edge rows and are rejected,
        // leaving the two forced endpoints plus buckets 1 and 2
        assert_eq!(points.len(), 4);
        let row = ((geometry.ramp_height - 1.0) / 3.0).floor();
        assert_approx_eq!(f32, points[1][1], geometry.ramp_bottom() - row);
    }

    #[test]
    fn test_x_scales_with_count() {
        let geometry = geometry();
        let histogram = Histogram::from_counts(vec![0, 4]);
        let display = ScalarRange::tight(0.0, 10.0).unwrap();
        let points = project(&histogram, &display, &[0.0, 10.0], &geometry);
        assert_approx_eq!(
            f32,
            points[0][0],
            geometry.ramp_left + geometry.ramp_width / 8.0
        );
        assert_approx_eq!(
            f32,
            points[1][0],
            geometry.ramp_left + geometry.ramp_width / 8.0 + 0.75 * geometry.ramp_width
        );
    }

    #[test]
    fn test_narrow_key_span_keeps_two_points() {
        let geometry = geometry();
        let histogram = Histogram::from_counts(vec![2, 5, 1, 1]);
        let display = ScalarRange::tight(0.0, 100.0).unwrap();
        // visible span covers a sliver of the display range: every bucket
        // projects outside the strip, yet the forced endpoints remain
        let points = project(&histogram, &display, &[40.0, 42.0], &geometry);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_degenerate_inputs_yield_no_points() {
        let geometry = geometry();
        let display = ScalarRange::tight(0.0, 10.0).unwrap();
        // single bucket
        let histogram = Histogram::from_counts(vec![7]);
        assert!(project(&histogram, &display, &[0.0, 10.0], &geometry).is_empty());
        // all-zero counts
        let histogram = Histogram::from_counts(vec![0, 0]);
        assert!(project(&histogram, &display, &[0.0, 10.0], &geometry).is_empty());
        // single key value
        let histogram = Histogram::from_counts(vec![1, 2]);
        assert!(project(&histogram, &display, &[5.0], &geometry).is_empty());
        // flat span
        assert!(project(&histogram, &display, &[5.0, 5.0], &geometry).is_empty());
    }
}
