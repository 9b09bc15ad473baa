use rampart_common::types::GradientStop;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A color lookup over relative positions in [0, 1], defined by ordered
/// gradient stops and sampled with linear interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    stops: Vec<GradientStop>,
}

impl ColorScale {
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, FieldError> {
        if stops.is_empty() {
            return Err(FieldError::EmptyColorScale);
        }
        let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
        let ascending = offsets.windows(2).all(|w| w[0] <= w[1]);
        if !ascending || offsets[0] < 0.0 || *offsets.last().unwrap() > 1.0 {
            return Err(FieldError::OffsetsNotAscending(offsets));
        }
        Ok(Self { stops })
    }

    /// Evenly spaced stops over the classic blue-green-yellow-red ramp.
    pub fn blue_green_yellow_red() -> Self {
        Self::from_colors(vec![
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0],
        ])
        .unwrap()
    }

    pub fn greyscale() -> Self {
        Self::from_colors(vec![[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]]).unwrap()
    }

    /// Builds a scale from evenly spaced colors.
    pub fn from_colors(colors: Vec<[f32; 4]>) -> Result<Self, FieldError> {
        if colors.is_empty() {
            return Err(FieldError::EmptyColorScale);
        }
        let last = (colors.len() - 1).max(1) as f32;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| GradientStop {
                offset: i as f32 / last,
                color,
            })
            .collect();
        Self::new(stops)
    }

    /// Interpolated color at relative position `t`, clamped to [0, 1].
    pub fn sample(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        let first = &self.stops[0];
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                let u = (t - lo.offset) / span;
                return [
                    lo.color[0] + (hi.color[0] - lo.color[0]) * u,
                    lo.color[1] + (hi.color[1] - lo.color[1]) * u,
                    lo.color[2] + (hi.color[2] - lo.color[2]) * u,
                    lo.color[3] + (hi.color[3] - lo.color[3]) * u,
                ];
            }
        }
        self.stops.last().unwrap().color
    }

    /// Resamples the scale into `n` evenly spaced gradient stops.
    pub fn gradient_stops(&self, n: usize) -> Vec<GradientStop> {
        let n = n.max(2);
        (0..n)
            .map(|i| {
                let offset = i as f32 / (n - 1) as f32;
                GradientStop {
                    offset,
                    color: self.sample(offset),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_sample_interpolates() {
        let scale = ColorScale::greyscale();
        let mid = scale.sample(0.5);
        assert_approx_eq!(f32, mid[0], 0.5);
        assert_approx_eq!(f32, mid[3], 1.0);
    }

    #[test]
    fn test_sample_clamps() {
        let scale = ColorScale::blue_green_yellow_red();
        assert_eq!(scale.sample(-1.0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(scale.sample(2.0), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_new_rejects_unsorted_offsets() {
        let stops = vec![
            GradientStop {
                offset: 0.5,
                color: [0.0; 4],
            },
            GradientStop {
                offset: 0.2,
                color: [1.0; 4],
            },
        ];
        assert!(matches!(
            ColorScale::new(stops),
            Err(FieldError::OffsetsNotAscending(_))
        ));
    }

    #[test]
    fn test_gradient_stops_resample() {
        let stops = ColorScale::greyscale().gradient_stops(5);
        assert_eq!(stops.len(), 5);
        assert_approx_eq!(f32, stops[2].offset, 0.5);
        assert_approx_eq!(f32, stops[2].color[0], 0.5);
    }
}
