use serde::{Deserialize, Serialize};

use crate::color::ColorScale;
use crate::histogram::Histogram;
use crate::range::ScalarRange;
use crate::ZERO_TOLERANCE;

/// A named scalar attribute with display state: the value intervals mapped to
/// the color gradient, a bucketed frequency histogram, and scale flags.
///
/// For log-scale fields the saturation range is stored log10-transformed,
/// while the display range stays in the value domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    pub name: String,
    /// Value interval mapped to the visible gradient.
    pub display: ScalarRange,
    /// Sub-interval where colors reach full saturation.
    pub saturation: ScalarRange,
    pub histogram: Histogram,
    pub color_scale: Option<ColorScale>,
    pub log_scale: bool,
    pub always_show_zero: bool,
    /// Whether values outside the displayed interval are shown in grey
    /// instead of being hidden.
    pub nan_in_grey: bool,
    /// Whether the scale is meant to be symmetric around zero.
    pub symmetrical: bool,
}

impl ScalarField {
    /// Color mapped to `value`, or `None` when the value is not displayed.
    ///
    /// Saturation bounds pick the position within the gradient; a zero-width
    /// saturation interval collapses to the first gradient color.
    pub fn color_at(&self, value: f32) -> Option<[f32; 4]> {
        let scale = self.color_scale.as_ref()?;
        if !self.display.displays(value) {
            return None;
        }
        let pos = if self.log_scale {
            value.abs().max(ZERO_TOLERANCE).log10()
        } else {
            value
        };
        let span = self.saturation.active_span();
        let t = if span < ZERO_TOLERANCE {
            0.0
        } else {
            (pos - self.saturation.start) / span
        };
        Some(scale.sample(t))
    }
}

impl Default for ScalarField {
    fn default() -> Self {
        Self {
            name: String::new(),
            display: ScalarRange::default(),
            saturation: ScalarRange::default(),
            histogram: Histogram::default(),
            color_scale: None,
            log_scale: false,
            always_show_zero: false,
            nan_in_grey: false,
            symmetrical: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn field() -> ScalarField {
        ScalarField {
            display: ScalarRange::tight(0.0, 10.0).unwrap(),
            saturation: ScalarRange::tight(0.0, 10.0).unwrap(),
            color_scale: Some(ColorScale::greyscale()),
            ..Default::default()
        }
    }

    #[test]
    fn test_color_at_interpolates_over_saturation() {
        let field = field();
        let color = field.color_at(5.0).unwrap();
        assert_approx_eq!(f32, color[0], 0.5);
    }

    #[test]
    fn test_color_at_hides_undisplayed_values() {
        let mut field = field();
        field.display = ScalarRange::new(0.0, 2.0, 8.0, 10.0).unwrap();
        assert!(field.color_at(1.0).is_none());
        assert!(field.color_at(9.0).is_none());
        assert!(field.color_at(5.0).is_some());
    }

    #[test]
    fn test_color_at_without_scale_is_none() {
        let mut field = field();
        field.color_scale = None;
        assert!(field.color_at(5.0).is_none());
    }

    #[test]
    fn test_color_at_zero_width_saturation_is_flat() {
        let mut field = field();
        field.saturation = ScalarRange::tight(5.0, 5.0).unwrap();
        assert_eq!(field.color_at(2.0), field.color_at(9.0));
        assert_approx_eq!(f32, field.color_at(2.0).unwrap()[0], 0.0);
    }

    #[test]
    fn test_color_at_log_scale_uses_log_position() {
        let mut field = field();
        field.log_scale = true;
        field.display = ScalarRange::tight(1.0, 100.0).unwrap();
        // log10 domain: saturation stored as [0, 2]
        field.saturation = ScalarRange::tight(0.0, 2.0).unwrap();
        let color = field.color_at(10.0).unwrap();
        assert_approx_eq!(f32, color[0], 0.5);
    }
}
