use crate::config::LegendConfig;

/// Pixel size of the target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

/// Layout constants derived once per call from the viewport, the display
/// preferences and the number of key values. Top-left pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendGeometry {
    pub ramp_left: f32,
    pub ramp_top: f32,
    pub ramp_width: f32,
    pub ramp_height: f32,
    pub text_height: f32,
}

impl LegendGeometry {
    pub fn compute(
        viewport: &Viewport,
        config: &LegendConfig,
        text_height: f32,
        key_count: usize,
    ) -> Self {
        let ramp_width = config.ramp_width;
        // a single visible value renders as a square instead of a ramp
        let ramp_height = if key_count > 1 {
            (viewport.height - config.height_margin)
                .max(2.0 * text_height)
                .floor()
        } else {
            ramp_width
        };
        let ramp_left = viewport.width - config.right_offset - ramp_width;
        let ramp_top = ((viewport.height - ramp_height) / 2.0).floor();
        Self {
            ramp_left,
            ramp_top,
            ramp_width,
            ramp_height,
            text_height,
        }
    }

    pub fn ramp_right(&self) -> f32 {
        self.ramp_left + self.ramp_width
    }

    pub fn ramp_bottom(&self) -> f32 {
        self.ramp_top + self.ramp_height
    }

    /// Right edge of tick marks, just left of the ramp.
    pub fn tick_right(&self) -> f32 {
        self.ramp_left - 1.0
    }

    /// Left edge of tick marks.
    pub fn tick_left(&self, config: &LegendConfig) -> f32 {
        self.ramp_left - config.tick_size - 1.0
    }

    /// Right-aligned anchor x for value labels.
    pub fn label_right(&self, config: &LegendConfig) -> f32 {
        self.ramp_left - 2.0 * config.tick_size - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_height_has_text_floor() {
        let viewport = Viewport::new(400.0, 130.0);
        let config = LegendConfig::default();
        let geometry = LegendGeometry::compute(&viewport, &config, 12.0, 4);
        // 130 - 120 = 10 is below the 2x text height minimum
        assert_eq!(geometry.ramp_height, 24.0);
    }

    #[test]
    fn test_single_key_value_is_square() {
        let viewport = Viewport::new(400.0, 300.0);
        let config = LegendConfig::default();
        let geometry = LegendGeometry::compute(&viewport, &config, 10.0, 1);
        assert_eq!(geometry.ramp_height, geometry.ramp_width);
    }

    #[test]
    fn test_anchored_to_right_edge() {
        let viewport = Viewport::new(800.0, 600.0);
        let config = LegendConfig::default();
        let geometry = LegendGeometry::compute(&viewport, &config, 10.0, 2);
        assert_eq!(geometry.ramp_right(), 800.0 - config.right_offset);
        assert_eq!(geometry.ramp_height, 480.0);
        assert_eq!(geometry.ramp_top, 60.0);
    }
}
