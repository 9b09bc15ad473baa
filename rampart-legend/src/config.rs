use serde::{Deserialize, Serialize};

/// Rendering strategy for the legend body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendStyle {
    /// Per-pixel-row color ramp with histogram overlay.
    #[default]
    Continuous,
    /// Legacy stacked-cube rendering with one labeled cube per step.
    DiscreteCubes { steps: u32 },
}

/// Display preferences for legend rendering, passed explicitly into every
/// call rather than read from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Ramp (or cube) width in pixels
    pub ramp_width: f32,
    /// Decimal precision of value labels
    pub precision: usize,
    /// Color of labels, ticks, border and histogram overlay
    pub text_color: [f32; 4],
    /// Substitute for values without a mapped color
    pub fallback_color: [f32; 4],
    pub font: String,
    pub font_size: f32,
    /// Gap between the ramp and the viewport's right edge
    pub right_offset: f32,
    /// Vertical space reserved around the ramp
    pub height_margin: f32,
    /// Tick mark length in pixels
    pub tick_size: f32,
    pub show_histogram: bool,
    pub style: LegendStyle,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            ramp_width: 50.0,
            precision: 4,
            text_color: [1.0, 1.0, 1.0, 1.0],
            fallback_color: [0.8, 0.8, 0.8, 1.0],
            font: "sans serif".to_string(),
            font_size: 10.0,
            right_offset: 20.0,
            height_margin: 120.0,
            tick_size: 4.0,
            show_histogram: true,
            style: LegendStyle::default(),
        }
    }
}
