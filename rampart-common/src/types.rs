use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::VariantNames;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrokeJoin {
    Bevel,
    #[default]
    Miter,
    Round,
}

/// A solid RGBA color, or an index into the owning mark's gradient table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorOrGradient {
    Color([f32; 4]),
    GradientIndex(u32),
}

impl ColorOrGradient {
    pub fn transparent() -> Self {
        ColorOrGradient::Color([0.0, 0.0, 0.0, 0.0])
    }

    pub fn color_or_transparent(&self) -> [f32; 4] {
        match self {
            ColorOrGradient::Color(c) => *c,
            _ => [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl Hash for ColorOrGradient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ColorOrGradient::Color(c) => c.iter().for_each(|v| OrderedFloat(*v).hash(state)),
            ColorOrGradient::GradientIndex(i) => i.hash(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gradient {
    LinearGradient(LinearGradient),
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::LinearGradient(grad) => grad.stops.as_slice(),
        }
    }
}

/// Gradient between (x0, y0) and (x1, y1) in mark coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Relative offset in [0, 1]
    pub offset: f32,
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_or_transparent() {
        let color = ColorOrGradient::Color([0.5, 0.5, 0.0, 1.0]);
        assert_eq!(color.color_or_transparent(), [0.5, 0.5, 0.0, 1.0]);
        // gradient references carry no direct color
        let gradient = ColorOrGradient::GradientIndex(0);
        assert_eq!(gradient.color_or_transparent(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            ColorOrGradient::transparent().color_or_transparent(),
            [0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_gradient_stops_accessor() {
        let gradient = Gradient::LinearGradient(LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 1.0,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: [0.0, 0.0, 1.0, 1.0],
                },
                GradientStop {
                    offset: 1.0,
                    color: [1.0, 0.0, 0.0, 1.0],
                },
            ],
        });
        assert_eq!(gradient.stops().len(), 2);
        assert_eq!(gradient.stops()[1].offset, 1.0);
    }
}
