use rampart_common::types::{ColorOrGradient, Gradient};
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

/// A single filled polygon given by its vertex loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenePolygonMark {
    pub name: String,
    pub clip: bool,
    pub points: Vec<[f32; 2]>,
    pub fill: ColorOrGradient,
    pub stroke: ColorOrGradient,
    pub stroke_width: f32,
    pub gradients: Vec<Gradient>,
    pub zindex: Option<i32>,
}

impl ScenePolygonMark {
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        for p in &mut self.points {
            p[0] += dx;
            p[1] += dy;
        }
        self
    }
}

impl Default for ScenePolygonMark {
    fn default() -> Self {
        Self {
            name: "polygon_mark".to_string(),
            clip: true,
            points: vec![],
            fill: ColorOrGradient::transparent(),
            stroke: ColorOrGradient::transparent(),
            stroke_width: 0.0,
            gradients: vec![],
            zindex: None,
        }
    }
}

impl From<ScenePolygonMark> for SceneMark {
    fn from(mark: ScenePolygonMark) -> Self {
        SceneMark::Polygon(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_shifts_every_vertex() {
        let mark = ScenePolygonMark {
            points: vec![[0.0, 0.0], [10.0, 0.0], [5.0, 8.0]],
            ..Default::default()
        }
        .translated(2.0, -1.0);
        assert_eq!(mark.points, vec![[2.0, -1.0], [12.0, -1.0], [7.0, 7.0]]);
    }
}
