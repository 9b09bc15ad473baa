use rampart_common::types::{ColorOrGradient, Gradient, StrokeCap, StrokeJoin};
use rampart_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

/// A single polyline through (x, y) vertices; undefined vertices split it
/// into separate runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneLineMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub gradients: Vec<Gradient>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub defined: ScalarOrArray<bool>,
    pub stroke: ColorOrGradient,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub zindex: Option<i32>,
}

impl SceneLineMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, None)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, None)
    }

    pub fn defined_iter(&self) -> Box<dyn Iterator<Item = &bool> + '_> {
        self.defined.as_iter(self.len as usize, None)
    }

    /// Vertex runs split at undefined vertices, offset by `origin`.
    pub fn vertex_runs(&self, origin: [f32; 2]) -> Vec<Vec<[f32; 2]>> {
        let mut runs: Vec<Vec<[f32; 2]>> = Vec::new();
        let mut run: Vec<[f32; 2]> = Vec::new();
        for (x, y, defined) in itertools::izip!(self.x_iter(), self.y_iter(), self.defined_iter())
        {
            if *defined {
                run.push([*x + origin[0], *y + origin[1]]);
            } else if !run.is_empty() {
                runs.push(std::mem::take(&mut run));
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }
        runs
    }
}

impl Default for SceneLineMark {
    fn default() -> Self {
        Self {
            name: "line_mark".to_string(),
            clip: true,
            len: 1,
            gradients: vec![],
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            defined: ScalarOrArray::new_scalar(true),
            stroke: ColorOrGradient::Color([0.0, 0.0, 0.0, 1.0]),
            stroke_width: 1.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            zindex: None,
        }
    }
}

impl From<SceneLineMark> for SceneMark {
    fn from(mark: SceneLineMark) -> Self {
        SceneMark::Line(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_runs_split_on_undefined() {
        let mark = SceneLineMark {
            len: 4,
            x: vec![0.0, 1.0, 2.0, 3.0].into(),
            y: vec![0.0, 0.0, 0.0, 0.0].into(),
            defined: vec![true, true, false, true].into(),
            ..Default::default()
        };
        let runs = mark.vertex_runs([0.0, 0.0]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1], vec![[3.0, 0.0]]);
    }
}
