use rampart_common::types::{ColorOrGradient, Gradient};
use rampart_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub gradients: Vec<Gradient>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: Option<ScalarOrArray<f32>>,
    pub y2: Option<ScalarOrArray<f32>>,
    pub width: Option<ScalarOrArray<f32>>,
    pub height: Option<ScalarOrArray<f32>>,
    pub fill: ScalarOrArray<ColorOrGradient>,
    pub stroke: ScalarOrArray<ColorOrGradient>,
    pub stroke_width: ScalarOrArray<f32>,
    pub indices: Option<Arc<Vec<usize>>>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_deref())
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_deref())
    }

    pub fn x2_iter(&self) -> Box<dyn Iterator<Item = f32> + '_> {
        if let Some(x2) = self.x2.as_ref() {
            Box::new(
                x2.as_iter(self.len as usize, self.indices.as_deref())
                    .copied(),
            )
        } else if let Some(width) = self.width.as_ref() {
            Box::new(
                self.x_iter()
                    .zip(width.as_iter(self.len as usize, self.indices.as_deref()))
                    .map(|(x, width)| x + width),
            )
        } else {
            // Default to width 1
            Box::new(self.x_iter().map(|x| x + 1.0))
        }
    }

    pub fn y2_iter(&self) -> Box<dyn Iterator<Item = f32> + '_> {
        if let Some(y2) = self.y2.as_ref() {
            Box::new(
                y2.as_iter(self.len as usize, self.indices.as_deref())
                    .copied(),
            )
        } else if let Some(height) = self.height.as_ref() {
            Box::new(
                self.y_iter()
                    .zip(height.as_iter(self.len as usize, self.indices.as_deref()))
                    .map(|(y, height)| y + height),
            )
        } else {
            // Default to height 1
            Box::new(self.y_iter().map(|y| y + 1.0))
        }
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_deref())
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_deref())
    }

    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width
            .as_iter(self.len as usize, self.indices.as_deref())
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            clip: true,
            len: 1,
            gradients: vec![],
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: None,
            y2: None,
            width: None,
            height: None,
            fill: ScalarOrArray::new_scalar(ColorOrGradient::transparent()),
            stroke: ScalarOrArray::new_scalar(ColorOrGradient::transparent()),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}
