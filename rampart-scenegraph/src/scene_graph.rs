use crate::marks::{group::SceneGroup, mark::SceneMark};
use serde::{Deserialize, Serialize};

/// Root of a retained scene: top-level marks plus the pixel size of the
/// surface they were laid out for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        if mark_path.is_empty() {
            return None;
        }

        let mut child = self.marks.get(mark_path[0])?;
        for index in &mark_path[1..] {
            child = child.children().get(*index)?;
        }

        Some(child)
    }
}
