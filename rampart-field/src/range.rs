use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A value interval with an active sub-interval: `min..max` is the full
/// extent, `start..stop` the part currently displayed (or saturated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    pub min: f32,
    pub start: f32,
    pub stop: f32,
    pub max: f32,
}

impl ScalarRange {
    pub fn new(min: f32, start: f32, stop: f32, max: f32) -> Result<Self, FieldError> {
        if min <= start && start <= stop && stop <= max {
            Ok(Self {
                min,
                start,
                stop,
                max,
            })
        } else {
            Err(FieldError::RangeNotAscending {
                min,
                start,
                stop,
                max,
            })
        }
    }

    /// Range with the active sub-interval covering the full extent.
    pub fn tight(min: f32, max: f32) -> Result<Self, FieldError> {
        Self::new(min, min, max, max)
    }

    /// Full span, `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Span of the active sub-interval, `stop - start`.
    pub fn active_span(&self) -> f32 {
        self.stop - self.start
    }

    /// Whether the value falls inside the full extent.
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether the value falls inside the active sub-interval.
    pub fn displays(&self, value: f32) -> bool {
        self.start <= value && value <= self.stop
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            start: 0.0,
            stop: 1.0,
            max: 1.0,
        }
    }
}
