#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Range bounds must be ascending: min={min}, start={start}, stop={stop}, max={max}")]
    RangeNotAscending {
        min: f32,
        start: f32,
        stop: f32,
        max: f32,
    },

    #[error("Color scale must have at least one stop")]
    EmptyColorScale,

    #[error("Color scale offsets must be ascending in [0, 1]: {0:?}")]
    OffsetsNotAscending(Vec<f32>),
}
