use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LegendError {
    #[error("Discrete legend rendering does not support symmetric dual-sign scales")]
    SymmetricScaleUnsupported,
}
