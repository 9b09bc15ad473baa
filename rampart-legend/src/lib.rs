pub mod config;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod labels;
pub mod legend;
pub mod normalize;

mod discrete;
mod ramp;

pub use config::{LegendConfig, LegendStyle};
pub use error::LegendError;
pub use geometry::{LegendGeometry, Viewport};
pub use legend::make_legend_marks;
