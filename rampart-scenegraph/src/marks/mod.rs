pub mod group;
pub mod line;
pub mod mark;
pub mod polygon;
pub mod rect;
pub mod rule;
pub mod text;
