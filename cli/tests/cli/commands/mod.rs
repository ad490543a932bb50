pub mod animate;
pub mod completions;
pub mod info;
pub mod render;
