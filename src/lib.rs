//! Rendering of oceanographic scalar and current fields from
//! per-time-step text dumps into map overlays and MP4 animations.
//!
//! The pipeline has three stages: [`RawDump`]/[`FieldDump`] parse a dump
//! file's fixed-index metadata header and comma-separated rows, [`Grid`]
//! reconstructs a dense longitude/latitude array from the sparse samples,
//! and [`render`] plus [`VideoWriter`] turn grids into frames and frames
//! into videos. [`animate`] drives the whole loop over a data directory.

pub mod animate;
pub mod cadence;
mod error;
mod fields;
mod grid;
mod palette;
mod parser;
mod reader;
pub mod render;
mod video;

pub use crate::{
    error::*, fields::*, grid::*, palette::*, parser::*, reader::*, render::Frame, video::*,
};
