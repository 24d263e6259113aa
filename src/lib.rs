//! Core library turning an OpenStreetMap-style map graph into attributed
//! vector geometry and painting it onto an abstract canvas.

pub mod attributes;
pub mod geometry;
pub mod map;
pub mod osm;
pub mod paint;
pub mod styles;
pub mod transform;
