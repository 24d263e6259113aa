//! Declarative painting of a [`MapModel`](crate::map::MapModel) onto an
//! abstract canvas.
//!
//! Painters are composed with [`Painter::when`], [`Painter::above`] and
//! [`Painter::layered`]; drawing order is the sequential order that
//! composition implies, since later draws overwrite earlier ones.

mod filter;
mod painter;

pub use filter::Filter;
pub use painter::{
    area, line, outline, place, Above, AreaPainter, Filtered, Layered, LinePainter,
    OutlinePainter, Painter, PlacePainter, LAYER_RANGE,
};

use crate::geometry::{Point, PolyLine, Polygon};
use crate::styles::{Color, LabelStyle, LineStyle};

/// Polygon fill: a flat color or a two-color hatch texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Fill {
    Solid(Color),
    Hatch { fore: Color, back: Color },
}

/// Drawing capability implemented by an external rasterizer.
///
/// The painter model depends only on this interface, never on a concrete
/// pixel format. Polygon fills cover the shell area minus the holes.
pub trait Canvas {
    fn draw_polyline(&mut self, line: &PolyLine, style: &LineStyle);
    fn draw_polygon(&mut self, polygon: &Polygon, fill: &Fill);
    fn draw_place(&mut self, at: Point, name: &str, style: &LabelStyle);
}
