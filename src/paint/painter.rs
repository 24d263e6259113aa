//! Primitive painters and their composition combinators.

use std::ops::RangeInclusive;

use super::{Canvas, Fill, Filter};
use crate::geometry::PolyLine;
use crate::map::MapModel;
use crate::styles::{LabelStyle, LineStyle};

/// The z-layer values visited by [`Painter::layered`], ascending.
pub const LAYER_RANGE: RangeInclusive<i32> = -5..=5;

/// Something that can draw (part of) a map model onto a canvas.
pub trait Painter {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas);

    /// Restricts this painter to the geometry matching `filter`.
    fn when(self, filter: Filter) -> Filtered<Self>
    where
        Self: Sized,
    {
        Filtered {
            inner: self,
            filter,
        }
    }

    /// Composes `below` under this painter: `below` draws first, then `self`
    /// draws on top of it.
    fn above<B: Painter>(self, below: B) -> Above<Self, B>
    where
        Self: Sized,
    {
        Above { top: self, below }
    }

    /// Repeats this painter once per z-layer value, ascending, so geometry on
    /// higher layers covers geometry on lower ones. Relative order within one
    /// layer is preserved.
    fn layered(self) -> Layered<Self>
    where
        Self: Sized,
    {
        Layered { inner: self }
    }
}

/// Paints every polygon of the model with one fill.
#[derive(Debug, Clone)]
pub struct AreaPainter {
    fill: Fill,
}

pub fn area(fill: Fill) -> AreaPainter {
    AreaPainter { fill }
}

impl Painter for AreaPainter {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        for polygon in map.polygons() {
            canvas.draw_polygon(&polygon.value, &self.fill);
        }
    }
}

/// Paints every polyline of the model with one stroke.
#[derive(Debug, Clone)]
pub struct LinePainter {
    style: LineStyle,
}

pub fn line(style: LineStyle) -> LinePainter {
    LinePainter { style }
}

impl Painter for LinePainter {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        for polyline in map.lines() {
            canvas.draw_polyline(&polyline.value, &self.style);
        }
    }
}

/// Strokes the shell of every polygon as a closed line.
#[derive(Debug, Clone)]
pub struct OutlinePainter {
    style: LineStyle,
}

pub fn outline(style: LineStyle) -> OutlinePainter {
    OutlinePainter { style }
}

impl Painter for OutlinePainter {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        for polygon in map.polygons() {
            let shell = PolyLine::Closed(polygon.value.shell.clone());
            canvas.draw_polyline(&shell, &self.style);
        }
    }
}

/// Draws every place label, text taken from the `name` attribute.
#[derive(Debug, Clone)]
pub struct PlacePainter {
    style: LabelStyle,
}

pub fn place(style: LabelStyle) -> PlacePainter {
    PlacePainter { style }
}

impl Painter for PlacePainter {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        for p in map.places() {
            if let Some(name) = p.attrs.get("name") {
                canvas.draw_place(p.value, name, &self.style);
            }
        }
    }
}

/// See [`Painter::when`].
#[derive(Debug, Clone)]
pub struct Filtered<P> {
    inner: P,
    filter: Filter,
}

impl<P: Painter> Painter for Filtered<P> {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        let subset = map.filter(|attrs| self.filter.matches(attrs));
        self.inner.paint(&subset, canvas);
    }
}

/// See [`Painter::above`].
#[derive(Debug, Clone)]
pub struct Above<T, B> {
    top: T,
    below: B,
}

impl<T: Painter, B: Painter> Painter for Above<T, B> {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        self.below.paint(map, canvas);
        self.top.paint(map, canvas);
    }
}

/// See [`Painter::layered`].
#[derive(Debug, Clone)]
pub struct Layered<P> {
    inner: P,
}

impl<P: Painter> Painter for Layered<P> {
    fn paint(&self, map: &MapModel, canvas: &mut dyn Canvas) {
        for z in LAYER_RANGE {
            let subset = map.filter(|attrs| Filter::on_layer(z).matches(attrs));
            if !subset.is_empty() {
                self.inner.paint(&subset, canvas);
            }
        }
    }
}
