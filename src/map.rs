//! Immutable model of all renderable geometry produced by the transformer.

use std::collections::HashSet;

use crate::attributes::{Attributed, Attributes};
use crate::geometry::{Point, PolyLine, Polygon};

/// The transformed map: attributed places, polylines and polygons.
///
/// Frozen once built; painting only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapModel {
    places: Vec<Attributed<Point>>,
    lines: Vec<Attributed<PolyLine>>,
    polygons: Vec<Attributed<Polygon>>,
}

impl MapModel {
    pub fn places(&self) -> &[Attributed<Point>] {
        &self.places
    }

    pub fn lines(&self) -> &[Attributed<PolyLine>] {
        &self.lines
    }

    pub fn polygons(&self) -> &[Attributed<Polygon>] {
        &self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    /// Returns the sub-model whose attributes match `predicate`, preserving
    /// the original relative order of every collection.
    pub fn filter<F>(&self, predicate: F) -> MapModel
    where
        F: Fn(&Attributes) -> bool,
    {
        MapModel {
            places: self
                .places
                .iter()
                .filter(|p| predicate(&p.attrs))
                .cloned()
                .collect(),
            lines: self
                .lines
                .iter()
                .filter(|l| predicate(&l.attrs))
                .cloned()
                .collect(),
            polygons: self
                .polygons
                .iter()
                .filter(|p| predicate(&p.attrs))
                .cloned()
                .collect(),
        }
    }
}

/// Mutable accumulator frozen into a [`MapModel`] by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct MapModelBuilder {
    model: MapModel,
    seen_names: HashSet<String>,
}

impl MapModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place label. A place must carry a `name` attribute; the first
    /// place with a given name wins and later duplicates are discarded.
    pub fn add_place(&mut self, place: Attributed<Point>) {
        let Some(name) = place.attrs.get("name") else {
            log::debug!("discarding unnamed place at {:?}", place.value);
            return;
        };
        if self.seen_names.insert(name.to_string()) {
            self.model.places.push(place);
        }
    }

    pub fn add_line(&mut self, line: Attributed<PolyLine>) {
        self.model.lines.push(line);
    }

    pub fn add_polygon(&mut self, polygon: Attributed<Polygon>) {
        self.model.polygons.push(polygon);
    }

    /// Freezes the accumulated geometry into an immutable snapshot.
    pub fn build(self) -> MapModel {
        self.model
    }
}
