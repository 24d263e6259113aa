//! Turns the source map graph into the renderable [`MapModel`].
//!
//! Ways become polylines or polygons, multipolygon relations are stitched
//! into polygons with holes, and tagged nodes become place labels. Malformed
//! relations are skipped one at a time; nothing here aborts the whole pass.

pub mod relation;
pub mod way;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::attributes::Attributed;
use crate::geometry::Point;
use crate::map::{MapModel, MapModelBuilder};
use crate::osm::{MapGraph, Node};

/// Attribute keys retained on polygons.
pub const POLYGON_KEYS: &[&str] = &[
    "building", "landuse", "leisure", "natural", "amenity", "water", "layer", "name",
];

/// Attribute keys retained on polylines.
pub const POLYLINE_KEYS: &[&str] = &[
    "highway", "railway", "waterway", "barrier", "layer", "name",
];

/// Attribute keys retained on place labels.
pub const PLACE_KEYS: &[&str] = &["place", "name"];

/// Keys whose presence marks a closed way as an area even without `area=yes`.
pub static AREA_KEYS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    ["building", "landuse", "leisure", "natural", "amenity", "water"]
        .into_iter()
        .collect()
});

/// Transforms the whole graph into an immutable map model.
pub fn transform(graph: &MapGraph) -> MapModel {
    let mut builder = MapModelBuilder::new();
    for node in graph.nodes() {
        if let Some(place) = place_from_node(node) {
            builder.add_place(place);
        }
    }
    for w in graph.ways() {
        match way::transform_way(w, graph) {
            Some(way::WayGeometry::Line(line)) => builder.add_line(line),
            Some(way::WayGeometry::Area(polygon)) => builder.add_polygon(polygon),
            None => {}
        }
    }
    for rel in graph.relations() {
        for polygon in relation::assemble(rel, graph) {
            builder.add_polygon(polygon);
        }
    }
    builder.build()
}

/// A node tagged as a named place becomes a place label; anything else
/// contributes nothing.
pub fn place_from_node(node: &Node) -> Option<Attributed<Point>> {
    let attrs = node.attrs.project(PLACE_KEYS);
    if attrs.has("place") && attrs.has("name") {
        Some(Attributed::new(node.position, attrs))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;

    #[test]
    fn named_place_node_becomes_place() {
        let attrs: Attributes = [("place", "city"), ("name", "York"), ("population", "1")]
            .into_iter()
            .collect();
        let node = Node::new(1, Point::new(3.0, 4.0), attrs);
        let place = place_from_node(&node).unwrap();
        assert_eq!(place.attrs.get("name"), Some("York"));
        // Projection strips keys outside the place allow-list.
        assert!(!place.attrs.has("population"));
    }

    #[test]
    fn untagged_node_is_ignored() {
        let node = Node::new(1, Point::new(0.0, 0.0), Attributes::new());
        assert!(place_from_node(&node).is_none());
        let unnamed: Attributes = [("place", "hamlet")].into_iter().collect();
        assert!(place_from_node(&Node::new(2, Point::new(0.0, 0.0), unnamed)).is_none());
    }
}
