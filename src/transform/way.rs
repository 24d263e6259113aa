//! Per-way transformation into a polyline or a polygon.

use super::{AREA_KEYS, POLYGON_KEYS, POLYLINE_KEYS};
use crate::attributes::Attributed;
use crate::geometry::{Closed, Open, Point, PolyLine, Polygon};
use crate::osm::{MapGraph, Way};

/// The geometry one way contributes to the map model.
#[derive(Debug, Clone, PartialEq)]
pub enum WayGeometry {
    Line(Attributed<PolyLine>),
    Area(Attributed<Polygon>),
}

/// Transforms one way, or returns `None` when it contributes nothing.
///
/// A closed way becomes a polygon when `area` is truthy or any of its keys is
/// area-indicating; otherwise it stays a closed polyline (roundabouts). Open
/// ways are always open polylines. A geometry whose projected attribute set
/// is empty carries nothing renderable and is dropped.
pub fn transform_way(way: &Way, graph: &MapGraph) -> Option<WayGeometry> {
    let points = resolve_points(way, graph)?;
    if way.is_closed() {
        // The closing node reference duplicates the first; the ring keeps
        // the wraparound implicit.
        let ring_points = &points[..points.len() - 1];
        if is_area(way) {
            let attrs = way.attrs.project(POLYGON_KEYS);
            if attrs.is_empty() {
                log::debug!("way {}: no renderable polygon attributes", way.id);
                return None;
            }
            let shell = Closed::new(ring_points).ok()?;
            Some(WayGeometry::Area(Attributed::new(
                Polygon::new(shell, Vec::new()),
                attrs,
            )))
        } else {
            let attrs = way.attrs.project(POLYLINE_KEYS);
            if attrs.is_empty() {
                log::debug!("way {}: no renderable polyline attributes", way.id);
                return None;
            }
            let ring = Closed::new(ring_points).ok()?;
            Some(WayGeometry::Line(Attributed::new(
                PolyLine::Closed(ring),
                attrs,
            )))
        }
    } else {
        let attrs = way.attrs.project(POLYLINE_KEYS);
        if attrs.is_empty() {
            log::debug!("way {}: no renderable polyline attributes", way.id);
            return None;
        }
        let line = Open::new(&points).ok()?;
        Some(WayGeometry::Line(Attributed::new(
            PolyLine::Open(line),
            attrs,
        )))
    }
}

fn is_area(way: &Way) -> bool {
    if matches!(way.attrs.get("area"), Some("1" | "yes" | "true")) {
        return true;
    }
    way.attrs.iter().any(|(key, _)| AREA_KEYS.contains(key))
}

fn resolve_points(way: &Way, graph: &MapGraph) -> Option<Vec<Point>> {
    if way.nodes.is_empty() {
        log::warn!("way {} has no nodes, dropping it", way.id);
        return None;
    }
    let mut points = Vec::with_capacity(way.nodes.len());
    for id in &way.nodes {
        match graph.node(*id) {
            Some(node) => points.push(node.position),
            None => {
                log::warn!("way {} references unknown node {}, dropping it", way.id, id);
                return None;
            }
        }
    }
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::osm::Node;

    fn graph_with_square() -> MapGraph {
        let mut graph = MapGraph::new();
        graph.add_node(Node::new(1, Point::new(0.0, 0.0), Attributes::new()));
        graph.add_node(Node::new(2, Point::new(4.0, 0.0), Attributes::new()));
        graph.add_node(Node::new(3, Point::new(4.0, 4.0), Attributes::new()));
        graph.add_node(Node::new(4, Point::new(0.0, 4.0), Attributes::new()));
        graph
    }

    fn tags(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn closed_way_with_area_key_becomes_polygon() {
        let graph = graph_with_square();
        let way = Way::new(10, vec![1, 2, 3, 4, 1], tags(&[("building", "yes")]));
        match transform_way(&way, &graph) {
            Some(WayGeometry::Area(polygon)) => {
                assert_eq!(polygon.value.shell.points().len(), 4);
                assert!(polygon.value.holes.is_empty());
                assert!((polygon.value.shell.area() - 16.0).abs() < 1e-9);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn truthy_area_attribute_forces_polygon() {
        let graph = graph_with_square();
        for truthy in ["1", "yes", "true"] {
            let way = Way::new(
                10,
                vec![1, 2, 3, 4, 1],
                tags(&[("area", truthy), ("name", "plaza")]),
            );
            assert!(matches!(
                transform_way(&way, &graph),
                Some(WayGeometry::Area(_))
            ));
        }
        let way = Way::new(
            10,
            vec![1, 2, 3, 4, 1],
            tags(&[("area", "no"), ("highway", "service")]),
        );
        assert!(matches!(
            transform_way(&way, &graph),
            Some(WayGeometry::Line(_))
        ));
    }

    #[test]
    fn closed_way_without_area_hint_stays_polyline() {
        let graph = graph_with_square();
        // A roundabout: closed but still a road.
        let way = Way::new(10, vec![1, 2, 3, 4, 1], tags(&[("highway", "primary")]));
        match transform_way(&way, &graph) {
            Some(WayGeometry::Line(line)) => {
                assert!(line.value.is_closed());
                assert_eq!(line.value.points().len(), 4);
            }
            other => panic!("expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn open_way_becomes_open_polyline() {
        let graph = graph_with_square();
        let way = Way::new(10, vec![1, 2, 3], tags(&[("highway", "residential")]));
        match transform_way(&way, &graph) {
            Some(WayGeometry::Line(line)) => {
                assert!(!line.value.is_closed());
                assert_eq!(line.value.points().len(), 3);
            }
            other => panic!("expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn unlisted_attributes_drop_the_way() {
        let graph = graph_with_square();
        let closed = Way::new(10, vec![1, 2, 3, 4, 1], tags(&[("note", "fixme")]));
        let open = Way::new(11, vec![1, 2, 3], tags(&[("note", "fixme")]));
        assert!(transform_way(&closed, &graph).is_none());
        assert!(transform_way(&open, &graph).is_none());
    }

    #[test]
    fn polygon_attributes_are_projected() {
        let graph = graph_with_square();
        let way = Way::new(
            10,
            vec![1, 2, 3, 4, 1],
            tags(&[("building", "yes"), ("source", "survey")]),
        );
        match transform_way(&way, &graph) {
            Some(WayGeometry::Area(polygon)) => {
                assert!(polygon.attrs.has("building"));
                assert!(!polygon.attrs.has("source"));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn unknown_node_reference_drops_the_way() {
        let graph = graph_with_square();
        let way = Way::new(10, vec![1, 2, 99], tags(&[("highway", "service")]));
        assert!(transform_way(&way, &graph).is_none());
    }
}
