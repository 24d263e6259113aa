//! Read-only source map graph as supplied by an external parser.

use std::collections::BTreeMap;

use crate::attributes::Attributes;
use crate::geometry::Point;

pub type OsmId = u64;

/// A single tagged position in the map graph.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: OsmId,
    pub position: Point,
    pub attrs: Attributes,
}

impl Node {
    pub fn new(id: OsmId, position: Point, attrs: Attributes) -> Self {
        Self {
            id,
            position,
            attrs,
        }
    }
}

/// An ordered sequence of node references.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Way {
    pub id: OsmId,
    pub nodes: Vec<OsmId>,
    pub attrs: Attributes,
}

impl Way {
    pub fn new(id: OsmId, nodes: Vec<OsmId>, attrs: Attributes) -> Self {
        Self { id, nodes, attrs }
    }

    /// A way is closed when its first and last node references coincide.
    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => first == last && self.nodes.len() > 1,
            _ => false,
        }
    }
}

/// A reference to another map-graph entity, resolved by id lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MemberRef {
    Node(OsmId),
    Way(OsmId),
    Relation(OsmId),
}

/// A relation member: a role string plus the referenced entity.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Member {
    pub role: String,
    pub member: MemberRef,
}

impl Member {
    pub fn new(role: &str, member: MemberRef) -> Self {
        Self {
            role: role.to_string(),
            member,
        }
    }
}

/// A tagged grouping of other entities, notably multipolygons.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Relation {
    pub id: OsmId,
    pub members: Vec<Member>,
    pub attrs: Attributes,
}

impl Relation {
    pub fn new(id: OsmId, members: Vec<Member>, attrs: Attributes) -> Self {
        Self { id, members, attrs }
    }
}

/// The parsed map graph: id-keyed collections of nodes, ways and relations.
///
/// The transformer only ever reads this structure. Entities are kept in
/// id order so a given graph always transforms to the same model.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MapGraph {
    nodes: BTreeMap<OsmId, Node>,
    ways: BTreeMap<OsmId, Way>,
    relations: BTreeMap<OsmId, Relation>,
}

impl MapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    pub fn add_way(&mut self, way: Way) {
        self.ways.insert(way.id, way);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.insert(relation.id, relation);
    }

    pub fn node(&self, id: OsmId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn way(&self, id: OsmId) -> Option<&Way> {
        self.ways.get(&id)
    }

    pub fn relation(&self, id: OsmId) -> Option<&Relation> {
        self.relations.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.ways.values()
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn way_closure() {
        let closed = Way::new(1, vec![10, 11, 12, 10], Attributes::new());
        let open = Way::new(2, vec![10, 11, 12], Attributes::new());
        let lone = Way::new(3, vec![10], Attributes::new());
        assert!(closed.is_closed());
        assert!(!open.is_closed());
        assert!(!lone.is_closed());
    }

    #[test]
    fn graph_lookup() {
        let mut graph = MapGraph::new();
        graph.add_node(Node::new(7, Point::new(1.0, 2.0), Attributes::new()));
        graph.add_way(Way::new(8, vec![7], Attributes::new()));
        assert_eq!(graph.node(7).map(|n| n.position.x), Some(1.0));
        assert!(graph.way(8).is_some());
        assert!(graph.relation(9).is_none());
    }
}
