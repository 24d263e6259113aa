//! Multipolygon assembly: stitching `outer`/`inner` way fragments into
//! polygons with holes.

use std::collections::BTreeMap;

use super::POLYGON_KEYS;
use crate::attributes::{Attributed, Attributes};
use crate::geometry::{Closed, GeometryError, PolyLineBuilder, Polygon};
use crate::osm::{MapGraph, MemberRef, OsmId, Relation, Way};

/// Why a relation could not be assembled into polygons.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// A chain of way fragments never returned to its starting node.
    #[error("ring starting at node {0} does not close")]
    UnclosedRing(OsmId),
    /// More than two fragments of the same role meet at one node, so the
    /// walk has no unique continuation.
    #[error("node {0} joins more than two way fragments")]
    AmbiguousNode(OsmId),
    /// A member way is absent from the map graph.
    #[error("member way {0} is not in the map graph")]
    MissingWay(OsmId),
    /// A member way references a node absent from the map graph.
    #[error("node {0} is not in the map graph")]
    MissingNode(OsmId),
    /// A member way carries no node references at all.
    #[error("member way {0} has no nodes")]
    EmptyWay(OsmId),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// One closed ring plus the ids of the ways it was stitched from.
#[derive(Debug, Clone)]
struct Ring {
    ring: Closed,
    ways: Vec<OsmId>,
}

/// Assembles a multipolygon relation into attributed polygons.
///
/// A relation without `outer`/`inner` way members produces nothing. Any
/// assembly failure skips this relation alone and is reported as a warning;
/// other relations and all way-derived geometry are unaffected.
pub fn assemble(relation: &Relation, graph: &MapGraph) -> Vec<Attributed<Polygon>> {
    match try_assemble(relation, graph) {
        Ok(polygons) => polygons,
        Err(err) => {
            log::warn!("skipping relation {}: {}", relation.id, err);
            Vec::new()
        }
    }
}

fn try_assemble(
    relation: &Relation,
    graph: &MapGraph,
) -> Result<Vec<Attributed<Polygon>>, AssemblyError> {
    let (outers, inners) = partition_members(relation, graph)?;
    if outers.is_empty() && inners.is_empty() {
        return Ok(Vec::new());
    }

    let shells = close_rings(&outers, graph)?;
    let inner_rings = close_rings(&inners, graph)?;

    // Attach each inner ring to the smallest outer ring containing its first
    // point; an inner ring nobody contains is an orphan and is dropped.
    let areas: Vec<f64> = shells.iter().map(|s| s.ring.area()).collect();
    let mut holes: Vec<Vec<Closed>> = vec![Vec::new(); shells.len()];
    for inner in inner_rings {
        let rep = inner.ring.points()[0];
        let mut best: Option<usize> = None;
        for (idx, shell) in shells.iter().enumerate() {
            if shell.ring.contains(rep) && best.map_or(true, |b| areas[idx] < areas[b]) {
                best = Some(idx);
            }
        }
        match best {
            Some(idx) => holes[idx].push(inner.ring),
            None => log::debug!(
                "relation {}: dropping inner ring with no enclosing outer ring",
                relation.id
            ),
        }
    }

    // Relation attributes win when they project to something renderable;
    // otherwise a shell stitched from a single way may carry its own.
    let rel_attrs = relation.attrs.project(POLYGON_KEYS);
    let mut polygons = Vec::with_capacity(shells.len());
    for (shell, shell_holes) in shells.into_iter().zip(holes) {
        let attrs = if !rel_attrs.is_empty() {
            rel_attrs.clone()
        } else {
            single_way_attrs(&shell, graph)
        };
        if attrs.is_empty() {
            log::debug!(
                "relation {}: no renderable polygon attributes, dropping shell",
                relation.id
            );
            continue;
        }
        polygons.push(Attributed::new(Polygon::new(shell.ring, shell_holes), attrs));
    }
    Ok(polygons)
}

/// Splits the relation's way members into outer and inner candidates.
fn partition_members<'a>(
    relation: &Relation,
    graph: &'a MapGraph,
) -> Result<(Vec<&'a Way>, Vec<&'a Way>), AssemblyError> {
    let mut outers = Vec::new();
    let mut inners = Vec::new();
    for member in &relation.members {
        let MemberRef::Way(id) = member.member else {
            continue;
        };
        let group = match member.role.as_str() {
            "outer" => &mut outers,
            "inner" => &mut inners,
            _ => continue,
        };
        let way = graph.way(id).ok_or(AssemblyError::MissingWay(id))?;
        if way.nodes.is_empty() {
            return Err(AssemblyError::EmptyWay(id));
        }
        group.push(way);
    }
    Ok((outers, inners))
}

/// Joins the ways of one role group into closed rings.
///
/// Each way is an edge between its first and last node. Starting from an
/// unvisited way, the walk follows matching endpoints (reversing fragments
/// as needed) until it returns to its starting node. Every way must end up
/// in exactly one ring.
fn close_rings(ways: &[&Way], graph: &MapGraph) -> Result<Vec<Ring>, AssemblyError> {
    // More than two incident ways on one node leave the walk without a
    // unique continuation. A closed way touches its start node once, so two
    // closed rings may share a vertex without raising an ambiguity.
    let mut incidence: BTreeMap<OsmId, usize> = BTreeMap::new();
    for way in ways {
        let first = way.nodes[0];
        let last = way.nodes[way.nodes.len() - 1];
        *incidence.entry(first).or_insert(0) += 1;
        if last != first {
            *incidence.entry(last).or_insert(0) += 1;
        }
    }
    if let Some((node, _)) = incidence.iter().find(|(_, count)| **count > 2) {
        return Err(AssemblyError::AmbiguousNode(*node));
    }

    let mut visited = vec![false; ways.len()];
    let mut rings = Vec::new();
    for start_idx in 0..ways.len() {
        if visited[start_idx] {
            continue;
        }
        visited[start_idx] = true;
        let mut path: Vec<OsmId> = ways[start_idx].nodes.clone();
        let mut used = vec![ways[start_idx].id];
        let start = path[0];
        loop {
            let current = *path.last().unwrap_or(&start);
            if current == start {
                break;
            }
            let next = (0..ways.len()).find(|&j| {
                !visited[j]
                    && (ways[j].nodes[0] == current || ways[j].nodes.last() == Some(&current))
            });
            let Some(j) = next else {
                return Err(AssemblyError::UnclosedRing(current));
            };
            visited[j] = true;
            used.push(ways[j].id);
            let nodes = &ways[j].nodes;
            if nodes[0] == current {
                path.extend(nodes.iter().skip(1));
            } else {
                path.extend(nodes.iter().rev().skip(1));
            }
        }
        // Drop the closing duplicate of the start node.
        if path.len() > 1 {
            path.pop();
        }
        let mut builder = PolyLineBuilder::new();
        for id in &path {
            let node = graph.node(*id).ok_or(AssemblyError::MissingNode(*id))?;
            builder.push(node.position);
        }
        rings.push(Ring {
            ring: builder.build_closed()?,
            ways: used,
        });
    }
    Ok(rings)
}

/// The fallback attributes for a shell stitched from exactly one way: an
/// already-complete tagged closed way styles itself when the relation exists
/// only to group geometry.
fn single_way_attrs(shell: &Ring, graph: &MapGraph) -> Attributes {
    match shell.ways.as_slice() {
        [only] => graph
            .way(*only)
            .map(|w| w.attrs.project(POLYGON_KEYS))
            .unwrap_or_default(),
        _ => Attributes::new(),
    }
}
