use crate::geometry::{KeyPos, KeyPoses};
use fnv::FnvHashMap;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerEdge {
    pub from: usize,
    pub to: usize,
    pub key: KeyPos,
}

/// Directed graph of layer switches plus every simple path between layers.
///
/// Paths are enumerated once at construction: start layers ascending, out
/// edges in the order the switch keys were declared, depth first. A layer is
/// never revisited on the same path.
#[derive(Debug, Clone, Default)]
pub struct LayerGraph {
    edges: Vec<LayerEdge>,
    paths: FnvHashMap<(usize, usize), Vec<KeyPoses>>,
}

impl LayerGraph {
    pub fn new(edges: Vec<LayerEdge>) -> Self {
        let mut graph = Self {
            edges,
            paths: FnvHashMap::default(),
        };
        graph.enumerate_paths();
        debug!(
            "Layer graph: {} edges, {} connected layer pairs",
            graph.edges.len(),
            graph.paths.len()
        );
        graph
    }

    pub fn edges(&self) -> &[LayerEdge] {
        &self.edges
    }

    /// Layers touched by at least one edge, ascending.
    pub fn vertices(&self) -> BTreeSet<usize> {
        self.edges.iter().flat_map(|e| [e.from, e.to]).collect()
    }

    /// All distinct simple switch sequences from `from` to `to`.
    pub fn paths(&self, from: usize, to: usize) -> &[KeyPoses] {
        self.paths
            .get(&(from, to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First path of minimal length in enumeration order.
    pub fn shortest(&self, from: usize, to: usize) -> Option<&[KeyPos]> {
        self.paths(from, to)
            .iter()
            .min_by_key(|p| p.len())
            .map(Vec::as_slice)
    }

    fn enumerate_paths(&mut self) {
        let mut adjacency: FnvHashMap<usize, Vec<LayerEdge>> = FnvHashMap::default();
        for edge in &self.edges {
            adjacency.entry(edge.from).or_default().push(*edge);
        }

        for start in self.vertices() {
            let mut walk = Walk {
                adjacency: &adjacency,
                start,
                visited: BTreeSet::from([start]),
                path: Vec::new(),
                found: &mut self.paths,
            };
            walk.visit(start);
        }
    }
}

struct Walk<'a> {
    adjacency: &'a FnvHashMap<usize, Vec<LayerEdge>>,
    start: usize,
    visited: BTreeSet<usize>,
    path: KeyPoses,
    found: &'a mut FnvHashMap<(usize, usize), Vec<KeyPoses>>,
}

impl Walk<'_> {
    fn visit(&mut self, layer: usize) {
        let adjacency = self.adjacency;
        let Some(out) = adjacency.get(&layer) else {
            return;
        };

        for edge in out {
            if self.visited.contains(&edge.to) {
                continue;
            }

            self.visited.insert(edge.to);
            self.path.push(edge.key);

            let known = self.found.entry((self.start, edge.to)).or_default();
            if !known.contains(&self.path) {
                known.push(self.path.clone());
            }

            self.visit(edge.to);

            self.path.pop();
            self.visited.remove(&edge.to);
        }
    }
}
