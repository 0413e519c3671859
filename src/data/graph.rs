use crate::types::{ELabel, GraphId, VId, VLabel};
use std::{collections::BTreeMap, ops::Bound};

/// An undirected graph with labeled vertices and labeled edges.
///
/// Self loops and parallel edges are not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
    id: GraphId,
    vertices: BTreeMap<VId, VLabel>,
    neighbors: BTreeMap<VId, BTreeMap<VId, ELabel>>,
    num_edges: usize,
}

impl LabeledGraph {
    /// Create a new empty graph.
    pub fn new(id: GraphId) -> Self {
        Self {
            id,
            vertices: BTreeMap::new(),
            neighbors: BTreeMap::new(),
            num_edges: 0,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Add a vertex, returns `false` if `vid` already exists.
    pub fn add_vertex(&mut self, vid: VId, vlabel: VLabel) -> bool {
        if self.vertices.contains_key(&vid) {
            false
        } else {
            self.vertices.insert(vid, vlabel);
            self.neighbors.insert(vid, BTreeMap::new());
            true
        }
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// Returns `false` for unknown endpoints, self loops and duplicate edges.
    pub fn add_edge(&mut self, u1: VId, u2: VId, elabel: ELabel) -> bool {
        if u1 == u2
            || !self.vertices.contains_key(&u1)
            || !self.vertices.contains_key(&u2)
            || self.elabel(u1, u2).is_some()
        {
            return false;
        }
        for (v, n) in [(u1, u2), (u2, u1)] {
            self.neighbors.entry(v).or_default().insert(n, elabel);
        }
        self.num_edges += 1;
        true
    }

    pub fn vlabel(&self, vid: VId) -> Option<VLabel> {
        self.vertices.get(&vid).copied()
    }

    pub fn elabel(&self, u1: VId, u2: VId) -> Option<ELabel> {
        self.neighbors
            .get(&u1)
            .and_then(|neighbors| neighbors.get(&u2))
            .copied()
    }

    pub fn contains(&self, vid: VId) -> bool {
        self.vertices.contains_key(&vid)
    }

    /// Neighbors of `vid` with the connecting edge labels, ascending by id.
    pub fn neighbors(&self, vid: VId) -> impl Iterator<Item = (VId, ELabel)> + '_ {
        self.neighbors
            .get(&vid)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&n, &e)| (n, e)))
    }

    /// Vertices ascending by id.
    pub fn vertices(&self) -> impl Iterator<Item = (VId, VLabel)> + '_ {
        self.vertices.iter().map(|(&v, &l)| (v, l))
    }

    /// Every edge once, as `(u1, u2, elabel)` with `u1 < u2`, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (VId, VId, ELabel)> + '_ {
        self.neighbors.iter().flat_map(|(&v, neighbors)| {
            neighbors
                .range((Bound::Excluded(v), Bound::Unbounded))
                .map(move |(&n, &e)| (v, n, e))
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}
