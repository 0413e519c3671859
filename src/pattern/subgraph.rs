use crate::{
    data::LabeledGraph,
    types::{ELabel, GraphId, VId, VLabel},
};
use std::{collections::BTreeMap, ops::Bound};

/// An immutable snapshot of a grown pattern occurrence.
///
/// Vertex ids are the ids of the source graph. Every extension returns a new
/// snapshot, the receiver is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subgraph {
    vertices: BTreeMap<VId, VLabel>,
    neighbors: BTreeMap<VId, BTreeMap<VId, ELabel>>,
    num_edges: usize,
}

impl Subgraph {
    /// A snapshot made of a single vertex.
    pub fn singleton(vid: VId, vlabel: VLabel) -> Self {
        Self {
            vertices: BTreeMap::from([(vid, vlabel)]),
            neighbors: BTreeMap::from([(vid, BTreeMap::new())]),
            num_edges: 0,
        }
    }

    /// A copy of `self` grown by the edge `origin`-`target`.
    ///
    /// `target` is added with `target_vlabel` unless it is already present.
    pub fn extend(&self, origin: VId, target: VId, target_vlabel: VLabel, elabel: ELabel) -> Self {
        let mut grown = self.clone();
        grown.vertices.entry(target).or_insert(target_vlabel);
        for (v, n) in [(origin, target), (target, origin)] {
            grown.neighbors.entry(v).or_default().insert(n, elabel);
        }
        grown.num_edges += 1;
        grown
    }

    pub fn vlabel(&self, vid: VId) -> Option<VLabel> {
        self.vertices.get(&vid).copied()
    }

    pub fn elabel(&self, u1: VId, u2: VId) -> Option<ELabel> {
        self.neighbors.get(&u1).and_then(|n| n.get(&u2)).copied()
    }

    pub fn contains(&self, vid: VId) -> bool {
        self.vertices.contains_key(&vid)
    }

    pub fn has_edge(&self, u1: VId, u2: VId) -> bool {
        self.elabel(u1, u2).is_some()
    }

    pub fn neighbors(&self, vid: VId) -> impl Iterator<Item = (VId, ELabel)> + '_ {
        self.neighbors
            .get(&vid)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&n, &e)| (n, e)))
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VId, VLabel)> + '_ {
        self.vertices.iter().map(|(&v, &l)| (v, l))
    }

    /// Every edge once, as `(u1, u2, elabel)` with `u1 < u2`, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (VId, VId, ELabel)> + '_ {
        self.neighbors.iter().flat_map(|(&v, n)| {
            n.range((Bound::Excluded(v), Bound::Unbounded))
                .map(move |(&n, &e)| (v, n, e))
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Materialize the snapshot as a standalone graph, e.g. for writing.
    pub fn to_labeled_graph(&self, id: GraphId) -> LabeledGraph {
        let mut graph = LabeledGraph::new(id);
        for (v, l) in self.vertices() {
            graph.add_vertex(v, l);
        }
        for (u1, u2, e) in self.edges() {
            graph.add_edge(u1, u2, e);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend() {
        let s0 = Subgraph::singleton(1, 0);
        let s1 = s0.extend(1, 2, 5, 15);
        let s2 = s1.extend(2, 3, 6, 26);
        let s3 = s2.extend(3, 1, 99, 31);
        assert_eq!(s0.num_edges(), 0);
        assert!(!s0.contains(2));
        assert_eq!(s1.vertices().collect::<Vec<_>>(), vec![(1, 0), (2, 5)]);
        assert_eq!(s2.num_vertices(), 3);
        assert_eq!(s3.num_vertices(), 3);
        assert_eq!(s3.num_edges(), 3);
        // closing an edge keeps the existing label
        assert_eq!(s3.vlabel(1), Some(0));
        assert!(s3.has_edge(1, 3));
        assert!(!s2.has_edge(1, 3));
        assert_eq!(
            s3.edges().collect::<Vec<_>>(),
            vec![(1, 2, 15), (1, 3, 31), (2, 3, 26)]
        );
        assert_eq!(s3.neighbors(3).collect::<Vec<_>>(), vec![(1, 31), (2, 26)]);
    }

    #[test]
    fn test_identity() {
        let a = Subgraph::singleton(1, 0).extend(1, 2, 0, 7).extend(2, 3, 0, 7);
        let b = Subgraph::singleton(3, 0).extend(3, 2, 0, 7).extend(2, 1, 0, 7);
        let c = Subgraph::singleton(1, 0).extend(1, 2, 0, 7).extend(1, 3, 0, 7);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_to_labeled_graph() {
        let s = Subgraph::singleton(4, 1).extend(4, 9, 2, 3);
        let g = s.to_labeled_graph(12);
        assert_eq!(g.id(), 12);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![(4, 1), (9, 2)]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(4, 9, 3)]);
    }

    #[test]
    fn test_extreme_ids() {
        let s = Subgraph::singleton(i64::MAX, 0)
            .extend(i64::MAX, 1, 0, 3)
            .extend(1, i64::MIN, 0, 2);
        assert_eq!(
            s.edges().collect::<Vec<_>>(),
            vec![(i64::MIN, 1, 2), (1, i64::MAX, 3)]
        );
    }
}
