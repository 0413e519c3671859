use super::LabeledGraph;
use crate::types::{ELabel, VId, VLabel};
use std::collections::HashSet;

/// A prunable view of a [`LabeledGraph`].
///
/// Removing a vertex only tombstones it: the original graph is untouched and
/// the label of a removed vertex stays readable, but the vertex disappears from
/// [`contains`](Self::contains) and from every adjacency.
#[derive(Debug)]
pub struct WorkingGraph<'a> {
    graph: &'a LabeledGraph,
    removed: HashSet<VId>,
}

impl<'a> WorkingGraph<'a> {
    pub fn new(graph: &'a LabeledGraph) -> Self {
        Self {
            graph,
            removed: HashSet::new(),
        }
    }

    pub fn original(&self) -> &'a LabeledGraph {
        self.graph
    }

    pub fn contains(&self, vid: VId) -> bool {
        self.graph.contains(vid) && !self.removed.contains(&vid)
    }

    pub fn vlabel(&self, vid: VId) -> Option<VLabel> {
        self.graph.vlabel(vid)
    }

    /// Live neighbors of a live vertex, ascending by id.
    pub fn neighbors(&self, vid: VId) -> impl Iterator<Item = (VId, ELabel)> + '_ {
        let live = self.contains(vid);
        let removed = &self.removed;
        self.graph
            .neighbors(vid)
            .filter(move |&(n, _)| live && !removed.contains(&n))
    }

    /// Tombstone `vid`, returns `false` if it was absent or already removed.
    pub fn remove_vertex(&mut self, vid: VId) -> bool {
        self.graph.contains(vid) && self.removed.insert(vid)
    }

    pub fn num_removed(&self) -> usize {
        self.removed.len()
    }
}
