use super::LabeledGraph;
use derive_more::Display;
use rayon::prelude::*;
use std::collections::HashSet;

/// Size statistics of a graph database.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(
    fmt = "graphs: {}, vertices: {}, edges: {}, vlabels: {}, elabels: {}",
    num_graphs,
    num_vertices,
    num_edges,
    num_vlabels,
    num_elabels
)]
pub struct DatabaseInfo {
    num_graphs: usize,
    num_vertices: usize,
    num_edges: usize,
    num_vlabels: usize,
    num_elabels: usize,
}

impl DatabaseInfo {
    pub fn new(graphs: &[LabeledGraph]) -> Self {
        let num_vertices = graphs.par_iter().map(|g| g.num_vertices()).sum();
        let num_edges = graphs.par_iter().map(|g| g.num_edges()).sum();
        let num_vlabels = graphs
            .par_iter()
            .map(|g| g.vertices().map(|(_, l)| l).collect::<HashSet<_>>())
            .reduce(HashSet::new, union)
            .len();
        let num_elabels = graphs
            .par_iter()
            .map(|g| g.edges().map(|(_, _, l)| l).collect::<HashSet<_>>())
            .reduce(HashSet::new, union)
            .len();
        Self {
            num_graphs: graphs.len(),
            num_vertices,
            num_edges,
            num_vlabels,
            num_elabels,
        }
    }

    pub fn num_graphs(&self) -> usize {
        self.num_graphs
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn num_vlabels(&self) -> usize {
        self.num_vlabels
    }

    pub fn num_elabels(&self) -> usize {
        self.num_elabels
    }
}

fn union<T: Eq + std::hash::Hash>(mut a: HashSet<T>, b: HashSet<T>) -> HashSet<T> {
    a.extend(b);
    a
}
