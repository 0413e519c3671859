//! Fragments: grown pattern occurrences and their bookkeeping.

pub use refine::apply_refinement;

use crate::{
    data::{LabeledGraph, WorkingGraph},
    pattern::{Signature, Subgraph},
    types::{ELabel, VId, VLabel},
};
use derive_more::Display;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    rc::Rc,
};

mod refine;

/// The structural type of a fragment, which is also its search level.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    Node,
    Path,
    Tree,
    Cycle,
}

impl FragmentKind {
    /// The search levels in processing order.
    pub const LEVELS: [FragmentKind; 4] = [
        FragmentKind::Node,
        FragmentKind::Path,
        FragmentKind::Tree,
        FragmentKind::Cycle,
    ];

    pub fn level(self) -> usize {
        self as usize
    }
}

/// The two ends of a path and how its label sequence compares to its reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEnds {
    back: VId,
    total_symmetry: Ordering,
    front_symmetry: Ordering,
    back_symmetry: Ordering,
}

impl PathEnds {
    fn new(back: VId, signature: &Signature) -> Self {
        let labels = signature.as_slice();
        let n = labels.len();
        Self {
            back,
            total_symmetry: symmetry(labels),
            front_symmetry: symmetry(&labels[..n - 2]),
            back_symmetry: symmetry(&labels[2..]),
        }
    }
}

fn symmetry(labels: &[i64]) -> Ordering {
    labels.iter().cmp(labels.iter().rev())
}

/// The variant specific part of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Node,
    Path(PathEnds),
    Tree,
    Cycle,
}

/// A candidate edge for growing a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEdge {
    pub origin: VId,
    pub target: VId,
    pub elabel: ELabel,
    pub target_vlabel: VLabel,
}

/// One occurrence of a pattern in one graph of the database.
///
/// Fragments compare equal when their signatures are equal.
#[derive(Debug, Clone)]
pub struct Fragment {
    graph: usize,
    source_node_id: VId,
    subgraph: Rc<Subgraph>,
    signature: Signature,
    shape: Shape,
}

impl Fragment {
    /// The single-vertex fragment of `vid` in the `graph`-th database graph.
    pub fn node(graph: usize, vid: VId, vlabel: VLabel) -> Self {
        Self {
            graph,
            source_node_id: vid,
            subgraph: Rc::new(Subgraph::singleton(vid, vlabel)),
            signature: Signature::new(vec![vlabel]),
            shape: Shape::Node,
        }
    }

    fn grown(&self, root: VId, subgraph: Subgraph, signature: Signature, shape: Shape) -> Self {
        Self {
            graph: self.graph,
            source_node_id: root,
            subgraph: Rc::new(subgraph),
            signature,
            shape,
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self.shape {
            Shape::Node => FragmentKind::Node,
            Shape::Path(_) => FragmentKind::Path,
            Shape::Tree => FragmentKind::Tree,
            Shape::Cycle => FragmentKind::Cycle,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Index of the source graph in the mined database.
    pub fn graph(&self) -> usize {
        self.graph
    }

    pub fn source_node_id(&self) -> VId {
        self.source_node_id
    }

    pub fn subgraph(&self) -> &Subgraph {
        &self.subgraph
    }

    pub(crate) fn shared_subgraph(&self) -> &Rc<Subgraph> {
        &self.subgraph
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn start_node_id(&self) -> Option<VId> {
        match self.shape {
            Shape::Path(_) => Some(self.source_node_id),
            _ => None,
        }
    }

    pub fn back_node_id(&self) -> Option<VId> {
        match &self.shape {
            Shape::Path(ends) => Some(ends.back),
            _ => None,
        }
    }

    /// `(total, front, back)` symmetries of a path.
    ///
    /// `Equal` means the (partial) path reads the same from both ends, `Less`
    /// that it reads smaller from the start.
    pub fn symmetries(&self) -> Option<(Ordering, Ordering, Ordering)> {
        match &self.shape {
            Shape::Path(ends) => Some((
                ends.total_symmetry,
                ends.front_symmetry,
                ends.back_symmetry,
            )),
            _ => None,
        }
    }

    /// Edges leaving the snapshot towards the live part of `source`.
    ///
    /// Edges between two snapshot vertices that are not yet part of the
    /// snapshot are reported once from each side.
    pub fn frontier_edges<'a>(
        &'a self,
        source: &'a WorkingGraph<'a>,
    ) -> impl Iterator<Item = FrontierEdge> + 'a {
        self.subgraph
            .vertices()
            .filter(move |&(v, _)| source.contains(v))
            .flat_map(move |(v, _)| {
                source
                    .neighbors(v)
                    .filter(move |&(n, _)| !self.subgraph.has_edge(v, n))
                    .filter_map(move |(n, elabel)| {
                        source.vlabel(n).map(|target_vlabel| FrontierEdge {
                            origin: v,
                            target: n,
                            elabel,
                            target_vlabel,
                        })
                    })
            })
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for Fragment {}

impl Hash for Fragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

/// One Node fragment per vertex, graph by graph, vertices ascending by id.
pub fn initial_node_fragments(graphs: &[LabeledGraph]) -> Vec<Fragment> {
    graphs
        .iter()
        .enumerate()
        .flat_map(|(i, g)| g.vertices().map(move |(v, l)| Fragment::node(i, v, l)))
        .collect()
}
