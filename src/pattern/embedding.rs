//! Canonical embedding lists.
//!
//! The embedding list of a subgraph rooted at `root` is the root label followed
//! by one `(edge label, vertex label)` pair per edge, in the order an edge-wise
//! depth-first traversal meets them. At every vertex the untraversed incident
//! edges are taken ascending by `(edge label, neighbor label)`. Equally labeled
//! edges are taken in whichever order yields the smallest list, so the list
//! depends on the labeled structure only, never on vertex ids.

use super::Subgraph;
use crate::types::{ELabel, VId, VLabel};
use itertools::Itertools;
use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt::{self, Display},
};

/// The canonical label sequence identifying a pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Vec<i64>);

impl Signature {
    pub fn new(labels: Vec<i64>) -> Self {
        Self(labels)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Number of edges described by the signature.
    pub fn num_edges(&self) -> usize {
        self.0.len() / 2
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

/// A partial traversal: the depth-first vertex stack and the traversed edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct State {
    stack: Vec<VId>,
    visited: BTreeSet<(VId, VId)>,
}

impl State {
    /// Pops exhausted vertices, then returns the top vertex, its smallest
    /// untraversed label pair and every neighbor reached by that pair.
    fn advance(&mut self, subgraph: &Subgraph) -> Option<(VId, (ELabel, VLabel), Vec<VId>)> {
        while let Some(&top) = self.stack.last() {
            let visited = &self.visited;
            let candidates: Vec<_> = subgraph
                .neighbors(top)
                .filter(|&(n, _)| !visited.contains(&edge_key(top, n)))
                .filter_map(|(n, e)| subgraph.vlabel(n).map(|l| ((e, l), n)))
                .collect();
            match candidates.iter().map(|&(labels, _)| labels).min() {
                Some(labels) => {
                    let targets = candidates
                        .into_iter()
                        .filter(|&(l, _)| l == labels)
                        .map(|(_, n)| n)
                        .collect();
                    return Some((top, labels, targets));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Lazy edge-wise depth-first traversal of a subgraph, yielding the
/// `(edge label, vertex label)` pair of every edge.
///
/// All partial traversals that emitted the smallest prefix so far are kept
/// side by side, so ties between equally labeled edges never need an id.
pub struct Traversal<'a> {
    subgraph: &'a Subgraph,
    states: Vec<State>,
}

impl<'a> Traversal<'a> {
    pub fn new(subgraph: &'a Subgraph, root: VId) -> Self {
        Self {
            subgraph,
            states: vec![State {
                stack: vec![root],
                visited: BTreeSet::new(),
            }],
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = (ELabel, VLabel);

    fn next(&mut self) -> Option<Self::Item> {
        let subgraph = self.subgraph;
        let advanced: Vec<_> = self
            .states
            .drain(..)
            .filter_map(|mut state| {
                let (origin, labels, targets) = state.advance(subgraph)?;
                Some((labels, origin, targets, state))
            })
            .collect();
        let labels = advanced.iter().map(|(labels, ..)| *labels).min()?;
        for (_, origin, targets, state) in advanced.into_iter().filter(|(l, ..)| *l == labels) {
            for target in targets {
                let mut next = state.clone();
                next.visited.insert(edge_key(origin, target));
                next.stack.push(target);
                self.states.push(next);
            }
        }
        self.states.sort_unstable();
        self.states.dedup();
        Some(labels)
    }
}

fn edge_key(u1: VId, u2: VId) -> (VId, VId) {
    if u1 < u2 {
        (u1, u2)
    } else {
        (u2, u1)
    }
}

fn root_vlabel(subgraph: &Subgraph, root: VId) -> VLabel {
    subgraph
        .vlabel(root)
        .unwrap_or_else(|| panic!("root {} is not a vertex of the subgraph", root))
}

/// The sorted `(edge label, neighbor label)` pairs around `vid`.
fn neighborhood(subgraph: &Subgraph, vid: VId) -> Vec<(ELabel, VLabel)> {
    subgraph
        .neighbors(vid)
        .filter_map(|(n, e)| subgraph.vlabel(n).map(|l| (e, l)))
        .sorted()
        .collect()
}

/// The embedding list of `subgraph` rooted at `root`.
pub fn canonical_embedding(subgraph: &Subgraph, root: VId) -> Signature {
    let mut labels = Vec::with_capacity(1 + 2 * subgraph.num_edges());
    labels.push(root_vlabel(subgraph, root));
    for (elabel, vlabel) in Traversal::new(subgraph, root) {
        labels.extend([elabel, vlabel]);
    }
    Signature(labels)
}

/// Orders roots by label, then by neighborhood, then by embedding list, and
/// finally by id.
fn compare_roots(subgraph: &Subgraph, r1: VId, r2: VId) -> Ordering {
    root_vlabel(subgraph, r1)
        .cmp(&root_vlabel(subgraph, r2))
        .then_with(|| neighborhood(subgraph, r1).cmp(&neighborhood(subgraph, r2)))
        .then_with(|| Traversal::new(subgraph, r1).cmp(Traversal::new(subgraph, r2)))
        .then(r1.cmp(&r2))
}

/// Decide whether `candidate` rather than `alt` roots the canonical form.
///
/// Returns the embedding list rooted at `candidate` on acceptance. For two
/// distinct roots exactly one of `accept_or_reject(s, a, b)` and
/// `accept_or_reject(s, b, a)` accepts.
pub fn accept_or_reject(subgraph: &Subgraph, candidate: VId, alt: VId) -> Option<Signature> {
    if candidate == alt || compare_roots(subgraph, candidate, alt) == Ordering::Less {
        Some(canonical_embedding(subgraph, candidate))
    } else {
        None
    }
}

/// The root every other vertex of `subgraph` rejects, with its embedding list.
pub fn canonical_root(subgraph: &Subgraph) -> (VId, Signature) {
    let root = subgraph
        .vertices()
        .map(|(v, _)| v)
        .min_by(|&r1, &r2| compare_roots(subgraph, r1, r2))
        .unwrap_or_else(|| panic!("an empty subgraph has no root"));
    (root, canonical_embedding(subgraph, root))
}
