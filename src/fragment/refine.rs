//! The refinement factory.
//!
//! | fragment | frontier edge                | result                   |
//! |----------|------------------------------|--------------------------|
//! | Node     | any                          | Path                     |
//! | any      | target already in the pattern| Cycle                    |
//! | Path     | leaves the back end          | Path, appended           |
//! | Path     | leaves the start             | Path, prepended          |
//! | Path     | leaves an interior vertex    | Tree                     |
//! | Tree     | any                          | Tree                     |
//!
//! Every branch recomputes the embedding list. Paths are read from whichever
//! end is canonically preferred, trees and cycles from their canonical root.
//! An edge is only discarded when another frontier edge of the same fragment
//! yields the same occurrence, or when its kind is disabled.

use super::{Fragment, FrontierEdge, PathEnds, Shape};
use crate::pattern::{accept_or_reject, canonical_root, Subgraph};
use crate::types::VId;
use log::trace;

/// Grow `fragment` by `edge`, or `None` if the result is redundant or its kind
/// is disabled.
pub fn apply_refinement(
    fragment: &Fragment,
    edge: &FrontierEdge,
    allow_cycles: bool,
    allow_trees: bool,
) -> Option<Fragment> {
    let refined = match fragment.shape() {
        Shape::Node => create_path_from_node(fragment, edge),
        _ if fragment.subgraph().contains(edge.target) => {
            if allow_cycles {
                create_cycle(fragment, edge)
            } else {
                None
            }
        }
        Shape::Path(ends) if edge.origin == ends.back => {
            let start = fragment.source_node_id();
            create_path(fragment, edge, start, edge.target)
        }
        Shape::Path(ends) if edge.origin == fragment.source_node_id() => {
            create_path(fragment, edge, edge.target, ends.back)
        }
        Shape::Path(_) | Shape::Tree => {
            if allow_trees {
                create_tree(fragment, edge)
            } else {
                None
            }
        }
        Shape::Cycle => None,
    };
    if refined.is_none() {
        trace!(
            "rejected {} {} + ({}, {})",
            fragment.kind(),
            fragment.signature(),
            edge.origin,
            edge.target
        );
    }
    refined
}

fn extended(fragment: &Fragment, edge: &FrontierEdge) -> Subgraph {
    fragment
        .subgraph()
        .extend(edge.origin, edge.target, edge.target_vlabel, edge.elabel)
}

fn create_path_from_node(fragment: &Fragment, edge: &FrontierEdge) -> Option<Fragment> {
    let root = fragment.source_node_id();
    let root_vlabel = fragment.signature().as_slice()[0];
    // the edge is grown again from the other end's node
    if edge.target == root || edge.target_vlabel < root_vlabel {
        return None;
    }
    let subgraph = extended(fragment, edge);
    let signature = accept_or_reject(&subgraph, root, edge.target)?;
    let ends = PathEnds::new(edge.target, &signature);
    Some(fragment.grown(root, subgraph, signature, Shape::Path(ends)))
}

/// The grown path with ends `first` and `second`, started at the preferred one.
fn create_path(
    fragment: &Fragment,
    edge: &FrontierEdge,
    first: VId,
    second: VId,
) -> Option<Fragment> {
    let subgraph = extended(fragment, edge);
    let (start, back, signature) = match accept_or_reject(&subgraph, first, second) {
        Some(signature) => (first, second, signature),
        None => (second, first, accept_or_reject(&subgraph, second, first)?),
    };
    let ends = PathEnds::new(back, &signature);
    Some(fragment.grown(start, subgraph, signature, Shape::Path(ends)))
}

fn create_tree(fragment: &Fragment, edge: &FrontierEdge) -> Option<Fragment> {
    let subgraph = extended(fragment, edge);
    let (root, signature) = canonical_root(&subgraph);
    Some(fragment.grown(root, subgraph, signature, Shape::Tree))
}

fn create_cycle(fragment: &Fragment, edge: &FrontierEdge) -> Option<Fragment> {
    // the mirrored edge closes at the root and yields the same cycle
    if edge.origin == fragment.source_node_id() {
        return None;
    }
    let subgraph = extended(fragment, edge);
    let (root, signature) = canonical_root(&subgraph);
    Some(fragment.grown(root, subgraph, signature, Shape::Cycle))
}
