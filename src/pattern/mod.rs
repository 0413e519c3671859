//! Pattern snapshots and their canonical form.

pub use embedding::{
    accept_or_reject, canonical_embedding, canonical_root, Signature, Traversal,
};
pub use subgraph::Subgraph;

mod embedding;
mod subgraph;
