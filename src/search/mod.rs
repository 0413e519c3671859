//! Level-ordered frequent pattern search.

pub use engine::mine;
pub use result::{FrequentSubgraph, MiningResult};

mod engine;
mod result;
