//! The graph database.

pub use graph::LabeledGraph;
pub use info::DatabaseInfo;
pub use working::WorkingGraph;

mod graph;
mod info;
mod working;
