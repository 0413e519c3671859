//! Reading and writing line-graph files.
//!
//! ```text
//! t # <graph id>
//! v <vertex id> <label>
//! e <vertex id> <vertex id> <label>
//! ```
//!
//! Lines starting with `#=>` are annotations and are skipped.

pub use labels::{normalize_label, LabelDictionary};
pub use parser::{parse, read_file, LineGraphRule};
pub use writer::{write, write_file};

use crate::data::{DatabaseInfo, LabeledGraph};

pub mod error;

mod labels;
mod parser;
mod writer;

/// Graphs read from one file together with their label texts.
#[derive(Debug, Clone, Default)]
pub struct GraphDatabase {
    graphs: Vec<LabeledGraph>,
    labels: LabelDictionary,
}

impl GraphDatabase {
    pub fn new(graphs: Vec<LabeledGraph>, labels: LabelDictionary) -> Self {
        Self { graphs, labels }
    }

    pub fn graphs(&self) -> &[LabeledGraph] {
        &self.graphs
    }

    pub fn labels(&self) -> &LabelDictionary {
        &self.labels
    }

    pub fn info(&self) -> DatabaseInfo {
        DatabaseInfo::new(&self.graphs)
    }
}
