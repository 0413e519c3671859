//! Level-wise frequent subgraph mining.
//!
//! Patterns are grown one edge at a time from single vertices to paths, trees
//! and finally cycles. Every pattern is identified by its canonical embedding
//! list and an occurrence is only grown from the root that produces it.

pub mod data;
pub mod fragment;
pub mod front_end;
pub mod pattern;
pub mod search;
pub mod task;
pub mod types;
