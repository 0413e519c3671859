use crate::{
    fragment::FragmentKind,
    pattern::{Signature, Subgraph},
};
use itertools::Itertools;
use std::collections::{btree_map, BTreeMap};

/// A pattern that reached the minimum frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentSubgraph {
    subgraph: Subgraph,
    kind: FragmentKind,
    frequency: usize,
}

impl FrequentSubgraph {
    pub fn new(subgraph: Subgraph, kind: FragmentKind, frequency: usize) -> Self {
        Self {
            subgraph,
            kind,
            frequency,
        }
    }

    /// The first occurrence that made the pattern frequent.
    pub fn subgraph(&self) -> &Subgraph {
        &self.subgraph
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Number of occurrences counted over the whole search.
    pub fn frequency(&self) -> usize {
        self.frequency
    }
}

/// Frequent patterns keyed and ordered by signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiningResult {
    frequent: BTreeMap<Signature, FrequentSubgraph>,
}

impl MiningResult {
    pub fn new(frequent: BTreeMap<Signature, FrequentSubgraph>) -> Self {
        Self { frequent }
    }

    pub fn get(&self, signature: &Signature) -> Option<&FrequentSubgraph> {
        self.frequent.get(signature)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Signature, FrequentSubgraph> {
        self.frequent.iter()
    }

    pub fn len(&self) -> usize {
        self.frequent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequent.is_empty()
    }

    pub fn frequencies(&self) -> BTreeMap<Signature, usize> {
        self.frequent
            .iter()
            .map(|(s, f)| (s.clone(), f.frequency))
            .collect()
    }

    /// Number of frequent patterns per kind; kinds without any are absent.
    pub fn kind_counts(&self) -> BTreeMap<FragmentKind, usize> {
        self.frequent
            .values()
            .map(|f| f.kind)
            .counts()
            .into_iter()
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<Signature, FrequentSubgraph> {
        self.frequent
    }
}

impl<'a> IntoIterator for &'a MiningResult {
    type Item = (&'a Signature, &'a FrequentSubgraph);
    type IntoIter = btree_map::Iter<'a, Signature, FrequentSubgraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
