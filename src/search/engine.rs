use super::{FrequentSubgraph, MiningResult};
use crate::{
    data::{LabeledGraph, WorkingGraph},
    fragment::{apply_refinement, initial_node_fragments, Fragment, FragmentKind},
    pattern::{Signature, Subgraph},
};
use log::{debug, info};
use std::{
    collections::{BTreeMap, HashMap, HashSet, VecDeque},
    rc::Rc,
};

/// Mine every connected pattern occurring at least `min_frequency` times in
/// `graphs`.
///
/// A `min_frequency` below 1 is treated as 1.
pub fn mine(
    graphs: &[LabeledGraph],
    min_frequency: usize,
    allow_cycles: bool,
    allow_trees: bool,
) -> MiningResult {
    let mut search = Search::new(graphs, min_frequency.max(1), allow_cycles, allow_trees);
    for fragment in initial_node_fragments(graphs) {
        search.push(fragment);
    }
    for kind in FragmentKind::LEVELS {
        if search.is_enabled(kind) {
            search.run_level(kind);
        } else {
            info!("skip {} level", kind);
        }
    }
    search.finish()
}

struct Search<'a> {
    working: Vec<WorkingGraph<'a>>,
    min_frequency: usize,
    allow_cycles: bool,
    allow_trees: bool,
    queues: Vec<VecDeque<Fragment>>,
    frequencies: HashMap<Signature, usize>,
    generated: Vec<HashSet<Rc<Subgraph>>>,
    frequent: BTreeMap<Signature, (Rc<Subgraph>, FragmentKind)>,
}

impl<'a> Search<'a> {
    fn new(
        graphs: &'a [LabeledGraph],
        min_frequency: usize,
        allow_cycles: bool,
        allow_trees: bool,
    ) -> Self {
        Self {
            working: graphs.iter().map(WorkingGraph::new).collect(),
            min_frequency,
            allow_cycles,
            allow_trees,
            queues: FragmentKind::LEVELS.iter().map(|_| VecDeque::new()).collect(),
            frequencies: HashMap::new(),
            generated: graphs.iter().map(|_| HashSet::new()).collect(),
            frequent: BTreeMap::new(),
        }
    }

    fn is_enabled(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Node | FragmentKind::Path => true,
            FragmentKind::Tree => self.allow_trees,
            FragmentKind::Cycle => self.allow_cycles,
        }
    }

    fn push(&mut self, fragment: Fragment) {
        self.queues[fragment.kind().level()].push_back(fragment);
    }

    fn run_level(&mut self, kind: FragmentKind) {
        let level = kind.level();
        info!(
            "{} level: {} queued occurrences",
            kind,
            self.queues[level].len()
        );
        let mut pending: HashMap<Signature, Vec<Fragment>> = HashMap::new();
        let mut processed = 0usize;
        while let Some(fragment) = self.queues[level].pop_front() {
            processed += 1;
            let count = self.frequencies.entry(fragment.signature().clone()).or_insert(0);
            *count += 1;
            let count = *count;
            if self.frequent.contains_key(fragment.signature()) {
                self.expand(&fragment);
                continue;
            }
            let signature = fragment.signature().clone();
            pending.entry(signature.clone()).or_default().push(fragment);
            if count >= self.min_frequency {
                let occurrences = pending.remove(&signature).unwrap_or_default();
                self.graduate(signature, &occurrences);
            }
        }
        let infrequent = pending.len();
        let removed = self.prune(pending.into_values().flatten());
        info!(
            "{} level: {} occurrences processed, {} infrequent patterns, {} vertices pruned",
            kind, processed, infrequent, removed
        );
    }

    fn graduate(&mut self, signature: Signature, occurrences: &[Fragment]) {
        let first = match occurrences.first() {
            Some(first) => first,
            None => return,
        };
        debug!(
            "frequent {} {} after {} occurrences",
            first.kind(),
            signature,
            occurrences.len()
        );
        self.frequent
            .insert(signature, (first.shared_subgraph().clone(), first.kind()));
        for occurrence in occurrences {
            self.expand(occurrence);
        }
    }

    /// Queue every canonical child of `fragment` not generated before in the
    /// same graph.
    fn expand(&mut self, fragment: &Fragment) {
        let source = &self.working[fragment.graph()];
        let (allow_cycles, allow_trees) = (self.allow_cycles, self.allow_trees);
        let children: Vec<Fragment> = fragment
            .frontier_edges(source)
            .filter_map(|edge| apply_refinement(fragment, &edge, allow_cycles, allow_trees))
            .collect();
        for child in children {
            if self.generated[child.graph()].insert(child.shared_subgraph().clone()) {
                self.push(child);
            }
        }
    }

    /// Remove every vertex of the given occurrences from their working graphs.
    fn prune(&mut self, infrequent: impl Iterator<Item = Fragment>) -> usize {
        let mut removed = 0;
        for fragment in infrequent {
            let working = &mut self.working[fragment.graph()];
            for (vid, _) in fragment.subgraph().vertices() {
                if working.remove_vertex(vid) {
                    removed += 1;
                }
            }
        }
        removed
    }

    fn finish(self) -> MiningResult {
        let frequencies = self.frequencies;
        MiningResult::new(
            self.frequent
                .into_iter()
                .map(|(signature, (subgraph, kind))| {
                    let frequency = frequencies.get(&signature).copied().unwrap_or(0);
                    let subgraph = Rc::try_unwrap(subgraph).unwrap_or_else(|rc| (*rc).clone());
                    (signature, FrequentSubgraph::new(subgraph, kind, frequency))
                })
                .collect(),
        )
    }
}
