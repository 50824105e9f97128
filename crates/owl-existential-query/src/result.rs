//! Search result types.

use std::collections::HashMap;
use std::time::Duration;

use owl_expr::Concept;

use crate::node::EquivalenceClass;

/// Result of an existential filler search.
///
/// An unordered set of [`EquivalenceClass`] nodes, deduplicated by
/// representative concept, plus per-call diagnostics.
///
/// # Example
///
/// ```ignore
/// let result = search.find_fillers(&query, &chain, FillerTreatment::All)?;
///
/// println!("{} filler nodes", result.count());
/// for concept in result.flattened() {
///     println!("filler: {concept}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    nodes: HashMap<Concept, EquivalenceClass>,
    /// Diagnostics for this call.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Creates a result from nodes and stats, deduplicating by
    /// representative.
    pub fn new(nodes: impl IntoIterator<Item = EquivalenceClass>, stats: SearchStats) -> Self {
        let nodes = nodes
            .into_iter()
            .map(|node| (node.representative().clone(), node))
            .collect();
        Self { nodes, stats }
    }

    /// Creates an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of filler nodes.
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// True if no filler was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `concept` is the representative of a node in the result.
    pub fn contains(&self, concept: &Concept) -> bool {
        self.nodes.contains_key(concept)
    }

    /// True if `concept` is a member of any node in the result.
    pub fn contains_member(&self, concept: &Concept) -> bool {
        self.nodes.values().any(|node| node.contains(concept))
    }

    /// Returns the node whose representative is `concept`, if present.
    pub fn get(&self, concept: &Concept) -> Option<&EquivalenceClass> {
        self.nodes.get(concept)
    }

    /// Iterates over the filler nodes (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &EquivalenceClass> {
        self.nodes.values()
    }

    /// Returns the representatives as a sorted Vec.
    pub fn representatives(&self) -> Vec<Concept> {
        let mut reps: Vec<Concept> = self.nodes.keys().cloned().collect();
        reps.sort_unstable();
        reps
    }

    /// Flattens every node into a single sorted, deduplicated concept list.
    ///
    /// This is the display-ready ordered list a result view renders.
    pub fn flattened(&self) -> Vec<Concept> {
        let mut concepts: Vec<Concept> = self
            .nodes
            .values()
            .flat_map(|node| node.members().cloned())
            .collect();
        concepts.sort_unstable();
        concepts.dedup();
        concepts
    }

    /// Inserts a node, deduplicating by representative.
    ///
    /// Returns true if the node was not already present.
    pub(crate) fn insert(&mut self, node: EquivalenceClass) -> bool {
        self.nodes
            .insert(node.representative().clone(), node)
            .is_none()
    }

    /// Removes the node with the given representative, if present.
    pub(crate) fn remove(&mut self, representative: &Concept) -> bool {
        self.nodes.remove(representative).is_some()
    }
}

impl IntoIterator for SearchResult {
    type Item = EquivalenceClass;
    type IntoIter = std::collections::hash_map::IntoValues<Concept, EquivalenceClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_values()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a EquivalenceClass;
    type IntoIter = std::collections::hash_map::Values<'a, Concept, EquivalenceClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}

/// Per-call diagnostics for one `find_fillers` invocation.
///
/// Replaces the mutable global query counter some reasoner front-ends keep:
/// all counters are scoped to the call that produced them and are never read
/// for control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total search duration, reduction included.
    pub duration: Duration,
    /// Number of entailment questions asked of the oracle.
    pub entailment_checks: usize,
    /// Number of hierarchy nodes expanded (tested exactly once each).
    pub nodes_expanded: usize,
    /// Number of nodes whose subtrees were pruned after a failed test.
    pub nodes_pruned: usize,
}
