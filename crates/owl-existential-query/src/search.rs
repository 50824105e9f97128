//! Entailment-guided hierarchy search for existential fillers.

use std::collections::HashSet;
use std::time::Instant;

use owl_expr::{ClassExpression, Concept, ObjectProperty, RelationChain, SubClassOfAxiom};

use crate::error::SearchOutcome;
use crate::policy::FillerTreatment;
use crate::result::{SearchResult, SearchStats};
use crate::traits::ReasoningOracle;

/// Finds the filler concepts that make a templated existential statement
/// hold.
///
/// Given a query expression `Q` and a relation chain `[r1, ..., rn]`, the
/// search walks the subsumption hierarchy top-down and collects every node
/// `F` for which the oracle proves `Q ⊑ r1 some (... rn some F)`.
///
/// Pruning rests on a monotonicity assumption inherited from the domain: if
/// the test fails at a filler, no strict subclass of that filler is tried
/// either. This is not a theorem of description logic in general; it is what
/// makes the traversal tractable, and the search preserves it as-is.
///
/// The traversal uses an explicit work stack, so hierarchy depth is bounded
/// by the heap, not the call stack. A visited set keyed by representative
/// concept guarantees termination even when the oracle reports a subclass
/// relation that is not a strict DAG (equivalence cycles included). All
/// state is scoped to one call; nothing is cached across invocations.
///
/// # Example
///
/// ```ignore
/// use owl_existential_query::{FillerTreatment, HierarchySearch};
/// use owl_expr::{ClassExpression, Concept, ObjectProperty};
///
/// let search = HierarchySearch::new(&oracle);
/// let query = ClassExpression::class(Concept::new("Engine"));
/// let chain = [ObjectProperty::new("hasPart")];
///
/// let result = search.find_fillers(&query, &chain, FillerTreatment::MostSpecific)?;
/// for node in &result {
///     println!("filler: {node}");
/// }
/// ```
pub struct HierarchySearch<'a> {
    oracle: &'a dyn ReasoningOracle,
}

impl<'a> HierarchySearch<'a> {
    /// Creates a search over the given oracle.
    ///
    /// The oracle must be ready before the first call; the search performs
    /// no readiness checks of its own.
    pub fn new(oracle: &'a dyn ReasoningOracle) -> Self {
        Self { oracle }
    }

    /// Finds all fillers for `query` along `chain`.
    ///
    /// # Arguments
    ///
    /// * `query` - The subject of the entailment tests; immutable for the
    ///   duration of the search.
    /// * `chain` - Relation chain, outer-to-inner. Must be non-empty.
    /// * `treatment` - Whether to reduce the result to its most specific
    ///   members.
    ///
    /// # Errors
    ///
    /// * [`ExistentialQueryError::InvalidArgument`] if `chain` is empty,
    ///   before any oracle query is issued.
    /// * [`ExistentialQueryError::Oracle`] if any oracle query fails; the
    ///   whole call aborts and no partial result is returned.
    ///
    /// [`ExistentialQueryError::InvalidArgument`]: crate::ExistentialQueryError::InvalidArgument
    /// [`ExistentialQueryError::Oracle`]: crate::ExistentialQueryError::Oracle
    pub fn find_fillers(
        &self,
        query: &ClassExpression,
        chain: &[ObjectProperty],
        treatment: FillerTreatment,
    ) -> SearchOutcome<SearchResult> {
        let chain = RelationChain::new(chain.to_vec())?;
        let start = Instant::now();

        let mut stats = SearchStats::default();
        let mut result = SearchResult::empty();
        let mut visited: HashSet<Concept> = HashSet::new();

        let top = self.oracle.top();
        let mut stack: Vec<Concept> = vec![top.clone()];

        while let Some(filler) = stack.pop() {
            // At most one expansion per distinct representative.
            if !visited.insert(filler.clone()) {
                continue;
            }
            stats.nodes_expanded += 1;

            let restriction = chain.to_restriction(ClassExpression::class(filler.clone()));
            let axiom = SubClassOfAxiom::new(query.clone(), restriction);
            stats.entailment_checks += 1;
            if !self.oracle.is_entailed(&axiom)? {
                // Monotonicity assumption: a failed filler proves the whole
                // subtree fails, so it is pruned unexplored.
                stats.nodes_pruned += 1;
                continue;
            }

            // The universal concept is a filler whenever anything is; it is
            // the traversal root, not an answer.
            if filler != top {
                result.insert(self.oracle.equivalent_class(&filler)?);
            }
            for sub in self.oracle.direct_subclasses(&filler)? {
                stack.push(sub);
            }
        }

        if treatment == FillerTreatment::MostSpecific {
            self.reduce_to_most_specific(&mut result)?;
        }

        stats.duration = start.elapsed();
        result.stats = stats;
        Ok(result)
    }

    /// Single-relation convenience for [`find_fillers`](Self::find_fillers).
    pub fn find_fillers_for_property(
        &self,
        query: &ClassExpression,
        property: ObjectProperty,
        treatment: FillerTreatment,
    ) -> SearchOutcome<SearchResult> {
        self.find_fillers(query, &[property], treatment)
    }

    /// Runs [`find_fillers`](Self::find_fillers) and flattens the result to
    /// a sorted, display-ready concept list.
    pub fn filler_list(
        &self,
        query: &ClassExpression,
        chain: &[ObjectProperty],
        treatment: FillerTreatment,
    ) -> SearchOutcome<Vec<Concept>> {
        Ok(self.find_fillers(query, chain, treatment)?.flattened())
    }

    /// Removes every node that is a strict ancestor of another node in the
    /// result, keeping only maximal-specificity fillers.
    ///
    /// Post-hoc over the raw traversal result: each not-yet-consumed node
    /// serves once as a pivot, its full strict-ancestor set is fetched, and
    /// every ancestor found is deleted from the result. The outcome is
    /// invariant under iteration order; cost is one ancestor-set query per
    /// surviving pivot.
    fn reduce_to_most_specific(&self, result: &mut SearchResult) -> SearchOutcome<()> {
        let pivots = result.representatives();
        let mut removed: HashSet<Concept> = HashSet::new();

        for pivot in pivots {
            if removed.contains(&pivot) {
                continue;
            }
            removed.insert(pivot.clone());
            for ancestor in self.oracle.superclasses(&pivot, true)? {
                let representative = ancestor.representative();
                removed.insert(representative.clone());
                result.remove(representative);
            }
        }
        Ok(())
    }
}
