//! # owl-existential-query
//!
//! Entailment-guided existential filler search over a reasoned class
//! hierarchy.
//!
//! Given a query class expression `Q`, a relation chain `[r1, ..., rn]` and
//! a reasoning backend, [`HierarchySearch`] finds every equivalence class
//! `F` for which `Q ⊑ r1 some (... rn some F)` is entailed, optionally
//! reduced to the most specific such fillers.
//!
//! ## Key Properties
//!
//! - **Oracle-agnostic** - Any backend implementing [`ReasoningOracle`]
//!   works; the search only reads through it.
//! - **Query-frugal** - Each hierarchy node is tested at most once per
//!   call; a failed test prunes the node's whole subtree.
//! - **Terminating** - A visited set keyed by representative concept
//!   bounds the traversal even when the backend reports subclass cycles.
//! - **All-or-nothing** - Any oracle failure aborts the call; partial
//!   filler sets are never returned.
//!
//! ## Quick Start
//!
//! ```ignore
//! use owl_existential_query::{FillerTreatment, HierarchySearch};
//! use owl_expr::{ClassExpression, Concept, ObjectProperty};
//!
//! // An oracle backed by your reasoner of choice.
//! let oracle = MyReasonerAdapter::new(reasoner);
//! let search = HierarchySearch::new(&oracle);
//!
//! let query = ClassExpression::class(Concept::new("DieselEngine"));
//! let chain = [ObjectProperty::new("hasPart")];
//!
//! let result = search.find_fillers(&query, &chain, FillerTreatment::MostSpecific)?;
//! println!(
//!     "{} filler nodes, {} entailment checks",
//!     result.count(),
//!     result.stats.entailment_checks
//! );
//!
//! // Display-ready ordered list for a result view.
//! for concept in search.filler_list(&query, &chain, FillerTreatment::All)? {
//!     println!("{concept}");
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   owl-existential-query                    │
//! │                                                            │
//! │  HierarchySearch                                           │
//! │  ├── build chain restriction (owl-expr)                   │
//! │  ├── walk hierarchy top-down (via ReasoningOracle trait)  │
//! │  ├── prune subtrees on failed entailment tests            │
//! │  └── reduce to most-specific fillers (optional)           │
//! │                                                            │
//! │  Dependencies:                                             │
//! │  └── owl-expr - Concept, ClassExpression, RelationChain   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The search is single-threaded and synchronous: every oracle query blocks
//! the traversal, and no answer is cached across top-level calls. Callers
//! sharing one oracle between threads must serialize searches unless the
//! backend is proven safe for concurrent reads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod node;
mod policy;
mod result;
mod search;
mod traits;

// Public re-exports
pub use error::{ExistentialQueryError, OracleError, OracleResult, SearchOutcome};
pub use node::EquivalenceClass;
pub use policy::FillerTreatment;
pub use result::{SearchResult, SearchStats};
pub use search::HierarchySearch;
pub use traits::ReasoningOracle;

// Re-export commonly used types from the expression crate for convenience
pub use owl_expr::{ClassExpression, Concept, ObjectProperty, RelationChain, SubClassOfAxiom};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // Verify all public types are accessible
        let _: Option<FillerTreatment> = None;
        let _: Option<SearchResult> = None;
        let _: Option<SearchStats> = None;
        let _: Option<EquivalenceClass> = None;
        let _: Option<SearchOutcome<()>> = None;
    }

    #[test]
    fn test_re_exports() {
        // Verify re-exports work
        let concept = Concept::new("owl:Thing");
        assert_eq!(concept.as_str(), "owl:Thing");
        assert!(RelationChain::new(vec![]).is_err());
    }
}
