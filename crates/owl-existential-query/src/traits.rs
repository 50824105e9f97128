//! The reasoning oracle capability trait.
//!
//! This module defines the [`ReasoningOracle`] trait that must be
//! implemented by any reasoning backend the filler search runs against.
//!
//! # Architecture Note
//!
//! The search is oracle-agnostic: it only consumes the six operations below
//! and never manages the reasoner's lifecycle. Readiness checks belong to
//! the caller; a backend that is not ready reports
//! [`OracleError::Unavailable`] and the search aborts.
//!
//! # Example: Implementing ReasoningOracle
//!
//! ```ignore
//! use owl_existential_query::{EquivalenceClass, OracleResult, ReasoningOracle};
//! use owl_expr::{ClassExpression, Concept};
//!
//! impl ReasoningOracle for MyReasoner {
//!     fn top(&self) -> Concept {
//!         Concept::new("owl:Thing")
//!     }
//!
//!     fn is_satisfiable(&self, expr: &ClassExpression) -> OracleResult<bool> {
//!         self.backend.check_satisfiable(expr)
//!     }
//!
//!     fn equivalent_class(&self, concept: &Concept) -> OracleResult<EquivalenceClass> {
//!         self.backend.equivalents(concept)
//!     }
//!
//!     // ... direct_subclasses, superclasses ...
//! }
//! ```

use owl_expr::{builder, ClassExpression, Concept, SubClassOfAxiom};

use crate::error::OracleResult;
use crate::node::EquivalenceClass;

/// A reasoning backend capable of answering subsumption, satisfiability and
/// hierarchy-navigation questions.
///
/// All answers are reads: the search never mutates ontology state through
/// this trait. Every method except [`top`](Self::top) is fallible; errors
/// propagate uncaught through the search.
///
/// # Required Methods
///
/// - [`top`](Self::top) - The universal concept, root of every traversal
/// - [`is_satisfiable`](Self::is_satisfiable) - Consistency of an expression
/// - [`equivalent_class`](Self::equivalent_class) - A concept's equivalence partition
/// - [`direct_subclasses`](Self::direct_subclasses) - One representative per direct subclass node
/// - [`superclasses`](Self::superclasses) - Ancestor nodes, used by the most-specific reduction
///
/// # Provided Methods
///
/// [`is_entailed`](Self::is_entailed) defaults to the satisfiability
/// phrasing; backends with a native entailment check should override it.
pub trait ReasoningOracle: Send + Sync {
    /// Returns the universal concept (`owl:Thing` or the backend's
    /// equivalent), the root of the subsumption hierarchy.
    fn top(&self) -> Concept;

    /// True iff `expr` is consistent under the current ontology axioms.
    fn is_satisfiable(&self, expr: &ClassExpression) -> OracleResult<bool>;

    /// True iff the subsumption `axiom` is provable under the current
    /// ontology axioms.
    ///
    /// The default rephrases entailment as unsatisfiability:
    /// `sub ⊑ sup` holds iff `sub and (not sup)` is inconsistent. The two
    /// phrasings are interchangeable under classical DL semantics, so the
    /// search uses this single entry point for every test.
    fn is_entailed(&self, axiom: &SubClassOfAxiom) -> OracleResult<bool> {
        let test = ClassExpression::IntersectionOf(vec![
            axiom.sub.clone(),
            builder::complement_of(axiom.sup.clone()),
        ]);
        Ok(!self.is_satisfiable(&test)?)
    }

    /// Returns `concept`'s current equivalence partition.
    ///
    /// The returned node may be freshly built on every call; callers key on
    /// its representative, not its identity.
    fn equivalent_class(&self, concept: &Concept) -> OracleResult<EquivalenceClass>;

    /// Returns the direct subclasses of `concept`, one representative per
    /// direct-subclass equivalence class.
    fn direct_subclasses(&self, concept: &Concept) -> OracleResult<Vec<Concept>>;

    /// Returns `concept`'s superclass nodes.
    ///
    /// With `strict = true`, all strict ancestors (the transitive closure,
    /// excluding `concept`'s own node); with `strict = false`, direct
    /// parents only.
    fn superclasses(&self, concept: &Concept, strict: bool) -> OracleResult<Vec<EquivalenceClass>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Oracle that only knows satisfiability, to exercise the default
    /// entailment phrasing.
    struct SatOnlyOracle;

    impl ReasoningOracle for SatOnlyOracle {
        fn top(&self) -> Concept {
            Concept::new("owl:Thing")
        }

        fn is_satisfiable(&self, expr: &ClassExpression) -> OracleResult<bool> {
            // The only inconsistent expression this toy backend knows is
            // "Pump and (not Device)".
            Ok(expr.to_string() != "Pump and (not Device)")
        }

        fn equivalent_class(&self, concept: &Concept) -> OracleResult<EquivalenceClass> {
            Ok(EquivalenceClass::singleton(concept.clone()))
        }

        fn direct_subclasses(&self, _concept: &Concept) -> OracleResult<Vec<Concept>> {
            Ok(Vec::new())
        }

        fn superclasses(
            &self,
            _concept: &Concept,
            _strict: bool,
        ) -> OracleResult<Vec<EquivalenceClass>> {
            Ok(Vec::new())
        }
    }

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(Concept::new(name))
    }

    #[test]
    fn test_default_is_entailed_uses_satisfiability() {
        let oracle = SatOnlyOracle;

        let entailed = SubClassOfAxiom::new(class("Pump"), class("Device"));
        assert!(oracle.is_entailed(&entailed).unwrap());

        let not_entailed = SubClassOfAxiom::new(class("Device"), class("Pump"));
        assert!(!oracle.is_entailed(&not_entailed).unwrap());
    }

    #[test]
    fn test_trait_object_safe() {
        let oracle = SatOnlyOracle;
        let dynamic: &dyn ReasoningOracle = &oracle;
        assert_eq!(dynamic.top().as_str(), "owl:Thing");
    }
}
