//! # owl-expr
//!
//! A small OWL class expression model for existential filler queries.
//!
//! This crate provides the expression vocabulary consumed by the
//! [`owl-existential-query`] search engine:
//!
//! - **Entities**: [`Concept`] and [`ObjectProperty`], opaque IRI-keyed
//!   identifiers.
//! - **Class expressions**: [`ClassExpression`] covering named classes,
//!   existential restrictions, intersections and complements.
//! - **Axioms**: [`SubClassOfAxiom`], the entailment question a reasoner
//!   answers.
//! - **Relation chains**: [`RelationChain`], a validated non-empty property
//!   sequence that folds into a nested existential restriction.
//!
//! All constructors are pure: the same inputs always produce structurally
//! equal expressions, so expressions are usable as map keys and cache-free
//! query descriptors.
//!
//! ## Usage
//!
//! ```rust
//! use owl_expr::{builder, ClassExpression, Concept, ObjectProperty, RelationChain};
//!
//! let has_part = ObjectProperty::new("hasPart");
//! let valve = ClassExpression::class(Concept::new("Valve"));
//!
//! // hasPart some Valve
//! let expr = builder::some_values_from(has_part.clone(), valve.clone());
//! assert_eq!(expr.to_string(), "hasPart some Valve");
//!
//! // A two-step chain nests outer-to-inner.
//! let chain = RelationChain::new(vec![
//!     ObjectProperty::new("hasComponent"),
//!     has_part,
//! ]).unwrap();
//! let nested = chain.to_restriction(valve);
//! assert_eq!(nested.to_string(), "hasComponent some (hasPart some Valve)");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
pub mod builder;
mod chain;
mod error;

pub use ast::{ClassExpression, Concept, ObjectProperty, SubClassOfAxiom};
pub use chain::RelationChain;
pub use error::{ExprError, ExprResult};
