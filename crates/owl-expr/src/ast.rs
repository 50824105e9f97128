//! Class expression AST types.
//!
//! The model is the fragment of OWL class expressions an existential filler
//! search needs: named classes, `some`-restrictions, intersections and
//! complements. Expressions are immutable values; structural equality is
//! logical identity for the purposes of this crate.

use std::fmt;
use std::sync::Arc;

/// An opaque identifier for a description-logic class.
///
/// Concepts are compared, hashed and ordered by their IRI string. Cloning is
/// cheap (reference counted), so concepts can be passed around freely during
/// hierarchy traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Concept(Arc<str>);

impl Concept {
    /// Creates a concept from its IRI (or any stable identifier string).
    pub fn new(iri: impl Into<Arc<str>>) -> Self {
        Self(iri.into())
    }

    /// Returns the concept's identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Concept {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

/// An opaque identifier for an object property (relation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectProperty(Arc<str>);

impl ObjectProperty {
    /// Creates an object property from its IRI.
    pub fn new(iri: impl Into<Arc<str>>) -> Self {
        Self(iri.into())
    }

    /// Returns the property's identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectProperty {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::Deserialize;

    use super::{Concept, ObjectProperty};

    impl serde::Serialize for Concept {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> serde::Deserialize<'de> for Concept {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(Concept::new)
        }
    }

    impl serde::Serialize for ObjectProperty {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> serde::Deserialize<'de> for ObjectProperty {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(ObjectProperty::new)
        }
    }
}

/// An OWL class expression.
///
/// Only the connectives needed to phrase existential filler queries are
/// modelled. The search engine builds `SomeValuesFrom` chains for its
/// entailment tests; `IntersectionOf` and `ComplementOf` exist so the
/// entailment question can be rephrased as a satisfiability question
/// (`sub ⊑ sup` iff `sub and (not sup)` is unsatisfiable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassExpression {
    /// A named class.
    Class(Concept),

    /// Existential restriction: `property some filler`.
    SomeValuesFrom {
        /// The restricted property.
        property: ObjectProperty,
        /// The filler expression.
        filler: Box<ClassExpression>,
    },

    /// Intersection of two or more expressions: `a and b and ...`.
    IntersectionOf(Vec<ClassExpression>),

    /// Complement: `not expr`.
    ComplementOf(Box<ClassExpression>),
}

impl ClassExpression {
    /// Wraps a named class as an expression.
    pub fn class(concept: Concept) -> Self {
        ClassExpression::Class(concept)
    }

    /// Returns the named concept if this expression is a bare class.
    pub fn as_class(&self) -> Option<&Concept> {
        match self {
            ClassExpression::Class(c) => Some(c),
            _ => None,
        }
    }

    /// True if the expression needs parentheses when embedded in another
    /// expression's rendering.
    fn is_compound(&self) -> bool {
        !matches!(self, ClassExpression::Class(_))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for ClassExpression {
    /// Manchester-style rendering: `hasPart some (A and (not B))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassExpression::Class(concept) => write!(f, "{concept}"),
            ClassExpression::SomeValuesFrom { property, filler } => {
                write!(f, "{property} some ")?;
                filler.fmt_operand(f)
            }
            ClassExpression::IntersectionOf(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " and ")?;
                    }
                    operand.fmt_operand(f)?;
                }
                Ok(())
            }
            ClassExpression::ComplementOf(inner) => {
                write!(f, "not ")?;
                inner.fmt_operand(f)
            }
        }
    }
}

impl From<Concept> for ClassExpression {
    fn from(concept: Concept) -> Self {
        ClassExpression::Class(concept)
    }
}

/// A subclass-of axiom: `sub ⊑ sup`.
///
/// This is the question shape handed to a reasoning oracle's entailment
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubClassOfAxiom {
    /// The candidate subclass.
    pub sub: ClassExpression,
    /// The candidate superclass.
    pub sup: ClassExpression,
}

impl SubClassOfAxiom {
    /// Creates a `sub ⊑ sup` axiom.
    pub fn new(sub: ClassExpression, sup: ClassExpression) -> Self {
        Self { sub, sup }
    }
}

impl fmt::Display for SubClassOfAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SubClassOf {}", self.sub, self.sup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(Concept::new(name))
    }

    #[test]
    fn test_concept_identity() {
        let a = Concept::new("A");
        let b = Concept::new("A");
        let c = Concept::new("C");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "A");
    }

    #[test]
    fn test_concept_ordering() {
        let mut concepts = vec![Concept::new("C"), Concept::new("A"), Concept::new("B")];
        concepts.sort();
        let names: Vec<&str> = concepts.iter().map(Concept::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_display_named_class() {
        assert_eq!(class("Valve").to_string(), "Valve");
    }

    #[test]
    fn test_display_some_values_from() {
        let expr = ClassExpression::SomeValuesFrom {
            property: ObjectProperty::new("hasPart"),
            filler: Box::new(class("Valve")),
        };
        assert_eq!(expr.to_string(), "hasPart some Valve");
    }

    #[test]
    fn test_display_nested_restriction_parenthesized() {
        let inner = ClassExpression::SomeValuesFrom {
            property: ObjectProperty::new("hasPart"),
            filler: Box::new(class("Valve")),
        };
        let outer = ClassExpression::SomeValuesFrom {
            property: ObjectProperty::new("hasComponent"),
            filler: Box::new(inner),
        };
        assert_eq!(
            outer.to_string(),
            "hasComponent some (hasPart some Valve)"
        );
    }

    #[test]
    fn test_display_intersection_and_complement() {
        let expr = ClassExpression::IntersectionOf(vec![
            class("Engine"),
            ClassExpression::ComplementOf(Box::new(class("Broken"))),
        ]);
        assert_eq!(expr.to_string(), "Engine and (not Broken)");
    }

    #[test]
    fn test_structural_equality() {
        let a = ClassExpression::SomeValuesFrom {
            property: ObjectProperty::new("hasPart"),
            filler: Box::new(class("Valve")),
        };
        let b = ClassExpression::SomeValuesFrom {
            property: ObjectProperty::new("hasPart"),
            filler: Box::new(class("Valve")),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_axiom_display() {
        let ax = SubClassOfAxiom::new(class("Pump"), class("Device"));
        assert_eq!(ax.to_string(), "Pump SubClassOf Device");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_concept_serde_round_trip() {
        let concept = Concept::new("http://example.org/Valve");
        let json = serde_json::to_string(&concept).unwrap();
        assert_eq!(json, "\"http://example.org/Valve\"");
        let back: Concept = serde_json::from_str(&json).unwrap();
        assert_eq!(back, concept);
    }
}
