//! Relation chains and their nested existential form.

use std::fmt;

use crate::ast::{ClassExpression, ObjectProperty};
use crate::builder::some_values_from;
use crate::error::{ExprError, ExprResult};

/// An ordered, non-empty sequence of object properties, outer-to-inner.
///
/// A chain `[r1, r2, ..., rn]` applied to a filler `X` denotes the nested
/// existential restriction `r1 some (r2 some (... rn some X))`. The chain is
/// validated at construction; an empty chain is rejected rather than carried
/// around as a degenerate value.
///
/// # Example
///
/// ```rust
/// use owl_expr::{ClassExpression, Concept, ObjectProperty, RelationChain};
///
/// let chain = RelationChain::new(vec![
///     ObjectProperty::new("hasComponent"),
///     ObjectProperty::new("hasPart"),
/// ]).unwrap();
///
/// let expr = chain.to_restriction(ClassExpression::class(Concept::new("Valve")));
/// assert_eq!(expr.to_string(), "hasComponent some (hasPart some Valve)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationChain(Vec<ObjectProperty>);

impl RelationChain {
    /// Creates a chain from an ordered property list.
    ///
    /// Fails with [`ExprError::EmptyChain`] if the list is empty.
    pub fn new(properties: Vec<ObjectProperty>) -> ExprResult<Self> {
        if properties.is_empty() {
            return Err(ExprError::EmptyChain);
        }
        Ok(Self(properties))
    }

    /// Creates a single-property chain.
    pub fn single(property: ObjectProperty) -> Self {
        Self(vec![property])
    }

    /// Returns the properties, outer-to-inner.
    pub fn properties(&self) -> &[ObjectProperty] {
        &self.0
    }

    /// Returns the number of properties in the chain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Folds the chain into a nested existential restriction over `filler`.
    ///
    /// Pure and order-sensitive: the innermost restriction uses the last
    /// property, the outermost the first.
    pub fn to_restriction(&self, filler: ClassExpression) -> ClassExpression {
        self.0
            .iter()
            .rev()
            .fold(filler, |inner, property| {
                some_values_from(property.clone(), inner)
            })
    }
}

impl fmt::Display for RelationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " o ")?;
            }
            write!(f, "{property}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<ObjectProperty>> for RelationChain {
    type Error = ExprError;

    fn try_from(properties: Vec<ObjectProperty>) -> ExprResult<Self> {
        Self::new(properties)
    }
}
