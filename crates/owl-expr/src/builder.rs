//! Pure constructors for class expressions and axioms.
//!
//! Every function here is referentially transparent: the same inputs always
//! produce a structurally equal value, with no hidden state. The search
//! engine relies on this when it rebuilds the same chain expression for
//! different fillers and when it rephrases entailment as satisfiability.

use crate::ast::{ClassExpression, ObjectProperty, SubClassOfAxiom};
use crate::error::{ExprError, ExprResult};

/// Builds the existential restriction `property some filler`.
pub fn some_values_from(property: ObjectProperty, filler: ClassExpression) -> ClassExpression {
    ClassExpression::SomeValuesFrom {
        property,
        filler: Box::new(filler),
    }
}

/// Builds the intersection `a and b and ...` of two or more operands.
///
/// Fails with [`ExprError::EmptyIntersection`] for fewer than two operands;
/// a zero- or one-operand "intersection" is a caller mistake, not a
/// degenerate expression.
pub fn intersection_of(operands: Vec<ClassExpression>) -> ExprResult<ClassExpression> {
    if operands.len() < 2 {
        return Err(ExprError::EmptyIntersection {
            operands: operands.len(),
        });
    }
    Ok(ClassExpression::IntersectionOf(operands))
}

/// Builds the complement `not expr`.
pub fn complement_of(expr: ClassExpression) -> ClassExpression {
    ClassExpression::ComplementOf(Box::new(expr))
}

/// Builds the axiom `sub ⊑ sup`.
pub fn sub_class_of(sub: ClassExpression, sup: ClassExpression) -> SubClassOfAxiom {
    SubClassOfAxiom::new(sub, sup)
}
