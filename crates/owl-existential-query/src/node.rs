//! Equivalence classes of concepts, as reported by a reasoning oracle.

use std::collections::BTreeSet;
use std::fmt;

use owl_expr::Concept;

/// A non-empty set of concepts the oracle currently considers logically
/// equivalent, with a designated representative.
///
/// Node identity for visited-sets and result deduplication is the
/// representative concept, never object identity: each oracle call may
/// return a freshly built node for the same equivalence class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalenceClass {
    representative: Concept,
    members: BTreeSet<Concept>,
}

impl EquivalenceClass {
    /// Creates an equivalence class from a representative and its members.
    ///
    /// The representative is always a member; it is inserted if the given
    /// member set does not already contain it.
    pub fn new(representative: Concept, members: impl IntoIterator<Item = Concept>) -> Self {
        let mut members: BTreeSet<Concept> = members.into_iter().collect();
        members.insert(representative.clone());
        Self {
            representative,
            members,
        }
    }

    /// Creates a single-member equivalence class.
    pub fn singleton(concept: Concept) -> Self {
        Self::new(concept, [])
    }

    /// Returns the designated representative concept.
    pub fn representative(&self) -> &Concept {
        &self.representative
    }

    /// Iterates over the members in sorted order.
    pub fn members(&self) -> impl Iterator<Item = &Concept> {
        self.members.iter()
    }

    /// True if `concept` belongs to this equivalence class.
    pub fn contains(&self, concept: &Concept) -> bool {
        self.members.contains(concept)
    }

    /// Number of members (at least 1).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; an equivalence class is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for EquivalenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let node = EquivalenceClass::singleton(Concept::new("A"));
        assert_eq!(node.representative().as_str(), "A");
        assert_eq!(node.len(), 1);
        assert!(node.contains(&Concept::new("A")));
    }

    #[test]
    fn test_representative_always_a_member() {
        let node = EquivalenceClass::new(Concept::new("A"), [Concept::new("B")]);
        assert_eq!(node.len(), 2);
        assert!(node.contains(&Concept::new("A")));
        assert!(node.contains(&Concept::new("B")));
    }

    #[test]
    fn test_members_sorted() {
        let node = EquivalenceClass::new(
            Concept::new("B"),
            [Concept::new("C"), Concept::new("A")],
        );
        let names: Vec<&str> = node.members().map(Concept::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_members_collapse() {
        let node = EquivalenceClass::new(
            Concept::new("A"),
            [Concept::new("B"), Concept::new("B"), Concept::new("A")],
        );
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn test_display() {
        let node = EquivalenceClass::new(Concept::new("B"), [Concept::new("A")]);
        assert_eq!(node.to_string(), "{A, B}");
    }
}
