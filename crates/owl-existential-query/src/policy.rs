//! Filler treatment policy.

/// Controls whether dominated (ancestor) fillers are kept in the result.
///
/// A pure configuration value with no lifecycle of its own: either every
/// entailed node is returned, or the result is reduced to its most specific
/// members after the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FillerTreatment {
    /// Return every entailed filler node, no reduction.
    All,

    /// Remove nodes that are strict ancestors of other nodes in the result,
    /// keeping only maximal-specificity fillers.
    MostSpecific,
}
