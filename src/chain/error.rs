//! Error types for chain traversal and selection.
//!
//! This module provides the error values surfaced by the chain operations.
//! Absent results that are ordinary domain answers (a cycle detector finding
//! no cycle) are expressed as `Option` at the call site, not as errors.

/// Represents a kth-to-last selection that has no answer.
///
/// Returned when `k` is zero or exceeds the chain's length, so the
/// offset-from-the-end walk completes without a match.
///
/// # Examples
///
/// ```rust
/// use relink::chain::IndexNotFound;
///
/// let error = IndexNotFound {
///     requested: 6,
///     length: 5,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "index 6 from the end not found in a chain of length 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNotFound {
    /// The offset from the end that was requested (1 is the last node).
    pub requested: usize,
    /// The length of the chain that was searched.
    pub length: usize,
}

impl std::fmt::Display for IndexNotFound {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} from the end not found in a chain of length {}",
            self.requested, self.length
        )
    }
}

impl std::error::Error for IndexNotFound {}

/// Represents a bounded traversal that gave up before reaching a terminal
/// link.
///
/// Returned by [`ChainArena::try_chain_len`] when the walk consumes its
/// entire step budget without finding a node whose successor is absent. The
/// usual cause is a cyclic chain handed to a caller that expected an acyclic
/// one.
///
/// [`ChainArena::try_chain_len`]: crate::chain::ChainArena::try_chain_len
///
/// # Examples
///
/// ```rust
/// use relink::chain::StepLimitExceeded;
///
/// let error = StepLimitExceeded { limit: 64 };
/// assert_eq!(
///     format!("{}", error),
///     "traversal exceeded 64 steps without reaching a terminal link"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLimitExceeded {
    /// The step budget that was exhausted.
    pub limit: usize,
}

impl std::fmt::Display for StepLimitExceeded {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "traversal exceeded {} steps without reaching a terminal link",
            self.limit
        )
    }
}

impl std::error::Error for StepLimitExceeded {}

/// Represents errors that can occur when operating on chains.
///
/// This enum provides a unified error type over the specific chain errors.
/// Each operation returns its specific error type directly; the enum exists
/// for callers that funnel several operations through one error channel.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainError, IndexNotFound};
///
/// let error = ChainError::IndexNotFound(IndexNotFound {
///     requested: 3,
///     length: 2,
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A kth-to-last selection found no node at the requested offset.
    IndexNotFound(IndexNotFound),
    /// A bounded traversal exhausted its step budget.
    StepLimitExceeded(StepLimitExceeded),
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexNotFound(error) => write!(formatter, "{error}"),
            Self::StepLimitExceeded(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<IndexNotFound> for ChainError {
    fn from(error: IndexNotFound) -> Self {
        Self::IndexNotFound(error)
    }
}

impl From<StepLimitExceeded> for ChainError {
    fn from(error: StepLimitExceeded) -> Self {
        Self::StepLimitExceeded(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_not_found_display() {
        let error = IndexNotFound {
            requested: 6,
            length: 5,
        };
        assert_eq!(
            format!("{error}"),
            "index 6 from the end not found in a chain of length 5"
        );
    }

    #[test]
    fn test_step_limit_exceeded_display() {
        let error = StepLimitExceeded { limit: 10 };
        assert_eq!(
            format!("{error}"),
            "traversal exceeded 10 steps without reaching a terminal link"
        );
    }

    #[test]
    fn test_chain_error_display_matches_inner() {
        let inner = IndexNotFound {
            requested: 1,
            length: 0,
        };
        let error = ChainError::from(inner.clone());
        assert_eq!(format!("{error}"), format!("{inner}"));
    }

    #[test]
    fn test_chain_error_from_step_limit() {
        let inner = StepLimitExceeded { limit: 4 };
        let error: ChainError = inner.clone().into();
        assert_eq!(error, ChainError::StepLimitExceeded(inner));
    }
}
