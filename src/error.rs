use std::fmt;

/// The first structural invariant found broken by
/// [`validate`](crate::validate) or [`validate_balanced`](crate::validate_balanced).
///
/// `depth` counts nodes from the root, which sits at depth 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A key is not strictly inside the bounds set by its ancestors.
    Unordered { depth: usize },
    /// A cached height disagrees with the heights of the node's children.
    StaleHeight {
        depth: usize,
        cached: usize,
        actual: usize,
    },
    /// Subtree heights differ by more than one.
    Unbalanced { depth: usize, balance: isize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unordered { depth } => {
                write!(f, "key at depth {depth} is out of order")
            }
            Self::StaleHeight { depth, cached, actual } => write!(
                f,
                "node at depth {depth} caches height {cached} but has height {actual}"
            ),
            Self::Unbalanced { depth, balance } => {
                write!(f, "node at depth {depth} has balance factor {balance}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            InvariantViolation::Unordered { depth: 3 }.to_string(),
            "key at depth 3 is out of order"
        );
        assert_eq!(
            InvariantViolation::StaleHeight {
                depth: 1,
                cached: 4,
                actual: 3
            }
            .to_string(),
            "node at depth 1 caches height 4 but has height 3"
        );
        assert_eq!(
            InvariantViolation::Unbalanced { depth: 2, balance: -2 }.to_string(),
            "node at depth 2 has balance factor -2"
        );
    }
}
