//! Error types for path resolution

use std::fmt;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a path segment could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// A name segment did not match a record member, map key or JSON object key.
    MemberNotFound,
    /// An index segment fell outside `[0, len)` or was applied to a non-sequence.
    IndexOutOfRange,
    /// A JSON array index was out of bounds, or a non-terminal segment hit a JSON leaf.
    InvalidIndex,
    /// A segment was applied to a null value.
    NullTraversal,
    /// A JSON number could not be represented as a decimal.
    InvalidNumber,
}

impl Reason {
    fn describe(self, segment: &str) -> String {
        match self {
            Reason::MemberNotFound => format!("Property or field '{}' not found.", segment),
            Reason::IndexOutOfRange | Reason::InvalidIndex => {
                format!("Invalid array index '{}'.", segment)
            }
            Reason::NullTraversal => format!("Cannot access '{}' on a null value.", segment),
            Reason::InvalidNumber => {
                format!("Number at '{}' does not fit in a decimal.", segment)
            }
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reason::MemberNotFound => "member not found",
            Reason::IndexOutOfRange => "index out of range",
            Reason::InvalidIndex => "invalid index",
            Reason::NullTraversal => "null traversal",
            Reason::InvalidNumber => "invalid number",
        };
        f.write_str(name)
    }
}

/// Path resolution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid object path ({reason}): {}", .reason.describe(.segment))]
    InvalidObjectPath { reason: Reason, segment: String },
}

impl Error {
    pub fn new(reason: Reason, segment: impl Into<String>) -> Self {
        Error::InvalidObjectPath {
            reason,
            segment: segment.into(),
        }
    }

    pub fn member_not_found(segment: impl Into<String>) -> Self {
        Self::new(Reason::MemberNotFound, segment)
    }

    pub fn index_out_of_range(segment: impl Into<String>) -> Self {
        Self::new(Reason::IndexOutOfRange, segment)
    }

    pub fn invalid_index(segment: impl Into<String>) -> Self {
        Self::new(Reason::InvalidIndex, segment)
    }

    pub fn null_traversal(segment: impl Into<String>) -> Self {
        Self::new(Reason::NullTraversal, segment)
    }

    pub fn invalid_number(segment: impl Into<String>) -> Self {
        Self::new(Reason::InvalidNumber, segment)
    }

    pub fn reason(&self) -> Reason {
        match self {
            Error::InvalidObjectPath { reason, .. } => *reason,
        }
    }

    /// The segment text that failed to resolve.
    pub fn segment(&self) -> &str {
        match self {
            Error::InvalidObjectPath { segment, .. } => segment,
        }
    }
}
