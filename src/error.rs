//! The crate-wide error type.

use thiserror::Error;

/// Everything that can go wrong in the tree, the word index, or the
/// pipeline around them.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty.
    #[error("missing required argument: {0}")]
    NullArgument(&'static str),

    /// The root was requested from a tree with no nodes.
    #[error("tree is empty")]
    EmptyTree,

    /// A cursor was advanced past its last element.
    #[error("iterator has no remaining elements")]
    IteratorExhausted,

    /// The report mode selector wasn't recognised.
    #[error("invalid report mode `{0}`: expected by-file, by-line or by-occurrence")]
    InvalidMode(String),

    /// An input file has more lines than a line number can address.
    #[error("too many lines in `{0}`")]
    TooManyLines(String),

    /// Reading input or a snapshot failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot payload couldn't be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// The snapshot was written by a newer version of this crate.
    #[error("Snapshot error: incompatible version {actual}, expected <= {expected}")]
    IncompatibleSnapshot {
        /// Newest version this build understands.
        expected: u32,
        /// Version found in the snapshot header.
        actual: u32,
    },

    /// The snapshot bytes don't describe a valid tree.
    #[error("Snapshot error: {0}")]
    CorruptSnapshot(String),
}

/// Result type alias for tree and index operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyTree.to_string(), "tree is empty");
        assert_eq!(
            Error::InvalidMode("-px".to_string()).to_string(),
            "invalid report mode `-px`: expected by-file, by-line or by-occurrence"
        );
        let err = Error::IncompatibleSnapshot {
            expected: 1,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "Snapshot error: incompatible version 7, expected <= 1"
        );
        assert_eq!(
            Error::TooManyLines("huge.txt".to_string()).to_string(),
            "too many lines in `huge.txt`"
        );
    }
}
