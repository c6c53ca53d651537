use thiserror::Error;

/// Errors returned by the spanning-tree engine.
///
/// Every variant signals caller misuse of a structure, not a data condition:
/// a disconnected input graph is *not* an error (the algorithms return a
/// spanning forest), so no variant exists for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `pop` was called on an empty priority queue.
    ///
    /// The MST algorithms check `is_empty` before popping in their main
    /// loops, so this only surfaces from direct use of [`crate::Heap`].
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    /// A dense-indexed structure was queried with an out-of-range index.
    #[error("vertex index {index} out of range for {len} elements")]
    InvalidVertex {
        /// The offending index.
        index: usize,
        /// Number of elements in the structure.
        len: usize,
    },

    /// A typed structure was queried with a vertex it has never seen.
    #[error("vertex is not present in this structure")]
    UnknownVertex,

    /// The geographic planner was given no sites to connect.
    #[error("no sites to plan a network over")]
    EmptySites,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
