use crate::differentiation::Index;

use thiserror::Error;

/**
 * An error building or walking a computational graph of Records.
 *
 * Numbers outside a function's domain are never errors, they produce `NaN` or `±Inf`
 * like `f64` does. These are only for Records which can't be put in a graph.
 */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Records from two different WengertLists were combined
    #[error("Records must be using the same WengertList")]
    MixedLists,

    /// A Record refers to an index which is no longer on its WengertList
    #[error(
        "Record {index} is no longer on its WengertList of length {len}, was the list cleared?"
    )]
    StaleRecord {
        /// The Record's index
        index: Index,
        /// The current length of the WengertList
        len: usize,
    },
}
