use thiserror::Error;

/// Possible errors that arise when grouping attributes into domains.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    /// There are no attributes to cluster.
    #[error("The dataset provided is empty")]
    EmptyDataset,

    /// The relative tree cut threshold is not a number in the range 0 to 1.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Score vectors do not all have the same length.
    #[error("Score vectors have mismatched dimensions: {0}")]
    WrongDimension(String),

    /// A linkage refers to an observation that does not exist.
    #[error("Invalid linkage: {0}")]
    InvalidLinkage(String),

    /// Resolving the parent forest did not terminate at a root. This points at a defect in the
    /// linkages that built the forest rather than at the input data.
    #[error("Inconsistent parent forest: {0}")]
    InconsistentParents(String),
}
