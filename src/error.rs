use thiserror::Error;

/// Errors raised while building, training or evaluating a perceptron.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// An input vector does not have one value per weight.
    #[error("dimension mismatch: expected {expected} inputs, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("label count mismatch: {inputs} inputs but {labels} labels")]
    LabelCountMismatch { inputs: usize, labels: usize },

    #[error("dataset has no examples")]
    EmptyDataset,

    /// A perceptron needs at least one input feature.
    #[error("input size must be at least 1")]
    InvalidInputSize,

    #[error("unknown activation function: {0:?}")]
    InvalidActivation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
