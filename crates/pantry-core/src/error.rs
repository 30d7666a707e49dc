use thiserror::Error;

use crate::types::RecipeId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// For front ends that validate raw request text before building a
    /// `Pantry`. Parsing in this workspace never fails: blank pantry text is a
    /// valid, empty pantry.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rating predictor unavailable for recipe {recipe}: {reason}")]
    PredictorUnavailable { recipe: RecipeId, reason: String },

    #[error("Invalid recipe corpus: {0}")]
    InvalidCorpus(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
