//! pantry-rating
//!
//! Rating predictors the engine can be wired to. Model training happens
//! elsewhere; these only serve estimates.
mod table;
mod timeout;

pub use table::{EstimateTable, Prediction};
pub use timeout::{TimeoutPredictor, DEFAULT_MAX_IN_FLIGHT};
