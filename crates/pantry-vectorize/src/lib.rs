//! pantry-vectorize
//!
//! Shared ingredient vector space. The vocabulary is fitted once on the full
//! recipe corpus; recipes and pantries are both encoded against it.
mod index;
mod matrix;
mod vocabulary;

pub use index::RecipeIndex;
pub use matrix::RecipeIngredientMatrix;
pub use vocabulary::{IngredientVectorizer, IngredientVocabulary, PresenceVector};
