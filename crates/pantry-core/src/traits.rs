use crate::error::Result;
use crate::types::RecipeId;

/// Encodes an ingredient list into a fixed-length 0/1 presence vector.
///
/// `dim` is fixed for the lifetime of the encoder and every vector returned
/// by `encode` has exactly that many entries. Names the encoder has never
/// seen set no bit.
pub trait IngredientEncoder: Send + Sync {
    fn dim(&self) -> usize;
    fn encode(&self, ingredients: &[&str]) -> Vec<u8>;
}

/// Black-box collaborative-filtering model.
///
/// Returns the estimated rating `user` would give `recipe`. Higher is better;
/// the value is not clamped to any rating scale.
pub trait RatingPredictor: Send + Sync {
    fn predict(&self, user: &str, recipe: RecipeId) -> Result<f64>;
}
