use tracing::info;

use pantry_core::corpus;
use pantry_core::traits::IngredientEncoder;
use pantry_core::{Pantry, Recipe, Result};

use crate::matrix::RecipeIngredientMatrix;
use crate::vocabulary::{IngredientVectorizer, IngredientVocabulary, PresenceVector};

/// Immutable startup artifact: the corpus, its vocabulary, the encoded
/// matrix and each recipe's distinct ingredient count. Built once, then
/// shared read-only by every request.
#[derive(Debug, Clone)]
pub struct RecipeIndex {
    recipes: Vec<Recipe>,
    vectorizer: IngredientVectorizer,
    matrix: RecipeIngredientMatrix,
    distinct_counts: Vec<u32>,
}

impl RecipeIndex {
    pub fn build(recipes: Vec<Recipe>) -> Result<Self> {
        corpus::validate(&recipes)?;
        let vectorizer = IngredientVectorizer::new(IngredientVocabulary::fit(&recipes));
        let matrix = RecipeIngredientMatrix::encode(&vectorizer, &recipes);
        let distinct_counts: Vec<u32> =
            (0..matrix.rows()).map(|i| matrix.row(i).iter().map(|b| u32::from(*b)).sum::<u32>()).collect();
        info!(
            recipes = recipes.len(),
            ingredients = vectorizer.vocabulary().len(),
            "built recipe ingredient index"
        );
        Ok(Self { recipes, vectorizer, matrix, distinct_counts })
    }

    pub fn recipes(&self) -> &[Recipe] { &self.recipes }

    pub fn recipe(&self, i: usize) -> Option<&Recipe> { self.recipes.get(i) }

    pub fn len(&self) -> usize { self.recipes.len() }

    pub fn is_empty(&self) -> bool { self.recipes.is_empty() }

    pub fn vocabulary(&self) -> &IngredientVocabulary { self.vectorizer.vocabulary() }

    pub fn encoder(&self) -> &dyn IngredientEncoder { &self.vectorizer }

    pub fn matrix(&self) -> &RecipeIngredientMatrix { &self.matrix }

    /// Distinct ingredients per recipe, parallel to `recipes()`. A recipe can
    /// only be covered by a pantry whose similarity score reaches this count.
    pub fn distinct_counts(&self) -> &[u32] { &self.distinct_counts }

    pub fn encode_pantry(&self, pantry: &Pantry) -> PresenceVector {
        let items: Vec<&str> = pantry.iter().collect();
        PresenceVector::from(self.encoder().encode(&items))
    }
}
