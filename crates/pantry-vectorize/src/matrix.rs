use crate::vocabulary::{IngredientVectorizer, PresenceVector};
use pantry_core::Recipe;

/// One 0/1 row per recipe, one column per vocabulary entry, stored row-major
/// in a single buffer.
#[derive(Debug, Clone)]
pub struct RecipeIngredientMatrix {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl RecipeIngredientMatrix {
    pub fn encode(vectorizer: &IngredientVectorizer, recipes: &[Recipe]) -> Self {
        let cols = vectorizer.vocabulary().len();
        let mut data = Vec::with_capacity(recipes.len() * cols);
        for recipe in recipes {
            let row = vectorizer.encode_iter(recipe.ingredients.iter().map(String::as_str));
            data.extend_from_slice(row.as_slice());
        }
        Self { data, rows: recipes.len(), cols }
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    pub fn row(&self, i: usize) -> &[u8] { &self.data[i * self.cols..(i + 1) * self.cols] }

    /// Matrix x vector: per-recipe count of ingredients present in `pantry`.
    ///
    /// # Panics
    ///
    /// If `pantry` was encoded against a vocabulary of another size than the
    /// one this matrix was built with.
    pub fn scores(&self, pantry: &PresenceVector) -> Vec<u32> {
        assert_eq!(pantry.dim(), self.cols, "pantry vector from a different vocabulary");
        if self.cols == 0 {
            return vec![0; self.rows];
        }
        self.data.chunks_exact(self.cols).map(|row| pantry.dot(row)).collect()
    }
}
