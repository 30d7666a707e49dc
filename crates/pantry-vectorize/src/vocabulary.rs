use std::collections::{BTreeSet, HashMap};

use pantry_core::traits::IngredientEncoder;
use pantry_core::Recipe;

/// Sorted set of every distinct ingredient in the corpus.
///
/// Column `j` of every vector is the `j`-th ingredient in lexicographic
/// order. Immutable once fitted.
#[derive(Debug, Clone, Default)]
pub struct IngredientVocabulary {
    names: Vec<String>,
    columns: HashMap<String, usize>,
}

impl IngredientVocabulary {
    pub fn fit(recipes: &[Recipe]) -> Self {
        let distinct: BTreeSet<&str> = recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().map(String::as_str))
            .collect();
        let names: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let columns = names.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect();
        Self { names, columns }
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn index_of(&self, ingredient: &str) -> Option<usize> { self.columns.get(ingredient).copied() }

    pub fn ingredient(&self, column: usize) -> Option<&str> { self.names.get(column).map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.names.iter().map(String::as_str) }
}

/// Dense 0/1 vector over an `IngredientVocabulary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceVector {
    bits: Vec<u8>,
}

impl PresenceVector {
    pub fn dim(&self) -> usize { self.bits.len() }

    pub fn get(&self, column: usize) -> bool { self.bits.get(column).is_some_and(|b| *b == 1) }

    /// Number of set bits.
    pub fn ones(&self) -> u32 { self.bits.iter().map(|b| u32::from(*b)).sum() }

    pub fn as_slice(&self) -> &[u8] { &self.bits }

    /// # Panics
    ///
    /// If `other` has a different length than this vector.
    pub fn dot(&self, other: &[u8]) -> u32 {
        assert_eq!(self.bits.len(), other.len(), "vectors from different vocabularies");
        self.bits.iter().zip(other).map(|(a, b)| u32::from(a & b)).sum()
    }
}

impl From<Vec<u8>> for PresenceVector {
    fn from(bits: Vec<u8>) -> Self { Self { bits } }
}

/// Encodes ingredient lists against the vocabulary fitted at startup.
///
/// There is no refit. Pantry vectors must share columns with the recipe
/// matrix, so both are encoded through the same instance.
#[derive(Debug, Clone)]
pub struct IngredientVectorizer {
    vocabulary: IngredientVocabulary,
}

impl IngredientVectorizer {
    pub fn new(vocabulary: IngredientVocabulary) -> Self { Self { vocabulary } }

    pub fn vocabulary(&self) -> &IngredientVocabulary { &self.vocabulary }

    pub fn encode_iter<'a, I>(&self, ingredients: I) -> PresenceVector
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bits = vec![0u8; self.vocabulary.len()];
        for name in ingredients {
            if let Some(col) = self.vocabulary.index_of(name) {
                bits[col] = 1;
            }
        }
        PresenceVector { bits }
    }
}

impl IngredientEncoder for IngredientVectorizer {
    fn dim(&self) -> usize { self.vocabulary.len() }

    fn encode(&self, ingredients: &[&str]) -> Vec<u8> { self.encode_iter(ingredients.iter().copied()).bits }
}
