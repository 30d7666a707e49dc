//! Domain types shared by the vectorizer, the predictors and the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Unique recipe identity. Ordering on ids is the tie-break used when two
/// recipes score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for RecipeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A corpus record.
///
/// - `id`: unique across the corpus
/// - `name`: display string, not necessarily unique
/// - `ingredients`: ingredient names; order and duplicates carry no meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(id: u64, name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: RecipeId(id),
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Distinct ingredient names.
    pub fn ingredient_set(&self) -> BTreeSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }
}

/// Ingredients a user has on hand.
///
/// Entries are whitespace-trimmed and matched case-sensitively: "Eggs" and
/// "eggs" are different ingredients unless the corpus was normalized first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    items: BTreeSet<String>,
}

impl Pantry {
    /// Parses comma-separated free text. Entries that are empty after
    /// trimming are dropped, so `""` and `" , "` both give an empty pantry.
    pub fn parse(text: &str) -> Self {
        Self::from_items(text.split(','))
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { items }
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(ingredient)
    }

    /// True when every ingredient of `recipe` is in the pantry.
    pub fn covers(&self, recipe: &Recipe) -> bool {
        recipe.ingredients.iter().all(|i| self.contains(i))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// One accepted recipe with the scores that placed it.
///
/// `similarity` is the number of the recipe's ingredients found in the
/// pantry; `predicted_rating` is the predictor's estimate for the
/// configured user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    pub id: RecipeId,
    pub name: String,
    pub similarity: u32,
    pub predicted_rating: f64,
}
