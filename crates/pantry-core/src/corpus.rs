//! Startup checks on the recipe corpus.
//!
//! The corpus is handed over already loaded. Anything wrong with it is fatal:
//! an index is never built from a partially valid corpus.
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::Recipe;

pub fn validate(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        if !seen.insert(recipe.id) {
            return Err(Error::InvalidCorpus(format!("duplicate recipe id {}", recipe.id)));
        }
    }
    Ok(())
}
