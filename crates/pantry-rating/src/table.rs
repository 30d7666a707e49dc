use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pantry_core::traits::RatingPredictor;
use pantry_core::{RecipeId, Result};

/// One exported estimate of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub user: String,
    pub recipe: RecipeId,
    pub estimate: f64,
}

/// Precomputed estimates keyed by `(user, recipe)`.
///
/// Pairs the model never saw get `global_mean`, the way a collaborative
/// filtering model falls back to the mean rating for unknown users or items.
#[derive(Debug, Clone, Default)]
pub struct EstimateTable {
    estimates: HashMap<(String, RecipeId), f64>,
    global_mean: f64,
}

impl EstimateTable {
    /// Global mean defaults to the mean of the supplied estimates (0.0 when empty).
    pub fn new<I>(predictions: I) -> Self
    where
        I: IntoIterator<Item = Prediction>,
    {
        let estimates: HashMap<(String, RecipeId), f64> =
            predictions.into_iter().map(|p| ((p.user, p.recipe), p.estimate)).collect();
        let global_mean = if estimates.is_empty() {
            0.0
        } else {
            estimates.values().sum::<f64>() / estimates.len() as f64
        };
        Self { estimates, global_mean }
    }

    pub fn with_global_mean(mut self, mean: f64) -> Self {
        self.global_mean = mean;
        self
    }

    pub fn insert(&mut self, user: impl Into<String>, recipe: RecipeId, estimate: f64) {
        self.estimates.insert((user.into(), recipe), estimate);
    }

    pub fn global_mean(&self) -> f64 { self.global_mean }

    pub fn len(&self) -> usize { self.estimates.len() }

    pub fn is_empty(&self) -> bool { self.estimates.is_empty() }
}

impl RatingPredictor for EstimateTable {
    fn predict(&self, user: &str, recipe: RecipeId) -> Result<f64> {
        Ok(self
            .estimates
            .get(&(user.to_string(), recipe))
            .copied()
            .unwrap_or(self.global_mean))
    }
}
