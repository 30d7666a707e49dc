//! pantry-hybrid
//!
//! Ingredient-coverage filter combined with a collaborative-filtering rating
//! predictor. Similarity only decides which recipes are admitted; the
//! predicted rating decides the final order.
use std::cmp::Reverse;
use std::sync::Arc;

use tracing::{debug, warn};

use pantry_core::config::RecommenderSettings;
use pantry_core::traits::RatingPredictor;
use pantry_core::{Error, Pantry, RankedRecipe, Recipe, Result};
use pantry_rating::TimeoutPredictor;
use pantry_vectorize::RecipeIndex;

pub struct RecommendationEngine {
    index: Arc<RecipeIndex>,
    predictor: Arc<dyn RatingPredictor>,
    settings: RecommenderSettings,
}

impl RecommendationEngine {
    /// Wraps `predictor` in a `TimeoutPredictor` when the settings carry a
    /// predictor timeout, capped at `predictor_max_in_flight` workers.
    pub fn new(index: Arc<RecipeIndex>, predictor: Arc<dyn RatingPredictor>, settings: RecommenderSettings) -> Self {
        let predictor: Arc<dyn RatingPredictor> = match settings.predictor_timeout() {
            Some(limit) => Arc::new(
                TimeoutPredictor::new(predictor, limit).with_max_in_flight(settings.predictor_max_in_flight),
            ),
            None => predictor,
        };
        Self { index, predictor, settings }
    }

    pub fn index(&self) -> &RecipeIndex { &self.index }

    pub fn settings(&self) -> &RecommenderSettings { &self.settings }

    /// Recipe names for a pantry given as separate items, best first.
    pub fn get_recommendations<S: AsRef<str>>(&self, pantry_items: &[S], desired_count: usize) -> Result<Vec<String>> {
        let pantry = Pantry::from_items(pantry_items);
        Ok(self.recommend(&pantry, desired_count)?.into_iter().map(|r| r.name).collect())
    }

    /// Parses comma-separated text and returns `default_count` names at most.
    pub fn recommend_text(&self, text: &str) -> Result<Vec<String>> {
        let items: Vec<&str> = text.split(',').collect();
        self.get_recommendations(&items, self.settings.default_count)
    }

    /// Admits up to `desired_count` recipes the pantry fully covers, then
    /// orders them by predicted rating (ties: lower recipe id first).
    ///
    /// An empty vec is a normal outcome. Candidates whose prediction fails are
    /// logged and left out; the rest of the request proceeds.
    pub fn recommend(&self, pantry: &Pantry, desired_count: usize) -> Result<Vec<RankedRecipe>> {
        if desired_count == 0 {
            return Err(Error::InvalidArgument("desired count must be at least 1".to_string()));
        }
        let scores = self.similarity_scores(pantry);
        let accepted: Vec<usize> = self
            .candidate_order(&scores)
            .into_iter()
            .filter(|&i| self.covers(pantry, &scores, i))
            .take(desired_count)
            .collect();
        debug!(pantry = pantry.len(), admitted = accepted.len(), desired_count, "coverage filter done");
        if accepted.is_empty() {
            return Ok(Vec::new());
        }

        let mut ranked: Vec<RankedRecipe> = accepted
            .into_iter()
            .filter_map(|i| self.rate(&self.index.recipes()[i], scores[i]))
            .collect();
        ranked.sort_by(|a, b| b.predicted_rating.total_cmp(&a.predicted_rating).then_with(|| a.id.cmp(&b.id)));
        ranked.truncate(desired_count);
        Ok(ranked)
    }

    /// Indices of every recipe the pantry fully covers, in admission order.
    pub fn admissible(&self, pantry: &Pantry) -> Vec<usize> {
        let scores = self.similarity_scores(pantry);
        self.candidate_order(&scores).into_iter().filter(|&i| self.covers(pantry, &scores, i)).collect()
    }

    pub fn similarity_scores(&self, pantry: &Pantry) -> Vec<u32> {
        let vector = self.index.encode_pantry(pantry);
        self.index.matrix().scores(&vector)
    }

    /// Recipe indices by similarity descending, ties by ascending recipe id.
    fn candidate_order(&self, scores: &[u32]) -> Vec<usize> {
        let recipes = self.index.recipes();
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by_key(|&i| (Reverse(scores[i]), recipes[i].id));
        order
    }

    /// Score below the distinct count rules a recipe out without touching
    /// the pantry set; otherwise every ingredient is checked by membership.
    fn covers(&self, pantry: &Pantry, scores: &[u32], i: usize) -> bool {
        scores[i] == self.index.distinct_counts()[i] && pantry.covers(&self.index.recipes()[i])
    }

    fn rate(&self, recipe: &Recipe, similarity: u32) -> Option<RankedRecipe> {
        match self.predictor.predict(&self.settings.user_identity, recipe.id) {
            Ok(rating) if rating.is_nan() => {
                warn!(recipe = %recipe.id, "predictor returned NaN, excluding candidate");
                None
            }
            Ok(predicted_rating) => Some(RankedRecipe {
                id: recipe.id,
                name: recipe.name.clone(),
                similarity,
                predicted_rating,
            }),
            Err(e) => {
                warn!(recipe = %recipe.id, error = %e, "excluding candidate");
                None
            }
        }
    }
}
