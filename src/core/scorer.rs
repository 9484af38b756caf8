use rayon::prelude::*;
use thiserror::Error;
use crate::models::{Profile, ScoredCandidate, ScoringWeights};
use crate::core::{
    distance::DEFAULT_MAX_DISTANCE_M,
    scoring::{calculate_sub_scores, shared_values, weighted_total},
};

/// Pools at least this large are scored on the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Errors raised when building a scorer from configuration
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid max distance: {0} (must be a positive number of meters)")]
    InvalidMaxDistance(f64),
}

/// Ranks candidate workout partners for a requesting user
///
/// Scoring is a pure function of the two profiles and the configured
/// weights, so one scorer can be shared freely across requests.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    weights: ScoringWeights,
    max_distance_m: f64,
    parallel_threshold: usize,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights, max_distance_m: f64) -> Result<Self, ScoringError> {
        validate_weights(&weights)?;

        if !max_distance_m.is_finite() || max_distance_m <= 0.0 {
            return Err(ScoringError::InvalidMaxDistance(max_distance_m));
        }

        Ok(Self {
            weights,
            max_distance_m,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the pool size from which scoring runs in parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn max_distance_m(&self) -> f64 {
        self.max_distance_m
    }

    /// Total compatibility of `candidate` for `requester`, in [0, 1]
    pub fn score(&self, requester: &Profile, candidate: &Profile) -> f64 {
        let (sub_scores, _) = calculate_sub_scores(requester, candidate, self.max_distance_m);
        weighted_total(&sub_scores, &self.weights)
    }

    /// Score one candidate and keep the breakdown alongside it
    pub fn score_candidate(&self, requester: &Profile, candidate: Profile) -> ScoredCandidate {
        let (sub_scores, distance_m) =
            calculate_sub_scores(requester, &candidate, self.max_distance_m);
        let score = weighted_total(&sub_scores, &self.weights);
        let shared_preferences = shared_values(&requester.preferences, &candidate.preferences);

        ScoredCandidate {
            candidate,
            score,
            sub_scores,
            distance_m,
            shared_preferences,
        }
    }

    /// Rank a candidate pool by descending score
    ///
    /// Every candidate is returned; excluding the requester and existing
    /// connections is up to the caller. Equal scores keep their input order.
    pub fn rank(&self, requester: &Profile, candidates: Vec<Profile>) -> Vec<ScoredCandidate> {
        let pool_size = candidates.len();

        let mut ranked: Vec<ScoredCandidate> = if pool_size >= self.parallel_threshold {
            candidates
                .into_par_iter()
                .map(|candidate| self.score_candidate(requester, candidate))
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|candidate| self.score_candidate(requester, candidate))
                .collect()
        };

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Ranked {} candidates for {} (top score: {:.3})",
            pool_size,
            requester.id,
            ranked.first().map(|m| m.score).unwrap_or(0.0)
        );

        ranked
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn validate_weights(weights: &ScoringWeights) -> Result<(), ScoringError> {
    let values = weights.as_array();

    if let Some(bad) = values.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ScoringError::InvalidWeights(format!(
            "weights must be finite and non-negative, got {}",
            bad
        )));
    }

    if values.iter().sum::<f64>() <= 0.0 {
        return Err(ScoringError::InvalidWeights(
            "at least one weight must be positive".to_string(),
        ));
    }

    Ok(())
}
