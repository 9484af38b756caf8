use std::collections::HashSet;
use crate::models::{Profile, ScoringWeights, SubScores};
use crate::core::distance::{distance_between, distance_score};

/// Calculate every sub-score of `candidate` relative to `requester`
///
/// Returns the sub-scores together with the raw distance in meters,
/// which is None when either profile lacks a usable location.
pub fn calculate_sub_scores(
    requester: &Profile,
    candidate: &Profile,
    max_distance_m: f64,
) -> (SubScores, Option<f64>) {
    let distance_m = distance_between(requester.location.as_ref(), candidate.location.as_ref());

    let sub_scores = SubScores {
        distance: distance_score(distance_m, max_distance_m),
        fitness_level: exact_match_score(requester.fitness_level, candidate.fitness_level),
        preferences: overlap_ratio(&requester.preferences, &candidate.preferences),
        availability: overlap_ratio(&requester.availability, &candidate.availability),
        workout_style: exact_match_score(requester.workout_style, candidate.workout_style),
        fitness_goals: overlap_ratio(&requester.fitness_goals, &candidate.fitness_goals),
    };

    (sub_scores, distance_m)
}

/// Weighted total of the sub-scores, normalized by the weight sum
///
/// With the default weights this is
/// `0.5 * distance + 0.1 * (level + preferences + availability + style + goals)`.
pub fn weighted_total(sub_scores: &SubScores, weights: &ScoringWeights) -> f64 {
    let weight_sum: f64 = weights.as_array().iter().sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    let weighted = sub_scores.distance * weights.distance
        + sub_scores.fitness_level * weights.fitness_level
        + sub_scores.preferences * weights.preferences
        + sub_scores.availability * weights.availability
        + sub_scores.workout_style * weights.workout_style
        + sub_scores.fitness_goals * weights.fitness_goals;

    (weighted / weight_sum).clamp(0.0, 1.0)
}

/// 1 when both sides are present and equal, otherwise 0
#[inline]
pub fn exact_match_score<T: PartialEq>(requester: Option<T>, candidate: Option<T>) -> f64 {
    match (requester, candidate) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

/// Share of the requester's distinct values that the candidate also has
///
/// 0 when the requester has no values.
pub fn overlap_ratio(requester: &[String], candidate: &[String]) -> f64 {
    let wanted: HashSet<&str> = requester.iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return 0.0;
    }

    let offered: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let shared = wanted.intersection(&offered).count();

    shared as f64 / wanted.len() as f64
}

/// Candidate values also held by the requester, in candidate order without repeats
pub fn shared_values(requester: &[String], candidate: &[String]) -> Vec<String> {
    let wanted: HashSet<&str> = requester.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut shared = Vec::new();

    for value in candidate {
        if wanted.contains(value.as_str()) && seen.insert(value.as_str()) {
            shared.push(value.clone());
        }
    }

    shared
}
