//! FitMatch - workout partner ranking for a fitness matching app
//!
//! This library scores candidate profiles against a requesting user on
//! distance, fitness level, workout preferences, availability, workout
//! style and fitness goals, and ranks the pool by descending score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{MatchScorer, ScoringError, haversine_distance_m};
pub use crate::models::{Profile, Location, FitnessLevel, WorkoutStyle, ScoredCandidate, SubScores, ScoringWeights, RankMatchesRequest, RankMatchesResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let origin = Location::new(0.0, 0.0).unwrap();
        assert_eq!(haversine_distance_m(&origin, &origin), 0.0);
        assert!(MatchScorer::default().rank(&Profile::new("me"), vec![]).is_empty());
    }
}
