// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod scorer;
pub mod scoring;

pub use distance::{haversine_distance_m, distance_between, distance_score, DEFAULT_MAX_DISTANCE_M};
pub use filters::{connected_user_ids, prepare_pool, matches_search_term};
pub use scorer::{MatchScorer, ScoringError, DEFAULT_PARALLEL_THRESHOLD};
pub use scoring::{calculate_sub_scores, weighted_total, overlap_ratio, exact_match_score, shared_values};
