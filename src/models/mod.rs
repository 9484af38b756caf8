// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Location, FitnessLevel, WorkoutStyle, SubScores, ScoredCandidate, Conversation, MatchStatus, ScoringWeights};
pub use requests::RankMatchesRequest;
pub use responses::{RankMatchesResponse, HealthResponse, ErrorResponse};
