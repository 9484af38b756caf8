use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Conversation, Profile};

/// Request to rank a candidate pool for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(nested)]
    pub requester: Profile,
    #[serde(default)]
    pub candidates: Vec<Profile>,
    /// Existing conversations of the requester; their other participants are excluded
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default, alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
    #[serde(default, alias = "search_term", rename = "searchTerm")]
    pub search_term: Option<String>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u16>,
}
