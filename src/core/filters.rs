use std::collections::HashSet;
use crate::models::{Conversation, Profile};

/// Ids of every user the requester already shares a conversation with
///
/// Pending and accepted conversations both count, in either direction.
pub fn connected_user_ids(requester_id: &str, conversations: &[Conversation]) -> HashSet<String> {
    conversations
        .iter()
        .filter_map(|conv| {
            if conv.user1_id == requester_id {
                Some(conv.user2_id.clone())
            } else if conv.user2_id == requester_id {
                Some(conv.user1_id.clone())
            } else {
                None
            }
        })
        .filter(|id| id != requester_id)
        .collect()
}

/// Drop the requester and every excluded id from the pool, keeping order
pub fn prepare_pool(
    requester_id: &str,
    candidates: Vec<Profile>,
    excluded: &HashSet<String>,
) -> Vec<Profile> {
    candidates
        .into_iter()
        .filter(|profile| profile.id != requester_id && !excluded.contains(&profile.id))
        .collect()
}

/// Case-insensitive name search used by the match list
///
/// A blank term matches everyone.
#[inline]
pub fn matches_search_term(profile: &Profile, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    profile
        .name
        .as_deref()
        .map(|name| name.to_lowercase().contains(&term.to_lowercase()))
        .unwrap_or(false)
}
