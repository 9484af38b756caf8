use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{connected_user_ids, matches_search_term, prepare_pool, MatchScorer};
use crate::models::{ErrorResponse, HealthResponse, RankMatchesRequest, RankMatchesResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: MatchScorer,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "requester": { "id": "string", "location": { "lat": 0.0, "lon": 0.0 }, ... },
///   "candidates": [ { "id": "string", ... } ],
///   "conversations": [ { "user1_id": "string", "user2_id": "string" } ],
///   "excludeUserIds": ["string"],
///   "searchTerm": "string",
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let RankMatchesRequest {
        requester,
        candidates,
        conversations,
        exclude_user_ids,
        search_term,
        limit,
    } = req.into_inner();

    let user_id = requester.id.clone();
    let limit = limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    tracing::info!(%request_id, "Ranking matches for user: {}, limit: {}", user_id, limit);

    let mut excluded = connected_user_ids(&user_id, &conversations);
    excluded.extend(exclude_user_ids);

    let total_candidates = candidates.len();
    let pool = prepare_pool(&user_id, candidates, &excluded);

    tracing::debug!(
        %request_id,
        "Excluded {} of {} candidates for user {}",
        total_candidates - pool.len(),
        total_candidates,
        user_id
    );

    let scorer = state.scorer.clone();
    let ranked = match web::block(move || scorer.rank(&requester, pool)).await {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!(%request_id, "Ranking failed for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Ranking failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let total_ranked = ranked.len();
    let term = search_term.unwrap_or_default();
    let matches: Vec<_> = ranked
        .into_iter()
        .filter(|m| matches_search_term(&m.candidate, &term))
        .take(limit)
        .collect();

    tracing::info!(
        %request_id,
        "Returning {} matches for user {} (from {} ranked candidates)",
        matches.len(),
        user_id,
        total_ranked
    );

    HttpResponse::Ok().json(RankMatchesResponse {
        request_id,
        matches,
        total_candidates,
        total_ranked,
    })
}
