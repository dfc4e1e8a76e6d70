use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    dto::clan::{ClanResponse, CreateClan, SearchClans},
    error::AppError,
    models::Clan,
    state::AppState,
    usecases,
};

fn to_responses(clans: Vec<Clan>) -> Json<Vec<ClanResponse>> {
    Json(clans.into_iter().map(ClanResponse::from).collect())
}

pub async fn create_clan(
    State(state): State<AppState>,
    payload: Result<Json<CreateClan>, JsonRejection>,
) -> Result<(StatusCode, Json<ClanResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let input = payload.validate()?;

    let clan = usecases::clan::create(&state.db, &input).await?;

    Ok((StatusCode::CREATED, Json(clan.into())))
}

pub async fn list_clans(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClanResponse>>, AppError> {
    let clans = usecases::clan::list_all(&state.db).await?;

    Ok(to_responses(clans))
}

pub async fn search_clans(
    State(state): State<AppState>,
    query: Result<Query<SearchClans>, QueryRejection>,
) -> Result<Json<Vec<ClanResponse>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = query.validate()?;

    let clans = usecases::clan::search_by_name(&state.db, &query.name).await?;

    Ok(to_responses(clans))
}

pub async fn delete_clan(
    State(state): State<AppState>,
    Path(clan_id): Path<String>,
) -> Result<StatusCode, AppError> {
    remove(&state, &clan_id).await
}

/// `/clans/search` shadows `/clans/{clan_id}`, so a delete aimed at it is
/// treated as a delete of the id "search".
pub async fn delete_search(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    remove(&state, "search").await
}

async fn remove(state: &AppState, clan_id: &str) -> Result<StatusCode, AppError> {
    let clan_id = Uuid::parse_str(clan_id)
        .map_err(|e| AppError::Validation(format!("invalid clan id: {e}")))?;

    if !usecases::clan::delete(&state.db, clan_id).await? {
        return Err(AppError::NotFound("Clan not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}
