use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        nickname::{AddNicknameDto, NicknamePoolDto, ResetNicknamesDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::nickname::NicknamePoolService,
        state::AppState,
    },
};

/// Tag for grouping nickname pool endpoints in OpenAPI documentation
pub static NICKNAME_TAG: &str = "nickname";

/// Get a guild's nickname pool.
///
/// New guilds start with the built-in default nicknames.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/nicknames",
    tag = NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Nickname pool", body = NicknamePoolDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nicknames(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let pool = NicknamePoolService::new(state.store.as_ref())
        .list(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(pool.into_dto())))
}

/// Add a nickname to a guild's pool.
///
/// The nickname is trimmed before it is validated and stored.
///
/// # Returns
/// - `201 Created` - Updated pool
/// - `400 Bad Request` - Empty nickname or longer than 32 characters
/// - `409 Conflict` - Nickname already in the pool
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/nicknames",
    tag = NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = AddNicknameDto,
    responses(
        (status = 201, description = "Nickname added", body = NicknamePoolDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 409, description = "Nickname already in the pool", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_nickname(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<AddNicknameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let service = NicknamePoolService::new(state.store.as_ref());
    service.add(guild_id, &payload.nickname).await?;
    let pool = service.list(guild_id).await?;

    Ok((StatusCode::CREATED, Json(pool.into_dto())))
}

/// Remove a nickname from a guild's pool.
///
/// The pool may become empty, in which case nobody is renamed.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/nicknames/{nickname}",
    tag = NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("nickname" = String, Path, description = "Nickname to remove, URL encoded")
    ),
    responses(
        (status = 200, description = "Nickname removed", body = NicknamePoolDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Nickname not in the pool", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_nickname(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, nickname)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let pool = NicknamePoolService::new(state.store.as_ref())
        .remove(guild_id, &nickname)
        .await?;

    Ok((StatusCode::OK, Json(pool.into_dto())))
}

/// Reset a guild's pool to the built-in defaults.
///
/// Requires `{ "confirm": true }` since every custom nickname is discarded.
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/nicknames-reset",
    tag = NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = ResetNicknamesDto,
    responses(
        (status = 200, description = "Pool reset to defaults", body = NicknamePoolDto),
        (status = 400, description = "Reset not confirmed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_nicknames(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<ResetNicknamesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let pool = NicknamePoolService::new(state.store.as_ref())
        .reset(guild_id, payload.confirm)
        .await?;

    tracing::info!(
        "User {} reset the nickname pool of guild {}",
        user.discord_id,
        guild_id
    );

    Ok((StatusCode::OK, Json(pool.into_dto())))
}
