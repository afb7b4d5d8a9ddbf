use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        member_nickname::{
            MemberNicknameDto, MemberNicknamePageDto, MemberNicknamePageQuery,
            UpdateMemberNicknameDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        scheduler::prune_restores::PENDING_RESTORE_MAX_AGE_DAYS,
        service::member_nickname::{MemberNicknameService, DEFAULT_PAGE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping member nickname endpoints in OpenAPI documentation
pub static MEMBER_NICKNAME_TAG: &str = "member_nickname";

/// List members currently renamed in voice, with the nickname they get back on leave.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/member-nicknames",
    tag = MEMBER_NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        MemberNicknamePageQuery
    ),
    responses(
        (status = 200, description = "Page of pending restores", body = MemberNicknamePageDto),
        (status = 400, description = "Invalid page or page size", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_nicknames(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<MemberNicknamePageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let page = MemberNicknameService::new(state.store.as_ref())
        .list(
            guild_id,
            query.page.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(PENDING_RESTORE_MAX_AGE_DAYS))))
}

/// Change the nickname a member gets back when leaving voice.
///
/// The value is trimmed; blank or `null` makes the restore clear the nickname. The
/// member's current nickname is not touched.
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/member-nicknames/{user_id}",
    tag = MEMBER_NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    request_body = UpdateMemberNicknameDto,
    responses(
        (status = 200, description = "Reset nickname updated", body = MemberNicknameDto),
        (status = 400, description = "Nickname longer than 32 characters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Member has no pending restore", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_nickname(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Json(payload): Json<UpdateMemberNicknameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let identity = MemberNicknameService::new(state.store.as_ref())
        .set_reset_nickname(guild_id, user_id, payload.reset_nickname.as_deref())
        .await?;

    tracing::debug!(
        "User {} changed the reset nickname of {} in guild {}",
        user.discord_id,
        user_id,
        guild_id
    );

    Ok((StatusCode::OK, Json(identity.into_member_dto())))
}

/// Drop a member's pending restore so they keep the assigned nickname.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/member-nicknames/{user_id}",
    tag = MEMBER_NICKNAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 204, description = "Pending restore removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Member has no pending restore", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member_nickname(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, user_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    MemberNicknameService::new(state.store.as_ref())
        .remove(guild_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
