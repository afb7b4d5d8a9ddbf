use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, settings::ExcludedChannelDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::guild_settings::ServerSettings,
        service::settings::ServerSettingsService, state::AppState,
    },
};

/// Tag for grouping excluded channel endpoints in OpenAPI documentation
pub static EXCLUDED_CHANNEL_TAG: &str = "excluded_channel";

fn into_channel_dtos(settings: ServerSettings) -> Vec<ExcludedChannelDto> {
    settings
        .excluded_channel_ids
        .into_iter()
        .map(|channel_id| ExcludedChannelDto { channel_id })
        .collect()
}

/// List the voice channels in which members are never renamed.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/excluded-channels",
    tag = EXCLUDED_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Excluded channels", body = Vec<ExcludedChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_excluded_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let settings = ServerSettingsService::new(state.store.as_ref())
        .get_or_create(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(into_channel_dtos(settings))))
}

/// Exclude a voice channel.
///
/// # Returns
/// - `201 Created` - Updated list of excluded channels
/// - `409 Conflict` - Channel already excluded
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/excluded-channels",
    tag = EXCLUDED_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = ExcludedChannelDto,
    responses(
        (status = 201, description = "Channel excluded", body = Vec<ExcludedChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 409, description = "Channel already excluded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_excluded_channel(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<ExcludedChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let settings = ServerSettingsService::new(state.store.as_ref())
        .add_excluded_channel(guild_id, payload.channel_id)
        .await?;

    Ok((StatusCode::CREATED, Json(into_channel_dtos(settings))))
}

/// Include a previously excluded voice channel again.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/excluded-channels/{channel_id}",
    tag = EXCLUDED_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("channel_id" = u64, Path, description = "Discord voice channel ID")
    ),
    responses(
        (status = 200, description = "Channel included again", body = Vec<ExcludedChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Channel was not excluded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_excluded_channel(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, channel_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let settings = ServerSettingsService::new(state.store.as_ref())
        .remove_excluded_channel(guild_id, channel_id)
        .await?;

    Ok((StatusCode::OK, Json(into_channel_dtos(settings))))
}
