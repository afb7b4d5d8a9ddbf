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
        custom_channel::{
            AvailableRuleDto, ChannelRuleDto, CreateCustomChannelDto, CustomChannelDto,
            UpdateCustomChannelDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::custom_channel::{available_rules, ChannelRule, CustomChannel},
        service::custom_channel::CustomChannelService,
        state::AppState,
    },
};

/// Tag for grouping custom channel endpoints in OpenAPI documentation
pub static CUSTOM_CHANNEL_TAG: &str = "custom_channel";

fn parse_rules(rules: Vec<ChannelRuleDto>) -> Result<Vec<ChannelRule>, AppError> {
    rules
        .into_iter()
        .map(|rule| ChannelRule::from_dto(rule).map_err(AppError::from))
        .collect()
}

/// List the voice channels that transform names instead of drawing from the pool.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/custom-channels",
    tag = CUSTOM_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Custom channels", body = Vec<CustomChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_custom_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let channels = CustomChannelService::new(state.store.as_ref())
        .list(guild_id)
        .await?;

    let dtos: Vec<CustomChannelDto> = channels.into_iter().map(CustomChannel::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Give a voice channel its own transformation rules.
///
/// Rules run in the given order over the member's display name from before the
/// first rename. An empty rule list makes the channel draw from the pool again.
///
/// # Returns
/// - `201 Created` - The stored channel
/// - `400 Bad Request` - Unknown rule, or prefix/suffix without a value
/// - `409 Conflict` - Channel already has rules
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/custom-channels",
    tag = CUSTOM_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateCustomChannelDto,
    responses(
        (status = 201, description = "Custom channel created", body = CustomChannelDto),
        (status = 400, description = "Invalid rule", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 409, description = "Channel already has rules", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_custom_channel(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateCustomChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let rules = parse_rules(payload.rules)?;
    let channel = CustomChannelService::new(state.store.as_ref())
        .create(guild_id, payload.channel_id, &payload.name, rules)
        .await?;

    Ok((StatusCode::CREATED, Json(channel.into_dto())))
}

/// Replace the rules of a custom channel.
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/custom-channels/{channel_id}",
    tag = CUSTOM_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("channel_id" = u64, Path, description = "Discord voice channel ID")
    ),
    request_body = UpdateCustomChannelDto,
    responses(
        (status = 200, description = "Rules replaced", body = CustomChannelDto),
        (status = 400, description = "Invalid rule", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Channel has no rules", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_custom_channel(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, channel_id)): Path<(u64, u64)>,
    Json(payload): Json<UpdateCustomChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let rules = parse_rules(payload.rules)?;
    let channel = CustomChannelService::new(state.store.as_ref())
        .update_rules(guild_id, channel_id, rules)
        .await?;

    Ok((StatusCode::OK, Json(channel.into_dto())))
}

/// Remove a channel's rules so it draws from the pool again.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/custom-channels/{channel_id}",
    tag = CUSTOM_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("channel_id" = u64, Path, description = "Discord voice channel ID")
    ),
    responses(
        (status = 204, description = "Rules removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 404, description = "Channel has no rules", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_custom_channel(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, channel_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    CustomChannelService::new(state.store.as_ref())
        .remove(guild_id, channel_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the transformation rules a custom channel can use.
#[utoipa::path(
    get,
    path = "/api/available-rules",
    tag = CUSTOM_CHANNEL_TAG,
    responses(
        (status = 200, description = "Rule kinds with labels", body = Vec<AvailableRuleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    Ok((StatusCode::OK, Json(available_rules())))
}
