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
        settings::{GuildSettingsDto, GuildStatsDto, GuildSummaryDto, UpdateGuildSettingsDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::guild_settings::UpdateSettingsParam,
        service::settings::ServerSettingsService,
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List the guilds the user may configure.
///
/// Returns the guilds known to the bot for which the logged-in user had
/// `ADMINISTRATOR` or `MANAGE_GUILD` at login, ordered by name.
///
/// # Returns
/// - `200 OK` - Manageable guilds
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Store or session error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Manageable guilds", body = Vec<GuildSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;
    let guild_ids = AuthSession::new(&session).get_guild_ids().await?;

    let guilds: Vec<GuildSummaryDto> = ServerSettingsService::new(state.store.as_ref())
        .list()
        .await?
        .into_iter()
        .filter(|settings| guild_ids.contains(&settings.guild_id))
        .map(|settings| settings.into_summary_dto())
        .collect();

    Ok((StatusCode::OK, Json(guilds)))
}

/// Get a guild's settings.
///
/// Settings are created with defaults the first time a guild is referenced.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild settings", body = GuildSettingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
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

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Replace a guild's editable settings.
///
/// Turning restore-on-leave off drops every pending restore of the guild. Excluded
/// channels are managed through their own endpoints.
///
/// # Returns
/// - `200 OK` - Updated settings
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not manage the guild
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/settings",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateGuildSettingsDto,
    responses(
        (status = 200, description = "Updated guild settings", body = GuildSettingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateGuildSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require_guild(guild_id)
        .await?;

    let settings = ServerSettingsService::new(state.store.as_ref())
        .update(guild_id, UpdateSettingsParam::from_dto(payload))
        .await?;

    tracing::info!(
        "User {} updated settings of guild {}",
        user.discord_id,
        guild_id
    );

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Get a guild's rename statistics.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/stats",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild statistics", body = GuildStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
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

    Ok((StatusCode::OK, Json(settings.into_stats_dto())))
}
