use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{
            __path_callback, __path_get_user, __path_login, __path_logout, callback, get_user,
            login, logout,
        },
        custom_channel::{
            __path_create_custom_channel, __path_delete_custom_channel, __path_get_available_rules,
            __path_get_custom_channels, __path_update_custom_channel, create_custom_channel,
            delete_custom_channel, get_available_rules, get_custom_channels, update_custom_channel,
        },
        excluded_channel::{
            __path_add_excluded_channel, __path_get_excluded_channels,
            __path_remove_excluded_channel, add_excluded_channel, get_excluded_channels,
            remove_excluded_channel,
        },
        guild::{
            __path_get_guilds, __path_get_settings, __path_get_stats, __path_update_settings,
            get_guilds, get_settings, get_stats, update_settings,
        },
        member_nickname::{
            __path_delete_member_nickname, __path_get_member_nicknames,
            __path_update_member_nickname, delete_member_nickname, get_member_nicknames,
            update_member_nickname,
        },
        nickname::{
            __path_add_nickname, __path_get_nicknames, __path_remove_nickname,
            __path_reset_nicknames, add_nickname, get_nicknames, remove_nickname, reset_nicknames,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Identity Crisis",
        description = "Dashboard API for the nickname-shuffling Discord bot"
    ),
    tags(
        (name = "auth", description = "Discord login"),
        (name = "guild", description = "Guild settings and statistics"),
        (name = "nickname", description = "Nickname pool"),
        (name = "excluded_channel", description = "Voice channels never renamed in"),
        (name = "custom_channel", description = "Voice channels with name transformation rules"),
        (name = "member_nickname", description = "Members awaiting a nickname restore")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(login))
        .routes(routes!(callback))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(get_guilds))
        .routes(routes!(get_settings, update_settings))
        .routes(routes!(get_stats))
        .routes(routes!(get_nicknames, add_nickname))
        .routes(routes!(remove_nickname))
        .routes(routes!(reset_nicknames))
        .routes(routes!(get_excluded_channels, add_excluded_channel))
        .routes(routes!(remove_excluded_channel))
        .routes(routes!(get_custom_channels, create_custom_channel))
        .routes(routes!(update_custom_channel, delete_custom_channel))
        .routes(routes!(get_available_rules))
        .routes(routes!(get_member_nicknames))
        .routes(routes!(update_member_nickname, delete_member_nickname))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
