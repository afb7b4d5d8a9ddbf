//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for users and sessions
//! - Configuration store for guild settings, nickname pools and pending restores
//! - HTTP client and OAuth2 client for Discord authentication
//! - Application URL for redirects

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::store::ConfigStore;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection and reqwest client share
/// their pools, and the store is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool used for dashboard users.
    pub db: DatabaseConnection,

    /// Guild configuration, shared with the Discord bot.
    pub store: Arc<dyn ConfigStore>,

    /// HTTP client for Discord REST calls made on behalf of a logged-in user.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Application base URL, target of the post-login redirect.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        store: Arc<dyn ConfigStore>,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        app_url: String,
    ) -> Self {
        Self {
            db,
            store,
            http_client,
            oauth_client,
            app_url,
        }
    }
}
