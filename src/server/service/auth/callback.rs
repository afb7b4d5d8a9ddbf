use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;
use serenity::all::{Permissions, User as DiscordUser};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::auth::DiscordAuthService,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";
const DISCORD_USER_GUILDS_URL: &str = "https://discord.com/api/users/@me/guilds";

/// Guild entry of `GET /users/@me/guilds`.
#[derive(Deserialize, Debug, Clone)]
pub struct UserGuild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: bool,
    /// Permission bit set of the user in the guild, as a decimal string.
    #[serde(default)]
    pub permissions: String,
}

impl UserGuild {
    /// Whether the user can manage the guild's configuration.
    pub fn is_manageable(&self) -> bool {
        if self.owner {
            return true;
        }

        let bits = self.permissions.parse::<u64>().unwrap_or(0);
        let permissions = Permissions::from_bits_truncate(bits);

        permissions.administrator() || permissions.manage_guild()
    }
}

/// Result of a successful login.
pub struct LoginResult {
    pub user: User,
    /// Guilds the user may manage from the dashboard.
    pub manageable_guild_ids: Vec<u64>,
}

impl<'a> DiscordAuthService<'a> {
    /// Exchanges the authorization code, fetches the user and their guilds, and upserts
    /// the user.
    pub async fn callback(&self, authorization_code: String) -> Result<LoginResult, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let guilds = self.fetch_user_guilds(&token).await?;

        let manageable_guild_ids = manageable_guild_ids(&guilds);

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user.name,
            })
            .await?;

        tracing::info!(
            "User {} logged in managing {} guilds",
            user.discord_id,
            manageable_guild_ids.len()
        );

        Ok(LoginResult {
            user,
            manageable_guild_ids,
        })
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }

    /// Retrieves the guilds the user is a member of
    async fn fetch_user_guilds(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<Vec<UserGuild>, AppError> {
        let access_token = token.access_token().secret();

        let guilds = self
            .http_client
            .get(DISCORD_USER_GUILDS_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<UserGuild>>()
            .await?;

        Ok(guilds)
    }
}

/// IDs of the guilds the user may manage; entries with malformed IDs are skipped.
pub fn manageable_guild_ids(guilds: &[UserGuild]) -> Vec<u64> {
    guilds
        .iter()
        .filter(|guild| guild.is_manageable())
        .filter_map(|guild| guild.id.parse::<u64>().ok())
        .collect()
}
