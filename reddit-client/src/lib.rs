pub mod api;
pub mod auth;

use api::RedditApiClient;
use async_trait::async_trait;
use auth::RedditToken;
use pain_matrix_core::{
    BoardSource, BoardTarget, CoreError, Post, RedditApiError, RedditCredentials,
};
use tracing::info;

/// Where the client sends its token and API requests.
#[derive(Debug, Clone)]
pub struct RedditEndpoints {
    pub api_base: String,
    pub token_url: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            api_base: api::REDDIT_API_BASE.to_string(),
            token_url: auth::REDDIT_TOKEN_URL.to_string(),
        }
    }
}

/// An authenticated Reddit session.
pub struct RedditClient {
    api: RedditApiClient,
    token: RedditToken,
    identity: String,
}

impl RedditClient {
    /// Logs in with the password grant and confirms who we are.
    pub async fn authenticate(credentials: &RedditCredentials) -> Result<Self, CoreError> {
        Self::authenticate_with(credentials, &RedditEndpoints::default()).await
    }

    pub async fn authenticate_with(
        credentials: &RedditCredentials,
        endpoints: &RedditEndpoints,
    ) -> Result<Self, CoreError> {
        info!("Authenticating to Reddit...");

        let api =
            RedditApiClient::with_base_url(credentials.user_agent.clone(), endpoints.api_base.as_str())?;
        let token =
            auth::exchange_password(api.http_client(), credentials, &endpoints.token_url).await?;

        let user = api
            .get_user_info(&token.access_token)
            .await
            .map_err(|e| RedditApiError::AuthenticationFailed {
                reason: format!("identity check failed: {}", e),
            })?;

        info!("Authenticated as: {}", user.name);
        Ok(Self {
            api,
            token,
            identity: user.name,
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_expired()
    }
}

#[async_trait]
impl BoardSource for RedditClient {
    async fn fetch_posts(&self, board: &BoardTarget, limit: u32) -> Result<Vec<Post>, CoreError> {
        let name = board.name();
        if name.is_empty() {
            return Err(RedditApiError::InvalidBoardName {
                board: board.raw().to_string(),
            }
            .into());
        }
        if self.token.is_expired() {
            return Err(RedditApiError::InvalidToken.into());
        }

        let listing = self
            .api
            .get_hot_posts(&self.token.access_token, name, limit)
            .await?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| Post::from(child.data))
            .collect())
    }
}
