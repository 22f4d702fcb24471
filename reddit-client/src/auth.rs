//! OAuth2 password grant for Reddit "script" applications.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, ClientId, ClientSecret, HttpRequest, HttpResponse, RequestTokenError,
    ResourceOwnerPassword, ResourceOwnerUsername, Scope, TokenResponse, TokenUrl,
};
use pain_matrix_core::{CoreError, RedditApiError, RedditCredentials};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};
use tracing::{debug, error};

pub const REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/authorize";
pub const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

// Reddit issues one-hour tokens; used when the response omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditToken {
    pub access_token: String,
    pub expires_at: SystemTime,
    pub scope: Vec<String>,
}

impl RedditToken {
    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at
    }
}

pub fn required_scopes() -> Vec<&'static str> {
    vec!["identity", "read"]
}

fn auth_failed(reason: impl Into<String>) -> CoreError {
    CoreError::RedditApi(RedditApiError::AuthenticationFailed {
        reason: reason.into(),
    })
}

pub fn oauth_client(
    credentials: &RedditCredentials,
    token_url: &str,
) -> Result<BasicClient, CoreError> {
    let auth_url = AuthUrl::new(REDDIT_AUTH_URL.to_string())
        .map_err(|e| auth_failed(format!("Invalid authorization URL: {}", e)))?;
    let token_url = TokenUrl::new(token_url.to_string())
        .map_err(|e| auth_failed(format!("Invalid token URL: {}", e)))?;

    Ok(BasicClient::new(
        ClientId::new(credentials.client_id.clone()),
        Some(ClientSecret::new(credentials.client_secret.clone())),
        auth_url,
        Some(token_url),
    ))
}

/// Sends the token request through our own client so Reddit sees the
/// configured user agent.
async fn send_token_request(
    http_client: &Client,
    request: HttpRequest,
) -> Result<HttpResponse, reqwest::Error> {
    let response = http_client
        .request(request.method, request.url.as_str())
        .headers(request.headers)
        .body(request.body)
        .send()
        .await?;

    let status_code = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse {
        status_code,
        headers,
        body,
    })
}

pub async fn exchange_password(
    http_client: &Client,
    credentials: &RedditCredentials,
    token_url: &str,
) -> Result<RedditToken, CoreError> {
    let client = oauth_client(credentials, token_url)?;

    let username = ResourceOwnerUsername::new(credentials.username.clone());
    let password = ResourceOwnerPassword::new(credentials.password.clone());
    let mut request = client.exchange_password(&username, &password);
    for scope in required_scopes() {
        request = request.add_scope(Scope::new(scope.to_string()));
    }

    let token = request
        .request_async(|req| send_token_request(http_client, req))
        .await
        .map_err(|e| {
            let reason = match &e {
                RequestTokenError::ServerResponse(response) => response.error().to_string(),
                other => other.to_string(),
            };
            error!("Reddit token exchange failed: {}", reason);
            auth_failed(reason)
        })?;

    let lifetime = token.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME);
    let scope = token
        .scopes()
        .map(|scopes| scopes.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    debug!("Obtained Reddit access token valid for {:?}", lifetime);
    Ok(RedditToken {
        access_token: token.access_token().secret().clone(),
        expires_at: SystemTime::now() + lifetime,
        scope,
    })
}
