use pain_matrix_core::{CoreError, Post, RedditApiError};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

pub const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
const REDDIT_WEB_BASE: &str = "https://reddit.com";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// The part of a `t3` listing child that ends up in a [`Post`].
#[derive(Debug, Clone, Deserialize)]
pub struct RedditPostData {
    pub title: String,
    pub permalink: String,
    pub score: i64,
    pub num_comments: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditUserData {
    pub name: String,
}

/// Maps a non-success status to the error it stands for.
pub(crate) fn status_error(
    status: StatusCode,
    retry_after: Option<&str>,
    endpoint: &str,
) -> Option<RedditApiError> {
    if status.is_success() {
        return None;
    }

    let error = match status.as_u16() {
        429 => RedditApiError::RateLimitExceeded {
            retry_after: retry_after
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        401 => RedditApiError::InvalidToken,
        403 => RedditApiError::Forbidden {
            resource: endpoint.to_string(),
        },
        404 => RedditApiError::NotFound {
            resource: endpoint.to_string(),
        },
        code if status.is_server_error() => RedditApiError::ServerError { status_code: code },
        code => RedditApiError::InvalidResponse {
            details: format!("Unexpected status {} for {}", code, endpoint),
        },
    };
    Some(error)
}

#[derive(Debug)]
pub struct RedditApiClient {
    http_client: Client,
    user_agent: String,
    base_url: String,
}

impl RedditApiClient {
    pub fn new(user_agent: String) -> Result<Self, CoreError> {
        Self::with_base_url(user_agent, REDDIT_API_BASE)
    }

    /// Points the client at another API host, e.g. a local mock server.
    pub fn with_base_url(user_agent: String, base_url: impl Into<String>) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            user_agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }

    pub async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        access_token: &str,
        query_params: Option<&[(&str, &str)]>,
    ) -> Result<Response, CoreError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let start_time = Instant::now();

        let mut request_builder = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(access_token);

        if let Some(params) = query_params {
            request_builder = request_builder.query(params);
        }

        debug!("Making Reddit API request: {} {}", method, endpoint);
        let response = match request_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error for {} {}: {}", method, endpoint, e);
                if e.is_timeout() {
                    return Err(CoreError::RedditApi(RedditApiError::RequestTimeout));
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|value| value.to_str().ok());

        if let Some(api_error) = status_error(status, retry_after, endpoint) {
            if let RedditApiError::RateLimitExceeded { retry_after } = api_error {
                warn!("Rate limited, retry after {} seconds", retry_after);
            } else {
                error!("Request failed with status: {} for {}", status, endpoint);
            }
            return Err(CoreError::RedditApi(api_error));
        }

        debug!(
            "Request successful: {} {} in {:?}",
            status,
            endpoint,
            start_time.elapsed()
        );
        Ok(response)
    }

    pub async fn get_user_info(&self, access_token: &str) -> Result<RedditUserData, CoreError> {
        let response = self
            .make_request(Method::GET, "/api/v1/me", access_token, None)
            .await?;

        let user_data: RedditUserData = response.json().await.map_err(|e| {
            error!("Failed to parse user data: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: "Failed to parse user data".to_string(),
            })
        })?;

        debug!("Retrieved user info for: {}", user_data.name);
        Ok(user_data)
    }

    /// Lists the "hot" posts of a subreddit.
    pub async fn get_hot_posts(
        &self,
        access_token: &str,
        subreddit: &str,
        limit: u32,
    ) -> Result<RedditListing<RedditPostData>, CoreError> {
        let endpoint = format!("/r/{}/hot", subreddit);
        let limit_str = limit.to_string();
        let params = [("limit", limit_str.as_str()), ("raw_json", "1")];

        let response = self
            .make_request(Method::GET, &endpoint, access_token, Some(&params[..]))
            .await?;

        let listing: RedditListing<RedditPostData> = response.json().await.map_err(|e| {
            error!("Failed to parse subreddit posts: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("Failed to parse posts for r/{}", subreddit),
            })
        })?;

        info!(
            "Retrieved {} posts from r/{}",
            listing.data.children.len(),
            subreddit
        );
        Ok(listing)
    }
}

impl From<RedditPostData> for Post {
    fn from(post_data: RedditPostData) -> Self {
        Post::new(
            post_data.title,
            format!("{}{}", REDDIT_WEB_BASE, post_data.permalink),
            post_data.score,
            post_data.num_comments,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = RedditApiClient::new("test-user-agent/1.0".to_string()).unwrap();
        assert_eq!(client.user_agent(), "test-user-agent/1.0");
        assert_eq!(client.base_url(), REDDIT_API_BASE);

        let local =
            RedditApiClient::with_base_url("test-user-agent/1.0".to_string(), "http://127.0.0.1:9/")
                .unwrap();
        assert_eq!(local.base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_status_error_mapping() {
        let endpoint = "/r/science/hot";

        assert!(status_error(StatusCode::OK, None, endpoint).is_none());
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, None, endpoint),
            Some(RedditApiError::InvalidToken)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, None, endpoint),
            Some(RedditApiError::Forbidden { ref resource }) if resource == endpoint
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, None, endpoint),
            Some(RedditApiError::NotFound { ref resource }) if resource == endpoint
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, None, endpoint),
            Some(RedditApiError::ServerError { status_code: 502 })
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, None, endpoint),
            Some(RedditApiError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_rate_limit_retry_after() {
        let endpoint = "/r/science/hot";

        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, Some("12"), endpoint),
            Some(RedditApiError::RateLimitExceeded { retry_after: 12 })
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, Some("soon"), endpoint),
            Some(RedditApiError::RateLimitExceeded { retry_after: 60 })
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, None, endpoint),
            Some(RedditApiError::RateLimitExceeded { retry_after: 60 })
        ));
    }

    #[test]
    fn test_reddit_post_conversion() {
        let post_data = RedditPostData {
            title: "Test Post".to_string(),
            permalink: "/r/test/comments/test123/test_post/".to_string(),
            score: -4,
            num_comments: 5,
        };

        let post: Post = post_data.into();
        assert_eq!(post.title(), "Test Post");
        assert_eq!(
            post.url(),
            "https://reddit.com/r/test/comments/test123/test_post/"
        );
        assert_eq!(post.score(), -4);
        assert_eq!(post.comment_count(), 5);
    }
}
