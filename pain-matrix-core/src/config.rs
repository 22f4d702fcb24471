//! Run configuration read from environment variables.
//!
//! Every lookup goes through a `Fn(&str) -> Option<String>` so the same
//! parsing is used for the process environment and for tests.

use crate::error::{ConfigError, RedditApiError};
use crate::types::{BoardTarget, RedditCredentials, RunConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const NICHE_NAME: &str = "NICHE_NAME";
pub const TARGET_SUBREDDITS: &str = "TARGET_SUBREDDITS";
pub const POSTS_PER_SUBREDDIT: &str = "POSTS_PER_SUBREDDIT";
pub const TOP_POSTS_LIMIT: &str = "TOP_POSTS_LIMIT";
pub const README_PATH: &str = "README_PATH";

pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_USER_AGENT: &str = "REDDIT_USER_AGENT";
pub const REDDIT_USERNAME: &str = "REDDIT_USERNAME";
pub const REDDIT_PASSWORD: &str = "REDDIT_PASSWORD";

pub const DEFAULT_FETCH_LIMIT: u32 = 5;
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;
pub const DEFAULT_DOCUMENT_PATH: &str = "README.md";

/// Reads a variable from the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Empty values count as unset.
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).ok_or_else(|| ConfigError::MissingEnvironmentVariable {
        var_name: key.to_string(),
    })
}

fn optional_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                value,
            }),
    }
}

/// Splits a comma-separated board list, trimming each entry.
///
/// Empty entries are kept; they fail later when the board is looked up.
pub fn parse_targets(list: &str) -> Vec<BoardTarget> {
    list.split(',')
        .map(|entry| BoardTarget::new(entry.trim()))
        .collect()
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let niche_name = required(&lookup, NICHE_NAME)?;
        let targets = parse_targets(&required(&lookup, TARGET_SUBREDDITS)?);
        let fetch_limit = optional_number(&lookup, POSTS_PER_SUBREDDIT, DEFAULT_FETCH_LIMIT)?;
        let display_limit = optional_number(&lookup, TOP_POSTS_LIMIT, DEFAULT_DISPLAY_LIMIT)?;
        let document_path = non_empty(&lookup, README_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH));

        Ok(Self {
            niche_name,
            targets,
            fetch_limit,
            display_limit,
            document_path,
        })
    }
}

impl RedditCredentials {
    pub fn from_env() -> Result<Self, RedditApiError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RedditApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = |key: &str| {
            non_empty(&lookup, key).ok_or_else(|| RedditApiError::MissingCredential {
                var_name: key.to_string(),
            })
        };

        Ok(Self {
            client_id: credential(REDDIT_CLIENT_ID)?,
            client_secret: credential(REDDIT_CLIENT_SECRET)?,
            user_agent: credential(REDDIT_USER_AGENT)?,
            username: credential(REDDIT_USERNAME)?,
            password: credential(REDDIT_PASSWORD)?,
        })
    }
}
