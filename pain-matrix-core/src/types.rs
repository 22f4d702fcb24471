use std::fmt;
use std::path::PathBuf;

/// A single post fetched from a board.
///
/// Fields are only readable once the post has been built, so a post handed
/// out by a board source never changes on its way through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    title: String,
    url: String,
    score: i64,
    comment_count: u64,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        score: i64,
        comment_count: u64,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            score,
            comment_count,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }
}

const BOARD_PREFIXES: [&str; 2] = ["/r/", "r/"];

/// One configured board, as written in `TARGET_SUBREDDITS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardTarget {
    raw: String,
}

impl BoardTarget {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The entry exactly as configured (after trimming).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The board name used for lookup, with a leading `r/` or `/r/` removed.
    pub fn name(&self) -> &str {
        BOARD_PREFIXES
            .iter()
            .find_map(|prefix| self.raw.strip_prefix(*prefix))
            .unwrap_or(&self.raw)
    }
}

impl fmt::Display for BoardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters for a single run, built once from the environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub niche_name: String,
    pub targets: Vec<BoardTarget>,
    pub fetch_limit: u32,
    pub display_limit: usize,
    pub document_path: PathBuf,
}

/// Credentials for a Reddit "script" application.
#[derive(Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Markdown produced by the renderer, ready to be spliced into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock(String);

impl RenderedBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
