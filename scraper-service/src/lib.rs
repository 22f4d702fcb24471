use feed_builder::{aggregate, rank, render, update_document};
use pain_matrix_core::{
    config, BoardSource, CoreError, Post, RedditCredentials, RunConfig,
};
use reddit_client::{RedditClient, RedditEndpoints};
use tracing::info;

/// Posts found on a single board during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardReport {
    pub board: String,
    pub posts: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub boards: Vec<BoardReport>,
    pub collected: usize,
    pub displayed: Vec<Post>,
    pub document_updated: bool,
}

pub struct ScraperService<'a> {
    config: &'a RunConfig,
}

impl<'a> ScraperService<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Fetches every configured board, one after another.
    async fn collect<S>(&self, source: &S) -> (Vec<Vec<Post>>, Vec<BoardReport>)
    where
        S: BoardSource + ?Sized,
    {
        let mut per_board = Vec::with_capacity(self.config.targets.len());
        let mut reports = Vec::with_capacity(self.config.targets.len());

        for board in &self.config.targets {
            info!("Scraping {}...", board);
            let posts = source.fetch_top(board, self.config.fetch_limit).await;
            info!("Found {} posts", posts.len());

            reports.push(BoardReport {
                board: board.raw().to_string(),
                posts: posts.len(),
            });
            per_board.push(posts);
        }

        (per_board, reports)
    }

    /// Runs fetch, rank, render and patch against `source`.
    ///
    /// Board and document failures are logged and reflected in the report;
    /// they never abort the run.
    pub async fn run_with<S>(&self, source: &S) -> RunReport
    where
        S: BoardSource + ?Sized,
    {
        let (per_board, boards) = self.collect(source).await;

        let all_posts = aggregate(per_board);
        let collected = all_posts.len();
        let top_posts = rank(all_posts, self.config.display_limit);

        info!("Total posts collected: {}", collected);
        info!("Top posts to display: {}", top_posts.len());

        let block = render(&top_posts);

        info!("Updating {}...", self.config.document_path.display());
        let document_updated = update_document(&self.config.document_path, &block);

        RunReport {
            boards,
            collected,
            displayed: top_posts,
            document_updated,
        }
    }
}

/// Loads configuration through `lookup`, logs in and runs the pipeline.
///
/// Only configuration, credential and authentication failures are returned
/// as errors.
pub async fn run_with_lookup<F>(lookup: F) -> Result<RunReport, CoreError>
where
    F: Fn(&str) -> Option<String>,
{
    run_against(lookup, &RedditEndpoints::default()).await
}

/// [`run_with_lookup`] talking to the given Reddit endpoints.
pub async fn run_against<F>(lookup: F, endpoints: &RedditEndpoints) -> Result<RunReport, CoreError>
where
    F: Fn(&str) -> Option<String>,
{
    let run_config = RunConfig::from_lookup(&lookup)?;

    info!("Niche: {}", run_config.niche_name);
    let targets: Vec<&str> = run_config.targets.iter().map(|t| t.raw()).collect();
    info!("Target Subreddits: {}", targets.join(", "));

    let credentials = RedditCredentials::from_lookup(&lookup)?;
    let client = RedditClient::authenticate_with(&credentials, endpoints).await?;

    Ok(ScraperService::new(&run_config).run_with(&client).await)
}

/// [`run_with_lookup`] against the process environment.
pub async fn run() -> Result<RunReport, CoreError> {
    run_with_lookup(config::env_lookup).await
}
