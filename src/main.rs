use pain_matrix_core::{ErrorExt, ErrorReporter};
use std::error::Error;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "pain_matrix=info,scraper_service=info,reddit_client=info,feed_builder=info,pain_matrix_core=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Values already in the environment win over .env
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("PAIN-MATRIX SCRAPER BOT (FREE TIER)");

    match scraper_service::run().await {
        Ok(report) => {
            if !report.document_updated {
                info!("Document was not updated; see the error above");
            }
            info!("SCRAPING COMPLETE!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ErrorReporter::new().report(&e);

            eprintln!("CRITICAL ERROR [{}]: {}", e.error_code(), e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
