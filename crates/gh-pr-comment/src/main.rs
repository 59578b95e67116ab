use clap::Parser;
use gh_client::OctocrabClient;
use gh_pr_comment_config::StepConfig;
use pipeline::{CleanupOutcome, RunReport};
use std::process::ExitCode;

mod janitor;
mod logger;
mod pipeline;
mod publisher;
mod resolver;
#[cfg(test)]
mod test_support;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Local runs may keep the step inputs in a .env file
    let dotenv = dotenvy::dotenv();

    let config = StepConfig::parse();
    logger::init(config.verbose);

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, relying on environment variables"),
    }

    config.log_summary();

    match execute(&config).await {
        Ok(report) => {
            log_cleanup(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(config: &StepConfig) -> anyhow::Result<RunReport> {
    let config = config.validate()?;
    let client = OctocrabClient::connect(&config.api_base_url, config.token.expose())?;

    pipeline::run(&client, &config).await
}

fn log_cleanup(report: &RunReport) {
    match &report.cleanup {
        CleanupOutcome::Completed(cleanup) => log::info!(
            "Commented on #{} (comment {}), deleted {} previous comments",
            report.pull_request,
            report.comment.comment.id,
            cleanup.deleted.len()
        ),
        CleanupOutcome::Failed(reason) => log::info!(
            "Commented on #{} (comment {}), previous comments kept: {}",
            report.pull_request,
            report.comment.comment.id,
            reason
        ),
        CleanupOutcome::Disabled => log::info!(
            "Commented on #{} (comment {})",
            report.pull_request,
            report.comment.comment.id
        ),
    }
}
