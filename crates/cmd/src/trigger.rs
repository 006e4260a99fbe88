use anyhow::{Context, Result};
use clap::Args;
use kickoff_core::{BuildRequest, MIN_TTL_MINUTES};

#[derive(Args, Debug)]
pub struct TriggerArgs {
    /// Branch of the content repository to build
    pub branch: String,
    /// CircleCI API token authorizing the build
    pub token: String,
    /// Minutes to keep the build environment alive (180-540)
    pub time_to_live: Option<u32>,
    /// Contributor branch to forward to the build
    pub contributor_branch: Option<String>,
}

pub async fn execute(api_url: &str, args: &TriggerArgs) -> Result<()> {
    let request = BuildRequest::new(
        args.branch.as_str(),
        args.token.as_str(),
        args.time_to_live,
        args.contributor_branch.clone(),
    )?;

    let ttl = request.time_to_live();
    if ttl.was_defaulted() {
        println!(
            "Time to live not supplied or below {MIN_TTL_MINUTES} minutes, using {} minutes.",
            ttl.minutes()
        );
    }

    let client = reqwest::Client::new();
    let url = request.trigger_url(api_url);

    let response = client
        .post(&url)
        .header("Accept", "application/json")
        .json(&request.payload())
        .send()
        .await
        .context("Failed to send request to the build service")?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read build service response")?;

    // The service's response is forwarded as-is, whatever the status.
    println!("{body}");

    if !status.is_success() {
        anyhow::bail!("Build service returned {status}");
    }

    Ok(())
}
