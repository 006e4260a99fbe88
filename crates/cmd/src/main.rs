mod trigger;

use std::process;

use anyhow::Result;
use clap::Parser;
use kickoff_core::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "kickoff")]
#[command(about = "Trigger a CircleCI build of demisto/content")]
struct Cli {
    /// Build service API URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(flatten)]
    args: trigger::TriggerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Usage failures must exit with code 1 rather than clap's default 2;
    // help and version requests keep exit code 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    trigger::execute(&cli.api_url, &cli.args).await
}
