/*
[INPUT]:  CLI arguments, optional YAML settings, credential file or environment
[OUTPUT]: Signed API calls printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or subcommands
*/

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use balderich_client::NssClient;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::Settings;

#[derive(Parser, Debug)]
#[command(name = "balderich", version, about = "Balderich CTF platform API client")]
struct Cli {
    /// JSON credential file with `key` and `secret`
    #[arg(long = "credentials", value_name = "PATH")]
    credentials_path: Option<PathBuf>,
    /// YAML client settings
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let settings = match &args.config_path {
        Some(path) => Settings::from_file(path).context("load settings")?,
        None => Settings::default(),
    };
    let client_config = settings.client_config(args.base_url.as_deref());
    let auth = settings.credentials(args.credentials_path.as_deref())?;

    if let Some(result) = commands::run_offline(&args.command, &auth, &client_config.sign_prefix) {
        return result;
    }

    info!(base_url = %client_config.base_url, key = auth.key(), "starting balderich client");
    let client = NssClient::with_config(auth, client_config).context("build HTTP client")?;
    commands::run(args.command, &client).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "balderich",
            "--credentials",
            "key.json",
            "problem",
            "list",
            "--page",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.credentials_path, Some(PathBuf::from("key.json")));
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Command::Problem(commands::ProblemCommand::List { page, size }) => {
                assert_eq!(page, 2);
                assert_eq!(size, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_post_fields() {
        let cli = Cli::try_parse_from([
            "balderich",
            "post",
            "team/statistics/day/",
            "--field",
            "uids=1",
            "--field",
            "uids=2",
        ])
        .unwrap();
        match cli.command {
            Command::Post { path, fields } => {
                assert_eq!(path, "team/statistics/day/");
                assert_eq!(fields.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["balderich"]).is_err());
    }
}
