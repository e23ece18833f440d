/*
[INPUT]:  Parsed subcommands and a configured NssClient
[OUTPUT]: Pretty-printed JSON payloads or written download files
[POS]:    CLI command layer - maps subcommands to client calls
[UPDATE]: When adding subcommands or client endpoints
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use balderich_client::{AuthConfig, NssClient, RequestBody};
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the signature for a path without sending anything
    Sign {
        path: String,
        /// Unix timestamp to sign for (defaults to now)
        #[arg(long)]
        time: Option<i64>,
    },
    /// Signed GET of a raw API path
    Get { path: String },
    /// Signed PUT of a raw API path
    Put { path: String },
    /// Signed POST of a raw API path with form fields
    Post {
        path: String,
        /// Form field as NAME=VALUE, repeatable
        #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// User endpoints
    #[command(subcommand)]
    User(UserCommand),
    /// Problem endpoints
    #[command(subcommand)]
    Problem(ProblemCommand),
    /// Contest endpoints
    #[command(subcommand)]
    Contest(ContestCommand),
    /// Team endpoints
    #[command(subcommand)]
    Team(TeamCommand),
    /// Upload an image to the picture bed
    Upload { file: PathBuf },
    /// Download a picture bed image
    Download {
        pid: u64,
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Profile by username or uid
    Info { name: String },
    /// Picture bed storage usage
    Picturebed,
}

#[derive(Subcommand, Debug)]
pub enum ProblemCommand {
    Info { pid: u64 },
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContestCommand {
    Info { cid: u64 },
    Rank {
        cid: u64,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    Info { tid: u64 },
    Notice,
    Clockin,
}

/// Run a subcommand that needs no network access
pub fn run_offline(command: &Command, auth: &AuthConfig, sign_prefix: &str) -> Option<Result<()>> {
    match command {
        Command::Sign { path, time } => {
            let signature = auth.sign_with_prefix(path.trim_start_matches('/'), *time, sign_prefix);
            Some(print_json(&serde_json::json!({
                "key": auth.key(),
                "time": signature.timestamp,
                "sign": signature.digest,
            })))
        }
        _ => None,
    }
}

/// Run a subcommand against the API
pub async fn run(command: Command, client: &NssClient) -> Result<()> {
    match command {
        Command::Sign { .. } => Err(anyhow!("sign runs offline")),
        Command::Get { path } => print_json(&client.get::<Value>(&path).await?),
        Command::Put { path } => print_json(&client.put::<Value>(&path, RequestBody::Empty).await?),
        Command::Post { path, fields } => {
            let body = if fields.is_empty() {
                RequestBody::Empty
            } else {
                RequestBody::Form(fields)
            };
            print_json(&client.post::<Value>(&path, body).await?)
        }
        Command::User(UserCommand::Info { name }) => print_json(&client.get_user_info(&name).await?),
        Command::User(UserCommand::Picturebed) => {
            print_json(&client.get_user_picturebed_used().await?)
        }
        Command::Problem(ProblemCommand::Info { pid }) => {
            print_json(&client.get_problem_info(pid).await?)
        }
        Command::Problem(ProblemCommand::List { page, size }) => {
            print_json(&client.get_problem_list(page, size).await?)
        }
        Command::Contest(ContestCommand::Info { cid }) => {
            print_json(&client.get_contest_info(cid).await?)
        }
        Command::Contest(ContestCommand::Rank { cid, page }) => {
            print_json(&client.get_contest_rank_list(cid, page).await?)
        }
        Command::Team(TeamCommand::Info { tid }) => print_json(&client.get_team_info(tid).await?),
        Command::Team(TeamCommand::Notice) => print_json(&client.get_team_notice().await?),
        Command::Team(TeamCommand::Clockin) => print_json(&client.put_team_clockin().await?),
        Command::Upload { file } => {
            let uploaded = client
                .post_user_picturebed_upload_file(&file)
                .await
                .with_context(|| format!("upload {}", file.display()))?;
            info!(id = uploaded.id, url = %uploaded.url, "image uploaded");
            print_json(&uploaded)
        }
        Command::Download { pid, output } => {
            let bytes = client.post_user_picturebed_download(pid).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("write {}", output.display()))?;
            info!(pid, size = bytes.len(), output = %output.display(), "image downloaded");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render JSON output")?;
    println!("{rendered}");
    Ok(())
}

fn parse_field(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))
}
