/*
[INPUT]:  Credential file path and a username
[OUTPUT]: User profile and rating history printed to stdout
[POS]:    Examples - signed read-only queries
[UPDATE]: When user endpoints change
*/

use balderich_client::*;

/// Example: look up a user and their rating history
///
/// Usage: cargo run --example profile_example -- key.json <username>
#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(credentials), Some(name)) = (args.next(), args.next()) else {
        eprintln!("usage: profile_example <key.json> <username>");
        return;
    };

    let auth = match AuthConfig::from_file(&credentials) {
        Ok(auth) => auth,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let client = match NssClient::new(auth) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let info = match client.get_user_info(&name).await {
        Ok(info) => info,
        Err(BalderichError::Api { kind, .. }) if kind == ErrorKind::UserNotExist => {
            println!("No user named {}", name);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    println!("{} (uid {}) rating {}, {} solves", info.username, info.uid, info.rating, info.solves);

    match client.get_user_statistics_rating(info.uid).await {
        Ok(records) => {
            for record in records {
                println!("  {:>5} -> {:>5}  {}", record.rank, record.rating, record.title);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
