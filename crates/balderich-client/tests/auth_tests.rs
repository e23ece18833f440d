/*
[INPUT]:  Credential files, streams and fixed signing vectors
[OUTPUT]: Test results for credential loading and request signing
[POS]:    Integration tests - authentication
[UPDATE]: When credential sources or the signing scheme change
*/

mod common;

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use balderich_client::{AuthConfig, BalderichError, DEFAULT_SIGN_PREFIX};
use sha2::{Digest, Sha256};
use tokio_test::assert_ok;
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("balderich-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&path).unwrap();
    path
}

#[test]
fn test_sign_reference_scenario() {
    let config = AuthConfig::new("k", "s");
    let signature = config.sign_with_prefix("user/42/info/", Some(1_000_000_000), DEFAULT_SIGN_PREFIX);

    let expected = hex::encode(Sha256::digest(b"/v2/api/user/42/info/#k#1000000000#s"));
    assert_eq!(signature.digest, expected);
    assert_eq!(signature.timestamp, 1_000_000_000);
}

#[test]
fn test_sign_repeatable_with_explicit_timestamp() {
    let config = common::test_auth();
    let digests: Vec<String> = (0..5)
        .map(|_| config.sign("team/clockin/", Some(1_700_000_000)).digest)
        .collect();
    assert!(digests.iter().all(|digest| digest == &digests[0]));
    assert_eq!(
        digests[0],
        "79695bda48804a6de6e50430620f810bc5ae5427c2a0d00f787d6549dbd64965"
    );
}

#[test]
fn test_load_config_file() {
    let dir = temp_dir();
    let path = dir.join("key.json");
    fs::write(&path, r#"{"key": "file-key", "secret": "file-secret"}"#).unwrap();

    let config = assert_ok!(AuthConfig::from_file(&path));
    assert_eq!(config, AuthConfig::new("file-key", "file-secret"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_load_config_stream() {
    let stream = Cursor::new(br#"{"key": "stream-key", "secret": "stream-secret"}"#.to_vec());
    let config = assert_ok!(AuthConfig::from_reader(stream));
    assert_eq!(config.key(), "stream-key");
}

#[test]
fn test_load_config_malformed_json() {
    let dir = temp_dir();
    let path = dir.join("key.json");
    fs::write(&path, "key=abc\nsecret=xyz\n").unwrap();

    let err = AuthConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, BalderichError::Serialization(_)));

    fs::remove_dir_all(dir).unwrap();
}
