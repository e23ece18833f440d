/*
[INPUT]:  Key/secret credential pair (direct, JSON file, or environment)
[OUTPUT]: Request signatures (hex SHA-256 digest + unix timestamp)
[POS]:    Auth layer - handles Balderich API request signing
[UPDATE]: When credential sources or the signing scheme change
*/

pub mod config;
pub mod signer;

pub use config::{AuthConfig, KEY_ENV_VAR, SECRET_ENV_VAR};
pub use signer::{DEFAULT_SIGN_PREFIX, Signature};
