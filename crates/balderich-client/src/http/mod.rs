/*
[INPUT]:  Client configuration, credentials and API paths
[OUTPUT]: Signed HTTP calls and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing client behavior
*/

pub mod client;
pub mod contest;
pub mod error;
pub mod problem;
pub mod team;
pub mod user;

pub use error::{BalderichError, ErrorDomain, ErrorKind, Result, SUCCESS, map_code_to_error};

pub use client::{ClientConfig, DEFAULT_BASE_URL, FilePart, NssClient, OCTET_STREAM, RequestBody};
pub use contest::ContestKind;
