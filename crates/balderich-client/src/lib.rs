/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Balderich client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AuthConfig, DEFAULT_SIGN_PREFIX, Signature};

// Re-export commonly used types from http
pub use http::{
    BalderichError,
    ClientConfig,
    ContestKind,
    ErrorDomain,
    ErrorKind,
    FilePart,
    NssClient,
    RequestBody,
    Result,
    map_code_to_error,
};

// Re-export all types
pub use types::*;
