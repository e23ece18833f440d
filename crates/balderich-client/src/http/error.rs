/*
[INPUT]:  Error sources (HTTP, envelope status codes, serialization, config)
[OUTPUT]: Structured error types with code-to-kind mapping and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When the server adds status codes or new error sources appear
*/

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Envelope code signalling that `data` carries the payload
pub const SUCCESS: i32 = 0;

/// Named error conditions reported through the envelope `code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AuthNone,
    AuthNotExist,
    AuthErrorSign,
    AuthTimeout,
    AuthCalcError,
    AuthRequestFast,
    RequestParamInvalid,

    UserNotExist,
    UserCloseFollow,
    UserImageNone,
    UserImageFormatError,
    UserImageOpenError,
    UserMemoryNotEnough,
    UserImageNotExist,

    ProblemNotExist,
    ProblemPermissionDenied,
    ProblemSheetNotExist,
    ProblemSheetPermissionDenied,

    ContestNotExist,
    ContestPermissionDenied,

    TeamNotExist,
    TeamPermissionDenied,
    TeamNoMember,
    TeamMethodPermissionDenied,
    TeamProblemNotExist,
    TeamProblemPermissionDenied,
    TeamContestNotExist,
    TeamContestPermissionDenied,

    /// Code missing from the table; the raw value stays on the error
    Unknown,
}

/// Area of the API an error kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    Auth,
    Validation,
    User,
    Problem,
    Contest,
    Team,
    Unknown,
}

/// Every known status code and the single kind it maps to
pub const CODE_TABLE: &[(i32, ErrorKind)] = &[
    (101, ErrorKind::AuthNone),
    (102, ErrorKind::AuthNotExist),
    (103, ErrorKind::AuthErrorSign),
    (104, ErrorKind::AuthTimeout),
    (105, ErrorKind::AuthCalcError),
    (106, ErrorKind::AuthRequestFast),
    (107, ErrorKind::RequestParamInvalid),
    (1001, ErrorKind::UserNotExist),
    (1002, ErrorKind::UserCloseFollow),
    (1003, ErrorKind::UserImageNone),
    (1004, ErrorKind::UserImageFormatError),
    (1005, ErrorKind::UserImageOpenError),
    (1006, ErrorKind::UserMemoryNotEnough),
    (1007, ErrorKind::UserImageNotExist),
    (2001, ErrorKind::ProblemNotExist),
    (2002, ErrorKind::ProblemPermissionDenied),
    (2003, ErrorKind::ProblemSheetNotExist),
    (2004, ErrorKind::ProblemSheetPermissionDenied),
    (3001, ErrorKind::ContestNotExist),
    (3002, ErrorKind::ContestPermissionDenied),
    (4001, ErrorKind::TeamNotExist),
    (4002, ErrorKind::TeamPermissionDenied),
    (4003, ErrorKind::TeamNoMember),
    (4004, ErrorKind::TeamMethodPermissionDenied),
    (4005, ErrorKind::TeamProblemNotExist),
    (4006, ErrorKind::TeamProblemPermissionDenied),
    (4007, ErrorKind::TeamContestNotExist),
    (4008, ErrorKind::TeamContestPermissionDenied),
];

/// Map an envelope status code to its error kind
///
/// Unlisted codes yield [`ErrorKind::Unknown`].
pub fn map_code_to_error(code: i32) -> ErrorKind {
    CODE_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::Unknown)
}

impl ErrorKind {
    /// Status code for this kind, `None` for [`ErrorKind::Unknown`]
    pub fn code(self) -> Option<i32> {
        CODE_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(code, _)| *code)
    }

    pub fn domain(self) -> ErrorDomain {
        use ErrorKind::*;
        match self {
            AuthNone | AuthNotExist | AuthErrorSign | AuthTimeout | AuthCalcError
            | AuthRequestFast => ErrorDomain::Auth,
            RequestParamInvalid => ErrorDomain::Validation,
            UserNotExist | UserCloseFollow | UserImageNone | UserImageFormatError
            | UserImageOpenError | UserMemoryNotEnough | UserImageNotExist => ErrorDomain::User,
            ProblemNotExist
            | ProblemPermissionDenied
            | ProblemSheetNotExist
            | ProblemSheetPermissionDenied => ErrorDomain::Problem,
            ContestNotExist | ContestPermissionDenied => ErrorDomain::Contest,
            TeamNotExist
            | TeamPermissionDenied
            | TeamNoMember
            | TeamMethodPermissionDenied
            | TeamProblemNotExist
            | TeamProblemPermissionDenied
            | TeamContestNotExist
            | TeamContestPermissionDenied => ErrorDomain::Team,
            Unknown => ErrorDomain::Unknown,
        }
    }

    /// Requested resource does not exist
    pub fn is_not_found(self) -> bool {
        use ErrorKind::*;
        matches!(
            self,
            UserNotExist
                | UserImageNotExist
                | ProblemNotExist
                | ProblemSheetNotExist
                | ContestNotExist
                | TeamNotExist
                | TeamProblemNotExist
                | TeamContestNotExist
        )
    }

    /// Caller lacks access to an existing resource
    pub fn is_permission_denied(self) -> bool {
        use ErrorKind::*;
        matches!(
            self,
            ProblemPermissionDenied
                | ProblemSheetPermissionDenied
                | ContestPermissionDenied
                | TeamPermissionDenied
                | TeamNoMember
                | TeamMethodPermissionDenied
                | TeamProblemPermissionDenied
                | TeamContestPermissionDenied
        )
    }

    pub fn description(self) -> &'static str {
        use ErrorKind::*;
        match self {
            AuthNone => "authentication parameters missing",
            AuthNotExist => "API key does not exist",
            AuthErrorSign => "request signature mismatch",
            AuthTimeout => "request timestamp outside the accepted window",
            AuthCalcError => "server failed to verify the signature",
            AuthRequestFast => "requests sent too fast",
            RequestParamInvalid => "request parameters invalid",
            UserNotExist => "user not found",
            UserCloseFollow => "user has closed their follow list",
            UserImageNone => "no image supplied",
            UserImageFormatError => "unsupported image format",
            UserImageOpenError => "image could not be opened",
            UserMemoryNotEnough => "picture bed storage quota exceeded",
            UserImageNotExist => "image not found",
            ProblemNotExist => "problem not found",
            ProblemPermissionDenied => "problem access denied",
            ProblemSheetNotExist => "problem sheet not found",
            ProblemSheetPermissionDenied => "problem sheet access denied",
            ContestNotExist => "contest not found",
            ContestPermissionDenied => "contest access denied",
            TeamNotExist => "team not found",
            TeamPermissionDenied => "team access denied",
            TeamNoMember => "caller is not a team member",
            TeamMethodPermissionDenied => "team role too low for this method",
            TeamProblemNotExist => "team problem not found",
            TeamProblemPermissionDenied => "team problem access denied",
            TeamContestNotExist => "team contest not found",
            TeamContestPermissionDenied => "team contest access denied",
            Unknown => "unknown error code",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Main error type for the Balderich client
#[derive(Error, Debug)]
pub enum BalderichError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success envelope
    #[error("API error (code {code}): {kind}")]
    Api { code: i32, kind: ErrorKind },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Local file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied value cannot be placed in a request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BalderichError {
    /// Build the error for a non-success envelope code
    pub fn from_code(code: i32) -> Self {
        BalderichError::Api {
            code,
            kind: map_code_to_error(code),
        }
    }

    /// Mapped kind when the server reported an error code
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            BalderichError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            BalderichError::Http(_) => true,
            BalderichError::Api { kind, .. } => *kind == ErrorKind::AuthRequestFast,
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind().map(ErrorKind::domain), Some(ErrorDomain::Auth))
    }

    pub(crate) fn unexpected_body(status: StatusCode, detail: impl fmt::Display) -> Self {
        BalderichError::InvalidResponse(format!("HTTP {status}: {detail}"))
    }
}

/// Result type alias for Balderich operations
pub type Result<T> = std::result::Result<T, BalderichError>;
