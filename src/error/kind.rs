//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// Remote error sets map onto a kind through their status code, so callers
/// can branch on a stable category without matching every named error.
///
/// | ErrorKind         | HTTP | Typical remote errors                          |
/// |-------------------|------|------------------------------------------------|
/// | `Unauthorized`    | 401  | `Invalid token`, `Expired token`               |
/// | `Forbidden`       | 403  |                                                |
/// | `NotFound`        | 404  | `Document not found`                           |
/// | `InvalidArgument` | 400  | `Axios Error` (transport-level)                |
/// | `Validation`      | 422  | `Query schema validation error`                |
/// | `Internal`        | 500  | `Internal Server Error`, `Undefined in result` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failed or the caller lacks the required permission.
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// Valid credentials but access to the resource is refused.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request
    #[error("invalid argument")]
    InvalidArgument,

    /// Request query, body, or headers failed server-side schema validation.
    ///
    /// HTTP: 422 Unprocessable Entity
    #[error("validation failed")]
    Validation,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 503 Service Unavailable
    #[error("service unavailable")]
    Unavailable,

    /// Request timed out.
    ///
    /// HTTP: 504 Gateway Timeout or client-side timeout
    #[error("timeout")]
    Timeout,

    /// Internal server error.
    ///
    /// HTTP: 500 Internal Server Error
    #[error("internal error")]
    Internal,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Transport layer error that fits no more specific category.
    #[error("transport error")]
    Transport,

    /// Response could not be parsed or did not match the expected shape.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid URL, HTTP client construction).
    #[error("configuration error")]
    Configuration,

    /// Unknown or unexpected error.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns the default HTTP status code for this error kind.
    #[inline]
    pub fn http_status_code(&self) -> u16 {
        match self {
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidArgument => 400,
            ErrorKind::Validation => 422,
            ErrorKind::Conflict => 409,
            ErrorKind::RateLimited => 429,
            ErrorKind::Unavailable => 503,
            ErrorKind::Timeout => 504,
            ErrorKind::Internal => 500,
            ErrorKind::Connection | ErrorKind::Transport | ErrorKind::InvalidResponse => 502,
            ErrorKind::Configuration | ErrorKind::Unknown => 500,
        }
    }

    /// Creates an `ErrorKind` from an HTTP status code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bridge_sdk::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::from_http_status(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::from_http_status(422), ErrorKind::Validation);
    /// ```
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::Validation,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::Internal,
            502 => ErrorKind::Transport,
            503 => ErrorKind::Unavailable,
            504 => ErrorKind::Timeout,
            _ if (400..500).contains(&status) => ErrorKind::InvalidArgument,
            _ if status >= 500 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }
}
