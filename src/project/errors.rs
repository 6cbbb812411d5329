//! Error sets of the project operations.

use crate::error::remote_error_set;

remote_error_set! {
    /// Errors of `POST /project/getMine`.
    ///
    /// ```rust
    /// use bridge_sdk::RemoteError;
    /// use bridge_sdk::project::GetMineError;
    ///
    /// let err = GetMineError::from_wire(serde_json::json!({
    ///     "name": "Expired token",
    ///     "status": 401
    /// }));
    /// assert!(matches!(err, GetMineError::ExpiredToken { .. }));
    /// ```
    pub enum GetMineError {
        /// The token lacks the permission for this operation.
        WrongPermission = ("Wrong permission", 401),
        /// The session token has expired.
        ExpiredToken = ("Expired token", 401),
        /// The session token is malformed or unknown.
        InvalidToken = ("Invalid token", 401),
        /// Request headers failed schema validation.
        HeadersValidation = ("Headers schema validation error", 422),
        /// Query parameters failed schema validation.
        QueryValidation = ("Query schema validation error", 422),
    }
}

remote_error_set! {
    /// Errors of `POST /project/reCompile`.
    pub enum ReCompileError {
        /// The token lacks the permission for this operation.
        WrongPermission = ("Wrong permission", 401),
        /// The session token has expired.
        ExpiredToken = ("Expired token", 401),
        /// The session token is malformed or unknown.
        InvalidToken = ("Invalid token", 401),
        /// No project with the given id belongs to the caller.
        DocumentNotFound = ("Document not found", 404),
        /// The owner has no GitHub connection.
        UserNotConnectedWithGithub = ("User not connected with github", 401),
        /// GitHub returned no archive for the repository.
        RepoZipUndefined = ("Undefined in result of github.getRepoZip", 500),
        /// The project has no linked repository.
        ProjectNotConnected = ("Project not connected to github or gitlab", 401),
        /// Request headers failed schema validation.
        HeadersValidation = ("Headers schema validation error", 422),
        /// Query parameters failed schema validation.
        QueryValidation = ("Query schema validation error", 422),
    }
}
