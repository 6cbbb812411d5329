//! Project operations.
//!
//! Access via [`Client::projects`].
//!
//! ```rust,no_run
//! use bridge_sdk::{Client, Envelope};
//! use bridge_sdk::project::ReCompileError;
//!
//! # async fn example(client: Client) {
//! let projects = client.projects();
//!
//! // First page of the caller's projects
//! let page = projects.get_mine("session-token").limit(10).await;
//!
//! // Queue a recompilation
//! match projects.re_compile("6650f0c2", "session-token").await {
//!     Envelope::Data(project) => println!("pending: {}", project.pending_compilation),
//!     Envelope::Error(ReCompileError::DocumentNotFound { .. }) => println!("no such project"),
//!     Envelope::Error(err) => eprintln!("{}", err),
//! }
//! # }
//! ```

mod errors;
mod operations;
mod types;

pub use errors::{GetMineError, ReCompileError};
pub use operations::{GetMine, GetMineQuery, ReCompile, ReCompileQuery};
pub use types::{GithubRepo, Language, Paginated, Project, Provider, Visibility};

use futures::future::BoxFuture;

use crate::Envelope;
use crate::client::Client;
use crate::operation::{CallInput, TokenHeaders};

/// Client for the project operations.
#[derive(Clone)]
pub struct ProjectsClient {
    client: Client,
}

impl ProjectsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the projects owned by the holder of `token`.
    ///
    /// Returns a request builder; await it to send.
    ///
    /// ```rust,no_run
    /// # async fn example(client: bridge_sdk::Client) {
    /// let page = client
    ///     .projects()
    ///     .get_mine("session-token")
    ///     .limit(20)
    ///     .skip(40)
    ///     .await;
    /// # }
    /// ```
    pub fn get_mine(&self, token: impl Into<String>) -> GetMineRequest {
        GetMineRequest {
            client: self.client.clone(),
            headers: TokenHeaders::new(token),
            query: GetMineQuery::new(),
        }
    }

    /// Queues a recompilation of `project_id` and returns the updated
    /// project.
    pub fn re_compile(
        &self,
        project_id: impl Into<String>,
        token: impl Into<String>,
    ) -> ReCompileRequest {
        ReCompileRequest {
            client: self.client.clone(),
            headers: TokenHeaders::new(token),
            query: ReCompileQuery::new(project_id),
        }
    }
}

impl std::fmt::Debug for ProjectsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectsClient").finish_non_exhaustive()
    }
}

/// Request to list the caller's projects.
pub struct GetMineRequest {
    client: Client,
    headers: TokenHeaders,
    query: GetMineQuery,
}

impl GetMineRequest {
    /// Sets the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Sets the number of projects to skip.
    #[must_use]
    pub fn skip(mut self, skip: u32) -> Self {
        self.query.skip = Some(skip);
        self
    }

    async fn execute(self) -> Envelope<Paginated<Project>, GetMineError> {
        self.client
            .call::<GetMine>(CallInput::new(self.query, self.headers))
            .await
    }
}

impl std::future::IntoFuture for GetMineRequest {
    type Output = Envelope<Paginated<Project>, GetMineError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

/// Request to recompile one project.
pub struct ReCompileRequest {
    client: Client,
    headers: TokenHeaders,
    query: ReCompileQuery,
}

impl ReCompileRequest {
    /// Returns the id of the project to recompile.
    pub fn project_id(&self) -> &str {
        &self.query.project_id
    }

    async fn execute(self) -> Envelope<Project, ReCompileError> {
        self.client
            .call::<ReCompile>(CallInput::new(self.query, self.headers))
            .await
    }
}

impl std::future::IntoFuture for ReCompileRequest {
    type Output = Envelope<Project, ReCompileError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}
