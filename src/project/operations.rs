//! Operation descriptors for the project endpoints.

use serde::{Deserialize, Serialize};

use super::errors::{GetMineError, ReCompileError};
use super::types::{Paginated, Project};
use crate::operation::{Method, Operation, TokenHeaders};

/// `POST /project/getMine`: lists the caller's projects.
#[derive(Debug, Clone, Copy)]
pub struct GetMine;

impl Operation for GetMine {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/project/getMine";
    type Query = GetMineQuery;
    type Body = ();
    type Headers = TokenHeaders;
    type Output = Paginated<Project>;
    type Error = GetMineError;
}

/// Query of [`GetMine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMineQuery {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of projects to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl GetMineQuery {
    /// Creates a query with server defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of projects to skip.
    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }
}

/// `POST /project/reCompile`: queues a fresh compilation of one project.
#[derive(Debug, Clone, Copy)]
pub struct ReCompile;

impl Operation for ReCompile {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/project/reCompile";
    type Query = ReCompileQuery;
    type Body = ();
    type Headers = TokenHeaders;
    type Output = Project;
    type Error = ReCompileError;
}

/// Query of [`ReCompile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCompileQuery {
    /// Id of the project to recompile.
    pub project_id: String,
}

impl ReCompileQuery {
    /// Creates a query for `project_id`.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}
