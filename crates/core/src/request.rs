use serde::Serialize;

use crate::{error::TriggerError, ttl::TimeToLive};

/// Base URL of the CircleCI v1 API.
pub const DEFAULT_API_URL: &str = "https://circleci.com/api/v1";

/// CircleCI project the builds run on.
const PROJECT: &str = "demisto/content";

/// A validated request to trigger a build.
///
/// Construction enforces the service limits, so any value of this type is
/// safe to serialize and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    branch: String,
    token: String,
    time_to_live: TimeToLive,
    contributor_branch: Option<String>,
}

impl BuildRequest {
    /// Validates the caller-supplied parameters into a sendable request.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::EmptyBranch`] or [`TriggerError::EmptyToken`]
    /// when the corresponding argument is empty, and
    /// [`TriggerError::TimeToLiveTooHigh`] when the requested time-to-live
    /// exceeds the service maximum.
    pub fn new(
        branch: impl Into<String>,
        token: impl Into<String>,
        time_to_live: Option<u32>,
        contributor_branch: Option<String>,
    ) -> Result<Self, TriggerError> {
        let branch = branch.into();
        if branch.is_empty() {
            return Err(TriggerError::EmptyBranch);
        }

        let token = token.into();
        if token.is_empty() {
            return Err(TriggerError::EmptyToken);
        }

        let time_to_live = TimeToLive::resolve(time_to_live)?;

        Ok(Self {
            branch,
            token,
            time_to_live,
            contributor_branch,
        })
    }

    /// Branch the build will run on.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The resolved time-to-live.
    pub fn time_to_live(&self) -> TimeToLive {
        self.time_to_live
    }

    /// Contributor branch forwarded to the build, if any.
    pub fn contributor_branch(&self) -> Option<&str> {
        self.contributor_branch.as_deref()
    }

    /// Full URL the trigger request is POSTed to.
    ///
    /// The branch and token are interpolated verbatim; the service expects
    /// them unescaped.
    pub fn trigger_url(&self, api_url: &str) -> String {
        format!(
            "{api_url}/project/{PROJECT}/tree/{branch}?circle-token={token}",
            branch = self.branch,
            token = self.token,
        )
    }

    /// JSON body describing the build parameters.
    pub fn payload(&self) -> TriggerPayload {
        TriggerPayload {
            build_parameters: BuildParameters {
                time_to_live: self.time_to_live.minutes(),
                contrib_branch: self.contributor_branch.clone(),
            },
        }
    }
}

/// Wire format of the trigger request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerPayload {
    /// Parameters the CI service passes into the triggered build.
    pub build_parameters: BuildParameters,
}

/// Build parameters understood by the triggered job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildParameters {
    /// Minutes the build environment stays alive before teardown.
    #[serde(rename = "TIME_TO_LIVE")]
    pub time_to_live: u32,

    /// Fork or PR source branch, omitted when not supplied.
    #[serde(rename = "CONTRIB_BRANCH", skip_serializing_if = "Option::is_none")]
    pub contrib_branch: Option<String>,
}
