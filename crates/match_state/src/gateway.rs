//! Seam between the state pipeline and the remote matching service.

use core_types::{Preferences, Project};
use std::fmt::Display;

/// The two calls the client makes to the matching service.
///
/// Implementations only transport data; they never touch client state, so
/// a failed call cannot corrupt anything. No retry or de-duplication is
/// expected.
#[allow(async_fn_in_trait)]
pub trait MatchingGateway {
    type Error: Display;

    /// `GET {base}/projects`
    async fn fetch_projects(&self) -> Result<Vec<Project>, Self::Error>;

    /// `POST {base}/match` with the sparse preferences as the body.
    async fn match_projects(&self, criteria: &Preferences) -> Result<Vec<Project>, Self::Error>;
}

impl<G: MatchingGateway> MatchingGateway for &G {
    type Error = G::Error;

    async fn fetch_projects(&self) -> Result<Vec<Project>, Self::Error> {
        (**self).fetch_projects().await
    }

    async fn match_projects(&self, criteria: &Preferences) -> Result<Vec<Project>, Self::Error> {
        (**self).match_projects(criteria).await
    }
}
