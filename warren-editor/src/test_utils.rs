// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.

use std::convert::Infallible;

use thiserror::Error;

use warren_access::test_utils::MemoryStore;
use warren_access::traits::{AccessStore, Key};

use crate::store::RouteStore;

// The in-memory record store doubles as the session's route lookup.
impl<ID> RouteStore<ID> for MemoryStore<ID>
where
    ID: Key,
{
    type Error = Infallible;

    async fn route(&self, space: &ID) -> Result<Option<String>, Self::Error> {
        Ok(self.space(space)?.map(|space| space.route))
    }
}

#[derive(Debug, Error)]
#[error("route lookup offline")]
pub struct RouteOffline;

/// A route lookup which always fails.
#[derive(Clone, Debug, Default)]
pub struct OfflineRoutes;

impl<ID> RouteStore<ID> for OfflineRoutes
where
    ID: Key,
{
    type Error = RouteOffline;

    async fn route(&self, _space: &ID) -> Result<Option<String>, Self::Error> {
        Err(RouteOffline)
    }
}
