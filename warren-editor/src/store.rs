// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait interfaces for the lookups an editing session performs.

use std::fmt::Debug;

use warren_access::traits::Key;

/// Asynchronous route lookup for space records.
///
/// The editing session fetches a route once per committed space value to
/// scope the page choice selector. The fetch is the session's only
/// suspension point.
pub trait RouteStore<ID>
where
    ID: Key,
{
    type Error: Debug;

    /// Route of a space record, if the space exists.
    fn route(&self, space: &ID) -> impl Future<Output = Result<Option<String>, Self::Error>>;
}
