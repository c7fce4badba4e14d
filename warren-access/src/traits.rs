// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait interfaces for reading records from the hosting document store.

use std::fmt::Debug;
use std::hash::Hash;

use crate::records::{Page, Settings, Space, SpaceAccess, UserAccess};

/// Marker trait for opaque record keys.
///
/// Keys are whatever the hosting document store names records with: emails,
/// routes, autonames. Resolution never inspects them beyond equality.
pub trait Key: Clone + Debug + Eq + Hash {}

impl Key for String {}
impl Key for &str {}

/// Read access to the records backing resolution.
///
/// Implementations return records as currently persisted, drafts included;
/// filtering out unsubmitted or disabled records is the resolver's job, not
/// the store's.
pub trait AccessStore<ID>
where
    ID: Key,
{
    type Error: Debug;

    /// The access record for a user, if one exists.
    fn user_access(&self, user: &ID) -> Result<Option<UserAccess<ID>>, Self::Error>;

    /// A space access configuration by its record key.
    fn space_access(&self, id: &ID) -> Result<Option<SpaceAccess<ID>>, Self::Error>;

    /// A space record by its key.
    fn space(&self, id: &ID) -> Result<Option<Space>, Self::Error>;

    /// A page record by its key.
    fn page(&self, id: &ID) -> Result<Option<Page<ID>>, Self::Error>;

    /// All page records keyed by id.
    fn pages(&self) -> Result<Vec<(ID, Page<ID>)>, Self::Error>;

    /// Site-wide resolution switches.
    fn settings(&self) -> Result<Settings, Self::Error>;

    /// Whether the hosting application grants this user its generic page
    /// write permission.
    ///
    /// Consulted only for users without an active access record.
    fn default_edit_permitted(&self, user: &ID) -> Result<bool, Self::Error>;
}
