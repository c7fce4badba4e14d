// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.

use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use crate::records::{Page, PageEntry, Settings, Space, SpaceAccess, UserAccess};
use crate::traits::{AccessStore, Key};

/// Record keys used throughout tests.
pub type RecordId = &'static str;

/// In-memory record store.
///
/// Fields are public so tests can reach into site settings and records
/// directly.
#[derive(Clone, Debug)]
pub struct MemoryStore<ID>
where
    ID: Key,
{
    pub user_access: HashMap<ID, UserAccess<ID>>,
    pub space_access: HashMap<ID, SpaceAccess<ID>>,
    pub spaces: HashMap<ID, Space>,
    pub pages: HashMap<ID, Page<ID>>,
    pub settings: Settings,
    pub default_editors: HashSet<ID>,
}

impl<ID> MemoryStore<ID>
where
    ID: Key,
{
    pub fn new() -> Self {
        Self {
            user_access: HashMap::new(),
            space_access: HashMap::new(),
            spaces: HashMap::new(),
            pages: HashMap::new(),
            settings: Settings::default(),
            default_editors: HashSet::new(),
        }
    }

    /// Insert an access record, keyed by its user.
    pub fn insert_user_access(&mut self, record: UserAccess<ID>) {
        self.user_access.insert(record.user.clone(), record);
    }

    pub fn insert_space_access(&mut self, id: ID, record: SpaceAccess<ID>) {
        self.space_access.insert(id, record);
    }

    pub fn insert_space(&mut self, id: ID, space: Space) {
        self.spaces.insert(id, space);
    }

    pub fn insert_page(&mut self, id: ID, page: Page<ID>) {
        self.pages.insert(id, page);
    }

    /// Grant the user the hosting application's generic page write
    /// permission.
    pub fn allow_default_edit(&mut self, user: ID) {
        self.default_editors.insert(user);
    }
}

impl<ID> Default for MemoryStore<ID>
where
    ID: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<ID> AccessStore<ID> for MemoryStore<ID>
where
    ID: Key,
{
    type Error = Infallible;

    fn user_access(&self, user: &ID) -> Result<Option<UserAccess<ID>>, Self::Error> {
        Ok(self.user_access.get(user).cloned())
    }

    fn space_access(&self, id: &ID) -> Result<Option<SpaceAccess<ID>>, Self::Error> {
        Ok(self.space_access.get(id).cloned())
    }

    fn space(&self, id: &ID) -> Result<Option<Space>, Self::Error> {
        Ok(self.spaces.get(id).cloned())
    }

    fn page(&self, id: &ID) -> Result<Option<Page<ID>>, Self::Error> {
        Ok(self.pages.get(id).cloned())
    }

    fn pages(&self) -> Result<Vec<(ID, Page<ID>)>, Self::Error> {
        Ok(self
            .pages
            .iter()
            .map(|(id, page)| (id.clone(), page.clone()))
            .collect())
    }

    fn settings(&self) -> Result<Settings, Self::Error> {
        Ok(self.settings)
    }

    fn default_edit_permitted(&self, user: &ID) -> Result<bool, Self::Error> {
        Ok(self.default_editors.contains(user))
    }
}

/// A published page with a title derived from its route.
pub fn page(space: RecordId, route: &str, allow_guest: bool) -> Page<RecordId> {
    Page {
        space,
        route: route.to_string(),
        title: route.to_string(),
        published: true,
        allow_guest,
    }
}

/// A page with an explicit title and published flag, closed to guests.
pub fn titled_page(space: RecordId, route: &str, title: &str, published: bool) -> Page<RecordId> {
    Page {
        space,
        route: route.to_string(),
        title: title.to_string(),
        published,
        allow_guest: false,
    }
}

/// A submitted space access configuration from `(page, visible, editable)`
/// triples.
pub fn space_access(
    space: RecordId,
    entries: &[(RecordId, bool, bool)],
) -> SpaceAccess<RecordId> {
    SpaceAccess {
        space,
        submitted: true,
        pages: entries
            .iter()
            .map(|&(page, visible, editable)| PageEntry {
                page,
                visible,
                editable,
            })
            .collect(),
    }
}

/// Route tracing events to stderr, filtered by `RUST_LOG`.
#[cfg(feature = "test_utils")]
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
