// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types owned by the hosting document store.
//!
//! This crate never owns storage. Records are read through
//! [`AccessStore`](crate::traits::AccessStore) and created or edited by
//! administrators through the hosting application's generic CRUD. Submittable
//! records carry a `submitted` flag; anything unsubmitted is a draft and inert
//! for resolution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An identity requesting access: the anonymous guest or a known user key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Identity<ID> {
    Guest,
    User(ID),
}

impl<ID> Identity<ID> {
    /// Return true if this identity is the anonymous guest.
    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest)
    }

    /// Return the user key, if this identity is a known user.
    pub fn user(&self) -> Option<&ID> {
        match self {
            Identity::Guest => None,
            Identity::User(id) => Some(id),
        }
    }
}

/// Per-user access record, at most one per user.
///
/// Grants only apply while the record is submitted.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserAccess<ID> {
    pub user: ID,
    pub submitted: bool,
    pub grants: Vec<GrantRef<ID>>,
}

/// A reference from a user's access record to a space-level access
/// configuration. Disabled references are inert without being deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrantRef<ID> {
    pub space_access: ID,
    pub enabled: bool,
}

/// Space-level access configuration listing per-page flags.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaceAccess<ID> {
    pub space: ID,
    pub submitted: bool,
    pub pages: Vec<PageEntry<ID>>,
}

/// Per-page flags within a space access configuration.
///
/// An entry with both flags unset mentions the page without granting
/// anything, which denies it explicitly. Editable without visible is allowed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageEntry<ID> {
    pub page: ID,
    pub visible: bool,
    pub editable: bool,
}

impl<ID> PageEntry<ID> {
    /// A new entry with both flags unset.
    pub fn new(page: ID) -> Self {
        Self {
            page,
            visible: false,
            editable: false,
        }
    }
}

/// A named collection of pages, the unit of access grouping.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Stable route prefix under which all of the space's pages live.
    pub route: String,
}

/// A single wiki content unit belonging to one space.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page<ID> {
    pub space: ID,
    pub route: String,
    pub title: String,
    pub published: bool,
    pub allow_guest: bool,
}

/// Site-wide switches consulted during resolution.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Deny all guest viewing, even on pages which allow guests themselves.
    pub disable_guest_access: bool,
}
