// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-hop access resolution.
//!
//! Resolution walks the grant chain one indexed lookup at a time: user →
//! access record → enabled grants → submitted space access configurations →
//! page entries. Inactive records (unsubmitted, disabled or dangling) are
//! skipped early rather than treated as errors.

use std::collections::HashMap;
use std::fmt::Debug;

use thiserror::Error;
use tracing::{debug, warn};

use crate::access::Access;
use crate::records::Identity;
use crate::traits::{AccessStore, Key};

#[derive(Debug, Error)]
pub enum ResolveError<ID, E>
where
    ID: Key,
    E: Debug,
{
    #[error("unknown page {0:?}")]
    UnknownPage(ID),

    #[error("store error: {0:?}")]
    Store(E),
}

/// Resolve the access an identity holds on a page.
///
/// Resolution is a pure read over current record state: repeated calls with
/// unchanged records return the same result, so callers may cache the
/// outcome. Unless `edit_mode` is set (derived from an explicit edit request
/// such as an `?editWiki=1` parameter), edit permission is not evaluated and
/// `can_edit` is always false.
///
/// A page mentioned by at least one active grant is governed entirely by its
/// entries, even when they deny everything. A page mentioned by none falls
/// back to its own guest flag, so users without configured access keep the
/// default site behaviour.
pub fn resolve<ID, S>(
    store: &S,
    identity: &Identity<ID>,
    page_id: &ID,
    edit_mode: bool,
) -> Result<Access, ResolveError<ID, S::Error>>
where
    ID: Key,
    S: AccessStore<ID>,
{
    let page = store
        .page(page_id)
        .map_err(ResolveError::Store)?
        .ok_or_else(|| ResolveError::UnknownPage(page_id.clone()))?;

    let Identity::User(user) = identity else {
        let settings = store.settings().map_err(ResolveError::Store)?;
        let access = if page.allow_guest && !settings.disable_guest_access {
            Access::view()
        } else {
            Access::denied()
        };
        debug!(page = ?page_id, %access, "resolved guest access");
        return Ok(access);
    };

    let active = store
        .user_access(user)
        .map_err(ResolveError::Store)?
        .filter(|record| record.submitted);

    let Some(record) = active else {
        // No custom access is configured for this user: the page's own guest
        // flag governs viewing and the hosting application's generic write
        // permission governs editing. The site-wide guest switch only applies
        // to actual guests.
        let can_edit = edit_mode
            && store
                .default_edit_permitted(user)
                .map_err(ResolveError::Store)?;
        let access = Access {
            can_view: page.allow_guest,
            can_edit,
        };
        debug!(user = ?user, page = ?page_id, %access, "no access record, page defaults apply");
        return Ok(access);
    };

    let mut mentioned = false;
    let mut granted = Access::denied();
    let mut matched_grant = None;

    for grant in record.grants.iter().filter(|grant| grant.enabled) {
        let Some(space_access) = store
            .space_access(&grant.space_access)
            .map_err(ResolveError::Store)?
        else {
            warn!(
                space_access = ?grant.space_access,
                "skipping dangling space access reference"
            );
            continue;
        };

        if !space_access.submitted || space_access.space != page.space {
            continue;
        }

        for entry in space_access
            .pages
            .iter()
            .filter(|entry| &entry.page == page_id)
        {
            mentioned = true;
            granted = granted.union(Access {
                can_view: entry.visible,
                can_edit: entry.editable,
            });
            if matched_grant.is_none() {
                matched_grant = Some(grant.space_access.clone());
            }
        }
    }

    let access = if mentioned {
        Access {
            can_view: granted.can_view,
            can_edit: edit_mode && granted.can_edit,
        }
    } else {
        Access {
            can_view: page.allow_guest,
            can_edit: false,
        }
    };

    debug!(
        user = ?user,
        page = ?page_id,
        %access,
        grant = ?matched_grant,
        "resolved page access"
    );

    Ok(access)
}

/// Every page mentioned by the identity's active grants, with the combined
/// access flags across all of them.
///
/// Pages whose combined flags deny everything are left out. Guests and users
/// without an active access record get an empty map. Callers filtering
/// navigation should check `can_view`; edit-only pages are included but not
/// meant to be listed.
pub fn granted_pages<ID, S>(
    store: &S,
    identity: &Identity<ID>,
) -> Result<HashMap<ID, Access>, ResolveError<ID, S::Error>>
where
    ID: Key,
    S: AccessStore<ID>,
{
    let Identity::User(user) = identity else {
        return Ok(HashMap::new());
    };

    let Some(record) = store
        .user_access(user)
        .map_err(ResolveError::Store)?
        .filter(|record| record.submitted)
    else {
        return Ok(HashMap::new());
    };

    let mut pages: HashMap<ID, Access> = HashMap::new();

    for grant in record.grants.iter().filter(|grant| grant.enabled) {
        let Some(space_access) = store
            .space_access(&grant.space_access)
            .map_err(ResolveError::Store)?
        else {
            warn!(
                space_access = ?grant.space_access,
                "skipping dangling space access reference"
            );
            continue;
        };

        if !space_access.submitted {
            continue;
        }

        for entry in &space_access.pages {
            let access = Access {
                can_view: entry.visible,
                can_edit: entry.editable,
            };
            pages
                .entry(entry.page.clone())
                .and_modify(|held| *held = held.union(access))
                .or_insert(access);
        }
    }

    pages.retain(|_, access| !access.is_denied());

    debug!(user = ?user, count = pages.len(), "collected granted pages");

    Ok(pages)
}
