// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editing session for a space access record's page list.
//!
//! The session reacts to a closed set of operator events: the space field
//! changing, and the operator confirming or declining the destructive clear
//! that a space change implies. Each event is handled to completion before
//! the next one arrives.

use thiserror::Error;
use tracing::{debug, warn};

use warren_access::PageEntry;
use warren_access::traits::Key;

use crate::store::RouteStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no confirmation is pending")]
    NoConfirmationPending,

    #[error("a confirmation is pending")]
    ConfirmationPending,
}

/// Where the session stands between events.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditorState<ID> {
    Idle,
    /// The operator was asked to confirm clearing the page list before the
    /// space field moves to the held value.
    ConfirmPending { proposed: ID },
}

/// What the caller must do after an event was handled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition<ID> {
    /// The field kept its committed value; nothing happened.
    Unchanged,

    /// Present a yes/no confirmation to the operator, then feed the answer
    /// back through [`AccessListEditor::confirm`] or
    /// [`AccessListEditor::decline`].
    ConfirmRequested { to: ID },

    /// The space change was applied. When `cleared` the page list was emptied
    /// and its rendering must be refreshed. The choice scope changed either
    /// way, so the page selector must be refreshed too.
    Committed { cleared: bool },

    /// The operator declined: reset the displayed field to the returned
    /// value. Nothing else changed.
    Reverted { to: Option<ID> },
}

/// An in-progress edit of a space access record.
///
/// Tracks the last committed space value and the route scoping the page
/// choice selector. The page list never holds entries from outside the
/// committed space's route scope: a confirmed space change clears the list
/// outright rather than silently filtering it afterwards.
#[derive(Debug)]
pub struct AccessListEditor<ID, S> {
    store: S,
    state: EditorState<ID>,
    previous_space: Option<ID>,
    route_cache: Option<String>,
    entries: Vec<PageEntry<ID>>,
}

impl<ID, S> AccessListEditor<ID, S>
where
    ID: Key,
    S: RouteStore<ID>,
{
    /// Open a session over the record's current field values.
    ///
    /// When a space is already set its route is fetched immediately; until
    /// that fetch lands only the choice scope is missing, the rest of the
    /// session is usable.
    pub async fn load(store: S, space: Option<ID>, entries: Vec<PageEntry<ID>>) -> Self {
        let mut session = Self {
            store,
            state: EditorState::Idle,
            previous_space: space,
            route_cache: None,
            entries,
        };

        if let Some(space) = session.previous_space.clone() {
            session.route_cache = session.fetch_route(&space).await;
        }

        session
    }

    /// Handle the space field changing to `next`.
    ///
    /// Changing to the committed value is a no-op. Changing away from it with
    /// a non-empty page list requests confirmation first; with an empty list
    /// the change commits immediately.
    pub async fn space_changed(&mut self, next: ID) -> Result<Transition<ID>, EditorError> {
        if let EditorState::ConfirmPending { .. } = self.state {
            return Err(EditorError::ConfirmationPending);
        }

        if self.previous_space.as_ref() == Some(&next) {
            return Ok(Transition::Unchanged);
        }

        if self.entries.is_empty() {
            self.commit(next).await;
            return Ok(Transition::Committed { cleared: false });
        }

        self.state = EditorState::ConfirmPending {
            proposed: next.clone(),
        };

        Ok(Transition::ConfirmRequested { to: next })
    }

    /// The operator confirmed clearing the page list.
    pub async fn confirm(&mut self) -> Result<Transition<ID>, EditorError> {
        let EditorState::ConfirmPending { proposed } =
            std::mem::replace(&mut self.state, EditorState::Idle)
        else {
            return Err(EditorError::NoConfirmationPending);
        };

        self.entries.clear();
        self.commit(proposed).await;

        Ok(Transition::Committed { cleared: true })
    }

    /// The operator declined: the change is abandoned with no side effects.
    pub fn decline(&mut self) -> Result<Transition<ID>, EditorError> {
        if !matches!(self.state, EditorState::ConfirmPending { .. }) {
            return Err(EditorError::NoConfirmationPending);
        }

        self.state = EditorState::Idle;

        Ok(Transition::Reverted {
            to: self.previous_space.clone(),
        })
    }

    /// Append a page entry to the draft list.
    pub fn add_entry(&mut self, entry: PageEntry<ID>) -> Result<(), EditorError> {
        if let EditorState::ConfirmPending { .. } = self.state {
            return Err(EditorError::ConfirmationPending);
        }

        self.entries.push(entry);

        Ok(())
    }

    pub fn state(&self) -> &EditorState<ID> {
        &self.state
    }

    /// The last committed space value.
    pub fn space(&self) -> Option<&ID> {
        self.previous_space.as_ref()
    }

    /// Route scope for the page choice selector.
    ///
    /// `None` until the route of the committed space has been fetched, and
    /// after a failed fetch; an unset scope matches no pages.
    pub fn choice_scope(&self) -> Option<&str> {
        self.route_cache.as_deref()
    }

    pub fn entries(&self) -> &[PageEntry<ID>] {
        &self.entries
    }

    async fn commit(&mut self, next: ID) {
        self.route_cache = self.fetch_route(&next).await;
        self.previous_space = Some(next);
        debug!(
            space = ?self.previous_space,
            scope = self.route_cache.as_deref(),
            "committed space change"
        );
    }

    async fn fetch_route(&self, space: &ID) -> Option<String> {
        match self.store.route(space).await {
            Ok(Some(route)) => Some(route),
            Ok(None) => {
                warn!(space = ?space, "space record has no route");
                None
            }
            Err(err) => {
                warn!(
                    space = ?space,
                    err = ?err,
                    "route fetch failed, page choices match nothing until the next change"
                );
                None
            }
        }
    }
}
