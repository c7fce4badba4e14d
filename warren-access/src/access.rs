// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The access a user holds on a single page: whether the page may be viewed
/// and whether it may be edited.
///
/// Both flags are independent. Edit without view is unusual but valid: such a
/// page stays out of the user's navigation while still accepting their
/// changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Access {
    pub can_view: bool,
    pub can_edit: bool,
}

impl Access {
    /// No access at all.
    pub fn denied() -> Self {
        Self {
            can_view: false,
            can_edit: false,
        }
    }

    /// View access without edit.
    pub fn view() -> Self {
        Self {
            can_view: true,
            can_edit: false,
        }
    }

    /// View and edit access.
    pub fn edit() -> Self {
        Self {
            can_view: true,
            can_edit: true,
        }
    }

    /// Combine two access results, keeping the most permissive flags of each.
    ///
    /// When a page is mentioned by more than one grant, any grant that allows
    /// view or edit wins.
    pub fn union(self, other: Self) -> Self {
        Self {
            can_view: self.can_view || other.can_view,
            can_edit: self.can_edit || other.can_edit,
        }
    }

    /// Return true if neither view nor edit is allowed.
    pub fn is_denied(&self) -> bool {
        !self.can_view && !self.can_edit
    }
}

impl Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match (self.can_view, self.can_edit) {
            (false, false) => "denied",
            (true, false) => "view",
            (true, true) => "view+edit",
            (false, true) => "edit-only",
        };

        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::Access;

    #[test]
    fn union_is_most_permissive() {
        assert_eq!(Access::denied().union(Access::view()), Access::view());
        assert_eq!(Access::view().union(Access::edit()), Access::edit());
        assert_eq!(Access::denied().union(Access::denied()), Access::denied());

        let edit_only = Access {
            can_view: false,
            can_edit: true,
        };
        assert_eq!(Access::view().union(edit_only), Access::edit());
    }

    #[test]
    fn display() {
        assert_eq!(Access::denied().to_string(), "denied");
        assert_eq!(Access::view().to_string(), "view");
        assert_eq!(Access::edit().to_string(), "view+edit");
        assert_eq!(
            Access {
                can_view: false,
                can_edit: true
            }
            .to_string(),
            "edit-only"
        );
    }
}
