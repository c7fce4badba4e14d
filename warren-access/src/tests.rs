// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_matches::assert_matches;

use crate::access::Access;
use crate::records::{GrantRef, Identity, SpaceAccess, UserAccess};
use crate::resolver::{granted_pages, resolve};
use crate::test_utils::{MemoryStore, RecordId, page, space_access};

fn grant(space_access: RecordId) -> GrantRef<RecordId> {
    GrantRef {
        space_access,
        enabled: true,
    }
}

/// One user "ada" with a submitted access record granting her a submitted
/// space access over "s1": p1 fully granted, p2 mentioned but denied. A third
/// page p3 lives in another space.
fn fixture() -> MemoryStore<RecordId> {
    let mut store = MemoryStore::new();
    store.insert_page("p1", page("s1", "eng/p1", false));
    store.insert_page("p2", page("s1", "eng/p2", false));
    store.insert_page("p3", page("s2", "sales/p3", false));
    store.insert_space_access(
        "sa1",
        space_access("s1", &[("p1", true, true), ("p2", false, false)]),
    );
    store.insert_user_access(UserAccess {
        user: "ada",
        submitted: true,
        grants: vec![grant("sa1")],
    });
    store
}

#[test]
fn granted_page_resolves_to_its_entry_flags() {
    let store = fixture();
    let ada = Identity::User("ada");

    assert_eq!(resolve(&store, &ada, &"p1", true).expect("resolves"), Access::edit());
    assert_eq!(
        resolve(&store, &ada, &"p2", true).expect("resolves"),
        Access::denied()
    );
}

#[test]
fn page_outside_granted_spaces_falls_back_to_its_own_flags() {
    let mut store = fixture();
    let ada = Identity::User("ada");

    assert_eq!(
        resolve(&store, &ada, &"p3", false).expect("resolves"),
        Access::denied()
    );

    store.pages.get_mut("p3").expect("page exists").allow_guest = true;
    assert_eq!(resolve(&store, &ada, &"p3", false).expect("resolves"), Access::view());
}

#[test]
fn without_edit_mode_edit_is_not_evaluated() {
    let store = fixture();
    let ada = Identity::User("ada");

    let access = resolve(&store, &ada, &"p1", false).expect("resolves");
    assert!(access.can_view);
    assert!(!access.can_edit);
}

#[test]
fn disabling_a_grant_removes_only_its_contribution() {
    let mut store = fixture();
    store.insert_page("p4", page("s2", "sales/p4", false));
    store.insert_space_access("sa2", space_access("s2", &[("p4", true, false)]));
    store.insert_user_access(UserAccess {
        user: "ada",
        submitted: true,
        grants: vec![grant("sa1"), grant("sa2")],
    });
    let ada = Identity::User("ada");

    assert!(resolve(&store, &ada, &"p1", false).expect("resolves").can_view);
    assert!(resolve(&store, &ada, &"p4", false).expect("resolves").can_view);

    store
        .user_access
        .get_mut("ada")
        .expect("record exists")
        .grants[0]
        .enabled = false;

    assert!(!resolve(&store, &ada, &"p1", false).expect("resolves").can_view);
    assert!(resolve(&store, &ada, &"p4", false).expect("resolves").can_view);
}

#[test]
fn unsubmitted_records_are_inert() {
    let mut store = fixture();
    let ada = Identity::User("ada");

    // Draft access record: back to page-level defaults.
    store.user_access.get_mut("ada").expect("record exists").submitted = false;
    assert!(!resolve(&store, &ada, &"p1", false).expect("resolves").can_view);

    // Submitted record pointing at a draft space access: grants nothing, and
    // the unmentioned page falls back to its own flags.
    store.user_access.get_mut("ada").expect("record exists").submitted = true;
    store
        .space_access
        .get_mut("sa1")
        .expect("record exists")
        .submitted = false;
    assert!(!resolve(&store, &ada, &"p1", false).expect("resolves").can_view);
}

#[test]
fn permissions_union_across_overlapping_grants() {
    let mut store = fixture();
    store.insert_space_access("sa3", space_access("s1", &[("p2", true, false)]));
    store.insert_user_access(UserAccess {
        user: "ada",
        submitted: true,
        grants: vec![grant("sa1"), grant("sa3")],
    });
    let ada = Identity::User("ada");

    // sa1 denies p2 outright, sa3 allows viewing it: any allowing grant wins.
    assert_eq!(resolve(&store, &ada, &"p2", true).expect("resolves"), Access::view());
}

#[test]
fn edit_without_view_is_honoured() {
    let mut store = MemoryStore::new();
    store.insert_page("hidden", page("s1", "eng/hidden", false));
    store.insert_space_access("sa1", space_access("s1", &[("hidden", false, true)]));
    store.insert_user_access(UserAccess {
        user: "ada",
        submitted: true,
        grants: vec![grant("sa1")],
    });
    let ada = Identity::User("ada");

    let access = resolve(&store, &ada, &"hidden", true).expect("resolves");
    assert!(!access.can_view);
    assert!(access.can_edit);
}

#[test]
fn unconfigured_user_defers_edit_to_site_permission() {
    let mut store = MemoryStore::new();
    store.insert_page("p1", page("s1", "eng/p1", true));
    let bea = Identity::User("bea");

    let access = resolve(&store, &bea, &"p1", true).expect("resolves");
    assert!(access.can_view);
    assert!(!access.can_edit);

    store.allow_default_edit("bea");
    let access = resolve(&store, &bea, &"p1", true).expect("resolves");
    assert!(access.can_edit);
}

#[test]
fn site_guest_switch_does_not_apply_to_users() {
    let mut store = MemoryStore::new();
    store.insert_page("p1", page("s1", "eng/p1", true));
    store.settings.disable_guest_access = true;

    assert!(
        !resolve(&store, &Identity::Guest, &"p1", false)
            .expect("resolves")
            .can_view
    );
    assert!(
        resolve(&store, &Identity::User("bea"), &"p1", false)
            .expect("resolves")
            .can_view
    );
}

#[test]
fn granted_pages_unions_flags_and_drops_denials() {
    let mut store = fixture();
    store.insert_space_access("sa3", space_access("s1", &[("p2", false, true)]));
    store.insert_user_access(UserAccess {
        user: "ada",
        submitted: true,
        grants: vec![grant("sa1"), grant("sa3")],
    });

    let pages = granted_pages(&store, &Identity::User("ada")).expect("resolves");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages["p1"], Access::edit());
    // Denied by sa1, edit-only through sa3.
    assert_eq!(
        pages["p2"],
        Access {
            can_view: false,
            can_edit: true
        }
    );
}

#[test]
fn granted_pages_is_empty_for_guests_and_unconfigured_users() {
    let store = fixture();

    assert!(granted_pages(&store, &Identity::Guest).expect("resolves").is_empty());
    assert!(
        granted_pages(&store, &Identity::User("nobody"))
            .expect("resolves")
            .is_empty()
    );
}

#[test]
fn grants_over_foreign_spaces_do_not_leak() {
    let mut store = fixture();
    // A submitted space access over s2 mentioning p1, which lives in s1. The
    // space mismatch makes it a non-match for p1.
    store.insert_space_access(
        "sa-wrong",
        SpaceAccess {
            space: "s2",
            submitted: true,
            pages: vec![crate::records::PageEntry {
                page: "p1",
                visible: true,
                editable: true,
            }],
        },
    );
    store.insert_user_access(UserAccess {
        user: "bea",
        submitted: true,
        grants: vec![grant("sa-wrong")],
    });

    let access = resolve(&store, &Identity::User("bea"), &"p1", true).expect("resolves");
    assert_matches!(access, Access { can_view: false, can_edit: false });
}
