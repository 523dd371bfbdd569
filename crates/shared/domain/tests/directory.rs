use fedhub_domain::directory::{
    Group, JoinCondition, MemberVisibility, Membership, Repository, Role, RoleGrant, User,
};
use serde_json::json;

#[test]
fn repository_uses_camel_case_wire_names() {
    let raw = json!({
        "id": "r1",
        "displayName": "Repo",
        "url": "https://x/r1",
        "entityIds": "e1,e2",
        "suspended": false
    });

    let repo: Repository = serde_json::from_value(raw).expect("repository deserialize");
    assert_eq!(repo.display_name, "Repo");
    assert_eq!(repo.entity_ids, "e1,e2");
    assert!(repo.is_active());

    let back = serde_json::to_value(&repo).expect("repository serialize");
    assert_eq!(back["displayName"], "Repo");
    assert_eq!(back["entityIds"], "e1,e2");
}

#[test]
fn group_without_members_is_not_loaded() {
    let raw = json!({
        "id": "g1",
        "displayName": "G",
        "isPublic": true,
        "joinCondition": "open",
        "memberVisibility": "public"
    });

    let group: Group = serde_json::from_value(raw).expect("group deserialize");
    assert!(group.members.is_not_loaded());
    assert!(group.members.members().is_none());

    // NotLoaded must round-trip as an absent field.
    let back = serde_json::to_value(&group).expect("group serialize");
    assert!(back.get("members").is_none());
}

#[test]
fn group_with_empty_members_is_loaded_and_empty() {
    let raw = json!({
        "id": "g2",
        "displayName": "G2",
        "isPublic": false,
        "joinCondition": "approval",
        "memberVisibility": "private",
        "members": []
    });

    let group: Group = serde_json::from_value(raw).expect("group deserialize");
    assert_eq!(group.members, Membership::Loaded(vec![]));
    assert_eq!(group.members.members(), Some(&[][..]));

    // Loaded-but-empty stays distinct from NotLoaded on the wire.
    let back = serde_json::to_value(&group).expect("group serialize");
    assert_eq!(back["members"], json!([]));
}

#[test]
fn join_condition_literals_are_closed() {
    assert_eq!(
        serde_json::from_value::<JoinCondition>(json!("invite-only")).expect("literal"),
        JoinCondition::InviteOnly
    );
    assert!(serde_json::from_value::<JoinCondition>(json!("locked")).is_err());
    assert!(serde_json::from_value::<MemberVisibility>(json!("secret")).is_err());
}

#[test]
fn role_grant_is_a_single_entry_map() {
    let grant: RoleGrant = serde_json::from_value(json!({ "r1": "repoadm" })).expect("grant");
    assert_eq!(grant.repository_id, "r1");
    assert_eq!(grant.role, Role::RepoAdm);

    assert_eq!(serde_json::to_value(&grant).expect("grant serialize"), json!({ "r1": "repoadm" }));

    // Merged maps and empty maps are not grants.
    assert!(serde_json::from_value::<RoleGrant>(json!({ "r1": "admin", "r2": "admin" })).is_err());
    assert!(serde_json::from_value::<RoleGrant>(json!({})).is_err());
    assert!(serde_json::from_value::<RoleGrant>(json!({ "r1": "owner" })).is_err());
}

#[test]
fn user_role_sequence_preserves_grant_order() {
    let raw = json!({
        "id": "u1",
        "displayName": "A",
        "role": [ { "r2": "contributor" }, { "r1": "admin" }, { "r2": "repoadm" } ],
        "eppn": "a@x.org",
        "lastModified": "2024-01-01T00:00:00Z"
    });

    let user: User = serde_json::from_value(raw).expect("user deserialize");
    let grants = user.role.as_deref().expect("grants");
    assert_eq!(grants[0].repository_id, "r2");
    assert_eq!(grants[1].repository_id, "r1");

    let by_repo = user.roles_by_repository();
    assert_eq!(by_repo["r1"], vec![Role::Admin]);
    assert_eq!(by_repo["r2"], vec![Role::Contributor, Role::RepoAdm]);

    assert_eq!(user.role_for("r2"), Some(Role::RepoAdm));
    assert_eq!(user.role_for("r3"), None);
}

#[test]
fn user_optional_fields_stay_absent() {
    let raw = json!({
        "id": "u1",
        "displayName": "A",
        "eppn": "a@x.org",
        "lastModified": "2024-01-01T00:00:00Z"
    });

    let user: User = serde_json::from_value(raw).expect("user deserialize");
    assert!(user.role.is_none());
    assert!(user.email.is_none());
    assert!(user.roles_by_repository().is_empty());

    let back = serde_json::to_value(&user).expect("user serialize");
    assert!(back.get("role").is_none());
    assert!(back.get("email").is_none());
    assert_eq!(back["eppn"], "a@x.org");
}

#[test]
fn role_privilege_order_is_increasing() {
    assert!(Role::Contributor < Role::RepoAdm);
    assert!(Role::RepoAdm < Role::Admin);
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::RepoAdm.to_string(), "repoadm");
}
