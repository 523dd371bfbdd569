//! Directory records exchanged with the external identity/persistence system.
//!
//! These are the access-control/membership shapes: repositories under access
//! control, membership groups with join/visibility policies, and federated
//! users with per-repository role grants. Records are created and owned by the
//! external store; this crate only declares their shape. Wire field names are
//! camelCase, matching the upstream API.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{Display, EnumString};

// --- Repository ---

/// A version-controlled or content repository under access control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Unique stable identifier.
    pub id: String,
    pub display_name: String,
    /// Canonical location.
    pub url: String,
    /// Opaque associated-entity key(s); the external store defines the format,
    /// so no delimiter is assumed here.
    pub entity_ids: String,
    /// Suspended repositories must be excluded from active-use listings.
    pub suspended: bool,
}

impl Repository {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.suspended
    }
}

// --- Group policies ---

/// Policy governing how a user becomes a group member.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JoinCondition {
    /// Any user may join unconditionally.
    Open,
    /// Join requests require an approval step.
    Approval,
    /// Membership requires an existing member/admin action; unsolicited
    /// requests are rejected.
    InviteOnly,
}

/// Policy governing who may observe the membership list (not the group's
/// existence).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemberVisibility {
    /// Membership list visible to anyone.
    Public,
    /// Visible only to members.
    Private,
    /// Visible only to group admins (the boundary of "admin" is the consuming
    /// system's call).
    Hidden,
}

// --- Membership ---

/// Minimal user reference carried in a membership list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: String,
}

/// A group's membership relation.
///
/// An absent `members` field means the membership is not loaded/resolved in
/// the current context, not that the group is empty, so the relation is an
/// explicit tri-state rather than a bare `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Membership {
    /// Membership not resolved in this context (lazy reference).
    #[default]
    NotLoaded,
    /// Resolved membership list, possibly empty.
    Loaded(Vec<MemberRef>),
}

impl Membership {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub const fn is_not_loaded(&self) -> bool {
        matches!(self, Self::NotLoaded)
    }

    /// Resolved members, or `None` when the relation is not loaded.
    #[must_use]
    pub fn members(&self) -> Option<&[MemberRef]> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(members) => Some(members),
        }
    }
}

impl From<Option<Vec<MemberRef>>> for Membership {
    fn from(members: Option<Vec<MemberRef>>) -> Self {
        members.map_or(Self::NotLoaded, Self::Loaded)
    }
}

impl Serialize for Membership {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::NotLoaded => serializer.serialize_none(),
            Self::Loaded(members) => members.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Membership {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let members = Option::<Vec<MemberRef>>::deserialize(deserializer)?;
        Ok(members.into())
    }
}

// --- Group ---

/// A membership collective with a join/visibility policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique stable identifier.
    pub id: String,
    pub display_name: String,
    /// Discoverability flag, independent of membership visibility.
    pub is_public: bool,
    pub join_condition: JoinCondition,
    pub member_visibility: MemberVisibility,
    #[serde(default, skip_serializing_if = "Membership::is_not_loaded")]
    pub members: Membership,
}

// --- Roles ---

/// Role literal scoped to one repository.
///
/// Variants are declared in increasing privilege order so `Ord` reflects
/// `contributor < repoadm < admin`; nothing structural enforces that order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Contributor,
    RepoAdm,
    Admin,
}

/// One role grant: a single role literal assigned for a single repository.
///
/// Wire shape is a single-entry map, `{"<repository-id>": "<role>"}`; a user
/// carries an ordered sequence of these, one entry per grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    pub repository_id: String,
    pub role: Role,
}

impl Serialize for RoleGrant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.repository_id, &self.role)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoleGrant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GrantVisitor;

        impl<'de> Visitor<'de> for GrantVisitor {
            type Value = RoleGrant;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a single-entry map of repository id to role")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let Some((repository_id, role)) = access.next_entry::<String, Role>()? else {
                    return Err(serde::de::Error::invalid_length(0, &self));
                };
                if access.next_entry::<String, Role>()?.is_some() {
                    return Err(serde::de::Error::invalid_length(2, &self));
                }
                Ok(RoleGrant { repository_id, role })
            }
        }

        deserializer.deserialize_map(GrantVisitor)
    }
}

// --- User ---

/// An authenticated principal known to the federation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique internal identifier.
    pub id: String,
    pub display_name: String,
    /// Ordered per-repository role grants; absent when the user holds none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<RoleGrant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Externally issued principal name, the federation-stable identity key.
    /// Distinct from `id` and unique across users.
    pub eppn: String,
    /// Timestamp of the last record mutation (ISO-8601 string).
    pub last_modified: String,
}

impl User {
    /// Multimap view of the role grants: repository id to the roles held
    /// there, duplicates collapsed. Grant order stays available through the
    /// underlying `role` sequence.
    #[must_use]
    pub fn roles_by_repository(&self) -> BTreeMap<&str, Vec<Role>> {
        let mut map: BTreeMap<&str, Vec<Role>> = BTreeMap::new();
        for grant in self.role.as_deref().unwrap_or_default() {
            let roles = map.entry(grant.repository_id.as_str()).or_default();
            if !roles.contains(&grant.role) {
                roles.push(grant.role);
            }
        }
        map
    }

    /// Highest-privilege role the user holds for `repository_id`, if any.
    #[must_use]
    pub fn role_for(&self, repository_id: &str) -> Option<Role> {
        self.role
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|grant| grant.repository_id == repository_id)
            .map(|grant| grant.role)
            .max()
    }
}
