//! # Record Validation
//!
//! Shape/field validators for the three directory records. These implement the
//! contract at the deserialization boundary: raw JSON in, typed record out, or
//! an error on the first structural violation. The functions are pure and
//! independent per record; callers may run them in any order.
//!
//! Two conforming modes are offered:
//! * fail-fast per record (`validate_repository` / `validate_group` /
//!   `validate_user`), and
//! * accumulate over a whole snapshot ([`validate_directory`]), which also
//!   applies the cross-record uniqueness and referential checks.

use crate::error::{ReferentialWarning, ValidationError};
use chrono::DateTime;
use fedhub_kernel::domain::constants::{
    GROUP, JOIN_CONDITIONS, MEMBER_VISIBILITIES, REPOSITORY, ROLES, USER,
};
use fedhub_kernel::domain::directory::{Group, Repository, User};
use fxhash::FxHashSet;
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

/// Syntax-only address check; deliverability is nobody's business here.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("literal email pattern"));

// --- Per-record validators ---

/// Validates a raw repository record.
///
/// # Errors
/// [`ValidationError::Shape`] when `id`, `displayName`, or `url` is missing or
/// empty, or `entityIds`/`suspended` are not the declared types. `entityIds`
/// may be empty — its format is the external store's concern.
pub fn validate_repository(input: &Value) -> Result<Repository, ValidationError> {
    require_string(REPOSITORY, "id", input)?;
    require_string(REPOSITORY, "displayName", input)?;
    require_string(REPOSITORY, "url", input)?;
    require_string_allow_empty(REPOSITORY, "entityIds", input)?;
    require_bool(REPOSITORY, "suspended", input)?;

    decode(REPOSITORY, input)
}

/// Validates a raw group record.
///
/// # Errors
/// [`ValidationError::Enum`] when `joinCondition` or `memberVisibility` falls
/// outside its literal set; [`ValidationError::Shape`] for missing required
/// fields or member entries without a usable `id`. An absent `members` field
/// decodes to the not-loaded state, `[]` to loaded-but-empty.
pub fn validate_group(input: &Value) -> Result<Group, ValidationError> {
    require_string(GROUP, "id", input)?;
    require_string(GROUP, "displayName", input)?;
    require_bool(GROUP, "isPublic", input)?;
    check_enum(GROUP, "joinCondition", input, JOIN_CONDITIONS)?;
    check_enum(GROUP, "memberVisibility", input, MEMBER_VISIBILITIES)?;

    if let Some(members) = present(input, "members") {
        let entries =
            members.as_array().ok_or(ValidationError::Shape { entity: GROUP, field: "members" })?;
        for entry in entries {
            let has_id = entry
                .get("id")
                .and_then(Value::as_str)
                .is_some_and(|id| !id.trim().is_empty());
            if !has_id {
                return Err(ValidationError::Shape { entity: GROUP, field: "members" });
            }
        }
    }

    decode(GROUP, input)
}

/// Validates a raw user record.
///
/// # Errors
/// [`ValidationError::Shape`] when `eppn` (or another required field) is
/// missing/empty or a role entry is not a single-entry map;
/// [`ValidationError::Enum`] for a role literal outside the closed set;
/// [`ValidationError::Format`] for a malformed `email` or a `lastModified`
/// value that does not parse as an ISO-8601 timestamp.
pub fn validate_user(input: &Value) -> Result<User, ValidationError> {
    require_string(USER, "id", input)?;
    require_string(USER, "displayName", input)?;
    require_string(USER, "eppn", input)?;

    if let Some(role) = present(input, "role") {
        check_role_entries(role)?;
    }

    if let Some(email) = present(input, "email") {
        let address =
            email.as_str().ok_or(ValidationError::Shape { entity: USER, field: "email" })?;
        if !EMAIL_RE.is_match(address) {
            return Err(ValidationError::Format {
                entity: USER,
                field: "email",
                reason: "not a syntactically valid address".into(),
            });
        }
    }

    let timestamp = require_string(USER, "lastModified", input)?;
    if DateTime::parse_from_rfc3339(timestamp).is_err() {
        return Err(ValidationError::Format {
            entity: USER,
            field: "lastModified",
            reason: "not an ISO-8601 timestamp".into(),
        });
    }

    decode(USER, input)
}

fn check_role_entries(role: &Value) -> Result<(), ValidationError> {
    let entries = role.as_array().ok_or(ValidationError::Shape { entity: USER, field: "role" })?;
    for entry in entries {
        let map = entry.as_object().ok_or(ValidationError::Shape { entity: USER, field: "role" })?;
        // One grant per entry; merged maps would lose grant order.
        let Some((repository_id, literal)) = map.iter().next() else {
            return Err(ValidationError::Shape { entity: USER, field: "role" });
        };
        if map.len() != 1 || repository_id.trim().is_empty() {
            return Err(ValidationError::Shape { entity: USER, field: "role" });
        }
        let literal =
            literal.as_str().ok_or(ValidationError::Shape { entity: USER, field: "role" })?;
        if !ROLES.contains(&literal) {
            return Err(ValidationError::Enum {
                entity: USER,
                field: "role",
                value: literal.to_owned(),
                expected: ROLES,
            });
        }
    }
    Ok(())
}

// --- Collection checks ---

/// Rejects repositories sharing an `id`.
///
/// # Errors
/// [`ValidationError::Duplicate`] on the first repeated id.
pub fn ensure_unique_repositories(repositories: &[Repository]) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::default();
    for repository in repositories {
        if !seen.insert(repository.id.as_str()) {
            return Err(ValidationError::Duplicate {
                entity: REPOSITORY,
                field: "id",
                value: repository.id.clone(),
            });
        }
    }
    Ok(())
}

/// Rejects groups sharing an `id`.
///
/// # Errors
/// [`ValidationError::Duplicate`] on the first repeated id.
pub fn ensure_unique_groups(groups: &[Group]) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::default();
    for group in groups {
        if !seen.insert(group.id.as_str()) {
            return Err(ValidationError::Duplicate {
                entity: GROUP,
                field: "id",
                value: group.id.clone(),
            });
        }
    }
    Ok(())
}

/// Rejects users sharing an `id` or an `eppn`.
///
/// # Errors
/// [`ValidationError::Duplicate`] on the first repeated key; `eppn` is the
/// federation-stable key and must be unique independently of `id`.
pub fn ensure_unique_users(users: &[User]) -> Result<(), ValidationError> {
    let mut ids = FxHashSet::default();
    let mut eppns = FxHashSet::default();
    for user in users {
        if !ids.insert(user.id.as_str()) {
            return Err(ValidationError::Duplicate {
                entity: USER,
                field: "id",
                value: user.id.clone(),
            });
        }
        if !eppns.insert(user.eppn.as_str()) {
            return Err(ValidationError::Duplicate {
                entity: USER,
                field: "eppn",
                value: user.eppn.clone(),
            });
        }
    }
    Ok(())
}

/// Warns about role grants pointing at repositories absent from `known`.
/// Never fails: referential integrity belongs to the external store.
#[must_use]
pub fn check_role_references(user: &User, known: &FxHashSet<&str>) -> Vec<ReferentialWarning> {
    user.roles_by_repository()
        .keys()
        .filter(|repository_id| !known.contains(*repository_id))
        .map(|repository_id| ReferentialWarning {
            user_id: user.id.clone(),
            repository_id: (*repository_id).to_owned(),
        })
        .collect()
}

/// Repositories eligible for active-use listings (suspended ones excluded).
pub fn active_repositories(repositories: &[Repository]) -> impl Iterator<Item = &Repository> {
    repositories.iter().filter(|repository| repository.is_active())
}

// --- Snapshot validation (accumulate mode) ---

/// Raw directory snapshot as handed over by the external store.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DirectorySnapshot {
    pub repositories: Vec<Value>,
    pub groups: Vec<Value>,
    pub users: Vec<Value>,
}

/// Outcome of accumulate-mode validation over a [`DirectorySnapshot`].
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub repositories: Vec<Repository>,
    pub groups: Vec<Group>,
    pub users: Vec<User>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ReferentialWarning>,
}

impl ValidationReport {
    /// Whether every record validated; warnings do not count against this.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a whole snapshot, accumulating every error instead of stopping
/// at the first. Uniqueness runs over the records that validated; referential
/// checks compare user role grants against the snapshot's repository ids.
#[must_use]
pub fn validate_directory(snapshot: &DirectorySnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    for raw in &snapshot.repositories {
        match validate_repository(raw) {
            Ok(repository) => report.repositories.push(repository),
            Err(error) => report.errors.push(error),
        }
    }
    for raw in &snapshot.groups {
        match validate_group(raw) {
            Ok(group) => report.groups.push(group),
            Err(error) => report.errors.push(error),
        }
    }
    for raw in &snapshot.users {
        match validate_user(raw) {
            Ok(user) => report.users.push(user),
            Err(error) => report.errors.push(error),
        }
    }

    if let Err(error) = ensure_unique_repositories(&report.repositories) {
        report.errors.push(error);
    }
    if let Err(error) = ensure_unique_groups(&report.groups) {
        report.errors.push(error);
    }
    if let Err(error) = ensure_unique_users(&report.users) {
        report.errors.push(error);
    }

    let known: FxHashSet<&str> =
        report.repositories.iter().map(|repository| repository.id.as_str()).collect();
    let mut warnings = Vec::new();
    for user in &report.users {
        warnings.extend(check_role_references(user, &known));
    }
    report.warnings = warnings;

    tracing::debug!(
        repositories = report.repositories.len(),
        groups = report.groups.len(),
        users = report.users.len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Directory snapshot validated"
    );

    report
}

// --- Field helpers ---

/// Field value when present and not JSON null.
fn present<'a>(input: &'a Value, field: &str) -> Option<&'a Value> {
    input.get(field).filter(|value| !value.is_null())
}

fn require_string<'a>(
    entity: &'static str,
    field: &'static str,
    input: &'a Value,
) -> Result<&'a str, ValidationError> {
    present(input, field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::Shape { entity, field })
}

fn require_string_allow_empty<'a>(
    entity: &'static str,
    field: &'static str,
    input: &'a Value,
) -> Result<&'a str, ValidationError> {
    present(input, field)
        .and_then(Value::as_str)
        .ok_or(ValidationError::Shape { entity, field })
}

fn require_bool(
    entity: &'static str,
    field: &'static str,
    input: &Value,
) -> Result<bool, ValidationError> {
    present(input, field).and_then(Value::as_bool).ok_or(ValidationError::Shape { entity, field })
}

fn check_enum(
    entity: &'static str,
    field: &'static str,
    input: &Value,
    expected: &'static [&'static str],
) -> Result<(), ValidationError> {
    let value = require_string(entity, field, input)?;
    if expected.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::Enum { entity, field, value: value.to_owned(), expected })
    }
}

fn decode<T>(entity: &'static str, input: &Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(input.clone())
        .map_err(|source| ValidationError::Decode { entity, source })
}
