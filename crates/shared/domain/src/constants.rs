//! Entity names and closed literal sets shared by validation and tooling.

pub const REPOSITORY: &str = "repository";
pub const GROUP: &str = "group";
pub const USER: &str = "user";

/// Valid `joinCondition` wire literals.
pub const JOIN_CONDITIONS: &[&str] = &["open", "approval", "invite-only"];

/// Valid `memberVisibility` wire literals.
pub const MEMBER_VISIBILITIES: &[&str] = &["public", "private", "hidden"];

/// Valid role wire literals.
pub const ROLES: &[&str] = &["admin", "repoadm", "contributor"];
