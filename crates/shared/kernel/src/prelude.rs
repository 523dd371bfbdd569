//! Convenience re-exports for slice and application code.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config, validate_app_config};
pub use fedhub_domain::config::AppConfig;
pub use fedhub_domain::directory::{
    Group, JoinCondition, MemberRef, MemberVisibility, Membership, Repository, Role, RoleGrant,
    User,
};
pub use fedhub_domain::registry::{FeatureSlice, InitializedSlice};
