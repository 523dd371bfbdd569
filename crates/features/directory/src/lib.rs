//! Directory feature slice.
//!
//! The validation contract at the boundary where external records enter the
//! application. No business logic beyond shape/field validation lives here;
//! entities are created and mutated by the external store only.

mod error;
mod validate;

pub use crate::error::{ReferentialWarning, ValidationError};
pub use crate::validate::{
    DirectorySnapshot, ValidationReport, active_repositories, check_role_references,
    ensure_unique_groups, ensure_unique_repositories, ensure_unique_users, validate_directory,
    validate_group, validate_repository, validate_user,
};

use fedhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;

/// Directory feature state.
#[derive(Debug)]
pub struct Directory;

impl FeatureSlice for Directory {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the directory feature.
#[must_use]
pub fn init() -> InitializedSlice {
    tracing::info!("Directory slice initialized");

    InitializedSlice::new(Directory)
}
