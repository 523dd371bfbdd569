//! Facade crate for `FedHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use fedhub_domain as domain;
pub use fedhub_kernel as kernel;

use fedhub_domain::registry::InitializedSlice;

/// Feature registry for runtime introspection.
pub mod features {
    pub use fedhub_directory as directory;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["directory"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled feature slices.
#[must_use]
pub fn init() -> Vec<InitializedSlice> {
    vec![fedhub_directory::init()]
}
