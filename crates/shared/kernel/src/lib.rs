//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and provides
//! the layered configuration loader.
//!
//! ## Config loading
//! ```rust,ignore
//! use fedhub_kernel::config::load_config;
//! use fedhub_domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("fedhub")).unwrap();
//! ```

pub mod config;
pub mod prelude;

pub use fedhub_domain as domain;
