//! Extensions for mapping errors to `CfgResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(CfgError::from(e)))`
//! chains when converting external error types into the crate's
//! `CfgResult<T>` alias (`Result<T, Arc<CfgError>>`).
//!
//! # Examples
//!
//! ```
//! use mochi_cfg::{CfgResult, CfgResultExt};
//!
//! fn render() -> CfgResult<String> {
//!     // serde_json::Error implements Into<CfgError>
//!     serde_json::to_string(&42).into_cfg()
//! }
//! assert_eq!(render().ok().as_deref(), Some("42"));
//! ```

use std::sync::Arc;

use crate::CfgError;

/// Result alias used throughout the crate.
///
/// Errors are shared so they can be cloned cheaply into logs or aggregated
/// reports without losing their source chain.
pub type CfgResult<T> = Result<T, Arc<CfgError>>;

/// Generic extension for mapping any `Result<T, E>` with `E: Into<CfgError>`
/// into a [`CfgResult<T>`].
pub trait CfgResultExt<T, E> {
    /// Convert `Result<T, E>` into `CfgResult<T>` using `Into<CfgError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<CfgError>`.
    fn into_cfg(self) -> CfgResult<T>;
}

impl<T, E> CfgResultExt<T, E> for Result<T, E>
where
    E: Into<CfgError>,
{
    fn into_cfg(self) -> CfgResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
