//! Error types produced while resolving and editing components.

mod constructors;
mod conversions;
mod types;

pub use types::{CfgError, DocumentOrigin};

pub(crate) use constructors::ROOT_SECTION;
