//! Canonical documents shared by test suites.
//!
//! The `abt-io` and `margo` sections mirror how the Mochi services lay out
//! their configuration: one object per component, with defaults shipped as a
//! separate document of the same shape.

/// User configuration overriding one `abt-io` parameter.
pub const ABT_IO_CONFIG: &str = r#"{"abt-io": {"a": 1}}"#;

/// Defaults for the `abt-io` component.
pub const ABT_IO_DEFAULTS: &str = r#"{"abt-io": {"a": 2, "b": 3}}"#;

/// Configuration holding several components, including nested objects.
pub const SERVICE_CONFIG: &str = r#"{
    "margo": {
        "progress_mode": "busy",
        "rpc": {"thread_count": 4},
        "handlers": ["echo"]
    },
    "abt-io": {
        "pool_size": 8
    }
}"#;

/// Defaults for [`SERVICE_CONFIG`], one nested level deep and beyond.
pub const SERVICE_DEFAULTS: &str = r#"{
    "margo": {
        "progress_mode": "auto",
        "progress_timeout_ub_msec": 100,
        "rpc": {"thread_count": 0, "pool": "primary", "limits": {"max": 16}},
        "handlers": [],
        "argobots": {"pools": [], "xstreams": []}
    },
    "abt-io": {
        "pool_size": 1,
        "backing_thread_count": 16
    }
}"#;
