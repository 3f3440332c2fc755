//! Metric names and label keys

/// Successful builds
pub const BUILDS_TOTAL: &str = "mongodb_uri_builds_total";

/// Failed builds, labelled by error category
pub const ERRORS_TOTAL: &str = "mongodb_uri_errors_total";

/// Hosts per built URI
pub const HOST_COUNT: &str = "mongodb_uri_host_count";

/// Label key for error category
pub const CATEGORY: &str = "category";
