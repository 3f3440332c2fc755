//! Counter helpers

use super::labels;

/// Record a successful build
pub fn build_completed() {
    ::metrics::counter!(labels::BUILDS_TOTAL).increment(1);
}

/// Record a failed build
pub fn error_raised(category: &'static str) {
    ::metrics::counter!(labels::ERRORS_TOTAL, labels::CATEGORY => category).increment(1);
}
