//! Histogram helpers

use super::labels;

/// Record the number of hosts in a built URI
pub fn host_count(count: usize) {
    ::metrics::histogram!(labels::HOST_COUNT).record(count as f64);
}
