//! Connection string construction
//!
//! This module handles:
//! * Typed connection options and their builder
//! * Per-fragment formatting with default substitution
//! * Decoding options from untyped JSON input

pub mod constants;
mod fragments;
mod options;
mod untyped;

pub use fragments::{build, credentials, database, hosts, query_string_options};
pub use options::{ConnectionOptions, ConnectionOptionsBuilder, HostEntry, Port, QueryOption};
pub use untyped::{build_from_json, build_from_value};
