//! MongoDB connection string builder
//!
//! Assembles a `mongodb://` URI from credentials, a host list, a database
//! name and query options. Construction is pure: no I/O, no validation of
//! option semantics and no percent-encoding.
//!
//! Missing, empty or zero fields are replaced by defaults
//! (`localhost`, `27017`), so empty options build
//! `mongodb://localhost:27017`.
//!
//! ```
//! use mongodb_uri_builder::{build, ConnectionOptions};
//!
//! let opts = ConnectionOptions::builder()
//!     .host("mongo1", 123)
//!     .host("mongo2", 123)
//!     .database("database")
//!     .option("replicaSet", "rs0")
//!     .build();
//!
//! assert_eq!(
//!     build(&opts),
//!     "mongodb://mongo1:123,mongo2:123/database?replicaSet=rs0"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builder;
pub mod error;
pub mod metrics;

pub use builder::{
    build, build_from_json, build_from_value, credentials, database, hosts,
    query_string_options, ConnectionOptions, ConnectionOptionsBuilder, HostEntry, Port, QueryOption,
};
pub use error::{Error, Result};
