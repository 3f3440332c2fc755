//! MongoDB connection string constants

/// Scheme prefix of every generated URI
pub const MONGO_PROTOCOL: &str = "mongodb://";

/// Host used when an entry has none
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when an entry has none (or zero)
pub const DEFAULT_PORT: u16 = 27017;

/// Separator between host entries
pub const HOST_SEPARATOR: &str = ",";

/// Separator between query options
pub const OPTION_SEPARATOR: &str = "&";

/// Query prefix when a database path precedes it
pub const QUERY_PREFIX: &str = "?";

/// Query prefix when no database was given
pub const QUERY_PREFIX_NO_DATABASE: &str = "/?";
