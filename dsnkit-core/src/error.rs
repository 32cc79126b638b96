//! Error types for DSN parsing and DSN resolution.
//!
//! [`ParseError`] is the closed set of structural failures the parser can
//! report. [`DsnError`] covers everything around the parser: reading a DSN
//! from the environment, expanding `${VAR}` placeholders and loading a
//! config file.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for DSN resolution (environment, config files).
pub type DsnResult<T> = Result<T, DsnError>;

/// Structural errors raised while parsing a DSN.
///
/// Every variant aborts the parse; no partial value is returned.
#[derive(Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// No `://` marker, or nothing in front of it.
    #[error("protocol not found")]
    #[diagnostic(
        code(dsnkit::parse::protocol_not_found),
        help("a DSN must start with a scheme, e.g. `postgres://`")
    )]
    ProtocolNotFound,

    /// The host segment between the credentials and the path is empty.
    #[error("hosts not found")]
    #[diagnostic(
        code(dsnkit::parse::hosts_not_found),
        help("add at least one `host[:port]` after `://` or `@`")
    )]
    HostsNotFound,

    /// A comma-separated host entry has an empty name.
    #[error("host name can't be empty")]
    #[diagnostic(
        code(dsnkit::parse::host_name_empty),
        help("check for a leading `:port`, a doubled `,` or a trailing `,` in the host list")
    )]
    HostNameCannotBeEmpty,
}

/// Errors raised while resolving a DSN from its surroundings.
#[derive(Error, Debug, Diagnostic)]
pub enum DsnError {
    /// The DSN itself is malformed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Environment variable not found.
    #[error("environment variable not found: {0}")]
    #[diagnostic(code(dsnkit::env::not_found))]
    EnvNotFound(String),

    /// Invalid environment variable reference or value.
    #[error("invalid environment variable '{name}': {message}")]
    #[diagnostic(code(dsnkit::env::invalid))]
    InvalidEnvValue { name: String, message: String },

    /// The config file has no datasource url.
    #[error("no datasource url configured")]
    #[diagnostic(
        code(dsnkit::config::missing_url),
        help("set `url` in the `[datasource]` table")
    )]
    MissingUrl,

    /// Error reading a config file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(dsnkit::config::io_error))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown fields.
    #[error("invalid config file: {0}")]
    #[diagnostic(code(dsnkit::config::toml_error))]
    Toml(#[from] toml::de::Error),
}

impl DsnError {
    /// Get the underlying parse error, if this is one.
    pub fn as_parse_error(&self) -> Option<ParseError> {
        match self {
            Self::Parse(e) => Some(*e),
            _ => None,
        }
    }
}
