//! Error handling types

use thiserror::Error;

/// Boxed error used at collaborator boundaries (constructors, unit loaders)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for implkit
#[derive(Error, Debug)]
pub enum Error {
    /// An implementation was registered against a base it does not implement
    #[error("{implementation} is not an implementation of {base}")]
    TypeMismatch {
        /// Display name of the implementation
        implementation: String,
        /// Display name of the base
        base: String,
    },

    /// A query found nothing and the caller did not permit an empty result
    #[error("no_implementation_for:{base}")]
    NoImplementation {
        /// Display name of the base (or the name that was looked up)
        base: String,
    },

    /// A configuration unit lacks a required attribute
    #[error("Configuration unit {unit} missing required '{attribute}' attribute")]
    MissingAttribute {
        /// Name of the unit
        unit: String,
        /// Name of the missing attribute
        attribute: String,
    },

    /// A configuration unit attribute has the wrong kind
    #[error(
        "Configuration unit {unit} has invalid '{attribute}' attribute: expected {expected}, got {found}"
    )]
    InvalidType {
        /// Name of the unit
        unit: String,
        /// Name of the offending attribute
        attribute: String,
        /// Kind that was expected
        expected: String,
        /// Kind that was found
        found: String,
    },

    /// A configure procedure has an unusable signature
    #[error("Configuration unit {unit} has invalid 'configure' procedure: {message}")]
    InvalidSignature {
        /// Name of the unit
        unit: String,
        /// Description of the problem
        message: String,
    },

    /// The unit loader could not resolve a discovered candidate
    #[error("Failed to load unit '{candidate}': {source}")]
    LoadFailure {
        /// Name of the candidate
        candidate: String,
        /// Error reported by the loader
        #[source]
        source: BoxError,
    },

    /// A registered constructor failed; displays the constructor's own message
    #[error("{source}")]
    ConstructionFailure {
        /// Display name of the implementation being constructed
        implementation: String,
        /// Error reported by the constructor
        #[source]
        source: BoxError,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] BoxError),
}

// Registry error creation methods
impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch<I: Into<String>, B: Into<String>>(implementation: I, base: B) -> Self {
        Self::TypeMismatch {
            implementation: implementation.into(),
            base: base.into(),
        }
    }

    /// Create a no implementation error
    pub fn no_implementation<S: Into<String>>(base: S) -> Self {
        Self::NoImplementation { base: base.into() }
    }

    /// Wrap a constructor failure
    pub fn construction<S: Into<String>>(implementation: S, source: BoxError) -> Self {
        Self::ConstructionFailure {
            implementation: implementation.into(),
            source,
        }
    }
}

// Provider validation error creation methods
impl Error {
    /// Create a missing attribute error
    pub fn missing_attribute<U: Into<String>, A: Into<String>>(unit: U, attribute: A) -> Self {
        Self::MissingAttribute {
            unit: unit.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type<U, A, E, F>(unit: U, attribute: A, expected: E, found: F) -> Self
    where
        U: Into<String>,
        A: Into<String>,
        E: Into<String>,
        F: Into<String>,
    {
        Self::InvalidType {
            unit: unit.into(),
            attribute: attribute.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid signature error
    pub fn invalid_signature<U: Into<String>, M: Into<String>>(unit: U, message: M) -> Self {
        Self::InvalidSignature {
            unit: unit.into(),
            message: message.into(),
        }
    }

    /// Wrap a unit loader failure
    pub fn load_failure<S: Into<String>>(candidate: S, source: BoxError) -> Self {
        Self::LoadFailure {
            candidate: candidate.into(),
            source,
        }
    }
}

// General error creation methods
impl Error {
    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error came from provider validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. } | Self::InvalidType { .. } | Self::InvalidSignature { .. }
        )
    }
}
