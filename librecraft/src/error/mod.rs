//! Error types for the Recraft icon plugin.
//!
//! All errors implement the standard Error trait and provide context-rich
//! error messages. Note that the plugin surface itself never propagates these
//! to the host: the task layer logs them and reports "no result".

use thiserror::Error;


/// Main error type for plugin operations
#[derive(Error, Debug)]
pub enum RecraftError {
    /// Network-related errors (connection, timeout, DNS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication errors (401, 403, bad API key or session)
    #[error("Authentication error (status: {status_code:?}): {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// Non-2xx responses other than authentication failures
    #[error("Server error (status: {status_code}): {message}")]
    Server { message: String, status_code: u16 },

    /// Well-formed API responses that carry no usable image
    #[error("API error: {message}")]
    Api { message: String },

    /// Malformed JSON from the host or the image API
    #[error("Protocol error: {message}")]
    Protocol {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Plugin configuration errors (missing or unusable settings)
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, RecraftError>;

impl RecraftError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::network("connection refused");
    /// assert!(matches!(err, RecraftError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = RecraftError::network_with_source("failed to connect", io_err);
    /// assert!(matches!(err, RecraftError::Network { .. }));
    /// ```
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new authentication error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::authentication("invalid API key", Some(401));
    /// assert!(matches!(err, RecraftError::Authentication { .. }));
    /// ```
    pub fn authentication<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new server error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::server("internal server error", 500);
    /// assert!(matches!(err, RecraftError::Server { .. }));
    /// ```
    pub fn server<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Server {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new API error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::api("no image generated");
    /// assert!(matches!(err, RecraftError::Api { .. }));
    /// ```
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Creates a new protocol error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::protocol("unexpected response shape");
    /// assert!(matches!(err, RecraftError::Protocol { .. }));
    /// ```
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new protocol error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::InvalidData, "invalid data");
    /// let err = RecraftError::protocol_with_source("malformed envelope", io_err);
    /// assert!(matches!(err, RecraftError::Protocol { .. }));
    /// ```
    pub fn protocol_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Protocol {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use librecraft::error::RecraftError;
    ///
    /// let err = RecraftError::config("no plugin settings found");
    /// assert!(matches!(err, RecraftError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
