// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               EnvError
//!                  |
//!     +------------+------------+
//!     |            |            |
//!     v            v            v
//! InvalidArg   OutOfRange     Store
//! (param)      Box<str>       Box
//!
//! Sub-errors:
//!   Store   Open, Write, Delete (scope + name + io::Error)
//!
//! ConfigError (InvalidValue) stays on the anyhow side:
//! config loading, log levels, scope names.
//! ```
//!
//! Only `InvalidArgument` and `OutOfRange` are raised by the accessor itself.
//! Everything else is an OS or configuration failure passed through.

use thiserror::Error;

use crate::env::scope::Scope;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level error type for environment access.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A parameter had an unusable value (wrong type, forbidden characters).
    #[error("invalid argument '{param}': {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },

    /// Index-style access was not given exactly one string index.
    #[error("index out of range: {0}")]
    OutOfRange(Box<str>),

    /// The underlying variable store rejected the operation.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),
}

impl EnvError {
    #[must_use]
    pub const fn invalid_argument(param: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { param, reason }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into().into_boxed_str())
    }

    /// Returns the offending parameter name for [`EnvError::InvalidArgument`].
    #[must_use]
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(*param),
            _ => None,
        }
    }
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
}

// --- Store Errors ---

/// Failures reported by the OS while touching a variable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted store could not be opened.
    #[error("failed to open {scope} environment: {source}")]
    Open {
        scope: Scope,
        #[source]
        source: std::io::Error,
    },

    /// Writing a variable failed.
    #[error("failed to write {scope} variable '{name}': {source}")]
    Write {
        scope: Scope,
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a variable failed.
    #[error("failed to delete {scope} variable '{name}': {source}")]
    Delete {
        scope: Scope,
        name: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
