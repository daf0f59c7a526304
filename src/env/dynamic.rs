// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loosely-typed access for callers holding JSON values.
//!
//! ```text
//! get_index([Value])          --> resolve_key --> get
//! set_index([Value], &Value)  --> resolve_key --> set_value --> set
//! delete_index([Value])       --> resolve_key --> delete
//!
//! resolve_key: exactly one Value::String, else OutOfRange
//! set_value:   String -> write, Null -> delete, else InvalidArgument("value")
//! ```

use serde_json::Value;

use super::handle::EnvHandle;
use crate::error::{EnvError, EnvResult};

const INDEX_MESSAGE: &str = "Index must be of type String";
const VALUE_MESSAGE: &str = "Value must be of type String";

/// Extracts the variable name from an index argument list.
///
/// # Errors
///
/// Returns [`EnvError::OutOfRange`] unless `indexes` holds exactly one
/// string. A single number and two strings are rejected the same way.
pub fn resolve_key(indexes: &[Value]) -> EnvResult<&str> {
    match indexes {
        [Value::String(name)] => Ok(name.as_str()),
        _ => Err(EnvError::out_of_range(INDEX_MESSAGE)),
    }
}

impl EnvHandle {
    /// Sets `name` from a loosely-typed value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidArgument`] naming `value` if it is neither
    /// a string nor null; nothing is written in that case.
    pub fn set_value(&self, name: &str, value: &Value) -> EnvResult<()> {
        match value {
            Value::String(value) => self.set(name, Some(value)),
            Value::Null => self.set(name, None),
            _ => Err(EnvError::invalid_argument("value", VALUE_MESSAGE)),
        }
    }

    /// Index-style lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::OutOfRange`] if the index shape is invalid.
    pub fn get_index(&self, indexes: &[Value]) -> EnvResult<Option<String>> {
        resolve_key(indexes).map(|name| self.get(name))
    }

    /// Index-style assignment. The index is checked before the value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::OutOfRange`] for a bad index and
    /// [`EnvError::InvalidArgument`] for a bad value.
    pub fn set_index(&self, indexes: &[Value], value: &Value) -> EnvResult<()> {
        let name = resolve_key(indexes)?;
        self.set_value(name, value)
    }

    /// Index-style delete.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::OutOfRange`] if the index shape is invalid.
    pub fn delete_index(&self, indexes: &[Value]) -> EnvResult<()> {
        let name = resolve_key(indexes)?;
        self.delete(name)
    }
}
