// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped accessor over one environment variable store.
//!
//! ```text
//! EnvHandle { scope }
//!   get(name)        --> Option<String>      (never fails)
//!   set(name, value) --> Some: write / None: delete
//!   delete(name)     --> removes from the bound scope
//!   list_names()     --> eager Vec<String>
//!   vars()           --> eager BTreeMap<String, String>
//! ```

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::scope::Scope;
use super::store::{self, persisted, process};
use crate::error::{EnvError, EnvResult};

/// A stateless accessor bound to one [`Scope`].
///
/// Handles hold nothing but their scope: two handles with the same scope
/// are interchangeable, and every call reads or writes live OS state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnvHandle {
    scope: Scope,
}

impl EnvHandle {
    /// Handle for the current process environment.
    pub const PROCESS: Self = Self::new(Scope::Process);
    /// Handle for the current user's persisted variables.
    pub const USER: Self = Self::new(Scope::User);
    /// Handle for the machine-wide persisted variables.
    pub const MACHINE: Self = Self::new(Scope::Machine);

    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self { scope }
    }

    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Looks up `name` in the bound scope.
    ///
    /// Missing variables and names that cannot exist (empty, containing `=`
    /// or NUL) report `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        if !store::is_valid_name(name) {
            return None;
        }

        let value = match self.scope {
            Scope::Process => process::get(name),
            scope => persisted::get(scope, name),
        };
        trace!(scope = %self.scope, name, found = value.is_some(), "get");
        value
    }

    /// Writes `value` under `name`, or deletes `name` when `value` is `None`.
    ///
    /// An empty string is stored as an empty string.
    ///
    /// # Thread safety
    ///
    /// For the process scope this mutates the shared environment block.
    /// Calls through `EnvHandle` are serialized by std, but C code calling
    /// `getenv` on another thread at the same time may observe a torn block.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidArgument`] if `name` is empty or contains
    /// `=` or NUL, or if `value` contains NUL. Returns [`EnvError::Store`] if
    /// the persisted store rejects the write.
    pub fn set(&self, name: &str, value: Option<&str>) -> EnvResult<()> {
        let Some(value) = value else {
            return self.delete(name);
        };

        validate_name(name)?;
        if !store::is_valid_value(value) {
            return Err(EnvError::invalid_argument(
                "value",
                "Value must not contain NUL characters",
            ));
        }

        debug!(scope = %self.scope, name, "set");
        match self.scope {
            Scope::Process => {
                process::set(name, value);
                Ok(())
            }
            scope => persisted::set(scope, name, value),
        }
    }

    /// Removes `name` from the bound scope. Removing a missing variable is a
    /// no-op.
    ///
    /// Same thread-safety caveat as [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidArgument`] for an unusable name and
    /// [`EnvError::Store`] if the persisted store rejects the delete.
    pub fn delete(&self, name: &str) -> EnvResult<()> {
        validate_name(name)?;

        debug!(scope = %self.scope, name, "delete");
        match self.scope {
            Scope::Process => {
                process::remove(name);
                Ok(())
            }
            scope => persisted::remove(scope, name),
        }
    }

    /// Names currently defined in the bound scope.
    ///
    /// The list is materialized at call time; every name in it resolves
    /// through [`get`](Self::get).
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|(name, _)| name).collect()
    }

    /// Name/value pairs currently defined in the bound scope.
    #[must_use]
    pub fn vars(&self) -> BTreeMap<String, String> {
        self.snapshot().into_iter().collect()
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        let mut vars = match self.scope {
            Scope::Process => process::vars(),
            scope => persisted::vars(scope),
        };
        // Hidden per-drive entries such as `=C:` cannot be looked up by name.
        vars.retain(|(name, _)| store::is_valid_name(name));
        trace!(scope = %self.scope, count = vars.len(), "snapshot");
        vars
    }
}

fn validate_name(name: &str) -> EnvResult<()> {
    if store::is_valid_name(name) {
        Ok(())
    } else {
        Err(EnvError::invalid_argument(
            "name",
            "Name must be non-empty and must not contain '=' or NUL characters",
        ))
    }
}
