// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted scopes on platforms without a user/machine variable store.
//!
//! Reads report absent, enumeration is empty and writes are dropped, which
//! is how the host runtime treats these scopes on Unix-like systems.

use tracing::debug;

use crate::env::scope::Scope;
use crate::error::EnvResult;

pub(crate) const fn get(_scope: Scope, _name: &str) -> Option<String> {
    None
}

pub(crate) fn set(scope: Scope, name: &str, _value: &str) -> EnvResult<()> {
    debug!(%scope, name, "no persisted store on this platform, write ignored");
    Ok(())
}

pub(crate) fn remove(scope: Scope, name: &str) -> EnvResult<()> {
    debug!(%scope, name, "no persisted store on this platform, delete ignored");
    Ok(())
}

pub(crate) const fn vars(_scope: Scope) -> Vec<(String, String)> {
    Vec::new()
}
