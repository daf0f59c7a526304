// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment block.

use std::ffi::OsString;

pub(crate) fn get(name: &str) -> Option<String> {
    std::env::var_os(name).map(lossy)
}

pub(crate) fn set(name: &str, value: &str) {
    // SAFETY: the caller has rejected NUL in both strings and `=` in the
    // name. std serializes its own environment access behind a lock, so
    // concurrent `EnvHandle` calls are sound. Only foreign code reading the
    // block through libc `getenv` while this runs can race.
    unsafe { std::env::set_var(name, value) }
}

pub(crate) fn remove(name: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) }
}

/// Snapshot of all variables whose names are valid Unicode. Values that
/// are not valid Unicode are converted lossily.
pub(crate) fn vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, lossy(value))))
        .collect()
}

fn lossy(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}
