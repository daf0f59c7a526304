// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backing stores for each [`Scope`](super::scope::Scope).
//!
//! ```text
//! Scope::Process          --> process   (std::env, environment block)
//! Scope::User | Machine   --> persisted
//!                               windows:  registry (winreg) + WM_SETTINGCHANGE
//!                               other:    detached (reads absent, writes ignored)
//! ```
//!
//! Stores do no validation; [`EnvHandle`](super::handle::EnvHandle) checks
//! names and values before calling in.

pub(crate) mod process;

#[cfg(windows)]
pub(crate) mod registry;
#[cfg(windows)]
pub(crate) use registry as persisted;

#[cfg(not(windows))]
pub(crate) mod detached;
#[cfg(not(windows))]
pub(crate) use detached as persisted;

/// Returns true if `name` can be stored as a variable name.
///
/// Names must be non-empty and free of `=` and NUL; anything else makes
/// the platform call fail (or, for `std::env`, panic).
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

/// Returns true if `value` can be stored as a variable value.
pub(crate) fn is_valid_value(value: &str) -> bool {
    !value.contains('\0')
}
