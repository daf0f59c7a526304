// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted user/machine variables in the Windows registry (Windows-only).
//!
//! ```text
//! User    --> HKCU\Environment
//! Machine --> HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment
//!
//! read:   REG_SZ / REG_EXPAND_SZ as stored (no expansion)
//! write:  REG_SZ --> WM_SETTINGCHANGE("Environment") broadcast
//! delete: missing value is not an error
//! ```

use std::io;

use tracing::{debug, trace, warn};
use winreg::RegKey;
use winreg::enums::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, KEY_READ, KEY_SET_VALUE,
};
use winreg::types::FromRegValue;

use crate::env::scope::Scope;
use crate::error::{EnvResult, StoreError};

const USER_KEY: &str = "Environment";
const MACHINE_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

/// Milliseconds each top-level window gets to handle the change broadcast.
const BROADCAST_TIMEOUT_MS: u32 = 1000;

fn open(scope: Scope, access: u32) -> io::Result<RegKey> {
    let (root, path) = match scope {
        Scope::User => (HKEY_CURRENT_USER, USER_KEY),
        Scope::Machine => (HKEY_LOCAL_MACHINE, MACHINE_KEY),
        Scope::Process => {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "process scope has no registry key",
            ));
        }
    };
    RegKey::predef(root).open_subkey_with_flags(path, access)
}

pub(crate) fn get(scope: Scope, name: &str) -> Option<String> {
    let key = match open(scope, KEY_QUERY_VALUE) {
        Ok(key) => key,
        Err(e) => {
            warn!(%scope, error = %e, "failed to open environment key");
            return None;
        }
    };

    match key.get_value::<String, _>(name) {
        Ok(value) => Some(value),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(%scope, name, error = %e, "failed to read environment value");
            None
        }
    }
}

pub(crate) fn set(scope: Scope, name: &str, value: &str) -> EnvResult<()> {
    let key =
        open(scope, KEY_SET_VALUE).map_err(|source| StoreError::Open { scope, source })?;
    key.set_value(name, &value.to_owned())
        .map_err(|source| StoreError::Write {
            scope,
            name: name.to_owned(),
            source,
        })?;
    debug!(%scope, name, "wrote registry value");
    broadcast_change();
    Ok(())
}

pub(crate) fn remove(scope: Scope, name: &str) -> EnvResult<()> {
    let key =
        open(scope, KEY_SET_VALUE).map_err(|source| StoreError::Open { scope, source })?;
    match key.delete_value(name) {
        Ok(()) => {
            debug!(%scope, name, "deleted registry value");
            broadcast_change();
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!(%scope, name, "registry value already absent");
            Ok(())
        }
        Err(source) => Err(StoreError::Delete {
            scope,
            name: name.to_owned(),
            source,
        }
        .into()),
    }
}

/// Snapshot of all string-typed values under the scope's key.
pub(crate) fn vars(scope: Scope) -> Vec<(String, String)> {
    let key = match open(scope, KEY_READ) {
        Ok(key) => key,
        Err(e) => {
            warn!(%scope, error = %e, "failed to open environment key");
            return Vec::new();
        }
    };

    key.enum_values()
        .filter_map(|entry| match entry {
            Ok((name, raw)) => String::from_reg_value(&raw).ok().map(|value| (name, value)),
            Err(e) => {
                warn!(%scope, error = %e, "failed to enumerate environment value");
                None
            }
        })
        .collect()
}

/// Tells running applications that persisted variables changed.
fn broadcast_change() {
    use windows::Win32::Foundation::{LPARAM, WPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
    };
    use windows::core::w;

    let area = w!("Environment");

    // SAFETY: `area` is a static NUL-terminated UTF-16 string that outlives the call
    let result = unsafe {
        SendMessageTimeoutW(
            HWND_BROADCAST,
            WM_SETTINGCHANGE,
            WPARAM(0),
            LPARAM(area.as_ptr() as isize),
            SMTO_ABORTIFHUNG,
            BROADCAST_TIMEOUT_MS,
            None,
        )
    };

    if result.0 == 0 {
        debug!("environment change broadcast timed out or failed");
    }
}
