// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable commands: get, set, unset, list.
//!
//! ```text
//! get   NAME              --> EnvHandle::get        (absent: exit 1)
//! set   NAME VALUE        --> EnvHandle::set
//! set   NAME JSON --json  --> EnvHandle::set_value  (null deletes)
//! unset NAME              --> EnvHandle::delete
//! list  [--values]        --> EnvHandle::list_names / vars (sorted)
//! ```

use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::cli::vars::{GetArgs, ListArgs, SetArgs, UnsetArgs};
use crate::env::EnvHandle;
use crate::error::Result;

/// Prints the variable's value.
///
/// Returns `false` if the variable is not set; nothing is printed then.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_get_command(args: &GetArgs, env: EnvHandle, out: &mut impl Write) -> Result<bool> {
    match env.get(&args.name) {
        Some(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Sets the variable, or routes a JSON value through
/// [`EnvHandle::set_value`] with `--json`.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the name or value is rejected,
/// or the store refuses the write.
pub fn run_set_command(args: &SetArgs, env: EnvHandle) -> Result<()> {
    let result = if args.json {
        let value: serde_json::Value = serde_json::from_str(&args.value)
            .with_context(|| format!("VALUE is not valid JSON: {}", args.value))?;
        env.set_value(&args.name, &value)
    } else {
        env.set(&args.name, Some(&args.value))
    };
    result.with_context(|| format!("failed to set {} variable '{}'", env.scope(), args.name))?;

    info!(scope = %env.scope(), name = %args.name, "variable set");
    Ok(())
}

/// Deletes the variable.
///
/// # Errors
///
/// Returns an error if the name is rejected or the store refuses the delete.
pub fn run_unset_command(args: &UnsetArgs, env: EnvHandle) -> Result<()> {
    env.delete(&args.name).with_context(|| {
        format!(
            "failed to delete {} variable '{}'",
            env.scope(),
            args.name
        )
    })?;

    info!(scope = %env.scope(), name = %args.name, "variable deleted");
    Ok(())
}

/// Lists variables in the scope, sorted by name.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_list_command(args: &ListArgs, env: EnvHandle, out: &mut impl Write) -> Result<()> {
    if args.values {
        for (name, value) in env.vars() {
            writeln!(out, "{name}={value}")?;
        }
    } else {
        let mut names = env.list_names();
        names.sort_unstable();
        for name in names {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
