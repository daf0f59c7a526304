// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the variable commands.

use clap::Args;

/// Arguments for `get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    pub name: String,
}

/// Arguments for `set`.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    pub name: String,

    /// New value.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Parses VALUE as JSON: a string sets, `null` deletes, anything else
    /// is rejected.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `unset`.
#[derive(Debug, Clone, Args)]
pub struct UnsetArgs {
    /// Variable name.
    pub name: String,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints `NAME=VALUE` instead of names only.
    #[arg(long)]
    pub values: bool,
}
