// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dynenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dynenv [global options] <command>
//! get NAME
//! set NAME VALUE [--json]
//! unset NAME
//! list [--values]
//! options | inis | version
//! ```

pub mod global;
pub mod vars;


use crate::cli::global::GlobalOptions;
use crate::cli::vars::{GetArgs, ListArgs, SetArgs, UnsetArgs};
use clap::{Parser, Subcommand};

/// Scoped environment variables.
///
/// Reads and writes process, user or machine environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "dynenv",
    author,
    version,
    about = "Scoped environment variable access",
    long_about = "dynenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads and writes environment variables in one of three scopes:\n\
                  the current process, the current user's persisted variables, or\n\
                  the machine-wide persisted variables.",
    after_help = "SCOPES:\n\n\
                  Process-scope writes only affect dynenv itself and are lost when\n\
                  it exits; use --scope user or --scope machine to persist a change.\n\
                  Machine-scope writes usually need elevated privileges. On\n\
                  platforms without persisted variables, user and machine reads\n\
                  report nothing and writes are ignored."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by dynenv.
    Inis,

    /// Prints the value of a variable.
    Get(GetArgs),

    /// Sets a variable.
    Set(SetArgs),

    /// Deletes a variable.
    Unset(UnsetArgs),

    /// Lists variable names.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
