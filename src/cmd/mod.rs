// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   vars (get, set, unset, list), config (options, inis)
//! ```

pub mod config;
pub mod vars;

#[cfg(test)]
mod tests;
