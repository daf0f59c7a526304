// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable store selection.
//!
//! ```text
//! Process  -> environment block of this process
//! User     -> persisted per-user variables   (HKCU\Environment)
//! Machine  -> persisted machine-wide variables (HKLM\...\Session Manager\Environment)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which environment variable store an operation targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The current process environment.
    #[default]
    Process,
    /// The current user's persisted variables.
    User,
    /// The machine-wide persisted variables.
    Machine,
}

impl Scope {
    /// All scopes, in order.
    pub const ALL: [Self; 3] = [Self::Process, Self::User, Self::Machine];

    /// Returns true if the scope is backed by a persisted OS store.
    #[must_use]
    pub const fn is_persisted(self) -> bool {
        matches!(self, Self::User | Self::Machine)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::User => "user",
            Self::Machine => "machine",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "process" => Ok(Self::Process),
            "user" => Ok(Self::User),
            "machine" => Ok(Self::Machine),
            _ => Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "default_scope".to_string(),
                message: format!("expected 'process', 'user', or 'machine', got '{s}'"),
            }),
        }
    }
}
