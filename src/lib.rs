// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!           +---------+---------+
//!           v                   v
//!       cli (clap)        cmd (handlers)
//!                       get/set/unset/list
//!           +---------+---------+
//!                     v
//!        ,-------------------------,
//!        |         config          |
//!        |  TOML, DYNENV_*, flags  |
//!        '------------+------------'
//!                     v
//!        ,-------------------------,
//!        |           env           |
//!        |  EnvHandle  (by Scope)  |
//!        |  process | user | mach  |
//!        '-------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use dynenv::env::EnvHandle;
//!
//! EnvHandle::PROCESS.set("GREETING", Some("hello"))?;
//! assert_eq!(EnvHandle::PROCESS.get("GREETING").as_deref(), Some("hello"));
//! assert_eq!(EnvHandle::USER.get("NOT_SET_ANYWHERE"), None);
//! # Ok::<(), dynenv::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
