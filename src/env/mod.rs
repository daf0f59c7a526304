// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable access.
//!
//! # Architecture
//!
//! ```text
//! EnvHandle::{PROCESS, USER, MACHINE} / EnvHandle::new(Scope)
//!        |
//!        +-- named:    get / set / delete / list_names / vars
//!        +-- dynamic:  get_index / set_index / delete_index / set_value
//!        |
//!        v
//!      store
//!   process: std::env      persisted: registry (Windows) | detached
//! ```
//!
//! - **Stateless**: a handle is just a scope, every call hits the OS
//! - **Absent is not empty**: missing variables are `None`, `""` is a value
//! - **Two local errors**: `InvalidArgument` and `OutOfRange`

pub mod dynamic;
pub mod handle;
pub mod scope;
mod store;

#[cfg(test)]
mod tests;

pub use dynamic::resolve_key;
pub use handle::EnvHandle;
pub use scope::Scope;
