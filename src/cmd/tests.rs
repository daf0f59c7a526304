// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::config::{run_inis_command, run_options_command};
use super::vars::{run_get_command, run_list_command, run_set_command, run_unset_command};
use crate::cli::vars::{GetArgs, ListArgs, SetArgs, UnsetArgs};
use crate::config::Config;
use crate::env::EnvHandle;
use crate::error::EnvError;

fn name(suffix: &str) -> String {
    format!("ENVTEST_CMD_{suffix}_{}", std::process::id())
}

fn set_args(name: &str, value: &str, json: bool) -> SetArgs {
    SetArgs {
        name: name.to_string(),
        value: value.to_string(),
        json,
    }
}

fn get_output(name: &str) -> (bool, String) {
    let mut out = Vec::new();
    let found = run_get_command(
        &GetArgs {
            name: name.to_string(),
        },
        EnvHandle::PROCESS,
        &mut out,
    )
    .unwrap();
    (found, String::from_utf8(out).unwrap())
}

#[test]
fn test_set_get_unset() {
    let var = name("SETGET");

    run_set_command(&set_args(&var, "hello world", false), EnvHandle::PROCESS).unwrap();
    assert_eq!(get_output(&var), (true, "hello world\n".to_string()));

    run_unset_command(&UnsetArgs { name: var.clone() }, EnvHandle::PROCESS).unwrap();
    assert_eq!(get_output(&var), (false, String::new()));
}

#[test]
fn test_set_json_string_and_null() {
    let var = name("JSON");

    run_set_command(&set_args(&var, r#""from json""#, true), EnvHandle::PROCESS).unwrap();
    assert_eq!(EnvHandle::PROCESS.get(&var).as_deref(), Some("from json"));

    run_set_command(&set_args(&var, "null", true), EnvHandle::PROCESS).unwrap();
    assert_eq!(EnvHandle::PROCESS.get(&var), None);
}

#[test]
fn test_set_json_rejects_non_string() {
    let var = name("JSON_NUMBER");

    let err = run_set_command(&set_args(&var, "42", true), EnvHandle::PROCESS).unwrap_err();
    let env_err = err.downcast_ref::<EnvError>().expect("EnvError in chain");
    assert_eq!(env_err.param(), Some("value"));
    assert_eq!(EnvHandle::PROCESS.get(&var), None);
}

#[test]
fn test_set_json_rejects_malformed() {
    let var = name("JSON_BAD");
    assert!(run_set_command(&set_args(&var, "{not json", true), EnvHandle::PROCESS).is_err());
}

#[test]
fn test_list_is_sorted_and_includes_values() {
    let var = name("LIST");
    EnvHandle::PROCESS.set(&var, Some("listed")).unwrap();

    let mut out = Vec::new();
    run_list_command(&ListArgs::default(), EnvHandle::PROCESS, &mut out).unwrap();
    let names: Vec<_> = String::from_utf8(out).unwrap().lines().map(str::to_owned).collect();
    assert!(names.contains(&var));
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut out = Vec::new();
    run_list_command(&ListArgs { values: true }, EnvHandle::PROCESS, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().any(|line| line == format!("{var}=listed")));

    EnvHandle::PROCESS.delete(&var).unwrap();
}

#[test]
fn test_inis_command() {
    let mut out = Vec::new();
    run_inis_command(&[], &mut out).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @"No configuration files loaded");
}

#[test]
fn test_options_command() {
    let mut out = Vec::new();
    run_options_command(&Config::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("env.default_scope       = process"));
}
