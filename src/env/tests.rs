// dynenv: Scoped Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use super::{EnvHandle, Scope, resolve_key};
use crate::error::EnvError;

/// Returns a variable name no other test uses.
fn unique_name(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("ENVTEST_UNIT_{prefix}_{}_{n}", std::process::id())
}

#[test]
fn test_prebuilt_handles() {
    insta::assert_debug_snapshot!(
        [EnvHandle::PROCESS.scope(), EnvHandle::USER.scope(), EnvHandle::MACHINE.scope()],
        @r"
    [
        Process,
        User,
        Machine,
    ]
    "
    );
    assert_eq!(EnvHandle::default(), EnvHandle::PROCESS);
    assert_eq!(EnvHandle::new(Scope::User), EnvHandle::USER);
}

#[test]
fn test_scope_parse_and_display() {
    for scope in Scope::ALL {
        assert_eq!(scope.to_string().parse::<Scope>().unwrap(), scope);
    }
    assert_eq!("MACHINE".parse::<Scope>().unwrap(), Scope::Machine);
    assert!("system".parse::<Scope>().is_err());
    assert!(!Scope::Process.is_persisted());
    assert!(Scope::User.is_persisted());
    assert!(Scope::Machine.is_persisted());
}

#[test]
fn test_get_missing_is_none() {
    let name = unique_name("MISSING");
    for scope in Scope::ALL {
        let env = EnvHandle::new(scope);
        assert_eq!(env.get(&name), None, "{scope}");
        assert_eq!(env.get_index(&[json!(name)]).unwrap(), None, "{scope}");
    }
}

#[test]
fn test_get_unusable_name_is_none() {
    let env = EnvHandle::PROCESS;
    assert_eq!(env.get(""), None);
    assert_eq!(env.get("A=B"), None);
    assert_eq!(env.get("A\0B"), None);
}

#[test]
fn test_set_then_get_round_trip() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("SETGET");

    env.set(&name, Some("abc123")).unwrap();
    assert_eq!(env.get(&name).as_deref(), Some("abc123"));

    env.set(&name, Some("replaced")).unwrap();
    assert_eq!(env.get(&name).as_deref(), Some("replaced"));

    env.delete(&name).unwrap();
}

#[test]
fn test_empty_string_is_not_absent() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("EMPTY");

    env.set(&name, Some("")).unwrap();
    assert_eq!(env.get(&name).as_deref(), Some(""));

    env.delete(&name).unwrap();
    assert_eq!(env.get(&name), None);
}

#[test]
fn test_set_none_deletes() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("SETNONE");

    env.set(&name, Some("value")).unwrap();
    env.set(&name, None).unwrap();
    assert_eq!(env.get(&name), None);
}

#[test]
fn test_delete_missing_is_ok() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("DELMISSING");
    env.delete(&name).unwrap();
    env.delete(&name).unwrap();
    assert_eq!(env.get(&name), None);
}

#[test]
fn test_set_rejects_unusable_name() {
    let env = EnvHandle::PROCESS;
    for name in ["", "A=B", "A\0B"] {
        let err = env.set(name, Some("x")).unwrap_err();
        assert_eq!(err.param(), Some("name"), "{name:?}");
    }
}

#[test]
fn test_set_rejects_nul_in_value() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("NULVALUE");
    let err = env.set(&name, Some("a\0b")).unwrap_err();
    assert_eq!(err.param(), Some("value"));
    assert_eq!(env.get(&name), None);
}

#[test]
fn test_list_names_has_no_phantoms() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("LISTED");
    env.set(&name, Some("present")).unwrap();

    let names = env.list_names();
    assert!(names.contains(&name));
    // Other tests add and remove `ENVTEST_` variables concurrently.
    for listed in names.iter().filter(|listed| !listed.starts_with("ENVTEST_")) {
        assert!(env.get(listed).is_some(), "phantom name {listed}");
    }

    env.delete(&name).unwrap();
    assert!(!env.list_names().contains(&name));
}

#[cfg(unix)]
#[test]
fn test_list_names_skips_non_unicode_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let stem = format!("ENVTEST_UNIT_{}_", std::process::id());
    let mut bytes = stem.clone().into_bytes();
    bytes.extend_from_slice(b"\xff_RAW");
    let name = OsStr::from_bytes(&bytes);

    // SAFETY: the name embeds the pid and is used by this test only.
    unsafe { std::env::set_var(name, "hidden") };

    let env = EnvHandle::PROCESS;
    let names = env.list_names();
    let vars = env.vars();

    // SAFETY: see above.
    unsafe { std::env::remove_var(name) };

    assert!(!names.iter().any(|listed| listed.starts_with(&stem)));
    assert!(!vars.keys().any(|listed| listed.starts_with(&stem)));
    for listed in names.iter().filter(|listed| !listed.starts_with("ENVTEST_")) {
        assert!(env.get(listed).is_some(), "phantom name {listed}");
    }
}

#[cfg(unix)]
#[test]
fn test_non_unicode_value_is_lossy() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let name = unique_name("LOSSY");
    // SAFETY: the name is unique to this test.
    unsafe { std::env::set_var(&name, OsStr::from_bytes(b"a\xffb")) };

    let value = EnvHandle::PROCESS.get(&name);
    EnvHandle::PROCESS.delete(&name).unwrap();

    assert_eq!(value.as_deref(), Some("a\u{fffd}b"));
}

#[test]
fn test_vars_matches_get() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("VARS");
    env.set(&name, Some("snapshot")).unwrap();

    let vars = env.vars();
    assert_eq!(vars.get(&name).map(String::as_str), Some("snapshot"));

    env.delete(&name).unwrap();
}

// --- dynamic access ---

#[test]
fn test_resolve_key_shapes() {
    assert_eq!(resolve_key(&[json!("PATH")]).unwrap(), "PATH");

    let rejected: [&[Value]; 5] = [
        &[],
        &[json!(0)],
        &[json!("TEST"), json!("1")],
        &[json!(null)],
        &[json!(["NESTED"])],
    ];
    for indexes in rejected {
        let err = resolve_key(indexes).unwrap_err();
        assert!(matches!(err, EnvError::OutOfRange(_)), "{indexes:?}");
    }
}

#[test]
fn test_index_round_trip() {
    let env = EnvHandle::PROCESS;
    let key = [json!(unique_name("SETGET_BYINDEX"))];

    env.set_index(&key, &json!("by-index")).unwrap();
    assert_eq!(env.get_index(&key).unwrap().as_deref(), Some("by-index"));

    env.delete_index(&key).unwrap();
    assert_eq!(env.get_index(&key).unwrap(), None);
}

#[test]
fn test_set_value_null_deletes() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("NULLVALUE");

    env.set_value(&name, &json!("x")).unwrap();
    env.set_value(&name, &Value::Null).unwrap();
    assert_eq!(env.get(&name), None);
}

#[test]
fn test_set_value_invalid_type_leaves_prior_value() {
    let env = EnvHandle::PROCESS;
    let name = unique_name("INVALIDTYPE");
    env.set(&name, Some("before")).unwrap();

    for value in [json!({}), json!(42), json!(true), json!(["a"])] {
        let err = env.set_value(&name, &value).unwrap_err();
        assert!(
            matches!(err, EnvError::InvalidArgument { param: "value", .. }),
            "{value}"
        );
    }
    assert_eq!(env.get(&name).as_deref(), Some("before"));

    env.delete(&name).unwrap();
}

#[test]
fn test_index_errors_across_scopes() {
    for scope in Scope::ALL {
        let env = EnvHandle::new(scope);
        for indexes in [vec![], vec![json!(0)], vec![json!("TEST"), json!("1")]] {
            assert!(matches!(
                env.get_index(&indexes),
                Err(EnvError::OutOfRange(_))
            ));
            assert!(matches!(
                env.set_index(&indexes, &json!("value")),
                Err(EnvError::OutOfRange(_))
            ));
            assert!(matches!(
                env.delete_index(&indexes),
                Err(EnvError::OutOfRange(_))
            ));
        }
    }
}

#[test]
fn test_set_index_checks_index_before_value() {
    let err = EnvHandle::PROCESS
        .set_index(&[json!(1)], &json!(1))
        .unwrap_err();
    assert!(matches!(err, EnvError::OutOfRange(_)));
}

#[cfg(not(windows))]
#[test]
fn test_persisted_scopes_are_detached() {
    let name = unique_name("DETACHED");
    for env in [EnvHandle::USER, EnvHandle::MACHINE] {
        env.set(&name, Some("ignored")).unwrap();
        assert_eq!(env.get(&name), None);
        env.delete(&name).unwrap();
        assert!(env.list_names().is_empty());
    }
    assert_eq!(EnvHandle::PROCESS.get(&name), None);
}
