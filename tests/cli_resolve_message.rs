#![cfg(unix)]

mod common;

use common::{TestEnv, FAKE_REVISION};

#[test]
fn test_resolve_prints_archive_path() {
    let env = TestEnv::new(0);
    let ipa = env.write_artifact("xcode/build/Unity-iPhone.ipa");

    let result = env.run(&["resolve", "-t", "ios", "-o", env.path("xcode").to_str().unwrap()]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout.trim(), ipa.display().to_string());
    assert!(env.dg_args().is_none());
}

#[test]
fn test_resolve_json() {
    let env = TestEnv::new(0);
    let apk = env.write_artifact("app.apk");

    let result = env.run(&["--json", "resolve", "-t", "android", "-o", apk.to_str().unwrap()]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "resolve");
    assert_eq!(event["target"], "android");
    assert_eq!(event["archive"], apk.display().to_string());
}

#[test]
fn test_resolve_missing_android_archive() {
    let env = TestEnv::new(0);

    let result = env.run(&["resolve", "-t", "android", "-o", env.path("app.apk").to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("built archive not found"), "{}", result.stderr);
}

#[test]
fn test_message_omits_empty_variables() {
    let env = TestEnv::new(0);

    let result = env.run_with_env(
        &["message"],
        &[
            ("BUILD_USER", "bob"),
            ("BUILD_BRANCH", ""),
            ("BUILD_EDITOR_VERSION", "6000.0.23f1"),
        ],
    );

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        format!("User: bob\nCommit: {}\nUnity: 6000.0.23f1\n", FAKE_REVISION)
    );
}

#[test]
fn test_message_json() {
    let env = TestEnv::new(0);

    let result = env.run(&["message", "--json", "-d", "smoke test"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "message");
    assert_eq!(
        event["message"],
        format!("Commit: {}\n\nsmoke test\n", FAKE_REVISION)
    );
}

#[test]
fn test_message_fails_outside_repository() {
    let env = TestEnv::new(0).with_failing_git();

    let result = env.run(&["message"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("could not determine source revision"),
        "{}",
        result.stderr
    );
}
