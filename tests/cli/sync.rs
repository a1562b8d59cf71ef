//! End-to-end upsert scenarios against the stub gh.

use crate::support::*;

#[test]
fn test_upserts_every_key() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&[]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].contains("secret set API_KEY --repo acme/widgets --body abc"));
    assert!(calls[1].contains("secret set DEBUG --repo acme/widgets --body true"));
}

#[test]
fn test_plan_lists_keys_and_done_marker() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "Upserting 2 secrets");
    assert_stdout_contains(&output, "API_KEY");
    assert_stdout_contains(&output, "DEBUG");
    assert_stdout_contains(&output, "Done.");
}

#[test]
fn test_only_filter_restricts_upserts() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--only", "^API"]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("secret set API_KEY"));
}

#[test]
fn test_exclude_filter_drops_keys() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--exclude", "DEBUG"]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("secret set API_KEY"));
}

#[test]
fn test_prefix_renames_keys() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--prefix", "APP_"]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].contains("secret set APP_API_KEY"));
    assert!(calls[1].contains("secret set APP_DEBUG"));
}

#[test]
fn test_environment_scope_appended() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--env", "production"]);
    assert_success(&output);

    for call in t.mutating_calls() {
        assert!(call.ends_with("--env production"), "missing scope: {call}");
    }
    assert_stdout_contains(&output, "(env: production)");
}

#[test]
fn test_composite_values_push_json() {
    let t = Test::with_config(TYPED_CONFIG);

    let output = t.run(&[]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert!(calls.iter().any(|c| c.contains("set PORT") && c.contains("--body 8080")));
    assert!(calls.iter().any(|c| c.contains("set RATIO") && c.contains("--body 1.5")));
    assert!(calls.iter().any(|c| c.contains("set FLAGS") && c.contains("--body [1,2,3]")));
    assert!(calls
        .iter()
        .any(|c| c.contains("set DB") && c.contains(r#"{"host":"db","port":5432}"#)));
}

#[test]
fn test_empty_filter_result_is_clean_noop() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--only", "NOMATCH"]);
    assert_success(&output);
    assert!(t.mutating_calls().is_empty());
    assert_stdout_contains(&output, "nothing to push");
}

#[test]
fn test_custom_file_and_table() {
    let t = Test::new();
    t.write_file("deploy.toml", CUSTOM_TABLE_CONFIG);

    let output = t.run(&["--file", "deploy.toml", "--table", "deploy"]);
    assert_success(&output);

    let calls = t.mutating_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("secret set TOKEN"));
    assert_stdout_contains(&output, "deploy.toml [deploy]");
}

#[test]
fn test_values_never_printed() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&[]);
    assert_success(&output);
    assert_stdout_excludes(&output, "abc");
}
