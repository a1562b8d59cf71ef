//! Dry-run mode: compute and report, never mutate.

use crate::support::*;

#[test]
fn test_dry_run_never_mutates() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--dry-run"]);
    assert_success(&output);
    assert!(t.mutating_calls().is_empty());
    assert_stdout_contains(&output, "would set API_KEY");
    assert_stdout_contains(&output, "would set DEBUG");
}

#[test]
fn test_dry_run_with_delete_missing_only_lists() {
    let t = Test::with_config(BASIC_CONFIG);
    t.set_remote_secrets(&["OLD_KEY", "API_KEY"]);

    let output = t.run(&["--dry-run", "--delete-missing"]);
    assert_success(&output);

    // The read-only listing still happens; nothing mutates
    assert!(t.calls().iter().any(|c| c.contains("secret list")));
    assert!(t.mutating_calls().is_empty());
    assert_stdout_contains(&output, "would delete OLD_KEY");
}

#[test]
fn test_dry_run_hides_values() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--dry-run"]);
    assert_success(&output);
    assert_stdout_excludes(&output, "abc");
}

#[test]
fn test_dry_run_still_prints_done() {
    let t = Test::with_config(BASIC_CONFIG);

    let output = t.run(&["--dry-run"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Done.");
}
