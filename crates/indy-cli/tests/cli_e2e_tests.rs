//! CLI end-to-end tests that invoke the compiled `indynize` binary.

use assert_cmd::Command;
use indy_test_utils::TestGroovyHome;
use predicates::prelude::*;

/// `indynize` with a clean environment: no `GROOVY_HOME`, `GVM_DIR` or `RUST_LOG`.
fn indynize() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_indynize"));
    cmd.env_remove("GROOVY_HOME")
        .env_remove("GVM_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn sample_home() -> TestGroovyHome {
    TestGroovyHome::new()
        .with_lib(&["groovy.jar", "antlr.jar"])
        .with_indy(&["groovy-indy.jar"])
}

#[test]
fn test_help_exits_zero() {
    indynize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_unknown_flag_exits_one() {
    indynize().arg("--bogus").assert().code(1);
}

#[test]
fn test_reconcile_explicit_root() {
    let home = sample_home();

    indynize().arg(home.root()).assert().success().stderr("");

    home.assert_linked("groovy.jar", "indy/groovy-indy.jar");
    home.assert_linked("antlr.jar", "lib.orig/antlr.jar");
}

#[test]
fn test_reconcile_from_groovy_home_env() {
    let home = sample_home();

    indynize()
        .env("GROOVY_HOME", home.root())
        .assert()
        .success();

    home.assert_linked("groovy.jar", "indy/groovy-indy.jar");
}

#[test]
fn test_reconcile_from_gvm_home() {
    let user_home = assert_fs::TempDir::new().unwrap();
    let root = user_home.path().join(".gvm/groovy/current");
    for (dir, name) in [("lib", "groovy.jar"), ("indy", "groovy-indy.jar")] {
        std::fs::create_dir_all(root.join(dir)).unwrap();
        std::fs::write(root.join(dir).join(name), name).unwrap();
    }

    indynize().env("HOME", user_home.path()).assert().success();

    assert_eq!(
        std::fs::read_to_string(root.join("lib/groovy.jar")).unwrap(),
        "groovy-indy.jar"
    );
    assert!(root.join("lib.orig/groovy.jar").exists());
}

#[test]
fn test_dry_run_reports_without_changes() {
    let home = sample_home();
    let before = home.snapshot();

    indynize()
        .arg("-N")
        .arg(home.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("[dry-run] Rename"))
        .stderr(predicate::str::contains("groovy-indy.jar"));

    assert_eq!(home.snapshot(), before);
}

#[test]
fn test_verbose_traces_actions() {
    let home = sample_home();

    indynize()
        .arg("-v")
        .arg(home.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Create directory"))
        .stderr(predicate::str::contains("[dry-run]").not());

    home.assert_exists("lib.orig/groovy.jar");
}

#[test]
fn test_verbose_dry_run_lists_originals_from_lib() {
    let home = sample_home();
    let listed = format!("Linking originals from {}\n", home.root().join("lib").display());

    indynize()
        .args(["-v", "-N"])
        .arg(home.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Linking indy enabled jars from"))
        .stderr(predicate::str::contains(listed));

    home.assert_not_exists("lib.orig");
}

#[test]
fn test_missing_source_exits_one() {
    let home = TestGroovyHome::new().with_indy(&["groovy-indy.jar"]);

    indynize()
        .arg(home.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to indynize"))
        .stderr(predicate::str::contains("missing"));

    home.assert_not_exists("lib");
    home.assert_not_exists("lib.orig");
}

#[test]
fn test_restore_round_trip() {
    let home = sample_home();
    let before = home.snapshot();

    indynize().arg(home.root()).assert().success();
    indynize().arg("--restore").arg(home.root()).assert().success();

    assert_eq!(home.snapshot(), before);
}

#[test]
fn test_restore_without_backup_exits_one() {
    let home = sample_home();

    indynize()
        .arg("--restore")
        .arg(home.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing to restore"));
}
