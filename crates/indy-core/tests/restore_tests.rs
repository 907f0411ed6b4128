use indy_core::{Error, ReconcileOptions, reconcile, restore};
use indy_fs::ExecMode;
use indy_test_utils::TestGroovyHome;
use pretty_assertions::assert_eq;

#[test]
fn test_restore_round_trip() {
    let home = TestGroovyHome::new()
        .with_lib(&["a.jar", "b.jar"])
        .with_indy(&["a-indy.jar"]);
    let before = home.snapshot();

    reconcile(home.root(), ReconcileOptions::default()).unwrap();
    restore(home.root(), ExecMode::default()).unwrap();

    assert_eq!(home.snapshot(), before);
}

#[test]
fn test_restore_when_lib_is_missing() {
    let home = TestGroovyHome::new().with_files("lib.orig", &["a.jar"]);

    let actions = restore(home.root(), ExecMode::verbose()).unwrap();

    assert_eq!(actions.len(), 1);
    assert_eq!(home.read("lib/a.jar"), "lib.orig/a.jar");
    home.assert_not_exists("lib.orig");
}

#[test]
fn test_restore_requires_backup() {
    let home = TestGroovyHome::new().with_lib(&["a.jar"]);

    let err = restore(home.root(), ExecMode::default()).unwrap_err();

    assert!(matches!(err, Error::NothingToRestore { .. }), "got: {err:?}");
    assert!(err.to_string().contains("lib.orig"));
}
