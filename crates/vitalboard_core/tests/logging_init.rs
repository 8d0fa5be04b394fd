use vitalboard_core::{init_logging, logging_status, LoggingError};

// Logging state is process-wide, so this file holds a single test.
#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    let other_dir = tempfile::tempdir().expect("temp dir");

    init_logging("info", log_dir.path()).expect("first init");
    init_logging("INFO", log_dir.path()).expect("same settings are idempotent");

    let level_err = init_logging("debug", log_dir.path()).expect_err("level switch");
    assert!(matches!(level_err, LoggingError::AlreadyInitialized { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", other_dir.path()).expect_err("directory switch");
    assert!(matches!(dir_err, LoggingError::AlreadyInitialized { .. }));

    let (level, dir) = logging_status().expect("logging active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    log::info!("event=test module=tests status=ok");
}
