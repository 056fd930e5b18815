// SPDX-License-Identifier: MIT OR Apache-2.0

//! A fatal line ends the process. The test re-runs this binary as a child that
//! logs at fatal level and inspects its exit status and stderr.

use grouplog::{FATAL_EXIT_STATUS, Level, Logger, StdErrSink};
use std::process::Command;
use std::sync::Arc;

const CHILD_ENV: &str = "GROUPLOG_FATAL_CHILD";

#[test]
fn fatal_child() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }
    let logger = Logger::builder()
        .sink(Arc::new(StdErrSink::with_terminal(false)))
        .build();
    // Even a fatal-only group configuration lets fatal lines through.
    logger.set_verbosity("all", Level::Fatal);
    logger.log_str(Level::Error, "6", "main.c", "filtered out");
    logger.log_str(Level::Fatal, "7", "main.c", "giving up");
    println!("still running after fatal");
}

#[test]
fn fatal_log_exits_with_failure() {
    let output = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "fatal_child", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(FATAL_EXIT_STATUS));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("] F: main.c:7: giving up\n"), "{stderr}");
    assert!(!stderr.contains("filtered out"), "{stderr}");
    assert!(!stdout.contains("still running after fatal"), "{stdout}");
}
