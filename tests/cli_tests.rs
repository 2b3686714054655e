mod common;
use common::{HEADER, log_file, wlog};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

const TWO_ROWS: &str = "date,task_name,time_spent,note\n\
                        02/01/2024,Build,30,None\n\
                        01/01/2024,Design,60,with team\n";

#[test]
fn test_init_creates_work_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--test", "--file", &log_arg, "init"])
        .assert()
        .success()
        .stdout(contains("Work log created at"));

    assert_eq!(fs::read_to_string(&log).expect("read log"), HEADER);
    assert!(
        !dir.path().join(".worklog").join("worklog.conf").exists(),
        "test mode must not write the config file"
    );

    wlog(dir.path())
        .args(["--test", "--file", &log_arg, "init"])
        .assert()
        .success()
        .stdout(contains("Work log already present at"));
}

#[test]
fn test_init_writes_config_with_custom_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--file", &log_arg, "init"])
        .assert()
        .success();

    let conf = fs::read_to_string(dir.path().join(".worklog").join("worklog.conf"))
        .expect("config written");
    assert!(conf.contains("log_file"));
    assert!(conf.contains(&log_arg));

    // the saved path is used without --file
    wlog(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(log_arg.as_str()));
}

#[test]
fn test_config_print_shows_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    wlog(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("log_file"))
        .stdout(contains("work_log.txt"))
        .stdout(contains("audit_enabled: true"));
}

#[test]
fn test_interactive_session_logs_work() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--file", &log_arg])
        .write_stdin("\n1\n01/01/2024\nDesign\n60\n\n\n4\n")
        .assert()
        .success()
        .stdout(contains("Main Menu"))
        .stdout(contains("Thank you for using the work log program!"));

    assert_eq!(
        fs::read_to_string(&log).expect("read log"),
        format!("{HEADER}01/01/2024,Design,60,None\n")
    );

    wlog(dir.path())
        .args(["--file", &log_arg, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_interactive_search_and_delete() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--file", &log_arg])
        .write_stdin("\n2\n4\nteam\nd\ny\n6\n4\n")
        .assert()
        .success()
        .stdout(contains("Displaying result 1 of 1"))
        .stdout(contains("Change confirmed."));

    assert_eq!(
        fs::read_to_string(&log).expect("read log"),
        format!("{HEADER}02/01/2024,Build,30,None\n")
    );
}

#[test]
fn test_early_end_of_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--file", &log_arg])
        .write_stdin("\n1\n01/01/2024\n")
        .assert()
        .failure()
        .stderr(contains("Error:"));

    assert_eq!(fs::read_to_string(&log).expect("read log"), HEADER);
}

#[test]
fn test_bad_header_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some("date,title,duration\n01/01/2024,Design,60\n"));
    let log_arg = log.to_string_lossy().to_string();

    wlog(dir.path())
        .args(["--file", &log_arg])
        .write_stdin("\n4\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("is not formatted properly"))
        .stdout(contains("Main Menu").not());

    wlog(dir.path())
        .args(["--test", "--file", &log_arg, "init"])
        .assert()
        .failure()
        .stderr(contains("is not formatted properly"));

    assert_eq!(
        fs::read_to_string(&log).expect("read log"),
        "date,title,duration\n01/01/2024,Design,60\n",
        "a bad table is never repaired"
    );
}

#[test]
fn test_export_csv_sorted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let out = dir.path().join("out.csv");

    wlog(dir.path())
        .args([
            "--file",
            log.to_str().expect("utf-8 path"),
            "export",
            "--format",
            "csv",
            "--out",
            out.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success()
        .stdout(contains("2 record(s)"));

    assert_eq!(
        fs::read_to_string(&out).expect("read export"),
        "date,task_name,time_spent,note\n\
         01/01/2024,Design,60,with team\n\
         02/01/2024,Build,30,None\n"
    );
}

#[test]
fn test_export_json_with_range() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let out = dir.path().join("out.json");

    wlog(dir.path())
        .args([
            "--file",
            log.to_str().expect("utf-8 path"),
            "export",
            "--format",
            "json",
            "--out",
            out.to_str().expect("utf-8 path"),
            "--from",
            "02/01/2024",
            "--to",
            "02/01/2024",
        ])
        .assert()
        .success();

    let data: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read export")).expect("json");
    let items = data.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["task_name"], "Build");
    assert_eq!(items[0]["time_spent"], 30);
}

#[test]
fn test_export_rejects_bad_range_date() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let out = dir.path().join("out.json");

    wlog(dir.path())
        .args([
            "--file",
            log.to_str().expect("utf-8 path"),
            "export",
            "--out",
            out.to_str().expect("utf-8 path"),
            "--from",
            "2024-01-01",
            "--to",
            "02/01/2024",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert!(!out.exists());
}

#[test]
fn test_export_force_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let out = dir.path().join("out.csv");
    fs::write(&out, "old").expect("write");

    wlog(dir.path())
        .args([
            "--file",
            log.to_str().expect("utf-8 path"),
            "export",
            "--out",
            out.to_str().expect("utf-8 path"),
            "--force",
        ])
        .assert()
        .success();

    assert!(
        fs::read_to_string(&out)
            .expect("read export")
            .starts_with("date,task_name,time_spent,note\n")
    );
}

#[test]
fn test_backup_plain_and_compressed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), Some(TWO_ROWS));
    let log_arg = log.to_string_lossy().to_string();

    let plain = dir.path().join("bak").join("work_log.bak");
    wlog(dir.path())
        .args(["--file", &log_arg, "backup", "--out", plain.to_str().expect("utf-8 path")])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&plain).expect("read backup"), TWO_ROWS);

    let zipped = dir.path().join("bak").join("archive.txt");
    wlog(dir.path())
        .args([
            "--file",
            &log_arg,
            "backup",
            "--out",
            zipped.to_str().expect("utf-8 path"),
            "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(zipped.with_extension("zip").exists());
    assert!(!zipped.exists());

    wlog(dir.path())
        .args(["--file", &log_arg, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_backup_of_missing_log_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);

    wlog(dir.path())
        .args([
            "--file",
            log.to_str().expect("utf-8 path"),
            "backup",
            "--out",
            dir.path().join("b.txt").to_str().expect("utf-8 path"),
        ])
        .assert()
        .failure()
        .stderr(contains("Work log not found"));
}

#[test]
fn test_log_print_on_empty_audit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = log_file(dir.path(), None);

    wlog(dir.path())
        .args(["--file", log.to_str().expect("utf-8 path"), "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log is empty"));
}
