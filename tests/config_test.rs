use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("fnombre").unwrap();
    cmd.env_remove("FNOMBRE_CONFIG");
    cmd
}

#[test]
fn config_file_sets_defaults() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("fnombre.toml");
    file.write_str("casing = \"upper\"\ndelimiter = \"_\"\nsize = 3\nquantity = 4\n")
        .unwrap();

    let output = cmd().arg("--config").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        assert_eq!(line.split('_').count(), 3, "unexpected name {}", line);
        assert_eq!(line, line.to_uppercase());
    }
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("fnombre.toml");
    file.write_str("size = 4\nquantity = 2\n").unwrap();

    let output = cmd()
        .arg("--config")
        .arg(file.path())
        .args(["--size", "2", "--quantity", "3"])
        .output()
        .unwrap();
    let out = String::from_utf8(output.stdout).unwrap();
    assert_eq!(out.lines().count(), 3);
    assert!(out.lines().all(|l| l.split('-').count() == 2));
}

#[test]
fn config_from_environment() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("fnombre.toml");
    file.write_str("quantity = 5\nseed = 77\n").unwrap();

    let first = cmd()
        .env("FNOMBRE_CONFIG", file.path())
        .output()
        .unwrap();
    let second = cmd()
        .env("FNOMBRE_CONFIG", file.path())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 5);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_config_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("--config")
        .arg(tmp.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S+-\S+\n$").unwrap());
}

#[test]
fn config_file_with_bad_casing_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("fnombre.toml");
    file.write_str("casing = \"shouty\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid casing: shouty"));
}

#[test]
fn malformed_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("fnombre.toml");
    file.write_str("size = [").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML"));
}
