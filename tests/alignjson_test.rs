use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn alignjson_strips_redundant_second_extensions() {
    let tmp = tempdir().expect("tempdir");
    let import = tmp.path().join("takeout");
    fs::create_dir_all(&import).expect("mkdir");
    fs::write(import.join("photo.heic.json"), "{}").expect("write heic");
    fs::write(import.join("clip.mp4.json"), "{}").expect("write mp4");
    fs::write(import.join("plain.json"), "{}").expect("write plain");

    assert_cmd::cargo::cargo_bin_cmd!("takeout-sidecar")
        .current_dir(tmp.path())
        .arg("alignjson")
        .args(["--import", import.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed 2"));

    assert!(import.join("photo.json").exists());
    assert!(import.join("clip.json").exists());
    assert!(import.join("plain.json").exists());
    assert!(!import.join("photo.heic.json").exists());
    assert!(!import.join("clip.mp4.json").exists());
}

#[test]
fn alignjson_dry_run_reports_without_renaming() {
    let tmp = tempdir().expect("tempdir");
    let import = tmp.path().join("takeout");
    fs::create_dir_all(&import).expect("mkdir");
    let source = import.join("photo.heic.json");
    fs::write(&source, "{}").expect("write");

    assert_cmd::cargo::cargo_bin_cmd!("takeout-sidecar")
        .current_dir(tmp.path())
        .arg("alignjson")
        .args(["--import", import.to_str().expect("utf8")])
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("would rename 1"));

    assert!(source.exists());
    assert!(!import.join("photo.json").exists());
}

#[test]
fn alignjson_keeps_dotted_identifiers_and_occupied_targets() {
    let tmp = tempdir().expect("tempdir");
    let import = tmp.path().join("takeout");
    fs::create_dir_all(&import).expect("mkdir");
    let dotted = import.join("burst.20200516_132742.json");
    let colliding = import.join("photo.heic.json");
    let target = import.join("photo.json");
    fs::write(&dotted, "{}").expect("write dotted");
    fs::write(&colliding, "from source").expect("write colliding");
    fs::write(&target, "already here").expect("write target");

    assert_cmd::cargo::cargo_bin_cmd!("takeout-sidecar")
        .current_dir(tmp.path())
        .arg("alignjson")
        .args(["--import", import.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("second extension too long: 1"))
        .stdout(predicate::str::contains("target exists: 1"));

    assert!(dotted.exists());
    assert_eq!(fs::read_to_string(&colliding).expect("colliding"), "from source");
    assert_eq!(fs::read_to_string(&target).expect("target"), "already here");
}

#[test]
fn alignjson_fails_when_the_import_folder_is_missing() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("takeout-sidecar")
        .current_dir(tmp.path())
        .arg("alignjson")
        .args(["--import", tmp.path().join("nowhere").to_str().expect("utf8")])
        .assert()
        .failure();
}
