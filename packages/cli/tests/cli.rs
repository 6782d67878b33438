use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with an isolated config dir and colors disabled.
fn dirxfer(config_home: &Path, args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dirxfer"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn build_scenario(root: &Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("sub/b.log"), "bravo").unwrap();
}

#[test]
fn test_missing_source_fails_without_side_effects() {
    let base = TempDir::new().unwrap();
    let src = base.path().join("missing");
    let dest = base.path().join("dest");

    let output = dirxfer(base.path(), &[src.as_os_str(), dest.as_os_str()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!dest.exists());
}

#[test]
fn test_filtered_copy_with_legacy_flag() {
    let base = TempDir::new().unwrap();
    let src = base.path().join("src");
    let dest = base.path().join("dest");
    build_scenario(&src);

    let output = dirxfer(
        base.path(),
        &[src.as_os_str(), dest.as_os_str(), OsStr::new("-cp"), OsStr::new(".txt")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Copied files matching '.txt'"));
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
    assert!(dest.join("sub").is_dir());
    assert!(!dest.join("sub/b.log").exists());
    assert!(src.join("sub/b.log").exists());
}

#[test]
fn test_move_everything() {
    let base = TempDir::new().unwrap();
    let src = base.path().join("src");
    let dest = base.path().join("dest");
    build_scenario(&src);

    let output = dirxfer(base.path(), &[src.as_os_str(), dest.as_os_str(), OsStr::new("-mv")]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Moved all files"));
    assert!(!src.join("a.txt").exists());
    assert_eq!(fs::read_to_string(dest.join("sub/b.log")).unwrap(), "bravo");
}

#[test]
fn test_filters_without_mode_is_usage_error() {
    let base = TempDir::new().unwrap();
    let src = base.path().join("src");
    let dest = base.path().join("dest");
    build_scenario(&src);

    let output = dirxfer(base.path(), &[src.as_os_str(), dest.as_os_str(), OsStr::new(".txt")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dest.exists());
}

#[test]
fn test_settings_file_supplies_filters() {
    let base = TempDir::new().unwrap();
    let src = base.path().join("src");
    let dest = base.path().join("dest");
    build_scenario(&src);
    let settings = base.path().join("settings.toml");
    fs::write(&settings, "filters = [\".log\"]\n").unwrap();

    let output = dirxfer(
        base.path(),
        &[src.as_os_str(), dest.as_os_str(), OsStr::new("--config"), settings.as_os_str()],
    );

    assert!(output.status.success());
    assert!(dest.join("sub/b.log").exists());
    assert!(!dest.join("a.txt").exists());
}
