//! Integration tests for leafutils
//!
//! These tests exercise the public API end to end: size formatting against the
//! reference strings, parsing what the formatter prints, directory sizes on a
//! real temporary tree, permission changes and shell execution.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

use leafutils::config::{FileConfig, SizeOptions};
use leafutils::output::JsonDiskUsage;
use leafutils::shell::Execute;
use leafutils::size::{
    ByteSize, FileSize, FileSizeSi, Magnitude, Units, UnitSystem, calculate_dir_size, parse_size,
};
use leafutils::sys::{Passwd, chmod, fchmod, fnmatch};
use leafutils::utils::{range_step, sorted};

/// Helper function to create a temporary directory structure for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a file of `len` bytes
fn create_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, vec![b'x'; len]).expect("Failed to write file");
}

/// Formats that the reference test-suite pins down for both unit systems.
const REFERENCE_SIZES: [(u64, &str, &str); 8] = [
    (4_488_998_912, "4.2 GiB", "4.5 GB"),
    (12_544_835_584, "11.7 GiB", "12.5 GB"),
    (111_031_328_768, "103.4 GiB", "111.0 GB"),
    (249_008_676_864, "231.9 GiB", "249.0 GB"),
    (5_973_753_856, "5.6 GiB", "6.0 GB"),
    (942_819, "920.7 KiB", "942.8 KB"),
    (19_260, "18.8 KiB", "19.3 KB"),
    (360, "360 B", "360 B"),
];

#[test]
fn test_reference_sizes_both_systems() {
    for (bytes, iec, si) in REFERENCE_SIZES {
        assert_eq!(FileSize::new(bytes).formatted_size(1), iec);
        assert_eq!(FileSizeSi::new(bytes).formatted_size(1), si);
    }
}

#[test]
fn test_concrete_iec_scenarios() {
    assert_eq!(FileSize::new(0).to_string(), "0 B");
    assert_eq!(FileSize::new(1024).formatted_size(0), "1 KiB");
    assert_eq!(FileSize::new(1024).formatted_size(3), "1.000 KiB");
}

/// Every exact threshold maps to `1.0` of its own unit, never to the unit below.
fn check_exact_thresholds<S: UnitSystem>() {
    for magnitude in Magnitude::ALL {
        let size = ByteSize::<S>::new(S::threshold(magnitude));
        assert_eq!(size.magnitude(), magnitude);
        assert_eq!(size.filesize_parts(), (1.0, S::label(magnitude)));
        assert!(size.is(magnitude));
    }
}

#[test]
fn test_exact_thresholds() {
    check_exact_thresholds::<leafutils::size::Iec>();
    check_exact_thresholds::<leafutils::size::Si>();
}

#[test]
fn test_formatted_output_parses_back_to_same_display() {
    for (bytes, _, _) in REFERENCE_SIZES {
        let shown = FileSize::new(bytes).formatted_size(3);
        let reparsed: FileSize = shown.parse().expect("formatted size should parse");
        assert_eq!(reparsed.formatted_size(1), FileSize::new(bytes).formatted_size(1));

        let shown = FileSizeSi::new(bytes).formatted_size(3);
        let reparsed: FileSizeSi = shown.parse().expect("formatted size should parse");
        assert_eq!(reparsed.formatted_size(1), FileSizeSi::new(bytes).formatted_size(1));
    }
}

#[test]
fn test_parse_size_accepts_cli_style_inputs() {
    assert_eq!(parse_size("4488998912").unwrap(), 4_488_998_912);
    assert_eq!(parse_size("1.5GiB").unwrap(), 1_610_612_736);
    assert_eq!(parse_size("942.8 KB").unwrap(), 942_800);
    assert!(parse_size("1.5 lightyears").is_err());
}

#[test]
fn test_size_options_from_config_file() {
    let temp_dir = create_test_directory();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[size]\nunits = \"si\"\nprecision = 0\n").unwrap();

    let config = FileConfig::load_from(&config_path).unwrap();
    let options = SizeOptions::resolve(None, None, &config);

    assert_eq!(options.units, Units::Si);
    assert_eq!(options.format(4_488_998_912), "4 GB");
    assert_eq!(options.format(360), "360 B");
}

#[test]
fn test_directory_size_and_report() {
    let temp_dir = create_test_directory();
    let base = temp_dir.path();

    create_file(&base.join("a.bin"), 1_000);
    create_file(&base.join("nested").join("b.bin"), 24);
    create_file(&base.join("nested").join("deeper").join("c.bin"), 1_024);

    let total = calculate_dir_size(base);
    assert_eq!(total, 2_048);
    assert_eq!(FileSize::new(total).to_string(), "2.0 KiB");
    assert_eq!(FileSizeSi::new(total).to_string(), "2.0 KB");

    let report = JsonDiskUsage::new(base, total, &SizeOptions::default());
    assert_eq!(report.size.unit, "KiB");
    assert_eq!(report.size.formatted, "2.0 KiB");
}

#[test]
fn test_chmod_then_execute_script() {
    let temp_dir = create_test_directory();
    let script = temp_dir.path().join("hello.sh");
    fs::write(&script, "#!/bin/sh\necho \"hello $1\"\n").unwrap();

    chmod(&script, 0o755).unwrap();
    let mode = fs::metadata(&script).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);

    let result = Execute::run(&format!("'{}' world", script.display())).unwrap();
    assert!(result.success());
    assert_eq!(result.standard_output(), "hello world\n");
}

#[test]
fn test_fchmod_removes_execute_bit() {
    let temp_dir = create_test_directory();
    let script = temp_dir.path().join("locked.sh");
    fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
    chmod(&script, 0o755).unwrap();

    let file = fs::File::open(&script).unwrap();
    fchmod(&file, 0o644).unwrap();
    drop(file);

    let mode = fs::metadata(&script).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[test]
fn test_execute_reports_failure_status() {
    let result = Execute::run("ls /definitely/not/here").unwrap();
    assert!(!result.success());
    assert!(result.exit_status().is_some_and(|code| code != 0));
    assert!(!result.standard_error().is_empty());
}

#[test]
fn test_current_user_home_matches_lookup() {
    let me = Passwd::current().unwrap();
    let by_name = Passwd::from_name(&me.name).unwrap().unwrap();
    assert_eq!(me, by_name);
}

#[test]
fn test_fnmatch_against_directory_listing() {
    let temp_dir = create_test_directory();
    for name in ["main.rs", "lib.rs", "README.md"] {
        create_file(&temp_dir.path().join(name), 1);
    }

    let names = sorted(
        fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned()),
        false,
    );
    let rust_files: Vec<&String> = names.iter().filter(|n| fnmatch("*.rs", n)).collect();

    assert_eq!(rust_files, vec!["lib.rs", "main.rs"]);
}

#[test]
fn test_range_step_counts_thresholds() {
    let powers: Vec<u64> = range_step(0, 7, 1)
        .unwrap()
        .into_iter()
        .map(|k| 1024u64.pow(u32::try_from(k).unwrap()))
        .collect();

    for (power, magnitude) in powers.into_iter().zip(Magnitude::ALL) {
        assert!(FileSize::new(power).is(magnitude));
    }
}
