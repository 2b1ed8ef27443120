use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fwsum_core::{checksum, checksum_file, FwsumError};
use fwsum_testkit::sample_bytes;

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    dir.push(format!(
        "fwsum-core-test-{}-{}-{}",
        label,
        std::process::id(),
        nanos
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn file_checksum_matches_slice() {
    let dir = temp_dir("file");
    let path = dir.join("firmware.bin");
    let data = sample_bytes(10_000);
    fs::write(&path, &data).expect("write file");

    let sum = checksum_file(&path).expect("checksum file");
    assert_eq!(sum.value, checksum(&data));
    assert_eq!(sum.len, 10_000);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_names_path() {
    let dir = temp_dir("missing");
    let path = dir.join("absent.bin");

    let err = checksum_file(&path).unwrap_err();
    assert!(matches!(err, FwsumError::Read { .. }));
    assert!(err.to_string().contains("absent.bin"), "{err}");
    let _ = fs::remove_dir_all(&dir);
}
