//! Tests for the rendered listings against live filesystem metadata.

use std::fs;

use chrono::{DateTime, Local};
use dupcleaner::duplicates::group_by_fingerprint;
use dupcleaner::output::{max_path_width, Lister};
use dupcleaner::scanner::DigestConfig;
use tempfile::TempDir;

fn ctime_style(t: std::time::SystemTime) -> String {
    let datetime: DateTime<Local> = t.into();
    datetime.format("%a %b %e %H:%M:%S %Y").to_string()
}

#[test]
fn machine_rows_round_trip_storage_metadata() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    fs::write(&a, b"0123456789abcdef").unwrap();
    fs::write(&b, b"0123456789abcdef").unwrap();

    let groups =
        group_by_fingerprint(&[a.clone(), b.clone()], DigestConfig::new(true, true), false)
            .unwrap();
    assert_eq!(groups.len(), 1);

    let lister = Lister::new(true, None);
    let mut buf = Vec::new();
    lister
        .print_header(&mut buf, &groups[0].fingerprint)
        .unwrap();
    lister
        .print_files(&mut buf, &groups[0].fingerprint, &groups[0].files)
        .unwrap();
    let out = String::from_utf8(buf).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "MD5|SHA-1|File|Creation|Last Modification|Size");
    assert_eq!(lines.len(), 3);

    for (line, path) in lines[1..].iter().zip([&a, &b]) {
        let meta = fs::metadata(path).unwrap();
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], groups[0].fingerprint.md5_hex());
        assert_eq!(fields[1], groups[0].fingerprint.sha1_hex());
        assert_eq!(fields[2], path.display().to_string());
        assert_eq!(
            fields[3],
            ctime_style(meta.created().unwrap_or_else(|_| meta.modified().unwrap()))
        );
        assert_eq!(fields[4], ctime_style(meta.modified().unwrap()));
        assert_eq!(fields[5], meta.len().to_string());
    }
}

#[test]
fn human_listing_uses_global_alignment_width() {
    let dir = TempDir::new().unwrap();
    let short = dir.path().join("s");
    let long = dir.path().join("considerably-longer-file-name.dat");
    fs::write(&short, b"dup").unwrap();
    fs::write(&long, b"dup").unwrap();

    let groups =
        group_by_fingerprint(&[short, long], DigestConfig::default(), false).unwrap();
    let width = max_path_width(&groups);

    let lister = Lister::new(false, Some(width));
    let mut buf = Vec::new();
    lister
        .print_files(&mut buf, &groups[0].fingerprint, &groups[0].files)
        .unwrap();
    let out = String::from_utf8(buf).unwrap();

    let positions: Vec<usize> = out
        .lines()
        .map(|l| l.find("Created:").unwrap())
        .collect();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], positions[1]);
    // "[1] " prefix plus the padded path column.
    assert_eq!(positions[0], 4 + width + 1);
}

#[test]
fn human_header_shows_both_digests() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"x").unwrap();
    fs::write(&b, b"x").unwrap();

    let groups =
        group_by_fingerprint(&[a, b], DigestConfig::new(true, true), false).unwrap();

    let lister = Lister::new(false, None);
    let mut buf = Vec::new();
    lister
        .print_header(&mut buf, &groups[0].fingerprint)
        .unwrap();
    let out = String::from_utf8(buf).unwrap();

    let md5 = groups[0].fingerprint.md5_hex();
    let sha1 = groups[0].fingerprint.sha1_hex();
    assert_eq!(out, format!("Files with key [MD5:{md5} SHA-1:{sha1}]:\n"));
    assert_eq!(md5.len(), 32);
    assert_eq!(sha1.len(), 40);
}

#[test]
fn vanished_file_still_renders_a_row() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"x").unwrap();
    fs::write(&b, b"x").unwrap();

    let groups = group_by_fingerprint(&[a.clone(), b], DigestConfig::default(), false).unwrap();

    // Simulate an operator deleting the file out-of-band mid-session.
    fs::remove_file(&a).unwrap();

    let lister = Lister::new(true, None);
    let mut buf = Vec::new();
    lister
        .print_files(&mut buf, &groups[0].fingerprint, &groups[0].files)
        .unwrap();
    let out = String::from_utf8(buf).unwrap();

    let first = out.lines().next().unwrap();
    assert!(first.contains(&a.display().to_string()));
    assert!(first.ends_with("|0"));
}

#[test]
fn per_group_alignment_when_no_global_width() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a");
    let abcdef = dir.path().join("abcdef");
    fs::write(&a, b"y").unwrap();
    fs::write(&abcdef, b"y").unwrap();

    let groups =
        group_by_fingerprint(&[a, abcdef], DigestConfig::default(), false).unwrap();

    let lister = Lister::new(false, None);
    let mut buf = Vec::new();
    lister
        .print_files(&mut buf, &groups[0].fingerprint, &groups[0].files)
        .unwrap();
    let out = String::from_utf8(buf).unwrap();

    let positions: Vec<usize> = out
        .lines()
        .map(|l| l.find("Created:").unwrap())
        .collect();
    assert_eq!(positions[0], positions[1]);
}
