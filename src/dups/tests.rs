use super::report::render_report;
use super::*;
use crate::catalog::extract::{NAME, TOTAL_TIME};
use crate::catalog::tests::{catalog_of, int, record, song, text};

fn lines(report: &DuplicateReport) -> Vec<String> {
    report
        .duplicates()
        .iter()
        .map(|d| format!("[{}] {}", d.count, d.name))
        .collect()
}

#[test]
fn truncation_is_floor_not_rounding() {
    assert_eq!(truncated_seconds(100_000), 100);
    assert_eq!(truncated_seconds(100_999), 100);
    assert_eq!(truncated_seconds(101_000), 101);
    assert_eq!(truncated_seconds(999), 0);
}

#[test]
fn same_second_counts_and_other_lengths_are_ignored() {
    let catalog = catalog_of(vec![
        song("Song A", 100_000),
        song("Song A", 100_500),
        song("Song A", 105_000),
    ]);
    let report = find_duplicates(&catalog);
    assert_eq!(lines(&report), vec!["[2] Song A"]);
    assert_eq!(report.len(), 1);
}

#[test]
fn differing_length_does_not_open_a_second_group() {
    let catalog = catalog_of(vec![
        song("Song A", 100_000),
        song("Song A", 200_000),
        song("Song A", 200_400),
    ]);
    // Both later tracks disagree with the first one, so nothing is reported.
    assert!(find_duplicates(&catalog).is_empty());
}

#[test]
fn records_missing_name_or_time_are_skipped() {
    let catalog = catalog_of(vec![
        song("Song A", 100_000),
        record(vec![(NAME, text("Song A"))]),
        record(vec![(TOTAL_TIME, int(100_000))]),
        record(vec![(NAME, text("Song A")), (TOTAL_TIME, text("100000"))]),
        text("not even a record"),
    ]);
    assert!(find_duplicates(&catalog).is_empty());
}

#[test]
fn skipped_record_does_not_claim_the_name() {
    // The first "Song A" has no time; the group must start at the second one.
    let catalog = catalog_of(vec![
        record(vec![(NAME, text("Song A"))]),
        song("Song A", 200_000),
        song("Song A", 200_900),
    ]);
    assert_eq!(lines(&find_duplicates(&catalog)), vec!["[2] Song A"]);
}

#[test]
fn groups_are_reported_in_first_seen_order() {
    let catalog = catalog_of(vec![
        song("Zulu", 60_000),
        song("Alpha", 30_000),
        song("Unique", 10_000),
        song("Alpha", 30_001),
        song("Zulu", 60_002),
        song("Zulu", 60_999),
    ]);
    assert_eq!(
        lines(&find_duplicates(&catalog)),
        vec!["[3] Zulu", "[2] Alpha"]
    );
}

#[test]
fn names_are_compared_exactly() {
    let catalog = catalog_of(vec![song("song a", 1_000), song("Song A", 1_000)]);
    assert!(find_duplicates(&catalog).is_empty());
}

#[test]
fn no_collisions_means_empty_report() {
    let catalog = catalog_of(vec![song("A", 1_000), song("B", 1_000), song("C", 1_000)]);
    let report = find_duplicates(&catalog);
    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
}

#[test]
fn render_report_formats_lines() {
    let dups = vec![
        Duplicate {
            count: 2,
            name: "Song A".into(),
        },
        Duplicate {
            count: 11,
            name: "Intro".into(),
        },
    ];
    let mut buf: Vec<u8> = Vec::new();
    render_report(&mut buf, &dups).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "[2] Song A\n[11] Intro\n");
}

#[test]
fn write_report_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dups.txt");
    std::fs::write(&path, "stale line that must disappear\n".repeat(10)).unwrap();

    let dups = vec![Duplicate {
        count: 2,
        name: "Song A".into(),
    }];
    write_report(&path, &dups).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[2] Song A\n");
}

#[test]
fn write_report_creates_empty_file_without_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dups.txt");

    write_report(&path, &[]).unwrap();
    assert!(path.exists());
    assert_eq!(std::fs::read(&path).unwrap().len(), 0);
}

#[test]
fn report_bytes_are_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dups.txt");
    let catalog = catalog_of(vec![
        song("B", 5_000),
        song("A", 7_000),
        song("B", 5_100),
        song("A", 7_900),
    ]);

    write_report(&path, find_duplicates(&catalog).duplicates()).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_report(&path, find_duplicates(&catalog).duplicates()).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, b"[2] B\n[2] A\n");
}
