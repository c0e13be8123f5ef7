#![forbid(unsafe_code)]
//! Replays the reference book packets under `fixtures/`.
//!
//! Convention: test_{family}_{packet}_{scenario}

use rankwise_conformance::{
    ConformanceCase, HarnessConfig, PacketReport, load_fixture, run_all_packets, run_packet,
};

fn assert_packet_passes(report: &PacketReport) {
    let failures: Vec<String> = report
        .failures()
        .map(|case| format!("{}: {}", case.case_id, case.message))
        .collect();
    assert!(
        report.all_passed(),
        "{} had {} failing cases:\n{}",
        report.packet_id,
        report.failed_cases,
        failures.join("\n")
    );
}

#[test]
fn test_topsis_book_packet_passes() {
    let report = run_packet(&HarnessConfig::default(), "topsis_book.json").expect("packet loads");
    assert_eq!(report.family, "topsis");
    assert_eq!(report.passed_cases, 5);
    assert_packet_passes(&report);
}

#[test]
fn test_vikor_book_packet_passes() {
    let report = run_packet(&HarnessConfig::default(), "vikor_book.json").expect("packet loads");
    assert_packet_passes(&report);
}

#[test]
fn test_promethee_book_packet_passes() {
    let report =
        run_packet(&HarnessConfig::default(), "promethee_book.json").expect("packet loads");
    assert_packet_passes(&report);
}

#[test]
fn test_sir_book_packet_passes() {
    let report = run_packet(&HarnessConfig::default(), "sir_book.json").expect("packet loads");
    assert_packet_passes(&report);
}

#[test]
fn test_promethee_v_book_packet_passes() {
    let report =
        run_packet(&HarnessConfig::default(), "promethee_v_book.json").expect("packet loads");
    assert_eq!(report.passed_cases, 3);
    assert_packet_passes(&report);
}

#[test]
fn test_harness_all_packets_sorted_and_passing() {
    let reports = run_all_packets(&HarnessConfig::default()).expect("fixture dir readable");
    let ids: Vec<&str> = reports.iter().map(|r| r.packet_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "RW-PROMETHEE-001",
            "RW-PROMETHEE-V-001",
            "RW-SIR-001",
            "RW-TOPSIS-001",
            "RW-VIKOR-001",
        ]
    );
    for report in &reports {
        assert_packet_passes(report);
    }
}

#[test]
fn test_harness_case_ids_unique_within_packet() {
    let config = HarnessConfig::default();
    for name in [
        "topsis_book.json",
        "vikor_book.json",
        "promethee_book.json",
        "sir_book.json",
        "promethee_v_book.json",
    ] {
        let fixture = load_fixture(&config.fixture_root.join(name)).expect("packet loads");
        let mut ids: Vec<&str> = fixture.cases.iter().map(ConformanceCase::case_id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate case id in {name}");
    }
}
