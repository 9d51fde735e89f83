#![cfg(feature = "extract")]

use esocial_irpf::core::ConsolidateError;
use esocial_irpf::session::{IngestOutcome, Session};

const S5002_XML: &str = r#"<eSocial><evtIrrfBenef>
    <ideEvento><perApur>2025-03</perApur></ideEvento>
    <ideTrabalhador><cpfBenef>12345678901</cpfBenef></ideTrabalhador>
    <consolidApurMen><vlrRendTrib>1000.00</vlrRendTrib><vlrCRMen>75.00</vlrCRMen></consolidApurMen>
</evtIrrfBenef></eSocial>"#;

const S1210_XML: &str = r#"<eSocial><evtPgtos>
    <infoPgto><dtPgto>2025-04-30</dtPgto><vrLiq>4200.00</vrLiq><vrIrrf>310.10</vrIrrf></infoPgto>
</evtPgtos></eSocial>"#;

const UNSUPPORTED_XML: &str = "<eSocial><evtAdmissao/></eSocial>";

#[test]
fn ingest_accepts_and_counts() {
    let mut session = Session::new();
    assert!(session.is_empty());

    assert!(session.ingest("marco.xml", S5002_XML).is_accepted());
    assert!(session.ingest("abril.xml", S1210_XML).is_accepted());

    assert_eq!(session.len(), 2);
    assert_eq!(session.documents()[0].file_name, "marco.xml");
    assert_eq!(session.documents()[1].file_name, "abril.xml");
}

#[test]
fn duplicate_file_name_skipped_before_extraction() {
    let mut session = Session::new();
    assert!(session.ingest("a.xml", S5002_XML).is_accepted());

    // Same name, different (and even invalid) content: never parsed.
    let outcome = session.ingest("a.xml", "this would not parse");
    assert!(matches!(outcome, IngestOutcome::DuplicateSkipped));
    assert_eq!(session.len(), 1);

    // The first occurrence is the one retained.
    assert_eq!(session.documents()[0].records[0].competence, "2025-03");
}

#[test]
fn duplicate_detection_is_case_sensitive() {
    let mut session = Session::new();
    assert!(session.ingest("a.xml", S5002_XML).is_accepted());
    assert!(session.ingest("A.xml", S1210_XML).is_accepted());
    assert_eq!(session.len(), 2);
}

#[test]
fn rejected_file_does_not_abort_batch() {
    let mut session = Session::new();
    let statuses = session.ingest_batch([
        ("ok-1.xml", S5002_XML),
        ("bad.xml", UNSUPPORTED_XML),
        ("ok-2.xml", S1210_XML),
    ]);

    assert_eq!(statuses.len(), 3);
    assert!(statuses[0].outcome.is_accepted());
    assert!(matches!(statuses[1].outcome, IngestOutcome::Rejected(_)));
    assert!(statuses[2].outcome.is_accepted());
    assert_eq!(session.len(), 2);
}

#[test]
fn rejected_file_is_not_added() {
    let mut session = Session::new();
    let outcome = session.ingest("bad.xml", UNSUPPORTED_XML);
    assert!(matches!(outcome, IngestOutcome::Rejected(_)));
    assert!(session.is_empty());
}

#[test]
fn status_lines_are_human_readable() {
    let mut session = Session::new();
    let statuses = session.ingest_batch([
        ("ok.xml", S5002_XML),
        ("ok.xml", S5002_XML),
        ("bad.xml", UNSUPPORTED_XML),
    ]);

    assert_eq!(statuses[0].to_string(), "ok.xml: loaded (1 records)");
    assert_eq!(statuses[1].to_string(), "ok.xml: skipped (already loaded)");
    assert!(statuses[2].to_string().starts_with("bad.xml: rejected ("));
    assert!(statuses[2].to_string().contains("unsupported event type"));
}

#[test]
fn clear_resets_everything() {
    let mut session = Session::new();
    session.ingest("a.xml", S5002_XML);
    session.ingest("b.xml", S1210_XML);
    assert_eq!(session.len(), 2);

    session.clear();
    assert!(session.is_empty());
    assert!(matches!(
        session.consolidate(),
        Err(ConsolidateError::EmptyInput)
    ));

    // A cleared session accepts the same names again.
    assert!(session.ingest("a.xml", S5002_XML).is_accepted());
}

#[test]
fn consolidates_across_event_types() {
    let mut session = Session::new();
    session.ingest("marco.xml", S5002_XML);
    session.ingest("abril.xml", S1210_XML);

    let summary = session.consolidate().unwrap();
    assert_eq!(summary.by_period.len(), 2);
    assert_eq!(summary.by_period["2025-03"].base_cents, 100_000);
    assert_eq!(summary.by_period["2025-04"].base_cents, 420_000);
    assert_eq!(summary.by_period["2025-04"].tax_cents, 31_010);
    assert_eq!(summary.total_tax_cents, 7_500 + 31_010);
    assert_eq!(summary.taxpayer_id, "12345678901");
}
