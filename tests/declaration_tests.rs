#![cfg(all(feature = "extract", feature = "declaration", feature = "format"))]

use esocial_irpf::declaration::StatementFields;
use esocial_irpf::format::{format_brl_cents, format_cpf};
use esocial_irpf::session::Session;

const DEZEMBRO_XML: &str = r#"<eSocial><evtIrrfBenef>
    <ideEvento><perApur>2025-12</perApur></ideEvento>
    <ideTrabalhador><cpfBenef>12345678901</cpfBenef></ideTrabalhador>
    <consolidApurMen>
        <vlrRendTrib>5000.00</vlrRendTrib>
        <vlrCRMen>420.33</vlrCRMen>
        <vlrPrevOficial>550.00</vlrPrevOficial>
    </consolidApurMen>
    <infoIrrf13>
        <vlrRendTrib13>4800.00</vlrRendTrib13>
        <vlrCR13Men>350.00</vlrCR13Men>
    </infoIrrf13>
</evtIrrfBenef></eSocial>"#;

const NOVEMBRO_XML: &str = r#"<eSocial><evtIrrfBenef>
    <ideEvento><perApur>2025-11</perApur></ideEvento>
    <consolidApurMen>
        <vlrRendTrib>5000.00</vlrRendTrib>
        <vlrCRMen>400.00</vlrCRMen>
        <vlrPrevOficial>550.00</vlrPrevOficial>
    </consolidApurMen>
</evtIrrfBenef></eSocial>"#;

fn loaded_session() -> Session {
    let mut session = Session::new();
    assert!(session.ingest("novembro.xml", NOVEMBRO_XML).is_accepted());
    assert!(session.ingest("dezembro.xml", DEZEMBRO_XML).is_accepted());
    session
}

#[test]
fn statement_fields_filled_from_summary() {
    let summary = loaded_session().consolidate().unwrap();
    let fields = StatementFields::from_summary(&summary);

    assert_eq!(fields.taxable_income_cents, 1_000_000);
    assert_eq!(fields.income_tax_withheld_cents, 82_033);
    assert_eq!(fields.social_security_cents, 110_000);
    assert_eq!(fields.thirteenth_base_cents, 480_000);
    assert_eq!(fields.thirteenth_tax_cents, 35_000);
}

#[test]
fn slots_follow_the_form_order() {
    let summary = loaded_session().consolidate().unwrap();
    let fields = StatementFields::from_summary(&summary);
    let slots = fields.slots();

    assert_eq!(slots[0], ("Rendimentos tributáveis", 1_000_000));
    assert_eq!(slots[1].0, "Contribuição previdenciária oficial");
    assert_eq!(slots[2], ("Imposto retido na fonte", 82_033));
    assert_eq!(slots[3], ("13º salário", 480_000));
    assert_eq!(slots[4].0, "IRRF sobre o 13º salário");
}

#[test]
fn rendered_statement_values() {
    let summary = loaded_session().consolidate().unwrap();
    let fields = StatementFields::from_summary(&summary);

    assert_eq!(format_cpf(&summary.taxpayer_id), "123.456.789-01");
    assert_eq!(format_brl_cents(fields.taxable_income_cents), "R$ 10.000,00");
    assert_eq!(format_brl_cents(fields.income_tax_withheld_cents), "R$ 820,33");
}

#[test]
fn statement_fields_serialize() {
    let summary = loaded_session().consolidate().unwrap();
    let fields = StatementFields::from_summary(&summary);

    let json = serde_json::to_string(&fields).unwrap();
    assert!(json.contains("\"taxable_income_cents\":1000000"));

    let back: StatementFields = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fields);
}
