//! S-1210 payment events: one record per `infoPgto` block, competence
//! derived from the payment date.

use crate::core::{ComplementaryFigures, EventType, ExtractError, FinancialRecord, UNDEFINED_PERIOD};

use super::Extraction;
use super::amount::{ExtractOptions, amount_of};
use super::dom::Element;

pub(super) fn extract(
    doc: &Element,
    taxpayer_id: &str,
    options: ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let mut records = Vec::new();
    for pgto in doc.find_all("infoPgto") {
        records.push(FinancialRecord {
            competence: competence_of(pgto.text_of("dtPgto")),
            taxable_base: amount_of(pgto, "vrLiq", options.on_parse_failure)?,
            withheld_tax: amount_of(pgto, "vrIrrf", options.on_parse_failure)?,
            taxpayer_id: taxpayer_id.to_string(),
        });
    }
    if records.is_empty() {
        return Err(ExtractError::NoFinancialData(EventType::S1210));
    }

    Ok(Extraction {
        event_type: EventType::S1210,
        records,
        complementary: ComplementaryFigures::default(),
    })
}

/// `YYYY-MM` prefix of an ISO-like payment date. Shorter values pass
/// through truncated rather than erroring; a missing date falls back to
/// the sentinel.
fn competence_of(dt_pgto: Option<&str>) -> String {
    match dt_pgto {
        Some(dt) => dt.chars().take(7).collect(),
        None => UNDEFINED_PERIOD.to_string(),
    }
}
