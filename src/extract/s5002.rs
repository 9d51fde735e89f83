//! S-5002 extraction across the two consolidated-layout generations.
//!
//! Field naming drifted as the layout evolved: newer payloads carry
//! `consolidApurMen` (or `totApurMen`) blocks with a single
//! document-level `perApur`, while older ones nest `basesApur` value
//! groups inside per-competence `infoIR` blocks. The first generation
//! that yields any block wins; generations are never merged within one
//! document.

use crate::core::{ComplementaryFigures, EventType, ExtractError, FinancialRecord, UNDEFINED_PERIOD};

use super::Extraction;
use super::amount::{ExtractOptions, amount_of, summed_amount};
use super::dom::Element;

pub(super) fn extract(
    doc: &Element,
    taxpayer_id: &str,
    options: ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let mut records = newer_generation(doc, taxpayer_id, options)?;
    if records.is_empty() {
        records = older_generation(doc, taxpayer_id, options)?;
    }
    if records.is_empty() {
        return Err(ExtractError::NoFinancialData(EventType::S5002));
    }

    Ok(Extraction {
        event_type: EventType::S5002,
        records,
        complementary: complementary_figures(doc, options)?,
    })
}

/// Newer layout: `consolidApurMen` blocks, falling back to `totApurMen`.
/// One document-level `perApur` covers every block.
fn newer_generation(
    doc: &Element,
    taxpayer_id: &str,
    options: ExtractOptions,
) -> Result<Vec<FinancialRecord>, ExtractError> {
    let mut blocks = doc.find_all("consolidApurMen");
    if blocks.is_empty() {
        blocks = doc.find_all("totApurMen");
    }
    if blocks.is_empty() {
        return Ok(Vec::new());
    }

    let competence = doc.text_of("perApur").unwrap_or(UNDEFINED_PERIOD);

    let mut records = Vec::with_capacity(blocks.len());
    for block in blocks {
        records.push(FinancialRecord {
            competence: competence.to_string(),
            taxable_base: amount_of(block, "vlrRendTrib", options.on_parse_failure)?,
            withheld_tax: amount_of(block, "vlrCRMen", options.on_parse_failure)?,
            taxpayer_id: taxpayer_id.to_string(),
        });
    }
    Ok(records)
}

/// Older layout: each `infoIR` block carries its own `perApur` and a
/// list of `basesApur` value groups.
fn older_generation(
    doc: &Element,
    taxpayer_id: &str,
    options: ExtractOptions,
) -> Result<Vec<FinancialRecord>, ExtractError> {
    let mut records = Vec::new();
    for info in doc.find_all("infoIR") {
        let competence = info.text_of("perApur").unwrap_or(UNDEFINED_PERIOD);
        for base in info.find_all("basesApur") {
            records.push(FinancialRecord {
                competence: competence.to_string(),
                taxable_base: amount_of(base, "vrBcMensal", options.on_parse_failure)?,
                withheld_tax: amount_of(base, "vrIrrfDesc", options.on_parse_failure)?,
                taxpayer_id: taxpayer_id.to_string(),
            });
        }
    }
    Ok(records)
}

/// Statement figures outside the monthly series. Their spelling drifted
/// with the layout generations too, so each slot tries the newer name
/// first and sums every occurrence of whichever spelling is present.
fn complementary_figures(
    doc: &Element,
    options: ExtractOptions,
) -> Result<ComplementaryFigures, ExtractError> {
    Ok(ComplementaryFigures {
        social_security: summed_amount(
            doc,
            &["vlrPrevOficial", "vrPrevOficial"],
            options.on_parse_failure,
        )?,
        thirteenth_base: summed_amount(
            doc,
            &["vlrRendTrib13", "vrBc13"],
            options.on_parse_failure,
        )?,
        thirteenth_tax: summed_amount(
            doc,
            &["vlrCR13Men", "vrIrrf13"],
            options.on_parse_failure,
        )?,
    })
}
