use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel competence used when a document does not state one.
pub const UNDEFINED_PERIOD: &str = "Indefinido";

/// eSocial event type of a classified document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// S-5002 — Imposto de Renda Retido na Fonte por Trabalhador.
    S5002,
    /// S-1210 — Pagamentos de Rendimentos do Trabalho.
    S1210,
    /// Neither event root was found in the document.
    Unknown,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::S5002 => write!(f, "S-5002"),
            EventType::S1210 => write!(f, "S-1210"),
            EventType::Unknown => write!(f, "unknown"),
        }
    }
}

/// One row of extracted withholding data.
///
/// Immutable once produced; the competence is never absent — extraction
/// falls back to [`UNDEFINED_PERIOD`] when the document omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Competence period the figures apply to, expected `YYYY-MM`.
    /// Not validated as a real calendar value.
    pub competence: String,
    /// Taxable base (`vlrRendTrib` / `vrBcMensal` / `vrLiq`).
    pub taxable_base: Decimal,
    /// Income tax withheld (`vlrCRMen` / `vrIrrfDesc` / `vrIrrf`).
    pub withheld_tax: Decimal,
    /// Beneficiary CPF as found in `cpfBenef`, verbatim; may be empty.
    pub taxpayer_id: String,
}

/// Document-level figures that feed the annual statement outside the
/// monthly series: official social-security contribution and the
/// 13th-salary taxable base and withholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplementaryFigures {
    /// Contribuição previdenciária oficial (`vlrPrevOficial`).
    pub social_security: Decimal,
    /// 13º salário taxable base (`vlrRendTrib13`).
    pub thirteenth_base: Decimal,
    /// Tax withheld over the 13º salário (`vlrCR13Men`).
    pub thirteenth_tax: Decimal,
}

/// One accepted source file with everything extracted from it.
///
/// Created only when classification and extraction both succeed with at
/// least one record; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Unique key within a session (exact, case-sensitive match).
    pub file_name: String,
    /// Classification result.
    pub event_type: EventType,
    /// Records in document order.
    pub records: Vec<FinancialRecord>,
    /// Statement figures outside the monthly series; all zero for S-1210.
    pub complementary: ComplementaryFigures,
}

/// Per-period cell of the consolidated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Accumulated taxable base, in cents.
    pub base_cents: i64,
    /// Accumulated withheld tax, in cents.
    pub tax_cents: i64,
}

/// Consolidated yearly view over every accepted document.
///
/// Derived data: recomputed on demand from the full document collection,
/// never maintained incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedSummary {
    /// Competence → totals. `BTreeMap` iteration gives ascending
    /// lexicographic order, which is chronological for `YYYY-MM` keys.
    pub by_period: BTreeMap<String, PeriodTotals>,
    /// Sum of `base_cents` over all periods.
    pub total_base_cents: i64,
    /// Sum of `tax_cents` over all periods.
    pub total_tax_cents: i64,
    /// Last non-empty CPF seen in document-then-record order; empty when
    /// no document carried one. Differing ids silently overwrite.
    pub taxpayer_id: String,
    /// Contribuição previdenciária oficial across all documents, in cents.
    pub social_security_cents: i64,
    /// 13º salário taxable base across all documents, in cents.
    pub thirteenth_base_cents: i64,
    /// 13º salário withheld tax across all documents, in cents.
    pub thirteenth_tax_cents: i64,
}
