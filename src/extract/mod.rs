//! eSocial event classification and field extraction.
//!
//! Given raw XML text, [`extract`] determines which event the document
//! is (S-5002 income-tax withholding or S-1210 payments), locates the
//! relevant repeating blocks regardless of namespace prefix or layout
//! generation, and produces the per-competence financial records.
//!
//! # Example
//!
//! ```no_run
//! use esocial_irpf::extract;
//!
//! let xml: &str = todo!(); // read from an uploaded file
//! let extraction = extract::extract(xml)?;
//! for record in &extraction.records {
//!     println!("{}: {}", record.competence, record.withheld_tax);
//! }
//! # Ok::<(), esocial_irpf::ExtractError>(())
//! ```

mod amount;
mod dom;
mod s1210;
mod s5002;

pub use amount::{ExtractOptions, ParseFailurePolicy};
pub use dom::Element;

use tracing::debug;

use crate::core::{ComplementaryFigures, EventType, ExtractError, FinancialRecord};

/// Everything pulled from one classified document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Which event the document turned out to be.
    pub event_type: EventType,
    /// Records in document order, at least one.
    pub records: Vec<FinancialRecord>,
    /// Statement figures outside the monthly series; zero for S-1210.
    pub complementary: ComplementaryFigures,
}

/// Classify a parsed document by its event root. S-5002 takes priority
/// when both roots are somehow present (first-match-wins).
pub fn classify(doc: &Element) -> EventType {
    if doc.find_first("evtIrrfBenef").is_some() {
        EventType::S5002
    } else if doc.find_first("evtPgtos").is_some() {
        EventType::S1210
    } else {
        EventType::Unknown
    }
}

/// Extract with default options (unparseable amounts become zero).
pub fn extract(xml: &str) -> Result<Extraction, ExtractError> {
    extract_with(xml, ExtractOptions::default())
}

/// Classify `xml` and pull its financial records.
///
/// The beneficiary CPF is taken verbatim from the first `cpfBenef`
/// element anywhere in the document, without digit-count or checksum
/// validation, and stamped onto every record.
pub fn extract_with(xml: &str, options: ExtractOptions) -> Result<Extraction, ExtractError> {
    let doc = Element::parse(xml)?;

    let taxpayer_id = doc.text_of("cpfBenef").unwrap_or_default().to_string();

    let extraction = match classify(&doc) {
        EventType::S5002 => s5002::extract(&doc, &taxpayer_id, options)?,
        EventType::S1210 => s1210::extract(&doc, &taxpayer_id, options)?,
        EventType::Unknown => return Err(ExtractError::UnsupportedEventType),
    };

    debug!(
        event = %extraction.event_type,
        records = extraction.records.len(),
        "document extracted"
    );
    Ok(extraction)
}
