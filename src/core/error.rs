use thiserror::Error;

use super::types::EventType;

/// Why a single file was rejected.
///
/// Extraction failures are per-file and non-fatal: the rejected file gets
/// a reason in the batch status list and processing continues with the
/// next file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The payload is not structurally valid XML.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// Neither an S-5002 (`evtIrrfBenef`) nor an S-1210 (`evtPgtos`)
    /// event root is present.
    #[error("unsupported event type: expected S-5002 (evtIrrfBenef) or S-1210 (evtPgtos)")]
    UnsupportedEventType,

    /// The event was recognized but no extractable block was found in
    /// any supported layout generation.
    #[error("no financial data found in {0} event")]
    NoFinancialData(EventType),

    /// A monetary field failed to parse. Only produced under
    /// `ParseFailurePolicy::Error`; the default policy zeroes instead.
    #[error("invalid amount in <{tag}>: '{value}'")]
    Amount {
        /// Local name of the offending tag.
        tag: String,
        /// The unparseable text content.
        value: String,
    },
}

/// Consolidation failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsolidateError {
    /// The session holds no documents; there is nothing to sum. Surfaced
    /// to the user as "nothing loaded", not a system fault.
    #[error("no documents loaded")]
    EmptyInput,
}
