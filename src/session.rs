//! In-memory session state: the collection of accepted documents.
//!
//! A [`Session`] is the single owner of everything loaded by the user.
//! Ingestion is strictly sequential — one file at a time, in the order
//! given — and a rejected file never aborts the rest of a batch. The
//! only mutators are [`Session::ingest`] (append) and
//! [`Session::clear`] (reset); consolidation is a pure read.

use std::fmt;

use tracing::{debug, warn};

use crate::core::{
    ConsolidateError, ConsolidatedSummary, ExtractError, SourceDocument, consolidate,
};
use crate::extract::{ExtractOptions, extract_with};

/// Owns every accepted document of one user session. Never persisted.
#[derive(Debug, Default)]
pub struct Session {
    documents: Vec<SourceDocument>,
    options: ExtractOptions,
}

/// What happened to one ingested file.
#[derive(Debug)]
pub enum IngestOutcome {
    /// Extraction succeeded; the document joined the session.
    Accepted {
        /// How many records the document contributed.
        records: usize,
    },
    /// A document with the same file name is already loaded; the file
    /// was skipped before any parsing.
    DuplicateSkipped,
    /// Extraction failed; the document was not added.
    Rejected(ExtractError),
}

impl IngestOutcome {
    /// True when the file was accepted into the session.
    pub fn is_accepted(&self) -> bool {
        matches!(self, IngestOutcome::Accepted { .. })
    }
}

/// Per-file entry of a batch status list, ready for display.
#[derive(Debug)]
pub struct FileStatus {
    /// The file name as given to [`Session::ingest_batch`].
    pub file_name: String,
    /// What happened to it.
    pub outcome: IngestOutcome,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            IngestOutcome::Accepted { records } => {
                write!(f, "{}: loaded ({} records)", self.file_name, records)
            }
            IngestOutcome::DuplicateSkipped => {
                write!(f, "{}: skipped (already loaded)", self.file_name)
            }
            IngestOutcome::Rejected(reason) => {
                write!(f, "{}: rejected ({reason})", self.file_name)
            }
        }
    }
}

impl Session {
    /// Empty session with default extraction options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session with a non-default parse-failure policy.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            documents: Vec::new(),
            options,
        }
    }

    /// Ingest one file.
    ///
    /// Duplicate file names (exact, case-sensitive) are detected before
    /// extraction and skipped silently; the first occurrence is kept.
    pub fn ingest(&mut self, file_name: &str, xml: &str) -> IngestOutcome {
        if self.documents.iter().any(|d| d.file_name == file_name) {
            warn!(file = file_name, "file already loaded, skipping");
            return IngestOutcome::DuplicateSkipped;
        }

        match extract_with(xml, self.options) {
            Ok(extraction) => {
                let records = extraction.records.len();
                debug!(
                    file = file_name,
                    event = %extraction.event_type,
                    records,
                    "file accepted"
                );
                self.documents.push(SourceDocument {
                    file_name: file_name.to_string(),
                    event_type: extraction.event_type,
                    records: extraction.records,
                    complementary: extraction.complementary,
                });
                IngestOutcome::Accepted { records }
            }
            Err(reason) => {
                warn!(file = file_name, error = %reason, "file rejected");
                IngestOutcome::Rejected(reason)
            }
        }
    }

    /// Ingest a batch in order. Every file gets a status entry; failures
    /// are per-file and the batch always runs to the end.
    pub fn ingest_batch<'a, I>(&mut self, files: I) -> Vec<FileStatus>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        files
            .into_iter()
            .map(|(name, xml)| FileStatus {
                file_name: name.to_string(),
                outcome: self.ingest(name, xml),
            })
            .collect()
    }

    /// Accepted documents in insertion order.
    pub fn documents(&self) -> &[SourceDocument] {
        &self.documents
    }

    /// Number of accepted files.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drop every loaded document. The one and only reset operation.
    pub fn clear(&mut self) {
        debug!(dropped = self.documents.len(), "session cleared");
        self.documents.clear();
    }

    /// Consolidate the current collection into the yearly summary.
    pub fn consolidate(&self) -> Result<ConsolidatedSummary, ConsolidateError> {
        consolidate(&self.documents)
    }
}
