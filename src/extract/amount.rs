use rust_decimal::Decimal;
use tracing::warn;

use super::dom::Element;
use crate::core::ExtractError;

/// What to do when a monetary tag is present but its text does not parse
/// as a decimal number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseFailurePolicy {
    /// Treat the value as zero. This mirrors the long-standing behavior
    /// of the eSocial viewers this crate replaces and keeps documents
    /// with stray non-numeric content loadable; it can mask data-entry
    /// errors.
    #[default]
    Zero,
    /// Reject the document with [`ExtractError::Amount`].
    Error,
}

/// Extraction tuning knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Policy for unparseable monetary content. Missing tags are always
    /// zero regardless of this setting.
    pub on_parse_failure: ParseFailurePolicy,
}

fn parse_amount(tag: &str, text: &str, policy: ParseFailurePolicy) -> Result<Decimal, ExtractError> {
    match text.trim().parse::<Decimal>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            ParseFailurePolicy::Zero => {
                warn!(tag, value = text, "unparseable amount treated as zero");
                Ok(Decimal::ZERO)
            }
            ParseFailurePolicy::Error => Err(ExtractError::Amount {
                tag: tag.to_string(),
                value: text.to_string(),
            }),
        },
    }
}

/// Read the named monetary field under `scope`. A missing tag is zero; a
/// present but unparseable one follows `policy`.
pub(crate) fn amount_of(
    scope: &Element,
    tag: &str,
    policy: ParseFailurePolicy,
) -> Result<Decimal, ExtractError> {
    match scope.text_of(tag) {
        Some(text) => parse_amount(tag, text, policy),
        None => Ok(Decimal::ZERO),
    }
}

/// Sum every occurrence of a monetary field whose spelling drifted
/// across layout generations. The first spelling with any occurrence
/// wins; spellings are never mixed within one document.
pub(crate) fn summed_amount(
    scope: &Element,
    spellings: &[&str],
    policy: ParseFailurePolicy,
) -> Result<Decimal, ExtractError> {
    for tag in spellings {
        let found = scope.find_all(tag);
        if found.is_empty() {
            continue;
        }
        let mut total = Decimal::ZERO;
        for el in found {
            total += parse_amount(tag, el.text(), policy)?;
        }
        return Ok(total);
    }
    Ok(Decimal::ZERO)
}
