use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::error::ConsolidateError;
use super::types::{ConsolidatedSummary, PeriodTotals, SourceDocument};

/// Convert a decimal amount in currency units to integer cents.
///
/// Rounds half away from zero — ordinary half-up for the non-negative
/// amounts that occur in practice, so `0.005` becomes 1 cent.
pub fn to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Fold every record of every document into per-competence cent totals.
///
/// Documents are scanned in insertion order, records in document order.
/// Accumulation happens entirely in integer cents so repeated monetary
/// sums cannot drift. The returned map iterates in ascending
/// lexicographic key order, which for `YYYY-MM` tokens is chronological.
pub fn consolidate(documents: &[SourceDocument]) -> Result<ConsolidatedSummary, ConsolidateError> {
    if documents.is_empty() {
        return Err(ConsolidateError::EmptyInput);
    }

    let mut by_period: BTreeMap<String, PeriodTotals> = BTreeMap::new();
    let mut taxpayer_id = String::new();
    let mut social_security_cents = 0i64;
    let mut thirteenth_base_cents = 0i64;
    let mut thirteenth_tax_cents = 0i64;

    for doc in documents {
        for record in &doc.records {
            // Last non-empty id wins
            if !record.taxpayer_id.is_empty() {
                taxpayer_id = record.taxpayer_id.clone();
            }

            let cell = by_period.entry(record.competence.clone()).or_default();
            cell.base_cents += to_cents(record.taxable_base);
            cell.tax_cents += to_cents(record.withheld_tax);
        }

        social_security_cents += to_cents(doc.complementary.social_security);
        thirteenth_base_cents += to_cents(doc.complementary.thirteenth_base);
        thirteenth_tax_cents += to_cents(doc.complementary.thirteenth_tax);
    }

    let total_base_cents = by_period.values().map(|c| c.base_cents).sum();
    let total_tax_cents = by_period.values().map(|c| c.tax_cents).sum();

    debug!(
        documents = documents.len(),
        periods = by_period.len(),
        total_base_cents,
        total_tax_cents,
        "session consolidated"
    );

    Ok(ConsolidatedSummary {
        by_period,
        total_base_cents,
        total_tax_cents,
        taxpayer_id,
        social_security_cents,
        thirteenth_base_cents,
        thirteenth_tax_cents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn to_cents_exact() {
        assert_eq!(to_cents(dec!(1234.56)), 123456);
        assert_eq!(to_cents(dec!(0.01)), 1);
        assert_eq!(to_cents(dec!(0)), 0);
    }

    #[test]
    fn to_cents_rounds_half_away_from_zero() {
        assert_eq!(to_cents(dec!(0.005)), 1);
        assert_eq!(to_cents(dec!(0.004)), 0);
        assert_eq!(to_cents(dec!(10.125)), 1013);
        assert_eq!(to_cents(dec!(-0.005)), -1);
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(consolidate(&[]), Err(ConsolidateError::EmptyInput)));
    }
}
