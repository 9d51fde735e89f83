//! Named slots of the annual statement form.
//!
//! The DIRPF layout takes a fixed set of yearly figures per paying
//! source. [`StatementFields`] maps a [`ConsolidatedSummary`] onto those
//! slots so a host UI can inject them into the form without knowing the
//! consolidation model.

use serde::{Deserialize, Serialize};

use crate::core::ConsolidatedSummary;

/// The five statement slots, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFields {
    /// Rendimentos tributáveis recebidos de pessoa jurídica.
    pub taxable_income_cents: i64,
    /// Contribuição previdenciária oficial.
    pub social_security_cents: i64,
    /// Imposto sobre a renda retido na fonte.
    pub income_tax_withheld_cents: i64,
    /// 13º salário — base.
    pub thirteenth_base_cents: i64,
    /// 13º salário — imposto retido.
    pub thirteenth_tax_cents: i64,
}

impl StatementFields {
    /// Fill the slots from a consolidated summary.
    pub fn from_summary(summary: &ConsolidatedSummary) -> Self {
        Self {
            taxable_income_cents: summary.total_base_cents,
            social_security_cents: summary.social_security_cents,
            income_tax_withheld_cents: summary.total_tax_cents,
            thirteenth_base_cents: summary.thirteenth_base_cents,
            thirteenth_tax_cents: summary.thirteenth_tax_cents,
        }
    }

    /// `(label, cents)` pairs in the fixed order of the official form.
    pub fn slots(&self) -> [(&'static str, i64); 5] {
        [
            ("Rendimentos tributáveis", self.taxable_income_cents),
            (
                "Contribuição previdenciária oficial",
                self.social_security_cents,
            ),
            ("Imposto retido na fonte", self.income_tax_withheld_cents),
            ("13º salário", self.thirteenth_base_cents),
            ("IRRF sobre o 13º salário", self.thirteenth_tax_cents),
        ]
    }
}
