//! # esocial-irpf
//!
//! eSocial withholding extraction and yearly consolidation for the Brazilian
//! income-tax statement (DIRPF): S-5002 income-tax-withholding reports and
//! S-1210 payment events.
//!
//! All monetary values use [`rust_decimal::Decimal`] during extraction and
//! integer cents during consolidation — never floating point. Tag lookup is
//! namespace- and prefix-agnostic, so payloads produced by any signing tool
//! (`esocial:`, `ns2:`, default namespace) extract identically.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "extract")] {
//! use esocial_irpf::session::Session;
//!
//! let xml = r#"<eSocial><evtIrrfBenef>
//!     <ideEvento><perApur>2025-03</perApur></ideEvento>
//!     <ideTrabalhador><cpfBenef>12345678901</cpfBenef></ideTrabalhador>
//!     <infoIrrf><consolidApurMen>
//!         <vlrRendTrib>1000.00</vlrRendTrib>
//!         <vlrCRMen>75.00</vlrCRMen>
//!     </consolidApurMen></infoIrrf>
//! </evtIrrfBenef></eSocial>"#;
//!
//! let mut session = Session::new();
//! assert!(session.ingest("marco.xml", xml).is_accepted());
//!
//! let summary = session.consolidate().unwrap();
//! assert_eq!(summary.by_period["2025-03"].base_cents, 100_000);
//! assert_eq!(summary.total_tax_cents, 7_500);
//! assert_eq!(summary.taxpayer_id, "12345678901");
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record/document types, cents-safe consolidation |
//! | `extract` | S-5002/S-1210 classifier and extractor, session state |
//! | `declaration` | Named slots of the annual statement form |
//! | `format` | CPF masking and pt-BR currency text |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "extract")]
pub mod session;

#[cfg(feature = "declaration")]
pub mod declaration;

#[cfg(feature = "format")]
pub mod format;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
