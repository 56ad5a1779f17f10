//! Field extraction engine.
//!
//! [`extract_field`] runs one field's cascade over already-acquired text;
//! [`profile::ProfileExtractor`] runs all of them and assembles a
//! statement profile.

pub mod profile;
pub mod rules;

use tracing::debug;

use crate::models::config::StatexConfig;
use crate::models::fields::{FieldKind, FieldValue};
use rules::{
    AccountNumberExtractor, AccountTypeExtractor, BalanceExtractor, DobExtractor, FieldExtractor,
    extract_aadhaar, extract_ckyc, extract_customer_id, extract_emails, extract_ifsc,
    extract_mobile, extract_pan, extract_statement_period,
};

pub use profile::{ProfileExtractor, StatementProfile};

/// Run a single field's extraction cascade over text.
///
/// Text is expected to be upper-cased already (the PDF acquisition layer
/// does this); extraction itself is case-insensitive throughout, so mixed
/// case degrades nothing but raw values may come back as printed.
pub fn extract_field(kind: FieldKind, text: &str, config: &StatexConfig) -> FieldValue {
    if text.trim().is_empty() {
        debug!("empty text, field {} not searched", kind);
        return not_found(kind);
    }

    let extraction = &config.extraction;
    match kind {
        FieldKind::AccountType => FieldValue::AccountType(AccountTypeExtractor::new().extract(text)),
        FieldKind::CustomerId => FieldValue::CustomerId(extract_customer_id(text)),
        FieldKind::Pan => FieldValue::Pan(extract_pan(text)),
        FieldKind::Aadhaar => FieldValue::Aadhaar(extract_aadhaar(text)),
        FieldKind::Ifsc => FieldValue::Ifsc(extract_ifsc(text)),
        FieldKind::Mobile => FieldValue::Mobile(extract_mobile(text)),
        FieldKind::AccountNumber => {
            FieldValue::AccountNumber(AccountNumberExtractor::new(extraction).extract(text))
        }
        FieldKind::Email => FieldValue::Email(extract_emails(text)),
        FieldKind::Ckyc => FieldValue::Ckyc(extract_ckyc(text)),
        FieldKind::OpeningBalance => {
            FieldValue::OpeningBalance(BalanceExtractor::new(extraction).extract_opening(text))
        }
        FieldKind::ClosingBalance => {
            FieldValue::ClosingBalance(BalanceExtractor::new(extraction).extract_closing(text))
        }
        FieldKind::Dob => FieldValue::Dob(DobExtractor::new(extraction).extract(text)),
        FieldKind::StatementPeriod => {
            FieldValue::StatementPeriod(extract_statement_period(text))
        }
    }
}

fn not_found(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::AccountType => FieldValue::AccountType(None),
        FieldKind::CustomerId => FieldValue::CustomerId(None),
        FieldKind::Pan => FieldValue::Pan(None),
        FieldKind::Aadhaar => FieldValue::Aadhaar(None),
        FieldKind::Ifsc => FieldValue::Ifsc(None),
        FieldKind::Mobile => FieldValue::Mobile(None),
        FieldKind::AccountNumber => FieldValue::AccountNumber(None),
        FieldKind::Email => FieldValue::Email(Vec::new()),
        FieldKind::Ckyc => FieldValue::Ckyc(None),
        FieldKind::OpeningBalance => FieldValue::OpeningBalance(None),
        FieldKind::ClosingBalance => FieldValue::ClosingBalance(None),
        FieldKind::Dob => FieldValue::Dob(None),
        FieldKind::StatementPeriod => FieldValue::StatementPeriod(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CUSTOMER ID: 884512
ACCOUNT NO: 123456789012
IFSC CODE: SBIN0001234
PAN: ABCDE1234F
MOBILE NO: 9876543210
OPENING BALANCE : 22.38(CR)";

    #[test]
    fn test_extract_field_dispatch() {
        let config = StatexConfig::default();

        let value = extract_field(FieldKind::Pan, SAMPLE, &config);
        assert_eq!(value, FieldValue::Pan(Some("ABCDE1234F".to_string())));

        let value = extract_field(FieldKind::Ifsc, SAMPLE, &config);
        assert_eq!(value, FieldValue::Ifsc(Some("SBIN0001234".to_string())));

        let value = extract_field(FieldKind::CustomerId, SAMPLE, &config);
        assert_eq!(value, FieldValue::CustomerId(Some("884512".to_string())));
    }

    #[test]
    fn test_extract_field_empty_text() {
        let config = StatexConfig::default();
        for kind in FieldKind::ALL {
            let value = extract_field(kind, "   \n ", &config);
            assert!(!value.is_found(), "{kind}");
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn test_extract_field_tags_match_kind() {
        let config = StatexConfig::default();
        for kind in FieldKind::ALL {
            let value = extract_field(kind, SAMPLE, &config);
            assert_eq!(value.kind(), kind);
        }
    }
}
