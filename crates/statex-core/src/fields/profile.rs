//! Full-document profile extraction.
//!
//! Runs every field cascade and assembles the results into a single
//! statement profile, the shape most callers want.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::StatexConfig;
use crate::models::fields::{
    AccountType, Balance, DateOfBirth, FieldKind, FieldValue, StatementPeriod,
};
use crate::pdf::{PageScope, PdfExtractor};

use super::extract_field;

/// Every extractable field of a statement, in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementProfile {
    pub account_type: Option<AccountType>,
    pub customer_id: Option<String>,
    pub pan: Option<String>,
    pub aadhaar: Option<String>,
    pub ifsc: Option<String>,
    pub mobile: Option<String>,
    pub account_number: Option<String>,
    pub emails: Vec<String>,
    pub ckyc: Option<String>,
    pub opening_balance: Option<Balance>,
    pub closing_balance: Option<Balance>,
    pub dob: Option<DateOfBirth>,
    pub statement_period: Option<StatementPeriod>,
}

impl StatementProfile {
    fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::AccountType(v) => self.account_type = v,
            FieldValue::CustomerId(v) => self.customer_id = v,
            FieldValue::Pan(v) => self.pan = v,
            FieldValue::Aadhaar(v) => self.aadhaar = v,
            FieldValue::Ifsc(v) => self.ifsc = v,
            FieldValue::Mobile(v) => self.mobile = v,
            FieldValue::AccountNumber(v) => self.account_number = v,
            FieldValue::Email(v) => self.emails = v,
            FieldValue::Ckyc(v) => self.ckyc = v,
            FieldValue::OpeningBalance(v) => self.opening_balance = v,
            FieldValue::ClosingBalance(v) => self.closing_balance = v,
            FieldValue::Dob(v) => self.dob = v,
            FieldValue::StatementPeriod(v) => self.statement_period = v,
        }
    }

    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        FieldKind::ALL.len() - self.missing_fields().len()
    }

    /// Fields that came back empty.
    pub fn missing_fields(&self) -> Vec<FieldKind> {
        let mut missing = Vec::new();
        for kind in FieldKind::ALL {
            let found = match kind {
                FieldKind::AccountType => self.account_type.is_some(),
                FieldKind::CustomerId => self.customer_id.is_some(),
                FieldKind::Pan => self.pan.is_some(),
                FieldKind::Aadhaar => self.aadhaar.is_some(),
                FieldKind::Ifsc => self.ifsc.is_some(),
                FieldKind::Mobile => self.mobile.is_some(),
                FieldKind::AccountNumber => self.account_number.is_some(),
                FieldKind::Email => !self.emails.is_empty(),
                FieldKind::Ckyc => self.ckyc.is_some(),
                FieldKind::OpeningBalance => self.opening_balance.is_some(),
                FieldKind::ClosingBalance => self.closing_balance.is_some(),
                FieldKind::Dob => self.dob.is_some(),
                FieldKind::StatementPeriod => self.statement_period.is_some(),
            };
            if !found {
                missing.push(kind);
            }
        }
        missing
    }
}

/// Result of a profile extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResult {
    pub profile: StatementProfile,
    /// One warning per field that came back empty.
    pub warnings: Vec<String>,
    pub processing_time_ms: u64,
}

/// Extracts all fields from a document.
pub struct ProfileExtractor {
    config: StatexConfig,
}

impl ProfileExtractor {
    /// Create a profile extractor with the default config.
    pub fn new() -> Self {
        Self {
            config: StatexConfig::default(),
        }
    }

    /// Create a profile extractor with an explicit config.
    pub fn with_config(config: StatexConfig) -> Self {
        Self { config }
    }

    /// Extract a profile from already-acquired text.
    ///
    /// Every field runs over the same text; page scoping only applies when
    /// extracting straight from a PDF.
    pub fn extract(&self, text: &str) -> ProfileResult {
        let start = Instant::now();
        info!("extracting profile from {} characters of text", text.len());

        let mut profile = StatementProfile::default();
        for kind in FieldKind::ALL {
            profile.set(extract_field(kind, text, &self.config));
        }

        self.finish(profile, start)
    }

    /// Extract a profile from PDF bytes, honoring each field's preferred
    /// page scope.
    pub fn extract_from_pdf(&self, data: &[u8]) -> Result<ProfileResult> {
        let start = Instant::now();

        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;
        info!("extracting profile from {} page PDF", extractor.page_count());

        // the three scopes cover every field; acquire each blob once
        let first = extractor.acquire(PageScope::FirstPage, &self.config.pdf)?;
        let first_and_last = extractor.acquire(PageScope::FirstAndLast, &self.config.pdf)?;
        let all = extractor.acquire(PageScope::AllPages, &self.config.pdf)?;

        let mut profile = StatementProfile::default();
        for kind in FieldKind::ALL {
            let text = match kind.preferred_scope() {
                PageScope::FirstPage => &first,
                PageScope::FirstAndLast => &first_and_last,
                PageScope::AllPages => &all,
            };
            profile.set(extract_field(kind, text, &self.config));
        }

        Ok(self.finish(profile, start))
    }

    fn finish(&self, profile: StatementProfile, start: Instant) -> ProfileResult {
        let missing = profile.missing_fields();
        let warnings: Vec<String> = missing
            .iter()
            .map(|kind| format!("could not extract {}", kind))
            .collect();

        debug!(
            "profile complete: {}/{} fields found",
            profile.found_count(),
            FieldKind::ALL.len()
        );

        ProfileResult {
            profile,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::fields::BalanceSign;

    const STATEMENT: &str = "\
STATE BANK OF INDIA
STATEMENT PERIOD: 01/04/2025 TO 30/06/2025
CUSTOMER ID: 884512
ACCOUNT TYPE: REGULAR SAVINGS ACCOUNT
ACCOUNT NO: 123456789012
IFSC CODE: SBIN0001234
PAN: ABCDE1234F
MOBILE NO: 98XXXX4321
EMAIL ID: RAVI@GMAIL.COM
OPENING BALANCE : 22.38(CR)
CLOSING BALANCE : 2,983.38(CR)";

    #[test]
    fn test_extract_profile_from_statement() {
        let result = ProfileExtractor::new().extract(STATEMENT);
        let profile = &result.profile;

        assert_eq!(profile.customer_id.as_deref(), Some("884512"));
        assert_eq!(profile.pan.as_deref(), Some("ABCDE1234F"));
        assert_eq!(profile.ifsc.as_deref(), Some("SBIN0001234"));
        assert_eq!(profile.account_number.as_deref(), Some("123456789012"));
        assert_eq!(profile.mobile.as_deref(), Some("98XXXX4321"));
        assert_eq!(profile.emails, vec!["ravi@gmail.com".to_string()]);

        let opening = profile.opening_balance.as_ref().unwrap();
        assert_eq!(opening.amount, "22.38");
        assert_eq!(opening.sign, BalanceSign::Credit);

        let closing = profile.closing_balance.as_ref().unwrap();
        assert_eq!(closing.amount, "2983.38");

        let period = profile.statement_period.as_ref().unwrap();
        assert_eq!(period.from_date, "01/04/2025");
        assert_eq!(period.to_date, "30/06/2025");
    }

    #[test]
    fn test_missing_fields_become_warnings() {
        let result = ProfileExtractor::new().extract("NOTHING USEFUL HERE");
        assert_eq!(result.profile.found_count(), 0);
        assert_eq!(result.warnings.len(), FieldKind::ALL.len());
    }

    #[test]
    fn test_profile_serializes_to_json() {
        let result = ProfileExtractor::new().extract(STATEMENT);
        let json = serde_json::to_string(&result.profile).unwrap();
        assert!(json.contains("\"customer_id\":\"884512\""));
    }
}
