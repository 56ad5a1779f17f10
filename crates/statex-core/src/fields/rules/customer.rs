//! Customer/CIF id and CKYC identifier extraction.

use tracing::debug;

use super::normalize::strip_separators;
use super::patterns::{
    CKYC_DIGITS, CKYC_GENERIC, CKYC_LABELED, CKYC_STANDALONE, CUSTOMER_ID_ALT, CUSTOMER_ID_LABELED,
};
use super::FieldExtractor;

/// Customer id (CIF/CRN) field extractor.
pub struct CustomerIdExtractor;

impl CustomerIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CustomerIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CustomerIdExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(caps) = CUSTOMER_ID_LABELED.captures(text) {
            let value = strip_separators(caps.get(2)?.as_str());
            if !value.is_empty() {
                debug!("found labeled customer id under '{}'", caps[1].trim());
                return Some(value);
            }
        }

        // run-together "CUSTID12345" style with no separator after the label
        if let Some(caps) = CUSTOMER_ID_ALT.captures(text) {
            let value = caps.get(1)?.as_str().to_string();
            debug!("found customer id via compact label");
            return Some(value);
        }

        None
    }
}

/// Extract a customer/CIF id from text.
pub fn extract_customer_id(text: &str) -> Option<String> {
    CustomerIdExtractor::new().extract(text)
}

/// Extract a CKYC identifier from text.
///
/// Labeled tiers first; the last resort is any standalone 14-character
/// digit/mask run, which is the CKYC registry's fixed length.
pub fn extract_ckyc(text: &str) -> Option<String> {
    if let Some(caps) = CKYC_LABELED.captures(text) {
        let value = strip_separators(caps[1].trim());
        if !value.is_empty() {
            debug!("found labeled CKYC");
            return Some(value);
        }
    }

    if let Some(caps) = CKYC_DIGITS.captures(text) {
        debug!("found 14-digit CKYC after label");
        return Some(caps[1].to_string());
    }

    if let Some(caps) = CKYC_GENERIC.captures(text) {
        let value = strip_separators(&caps[1]);
        if !value.is_empty() {
            debug!("found CKYC via compact label");
            return Some(value);
        }
    }

    if let Some(caps) = CKYC_STANDALONE.captures(text) {
        debug!("found standalone 14-char CKYC candidate");
        return Some(caps[1].to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_customer_id_labeled() {
        assert_eq!(
            extract_customer_id("CUSTOMER ID: 884512"),
            Some("884512".to_string())
        );
        assert_eq!(
            extract_customer_id("CIF NO. 99-88-77"),
            Some("998877".to_string())
        );
        assert_eq!(
            extract_customer_id("CRN: AB123456"),
            Some("AB123456".to_string())
        );
    }

    #[test]
    fn test_extract_customer_id_compact_label() {
        assert_eq!(
            extract_customer_id("CUSTID:554433"),
            Some("554433".to_string())
        );
    }

    #[test]
    fn test_extract_customer_id_absent() {
        assert_eq!(extract_customer_id("SAVINGS STATEMENT"), None);
    }

    #[test]
    fn test_extract_ckyc_labeled() {
        assert_eq!(
            extract_ckyc("CKYC NO: 1234 5678 9012 34"),
            Some("12345678901234".to_string())
        );
    }

    #[test]
    fn test_extract_ckyc_digits_after_label() {
        assert_eq!(
            extract_ckyc("CKYC 12345678901234"),
            Some("12345678901234".to_string())
        );
    }

    #[test]
    fn test_extract_ckyc_masked_standalone() {
        assert_eq!(
            extract_ckyc("KYC REF 12345678****34 VERIFIED"),
            Some("12345678****34".to_string())
        );
    }

    #[test]
    fn test_extract_ckyc_absent() {
        assert_eq!(extract_ckyc("NO KYC DETAILS"), None);
    }
}
