//! Aadhaar number extraction.
//!
//! Four-stage cascade: the conventional 4-4-4 grouped form, a loosely
//! spaced variant, a labeled form ("AADHAAR", "UID") tolerating partial
//! grouping, and finally any bare 12-digit run. Output is always in the
//! grouped display form.

use tracing::debug;

use super::normalize::group_aadhaar;
use super::patterns::{AADHAAR_BARE, AADHAAR_FLEX, AADHAAR_GROUPED, AADHAAR_UID};
use super::FieldExtractor;

/// Aadhaar field extractor.
pub struct AadhaarExtractor;

impl AadhaarExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AadhaarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AadhaarExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(caps) = AADHAAR_GROUPED.captures(text) {
            let value = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
            debug!("found grouped Aadhaar");
            return Some(value);
        }

        if let Some(caps) = AADHAAR_FLEX.captures(text) {
            let value = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
            debug!("found loosely spaced Aadhaar");
            return Some(value);
        }

        if let Some(caps) = AADHAAR_UID.captures(text) {
            // the labeled form captures 3 or 4 digit groups depending on
            // how the statement broke the number up
            let parts: Vec<&str> = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            debug!("found labeled Aadhaar with {} groups", parts.len());
            return Some(parts.join(" "));
        }

        if let Some(m) = AADHAAR_BARE.find(text) {
            debug!("found bare 12-digit Aadhaar candidate");
            return Some(group_aadhaar(m.as_str()));
        }

        None
    }
}

/// Extract an Aadhaar number from text, in grouped 4-4-4 form.
pub fn extract_aadhaar(text: &str) -> Option<String> {
    AadhaarExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_aadhaar_grouped() {
        assert_eq!(
            extract_aadhaar("AADHAAR 7723 2356 1747"),
            Some("7723 2356 1747".to_string())
        );
    }

    #[test]
    fn test_extract_aadhaar_loose_spacing() {
        assert_eq!(
            extract_aadhaar("UID 7723  2356   1747"),
            Some("7723 2356 1747".to_string())
        );
    }

    #[test]
    fn test_extract_aadhaar_labeled() {
        assert_eq!(
            extract_aadhaar("AADHAAR NO: 7723 2356 1747"),
            Some("7723 2356 1747".to_string())
        );
    }

    #[test]
    fn test_extract_aadhaar_bare_run() {
        assert_eq!(
            extract_aadhaar("ID 772323561747 ON FILE"),
            Some("7723 2356 1747".to_string())
        );
    }

    #[test]
    fn test_extract_aadhaar_ignores_shorter_runs() {
        assert_eq!(extract_aadhaar("ACCT 12345678901"), None);
    }
}
