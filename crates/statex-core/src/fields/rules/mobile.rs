//! Mobile/phone number extraction.

use tracing::debug;

use super::normalize::clean_mobile;
use super::patterns::{MOBILE_FALLBACK, MOBILE_LABELED};
use super::FieldExtractor;

/// Mobile number field extractor.
///
/// Masking characters in redacted numbers are preserved; no bare-number
/// fallback exists since 10-digit runs are everywhere in a statement.
pub struct MobileExtractor;

impl MobileExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MobileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MobileExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(caps) = MOBILE_LABELED.captures(text) {
            let value = clean_mobile(caps.get(2)?.as_str());
            if !value.is_empty() {
                debug!("found mobile under label '{}'", caps[1].trim());
                return Some(value);
            }
        }

        if let Some(caps) = MOBILE_FALLBACK.captures(text) {
            let value = clean_mobile(&caps[1]);
            if !value.is_empty() {
                debug!("found mobile via phone-number fallback");
                return Some(value);
            }
        }

        None
    }
}

/// Extract a mobile number from text, masking characters preserved.
pub fn extract_mobile(text: &str) -> Option<String> {
    MobileExtractor::new().extract(text)
}
