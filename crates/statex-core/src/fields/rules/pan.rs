//! PAN (Permanent Account Number) extraction.
//!
//! Labeled tier first ("PAN", "PAN No", "PAN Number"), then a strict
//! structural fallback matched anywhere in the text. A raw 10-character
//! candidate gets its digit zone repaired for OCR misreads.

use tracing::debug;

use super::normalize::repair_pan_digits;
use super::patterns::{PAN_GENERIC, PAN_LABELED};
use super::{ExtractionMatch, FieldExtractor, MatchTier};

/// PAN field extractor.
pub struct PanExtractor;

impl PanExtractor {
    pub fn new() -> Self {
        Self
    }

    fn candidate(&self, text: &str) -> Option<ExtractionMatch<String>> {
        if let Some(caps) = PAN_LABELED.captures(text) {
            let m = caps.get(1)?;
            debug!("found labeled PAN: {}", m.as_str());
            return Some(
                ExtractionMatch::new(m.as_str().to_string(), MatchTier::Labeled)
                    .with_position(m.start(), m.end()),
            );
        }

        if let Some(caps) = PAN_GENERIC.captures(text) {
            let m = caps.get(1)?;
            debug!("found generic PAN: {}", m.as_str());
            return Some(
                ExtractionMatch::new(m.as_str().to_string(), MatchTier::Generic)
                    .with_position(m.start(), m.end()),
            );
        }

        None
    }
}

impl Default for PanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PanExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let candidate = self.candidate(text)?;

        let raw: String = candidate
            .value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        // Digit-zone repair only applies to the canonical 10-char shape;
        // anything else is returned as captured.
        if raw.len() == 10 {
            Some(repair_pan_digits(&raw))
        } else {
            Some(raw)
        }
    }
}

/// Extract a PAN from text.
pub fn extract_pan(text: &str) -> Option<String> {
    PanExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pan_labeled_variants() {
        for text in [
            "PAN: ABCDE1234F",
            "PAN NO: ABCDE1234F",
            "PAN NUMBER - ABCDE1234F",
            "pan abcde1234f",
        ] {
            assert_eq!(extract_pan(text), Some("ABCDE1234F".to_string()), "{text}");
        }
    }

    #[test]
    fn test_extract_pan_spaced_groups() {
        assert_eq!(
            extract_pan("PAN NO: ABCDE 1234 F"),
            Some("ABCDE1234F".to_string())
        );
    }

    #[test]
    fn test_extract_pan_generic_fallback() {
        let text = "NAME: RAVI KUMAR\nABCPE1234F\nADDRESS: DELHI";
        assert_eq!(extract_pan(text), Some("ABCPE1234F".to_string()));
    }

    #[test]
    fn test_labeled_beats_generic() {
        // the generic-shaped token appears first, but the labeled one wins
        let text = "REF AAACX9999Z NOTED\nPAN: ABCDE1234F";
        assert_eq!(extract_pan(text), Some("ABCDE1234F".to_string()));
    }

    #[test]
    fn test_fourth_character_restriction() {
        // 4th char 'X' is not a valid PAN holder-type letter
        assert_eq!(extract_pan("CODE ABCXE1234F END"), None);
    }

    #[test]
    fn test_extract_pan_absent() {
        assert_eq!(extract_pan("NO TAX IDENTIFIERS HERE"), None);
    }
}
