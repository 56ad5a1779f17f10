//! Account number and account type extraction.

use tracing::debug;

use super::normalize::strip_separators;
use super::patterns::{
    ACCOUNT_NUMBER_FALLBACK, ACCOUNT_NUMBER_LABELED, ACCOUNT_TYPE_LABELED, ACCOUNT_WORD,
};
use super::{ExtractionMatch, FieldExtractor, MatchTier};
use crate::models::config::ExtractionConfig;
use crate::models::fields::AccountType;

/// Account number extractor with configurable digit-length bounds.
pub struct AccountNumberExtractor {
    min_digits: usize,
    max_digits: usize,
}

impl AccountNumberExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_digits: config.account_number_min_digits,
            max_digits: config.account_number_max_digits,
        }
    }

    fn candidate(&self, text: &str) -> Option<ExtractionMatch<String>> {
        if let Some(caps) = ACCOUNT_NUMBER_LABELED.captures(text) {
            let cleaned = strip_separators(caps.get(2)?.as_str().trim());
            // labeled capture may have swallowed table noise; only an
            // all-digit run of plausible length is accepted
            if cleaned.bytes().all(|b| b.is_ascii_digit())
                && (self.min_digits..=self.max_digits).contains(&cleaned.len())
            {
                return Some(ExtractionMatch::new(cleaned, MatchTier::Labeled));
            }
        }

        ACCOUNT_NUMBER_FALLBACK
            .captures(text)
            .map(|caps| ExtractionMatch::new(caps[1].to_string(), MatchTier::Generic))
    }
}

impl FieldExtractor for AccountNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let candidate = self.candidate(text)?;
        debug!("found account number via {:?} tier", candidate.tier);
        Some(candidate.value)
    }
}

/// Extract an account number with the default length bounds.
pub fn extract_account_number(text: &str) -> Option<String> {
    AccountNumberExtractor::new(&ExtractionConfig::default()).extract(text)
}

/// Account type extractor.
pub struct AccountTypeExtractor;

impl AccountTypeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccountTypeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AccountTypeExtractor {
    type Output = AccountType;

    fn extract(&self, text: &str) -> Option<AccountType> {
        let matches: Vec<(String, String)> = ACCOUNT_TYPE_LABELED
            .captures_iter(text)
            .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
            .collect();

        // a value that itself names an account ("SAVINGS ACCOUNT") is a
        // stronger signal than a bare scheme code
        let (label, raw_value) = matches
            .iter()
            .find(|(_, value)| ACCOUNT_WORD.is_match(value))
            .or_else(|| matches.first())?
            .clone();

        let words: Vec<&str> = raw_value.split_whitespace().collect();
        let account_type = match words.iter().position(|w| ACCOUNT_WORD.is_match(w)) {
            Some(0) => words[0].to_string(),
            Some(i) => format!("{}  {}", words[i - 1], words[i]),
            // value never names an account; keep the leading words
            None => words
                .iter()
                .take(3)
                .copied()
                .collect::<Vec<_>>()
                .join("  "),
        }
        .to_uppercase();

        debug!("found account type '{}' under label '{}'", account_type, label);
        Some(AccountType {
            label,
            account_type,
        })
    }
}

/// Extract the account type from text.
pub fn extract_account_type(text: &str) -> Option<AccountType> {
    AccountTypeExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_account_number_labeled() {
        assert_eq!(
            extract_account_number("ACCOUNT NO: 1234 5678 9012"),
            Some("123456789012".to_string())
        );
        assert_eq!(
            extract_account_number("A/C NUMBER - 98765432"),
            Some("98765432".to_string())
        );
    }

    #[test]
    fn test_account_number_length_bounds() {
        // 7 digits after a label is implausible, but the fallback picks up
        // the first plausible digit run elsewhere
        assert_eq!(
            extract_account_number("ACC NO: 1234567\nREF 55443322110099"),
            Some("55443322110099".to_string())
        );
    }

    #[test]
    fn test_account_number_fallback() {
        assert_eq!(
            extract_account_number("STATEMENT FOR 308812345678"),
            Some("308812345678".to_string())
        );
    }

    #[test]
    fn test_account_number_absent() {
        assert_eq!(extract_account_number("NO DIGITS OF NOTE 123"), None);
    }

    #[test]
    fn test_account_type_word_pairing() {
        let result = extract_account_type("ACCOUNT TYPE: REGULAR SAVINGS ACCOUNT").unwrap();
        assert_eq!(result.label, "ACCOUNT TYPE");
        assert_eq!(result.account_type, "SAVINGS  ACCOUNT");
    }

    #[test]
    fn test_account_type_account_word_first() {
        let result = extract_account_type("A/C TYPE: ACCOUNT SAVINGS").unwrap();
        assert_eq!(result.account_type, "ACCOUNT");
    }

    #[test]
    fn test_account_type_leading_words_fallback() {
        let result = extract_account_type("SCHEME CODE: SB GEN PUBLIC IND").unwrap();
        assert_eq!(result.account_type, "SB  GEN  PUBLIC");
    }

    #[test]
    fn test_account_type_prioritizes_account_valued_match() {
        let text = "SCHEME: GOLD PLUS.\nACCOUNT TYPE: SALARY ACCOUNT";
        let result = extract_account_type(text).unwrap();
        assert_eq!(result.account_type, "SALARY  ACCOUNT");
    }

    #[test]
    fn test_account_type_absent() {
        assert_eq!(extract_account_type("TRANSACTION LISTING"), None);
    }
}
