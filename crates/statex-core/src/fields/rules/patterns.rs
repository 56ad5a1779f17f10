//! Compiled regex tables for bank-statement and KYC field extraction.
//!
//! Label vocabularies cover the phrasings Indian banks actually print,
//! including run-together variants produced by OCR ("OPENINGBALANCE").
//! Value grammars are deliberately permissive; the normalization pass
//! repairs or rejects noise afterwards. All patterns are compiled once and
//! shared read-only across requests.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Account type: label in group 1, raw value in group 2
    pub static ref ACCOUNT_TYPE_LABELED: Regex = Regex::new(concat!(
        r"(?i)((?:account\s*type|accounttype|a/c\s*type|a\.c\.?\s*type|type\s*of\s*account",
        r"|ac\s*type|account\s*category|a/c\s*category|acct\s*type|scheme\s*type|scheme\s*code|scheme",
        r"|product\s*type|product\s*code|relationship\s*type|relation\s*type|customer\s*relationship",
        r"|customer\s*relation\s*type|mode\s*of\s*operation|operating\s*type|operative\s*type",
        r"|a/c\s*operation|account\s*operation\s*mode|operation\s*mode",
        r"))\s*[:\-=\s/]*\s*([A-Za-z0-9\s\-/]+)"
    )).unwrap();

    /// Picks out the word of an account-type value that names the account.
    pub static ref ACCOUNT_WORD: Regex = Regex::new(r"(?i)account|a/c|a\.c").unwrap();

    // Customer/CIF id: label in group 1, value in group 2
    pub static ref CUSTOMER_ID_LABELED: Regex = Regex::new(concat!(
        r"(?i)((?:customer\s*id|cust\.?\s*id|customer\s*no\.?|customer\s*number|cif\s*no\.?",
        r"|cif\s*id|cif\s*number|user\s*id|relationship\s*no\.?|cust\.?\s*reln\.?\s*no\.?|crn",
        r"|client\s*id|customer\s*code|customer\s*no\.?\s*/\s*cif\s*id|cif\s*id\s*/\s*customer\s*no\.?",
        r"|custid|client\s*no\.?|user\s*no\.?",
        r"))\s*[:\-=\s/]*\s*([A-Za-z0-9\-/]+)"
    )).unwrap();

    pub static ref CUSTOMER_ID_ALT: Regex = Regex::new(
        r"(?i)custid\s*[:\-]?\s*([A-Za-z0-9]+)"
    ).unwrap();

    // PAN: labeled tier, then a structural fallback matched anywhere.
    // The 4th character is restricted to the valid PAN holder-type set.
    pub static ref PAN_LABELED: Regex = Regex::new(
        r"(?i)\b(?:pan(?:\s*(?:no\.?|number)?)?)\b[:\-\s]*([A-Z]{3}[ABCFGHLJPTK][A-Z]\s*[0-9]{4}\s*[A-Z])"
    ).unwrap();

    // Word-boundary guards expressed as consuming context classes since the
    // regex crate has no look-around; the PAN itself is group 1.
    pub static ref PAN_GENERIC: Regex = Regex::new(
        r"(?i)(?:^|[^A-Z0-9])([A-Z]{3}[ABCFGHLJPTK][A-Z]\s*[0-9]{4}\s*[A-Z])(?:[^A-Z0-9]|$)"
    ).unwrap();

    // IFSC: digits allowed in the first 4 positions to admit OCR misreads,
    // repaired afterwards; position 4 is the literal zero.
    pub static ref IFSC_LABELED: Regex = Regex::new(
        r"(?i)(?:ifsc(?:\s*code)?)\s*[:\-]?\s*([A-Z0-9]{4}0[A-Z0-9]{6})"
    ).unwrap();

    // Mobile: value keeps masking characters since numbers are often redacted
    pub static ref MOBILE_LABELED: Regex = Regex::new(concat!(
        r"(?i)((?:mobile\s*no\.?|mobile\s*number|phone\s*no\.?|phone\s*number|contact\s*no\.?",
        r"|contact\s*number|registered\s*mobile\s*no\.?|registered\s*mobile\s*number",
        r"|registered\s*phone\s*no\.?|registered\s*phone\s*number|registered\s*contact\s*no\.?",
        r"|registered\s*contact\s*number|tel\s*no\.?|tel\s*number|cell\s*no\.?|cell\s*number",
        r"|sms\s*no\.?|sms\s*number",
        r"))\s*[:\-=\s/]*\s*([0-9xX*]+(?:[/,][0-9xX*]+)*)"
    )).unwrap();

    pub static ref MOBILE_FALLBACK: Regex = Regex::new(
        r"(?i)phone\s*number\s*[:\-]?\s*([0-9X*]+)"
    ).unwrap();

    // Account number: labeled tier, plus an 8-18 digit run fallback
    pub static ref ACCOUNT_NUMBER_LABELED: Regex = Regex::new(concat!(
        r"(?i)((?:account\s*no\.?|account\s*number|acc\s*no\.?|acc\s*number|account\s*id",
        r"|acc\s*id|bank\s*account\s*no\.?|bank\s*account\s*number|saving\s*account\s*no\.?",
        r"|saving\s*account\s*number|current\s*account\s*no\.?|current\s*account\s*number",
        r"|a/c\s*no\.?|a/c\s*number",
        r"))\s*[:\-=\s/]*\s*([0-9\s\-/]+)"
    )).unwrap();

    pub static ref ACCOUNT_NUMBER_FALLBACK: Regex = Regex::new(
        r"\b(\d{8,18})\b"
    ).unwrap();

    // Email sweeps: plain, labeled (partial domains allowed), masked, spaced
    pub static ref EMAIL_PLAIN: Regex = Regex::new(
        r"\b[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}\b"
    ).unwrap();

    pub static ref EMAIL_LABELED: Regex = Regex::new(concat!(
        r"(?i)(?:email\s*(?:id|address)?|e-?mail\s*(?:id|address)?",
        r"|registered\s+e-?mail\s*(?:id|address)?|contact\s+e-?mail|mail\s*(?:id|address)?)",
        r"\s*[:\-=\s/]*\s*([a-zA-Z0-9._%+\-*]+@[a-zA-Z0-9.*\-]+(?:\.[a-zA-Z]+)?)"
    )).unwrap();

    pub static ref EMAIL_MASKED: Regex = Regex::new(
        r"\b[a-zA-Z0-9._%+\-*]+@[a-zA-Z0-9.*\-]+\.[a-zA-Z]{2,}\b"
    ).unwrap();

    pub static ref EMAIL_SPACED: Regex = Regex::new(
        r"\b([a-zA-Z0-9._%+\-]+)\s*@\s*([a-zA-Z0-9.\-]+)\s*\.\s*([a-zA-Z]{2,})\b"
    ).unwrap();

    // CKYC: labeled tiers require a separator so a bare "CKYC" heading does
    // not swallow the next token
    pub static ref CKYC_LABELED: Regex = Regex::new(
        r"(?i)\b(?:ckyc\s*(?:id|no\.?|number|identifier)?)\s*[:,\-=]\s*([A-Z0-9][A-Z0-9*\-/\s]{8,20})"
    ).unwrap();

    pub static ref CKYC_DIGITS: Regex = Regex::new(
        r"(?i)\bckyc\b[:\s\-]+([0-9*]{14})"
    ).unwrap();

    pub static ref CKYC_GENERIC: Regex = Regex::new(
        r"(?i)ckyc[:\-=]+([A-Z0-9*\-/]{10,20})"
    ).unwrap();

    pub static ref CKYC_STANDALONE: Regex = Regex::new(
        r"\b([0-9*]{14})\b"
    ).unwrap();

    // Opening balance: labeled (amount group 1, CR/DR group 2), header-only,
    // inline-on-header-line, and generic lookahead tiers
    pub static ref OPENING_LABELED: Regex = Regex::new(concat!(
        r"(?i)(?:opening\s+balance(?:\s+amount)?|openingbalance(?:\s+amount)?|openingbal\.?",
        r"|opening\s+ledger\s+balance|openingledgerbalance|opening\s+available\s+balance",
        r"|openingavailablebalance|balance\s+brought\s+forward|balancebroughtforward",
        r"|brought\s+forward(?:\s+balance)?|broughtforward(?:balance)?|balance\s+b/f|balanceb/f",
        r"|b/f\s+balance|b/fbalance|opening\s+book\s+balance|openingbookbalance)",
        r"\s*[:\-]?\s*([0-9,]*\.?[0-9]+)\s*(?:\((CR|DR)\))?"
    )).unwrap();

    pub static ref OPENING_HEADER: Regex = Regex::new(concat!(
        r"(?i)(?:opening\s+balance(?:\s+amount)?|openingbalance(?:\s+amount)?",
        r"|opening\s+bal\.?|openingbal\.?|opening\s+ledger\s+balance|openingledgerbalance",
        r"|opening\s+available\s+balance|openingavailablebalance|balance\s+brought\s+forward",
        r"|balancebroughtforward|brought\s+forward(?:\s+balance)?|broughtforward(?:balance)?",
        r"|balance\s+b/f|balanceb/f|b/f\s+balance|b/fbalance",
        r"|opening\s+book\s+balance|openingbookbalance)"
    )).unwrap();

    pub static ref OPENING_INLINE: Regex = Regex::new(concat!(
        r"(?i)(?:opening\s+balance(?:\s+amount)?|openingbalance(?:amount)?",
        r"|opening\s+bal\.?|openingbal\.?|opening\s+ledger\s+balance|openingledgerbalance",
        r"|opening\s+available\s+balance|openingavailablebalance|balance\s+brought\s+forward",
        r"|balancebroughtforward|brought\s+forward(?:\s+balance)?|broughtforward(?:balance)?",
        r"|balance\s+b/f|balanceb/f|b/f\s+balance|b/fbalance",
        r"|opening\s+book\s+balance|openingbookbalance)",
        r"\s*[:\-]?\s*([0-9,]+\.?\d*)"
    )).unwrap();

    pub static ref OPENING_GENERIC: Regex = Regex::new(concat!(
        r"(?i)(?:opening\s+balance(?:\s+amount)?|openingbalance(?:amount)?",
        r"|opening\s+bal\.?|openingbal\.?|opening\s+ledger\s+balance|openingledgerbalance",
        r"|opening\s+available\s+balance|openingavailablebalance|balance\s+brought\s+forward",
        r"|balancebroughtforward|brought\s+forward(?:\s+balance)?|broughtforward(?:balance)?",
        r"|balance\s+b/f|balanceb/f|b/f\s+balance|b/fbalance",
        r"|opening\s+book\s+balance|openingbookbalance)",
        r"[\s\S]{0,50}?([0-9,]+\.?\d*)"
    )).unwrap();

    // Closing balance tiers; the table tier uses column positions
    pub static ref CLOSING_LABELED: Regex = Regex::new(concat!(
        r"(?i)(?:closingbalance(?:\s+amount)?|closing\s+balance(?:\s+amount)?",
        r"|closingbal|closing\s+bal\.?|closingledgerbalance|closing\s+ledger\s+balance",
        r"|closingavailablebalance|closing\s+available\s+balance|balancecarriedforward",
        r"|balance\s+carried\s+forward|carriedforward(?:balance)?|carried\s+forward(?:\s+balance)?",
        r"|balancec/f|balance\s+c/f|c/fbalance|c/f\s+balance",
        r"|bookclosingbalance|book\s+closing\s+balance)",
        r"\s*[:\-]?\s*([0-9,]*\.?[0-9]+)\s*(?:\((CR|DR)\))?"
    )).unwrap();

    pub static ref CLOSING_HEADER: Regex = Regex::new(concat!(
        r"(?i)(?:closing\s*balance|closingbalance|closing\s*bal\.?|closingbal",
        r"|closingledgerbalance|closing\s*ledger\s*balance|closingavailablebalance",
        r"|closing\s*available\s*balance|balancecarriedforward|balance\s*carried\s*forward",
        r"|carriedforward|carried\s*forward|balancec/f|balance\s*c/f|c/fbalance|c/f\s*balance",
        r"|bookclosingbalance|book\s*closing\s*balance)"
    )).unwrap();

    pub static ref CLOSING_INLINE: Regex = Regex::new(concat!(
        r"(?i)(?:closingbalance(?:\s+amount)?|closing\s+balance(?:\s+amount)?",
        r"|closingbal|closing\s+bal\.?|closingledgerbalance|closing\s+ledger\s+balance",
        r"|closingavailablebalance|closing\s+available\s+balance|balancecarriedforward",
        r"|balance\s+carried\s+forward|carriedforward(?:balance)?|carried\s+forward(?:\s+balance)?",
        r"|balancec/f|balance\s+c/f|c/fbalance|c/f\s+balance",
        r"|bookclosingbalance|book\s+closing\s+balance)",
        r"\s+([0-9,]+\.?\d*)"
    )).unwrap();

    pub static ref CLOSING_GENERIC: Regex = Regex::new(concat!(
        r"(?i)(?:closing\s+balance(?:\s+amount)?|closingbalance(?:\s+amount)?",
        r"|closingbal|closing\s+bal\.?|closing\s+ledger\s+balance|closingledgerbalance",
        r"|closing\s+available\s+balance|closingavailablebalance|balance\s+carried\s+forward",
        r"|balancecarriedforward|carried\s+forward(?:\s+balance)?|carriedforward(?:balance)?",
        r"|balance\s+c/f|balancec/f|c/f\s+balance|c/fbalance",
        r"|book\s+closing\s+balance|bookclosingbalance)",
        r"[\s\S]{0,50}?([0-9,]+\.?\d*)"
    )).unwrap();

    /// Numeric token on a ledger value line.
    pub static ref NUMBER_TOKEN: Regex = Regex::new(r"[0-9,]+\.?\d*").unwrap();

    /// Value line opening with a date prefix ("AS ON 18-08-25 ...").
    pub static ref DATE_PREFIX_LINE: Regex = Regex::new(
        r"(?i)^\s*(?:AS\s+ON|DATE|ON)\s+\d"
    ).unwrap();

    /// Strips a leading date/time clause up to and including the time.
    pub static ref TIME_CLAUSE: Regex = Regex::new(
        r"(?i)^.*?\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM)?\s*"
    ).unwrap();

    // Date grammars, cascade priority order
    pub static ref DATE_DMY4: Regex = Regex::new(
        r"\b(\d{2})[-/.](\d{2})[-/.](\d{4})\b"
    ).unwrap();

    pub static ref DATE_DMY2: Regex = Regex::new(
        r"\b(\d{2})[-/.](\d{2})[-/.](\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[-/.](\d{2})[-/.](\d{2})\b"
    ).unwrap();

    pub static ref DATE_DD_MONTH: Regex = Regex::new(concat!(
        r"(?i)\b(\d{1,2})\s+(january|february|march|april|may|june|july|august|september",
        r"|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)[,\s]+(\d{4})\b"
    )).unwrap();

    pub static ref DATE_MONTH_DD: Regex = Regex::new(concat!(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october",
        r"|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\s+(\d{1,2})[,\s]+(\d{4})\b"
    )).unwrap();

    // Statement-period date fragments split across lines: "30/06 /2025"
    pub static ref SPLIT_DATE_DMY: Regex = Regex::new(
        r"(\d{1,2}[-/.]\d{1,2})\s+([-/.])\s*(\d{2,4})"
    ).unwrap();

    pub static ref SPLIT_DATE_YMD: Regex = Regex::new(
        r"(\d{4}[-/.]\d{1,2})\s+([-/.])\s*(\d{1,2})"
    ).unwrap();

    /// The three statement-period phrasings, alternated in priority order;
    /// from/to dates land in group pairs (1,2), (3,4), (5,6).
    pub static ref STATEMENT_PERIOD: Regex = {
        let date = concat!(
            r"\b\d{4}[-/.]\d{1,2}[-/.]\d{1,2}\b|\b\d{2}[-/.]\d{1,2}[-/.]\d{1,2}\b",
            r"|\b\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}\b",
            r"|\b\d{1,2}\s+(?:january|february|march|april|may|june|july|august|september",
            r"|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\s+\d{4}\b",
            r"|\b(?:january|february|march|april|may|june|july|august|september|october",
            r"|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\s+\d{1,2},?\s+\d{4}\b"
        );
        let pattern = format!(
            concat!(
                r"(?i)(?:statement\s+)?period[:\s*]+({d})[:\s*]+to[:\s*]+({d})",
                r"|(?:period\s+)?from[:\s*]*({d})[:\s*]+to[:\s*]+({d})",
                r"|({d})\s+to\s+({d})"
            ),
            d = date
        );
        Regex::new(&pattern).unwrap()
    };

    // Aadhaar: grouped, flexible spacing, UID-keyword anchored, bare 12-digit
    pub static ref AADHAAR_GROUPED: Regex = Regex::new(
        r"\b(\d{4})\s+(\d{4})\s+(\d{4})\b"
    ).unwrap();

    pub static ref AADHAAR_FLEX: Regex = Regex::new(
        r"\b(\d{4})\s{1,5}(\d{4})\s{1,5}(\d{4})\b"
    ).unwrap();

    pub static ref AADHAAR_UID: Regex = Regex::new(
        r"(?i)(?:uid|uidai|enrollment|enrolment|aadhaar|aadhar)[\s:]*(\d{4})\s+(\d{4})\s+(\d{4})(?:\s+(\d{4}))?"
    ).unwrap();

    pub static ref AADHAAR_BARE: Regex = Regex::new(
        r"\b(\d{12})\b"
    ).unwrap();
}

/// DOB-indicating keywords, searched in this order.
pub const DOB_KEYWORDS: [&str; 6] = [
    r"date\s+of\s+birth",
    r"dob",
    r"birth\s+date",
    r"date\s+of\s+brith", // common OCR/typo variant
    r"born",
    r"d\.?o\.?b\.?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_labeled_matches_variants() {
        for text in ["PAN: ABCDE1234F", "PAN NO. ABCDE1234F", "pan number - ABCDE1234F"] {
            let caps = PAN_LABELED.captures(text).expect(text);
            assert_eq!(&caps[1], "ABCDE1234F");
        }
    }

    #[test]
    fn test_pan_generic_word_boundaries() {
        assert!(PAN_GENERIC.captures("REF ABCDE1234F DONE").is_some());
        // embedded in a longer alphanumeric run must not match
        assert!(PAN_GENERIC.captures("XABCDE1234F").is_none());
        assert!(PAN_GENERIC.captures("ABCDE1234F9").is_none());
    }

    #[test]
    fn test_ifsc_allows_digit_misreads() {
        let caps = IFSC_LABELED.captures("IFSC CODE: 5B1N0001234").unwrap();
        assert_eq!(&caps[1], "5B1N0001234");
    }

    #[test]
    fn test_statement_period_group_pairs() {
        let caps = STATEMENT_PERIOD
            .captures("STATEMENT PERIOD: 01/04/2025 TO 30/06/2025")
            .unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "01/04/2025");
        assert_eq!(caps.get(2).unwrap().as_str(), "30/06/2025");
    }

    #[test]
    fn test_opening_labeled_sign_group() {
        let caps = OPENING_LABELED.captures("OPENING BALANCE : 22.38(CR)").unwrap();
        assert_eq!(&caps[1], "22.38");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("CR"));
    }
}
