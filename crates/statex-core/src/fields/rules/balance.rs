//! Opening and closing balance extraction.
//!
//! Three tiers each: a labeled amount on the same line, a table layout
//! with the header on one line and the amount below it, and a generic
//! nearby-number fallback. The opening table tier filters out numbers that
//! are fragments of dates or timestamps; the closing table tier picks the
//! number whose column lines up with the header.

use regex::Regex;
use tracing::debug;

use super::patterns::{
    CLOSING_GENERIC, CLOSING_HEADER, CLOSING_INLINE, CLOSING_LABELED, DATE_PREFIX_LINE,
    NUMBER_TOKEN, OPENING_GENERIC, OPENING_HEADER, OPENING_INLINE, OPENING_LABELED, TIME_CLAUSE,
};
use crate::models::config::ExtractionConfig;
use crate::models::fields::{Balance, BalanceSign};

/// Balance extractor with configurable table-scan depth and date-context
/// window.
pub struct BalanceExtractor {
    scan_lines: usize,
    date_window: usize,
}

impl BalanceExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            scan_lines: config.table_scan_lines,
            date_window: config.date_context_window,
        }
    }

    /// Extract the opening balance.
    pub fn extract_opening(&self, text: &str) -> Option<Balance> {
        if let Some(caps) = OPENING_LABELED.captures(text) {
            let balance = Balance {
                amount: caps[1].replace(',', ""),
                sign: sign_from_capture(caps.get(2).map(|m| m.as_str())),
                raw: caps[0].to_string(),
            };
            debug!("found opening balance (labeled): {}", balance.amount);
            return Some(balance);
        }

        if let Some(balance) = self.opening_from_table(text) {
            return Some(balance);
        }

        if let Some(caps) = OPENING_GENERIC.captures(text) {
            let balance = Balance {
                amount: caps[1].replace(',', ""),
                sign: BalanceSign::Unknown,
                raw: caps[0].to_string(),
            };
            debug!("found opening balance (generic): {}", balance.amount);
            return Some(balance);
        }

        None
    }

    /// Extract the closing balance.
    pub fn extract_closing(&self, text: &str) -> Option<Balance> {
        if let Some(caps) = CLOSING_LABELED.captures(text) {
            let balance = Balance {
                amount: caps[1].replace(',', ""),
                sign: sign_from_capture(caps.get(2).map(|m| m.as_str())),
                raw: caps[0].to_string(),
            };
            debug!("found closing balance (labeled): {}", balance.amount);
            return Some(balance);
        }

        if let Some(balance) = self.closing_from_table(text) {
            return Some(balance);
        }

        if let Some(caps) = CLOSING_GENERIC.captures(text) {
            let balance = Balance {
                amount: caps[1].replace(',', ""),
                sign: BalanceSign::Unknown,
                raw: caps[0].to_string(),
            };
            debug!("found closing balance (generic): {}", balance.amount);
            return Some(balance);
        }

        None
    }

    fn opening_from_table(&self, text: &str) -> Option<Balance> {
        let lines: Vec<&str> = text.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            if !OPENING_HEADER.is_match(line) {
                continue;
            }

            if let Some(caps) = OPENING_INLINE.captures(line) {
                let balance = Balance {
                    amount: caps[1].replace(',', ""),
                    sign: BalanceSign::Unknown,
                    raw: caps[0].to_string(),
                };
                debug!("found opening balance (inline table): {}", balance.amount);
                return Some(balance);
            }

            for j in 1..=self.scan_lines {
                let Some(raw_line) = lines.get(i + j) else {
                    break;
                };

                // value lines opening with a date clause get the clause
                // stripped so the timestamp digits drop out up front
                let value_line = if DATE_PREFIX_LINE.is_match(raw_line) {
                    let cleaned = TIME_CLAUSE.replace(raw_line, "");
                    if cleaned.is_empty() {
                        (*raw_line).to_string()
                    } else {
                        cleaned.into_owned()
                    }
                } else {
                    (*raw_line).to_string()
                };

                for m in NUMBER_TOKEN.find_iter(&value_line) {
                    if self.is_part_of_date_context(&value_line, m.as_str(), m.start()) {
                        debug!("skipping date fragment '{}'", m.as_str());
                        continue;
                    }
                    let balance = Balance {
                        amount: m.as_str().replace(',', ""),
                        sign: BalanceSign::Unknown,
                        raw: m.as_str().to_string(),
                    };
                    debug!(
                        "found opening balance (table, {} below header): {}",
                        j, balance.amount
                    );
                    return Some(balance);
                }
            }
        }

        None
    }

    fn closing_from_table(&self, text: &str) -> Option<Balance> {
        let lines: Vec<&str> = text.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            if !CLOSING_HEADER.is_match(line) {
                continue;
            }

            if let Some(caps) = CLOSING_INLINE.captures(line) {
                let balance = Balance {
                    amount: caps[1].replace(',', ""),
                    sign: BalanceSign::Unknown,
                    raw: caps[0].to_string(),
                };
                debug!("found closing balance (inline table): {}", balance.amount);
                return Some(balance);
            }

            // column reference is the first header occurrence that actually
            // says "closing"; carried-forward phrasings are too loose to
            // anchor a column on
            let Some(header) = CLOSING_HEADER
                .find_iter(line)
                .find(|m| m.as_str().to_lowercase().contains("closing"))
            else {
                continue;
            };
            let header_center = (header.start() + header.end()) as f64 / 2.0;

            for j in 1..=self.scan_lines {
                let Some(value_line) = lines.get(i + j) else {
                    break;
                };

                let best = NUMBER_TOKEN
                    .find_iter(value_line)
                    .min_by(|a, b| {
                        let da = ((a.start() + a.end()) as f64 / 2.0 - header_center).abs();
                        let db = ((b.start() + b.end()) as f64 / 2.0 - header_center).abs();
                        da.total_cmp(&db)
                    })
                    .map(|m| m.as_str().to_string());

                if let Some(token) = best {
                    let balance = Balance {
                        amount: token.replace(',', ""),
                        sign: BalanceSign::Unknown,
                        raw: token,
                    };
                    debug!(
                        "found closing balance (column detection): {}",
                        balance.amount
                    );
                    return Some(balance);
                }
            }
        }

        None
    }

    /// Whether a numeric token sits inside a date or timestamp like
    /// `18-08-25` or `18:10:49` within the surrounding context window.
    fn is_part_of_date_context(&self, line: &str, number: &str, position: usize) -> bool {
        let mut start = position.saturating_sub(self.date_window);
        while !line.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (position + number.len() + self.date_window).min(line.len());
        while !line.is_char_boundary(end) {
            end += 1;
        }
        let context = &line[start..end];

        let escaped = regex::escape(number);
        let probes = [
            format!(r"\b{escaped}[-/:]\d{{1,2}}[-/:]\d{{2,4}}"),
            format!(r"\d{{1,2}}[-/:]+{escaped}[-/:]\d{{2,4}}"),
            format!(r"\d{{2,4}}[-/:]\d{{1,2}}[-/:]+{escaped}\b"),
            format!(r"\b{escaped}:\d{{2}}:\d{{2}}"),
            format!(r"\d{{1,2}}:+{escaped}:\d{{2}}"),
        ];

        probes.iter().any(|p| {
            Regex::new(p)
                .map(|re| re.is_match(context))
                .unwrap_or(false)
        })
    }
}

/// Extract the opening balance with the default config.
pub fn extract_opening_balance(text: &str) -> Option<Balance> {
    BalanceExtractor::new(&ExtractionConfig::default()).extract_opening(text)
}

/// Extract the closing balance with the default config.
pub fn extract_closing_balance(text: &str) -> Option<Balance> {
    BalanceExtractor::new(&ExtractionConfig::default()).extract_closing(text)
}

fn sign_from_capture(capture: Option<&str>) -> BalanceSign {
    match capture {
        Some(s) if s.eq_ignore_ascii_case("CR") => BalanceSign::Credit,
        Some(s) if s.eq_ignore_ascii_case("DR") => BalanceSign::Debit,
        _ => BalanceSign::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_opening_labeled_with_sign() {
        let balance = extract_opening_balance("OPENING BALANCE : 22.38(CR)").unwrap();
        assert_eq!(balance.amount, "22.38");
        assert_eq!(balance.sign, BalanceSign::Credit);
    }

    #[test]
    fn test_opening_labeled_strips_commas() {
        let balance = extract_opening_balance("BALANCE BROUGHT FORWARD: 42,650.00").unwrap();
        assert_eq!(balance.amount, "42650.00");
        assert_eq!(balance.sign, BalanceSign::Unknown);
    }

    #[test]
    fn test_opening_run_together_label() {
        let balance = extract_opening_balance("OPENINGBALANCE:1,234.56").unwrap();
        assert_eq!(balance.amount, "1234.56");
    }

    #[test]
    fn test_opening_table_skips_date_fragments() {
        let text = "OPENING BALANCE DETAILS\n18-08-25 BALANCE 22.38";
        let balance = extract_opening_balance(text).unwrap();
        assert_eq!(balance.amount, "22.38");
        assert_eq!(balance.sign, BalanceSign::Unknown);
    }

    #[test]
    fn test_opening_table_strips_leading_date_clause() {
        let text = "OPENING BALANCE DETAILS\nAS ON 18-08-25 18:10:49 PM 4,500.00";
        let balance = extract_opening_balance(text).unwrap();
        assert_eq!(balance.amount, "4500.00");
    }

    #[test]
    fn test_opening_generic_fallback() {
        let balance = extract_opening_balance("OPENING BAL AS PER LEDGER 900.00").unwrap();
        assert_eq!(balance.amount, "900.00");
    }

    #[test]
    fn test_opening_absent() {
        assert!(extract_opening_balance("TRANSACTION LISTING ONLY").is_none());
    }

    #[test]
    fn test_closing_labeled_with_sign() {
        let balance = extract_closing_balance("CLOSING BALANCE : 2,983.38(DR)").unwrap();
        assert_eq!(balance.amount, "2983.38");
        assert_eq!(balance.sign, BalanceSign::Debit);
    }

    #[test]
    fn test_closing_nearest_column() {
        let text = "ACCOUNT SUMMARY\nWITHDRAWALS   DEPOSITS   CLOSING BALANCE\nRS 4,000.00   RS 9,500.00   RS 13,250.25";
        let balance = extract_closing_balance(text).unwrap();
        assert_eq!(balance.amount, "13250.25");
        assert_eq!(balance.raw, "13,250.25");
    }

    #[test]
    fn test_closing_generic_fallback() {
        let text = "CLOSING BAL FOR THE PERIOD WAS RS 7,800.50";
        let balance = extract_closing_balance(text).unwrap();
        assert_eq!(balance.amount, "7800.50");
    }

    #[test]
    fn test_closing_absent() {
        assert!(extract_closing_balance("NO SUMMARY SECTION").is_none());
    }
}
