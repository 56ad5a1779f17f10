//! Date of birth and statement period extraction.

use regex::Regex;
use tracing::debug;

use super::patterns::{
    DATE_DD_MONTH, DATE_DMY2, DATE_DMY4, DATE_MONTH_DD, DATE_YMD, DOB_KEYWORDS, SPLIT_DATE_DMY,
    SPLIT_DATE_YMD, STATEMENT_PERIOD,
};
use crate::models::config::ExtractionConfig;
use crate::models::fields::{Confidence, DateFormat, DateOfBirth, StatementPeriod};

/// Date grammars in cascade priority order.
fn grammars() -> [(&'static Regex, DateFormat); 5] {
    [
        (&DATE_DMY4, DateFormat::DdMmYyyy),
        (&DATE_DMY2, DateFormat::DdMmYy),
        (&DATE_YMD, DateFormat::YyyyMmDd),
        (&DATE_DD_MONTH, DateFormat::DdMonthYyyy),
        (&DATE_MONTH_DD, DateFormat::MonthDdYyyy),
    ]
}

/// Date-of-birth extractor.
///
/// A date within the label window of a birth keyword is a high-confidence
/// hit, searched keyword-major so a strong keyword with a weak grammar
/// beats a weak keyword with a strong one. Without any keyword the first
/// dd-mm-yyyy date whose fields pass the plausible-birth-date check is
/// returned with low confidence.
pub struct DobExtractor {
    anchored: Vec<(Regex, &'static Regex, DateFormat)>,
    year_min: i32,
    year_max: i32,
}

impl DobExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        let anchored = DOB_KEYWORDS
            .iter()
            .flat_map(|keyword| {
                grammars().into_iter().filter_map(move |(grammar, format)| {
                    let pattern = format!(
                        "(?i){}[:\\s]{{0,{}}}{}",
                        keyword,
                        config.label_window,
                        grammar.as_str()
                    );
                    Regex::new(&pattern)
                        .ok()
                        .map(|combined| (combined, grammar, format))
                })
            })
            .collect();

        Self {
            anchored,
            year_min: config.birth_year_min,
            year_max: config.birth_year_max,
        }
    }

    /// Extract a date of birth from text.
    pub fn extract(&self, text: &str) -> Option<DateOfBirth> {
        for (combined, grammar, format) in &self.anchored {
            if let Some(m) = combined.find(text) {
                // re-find the date inside the keyword+date span to drop
                // the keyword portion
                if let Some(date) = grammar.find(m.as_str()) {
                    debug!("found DOB with keyword context: {}", date.as_str());
                    return Some(DateOfBirth {
                        date: date.as_str().trim().to_string(),
                        format: *format,
                        confidence: Confidence::High,
                    });
                }
            }
        }

        for m in DATE_DMY4.find_iter(text) {
            let date = m.as_str();
            if self.is_plausible_birth_date(date) {
                debug!("found DOB without context: {}", date);
                return Some(DateOfBirth {
                    date: date.to_string(),
                    format: DateFormat::DdMmYyyy,
                    confidence: Confidence::Low,
                });
            }
        }

        None
    }

    fn is_plausible_birth_date(&self, date: &str) -> bool {
        let mut parts = date.split(['-', '/', '.']);
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let (Ok(day), Ok(month), Ok(year)) = (
            day.parse::<u32>(),
            month.parse::<u32>(),
            year.parse::<i32>(),
        ) else {
            return false;
        };

        (self.year_min..=self.year_max).contains(&year)
            && (1..=12).contains(&month)
            && (1..=31).contains(&day)
    }
}

/// Extract a date of birth with the default config.
pub fn extract_dob(text: &str) -> Option<DateOfBirth> {
    DobExtractor::new(&ExtractionConfig::default()).extract(text)
}

/// Extract the statement period (from/to dates) from text.
///
/// Date fragments split across lines ("30/06 /2025") are rejoined before
/// matching. Three phrasings are recognized: "period X to Y", "from X to
/// Y" and a bare "X to Y".
pub fn extract_statement_period(text: &str) -> Option<StatementPeriod> {
    let text = SPLIT_DATE_DMY.replace_all(text, "${1}${2}${3}");
    let text = SPLIT_DATE_YMD.replace_all(&text, "${1}${2}${3}");

    let caps = STATEMENT_PERIOD.captures(&text)?;
    for (from_idx, to_idx) in [(1, 2), (3, 4), (5, 6)] {
        if let (Some(from), Some(to)) = (caps.get(from_idx), caps.get(to_idx)) {
            debug!(
                "found statement period {} to {}",
                from.as_str(),
                to.as_str()
            );
            return Some(StatementPeriod {
                from_date: from.as_str().trim().to_string(),
                to_date: to.as_str().trim().to_string(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dob_keyword_anchored() {
        let dob = extract_dob("DATE OF BIRTH: 15/08/1990").unwrap();
        assert_eq!(dob.date, "15/08/1990");
        assert_eq!(dob.format, DateFormat::DdMmYyyy);
        assert_eq!(dob.confidence, Confidence::High);
    }

    #[test]
    fn test_dob_two_digit_year() {
        let dob = extract_dob("DOB 15-08-90").unwrap();
        assert_eq!(dob.date, "15-08-90");
        assert_eq!(dob.format, DateFormat::DdMmYy);
        assert_eq!(dob.confidence, Confidence::High);
    }

    #[test]
    fn test_dob_month_name() {
        let dob = extract_dob("BORN 15 AUGUST 1990").unwrap();
        assert_eq!(dob.date, "15 AUGUST 1990");
        assert_eq!(dob.format, DateFormat::DdMonthYyyy);
    }

    #[test]
    fn test_dob_typo_keyword() {
        let dob = extract_dob("DATE OF BRITH: 01.01.1975").unwrap();
        assert_eq!(dob.date, "01.01.1975");
        assert_eq!(dob.confidence, Confidence::High);
    }

    #[test]
    fn test_dob_keyword_beats_earlier_date() {
        let text = "STATEMENT DATE 01-01-2024\nDATE OF BIRTH: 15/08/1990";
        let dob = extract_dob(text).unwrap();
        assert_eq!(dob.date, "15/08/1990");
        assert_eq!(dob.confidence, Confidence::High);
    }

    #[test]
    fn test_dob_fallback_low_confidence() {
        let dob = extract_dob("ISSUED 12-05-1985 AT DELHI").unwrap();
        assert_eq!(dob.date, "12-05-1985");
        assert_eq!(dob.confidence, Confidence::Low);
    }

    #[test]
    fn test_dob_fallback_rejects_implausible_year() {
        assert!(extract_dob("REF 12-05-2150 NOTED").is_none());
    }

    #[test]
    fn test_dob_absent() {
        assert!(extract_dob("NO DATES HERE").is_none());
    }

    #[test]
    fn test_statement_period_labeled() {
        let period = extract_statement_period("STATEMENT PERIOD: 01/04/2025 TO 30/06/2025").unwrap();
        assert_eq!(period.from_date, "01/04/2025");
        assert_eq!(period.to_date, "30/06/2025");
    }

    #[test]
    fn test_statement_period_from_to() {
        let period = extract_statement_period("FROM 01-04-2025 TO 30-06-2025").unwrap();
        assert_eq!(period.from_date, "01-04-2025");
        assert_eq!(period.to_date, "30-06-2025");
    }

    #[test]
    fn test_statement_period_bare_dates() {
        let period = extract_statement_period("01 JAN 2025 TO 31 MAR 2025").unwrap();
        assert_eq!(period.from_date, "01 JAN 2025");
        assert_eq!(period.to_date, "31 MAR 2025");
    }

    #[test]
    fn test_statement_period_rejoins_split_dates() {
        let period = extract_statement_period("PERIOD: 01/04 /2025 TO 30/06/2025").unwrap();
        assert_eq!(period.from_date, "01/04/2025");
    }

    #[test]
    fn test_statement_period_absent() {
        assert!(extract_statement_period("NO PERIOD LINE").is_none());
    }
}
