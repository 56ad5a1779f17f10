//! Result types for the per-field extractors.
//!
//! Every extractor produces exactly one of these shapes; "not found" is
//! expressed as `None` (or an empty list for emails), never as an error.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pdf::PageScope;

/// Credit/debit indicator attached to a balance amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSign {
    #[serde(rename = "CR")]
    Credit,
    #[serde(rename = "DR")]
    Debit,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

/// An extracted opening or closing balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Amount with thousands separators stripped, e.g. `"42650.00"`.
    pub amount: String,
    /// Credit/debit indicator, if the statement carried one.
    pub sign: BalanceSign,
    /// The raw matched text, kept for auditing.
    pub raw: String,
}

impl Balance {
    /// Parse the amount string as a decimal.
    pub fn amount_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.amount).ok()
    }
}

/// Confidence level for a date-of-birth match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Anchored to a DOB keyword.
    High,
    /// Plausible date found without keyword context.
    Low,
}

/// Date grammar that produced a match, in cascade priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "dd-mm-yyyy")]
    DdMmYyyy,
    #[serde(rename = "dd-mm-yy")]
    DdMmYy,
    #[serde(rename = "yyyy-mm-dd")]
    YyyyMmDd,
    #[serde(rename = "dd-month-yyyy")]
    DdMonthYyyy,
    #[serde(rename = "month-dd-yyyy")]
    MonthDdYyyy,
}

/// An extracted date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// The date exactly as it appeared in the document.
    pub date: String,
    /// Which grammar matched.
    pub format: DateFormat,
    pub confidence: Confidence,
}

impl DateOfBirth {
    /// Interpret the raw date string according to its format tag.
    ///
    /// Returns `None` when the components do not form a calendar date
    /// (the extractor validates ranges, not calendars).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let parts: Vec<&str> = self
            .date
            .split(|c| c == '-' || c == '/' || c == '.' || c == ',' || c == ' ')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }

        let (day, month, year) = match self.format {
            DateFormat::DdMmYyyy => (
                parts[0].parse().ok()?,
                parts[1].parse().ok()?,
                parts[2].parse().ok()?,
            ),
            DateFormat::DdMmYy => {
                let yy: i32 = parts[2].parse().ok()?;
                let year = if yy <= 50 { 2000 + yy } else { 1900 + yy };
                (parts[0].parse().ok()?, parts[1].parse().ok()?, year)
            }
            DateFormat::YyyyMmDd => (
                parts[2].parse().ok()?,
                parts[1].parse().ok()?,
                parts[0].parse().ok()?,
            ),
            DateFormat::DdMonthYyyy => (
                parts[0].parse().ok()?,
                month_number(parts[1])?,
                parts[2].parse().ok()?,
            ),
            DateFormat::MonthDdYyyy => (
                parts[1].parse().ok()?,
                month_number(parts[0])?,
                parts[2].parse().ok()?,
            ),
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// The statement coverage period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub from_date: String,
    pub to_date: String,
}

/// An extracted account type with the label that introduced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountType {
    /// The label phrase that matched, e.g. `"ACCOUNT TYPE"`.
    pub label: String,
    /// Normalized type value, e.g. `"SAVINGS  ACCOUNT"`.
    pub account_type: String,
}

/// The fields the engine can be asked to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    AccountType,
    CustomerId,
    Pan,
    Aadhaar,
    Ifsc,
    Mobile,
    AccountNumber,
    Email,
    Ckyc,
    OpeningBalance,
    ClosingBalance,
    Dob,
    StatementPeriod,
}

impl FieldKind {
    /// All requestable fields, in profile order.
    pub const ALL: [FieldKind; 13] = [
        FieldKind::AccountType,
        FieldKind::CustomerId,
        FieldKind::Pan,
        FieldKind::Aadhaar,
        FieldKind::Ifsc,
        FieldKind::Mobile,
        FieldKind::AccountNumber,
        FieldKind::Email,
        FieldKind::Ckyc,
        FieldKind::OpeningBalance,
        FieldKind::ClosingBalance,
        FieldKind::Dob,
        FieldKind::StatementPeriod,
    ];

    /// Page scope the field prefers when acquiring text from a PDF.
    ///
    /// Balances sit on the first and last statement pages; most identity
    /// fields appear in the first-page header block; DOB and Aadhaar may be
    /// anywhere in an identity document.
    pub fn preferred_scope(&self) -> PageScope {
        match self {
            FieldKind::OpeningBalance | FieldKind::ClosingBalance => PageScope::FirstAndLast,
            FieldKind::Dob | FieldKind::Aadhaar => PageScope::AllPages,
            _ => PageScope::FirstPage,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::AccountType => "account-type",
            FieldKind::CustomerId => "customer-id",
            FieldKind::Pan => "pan",
            FieldKind::Aadhaar => "aadhaar",
            FieldKind::Ifsc => "ifsc",
            FieldKind::Mobile => "mobile",
            FieldKind::AccountNumber => "account-number",
            FieldKind::Email => "email",
            FieldKind::Ckyc => "ckyc",
            FieldKind::OpeningBalance => "opening-balance",
            FieldKind::ClosingBalance => "closing-balance",
            FieldKind::Dob => "dob",
            FieldKind::StatementPeriod => "statement-period",
        };
        f.write_str(name)
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "account-type" => FieldKind::AccountType,
            "customer-id" | "cif" | "crn" => FieldKind::CustomerId,
            "pan" => FieldKind::Pan,
            "aadhaar" | "aadhar" => FieldKind::Aadhaar,
            "ifsc" => FieldKind::Ifsc,
            "mobile" => FieldKind::Mobile,
            "account-number" => FieldKind::AccountNumber,
            "email" => FieldKind::Email,
            "ckyc" => FieldKind::Ckyc,
            "opening-balance" => FieldKind::OpeningBalance,
            "closing-balance" => FieldKind::ClosingBalance,
            "dob" => FieldKind::Dob,
            "statement-period" => FieldKind::StatementPeriod,
            other => return Err(format!("unknown field: {other}")),
        };
        Ok(kind)
    }
}

/// A single extraction result, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    AccountType(Option<AccountType>),
    CustomerId(Option<String>),
    Pan(Option<String>),
    Aadhaar(Option<String>),
    Ifsc(Option<String>),
    Mobile(Option<String>),
    AccountNumber(Option<String>),
    Email(Vec<String>),
    Ckyc(Option<String>),
    OpeningBalance(Option<Balance>),
    ClosingBalance(Option<Balance>),
    Dob(Option<DateOfBirth>),
    StatementPeriod(Option<StatementPeriod>),
}

impl FieldValue {
    /// Whether the extractor found anything.
    pub fn is_found(&self) -> bool {
        match self {
            FieldValue::AccountType(v) => v.is_some(),
            FieldValue::CustomerId(v)
            | FieldValue::Pan(v)
            | FieldValue::Ifsc(v)
            | FieldValue::Mobile(v)
            | FieldValue::AccountNumber(v)
            | FieldValue::Ckyc(v)
            | FieldValue::Aadhaar(v) => v.is_some(),
            FieldValue::Email(v) => !v.is_empty(),
            FieldValue::OpeningBalance(v) | FieldValue::ClosingBalance(v) => v.is_some(),
            FieldValue::Dob(v) => v.is_some(),
            FieldValue::StatementPeriod(v) => v.is_some(),
        }
    }

    /// The field this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::AccountType(_) => FieldKind::AccountType,
            FieldValue::CustomerId(_) => FieldKind::CustomerId,
            FieldValue::Pan(_) => FieldKind::Pan,
            FieldValue::Aadhaar(_) => FieldKind::Aadhaar,
            FieldValue::Ifsc(_) => FieldKind::Ifsc,
            FieldValue::Mobile(_) => FieldKind::Mobile,
            FieldValue::AccountNumber(_) => FieldKind::AccountNumber,
            FieldValue::Email(_) => FieldKind::Email,
            FieldValue::Ckyc(_) => FieldKind::Ckyc,
            FieldValue::OpeningBalance(_) => FieldKind::OpeningBalance,
            FieldValue::ClosingBalance(_) => FieldKind::ClosingBalance,
            FieldValue::Dob(_) => FieldKind::Dob,
            FieldValue::StatementPeriod(_) => FieldKind::StatementPeriod,
        }
    }
}
