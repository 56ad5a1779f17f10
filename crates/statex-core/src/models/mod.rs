//! Data models for extraction results and configuration.

pub mod config;
pub mod fields;

pub use config::{ExtractionConfig, PdfConfig, StatexConfig};
pub use fields::{
    AccountType, Balance, BalanceSign, Confidence, DateFormat, DateOfBirth, FieldKind, FieldValue,
    StatementPeriod,
};
