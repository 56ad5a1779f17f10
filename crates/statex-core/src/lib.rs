//! Core library for Indian bank-statement and KYC field extraction.
//!
//! This crate provides:
//! - PDF text acquisition with per-field page scoping
//! - Regex-cascade extraction for 13 statement/KYC fields (PAN, Aadhaar,
//!   IFSC, balances, dates and more)
//! - OCR-noise repair for the fields where misreads follow fixed patterns
//! - A profile extractor that assembles every field into one result

pub mod error;
pub mod fields;
pub mod models;
pub mod pdf;

pub use error::{PdfError, Result, StatexError};
pub use fields::{ProfileExtractor, StatementProfile, extract_field, profile::ProfileResult};
pub use models::config::{ExtractionConfig, PdfConfig, StatexConfig};
pub use models::fields::{
    AccountType, Balance, BalanceSign, Confidence, DateFormat, DateOfBirth, FieldKind, FieldValue,
    StatementPeriod,
};
pub use pdf::{PageScope, PdfExtractor, acquire_text, acquire_text_scoped};
