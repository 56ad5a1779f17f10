//! Rule-based field extractors for bank-statement and KYC documents.

pub mod aadhaar;
pub mod account;
pub mod balance;
pub mod customer;
pub mod dates;
pub mod email;
pub mod ifsc;
pub mod mobile;
pub mod normalize;
pub mod pan;
pub mod patterns;

pub use aadhaar::{AadhaarExtractor, extract_aadhaar};
pub use account::{
    AccountNumberExtractor, AccountTypeExtractor, extract_account_number, extract_account_type,
};
pub use balance::{BalanceExtractor, extract_closing_balance, extract_opening_balance};
pub use customer::{CustomerIdExtractor, extract_ckyc, extract_customer_id};
pub use dates::{DobExtractor, extract_dob, extract_statement_period};
pub use email::{EmailExtractor, extract_emails};
pub use ifsc::{IfscExtractor, extract_ifsc};
pub use mobile::{MobileExtractor, extract_mobile};
pub use pan::{PanExtractor, extract_pan};

/// Trait for single-value field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text; `None` is the normal "not found"
    /// outcome, never an error.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Which tier of a field's pattern cascade produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Label vocabulary followed by an inline value.
    Labeled,
    /// Header line with the value on a following line.
    Table,
    /// Structural pattern matched anywhere in the text.
    Generic,
}

/// An internal candidate match while tiers compete.
///
/// Never crosses the crate boundary: callers only see the final value.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Cascade tier that produced it.
    pub tier: MatchTier,
    /// Byte offset range in the source text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, tier: MatchTier) -> Self {
        Self {
            value,
            tier,
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
