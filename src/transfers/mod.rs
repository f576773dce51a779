// 📝 Transfer Records - One import line per transfer
// Six record kinds, each with its own fixed field layout

pub mod payroll;
pub mod split_payment;
pub mod standard;
pub mod tax;
pub mod zus;

pub use payroll::Payroll;
pub use split_payment::SplitPayment;
pub use standard::Standard;
pub use tax::Tax;
pub use zus::Zus;

use crate::error::ValidationError;
use crate::values::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field delimiter. The format has no escape for it.
pub const DELIMITER: char = '|';

// ============================================================================
// TRANSFER KIND
// ============================================================================

/// TransferKind - the record type, written as the first field of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Standard,
    Zus,
    TaxOffice,
    OtherTaxAuthority,
    Payroll,
    SplitPayment,
}

impl TransferKind {
    pub fn type_digit(&self) -> char {
        match self {
            TransferKind::Standard => '1',
            TransferKind::Zus => '2',
            TransferKind::TaxOffice => '3',
            TransferKind::OtherTaxAuthority => '4',
            TransferKind::Payroll => '5',
            TransferKind::SplitPayment => '6',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransferKind::Standard => "standard",
            TransferKind::Zus => "ZUS",
            TransferKind::TaxOffice => "tax office",
            TransferKind::OtherTaxAuthority => "tax authority",
            TransferKind::Payroll => "payroll",
            TransferKind::SplitPayment => "split payment",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (type {})", self.name(), self.type_digit())
    }
}

// ============================================================================
// TRANSFER
// ============================================================================

/// Transfer - any record that can appear in a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transfer {
    /// Type 1, transfer to an account in any bank
    Standard(Standard),
    /// Type 2, social insurance payment
    Zus(Zus),
    /// Type 3, payment to a tax office (urząd skarbowy)
    TaxOffice(Tax),
    /// Type 4, payment to any other tax authority
    OtherTaxAuthority(Tax),
    /// Type 5, salary payment; only valid in payroll packages
    Payroll(Payroll),
    /// Type 6, split VAT payment
    SplitPayment(SplitPayment),
}

impl Transfer {
    pub fn kind(&self) -> TransferKind {
        match self {
            Transfer::Standard(_) => TransferKind::Standard,
            Transfer::Zus(_) => TransferKind::Zus,
            Transfer::TaxOffice(_) => TransferKind::TaxOffice,
            Transfer::OtherTaxAuthority(_) => TransferKind::OtherTaxAuthority,
            Transfer::Payroll(_) => TransferKind::Payroll,
            Transfer::SplitPayment(_) => TransferKind::SplitPayment,
        }
    }

    pub fn is_payroll(&self) -> bool {
        matches!(self, Transfer::Payroll(_))
    }

    /// Check every field; stops at the first broken rule
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Transfer::Standard(t) => t.validate(),
            Transfer::Zus(t) => t.validate(),
            Transfer::TaxOffice(t) | Transfer::OtherTaxAuthority(t) => t.validate(),
            Transfer::Payroll(t) => t.validate(),
            Transfer::SplitPayment(t) => t.validate(),
        }
    }

    /// Validate, then render the import line (without a line break)
    pub fn marshal(&self) -> Result<String, ValidationError> {
        match self {
            Transfer::Standard(t) => t.marshal(),
            Transfer::Zus(t) => t.marshal(),
            Transfer::TaxOffice(t) => t.marshal(TransferKind::TaxOffice),
            Transfer::OtherTaxAuthority(t) => t.marshal(TransferKind::OtherTaxAuthority),
            Transfer::Payroll(t) => t.marshal(),
            Transfer::SplitPayment(t) => t.marshal(),
        }
    }

    /// Amounts carried by the record, in field order
    pub fn amounts(&self) -> Vec<Amount> {
        match self {
            Transfer::Standard(t) => vec![t.amount],
            Transfer::Zus(t) => vec![t.amount],
            Transfer::TaxOffice(t) | Transfer::OtherTaxAuthority(t) => vec![t.amount],
            Transfer::Payroll(t) => vec![t.amount],
            Transfer::SplitPayment(t) => vec![t.gross_amount, t.vat_amount],
        }
    }
}

impl From<Standard> for Transfer {
    fn from(t: Standard) -> Self {
        Transfer::Standard(t)
    }
}

impl From<Zus> for Transfer {
    fn from(t: Zus) -> Self {
        Transfer::Zus(t)
    }
}

impl From<Payroll> for Transfer {
    fn from(t: Payroll) -> Self {
        Transfer::Payroll(t)
    }
}

impl From<SplitPayment> for Transfer {
    fn from(t: SplitPayment) -> Self {
        Transfer::SplitPayment(t)
    }
}

// ============================================================================
// LINE BUILDER
// ============================================================================

/// Accumulates one import line: type digit, then each field followed by '|'
pub(crate) struct Line {
    buf: String,
}

impl Line {
    pub(crate) fn new(kind: TransferKind) -> Self {
        let mut buf = String::with_capacity(256);
        buf.push(kind.type_digit());
        buf.push(DELIMITER);
        Line { buf }
    }

    pub(crate) fn field(mut self, value: impl fmt::Display) -> Self {
        self.buf.push_str(&value.to_string());
        self.buf.push(DELIMITER);
        self
    }

    /// Absent values render as an empty field
    pub(crate) fn optional(self, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.field(value),
            None => self.field(""),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn test_type_digits_follow_kind() {
        let transfers: Vec<Transfer> = vec![
            fixtures::standard().into(),
            fixtures::zus().into(),
            Transfer::TaxOffice(fixtures::tax()),
            Transfer::OtherTaxAuthority(fixtures::tax()),
            fixtures::payroll().into(),
            fixtures::split_payment().into(),
        ];

        for (transfer, digit) in transfers.iter().zip(['1', '2', '3', '4', '5', '6']) {
            assert_eq!(transfer.kind().type_digit(), digit);
            let line = transfer.marshal().unwrap();
            assert!(line.starts_with(&format!("{}|", digit)), "{}", line);
            assert!(line.ends_with('|'));
        }
    }

    #[test]
    fn test_only_payroll_reports_payroll() {
        assert!(Transfer::from(fixtures::payroll()).is_payroll());
        assert!(!Transfer::from(fixtures::standard()).is_payroll());
    }

    #[test]
    fn test_split_payment_exposes_both_amounts() {
        let transfer = Transfer::from(fixtures::split_payment());
        assert_eq!(transfer.amounts(), vec![Amount(12350), Amount(2309)]);
    }

    #[test]
    fn test_line_builder_renders_absent_as_empty() {
        let line = Line::new(TransferKind::Zus)
            .field("a")
            .optional(None::<&str>)
            .field(Amount(150))
            .finish();
        assert_eq!(line, "2|a||1,50|");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransferKind::Payroll.to_string(), "payroll (type 5)");
    }
}
