// 💰 Value Types - Amounts, dates and enumerated field tags
// Every type here knows how to render itself as one field of an import line

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// AMOUNT
// ============================================================================

/// Amount - money as an integer count of grosze (1/100 PLN)
///
/// Never converted to floating point. Rendering drops the sign, so a
/// negative amount is written as its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub i64);

impl Amount {
    pub fn new(grosze: i64) -> Self {
        Amount(grosze)
    }

    pub fn grosze(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for Amount {
    fn from(grosze: i64) -> Self {
        Amount(grosze)
    }
}

/// Renders as "zloty" or "zloty,gg" (e.g. "100", "123,45", "0,01")
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // unsigned_abs keeps i64::MIN representable
        let magnitude = self.0.unsigned_abs();
        let zloty = magnitude / 100;
        let grosze = magnitude % 100;

        if grosze == 0 {
            write!(f, "{}", zloty)
        } else {
            write!(f, "{},{:02}", zloty, grosze)
        }
    }
}

// ============================================================================
// DATE
// ============================================================================

/// Date - execution date of a transfer, without time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(pub NaiveDate);

impl Date {
    /// Returns None for dates that do not exist in the calendar
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Renders as DD-MM-RRRR (e.g. "01-09-2020"); the year is not padded
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.0.day(), self.0.month(), self.0.year())
    }
}

// ============================================================================
// TRANSFER MODE
// ============================================================================

/// TransferMode - how the bank routes the transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransferMode {
    /// Internal bank transfer (0)
    Internal,
    /// Standard interbank transfer via Elixir (1)
    Elixir,
    /// High-value RTGS transfer (6)
    Sorbnet,
    /// Instant transfer via Express Elixir (8)
    ExpressElixir,
}

impl TransferMode {
    pub const ALL: [TransferMode; 4] = [
        TransferMode::Internal,
        TransferMode::Elixir,
        TransferMode::Sorbnet,
        TransferMode::ExpressElixir,
    ];

    pub fn code(&self) -> u8 {
        match self {
            TransferMode::Internal => 0,
            TransferMode::Elixir => 1,
            TransferMode::Sorbnet => 6,
            TransferMode::ExpressElixir => 8,
        }
    }
}

impl TryFrom<u8> for TransferMode {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TransferMode::Internal),
            1 => Ok(TransferMode::Elixir),
            6 => Ok(TransferMode::Sorbnet),
            8 => Ok(TransferMode::ExpressElixir),
            other => Err(ValidationError::new(
                "transfer mode",
                format!("must be one of: 0, 1, 6, 8, got {}", other),
            )),
        }
    }
}

impl From<TransferMode> for u8 {
    fn from(mode: TransferMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// IDENTIFIER TYPE
// ============================================================================

/// IdentifierType - which kind of identifier a tax payer is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    /// NIP, 10 digits
    #[serde(rename = "N")]
    Nip,
    /// REGON, 9 or 14 digits
    #[serde(rename = "R")]
    Regon,
    /// PESEL, 11 digits
    #[serde(rename = "P")]
    Pesel,
    /// National ID card, 8-9 characters
    #[serde(rename = "1")]
    IdCard,
    /// Passport, up to 14 characters
    #[serde(rename = "2")]
    Passport,
    /// Any other document, up to 14 characters
    #[serde(rename = "3")]
    Other,
}

impl IdentifierType {
    pub fn tag(&self) -> char {
        match self {
            IdentifierType::Nip => 'N',
            IdentifierType::Regon => 'R',
            IdentifierType::Pesel => 'P',
            IdentifierType::IdCard => '1',
            IdentifierType::Passport => '2',
            IdentifierType::Other => '3',
        }
    }
}

impl TryFrom<char> for IdentifierType {
    type Error = ValidationError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'N' => Ok(IdentifierType::Nip),
            'R' => Ok(IdentifierType::Regon),
            'P' => Ok(IdentifierType::Pesel),
            '1' => Ok(IdentifierType::IdCard),
            '2' => Ok(IdentifierType::Passport),
            '3' => Ok(IdentifierType::Other),
            _ => Err(ValidationError::new(
                "identifier type",
                "must be one of: N (NIP), R (REGON), P (PESEL), 1 (ID), 2 (Passport), 3 (Other)",
            )),
        }
    }
}

impl FromStr for IdentifierType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => IdentifierType::try_from(tag),
            _ => Err(ValidationError::new("identifier type", "must be a single character tag")),
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ============================================================================
// PERIOD TYPE
// ============================================================================

/// PeriodType - granularity of the tax period a payment settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    #[serde(rename = "R")]
    Year,
    #[serde(rename = "P")]
    HalfYear,
    #[serde(rename = "K")]
    Quarter,
    #[serde(rename = "M")]
    Month,
    #[serde(rename = "D")]
    Decade,
    #[serde(rename = "J")]
    Day,
}

impl PeriodType {
    pub fn tag(&self) -> char {
        match self {
            PeriodType::Year => 'R',
            PeriodType::HalfYear => 'P',
            PeriodType::Quarter => 'K',
            PeriodType::Month => 'M',
            PeriodType::Decade => 'D',
            PeriodType::Day => 'J',
        }
    }
}

impl TryFrom<char> for PeriodType {
    type Error = ValidationError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'R' => Ok(PeriodType::Year),
            'P' => Ok(PeriodType::HalfYear),
            'K' => Ok(PeriodType::Quarter),
            'M' => Ok(PeriodType::Month),
            'D' => Ok(PeriodType::Decade),
            'J' => Ok(PeriodType::Day),
            _ => Err(ValidationError::new(
                "period type",
                "must be one of: R (year), P (half), K (quarter), M (month), D (decade), J (day)",
            )),
        }
    }
}

impl FromStr for PeriodType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => PeriodType::try_from(tag),
            _ => Err(ValidationError::new("period type", "must be a single character tag")),
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
